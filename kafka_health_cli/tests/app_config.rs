use clap::Parser;
use kafka_health::platform::Platform;
use kafka_health::reports::ReportKind;
use kafka_health_cli::app_config::AppConfig;
use kafka_health_cli::cli::Cli;
use std::path::PathBuf;

fn build(args: &[&str]) -> AppConfig {
    let mut argv = vec!["kafka-health", "--settings", "missing-test-settings"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    AppConfig::build(&cli).unwrap()
}

#[test]
fn flags_override_defaults() {
    let config = build(&[
        "-s",
        "broker:9092",
        "-g",
        "billing",
        "--by-topic",
        "-c",
        "--kafka-root",
        "/opt/kafka",
        "--cache-dir",
        "/tmp/kafka-health",
    ]);

    assert_eq!(config.server, "broker:9092");
    assert_eq!(config.group.as_deref(), Some("billing"));
    assert!(config.use_cache);
    assert!(config.by_topic);
    assert!(!config.by_host);
    assert!(!config.debug);
    assert_eq!(config.kafka_root, PathBuf::from("/opt/kafka"));
    assert_eq!(config.cache_dir, PathBuf::from("/tmp/kafka-health"));
}

#[test]
fn defaults_apply_without_flags() {
    let config = build(&["-s", "broker:9092"]);

    assert_eq!(config.group, None);
    assert_eq!(config.group_pattern, None);
    assert!(!config.use_cache);
    assert!(config.report_kinds().is_empty());
    assert!(config.kafka_root.ends_with("kafka"));
}

#[test]
fn host_report_comes_before_topic_report() {
    let config = build(&["-s", "broker:9092", "-t", "-H"]);

    assert_eq!(
        config.report_kinds(),
        vec![ReportKind::ByHost, ReportKind::ByTopic]
    );
}

#[test]
fn empty_group_means_all_groups() {
    assert_eq!(build(&["-s", "b:9092", "-g", ""]).single_group(), None);
    assert_eq!(build(&["-s", "b:9092", "-g", "  "]).single_group(), None);
    assert_eq!(
        build(&["-s", "b:9092", "-g", "billing"]).single_group(),
        Some("billing")
    );
}

#[test]
fn server_is_required_for_connection_settings() {
    let config = build(&["-t"]);
    assert!(config.connection_settings(Platform::Linux).is_err());

    let config = build(&["-s", " broker:9092 ", "-t"]);
    let settings = config.connection_settings(Platform::Windows).unwrap();
    assert_eq!(settings.bootstrap_server, "broker:9092");
    assert_eq!(settings.platform, Platform::Windows);
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["kafka-health", "--by-partition"]).is_err());
}
