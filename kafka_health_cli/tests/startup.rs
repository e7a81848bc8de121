use kafka_health::cache::{group_detail_key, group_list_key, MemoryCache, OutputCache};
use kafka_health::connection_settings::ConnectionSettings;
use kafka_health::consumer_groups::ConsumerGroupsClient;
use kafka_health::platform::Platform;
use kafka_health_cli::app_config::AppConfig;
use kafka_health_cli::startup::{run, write_reports};
use std::path::PathBuf;

const BILLING: &str = "GROUP TOPIC PARTITION LAG HOST\n\
                       billing orders 0 5 /h1\n\
                       billing orders 1 3 /h2\n";

const SHIPPING: &str = "TOPIC LAG HOST\nlabels 0 /h1\n";

fn config() -> AppConfig {
    AppConfig {
        server: "broker:9092".to_owned(),
        group: None,
        group_pattern: None,
        use_cache: true,
        by_host: true,
        by_topic: true,
        debug: false,
        kafka_root: PathBuf::from("/nonexistent/kafka-health/kafka"),
        cache_dir: PathBuf::from("/nonexistent/kafka-health/cache"),
    }
}

/// Client that can only answer from the cache; the tool path does not exist.
fn client(entries: &[(String, &str)]) -> ConsumerGroupsClient {
    let cache = MemoryCache::new();
    for (key, raw) in entries {
        cache.put(key, raw).unwrap();
    }

    ConsumerGroupsClient::new(
        ConnectionSettings {
            bootstrap_server: "broker:9092".to_owned(),
            kafka_root: PathBuf::from("/nonexistent/kafka-health/kafka"),
            platform: Platform::Linux,
        },
        Some(Box::new(cache) as Box<dyn OutputCache>),
        true,
    )
}

async fn output(config: &AppConfig, client: &ConsumerGroupsClient) -> String {
    let mut out = Vec::new();
    write_reports(config, &config.report_kinds(), client, &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn reports_every_listed_group() {
    let client = client(&[
        (group_list_key(), "billing\nshipping\n"),
        (group_detail_key("billing"), BILLING),
        (group_detail_key("shipping"), SHIPPING),
    ]);

    let expected = "Processing Consumer: billing\n\
                    HOST   TOPIC  LAG\n\
                    \x20/h1  orders    5\n\
                    \x20/h2  orders    3\n\
                    \x20TOPIC  LAG\n\
                    orders    8\n\
                    Processing Consumer: shipping\n\
                    No lags greater than 0\n\
                    No lags greater than 0\n";
    assert_eq!(output(&config(), &client).await, expected);
}

#[tokio::test]
async fn nothing_runs_without_a_report_selection() {
    // no server either: the selection check comes before any connection settings
    let config = AppConfig {
        server: String::new(),
        by_host: false,
        by_topic: false,
        ..config()
    };

    assert!(run(config, Platform::Linux).await.is_ok());
}

#[tokio::test]
async fn single_group_skips_the_group_list() {
    let client = client(&[(group_detail_key("billing"), BILLING)]);
    let config = AppConfig {
        group: Some("billing".to_owned()),
        by_host: false,
        ..config()
    };

    assert_eq!(
        output(&config, &client).await,
        "Processing Consumer: billing\n TOPIC  LAG\norders    8\n"
    );
}

#[tokio::test]
async fn group_pattern_filters_the_list() {
    let client = client(&[
        (group_list_key(), "billing\nshipping\n"),
        (group_detail_key("shipping"), SHIPPING),
    ]);
    let config = AppConfig {
        group_pattern: Some("^ship".to_owned()),
        by_host: false,
        ..config()
    };

    assert_eq!(
        output(&config, &client).await,
        "Processing Consumer: shipping\nNo lags greater than 0\n"
    );
}

#[tokio::test]
async fn invalid_group_pattern_is_an_error() {
    let client = client(&[(group_list_key(), "billing\n")]);
    let config = AppConfig {
        group_pattern: Some("(".to_owned()),
        ..config()
    };

    let mut out = Vec::new();
    assert!(write_reports(&config, &config.report_kinds(), &client, &mut out)
        .await
        .is_err());
}

#[tokio::test]
async fn group_pattern_is_unused_for_a_single_group() {
    let client = client(&[(group_detail_key("billing"), BILLING)]);
    let config = AppConfig {
        group: Some("billing".to_owned()),
        group_pattern: Some("(".to_owned()),
        by_host: false,
        ..config()
    };

    assert_eq!(
        output(&config, &client).await,
        "Processing Consumer: billing\n TOPIC  LAG\norders    8\n"
    );
}

#[tokio::test]
async fn failing_group_does_not_stop_the_others() {
    let client = client(&[
        (group_list_key(), "unknown\nbilling\n"),
        (group_detail_key("billing"), BILLING),
    ]);
    let config = AppConfig {
        by_host: false,
        ..config()
    };

    assert_eq!(
        output(&config, &client).await,
        "Processing Consumer: unknown\n\
         Processing Consumer: billing\n \
         TOPIC  LAG\n\
         orders    8\n"
    );
}

#[tokio::test]
async fn missing_columns_skip_only_that_report() {
    let client = client(&[(group_detail_key("billing"), "TOPIC LAG\norders 2\n")]);
    let config = AppConfig {
        group: Some("billing".to_owned()),
        ..config()
    };

    assert_eq!(
        output(&config, &client).await,
        "Processing Consumer: billing\n TOPIC  LAG\norders    2\n"
    );
}

#[tokio::test]
async fn missing_group_list_is_an_error() {
    let client = client(&[]);

    let config = config();

    let mut out = Vec::new();
    assert!(write_reports(&config, &config.report_kinds(), &client, &mut out)
        .await
        .is_err());
}
