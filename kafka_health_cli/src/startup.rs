use crate::app_config::AppConfig;
use anyhow::Context;
use kafka_health::cache::{FileCache, OutputCache};
use kafka_health::consumer_groups::{filter_groups, ConsumerGroupsClient};
use kafka_health::platform::Platform;
use kafka_health::reports::ReportKind;
use kafka_health::table::{parse, parse_group_list, render};
use regex::Regex;
use std::io::Write;
use tracing::{error, info, warn};

pub const NO_REPORT_SELECTED: &str = "Error: Output by Topic or Host not specified";

pub async fn run(config: AppConfig, platform: Platform) -> Result<(), anyhow::Error> {
    let kinds = config.report_kinds();
    if kinds.is_empty() {
        println!("{NO_REPORT_SELECTED}");
        return Ok(());
    }

    let settings = config
        .connection_settings(platform)
        .context("While building connection settings")?;
    let cache: Box<dyn OutputCache> = Box::new(FileCache::new(config.cache_dir.clone()));
    let client = ConsumerGroupsClient::new(settings, Some(cache), config.use_cache);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_reports(&config, &kinds, &client, &mut out).await
}

/// Writes one block per consumer group: a `Processing Consumer` line followed by the
/// `kinds` reports. A group that cannot be described is logged and skipped.
pub async fn write_reports(
    config: &AppConfig,
    kinds: &[ReportKind],
    client: &ConsumerGroupsClient,
    out: &mut impl Write,
) -> Result<(), anyhow::Error> {
    let groups = match config.single_group() {
        Some(group) => vec![group.to_owned()],
        None => {
            let pattern = config
                .group_pattern
                .as_deref()
                .map(Regex::new)
                .transpose()
                .context("While compiling group pattern")?;

            let raw = client.fetch_group_list().await?;
            filter_groups(parse_group_list(&raw), pattern.as_ref())
        }
    };

    if groups.is_empty() {
        warn!("No consumer groups found on {}", client.settings().bootstrap_server);
    }
    info!("Reporting {} consumer group(s)", groups.len());

    for group in groups {
        writeln!(out, "Processing Consumer: {group}")?;

        let raw = match client.fetch_group_detail(&group).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("{e:?}");
                continue;
            }
        };

        let store = parse(&raw);
        for kind in kinds {
            match kind.run(&store) {
                Ok(report) => writeln!(out, "{}", render(&report))?,
                Err(e) => error!("While building {kind} report for group {group}: {e:?}"),
            }
        }
    }

    out.flush().context("While flushing report output")?;

    Ok(())
}
