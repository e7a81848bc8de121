use crate::cache::{group_detail_key, group_list_key, OutputCache};
use crate::connection_settings::ConnectionSettings;
use anyhow::{bail, Context};
use regex::Regex;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, warn};

pub const CONSUMER_GROUPS_TOOL: &str = "kafka-consumer-groups";

/// Runs `kafka-consumer-groups` and hands back its stdout untouched.
///
/// With `use_cache` set, a cached output is returned instead of running the tool. Fresh
/// output is always written to the cache (when there is one) so a later cached run can
/// replay it.
pub struct ConsumerGroupsClient {
    settings: ConnectionSettings,
    cache: Option<Box<dyn OutputCache>>,
    use_cache: bool,
}

impl ConsumerGroupsClient {
    pub fn new(
        settings: ConnectionSettings,
        cache: Option<Box<dyn OutputCache>>,
        use_cache: bool,
    ) -> Self {
        Self {
            settings,
            cache,
            use_cache,
        }
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    pub async fn fetch_group_list(&self) -> Result<String, anyhow::Error> {
        self.fetch(&group_list_key(), &["--list"])
            .await
            .context("While fetching consumer group list")
    }

    pub async fn fetch_group_detail(&self, group: &str) -> Result<String, anyhow::Error> {
        if group.is_empty() {
            bail!("No consumer group specified")
        }

        self.fetch(&group_detail_key(group), &["--group", group, "--describe"])
            .await
            .with_context(|| format!("While describing consumer group {group}"))
    }

    async fn fetch(&self, key: &str, args: &[&str]) -> Result<String, anyhow::Error> {
        if let Some(cache) = self.cache.as_deref() {
            if self.use_cache {
                match cache.get(key) {
                    Ok(Some(raw)) => {
                        debug!("Using cached output for {key}");
                        return Ok(raw);
                    }
                    Ok(None) => debug!("No cached output for {key}"),
                    Err(e) => warn!("Cache lookup for {key} failed: {e:?}"),
                }
            }
        }

        let raw = self.run_tool(args).await?;

        if let Some(cache) = self.cache.as_deref() {
            if let Err(e) = cache.put(key, &raw) {
                warn!("Could not cache output for {key}: {e:?}");
            }
        }

        Ok(raw)
    }

    async fn run_tool(&self, args: &[&str]) -> Result<String, anyhow::Error> {
        let mut command = Command::try_from(&self.settings)?;
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("Running {:?}", command.as_std());

        let output = command.output().await;
        let output = output.with_context(|| format!("While running {:?}", command.as_std()))?;

        // a failing tool may still have printed part of the table, report on what we got
        if !output.status.success() {
            error!(
                "Error running cmd: {:?} ({}): {}",
                command.as_std(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Keeps groups matching `pattern`, all of them when there is none.
pub fn filter_groups(groups: Vec<String>, pattern: Option<&Regex>) -> Vec<String> {
    match pattern {
        Some(pattern) => groups.into_iter().filter(|g| pattern.is_match(g)).collect(),
        None => groups,
    }
}
