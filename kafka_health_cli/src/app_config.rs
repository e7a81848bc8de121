use crate::cli::Cli;
use crate::error::ApplicationError;
use anyhow::{bail, Context};
use config::Config;
use kafka_health::connection_settings::ConnectionSettings;
use kafka_health::platform::Platform;
use kafka_health::reports::ReportKind;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub server: String,
    pub group: Option<String>,
    pub group_pattern: Option<String>,
    pub use_cache: bool,
    pub by_host: bool,
    pub by_topic: bool,
    pub debug: bool,
    pub kafka_root: PathBuf,
    pub cache_dir: PathBuf,
}

impl AppConfig {
    /// Defaults, then the settings file, then `App__*` environment variables, then flags.
    pub fn build(cli: &Cli) -> Result<Self, anyhow::Error> {
        let base_dir = executable_dir();

        let config = Config::builder()
            .set_default("server", "")?
            .set_default("use_cache", false)?
            .set_default("by_host", false)?
            .set_default("by_topic", false)?
            .set_default("debug", false)?
            .set_default("kafka_root", path_value(&base_dir.join("kafka")))?
            .set_default("cache_dir", path_value(&base_dir))?
            .add_source(config::File::with_name(&cli.settings).required(false))
            .add_source(config::Environment::with_prefix("App").separator("__"))
            .set_override_option("server", cli.server.clone())?
            .set_override_option("group", cli.group.clone())?
            .set_override_option("group_pattern", cli.group_pattern.clone())?
            .set_override_option("use_cache", cli.cache.then_some(true))?
            .set_override_option("by_host", cli.by_host.then_some(true))?
            .set_override_option("by_topic", cli.by_topic.then_some(true))?
            .set_override_option("debug", cli.debug.then_some(true))?
            .set_override_option("kafka_root", cli.kafka_root.as_deref().map(path_value))?
            .set_override_option("cache_dir", cli.cache_dir.as_deref().map(path_value))?
            .build()
            .context("While building config")?;

        let deserialized_config: AppConfig = config
            .try_deserialize()
            .context("While deserializing config")?;

        Ok(deserialized_config)
    }

    /// Host report first, then topic report.
    pub fn report_kinds(&self) -> Vec<ReportKind> {
        let mut kinds = Vec::with_capacity(2);
        if self.by_host {
            kinds.push(ReportKind::ByHost);
        }
        if self.by_topic {
            kinds.push(ReportKind::ByTopic);
        }
        kinds
    }

    /// Empty group means "all groups".
    pub fn single_group(&self) -> Option<&str> {
        self.group.as_deref().map(str::trim).filter(|g| !g.is_empty())
    }

    pub fn connection_settings(
        &self,
        platform: Platform,
    ) -> Result<ConnectionSettings, anyhow::Error> {
        if self.server.trim().is_empty() {
            bail!("No bootstrap server specified, use --server or App__SERVER")
        }

        Ok(ConnectionSettings {
            bootstrap_server: self.server.trim().to_owned(),
            kafka_root: self.kafka_root.clone(),
            platform,
        })
    }
}

pub fn current_platform() -> Result<Platform, ApplicationError> {
    Platform::current()
        .ok_or_else(|| ApplicationError::UnsupportedPlatform(std::env::consts::OS.to_owned()))
}

fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn path_value(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
