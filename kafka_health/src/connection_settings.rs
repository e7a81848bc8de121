use crate::consumer_groups::CONSUMER_GROUPS_TOOL;
use crate::platform::Platform;
use anyhow::bail;
use std::path::PathBuf;
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub bootstrap_server: String,
    pub kafka_root: PathBuf,
    pub platform: Platform,
}

/// Base `kafka-consumer-groups` invocation, without the action arguments.
impl TryFrom<&ConnectionSettings> for Command {
    type Error = anyhow::Error;

    fn try_from(value: &ConnectionSettings) -> Result<Self, Self::Error> {
        if value.bootstrap_server.trim().is_empty() {
            bail!("No bootstrap server specified")
        }

        let tool = value
            .platform
            .tool_path(&value.kafka_root, CONSUMER_GROUPS_TOOL);

        let mut command = Command::new(tool);
        command
            .arg("--bootstrap-server")
            .arg(value.bootstrap_server.trim());

        Ok(command)
    }
}
