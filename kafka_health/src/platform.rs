use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Operating systems the Kafka distribution ships command scripts for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    Windows,
}

impl Platform {
    pub fn current() -> Option<Self> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "linux" => Some(Platform::Linux),
            "windows" => Some(Platform::Windows),
            _ => None,
        }
    }

    pub fn script_extension(&self) -> &'static str {
        match self {
            Platform::Linux => "sh",
            Platform::Windows => "bat",
        }
    }

    pub fn bin_dir(&self, kafka_root: &Path) -> PathBuf {
        match self {
            Platform::Linux => kafka_root.join("bin"),
            Platform::Windows => kafka_root.join("bin").join("windows"),
        }
    }

    /// e.g. `<root>/bin/kafka-consumer-groups.sh`
    pub fn tool_path(&self, kafka_root: &Path, tool: &str) -> PathBuf {
        self.bin_dir(kafka_root)
            .join(format!("{tool}.{}", self.script_extension()))
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Linux => write!(f, "linux"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}
