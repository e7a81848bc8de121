mod lag_per_host;
mod lag_per_topic;

pub use lag_per_host::*;
pub use lag_per_topic::*;

use crate::table::RecordStore;
use std::fmt::{Display, Formatter};

pub const HOST: &str = "HOST";
pub const TOPIC: &str = "TOPIC";
pub const LAG: &str = "LAG";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportKind {
    ByHost,
    ByTopic,
}

impl ReportKind {
    pub fn run(&self, store: &RecordStore) -> Result<RecordStore, anyhow::Error> {
        match self {
            ReportKind::ByHost => report_lag_per_host(store),
            ReportKind::ByTopic => report_lag_per_topic(store),
        }
    }
}

impl Display for ReportKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportKind::ByHost => write!(f, "by-host"),
            ReportKind::ByTopic => write!(f, "by-topic"),
        }
    }
}
