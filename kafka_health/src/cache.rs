mod file_cache;
mod memory_cache;

pub use file_cache::*;
pub use memory_cache::*;

/// Keyed store for raw tool output, so a report can be replayed without the cluster.
pub trait OutputCache: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, anyhow::Error>;

    fn put(&self, key: &str, raw: &str) -> Result<(), anyhow::Error>;
}

pub fn group_list_key() -> String {
    "kafka_groups".to_owned()
}

pub fn group_detail_key(group: &str) -> String {
    format!("kafka_detail_{group}")
}
