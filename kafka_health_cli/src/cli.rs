use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "kafka-health",
    version,
    about = "Consumer group lag report for a Kafka cluster"
)]
pub struct Cli {
    /// Kafka bootstrap server, host:port
    #[arg(short, long)]
    pub server: Option<String>,

    /// Consumer group to describe; every group on the cluster when omitted
    #[arg(short, long)]
    pub group: Option<String>,

    /// Only report on listed groups matching this regex
    #[arg(short = 'p', long)]
    pub group_pattern: Option<String>,

    /// Replay tool output cached by an earlier run
    #[arg(short, long)]
    pub cache: bool,

    /// Lag summed per topic
    #[arg(short = 't', long)]
    pub by_topic: bool,

    /// Lag summed per host and topic
    #[arg(short = 'H', long)]
    pub by_host: bool,

    #[arg(short, long)]
    pub debug: bool,

    /// Kafka distribution directory holding bin/kafka-consumer-groups
    #[arg(long)]
    pub kafka_root: Option<PathBuf>,

    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Settings file name, extension optional
    #[arg(long, default_value = "appsettings")]
    pub settings: String,
}
