use crate::reports::{HOST, LAG, TOPIC};
use crate::table::{Record, RecordStore};
use anyhow::Context;

/// Positive lag summed per (host, topic) pair, largest first. Pairs are emitted host by
/// host, so equal lags keep first-seen host then topic order.
pub fn report_lag_per_host(store: &RecordStore) -> Result<RecordStore, anyhow::Error> {
    let lagging = store
        .project(&[HOST, TOPIC, LAG])
        .context("While selecting host lag columns")?
        .filter_positive(LAG);

    let mut report = RecordStore::new([HOST, TOPIC, LAG]);
    for host in lagging.unique_values(HOST) {
        let host_lags = lagging.filter_equal(HOST, &host);
        for topic in host_lags.unique_values(TOPIC) {
            let lag = host_lags.filter_equal(TOPIC, &topic).sum_by_key(LAG);
            report.push(
                Record::new()
                    .with(HOST, host.as_str())
                    .with(TOPIC, topic)
                    .with(LAG, lag.to_string()),
            )?;
        }
    }

    Ok(report.sort_by(LAG, true))
}
