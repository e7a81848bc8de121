use crate::reports::{LAG, TOPIC};
use crate::table::{Record, RecordStore};
use anyhow::Context;

/// Positive lag summed per topic, largest first.
pub fn report_lag_per_topic(store: &RecordStore) -> Result<RecordStore, anyhow::Error> {
    let lagging = store
        .project(&[TOPIC, LAG])
        .context("While selecting topic lag columns")?
        .filter_positive(LAG);

    let mut report = RecordStore::new([TOPIC, LAG]);
    for topic in lagging.unique_values(TOPIC) {
        let lag = lagging.filter_equal(TOPIC, &topic).sum_by_key(LAG);
        report.push(Record::new().with(TOPIC, topic).with(LAG, lag.to_string()))?;
    }

    Ok(report.sort_by(LAG, true))
}
