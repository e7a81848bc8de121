use crate::table::{Record, RecordStore};
use tracing::debug;

/// Parses whitespace-delimited tool output. The first non-empty line is the header;
/// rows whose field count differs from the header are skipped.
pub fn parse(raw: &str) -> RecordStore {
    let mut rows = raw
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|fields| !fields.is_empty());

    let Some(header) = rows.next() else {
        return RecordStore::default();
    };

    let mut store = RecordStore::new(header.iter().copied());
    let mut skipped = 0usize;
    for fields in rows {
        if fields.len() != header.len() {
            skipped += 1;
            continue;
        }

        let record = header.iter().copied().zip(fields).collect::<Record>();
        // a duplicated header name collapses both into the same column set
        if let Err(e) = store.push(record) {
            debug!("Skipping row: {e}");
            skipped += 1;
        }
    }

    if skipped > 0 {
        debug!("Skipped {skipped} rows not matching header {header:?}");
    }

    store
}

/// Parses the output of `kafka-consumer-groups --list`: the first field of every
/// non-empty line, duplicates dropped.
pub fn parse_group_list(raw: &str) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for group in raw.lines().filter_map(|line| line.split_whitespace().next()) {
        if !groups.iter().any(|g| g == group) {
            groups.push(group.to_owned());
        }
    }
    groups
}
