use crate::error::MissingColumnError;
use crate::table::{coerce_number, Record};
use anyhow::bail;
use getset::Getters;

/// Ordered rows sharing one column set. Every operation returns a new store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct RecordStore {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if !unique.contains(&column) {
                unique.push(column);
            }
        }

        Self {
            columns: unique,
            records: Vec::new(),
        }
    }

    /// Appends a record whose column set must match the store's. The record is stored in
    /// the store's column order, whatever order its fields were inserted in.
    pub fn push(&mut self, record: Record) -> Result<(), anyhow::Error> {
        if record.len() != self.columns.len() {
            bail!(
                "Record columns {:?} do not match store columns {:?}",
                record.columns().collect::<Vec<_>>(),
                self.columns
            )
        }

        let mut ordered = Record::new();
        for column in &self.columns {
            let Some(value) = record.get(column) else {
                bail!(
                    "Record columns {:?} do not match store columns {:?}",
                    record.columns().collect::<Vec<_>>(),
                    self.columns
                )
            };
            ordered.insert(column.as_str(), value);
        }

        self.records.push(ordered);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Keeps only `keys`, in the given order. A key missing from the header or from any
    /// record is an error rather than a silently shorter row.
    pub fn project(&self, keys: &[&str]) -> Result<RecordStore, anyhow::Error> {
        if !self.columns.is_empty() {
            let missing = keys
                .iter()
                .find(|k| !self.columns.iter().any(|c| c.as_str() == **k));
            if let Some(missing) = missing {
                return Err(MissingColumnError {
                    column: missing.to_string(),
                    row: None,
                }
                .into());
            }
        }

        let mut projected = RecordStore::new(keys.iter().copied());
        for (row, record) in self.records.iter().enumerate() {
            let mut narrowed = Record::new();
            for key in keys {
                let Some(value) = record.get(key) else {
                    return Err(MissingColumnError {
                        column: key.to_string(),
                        row: Some(row),
                    }
                    .into());
                };
                narrowed.insert(*key, value);
            }
            projected.records.push(narrowed);
        }

        Ok(projected)
    }

    pub fn filter_equal(&self, key: &str, value: &str) -> RecordStore {
        self.retain(|record| record.get(key) == Some(value))
    }

    /// Keeps records whose coerced `key` is strictly positive.
    pub fn filter_positive(&self, key: &str) -> RecordStore {
        self.retain(|record| coerce_number(record.get(key).unwrap_or_default()) > 0)
    }

    /// Distinct values of `key` in first-seen order.
    pub fn unique_values(&self, key: &str) -> Vec<String> {
        let mut values: Vec<String> = Vec::new();
        for value in self.records.iter().filter_map(|r| r.get(key)) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_owned());
            }
        }
        values
    }

    pub fn sum_by_key(&self, key: &str) -> u64 {
        self.records
            .iter()
            .map(|r| coerce_number(r.get(key).unwrap_or_default()))
            .fold(0u64, |acc, v| acc.saturating_add(v))
    }

    /// Stable sort on the coerced value of `key`; equal values keep their relative order
    /// in both directions.
    pub fn sort_by(&self, key: &str, descending: bool) -> RecordStore {
        let mut records = self.records.clone();
        let sort_key = |r: &Record| coerce_number(r.get(key).unwrap_or_default());
        if descending {
            records.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));
        } else {
            records.sort_by_key(sort_key);
        }

        RecordStore {
            columns: self.columns.clone(),
            records,
        }
    }

    fn retain(&self, predicate: impl Fn(&Record) -> bool) -> RecordStore {
        RecordStore {
            columns: self.columns.clone(),
            records: self.records.iter().filter(|&r| predicate(r)).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
