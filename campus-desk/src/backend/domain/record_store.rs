//! Append-only record stores and their newest-first projections.
//!
//! A store keeps records in insertion order. Records are only ever appended or
//! the whole store is cleared (or replaced by a demo seed); there is no update or
//! per-record delete. Projections are recomputed from the current contents on
//! every call and never reorder the underlying records.

use super::values::Scalar;

/// Filter value that selects every record
pub const ALL: &str = "All";

/// A record with a store-assigned numeric id
pub trait Keyed {
    fn id(&self) -> u64;
}

/// A record whose fields can be looked up by name for filtering and rendering
pub trait TableRecord {
    /// Value of the named field, `None` when the record has no such field
    fn field(&self, name: &str) -> Option<Scalar>;

    /// String form used for equality filters; missing fields compare as ""
    fn field_text(&self, name: &str) -> String {
        self.field(name).map(|value| value.to_string()).unwrap_or_default()
    }
}

/// Form input that can be turned into a stored record
pub trait NewRecord {
    type Record;

    /// Build the record with the assigned id, filling defaults from `today` (YYYY-MM-DD)
    fn into_record(self, id: u64, today: &str) -> Self::Record;
}

/// Ordered, append-only collection of records of one entity type
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> Default for RecordStore<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T: Keyed> RecordStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with seed records
    pub fn from_seed(seed: Vec<T>) -> Self {
        Self { records: seed }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Id for the next record: `1` for an empty store, otherwise the last
    /// record's id plus one. Only the last record is inspected.
    pub fn next_id(&self) -> u64 {
        self.records.last().map(|record| record.id() + 1).unwrap_or(1)
    }

    /// Append a new record built from form input and return it
    pub fn add<N>(&mut self, input: N, today: &str) -> &T
    where
        N: NewRecord<Record = T>,
    {
        let record = input.into_record(self.next_id(), today);
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// Remove every record
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Replace the whole contents, used to restore a demo seed
    pub fn replace_all(&mut self, seed: Vec<T>) {
        self.records = seed;
    }
}

impl<T: Keyed + TableRecord> RecordStore<T> {
    /// Newest-first view of the store. With `ALL` every record is returned,
    /// otherwise only records whose `field` stringifies to `value`.
    pub fn project(&self, field: &str, value: &str) -> Vec<&T> {
        project(&self.records, field, value)
    }
}

/// Newest-first projection over any record slice
pub fn project<'a, T: TableRecord>(records: &'a [T], field: &str, value: &str) -> Vec<&'a T> {
    records
        .iter()
        .rev()
        .filter(|record| value == ALL || record.field_text(field) == value)
        .collect()
}
