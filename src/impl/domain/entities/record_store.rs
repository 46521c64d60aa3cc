use fractic_server_error::ServerError;

use crate::{entities::Remito, errors::RecordIndexOutOfBounds};

/// Scanned records, newest first.
///
/// Records have no identity beyond their position: deletion is positional and
/// the same barcode may be stored any number of times.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Remito>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_front(&mut self, record: Remito) {
        self.records.insert(0, record);
    }

    /// Removes the record at `index`. An out-of-range index is rejected and
    /// leaves the store untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<Remito, ServerError> {
        if index >= self.records.len() {
            return Err(RecordIndexOutOfBounds::new(index, self.records.len()));
        }
        Ok(self.records.remove(index))
    }

    /// Removes every record, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn snapshot(&self) -> &[Remito] {
        &self.records
    }
}
