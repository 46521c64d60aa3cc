use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use fractic_server_error::ServerError;
use log::{debug, info};

use crate::{
    data::repositories::remitos_repository_impl::RemitosRepositoryImpl,
    domain::{logic::export_naming::export_file_name, repositories::remitos_repository::RemitosRepository},
    entities::{ExportFormat, RecordStore, Remito},
    errors::EmptyStore,
};

pub trait ScanUsecase {
    /// Decodes `raw` (surrounding whitespace ignored) and stores the result at
    /// the front. Rejected input leaves the store untouched.
    fn scan(&self, store: &mut RecordStore, raw: &str) -> Result<Remito, ServerError>;

    fn delete(&self, store: &mut RecordStore, index: usize) -> Result<Remito, ServerError>;

    /// Clears every record, returning how many were removed. Fails with
    /// `EmptyStore` when there is nothing to clear.
    fn clear(&self, store: &mut RecordStore) -> Result<usize, ServerError>;

    /// Writes the store to a timestamped file in `dir` and returns its path.
    /// Fails with `EmptyStore`, writing nothing, when there are no records.
    fn export(
        &self,
        store: &RecordStore,
        dir: &Path,
        format: ExportFormat,
        now: NaiveDateTime,
    ) -> Result<PathBuf, ServerError>;
}

pub(crate) struct ScanUsecaseImpl<
    R1 = RemitosRepositoryImpl, // Default.
> where
    R1: RemitosRepository,
{
    remitos_repository: R1,
}

impl<R1> ScanUsecase for ScanUsecaseImpl<R1>
where
    R1: RemitosRepository,
{
    fn scan(&self, store: &mut RecordStore, raw: &str) -> Result<Remito, ServerError> {
        let raw = raw.trim();
        let record = self
            .remitos_repository
            .decode(raw)
            .inspect_err(|e| debug!("rejected barcode {:?}: {:?}", raw, e))?;
        debug!("stored {} (records: {})", record.remito, store.len() + 1);
        store.insert_front(record.clone());
        Ok(record)
    }

    fn delete(&self, store: &mut RecordStore, index: usize) -> Result<Remito, ServerError> {
        let removed = store.remove_at(index)?;
        debug!("deleted {} at position {}", removed.remito, index);
        Ok(removed)
    }

    fn clear(&self, store: &mut RecordStore) -> Result<usize, ServerError> {
        if store.is_empty() {
            return Err(EmptyStore::new("clear"));
        }
        let removed = store.clear();
        debug!("cleared {} records", removed);
        Ok(removed)
    }

    fn export(
        &self,
        store: &RecordStore,
        dir: &Path,
        format: ExportFormat,
        now: NaiveDateTime,
    ) -> Result<PathBuf, ServerError> {
        if store.is_empty() {
            return Err(EmptyStore::new("export"));
        }
        let path = dir.join(export_file_name(now, format));
        self.remitos_repository
            .export(store.snapshot(), &path, format)?;
        info!("exported {} records to {}", store.len(), path.display());
        Ok(path)
    }
}

impl ScanUsecaseImpl {
    pub(crate) fn new() -> Self {
        ScanUsecaseImpl {
            remitos_repository: RemitosRepositoryImpl::new(),
        }
    }
}
