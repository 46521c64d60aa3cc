use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use fractic_server_error::ServerError;

use crate::{
    domain::usecases::scan_usecase::{ScanUsecase as _, ScanUsecaseImpl},
    entities::{ExportFormat, RecordStore, Remito},
    presentation::table_printer::TablePrinter,
};

/// A scanning session: the record store plus the operations the input,
/// display and export surfaces call on it.
pub struct RemitoScannerUtil {
    store: RecordStore,
    scan_usecase: ScanUsecaseImpl,
    printer: TablePrinter,
}

impl RemitoScannerUtil {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            scan_usecase: ScanUsecaseImpl::new(),
            printer: TablePrinter::new(),
        }
    }

    /// Decodes a scanned barcode and stores it as the newest record.
    pub fn scan(&mut self, raw: &str) -> Result<Remito, ServerError> {
        self.scan_usecase.scan(&mut self.store, raw)
    }

    /// Deletes the record at a 0-based position.
    pub fn delete(&mut self, index: usize) -> Result<Remito, ServerError> {
        self.scan_usecase.delete(&mut self.store, index)
    }

    pub fn clear(&mut self) -> Result<usize, ServerError> {
        self.scan_usecase.clear(&mut self.store)
    }

    /// Exports all records to `dir`, named after the current local time.
    pub fn export<P>(&self, dir: P, format: ExportFormat) -> Result<PathBuf, ServerError>
    where
        P: AsRef<Path>,
    {
        self.export_at(dir, format, Local::now().naive_local())
    }

    pub fn export_at<P>(
        &self,
        dir: P,
        format: ExportFormat,
        now: NaiveDateTime,
    ) -> Result<PathBuf, ServerError>
    where
        P: AsRef<Path>,
    {
        self.scan_usecase
            .export(&self.store, dir.as_ref(), format, now)
    }

    pub fn records(&self) -> &[Remito] {
        self.store.snapshot()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn table(&self) -> String {
        self.printer.print_table(self.store.snapshot())
    }
}

impl Default for RemitoScannerUtil {
    fn default() -> Self {
        Self::new()
    }
}
