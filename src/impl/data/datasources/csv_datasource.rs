use std::{fs, path::Path};

use csv::WriterBuilder;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::xlsx_datasource::SpreadsheetDatasource,
    entities::ExportSheet,
    errors::{SpreadsheetEncodingFailed, WriteError},
};

/// Writes the sheet rows as plain CSV. Column widths and the sheet name have
/// no CSV counterpart and are dropped.
pub(crate) struct CsvDatasourceImpl;

impl CsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn encode(&self, sheet: &ExportSheet) -> Result<Vec<u8>, ServerError> {
        // The header is part of `rows`.
        let mut wrt = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        for row in &sheet.rows {
            wrt.serialize(row)
                .map_err(|e| SpreadsheetEncodingFailed::with_debug("csv", &e))?;
        }
        wrt.into_inner()
            .map_err(|e| SpreadsheetEncodingFailed::with_debug("csv", &e.to_string()))
    }
}

impl SpreadsheetDatasource for CsvDatasourceImpl {
    fn write(&self, sheet: &ExportSheet, path: &Path) -> Result<(), ServerError> {
        let bytes = self.encode(sheet)?;
        fs::write(path, bytes)
            .map_err(|e| WriteError::with_debug(&path.display().to_string(), &e))
    }
}
