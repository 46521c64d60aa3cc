use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        barcode_datasource::{BarcodeDatasource, BarcodeDatasourceImpl},
        csv_datasource::CsvDatasourceImpl,
        xlsx_datasource::{SpreadsheetDatasource, XlsxDatasourceImpl},
    },
    domain::repositories::remitos_repository::RemitosRepository,
    entities::{ExportFormat, ExportSheet, Remito},
};

pub(crate) struct RemitosRepositoryImpl<
    DS1 = BarcodeDatasourceImpl, // Default.
    DS2 = XlsxDatasourceImpl,    // Default.
    DS3 = CsvDatasourceImpl,     // Default.
> where
    DS1: BarcodeDatasource,
    DS2: SpreadsheetDatasource,
    DS3: SpreadsheetDatasource,
{
    barcode_datasource: DS1,
    xlsx_datasource: DS2,
    csv_datasource: DS3,
}

impl<DS1, DS2, DS3> RemitosRepository for RemitosRepositoryImpl<DS1, DS2, DS3>
where
    DS1: BarcodeDatasource,
    DS2: SpreadsheetDatasource,
    DS3: SpreadsheetDatasource,
{
    fn decode(&self, raw: &str) -> Result<Remito, ServerError> {
        self.barcode_datasource.decode(raw)
    }

    fn export<P>(&self, records: &[Remito], path: P, format: ExportFormat) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let sheet = ExportSheet::from_records(records);
        match format {
            ExportFormat::Xlsx => self.xlsx_datasource.write(&sheet, path.as_ref()),
            ExportFormat::Csv => self.csv_datasource.write(&sheet, path.as_ref()),
        }
    }
}

impl RemitosRepositoryImpl {
    pub(crate) fn new() -> Self {
        RemitosRepositoryImpl {
            barcode_datasource: BarcodeDatasourceImpl::new(),
            xlsx_datasource: XlsxDatasourceImpl::new(),
            csv_datasource: CsvDatasourceImpl::new(),
        }
    }
}
