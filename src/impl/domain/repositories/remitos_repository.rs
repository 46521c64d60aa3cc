use fractic_server_error::ServerError;

use crate::entities::{ExportFormat, Remito};

pub trait RemitosRepository {
    fn decode(&self, raw: &str) -> Result<Remito, ServerError>;

    fn export<P>(&self, records: &[Remito], path: P, format: ExportFormat) -> Result<(), ServerError>
    where
        P: AsRef<std::path::Path>;
}
