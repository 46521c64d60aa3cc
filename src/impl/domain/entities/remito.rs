/// A shipment receipt decoded from a single barcode scan.
///
/// All text fields are kept in their display form, exactly as they are shown
/// in the table and written to the exported spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remito {
    /// Receipt identifier, `CCCC-NNNNNNNN`.
    pub remito: String,
    /// Issue date, `DD/MM/YYYY`.
    pub fecha: String,
    pub ce: String,
    /// Package count.
    pub bultos: u32,
    /// Weight in kilograms with exactly 3 decimals.
    pub kilos: String,
    /// Declared value with exactly 2 decimals.
    pub v_declarado: String,
}
