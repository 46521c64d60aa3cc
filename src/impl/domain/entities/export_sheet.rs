use serde::{Serialize, Serializer};

use crate::entities::Remito;

pub const EXPORT_SHEET_NAME: &str = "Remitos";
pub const EXPORT_HEADER: [&str; 6] = ["Remito", "Fecha", "CE", "Bultos", "Kilos", "V Declarado"];
/// Column widths in character units, one per header column.
pub const EXPORT_COLUMN_WIDTHS: [u32; 6] = [15, 12, 10, 8, 10, 15];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetCell {
    Text(String),
    Number(u32),
}

impl Serialize for SheetCell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            SheetCell::Text(s) => serializer.serialize_str(s),
            SheetCell::Number(n) => serializer.serialize_u32(*n),
        }
    }
}

/// Rows of an exported sheet: the header row followed by one row per record,
/// in store order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSheet {
    pub name: String,
    pub column_widths: Vec<u32>,
    pub rows: Vec<Vec<SheetCell>>,
}

impl ExportSheet {
    pub fn from_records(records: &[Remito]) -> Self {
        let header = EXPORT_HEADER
            .iter()
            .map(|h| SheetCell::Text(h.to_string()))
            .collect();
        let rows = std::iter::once(header)
            .chain(records.iter().map(|r| {
                vec![
                    SheetCell::Text(r.remito.clone()),
                    SheetCell::Text(r.fecha.clone()),
                    SheetCell::Text(r.ce.clone()),
                    SheetCell::Number(r.bultos),
                    SheetCell::Text(r.kilos.clone()),
                    SheetCell::Text(r.v_declarado.clone()),
                ]
            }))
            .collect();
        Self {
            name: EXPORT_SHEET_NAME.to_string(),
            column_widths: EXPORT_COLUMN_WIDTHS.to_vec(),
            rows,
        }
    }
}
