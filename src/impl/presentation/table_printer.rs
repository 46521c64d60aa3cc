use crate::entities::{Remito, EXPORT_COLUMN_WIDTHS, EXPORT_HEADER};

pub(crate) const EMPTY_TABLE: &str = "No hay registros";

pub(crate) struct TablePrinter;

impl TablePrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Renders the records in store order, one numbered line each, followed
    /// by the record counter. Numbering is 1-based and matches the position
    /// used for deletion.
    pub(crate) fn print_table(&self, records: &[Remito]) -> String {
        let mut table_output = String::new();
        let index_width = records.len().to_string().len().max(1);

        if records.is_empty() {
            table_output.push_str(EMPTY_TABLE);
            table_output.push('\n');
        } else {
            let header: Vec<String> = EXPORT_HEADER.iter().map(|h| h.to_string()).collect();
            self.print_line(&mut table_output, "#", index_width, &header);
            for (i, record) in records.iter().enumerate() {
                let cells = [
                    record.remito.clone(),
                    record.fecha.clone(),
                    record.ce.clone(),
                    record.bultos.to_string(),
                    record.kilos.clone(),
                    record.v_declarado.clone(),
                ];
                self.print_line(&mut table_output, &(i + 1).to_string(), index_width, &cells);
            }
        }

        table_output.push_str(&self.print_counter(records.len()));
        table_output.push('\n');
        table_output
    }

    pub(crate) fn print_counter(&self, count: usize) -> String {
        format!("Registros: {}", count)
    }

    fn print_line(&self, table_output: &mut String, index: &str, index_width: usize, cells: &[String]) {
        let mut line = format!("{:>index_width$}  ", index);
        for (cell, width) in cells.iter().zip(EXPORT_COLUMN_WIDTHS) {
            let width = width as usize;
            line.push_str(&format!("{:<width$} ", cell));
        }
        table_output.push_str(line.trim_end());
        table_output.push('\n');
    }
}
