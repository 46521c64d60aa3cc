use std::{
    fmt::Write as _,
    fs,
    io::{Cursor, Write as _},
    path::Path,
};

use fractic_server_error::ServerError;
use quick_xml::escape::escape;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use crate::{
    entities::{ExportSheet, SheetCell},
    errors::{SpreadsheetEncodingFailed, WriteError},
};

pub(crate) trait SpreadsheetDatasource {
    fn write(&self, sheet: &ExportSheet, path: &Path) -> Result<(), ServerError>;
}

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const NS_MAIN: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const NS_REL: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_PACKAGE_REL: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#,
);

/// Writes a single-sheet `.xlsx` workbook.
///
/// The package is the minimal set of parts a spreadsheet application needs:
/// content types, package and workbook relationships, the workbook, and one
/// worksheet using inline strings (no shared string table, no styles).
pub(crate) struct XlsxDatasourceImpl;

impl XlsxDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn encode(&self, sheet: &ExportSheet) -> Result<Vec<u8>, ServerError> {
        let parts = [
            ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
            ("_rels/.rels", package_rels_xml()),
            ("xl/workbook.xml", workbook_xml(&sheet.name)),
            ("xl/_rels/workbook.xml.rels", workbook_rels_xml()),
            ("xl/worksheets/sheet1.xml", worksheet_xml(sheet)?),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            let options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
            zip.start_file(name, options)
                .map_err(|e| SpreadsheetEncodingFailed::with_debug("xlsx", &e))?;
            zip.write_all(content.as_bytes())
                .map_err(|e| SpreadsheetEncodingFailed::with_debug("xlsx", &e))?;
        }
        let cursor = zip
            .finish()
            .map_err(|e| SpreadsheetEncodingFailed::with_debug("xlsx", &e))?;
        Ok(cursor.into_inner())
    }
}

impl SpreadsheetDatasource for XlsxDatasourceImpl {
    fn write(&self, sheet: &ExportSheet, path: &Path) -> Result<(), ServerError> {
        let bytes = self.encode(sheet)?;
        fs::write(path, bytes)
            .map_err(|e| WriteError::with_debug(&path.display().to_string(), &e))
    }
}

fn package_rels_xml() -> String {
    format!(
        r#"{}<Relationships xmlns="{}"><Relationship Id="rId1" Type="{}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#,
        XML_DECLARATION, NS_PACKAGE_REL, NS_REL
    )
}

fn workbook_rels_xml() -> String {
    format!(
        r#"{}<Relationships xmlns="{}"><Relationship Id="rId1" Type="{}/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#,
        XML_DECLARATION, NS_PACKAGE_REL, NS_REL
    )
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        r#"{}<workbook xmlns="{}" xmlns:r="{}"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        XML_DECLARATION,
        NS_MAIN,
        NS_REL,
        escape(sheet_name)
    )
}

fn worksheet_xml(sheet: &ExportSheet) -> Result<String, ServerError> {
    let fmt_err = |e: std::fmt::Error| SpreadsheetEncodingFailed::with_debug("xlsx", &e);

    let mut xml = String::with_capacity(256 + sheet.rows.len() * 512);
    xml.push_str(XML_DECLARATION);
    write!(xml, r#"<worksheet xmlns="{}">"#, NS_MAIN).map_err(fmt_err)?;

    if !sheet.column_widths.is_empty() {
        xml.push_str("<cols>");
        for (col, width) in sheet.column_widths.iter().enumerate() {
            // 1-based column numbering.
            write!(
                xml,
                r#"<col min="{}" max="{}" width="{}" customWidth="1"/>"#,
                col + 1,
                col + 1,
                width
            )
            .map_err(fmt_err)?;
        }
        xml.push_str("</cols>");
    }

    xml.push_str("<sheetData>");
    for (row_idx, row) in sheet.rows.iter().enumerate() {
        write!(xml, r#"<row r="{}">"#, row_idx + 1).map_err(fmt_err)?;
        for (col_idx, cell) in row.iter().enumerate() {
            let cell_ref = format!("{}{}", column_name(col_idx), row_idx + 1);
            let written = match cell {
                SheetCell::Text(text) => write!(
                    xml,
                    r#"<c r="{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                    cell_ref,
                    escape(text.as_str())
                ),
                SheetCell::Number(n) => write!(xml, r#"<c r="{}"><v>{}</v></c>"#, cell_ref, n),
            };
            written.map_err(fmt_err)?;
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    Ok(xml)
}

/// Spreadsheet column letters for a 0-based index: A..Z, AA..AZ, ...
fn column_name(index: usize) -> String {
    let mut n = index + 1;
    let mut name = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}
