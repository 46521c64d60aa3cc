use std::{ops::Range, str::FromStr as _};

use fractic_server_error::ServerError;

use crate::{
    data::models::{
        barcode_date_model::BarcodeDateModel, declared_value_model::DeclaredValueModel,
        package_count_model::PackageCountModel, scaled_weight_model::ScaledWeightModel,
    },
    entities::Remito,
    errors::InvalidBarcode,
};

/// Shortest barcode that carries every fixed-width field.
pub const MIN_BARCODE_LEN: usize = 38;

const CODE: Range<usize> = 0..4;
const NUMBER: Range<usize> = 4..12;
const DATE: Range<usize> = 12..20;
const CE: Range<usize> = 20..26;
const BULTOS: Range<usize> = 26..30;
const KILOS: Range<usize> = 30..38;

pub(crate) trait BarcodeDatasource {
    fn decode(&self, raw: &str) -> Result<Remito, ServerError>;
}

pub(crate) struct BarcodeDatasourceImpl;

impl BarcodeDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl BarcodeDatasource for BarcodeDatasourceImpl {
    fn decode(&self, raw: &str) -> Result<Remito, ServerError> {
        decode_barcode(raw)
    }
}

/// Decodes a fixed-width barcode into a [`Remito`].
///
/// Layout, in characters:
///
/// | Range     | Field                        |
/// |-----------|------------------------------|
/// | `0..4`    | receipt code                 |
/// | `4..12`   | receipt number               |
/// | `12..20`  | date, `YYYYMMDD`             |
/// | `20..26`  | CE                           |
/// | `26..30`  | package count                |
/// | `30..38`  | weight in grams              |
/// | `38..`    | free-form tail, declared value is the first number in it |
///
/// Anything shorter than [`MIN_BARCODE_LEN`], or with a malformed numeric
/// field, is rejected with `InvalidBarcode`. The function is pure.
pub fn decode_barcode(raw: &str) -> Result<Remito, ServerError> {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() < MIN_BARCODE_LEN {
        return Err(InvalidBarcode::new());
    }
    let slice = |range: Range<usize>| -> String { chars[range].iter().collect() };

    // Extract fixed-width fields.
    let raw_code = slice(CODE);
    let raw_number = slice(NUMBER);
    let raw_date = slice(DATE);
    let raw_ce = slice(CE);
    let raw_bultos = slice(BULTOS);
    let raw_kilos = slice(KILOS);
    let raw_tail = slice(MIN_BARCODE_LEN..chars.len());

    // Parse.
    let fecha = BarcodeDateModel::from_str(&raw_date)?;
    let bultos = PackageCountModel::from_str(&raw_bultos)?;
    let kilos = ScaledWeightModel::from_str(&raw_kilos)?;
    let v_declarado = DeclaredValueModel::from_str(&raw_tail)?;

    // Build.
    Ok(Remito {
        remito: format!("{}-{}", raw_code, raw_number),
        fecha: fecha.into(),
        ce: raw_ce,
        bultos: bultos.into(),
        kilos: kilos.into(),
        v_declarado: v_declarado.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "ABCD000000012023010112345601500200000150050.00";

    #[test]
    fn decodes_reference_barcode() {
        let r = decode_barcode(SAMPLE).unwrap();
        assert_eq!(r.remito, "ABCD-00000001");
        assert_eq!(r.fecha, "01/01/2023");
        assert_eq!(r.ce, "123456");
        assert_eq!(r.bultos, 150);
        assert_eq!(r.kilos, "2000.001");
        assert_eq!(r.v_declarado, "50050.00");
    }

    #[test]
    fn exactly_min_len_has_no_declared_value() {
        let r = decode_barcode(&SAMPLE[..MIN_BARCODE_LEN]).unwrap();
        assert_eq!(r.v_declarado, "0.00");
    }

    #[test]
    fn one_short_is_rejected() {
        assert!(decode_barcode(&SAMPLE[..MIN_BARCODE_LEN - 1]).is_err());
        assert!(decode_barcode("").is_err());
    }

    #[test]
    fn tail_is_scraped_for_first_number() {
        let raw = format!("{}abc45.50xyz", &SAMPLE[..MIN_BARCODE_LEN]);
        assert_eq!(decode_barcode(&raw).unwrap().v_declarado, "45.50");
    }

    #[test]
    fn malformed_bultos_rejects_whole_barcode() {
        let raw = "ABCD00000001202301011234560X500200000150050.00";
        assert!(decode_barcode(raw).is_err());
    }

    #[test]
    fn malformed_kilos_rejects_whole_barcode() {
        let raw = "ABCD000000012023010112345601500200A00150050.00";
        assert!(decode_barcode(raw).is_err());
    }

    #[test]
    fn ce_and_code_are_verbatim() {
        let raw = "zz-900000001202312319Ab c.0001000010000";
        let r = decode_barcode(raw).unwrap();
        assert_eq!(r.remito, "zz-9-00000001");
        assert_eq!(r.ce, "9Ab c.");
        assert_eq!(r.fecha, "31/12/2023");
        assert_eq!(r.bultos, 1);
        assert_eq!(r.kilos, "1.000");
        assert_eq!(r.v_declarado, "0.00");
    }

    #[test]
    fn offsets_count_characters_not_bytes() {
        let raw = "ÑAÑA000000012023010112345601500200000150050.00";
        let r = decode_barcode(raw).unwrap();
        assert_eq!(r.remito, "ÑAÑA-00000001");
        assert_eq!(r.kilos, "2000.001");
    }
}
