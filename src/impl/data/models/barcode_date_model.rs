use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidBarcode;

/// Date slice of a barcode, laid out as `YYYYMMDD` and displayed as
/// `DD/MM/YYYY`.
///
/// Only the layout is transformed. No calendar check is made, so "20231332"
/// becomes "32/13/2023".
#[derive(Debug)]
pub(crate) struct BarcodeDateModel(String);
impl FromStr for BarcodeDateModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 8 {
            return Err(InvalidBarcode::with_debug(&s));
        }
        let year: String = chars[0..4].iter().collect();
        let month: String = chars[4..6].iter().collect();
        let day: String = chars[6..8].iter().collect();
        Ok(BarcodeDateModel(format!("{}/{}/{}", day, month, year)))
    }
}

impl From<BarcodeDateModel> for String {
    fn from(model: BarcodeDateModel) -> String {
        model.0
    }
}
