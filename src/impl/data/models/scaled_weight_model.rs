use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidBarcode;

/// Weight encoded in grams (kilograms scaled by 1000), displayed as kilograms
/// with exactly 3 decimals.
#[derive(Debug)]
pub(crate) struct ScaledWeightModel(String);
impl FromStr for ScaledWeightModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidBarcode::with_debug(&s));
        }
        let grams = s
            .parse::<u64>()
            .map_err(|e| InvalidBarcode::with_debug(&e))?;
        Ok(ScaledWeightModel(format!("{}.{:03}", grams / 1000, grams % 1000)))
    }
}

impl From<ScaledWeightModel> for String {
    fn from(model: ScaledWeightModel) -> String {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kilos(s: &str) -> String {
        ScaledWeightModel::from_str(s).unwrap().into()
    }

    #[test]
    fn divides_by_thousand_with_three_decimals() {
        assert_eq!(kilos("02000001"), "2000.001");
        assert_eq!(kilos("00001500"), "1.500");
        assert_eq!(kilos("00000007"), "0.007");
        assert_eq!(kilos("00000000"), "0.000");
        assert_eq!(kilos("99999999"), "99999.999");
    }

    #[test]
    fn non_digits_are_rejected() {
        assert!(ScaledWeightModel::from_str("0000-100").is_err());
        assert!(ScaledWeightModel::from_str("00 01500").is_err());
    }
}
