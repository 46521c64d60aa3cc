use std::str::FromStr;

use fractic_server_error::ServerError;

use crate::errors::InvalidBarcode;

/// Package count ("bultos"). Any non-digit content invalidates the whole
/// barcode instead of degrading to a non-numeric value.
#[derive(Debug)]
pub(crate) struct PackageCountModel(pub u32);
impl FromStr for PackageCountModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(InvalidBarcode::with_debug(&s));
        }
        let count = s
            .parse::<u32>()
            .map_err(|e| InvalidBarcode::with_debug(&e))?;
        Ok(PackageCountModel(count))
    }
}

impl From<PackageCountModel> for u32 {
    fn from(model: PackageCountModel) -> u32 {
        model.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zero_padded_count() {
        assert_eq!(PackageCountModel::from_str("0150").unwrap().0, 150);
        assert_eq!(PackageCountModel::from_str("0000").unwrap().0, 0);
        assert_eq!(PackageCountModel::from_str("9999").unwrap().0, 9999);
    }

    #[test]
    fn non_digits_are_rejected() {
        assert!(PackageCountModel::from_str("01a0").is_err());
        assert!(PackageCountModel::from_str(" 150").is_err());
        assert!(PackageCountModel::from_str("+150").is_err());
        assert!(PackageCountModel::from_str("").is_err());
    }
}
