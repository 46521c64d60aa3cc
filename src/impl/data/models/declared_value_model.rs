use std::{str::FromStr, sync::LazyLock};

use fractic_server_error::ServerError;
use regex::Regex;

use crate::errors::InvalidBarcode;

/// First run of digits, optionally followed by a decimal point and more
/// digits. ASCII only, unlike `\d`.
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+\.?[0-9]*").expect("hardcoded regex should be valid"));

pub(crate) const NO_DECLARED_VALUE: &str = "0.00";

/// Declared value scraped from the free-form tail of a barcode.
///
/// The tail carries no fixed layout: the first numeric token found is parsed
/// as a float and rendered with exactly 2 decimals, and a tail without digits
/// yields "0.00". Any digit run parses, so the tail never rejects a barcode.
#[derive(Debug)]
pub(crate) struct DeclaredValueModel(String);
impl FromStr for DeclaredValueModel {
    type Err = ServerError;
    fn from_str(tail: &str) -> Result<Self, Self::Err> {
        let Some(token) = AMOUNT_PATTERN.find(tail) else {
            return Ok(DeclaredValueModel(NO_DECLARED_VALUE.to_string()));
        };
        // "45." is a valid match; parse it as "45".
        let token = token.as_str().trim_end_matches('.');
        let amount = f64::from_str(token).map_err(|e| InvalidBarcode::with_debug(&e))?;
        Ok(DeclaredValueModel(fixed_2(amount)))
    }
}

/// Renders with exactly 2 decimals from the binary value, so `1.005` (stored
/// as 1.00499...) gives "1.00". Exact ties such as `0.125` round up.
fn fixed_2(amount: f64) -> String {
    // A tie at the third decimal is an odd multiple of 1/8; scaling by 8 is
    // exact.
    let eighths = amount * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        format!("{:.2}", (amount * 100.0).ceil() / 100.0)
    } else {
        format!("{:.2}", amount)
    }
}

impl From<DeclaredValueModel> for String {
    fn from(model: DeclaredValueModel) -> String {
        model.0
    }
}
