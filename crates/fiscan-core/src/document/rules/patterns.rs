//! Regex patterns for Brazilian fiscal code shapes.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // NCM: 8 digits
    pub static ref NCM_PATTERN: Regex = Regex::new(r"^\d{8}$").unwrap();

    // CEST: 7 digits, optionally dotted as SS.III.DD
    pub static ref CEST_PATTERN: Regex = Regex::new(r"^\d{2}\.?\d{3}\.?\d{2}$").unwrap();

    // CFOP: 4 digits, first digit 1-7
    pub static ref CFOP_PATTERN: Regex = Regex::new(r"^[1-7]\d{3}$").unwrap();

    // Access key: 44 digits once the type prefix is stripped
    pub static ref ACCESS_KEY_PATTERN: Regex = Regex::new(r"^\d{44}$").unwrap();
}
