//! Field rules shared by catalog entities.
//!
//! Each function checks one field and returns the first violated rule for it.
//! Callers chain them with `?` in a fixed order.

use rust_decimal::Decimal;

use storefront_core::DomainResult;
use storefront_core::validation::{char_len, is_null_or_empty, reject_if};

pub const NAME_MIN_LEN: usize = 3;
pub const DESCRIPTION_MIN_LEN: usize = 5;
pub const IMAGE_MAX_LEN: usize = 250;

pub const INVALID_ID: &str = "Invalid Id value.";
pub const NAME_REQUIRED: &str = "Name cannot be null or empty.";
pub const NAME_TOO_SHORT: &str = "Invalid name, too short, minimum 3 characters.";
pub const DESCRIPTION_REQUIRED: &str = "Description cannot be null or empty.";
pub const DESCRIPTION_TOO_SHORT: &str = "Invalid description, too short, minimum 5 characters.";
pub const INVALID_PRICE: &str = "Invalid price product value.";
pub const INVALID_STOCK: &str = "Invalid stock value.";
pub const IMAGE_TOO_LONG: &str = "Invalid image url, too long, maximum 250 characters.";

pub fn id(raw: i32) -> DomainResult<()> {
    reject_if(raw < 0, INVALID_ID)
}

pub fn name(value: Option<&str>) -> DomainResult<&str> {
    required_text(value, NAME_MIN_LEN, NAME_REQUIRED, NAME_TOO_SHORT)
}

pub fn description(value: Option<&str>) -> DomainResult<&str> {
    required_text(value, DESCRIPTION_MIN_LEN, DESCRIPTION_REQUIRED, DESCRIPTION_TOO_SHORT)
}

pub fn price(value: Decimal) -> DomainResult<()> {
    reject_if(value < Decimal::ZERO, INVALID_PRICE)
}

pub fn stock(value: i32) -> DomainResult<()> {
    reject_if(value < 0, INVALID_STOCK)
}

/// Absent and empty images are both valid.
pub fn image(value: Option<&str>) -> DomainResult<()> {
    let too_long = value.is_some_and(|v| !v.is_empty() && char_len(v) > IMAGE_MAX_LEN);
    reject_if(too_long, IMAGE_TOO_LONG)
}

fn required_text<'a>(
    value: Option<&'a str>,
    min_len: usize,
    required: &str,
    too_short: &str,
) -> DomainResult<&'a str> {
    reject_if(is_null_or_empty(value), required)?;
    let value = value.unwrap_or_default();
    reject_if(char_len(value) < min_len, too_short)?;
    Ok(value)
}
