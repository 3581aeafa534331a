use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake from its string form
///
/// Snowflakes are never zero, so `"0"` is rejected alongside anything that does not
/// parse as a `u64`.
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed a non-zero snowflake
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse the string as a u64
/// - `Err(AppError::BadRequest)` - The string parsed to zero
pub fn parse_snowflake(value: &str) -> Result<u64, AppError> {
    let result = value
        .trim()
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    if result == 0 {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid Discord ID",
            value
        )));
    }

    Ok(result)
}
