use std::num::NonZeroU64;

use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake from a string id
///
/// Zero is rejected since Serenity's id types cannot hold it.
///
/// # Arguments
/// - `value` - The string to attempt to parse
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed a non-zero id
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a non-zero u64
pub fn parse_snowflake(value: &str) -> Result<u64, AppError> {
    let result = value
        .parse::<NonZeroU64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    Ok(result.get())
}
