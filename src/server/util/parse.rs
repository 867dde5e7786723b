use crate::server::error::AppError;

/// Parses a u64 query parameter value.
///
/// # Arguments
/// - `name` - Query parameter name, used in the error message
/// - `value` - The raw value to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed value
/// - `Err(AppError::BadRequest)` - Value is not a non-negative integer
pub fn parse_u64_param(name: &str, value: &str) -> Result<u64, AppError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid value '{}' for parameter {}", value, name)))
}

/// Strips everything but ASCII digits, e.g. `"123.456.789-01"` to `"12345678901"`.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_rejects_negative() {
        assert_eq!(parse_u64_param("page", " 3 ").unwrap(), 3);
        assert!(matches!(
            parse_u64_param("page", "-1"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn strips_cpf_punctuation() {
        assert_eq!(digits_only("123.456.789-01"), "12345678901");
    }
}
