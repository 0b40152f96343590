use crate::utils::error::{Result, WorkloadError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(WorkloadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(WorkloadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Filler characters must be one byte wide so a chunk of N characters is N bytes.
pub fn validate_filler(field_name: &str, filler: char) -> Result<()> {
    if !filler.is_ascii_graphic() {
        return Err(WorkloadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: filler.to_string(),
            reason: "Filler must be a printable ASCII character".to_string(),
        });
    }
    Ok(())
}

/// Parses a raw environment value, reporting the variable name on failure.
pub fn parse_number<T>(field_name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| WorkloadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: format!("Not a valid number: {}", e),
        })
}

pub fn parse_flag(field_name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(WorkloadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Expected one of 1/true/yes/on or 0/false/no/off".to_string(),
        }),
    }
}

pub fn parse_single_char(field_name: &str, raw: &str) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(WorkloadError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Expected exactly one character".to_string(),
        }),
    }
}
