use crate::utils::error::{KitError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
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
        return Err(KitError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_max_len(field_name: &str, len: usize, max: usize) -> Result<()> {
    if len > max {
        return Err(KitError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("{} items given but at most {} allowed", len, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "./scenario.toml").is_ok());
        assert!(validate_path("config", "").is_err());
        assert!(validate_path("config", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("cart.entries[0].label", "Apple").is_ok());
        assert!(validate_non_empty_string("cart.entries[0].label", "   ").is_err());
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("amount", -1.25).is_ok());
        assert!(validate_finite("amount", f64::NAN).is_err());
        assert!(validate_finite("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_range_and_len() {
        assert!(validate_range("buffer.capacity", 3usize, 1, 16).is_ok());
        assert!(validate_range("buffer.capacity", 0usize, 1, 16).is_err());
        assert!(validate_max_len("buffer.values", 3, 3).is_ok());
        assert!(validate_max_len("buffer.values", 4, 3).is_err());
    }
}
