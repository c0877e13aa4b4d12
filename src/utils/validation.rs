use crate::utils::error::ConfigError;

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

pub fn validate_positive_number(
    field_name: &str,
    value: usize,
    min_value: usize,
) -> Result<(), ConfigError> {
    if value < min_value {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_tolerance(field_name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Tolerance must be a finite, non-negative number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
