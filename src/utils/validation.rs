use crate::utils::error::{AreaError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_region_code(field_name: &str, code: &str) -> Result<()> {
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AreaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: "Region code must be exactly two ASCII letters".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AreaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(AreaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_region_code() {
        assert!(validate_region_code("regions.code", "ZH").is_ok());
        assert!(validate_region_code("regions.code", "zh").is_ok());
        assert!(validate_region_code("regions.code", "Z").is_err());
        assert!(validate_region_code("regions.code", "ZHR").is_err());
        assert!(validate_region_code("regions.code", "8000").is_err());
        assert!(validate_region_code("regions.code", "Z1").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("regions.code", ["ZH", "BE"]).is_ok());
        assert!(validate_unique("regions.code", ["ZH", "BE", "ZH"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("regions.label", "Zürich").is_ok());
        assert!(validate_non_empty_string("regions.label", "   ").is_err());
    }
}
