use crate::utils::error::{CourseError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CourseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CourseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Asserts that an input argument names a readable file, `-` meaning stdin.
pub fn validate_input_arg(field_name: &str, input: &str) -> Result<()> {
    if input == "-" {
        return Ok(());
    }

    validate_path(field_name, input)?;

    let path = std::path::Path::new(input);
    if !path.is_file() {
        return Err(CourseError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: input.to_string(),
            reason: "File does not exist".to_string(),
        });
    }

    Ok(())
}
