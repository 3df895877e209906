use crate::errors::{DirectoryError, Result};
use crate::model::{NewStudent, NewTutor};

/// Longest accepted name, major or area of expertise, in characters
pub const MAX_TEXT_LEN: usize = 100;
/// Ages are at most two digits
pub const MAX_AGE: i64 = 99;
/// Class years are at most four digits
pub const MAX_CLASS_YEAR: i64 = 9999;

/// Validate a student registration before it reaches the store
///
/// # Errors
/// `InvalidField` naming the first offending field.
pub fn validate_new_student(input: &NewStudent) -> Result<()> {
    require_text("username", &input.username, None)?;
    require_text("password", input.password.expose(), None)?;
    require_text("name", &input.name, Some(MAX_TEXT_LEN))?;
    require_range("age", input.age, MAX_AGE)?;
    require_range("class_year", input.class_year, MAX_CLASS_YEAR)?;
    require_text("major", &input.major, Some(MAX_TEXT_LEN))?;
    Ok(())
}

/// Validate a tutor registration before it reaches the store
///
/// # Errors
/// `InvalidField` naming the first offending field.
pub fn validate_new_tutor(input: &NewTutor) -> Result<()> {
    require_text("username", &input.username, None)?;
    require_text("password", input.password.expose(), None)?;
    require_text("name", &input.name, Some(MAX_TEXT_LEN))?;
    require_range("age", input.age, MAX_AGE)?;
    require_text(
        "area_of_expertise",
        &input.area_of_expertise,
        Some(MAX_TEXT_LEN),
    )?;
    if input.cost < 0 {
        return Err(DirectoryError::InvalidField {
            field: "cost",
            reason: "must not be negative".to_string(),
        });
    }
    Ok(())
}

fn require_text(field: &'static str, value: &str, max_len: Option<usize>) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectoryError::InvalidField {
            field,
            reason: "must not be empty".to_string(),
        });
    }
    if let Some(max) = max_len {
        if value.chars().count() > max {
            return Err(DirectoryError::InvalidField {
                field,
                reason: format!("must be at most {} characters", max),
            });
        }
    }
    Ok(())
}

fn require_range(field: &'static str, value: i64, max: i64) -> Result<()> {
    if !(0..=max).contains(&value) {
        return Err(DirectoryError::InvalidField {
            field,
            reason: format!("must be between 0 and {}", max),
        });
    }
    Ok(())
}
