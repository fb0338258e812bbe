use crate::utils::error::{IdeaError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(IdeaError::invalid_value(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(IdeaError::invalid_value(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IdeaError::invalid_value(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(IdeaError::invalid_value(
            field_name,
            value,
            format!("expected one of: {}", allowed.join(", ")),
        ));
    }
    Ok(())
}

/// Checks a blueprint sequence field that is displayed: present, and no blank entries.
pub fn validate_blueprint_list<T>(id: &str, field_name: &str, items: &[T]) -> Result<()>
where
    T: AsRef<str>,
{
    if items.is_empty() {
        return Err(IdeaError::invalid_blueprint(
            id,
            field_name,
            "must not be empty",
        ));
    }
    validate_blueprint_entries(id, field_name, items)
}

/// Checks a matching field, which may be empty but must not hold blank labels.
pub fn validate_blueprint_entries<T>(id: &str, field_name: &str, items: &[T]) -> Result<()>
where
    T: AsRef<str>,
{
    if items.iter().any(|item| item.as_ref().trim().is_empty()) {
        return Err(IdeaError::invalid_blueprint(
            id,
            field_name,
            "contains a blank entry",
        ));
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(IdeaError::invalid_blueprint(
                id,
                "id",
                "is used by more than one blueprint",
            ));
        }
    }
    Ok(())
}
