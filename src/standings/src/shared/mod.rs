use crate::{LeagueError, LeagueResult};

/// Trims a user supplied name and rejects it when nothing is left.
pub fn required_name(kind: &str, name: &str) -> LeagueResult<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(LeagueError::validation(format!("{} name is required", kind)));
    }

    Ok(trimmed.to_string())
}

/// Trims optional free text, mapping blank input to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
