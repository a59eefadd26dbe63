//! rc-project: case file format and validation.
//!
//! A case file holds everything a front end would otherwise keep in session
//! state: selected units, equipment, operating point and sweep settings.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{Case, LATEST_VERSION, ValidationError, validate_case};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let case: CaseFile = serde_yaml::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_yaml(path: &std::path::Path, case: &CaseFile) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let case: CaseFile = serde_json::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_json(path: &std::path::Path, case: &CaseFile) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}
