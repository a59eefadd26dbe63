//! Case loading, saving, validation, and introspection.

use std::path::Path;

use rc_project::{Case, CaseFile, ProjectError};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Summary of a case for listing.
#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub name: String,
    pub motor: String,
    pub rpm: f64,
    pub num_cylinders: usize,
    pub cylinders_configured: bool,
    pub stage_count: usize,
    pub grid_points: usize,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a case file. `.json` is read as JSON, anything else as YAML.
///
/// The document is validated before it is returned.
pub fn load_case(path: &Path) -> AppResult<CaseFile> {
    let loaded = if is_json(path) {
        rc_project::load_json(path)
    } else {
        rc_project::load_yaml(path)
    };
    let case = loaded.map_err(|e| match e {
        ProjectError::Io(source) => AppError::CaseFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;

    debug!(path = %path.display(), name = %case.name, "loaded case file");
    Ok(case)
}

/// Save a case file, format chosen by extension. Invalid cases are not written.
pub fn save_case(path: &Path, case: &CaseFile) -> AppResult<()> {
    let saved = if is_json(path) {
        rc_project::save_json(path, case)
    } else {
        rc_project::save_yaml(path, case)
    };
    saved.map_err(|e| match e {
        ProjectError::Io(source) => AppError::CaseFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;

    debug!(path = %path.display(), name = %case.name, "saved case file");
    Ok(())
}

/// Case with the default session values.
pub fn default_case(name: &str) -> CaseFile {
    CaseFile {
        name: name.to_string(),
        ..CaseFile::default()
    }
}

/// Validate and convert into domain values.
pub fn validate_case(case: &CaseFile) -> AppResult<Case> {
    Ok(rc_project::validate_case(case)?)
}

/// Load and validate in one step.
pub fn open_case(path: &Path) -> AppResult<Case> {
    let file = load_case(path)?;
    validate_case(&file)
}

pub fn summarize(case: &Case) -> CaseSummary {
    CaseSummary {
        name: case.name.clone(),
        motor: case.equipment.motor_type().to_string(),
        rpm: case.equipment.rpm(),
        num_cylinders: case.equipment.num_cylinders(),
        cylinders_configured: case.equipment.is_finalized(),
        stage_count: case.equipment.stage_count(),
        grid_points: case.sweep.len(),
    }
}
