use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Everything the bootstrap flow needs to know before it touches the
/// filesystem. Construction validates the name so later steps can assume
/// the plan is sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    name: String,
    description: String,
    parent_dir: PathBuf,
    skip_install: bool,
}

impl BootstrapPlan {
    pub fn new(name: impl Into<String>, parent_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self {
            name,
            description: String::new(),
            parent_dir: parent_dir.into(),
            skip_install: false,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }

    pub fn skip_install(&self) -> bool {
        self.skip_install
    }

    /// Directory the project is created in: `<parent_dir>/<name>`.
    pub fn project_root(&self) -> PathBuf {
        self.parent_dir.join(&self.name)
    }
}
