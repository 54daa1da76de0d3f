//! Module Service - generates a feature module inside an existing project.
//!
//! Derives the module identifiers, renders the seven-file set, and writes it
//! under the project's module root. Separated from BootstrapService for
//! single responsibility.

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{ModuleIdent, render_module_files},
    error::ModexResult,
};

/// Default location for generated modules, relative to the project root.
pub const MODULES_ROOT: &str = "src/app/modules";

/// What a generation run produced, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReport {
    pub ident: ModuleIdent,
    pub module_dir: PathBuf,
    pub files: Vec<String>,
}

/// Service for module generation.
pub struct ModuleService {
    filesystem: Box<dyn Filesystem>,
    modules_root: PathBuf,
}

impl ModuleService {
    /// Create a new module service writing under [`MODULES_ROOT`].
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            modules_root: PathBuf::from(MODULES_ROOT),
        }
    }

    /// Override the module root (relative to the project root).
    pub fn with_modules_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.modules_root = root.into();
        self
    }

    /// Generate one module.
    ///
    /// Existing files with the same names are overwritten. A failed write
    /// aborts the remaining writes; files already written stay in place.
    #[instrument(skip_all, fields(module = %name.as_ref()))]
    pub fn generate(
        &self,
        project_root: &Path,
        name: impl AsRef<str>,
    ) -> ModexResult<ModuleReport> {
        let ident = ModuleIdent::derive(name.as_ref())?;
        let set = render_module_files(&ident);
        set.validate()?;

        let module_dir = project_root.join(&self.modules_root).join(ident.canonical());
        self.filesystem.create_dir_all(&module_dir)?;

        let mut files = Vec::with_capacity(set.len());
        for file in set.files() {
            self.filesystem
                .write_file(&module_dir.join(&file.name), &file.content)?;
            files.push(file.name.clone());
        }

        info!(files = files.len(), dir = %module_dir.display(), "Module generated");
        Ok(ModuleReport {
            ident,
            module_dir,
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::DomainError;
    use crate::error::ModexError;
    use mockall::mock;

    mock! {
        Fs {}
        impl Filesystem for Fs {
            fn create_dir_all(&self, path: &Path) -> ModexResult<()>;
            fn write_file(&self, path: &Path, content: &str) -> ModexResult<()>;
            fn exists(&self, path: &Path) -> bool;
        }
    }

    #[test]
    fn writes_seven_files_under_the_canonical_directory() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all()
            .withf(|p| p.ends_with("src/app/modules/academicSemester"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| {
                p.parent()
                    .is_some_and(|dir| dir.ends_with("academicSemester"))
            })
            .times(7)
            .returning(|_, _| Ok(()));

        let service = ModuleService::new(Box::new(fs));
        let report = service
            .generate(Path::new("/work/app"), "academic semester")
            .unwrap();

        assert_eq!(report.ident.canonical(), "academicSemester");
        assert_eq!(report.files.len(), 7);
        assert!(report.files[0].ends_with(".interface.ts"));
        assert_eq!(
            report.module_dir,
            PathBuf::from("/work/app/src/app/modules/academicSemester")
        );
    }

    #[test]
    fn a_failed_write_aborts_the_remaining_writes() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| {
                p.file_name()
                    .is_some_and(|n| n == "user.interface.ts" || n == "user.model.ts")
            })
            .times(2)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p.file_name().is_some_and(|n| n == "user.constant.ts"))
            .times(1)
            .returning(|p, _| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            });
        // The four remaining files would be unexpected calls and panic.

        let service = ModuleService::new(Box::new(fs));
        let result = service.generate(Path::new("/work/app"), "User");

        assert!(matches!(
            result,
            Err(ModexError::Application(ApplicationError::FilesystemError { .. }))
        ));
    }

    #[test]
    fn an_unusable_name_touches_nothing() {
        // No expectations: any filesystem call panics.
        let service = ModuleService::new(Box::new(MockFs::new()));
        let result = service.generate(Path::new("/work/app"), "!!!");

        assert!(matches!(
            result,
            Err(ModexError::Domain(DomainError::UnusableModuleName { .. }))
        ));
    }

    #[test]
    fn a_custom_module_root_is_honored() {
        let mut fs = MockFs::new();
        fs.expect_create_dir_all()
            .withf(|p| p.ends_with("lib/modules/user"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file().times(7).returning(|_, _| Ok(()));

        let service = ModuleService::new(Box::new(fs)).with_modules_root("lib/modules");
        let report = service.generate(Path::new("/work/app"), "user").unwrap();

        assert_eq!(report.module_dir, PathBuf::from("/work/app/lib/modules/user"));
    }
}
