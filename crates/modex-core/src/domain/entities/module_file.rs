use std::collections::HashSet;
use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::ident::ModuleIdent;

/// The seven kinds of generated module files, in generation (and write)
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Interface,
    Model,
    Constant,
    Validation,
    Service,
    Controller,
    Route,
}

impl FileKind {
    pub const ALL: [FileKind; 7] = [
        FileKind::Interface,
        FileKind::Model,
        FileKind::Constant,
        FileKind::Validation,
        FileKind::Service,
        FileKind::Controller,
        FileKind::Route,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Interface => "interface",
            FileKind::Model => "model",
            FileKind::Constant => "constant",
            FileKind::Validation => "validation",
            FileKind::Service => "service",
            FileKind::Controller => "controller",
            FileKind::Route => "route",
        }
    }

    /// File name for this kind under a module's directory, e.g.
    /// `user.interface.ts`.
    pub fn file_name(&self, canonical: &str) -> String {
        format!("{}.{}.ts", canonical, self.as_str())
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One generated file: a name and a body, written once and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleFile {
    pub kind: FileKind,
    pub name: String,
    pub content: String,
}

impl ModuleFile {
    pub fn new(kind: FileKind, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// The complete set of files generated for one module.
///
/// This is the output of template generation, ready for materialization.
/// `validate` checks the structural invariants before anything touches
/// disk: one file per kind, distinct names, and every same-directory
/// import (`./<stem>`) inside a body resolving to another file of the set.
#[derive(Debug, Clone)]
pub struct ModuleFileSet {
    ident: ModuleIdent,
    files: Vec<ModuleFile>,
}

impl ModuleFileSet {
    pub fn new(ident: ModuleIdent, files: Vec<ModuleFile>) -> Self {
        Self { ident, files }
    }

    pub fn ident(&self) -> &ModuleIdent {
        &self.ident
    }

    pub fn files(&self) -> &[ModuleFile] {
        &self.files
    }

    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.files.len() != FileKind::ALL.len() {
            return Err(DomainError::IncompleteModuleSet {
                expected: FileKind::ALL.len(),
                actual: self.files.len(),
            });
        }

        let mut names = HashSet::new();
        for file in &self.files {
            if !names.insert(file.name.as_str()) {
                return Err(DomainError::DuplicateFileName {
                    name: file.name.clone(),
                });
            }
        }

        for file in &self.files {
            for stem in local_import_stems(&file.content) {
                let referenced = format!("{stem}.ts");
                if !names.contains(referenced.as_str()) {
                    return Err(DomainError::DanglingReference {
                        from: file.name.clone(),
                        to: referenced,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Stems of same-directory imports (`'./user.model'` -> `user.model`).
///
/// Imports reaching outside the module directory (`'../../utils/...'`)
/// are satisfied by the starter tree, not the generated set, and are not
/// collected here.
fn local_import_stems(content: &str) -> Vec<&str> {
    let mut stems = Vec::new();
    let mut rest = content;

    while let Some(start) = rest.find("'./") {
        let after = &rest[start + 3..];
        match after.find('\'') {
            Some(end) => {
                stems.push(&after[..end]);
                rest = &after[end + 1..];
            }
            None => break,
        }
    }

    stems
}
