//! Modex Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Modex
//! Express/TypeScript scaffolding tool, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           modex-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (BootstrapService, ModuleService)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Archive, Install)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     modex-adapters (Infrastructure)     │
//! │ (LocalFilesystem, ZipStarterArchive,    │
//! │  NpmInstaller)                          │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ModuleIdent, ModuleFileSet,           │
//! │   ProjectManifest, BootstrapPlan)       │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use modex_core::{
//!     application::ModuleService,
//!     domain::ModuleIdent,
//! };
//! # use std::path::Path;
//! # fn demo(filesystem: Box<dyn modex_core::application::Filesystem>) {
//!
//! // 1. Derive the module identifiers
//! let ident = ModuleIdent::derive("academic semester").unwrap();
//! assert_eq!(ident.canonical(), "academicSemester");
//!
//! // 2. Use the application service (with an injected adapter)
//! let service = ModuleService::new(filesystem);
//! service.generate(Path::new("."), "academic semester").unwrap();
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BootstrapReport, BootstrapService, ModuleReport, ModuleService,
        ports::{Filesystem, Installer, StarterArchive},
    };
    pub use crate::domain::{
        BootstrapPlan, FileKind, ModuleFileSet, ModuleIdent, ProjectManifest,
        render_module_files,
    };
    pub use crate::error::{ModexError, ModexResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
