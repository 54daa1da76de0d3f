// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Modex.
//!
//! This module contains pure business logic with ZERO I/O dependencies.
//! Filesystem, archive, and process concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No heavy crates**: Only std + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod ident;
pub mod templates;

// Re-exports for convenience
pub use entities::{
    bootstrap::BootstrapPlan,
    manifest::{
        CompilerConfig, DEV_DEPENDENCIES, FormatterConfig, LinterConfig, ManifestScripts,
        ProjectManifest, RUNTIME_DEPENDENCIES,
    },
    module_file::{FileKind, ModuleFile, ModuleFileSet},
};

pub use error::{DomainError, ErrorCategory};
pub use ident::ModuleIdent;
pub use templates::render_module_files;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Identifier Pipeline Tests
    // ========================================================================

    #[test]
    fn identifiers_drive_every_generated_file_name() {
        let ident = ModuleIdent::derive("academic semester").unwrap();
        let set = render_module_files(&ident);

        assert_eq!(
            set.file_names(),
            vec![
                "academicSemester.interface.ts",
                "academicSemester.model.ts",
                "academicSemester.constant.ts",
                "academicSemester.validation.ts",
                "academicSemester.service.ts",
                "academicSemester.controller.ts",
                "academicSemester.route.ts",
            ]
        );
    }

    #[test]
    fn rendered_sets_validate_for_awkward_names() {
        for raw in ["user", "my cool module", "HTTPServer", "2fast2furious"] {
            let ident = ModuleIdent::derive(raw).unwrap();
            let set = render_module_files(&ident);
            assert!(set.validate().is_ok(), "set for {raw:?} failed validation");
        }
    }

    #[test]
    fn derive_and_render_share_one_title() {
        let ident = ModuleIdent::derive("order item").unwrap();
        let set = render_module_files(&ident);
        let model = &set.files()[1];

        assert!(model.content.contains("export const OrderItem"));
        assert_eq!(ident.title(), "OrderItem");
    }

    // ========================================================================
    // Bootstrap Plan Tests
    // ========================================================================

    #[test]
    fn plan_name_flows_into_the_manifest() {
        let plan = BootstrapPlan::new("shop-api", "/tmp")
            .unwrap()
            .with_description("a shop");
        let manifest = ProjectManifest::new(plan.name(), plan.description());
        let body = manifest.to_json().unwrap();

        assert!(body.contains("\"name\": \"shop-api\""));
        assert!(body.contains("\"description\": \"a shop\""));
    }

    #[test]
    fn install_sets_do_not_overlap() {
        for dep in RUNTIME_DEPENDENCIES {
            assert!(!DEV_DEPENDENCIES.contains(dep), "{dep} is in both sets");
        }
    }
}
