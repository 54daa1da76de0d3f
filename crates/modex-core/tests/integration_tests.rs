//! End-to-end tests through the public service API, on in-memory adapters.

use std::path::Path;

use modex_adapters::{MemoryFilesystem, RecordingInstaller};
use modex_core::{
    application::{BootstrapService, Filesystem, ModuleService, ports::StarterArchive},
    domain::BootstrapPlan,
    error::ModexResult,
};

/// Stand-in for the bundled archive: reports a fixed file count.
struct FakeStarter {
    files: usize,
}

impl StarterArchive for FakeStarter {
    fn unpack(&self, _dest: &Path) -> ModexResult<usize> {
        Ok(self.files)
    }
}

#[test]
fn bootstrap_builds_a_complete_project_in_memory() {
    let fs = MemoryFilesystem::new();
    let installer = RecordingInstaller::new();
    let service = BootstrapService::new(
        Box::new(fs.clone()),
        Box::new(FakeStarter { files: 10 }),
        Box::new(installer.clone()),
    );

    let plan = BootstrapPlan::new("shop-api", "/output")
        .unwrap()
        .with_description("inventory backend");
    let report = service.bootstrap(&plan).unwrap();

    assert!(!report.has_failures());
    assert_eq!(report.project_root(), Path::new("/output/shop-api"));
    assert_eq!(report.starter_files(), Some(10));

    let manifest = fs
        .read_file(Path::new("/output/shop-api/package.json"))
        .unwrap();
    assert!(manifest.contains("\"name\": \"shop-api\""));
    assert!(manifest.contains("\"description\": \"inventory backend\""));
    for file in ["tsconfig.json", ".prettierrc", ".eslintrc.json"] {
        assert!(
            fs.exists(&Path::new("/output/shop-api").join(file)),
            "{file} missing"
        );
    }

    let calls = installer.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].project_root, Path::new("/output/shop-api"));
    assert!(!calls[0].dev && calls[0].packages.contains(&"express"));
    assert!(calls[1].dev && calls[1].packages.contains(&"typescript"));
}

#[test]
fn a_taken_path_fails_before_any_write() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("/output/shop-api")).unwrap();
    let installer = RecordingInstaller::new();
    let service = BootstrapService::new(
        Box::new(fs.clone()),
        Box::new(FakeStarter { files: 0 }),
        Box::new(installer.clone()),
    );

    let plan = BootstrapPlan::new("shop-api", "/output").unwrap();
    assert!(service.bootstrap(&plan).is_err());

    assert!(fs.list_files().is_empty());
    assert!(installer.calls().is_empty());
}

#[test]
fn skipping_installs_never_reaches_the_installer() {
    let fs = MemoryFilesystem::new();
    let installer = RecordingInstaller::new();
    let service = BootstrapService::new(
        Box::new(fs.clone()),
        Box::new(FakeStarter { files: 4 }),
        Box::new(installer.clone()),
    );

    let plan = BootstrapPlan::new("shop-api", "/output")
        .unwrap()
        .with_skip_install(true);
    let report = service.bootstrap(&plan).unwrap();

    assert!(!report.has_failures());
    assert!(installer.calls().is_empty());
    assert!(fs.exists(Path::new("/output/shop-api/package.json")));
}

#[test]
fn module_generation_writes_the_seven_file_set() {
    let fs = MemoryFilesystem::new();
    let service = ModuleService::new(Box::new(fs.clone()));

    let report = service
        .generate(Path::new("/app"), "academic semester")
        .unwrap();

    assert_eq!(report.files.len(), 7);
    let dir = Path::new("/app/src/app/modules/academicSemester");
    let model = fs.read_file(&dir.join("academicSemester.model.ts")).unwrap();
    assert!(model.contains("AcademicSemester"));
    let route = fs.read_file(&dir.join("academicSemester.route.ts")).unwrap();
    assert!(route.contains("academicSemester.controller"));
}

#[test]
fn regeneration_overwrites_the_previous_module() {
    let fs = MemoryFilesystem::new();
    let service = ModuleService::new(Box::new(fs.clone()));

    service.generate(Path::new("/app"), "cart").unwrap();
    let paths = fs.list_files();
    let before: Vec<Option<String>> = paths.iter().map(|p| fs.read_file(p)).collect();

    service.generate(Path::new("/app"), "cart").unwrap();

    // Same file set, byte-identical content: no accumulation, no drift.
    assert_eq!(fs.list_files(), paths);
    let after: Vec<Option<String>> = paths.iter().map(|p| fs.read_file(p)).collect();
    assert_eq!(after, before);
}
