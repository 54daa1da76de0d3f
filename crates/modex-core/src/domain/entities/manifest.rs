use serde::Serialize;

use crate::domain::error::DomainError;

/// Manifest file name written at the project root.
pub const MANIFEST_FILE: &str = "package.json";
/// Compiler configuration file name.
pub const COMPILER_CONFIG_FILE: &str = "tsconfig.json";
/// Formatter configuration file name.
pub const FORMATTER_CONFIG_FILE: &str = ".prettierrc";
/// Linter configuration file name.
pub const LINTER_CONFIG_FILE: &str = ".eslintrc.json";

/// Packages installed into every new project.
pub const RUNTIME_DEPENDENCIES: &[&str] = &[
    "express",
    "cors",
    "mongoose",
    "zod",
    "dotenv",
    "cookie-parser",
    "http-status",
];

/// Development packages, installed only after the runtime set succeeds.
pub const DEV_DEPENDENCIES: &[&str] = &[
    "typescript",
    "ts-node-dev",
    "prettier",
    "eslint",
    "typescript-eslint",
    "eslint-plugin-prettier",
    "eslint-config-prettier",
    "@types/node",
    "@types/express",
    "@types/cors",
];

/// The `package.json` body: serialized once at project creation and never
/// read back. Field order is the serialization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectManifest {
    name: String,
    version: &'static str,
    description: String,
    main: &'static str,
    scripts: ManifestScripts,
    dependencies: serde_json::Map<String, serde_json::Value>,
    #[serde(rename = "devDependencies")]
    dev_dependencies: serde_json::Map<String, serde_json::Value>,
}

impl ProjectManifest {
    /// Build the manifest for a project. The dependency maps start empty;
    /// the external installer fills them in on its own.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: "1.0.0",
            description: description.into(),
            main: "index.js",
            scripts: ManifestScripts::default(),
            dependencies: serde_json::Map::new(),
            dev_dependencies: serde_json::Map::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        to_pretty_json(self)
    }
}

/// Fixed script commands emitted into the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestScripts {
    build: &'static str,
    prod: &'static str,
    dev: &'static str,
    lint: &'static str,
    format: &'static str,
    #[serde(rename = "format:fix")]
    format_fix: &'static str,
    test: &'static str,
}

impl Default for ManifestScripts {
    fn default() -> Self {
        Self {
            build: "tsc",
            prod: "node ./dist/server.js",
            dev: "ts-node-dev --respawn --transpile-only src/server.ts",
            lint: "eslint src",
            format: r#"prettier --ignore-path .gitignore --write "**/*.+(js|ts|json)""#,
            format_fix: "npx prettier --write src",
            test: r#"echo "Error: no test specified" && exit 1"#,
        }
    }
}

/// The `tsconfig.json` body. All values are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerConfig {
    #[serde(rename = "compilerOptions")]
    compiler_options: CompilerOptions,
    include: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    out_dir: &'static str,
    module: &'static str,
    target: &'static str,
    es_module_interop: bool,
    strict: bool,
    base_url: &'static str,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions {
                out_dir: "./dist",
                module: "commonjs",
                target: "ES6",
                es_module_interop: true,
                strict: true,
                base_url: "./",
            },
            include: vec!["src/**/*"],
        }
    }
}

impl CompilerConfig {
    pub fn to_json(&self) -> Result<String, DomainError> {
        to_pretty_json(self)
    }
}

/// The `.prettierrc` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatterConfig {
    #[serde(rename = "singleQuote")]
    single_quote: bool,
    semi: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            single_quote: true,
            semi: false,
        }
    }
}

impl FormatterConfig {
    pub fn to_json(&self) -> Result<String, DomainError> {
        to_pretty_json(self)
    }
}

/// The `.eslintrc.json` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinterConfig {
    env: LinterEnv,
    extends: &'static str,
    rules: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct LinterEnv {
    node: bool,
    es6: bool,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            env: LinterEnv {
                node: true,
                es6: true,
            },
            extends: "eslint:recommended",
            rules: serde_json::Map::new(),
        }
    }
}

impl LinterConfig {
    pub fn to_json(&self) -> Result<String, DomainError> {
        to_pretty_json(self)
    }
}

// Two-space indentation, matching the manifest files editors expect.
fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, DomainError> {
    serde_json::to_string_pretty(value).map_err(|e| DomainError::SerializationFailed {
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn manifest_has_the_fixed_field_set() {
        let manifest = ProjectManifest::new("shop-api", "an api");
        let value: Value = serde_json::from_str(&manifest.to_json().unwrap()).unwrap();

        assert_eq!(value["name"], "shop-api");
        assert_eq!(value["version"], "1.0.0");
        assert_eq!(value["description"], "an api");
        assert_eq!(value["main"], "index.js");
        assert_eq!(value["scripts"]["build"], "tsc");
        assert_eq!(value["scripts"]["prod"], "node ./dist/server.js");
        assert_eq!(
            value["scripts"]["dev"],
            "ts-node-dev --respawn --transpile-only src/server.ts"
        );
        assert_eq!(value["scripts"]["format:fix"], "npx prettier --write src");
        assert_eq!(value["dependencies"], json!({}));
        assert_eq!(value["devDependencies"], json!({}));
    }

    #[test]
    fn manifest_serializes_name_first_with_two_space_indent() {
        let manifest = ProjectManifest::new("shop-api", "");
        let body = manifest.to_json().unwrap();
        assert!(body.starts_with("{\n  \"name\": \"shop-api\""), "{body}");
    }

    #[test]
    fn compiler_config_matches_the_fixed_shape() {
        let value: Value =
            serde_json::from_str(&CompilerConfig::default().to_json().unwrap()).unwrap();

        assert_eq!(value["compilerOptions"]["outDir"], "./dist");
        assert_eq!(value["compilerOptions"]["module"], "commonjs");
        assert_eq!(value["compilerOptions"]["target"], "ES6");
        assert_eq!(value["compilerOptions"]["esModuleInterop"], true);
        assert_eq!(value["compilerOptions"]["strict"], true);
        assert_eq!(value["compilerOptions"]["baseUrl"], "./");
        assert_eq!(value["include"], json!(["src/**/*"]));
    }

    #[test]
    fn formatter_and_linter_configs_match_their_fixed_shapes() {
        let prettier: Value =
            serde_json::from_str(&FormatterConfig::default().to_json().unwrap()).unwrap();
        assert_eq!(prettier, json!({ "singleQuote": true, "semi": false }));

        let eslint: Value =
            serde_json::from_str(&LinterConfig::default().to_json().unwrap()).unwrap();
        assert_eq!(
            eslint,
            json!({
                "env": { "node": true, "es6": true },
                "extends": "eslint:recommended",
                "rules": {}
            })
        );
    }

    #[test]
    fn dependency_lists_are_the_fixed_install_sets() {
        assert_eq!(RUNTIME_DEPENDENCIES.len(), 7);
        assert!(RUNTIME_DEPENDENCIES.contains(&"express"));
        assert!(RUNTIME_DEPENDENCIES.contains(&"mongoose"));
        assert_eq!(DEV_DEPENDENCIES.len(), 10);
        assert!(DEV_DEPENDENCIES.contains(&"typescript"));
        assert!(DEV_DEPENDENCIES.contains(&"@types/express"));
    }
}
