//! Compile-time embedded assets for project scaffolding.
//!
//! Each constant loads a file from `templates/project/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/sfdx-scaffold-core/src/templates/embedded.rs`).
//!
//! Dotfiles are stored without their leading dot (`forceignore`, `gitignore`, ...) and
//! renamed when written; see [`TOP_LEVEL_FILES`].
//!
//! ## Warning
//!
//! Do NOT rename or move asset files without updating the `include_str!` path here.
//! Do NOT change the Handlebars variables in `.hbs` files without checking what
//! [`crate::project`] and [`crate::manifest`] pass in.

// -------------------------------------------------------
// Files copied verbatim into every project
// -------------------------------------------------------

pub const FORCEIGNORE: &str = include_str!("../../../../templates/project/forceignore");
pub const GITIGNORE: &str = include_str!("../../../../templates/project/gitignore");
pub const PRETTIERIGNORE: &str = include_str!("../../../../templates/project/prettierignore");
pub const PRETTIERRC: &str = include_str!("../../../../templates/project/prettierrc");

pub const VSCODE_EXTENSIONS: &str = include_str!("../../../../templates/project/vscode/extensions.json");
pub const VSCODE_LAUNCH: &str = include_str!("../../../../templates/project/vscode/launch.json");
pub const VSCODE_SETTINGS: &str = include_str!("../../../../templates/project/vscode/settings.json");

/// Top-level files and their destination, relative to the project root.
pub const TOP_LEVEL_FILES: &[(&str, &str)] = &[
    (".forceignore", FORCEIGNORE),
    (".gitignore", GITIGNORE),
    (".prettierignore", PRETTIERIGNORE),
    (".prettierrc", PRETTIERRC),
    (".vscode/extensions.json", VSCODE_EXTENSIONS),
    (".vscode/launch.json", VSCODE_LAUNCH),
    (".vscode/settings.json", VSCODE_SETTINGS),
];

// -------------------------------------------------------
// Placeholder files inside component folders
// -------------------------------------------------------

pub const LWC_ESLINTRC: &str = include_str!("../../../../templates/project/eslint/lwc.json");
pub const AURA_ESLINTRC: &str = include_str!("../../../../templates/project/eslint/aura.json");

// -------------------------------------------------------
// JSON configs (parsed, mutated, re-serialized)
// -------------------------------------------------------

pub const SFDX_PROJECT_JSON: &str = include_str!("../../../../templates/project/config/sfdx-project.json");
pub const SCRATCH_DEF_JSON: &str = include_str!("../../../../templates/project/config/project-scratch-def.json");

// -------------------------------------------------------
// Handlebars templates
// -------------------------------------------------------

pub const README_MD: &str = include_str!("../../../../templates/project/readme/README.md.hbs");
pub const README_STANDARD_BODY: &str = include_str!("../../../../templates/project/readme/standard.md");
pub const README_EMPTY_BODY: &str = include_str!("../../../../templates/project/readme/empty.md");
pub const README_ANALYTICS_BODY: &str = include_str!("../../../../templates/project/readme/analytics.md");

pub const PACKAGE_XML: &str = include_str!("../../../../templates/project/manifest/package.xml.hbs");
