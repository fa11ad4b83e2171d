//! Template registry for project scaffolding.
//!
//! The set of templates is closed: each [`Template`] variant maps to a static
//! [`TemplateDescriptor`] describing which folders are created under
//! `<packagedir>/main/default`, which placeholder files they receive, which
//! scratch org features are enabled and which metadata types the manifest lists.
//! Adding a template is a code change here, not configuration.
//!
//! Asset contents live in [`embedded`] and are rendered with
//! [`renderer::TemplateRenderer`].

pub mod embedded;
pub mod renderer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, ScaffoldError};

/// Package directory used when `--defaultpackagedir` is not given.
pub const DEFAULT_PACKAGE_DIR: &str = "force-app";

/// Banner heading every generated README.
pub const README_BANNER: &str = "# Salesforce App";

/// A project template identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Standard,
    Empty,
    Analytics,
}

impl Template {
    pub const ALL: [Template; 3] = [Self::Standard, Self::Empty, Self::Analytics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Empty => "empty",
            Self::Analytics => "analytics",
        }
    }

    /// The static asset-set descriptor for this template.
    pub fn descriptor(&self) -> &'static TemplateDescriptor {
        match self {
            Self::Standard => &STANDARD,
            Self::Empty => &EMPTY,
            Self::Analytics => &ANALYTICS,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Template {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(Self::Standard),
            "empty" => Ok(Self::Empty),
            "analytics" => Ok(Self::Analytics),
            _ => Err(ScaffoldError::InvalidTemplate(s.to_string())),
        }
    }
}

/// Resolve a template identifier to its descriptor.
pub fn resolve(template_id: &str) -> Result<&'static TemplateDescriptor> {
    Ok(template_id.parse::<Template>()?.descriptor())
}

/// A file written inside a component folder, relative to `<packagedir>/main/default`.
#[derive(Debug, PartialEq, Eq)]
pub struct PlaceholderFile {
    pub path: &'static str,
    pub contents: &'static str,
}

/// A metadata type listed in `manifest/package.xml`.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ManifestType {
    pub name: &'static str,
    pub members: &'static [&'static str],
}

/// Everything a template contributes to a generated project.
#[derive(Debug, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub template: Template,
    /// Package directory name when the user does not override it.
    pub default_package_dir: &'static str,
    /// Folders that hold default metadata content.
    pub content_folders: &'static [&'static str],
    /// Extension points created with no real content.
    pub empty_folders: &'static [&'static str],
    /// Static files copied into the folders above (linting configs).
    pub placeholder_files: &'static [PlaceholderFile],
    /// Features written into `config/project-scratch-def.json`.
    pub scratch_features: &'static [&'static str],
    /// Metadata types listed in `manifest/package.xml`.
    pub manifest_types: &'static [ManifestType],
    pub readme_banner: &'static str,
    pub readme_body: &'static str,
}

impl TemplateDescriptor {
    /// All folders created under `<packagedir>/main/default`, content folders first.
    pub fn folders(&self) -> impl Iterator<Item = &'static str> {
        let content: &'static [&'static str] = self.content_folders;
        let empty: &'static [&'static str] = self.empty_folders;
        content.iter().chain(empty.iter()).copied()
    }
}

const STANDARD_FOLDERS: &[&str] = &[
    "applications",
    "aura",
    "classes",
    "contentassets",
    "flexipages",
    "layouts",
    "objects",
    "permissionsets",
    "staticresources",
    "tabs",
    "triggers",
];

const STANDARD_PLACEHOLDERS: &[PlaceholderFile] = &[
    PlaceholderFile {
        path: "lwc/.eslintrc.json",
        contents: embedded::LWC_ESLINTRC,
    },
    PlaceholderFile {
        path: "aura/.eslintrc.json",
        contents: embedded::AURA_ESLINTRC,
    },
];

const WILDCARD: &[&str] = &["*"];

const fn wildcard(name: &'static str) -> ManifestType {
    ManifestType {
        name,
        members: WILDCARD,
    }
}

const STANDARD_MANIFEST: &[ManifestType] = &[
    wildcard("ApexClass"),
    wildcard("ApexComponent"),
    wildcard("ApexPage"),
    wildcard("ApexTestSuite"),
    wildcard("ApexTrigger"),
    wildcard("AuraDefinitionBundle"),
    wildcard("CustomObject"),
    wildcard("LightningComponentBundle"),
    wildcard("StaticResource"),
];

const ANALYTICS_MANIFEST: &[ManifestType] = &[
    wildcard("ApexClass"),
    wildcard("ApexComponent"),
    wildcard("ApexPage"),
    wildcard("ApexTestSuite"),
    wildcard("ApexTrigger"),
    wildcard("AuraDefinitionBundle"),
    wildcard("CustomObject"),
    wildcard("LightningComponentBundle"),
    wildcard("StaticResource"),
    wildcard("WaveTemplateBundle"),
];

static STANDARD: TemplateDescriptor = TemplateDescriptor {
    template: Template::Standard,
    default_package_dir: DEFAULT_PACKAGE_DIR,
    content_folders: STANDARD_FOLDERS,
    empty_folders: &["lwc"],
    placeholder_files: STANDARD_PLACEHOLDERS,
    scratch_features: &[],
    manifest_types: STANDARD_MANIFEST,
    readme_banner: README_BANNER,
    readme_body: embedded::README_STANDARD_BODY,
};

static EMPTY: TemplateDescriptor = TemplateDescriptor {
    template: Template::Empty,
    default_package_dir: DEFAULT_PACKAGE_DIR,
    content_folders: &[],
    empty_folders: &["aura", "lwc"],
    placeholder_files: &[],
    scratch_features: &[],
    manifest_types: &[],
    readme_banner: README_BANNER,
    readme_body: embedded::README_EMPTY_BODY,
};

static ANALYTICS: TemplateDescriptor = TemplateDescriptor {
    template: Template::Analytics,
    default_package_dir: DEFAULT_PACKAGE_DIR,
    content_folders: STANDARD_FOLDERS,
    empty_folders: &["lwc", "waveTemplates"],
    placeholder_files: STANDARD_PLACEHOLDERS,
    scratch_features: &["AnalyticsAdminPerms", "EinsteinAnalyticsPlus"],
    manifest_types: ANALYTICS_MANIFEST,
    readme_banner: README_BANNER,
    readme_body: embedded::README_ANALYTICS_BODY,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_templates() {
        for template in Template::ALL {
            let descriptor = resolve(template.as_str()).unwrap();
            assert_eq!(descriptor.template, template);
        }
    }

    #[test]
    fn test_resolve_unknown_template() {
        let err = resolve("foo").unwrap_err();
        assert_eq!(err.kind(), "InvalidTemplate");
        // identifiers are case-sensitive
        assert!(resolve("Standard").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        for template in Template::ALL {
            let first = resolve(template.as_str()).unwrap();
            let second = resolve(template.as_str()).unwrap();
            assert!(std::ptr::eq(first, second));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_placeholder_files_live_in_declared_folders() {
        for template in Template::ALL {
            let descriptor = template.descriptor();
            let folders: Vec<_> = descriptor.folders().collect();
            for file in descriptor.placeholder_files {
                let (folder, _) = file.path.split_once('/').unwrap();
                assert!(folders.contains(&folder), "{} in {template}", file.path);
            }
        }
    }

    #[test]
    fn test_empty_template_has_only_placeholder_folders() {
        let empty = Template::Empty.descriptor();
        assert!(empty.content_folders.is_empty());
        assert!(empty.placeholder_files.is_empty());
        assert_eq!(empty.empty_folders, &["aura", "lwc"]);
        assert!(empty.manifest_types.is_empty());
    }

    #[test]
    fn test_analytics_contributions() {
        let analytics = Template::Analytics.descriptor();
        assert_eq!(
            analytics.scratch_features,
            &["AnalyticsAdminPerms", "EinsteinAnalyticsPlus"]
        );
        assert!(analytics.empty_folders.contains(&"waveTemplates"));
        assert!(analytics
            .manifest_types
            .iter()
            .any(|t| t.name == "WaveTemplateBundle"));
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&Template::Analytics).unwrap(),
            "\"analytics\""
        );
    }
}
