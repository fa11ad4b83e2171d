//! Parameter resolution: raw user options in, a fully-resolved [`GenerationPlan`] out.
//!
//! Resolution is pure. Nothing here touches the filesystem or the environment;
//! the CLI reads flags and environment variables and hands the raw values over
//! in [`CreateOptions`].

use std::path::{Path, PathBuf};

use serde_json::{json, Value};

use crate::config::SFDX_PROJECT_FILE;
use crate::error::{Result, ScaffoldError};
use crate::name::{self, ProjectName};
use crate::project::README_FILE;
use crate::templates::{self, embedded, TemplateDescriptor};
use crate::version::ApiVersion;

/// Login URL written into `sfdx-project.json` when `--loginurl` is not given.
pub const DEFAULT_LOGIN_URL: &str = "https://login.salesforce.com";

/// Raw options as supplied by the caller. `None` means "use the default".
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub project_name: Option<String>,
    pub template: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub default_package_dir: Option<String>,
    pub namespace: Option<String>,
    pub login_url: Option<String>,
    pub api_version: Option<String>,
    pub manifest: bool,
}

impl CreateOptions {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: Some(project_name.into()),
            ..Self::default()
        }
    }
}

/// The resolved unit of work consumed by [`crate::project::materialize`].
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub project_name: ProjectName,
    /// `output_dir/project_name`; may contain spaces.
    pub output_root: PathBuf,
    pub package_dir: String,
    /// Empty when no namespace was requested.
    pub namespace: String,
    pub login_url: String,
    pub api_version: ApiVersion,
    pub manifest_requested: bool,
    pub descriptor: &'static TemplateDescriptor,
}

impl GenerationPlan {
    /// `<output_root>/<package_dir>/main/default`.
    pub fn default_dir(&self) -> PathBuf {
        self.output_root
            .join(&self.package_dir)
            .join("main")
            .join("default")
    }

    pub fn substitutions(&self) -> SubstitutionContext {
        SubstitutionContext {
            project_name: self.project_name.to_string(),
            namespace: self.namespace.clone(),
            package_directory_path: self.package_dir.clone(),
            api_version: self.api_version.to_string(),
            login_url: self.login_url.clone(),
        }
    }
}

/// Values substituted into generated files, keyed by a closed set of placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionContext {
    pub project_name: String,
    pub namespace: String,
    pub package_directory_path: String,
    pub api_version: String,
    pub login_url: String,
}

impl SubstitutionContext {
    /// Data context for Handlebars templates, using the placeholder key names.
    pub fn to_value(&self) -> Value {
        json!({
            "projectName": self.project_name,
            "namespace": self.namespace,
            "packageDirectoryPath": self.package_directory_path,
            "apiVersion": self.api_version,
            "loginUrl": self.login_url,
        })
    }
}

/// Resolve raw options into a generation plan.
///
/// Validation order is fixed: project name, then template, then API version,
/// then package directory. The first failure is returned.
pub fn resolve(opts: &CreateOptions) -> Result<GenerationPlan> {
    let project_name = name::validate(opts.project_name.as_deref().unwrap_or(""))?;
    let descriptor = templates::resolve(opts.template.as_deref().unwrap_or("standard"))?;

    let api_version = match opts.api_version.as_deref() {
        Some(raw) => raw.parse::<ApiVersion>()?,
        None => ApiVersion::default(),
    };

    let package_dir = match opts.default_package_dir.as_deref() {
        Some(dir) => validate_package_dir(dir)?,
        None => descriptor.default_package_dir.to_string(),
    };

    let output_dir = opts.output_dir.as_deref().unwrap_or(Path::new("."));
    let output_root = output_dir.join(project_name.as_str());

    Ok(GenerationPlan {
        project_name,
        output_root,
        package_dir,
        namespace: opts.namespace.clone().unwrap_or_default(),
        login_url: opts
            .login_url
            .clone()
            .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string()),
        api_version,
        manifest_requested: opts.manifest,
        descriptor,
    })
}

/// The package directory is a single relative path segment that does not
/// collide with a generated top-level file. Names are compared ignoring ASCII
/// case so the check also holds on case-insensitive filesystems.
fn validate_package_dir(dir: &str) -> Result<String> {
    let mut components = Path::new(dir).components();
    let segment = match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(segment)), None) => segment.to_str(),
        _ => None,
    };
    match segment {
        Some(segment) if !top_level_file_names().any(|f| f.eq_ignore_ascii_case(segment)) => {
            Ok(dir.to_string())
        }
        _ => Err(ScaffoldError::InvalidPackageDir(dir.to_string())),
    }
}

/// Files written directly into the project root.
fn top_level_file_names() -> impl Iterator<Item = &'static str> {
    embedded::TOP_LEVEL_FILES
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| !name.contains('/'))
        .chain([SFDX_PROJECT_FILE, README_FILE])
}
