//! Project tree materialization.
//!
//! Writes a resolved [`GenerationPlan`] to disk:
//! ```text
//! <outputdir>/<projectname>/
//! ├── .forceignore, .gitignore, .prettierignore, .prettierrc
//! ├── .vscode/{extensions,launch,settings}.json
//! ├── config/project-scratch-def.json
//! ├── sfdx-project.json
//! ├── README.md
//! ├── manifest/package.xml          # only with --manifest
//! └── <packagedir>/main/default/
//!     ├── <content folders>         # classes, objects, triggers, ...
//!     └── <placeholder folders>     # lwc, aura, waveTemplates
//! ```
//!
//! Every generated document is rendered in memory before the first directory is
//! created, so rendering problems never leave anything behind. If a write fails
//! after the project root was created, the root is removed again, together with
//! any missing parents of `outputdir` this run created.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::json;

use crate::config::{self, SCRATCH_DEF_FILE, SFDX_PROJECT_FILE};
use crate::error::{Result, ScaffoldError};
use crate::manifest::{self, MANIFEST_FILE};
use crate::plan::{self, CreateOptions, GenerationPlan};
use crate::templates::renderer::TemplateRenderer;
use crate::templates::{embedded, Template};

pub const README_FILE: &str = "README.md";

/// What a successful run created.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub template: Template,
    /// Every created directory (intermediate ones included) and file, relative to
    /// `output_dir`, in creation order.
    pub created: Vec<PathBuf>,
}

/// Resolve options and materialize the resulting plan.
pub fn generate(opts: &CreateOptions) -> Result<GenerationReport> {
    let plan = plan::resolve(opts)?;
    materialize(&plan)
}

/// Create the project tree described by `plan`.
pub fn materialize(plan: &GenerationPlan) -> Result<GenerationReport> {
    let documents = render_documents(plan)?;

    let root = &plan.output_root;
    if root.exists() {
        return Err(ScaffoldError::DestinationExists(root.clone()));
    }
    let mut created_parents = Vec::new();
    if let Some(parent) = root.parent().filter(|p| !p.as_os_str().is_empty()) {
        created_parents = missing_ancestors(parent);
        std::fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }
    let created_root = std::fs::create_dir(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::AlreadyExists => ScaffoldError::DestinationExists(root.clone()),
        _ => ScaffoldError::io(root, e),
    });
    if let Err(err) = created_root {
        remove_created_parents(&created_parents);
        return Err(err);
    }
    tracing::info!("creating {} project at {}", plan.descriptor.template, root.display());

    let mut tree = TreeWriter::new(root);
    write_or_clean_up(root, &created_parents, || write_tree(&mut tree, plan, &documents))?;
    Ok(GenerationReport {
        output_dir: root.clone(),
        template: plan.descriptor.template,
        created: tree.created,
    })
}

/// Run `write`; on failure remove `root` and the parents this run created.
fn write_or_clean_up<T>(
    root: &Path,
    created_parents: &[PathBuf],
    write: impl FnOnce() -> Result<T>,
) -> Result<T> {
    write().inspect_err(|_| {
        if let Err(cleanup) = std::fs::remove_dir_all(root) {
            tracing::warn!(
                "failed to remove partial project at {}: {cleanup}",
                root.display()
            );
        }
        remove_created_parents(created_parents);
    })
}

/// Ancestors of `dir` (including itself) that do not exist yet, innermost first.
fn missing_ancestors(dir: &Path) -> Vec<PathBuf> {
    dir.ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .take_while(|p| !p.exists())
        .map(Path::to_path_buf)
        .collect()
}

fn remove_created_parents(created_parents: &[PathBuf]) {
    for dir in created_parents {
        if let Err(err) = std::fs::remove_dir(dir) {
            tracing::warn!("failed to remove {}: {err}", dir.display());
            break;
        }
    }
}

/// Documents whose content depends on the plan, rendered up front.
struct Documents {
    sfdx_project: String,
    scratch_def: String,
    readme: String,
    manifest: Option<String>,
}

fn render_documents(plan: &GenerationPlan) -> Result<Documents> {
    let ctx = plan.substitutions();
    let descriptor = plan.descriptor;

    let readme = TemplateRenderer::markdown().render(
        embedded::README_MD,
        &json!({
            "banner": descriptor.readme_banner,
            "body": descriptor.readme_body,
            "projectName": ctx.project_name,
            "template": descriptor.template.as_str(),
        }),
    )?;

    let manifest = if plan.manifest_requested {
        Some(manifest::render(plan)?)
    } else {
        None
    };

    Ok(Documents {
        sfdx_project: config::render_sfdx_project(&ctx)?,
        scratch_def: config::render_scratch_def(plan)?,
        readme,
        manifest,
    })
}

fn write_tree(tree: &mut TreeWriter, plan: &GenerationPlan, docs: &Documents) -> Result<()> {
    let descriptor = plan.descriptor;
    let default_dir = Path::new(&plan.package_dir).join("main").join("default");

    tracing::info!("creating package directory {}", plan.package_dir);
    for folder in descriptor.folders() {
        tree.dir(&default_dir.join(folder))?;
    }
    for file in descriptor.placeholder_files {
        tree.file(&default_dir.join(relative(file.path)), file.contents)?;
    }

    tracing::info!("writing project files");
    for (name, contents) in embedded::TOP_LEVEL_FILES {
        tree.file(&relative(name), contents)?;
    }
    tree.file(&relative(SCRATCH_DEF_FILE), &docs.scratch_def)?;
    tree.file(Path::new(SFDX_PROJECT_FILE), &docs.sfdx_project)?;
    tree.file(Path::new(README_FILE), &docs.readme)?;

    if let Some(manifest) = &docs.manifest {
        tracing::info!("writing manifest");
        tree.file(&relative(MANIFEST_FILE), manifest)?;
    }
    Ok(())
}

/// Turn a `/`-separated asset path into a platform path.
fn relative(path: &str) -> PathBuf {
    path.split('/').collect()
}

/// Creates entries under a root and records what it created.
struct TreeWriter {
    root: PathBuf,
    created: Vec<PathBuf>,
}

impl TreeWriter {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            created: Vec::new(),
        }
    }

    /// Create `rel` one level at a time so every new directory is recorded.
    fn dir(&mut self, rel: &Path) -> Result<()> {
        let path = self.root.join(rel);
        if path.is_dir() {
            return Ok(());
        }
        if let Some(parent) = rel.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.dir(parent)?;
        }
        std::fs::create_dir(&path).map_err(|e| ScaffoldError::io(&path, e))?;
        tracing::debug!("created directory {}", path.display());
        self.created.push(rel.to_path_buf());
        Ok(())
    }

    fn file(&mut self, rel: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = rel.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.dir(parent)?;
        }
        let path = self.root.join(rel);
        std::fs::write(&path, contents).map_err(|e| ScaffoldError::io(&path, e))?;
        tracing::debug!("wrote {}", path.display());
        self.created.push(rel.to_path_buf());
        Ok(())
    }
}
