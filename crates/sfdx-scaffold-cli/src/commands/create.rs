use anyhow::Result;

use sfdx_scaffold_core::{plan, project, CreateOptions};

use crate::output;
use crate::Cli;

/// Create a new Salesforce DX project.
///
/// Validates every option before touching the filesystem, then writes the
/// project tree and prints a summary (or a JSON result with `--json`).
pub fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    let opts = options_from(cli);

    if !json {
        let name = opts.project_name.as_deref().unwrap_or_default();
        output::print_header(&format!("sfdx-scaffold create: {name}"));
        output::print_step(1, 2, "Validating options");
    }
    let plan = plan::resolve(&opts)?;

    if !json {
        output::print_step(
            2,
            2,
            &format!(
                "Writing {} project to {}",
                plan.descriptor.template,
                plan.output_root.display()
            ),
        );
    }
    let report = project::materialize(&plan)?;

    if json {
        output::print_json_result(&report)?;
        return Ok(());
    }

    for path in &report.created {
        output::print_created(path);
    }
    output::print_success(&format!(
        "Project '{}' created from the {} template",
        plan.project_name, report.template
    ));
    output::print_key_value("Package directory", &plan.package_dir);
    output::print_key_value("API version", &plan.api_version.to_string());
    if !plan.namespace.is_empty() {
        output::print_key_value("Namespace", &plan.namespace);
    }
    println!();
    println!("  Next steps:");
    println!("    cd {}", report.output_dir.display());
    println!("    sf org create scratch --definition-file config/project-scratch-def.json");
    println!();

    Ok(())
}

/// Map parsed flags onto engine options. Empty strings count as "not given".
fn options_from(cli: Cli) -> CreateOptions {
    let non_empty = |s: String| if s.is_empty() { None } else { Some(s) };
    CreateOptions {
        project_name: cli.projectname,
        template: Some(cli.template),
        output_dir: cli.outputdir,
        default_package_dir: cli.defaultpackagedir,
        namespace: non_empty(cli.namespace),
        login_url: cli.loginurl.and_then(non_empty),
        api_version: cli.apiversion.and_then(non_empty),
        manifest: cli.manifest,
    }
}
