//! Terminal output formatting for the sfdx-scaffold CLI.
//!
//! Provides consistent, colored output using the [`console`] crate. Progress and
//! results go to stdout, errors to stderr.

use std::path::Path;

use console::style;
use serde::Serialize;
use serde_json::json;

use sfdx_scaffold_core::{GenerationReport, ScaffoldError};

/// Print a bold cyan header with an underline separator.
pub fn print_header(text: &str) {
    println!("\n{}", style(text).bold().cyan());
    println!("{}", style("=".repeat(text.len())).dim());
}

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    println!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a progress step indicator like `[1/2] Validating options`.
pub fn print_step(step: u32, total: u32, text: &str) {
    println!("{} {}", style(format!("[{step}/{total}]")).dim(), text);
}

/// Print a key-value pair with dimmed key formatting.
pub fn print_key_value(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

pub fn print_created(path: &Path) {
    println!("  {} {}", style("create").green(), path.display());
}

/// Print the `--json` success envelope.
pub fn print_json_result(report: &GenerationReport) -> anyhow::Result<()> {
    println!("{}", envelope(0, report)?);
    Ok(())
}

/// Report a failed run on stderr, as `[ERROR] <kind>: <message>` or as JSON.
pub fn report_error(err: &anyhow::Error, json: bool) {
    let text = format_error(err, json);
    if json {
        eprintln!("{text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Error text without terminal styling: `<kind>: <message>`, or the JSON
/// envelope `{"status":1,"name":<kind>,"message":...}`.
pub fn format_error(err: &anyhow::Error, json: bool) -> String {
    let kind = err
        .downcast_ref::<ScaffoldError>()
        .map(ScaffoldError::kind)
        .unwrap_or("Error");
    let message = format!("{err:#}");

    if json {
        json!({ "status": 1, "name": kind, "message": message }).to_string()
    } else {
        format!("{kind}: {message}")
    }
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    status: i32,
    result: &'a T,
}

fn envelope<T: Serialize>(status: i32, result: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Envelope { status, result })
}
