//! sfdx-scaffold CLI — generate a Salesforce DX project from a template.
//!
//! A single command: validate the project name, resolve the template, and write
//! the project tree under `<outputdir>/<projectname>`. All decision logic lives in
//! [`sfdx_scaffold_core`]; this binary only parses flags, sets up logging and
//! reports the outcome.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sfdx-scaffold",
    about = "Create a Salesforce DX project from the standard, empty or analytics template",
    version
)]
pub struct Cli {
    /// Name of the generated project (letters, digits and single underscores)
    #[arg(short = 'n', long = "projectname")]
    projectname: Option<String>,

    /// Directory to create the project in (default: current directory)
    #[arg(short = 'd', long = "outputdir")]
    outputdir: Option<PathBuf>,

    /// Template to use: standard, empty or analytics
    #[arg(short = 't', long, default_value = "standard")]
    template: String,

    /// Default package directory name (default: force-app)
    #[arg(short = 'p', long = "defaultpackagedir")]
    defaultpackagedir: Option<String>,

    /// Namespace associated with the project
    #[arg(short = 's', long, default_value = "")]
    namespace: String,

    /// Generate a manifest/package.xml for change-set based development
    #[arg(short = 'x', long)]
    manifest: bool,

    /// Login URL written into sfdx-project.json
    #[arg(long = "loginurl")]
    loginurl: Option<String>,

    /// Source API version stamped into generated files (e.g. 58.0)
    #[arg(long = "apiversion", env = "SFDX_API_VERSION")]
    apiversion: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let json = cli.json;
    match commands::create::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report_error(&err, json);
            ExitCode::FAILURE
        }
    }
}
