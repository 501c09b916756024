mod output;

use accessory::naming::output_file;
use accessory::{Error, GenerateOptions, OsFilesystem, generate, is_up_to_date, render, scan_directory};
use anyhow::{Context, Result, bail};
use clap::Parser;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use output::OutputManager;

#[derive(Parser, Debug)]
#[command(name = "accessory", version = accessory::VERSION)]
#[command(about = "Generate getter and setter methods for struct fields tagged with #[accessor]")]
#[command(after_help = "Examples:\n  accessory --type User src/models\n  accessory --type User --receiver self --output user_methods.rs src/models\n  accessory --type User --check src/models")]
struct Cli {
    /// Struct to generate accessors for
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    type_name: String,

    /// Name bound to `self` in accessor bodies; `self` disables the binding
    /// [default: first letter of TYPE, lowercased]
    #[arg(short, long, env = "ACCESSORY_RECEIVER")]
    receiver: Option<String>,

    /// Output file, relative to DIRECTORY [default: <type>_accessor.rs]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Exit with an error if the generated file is missing or out of date
    #[arg(long, conflicts_with = "dry_run")]
    check: bool,

    /// Print the generated source instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Write the unformatted output if formatting fails
    #[arg(long)]
    keep_unformatted: bool,

    /// Enable verbose output
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Directory holding the type's source files
    #[arg(default_value = ".")]
    directory: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let output = OutputManager::new(cli.quiet, cli.no_color);

    match execute(&cli, &output) {
        Ok(code) => code,
        Err(err) => {
            output.error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn execute(cli: &Cli, output: &OutputManager) -> Result<ExitCode> {
    ensure_directory(&cli.directory)?;

    let package =
        scan_directory(&cli.directory).with_context(|| format!("failed to scan {}", cli.directory.display()))?;

    let options = GenerateOptions {
        output: cli.output.clone(),
        receiver: cli.receiver.clone(),
        persist_unformatted: cli.keep_unformatted,
    };
    debug!("generating accessors for `{}` with {options:?}", cli.type_name);

    debug!(
        "module `{}` has {} source files",
        package.name,
        package.files.len()
    );

    if cli.dry_run {
        let rendered = render(&package, &cli.type_name, &options)?;
        print!("{}", rendered.source);
        return Ok(ExitCode::SUCCESS);
    }

    if cli.check {
        let rendered = render(&package, &cli.type_name, &options)?;
        if is_up_to_date(&OsFilesystem, &rendered) {
            output.success(&format!("{} is up to date", rendered.path.display()));
            return Ok(ExitCode::SUCCESS);
        }
        output.error(&format!(
            "{} is out of date; run `accessory --type {}` to regenerate it",
            rendered.path.display(),
            cli.type_name
        ));
        return Ok(ExitCode::FAILURE);
    }

    let report = match generate(&OsFilesystem, &package, &cli.type_name, &options) {
        Ok(report) => report,
        Err(Error::Format(err)) if cli.keep_unformatted => {
            let path = output_file(cli.output.as_deref(), &cli.type_name, &package.directory);
            output.warning(&format!("unformatted output kept at {}", path.display()));
            return Err(Error::Format(err).into());
        }
        Err(err) => return Err(err.into()),
    };

    if report.written {
        output.success(&format!(
            "Generated {} ({} accessors)",
            report.path.display(),
            report.accessors
        ));
    } else {
        output.info(&format!("{} is up to date", report.path.display()));
    }

    Ok(ExitCode::SUCCESS)
}

fn ensure_directory(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).with_context(|| format!("cannot access {}", path.display()))?;
    if !metadata.is_dir() {
        bail!("{} is not a directory", path.display());
    }
    Ok(())
}
