//! CLI entrypoint for the libvips compat shim audit tooling.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use vips_compat_core::manifest::{BUILTIN_MANIFEST, SymbolDisposition, entries_for_skew};
use vips_compat_core::version::LibraryVersion;
use vips_compat_harness::{AuditReport, HarnessError, ManifestReport, load_symbol_file};

/// Symbol drift audit tooling for the libvips compat shim.
#[derive(Debug, Parser)]
#[command(name = "vips-compat-audit")]
#[command(about = "Audit libvips symbol drift against the compat shim manifest")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the built-in drift manifest.
    Manifest {
        /// Output format: `plain` or `json`.
        #[arg(long, default_value = "plain")]
        format: String,
    },
    /// Audit a referenced-symbols dump against an exported-symbols dump.
    Audit {
        /// Symbol dump of names the binding layer references.
        #[arg(long)]
        referenced: PathBuf,
        /// Symbol dump of names the native binary exports.
        #[arg(long)]
        exported: PathBuf,
        /// Optional JSON report path; the plain summary always goes to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List the shim entries a binding/binary version pair requires.
    Skew {
        /// libvips version the binding was generated against (e.g. 8.15.1).
        #[arg(long)]
        built_against: String,
        /// libvips version of the deployed binary (e.g. 8.18.0).
        #[arg(long)]
        deployed: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<ExitCode, HarnessError> {
    match command {
        Command::Manifest { format } => {
            let report = ManifestReport::builtin();
            match format.as_str() {
                "plain" => print!("{}", report.render_plain()),
                "json" => println!("{}", report.to_json()?),
                other => return Err(HarnessError::UnknownFormat(other.to_string())),
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Audit {
            referenced,
            exported,
            output,
        } => {
            let referenced = load_symbol_file(&referenced)?;
            let exported = load_symbol_file(&exported)?;
            let audit =
                vips_compat_core::audit::audit_symbols(&referenced, &exported, BUILTIN_MANIFEST);
            let report = AuditReport::from_audit(&audit);

            print!("{}", report.render_plain());
            if let Some(path) = output {
                std::fs::write(&path, report.to_json()?).map_err(|source| {
                    HarnessError::Write {
                        path: path.clone(),
                        source,
                    }
                })?;
            }

            if report.link_clean {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Command::Skew {
            built_against,
            deployed,
        } => {
            let built_against: LibraryVersion = built_against.parse()?;
            let deployed: LibraryVersion = deployed.parse()?;
            let required = entries_for_skew(built_against, deployed);

            if required.is_empty() {
                println!("no shim entries required for {built_against} -> {deployed}");
            } else {
                println!(
                    "{} shim entr{} required for {built_against} -> {deployed}:",
                    required.len(),
                    if required.len() == 1 { "y" } else { "ies" }
                );
                for e in required {
                    let detail = match e.disposition {
                        SymbolDisposition::Forward { target } => format!("forward -> {target}"),
                        SymbolDisposition::Stub { sentinel } => {
                            format!("stub, returns {sentinel}")
                        }
                    };
                    println!("  {:<24} {detail}", e.old_name);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
