use anyhow::bail;
use clap::Parser;

mod cli;
mod domain;
mod services;

use crate::cli::{Cli, Commands};
use crate::services::copyright::enforce_tree;
use crate::services::output::print_report;
use crate::services::packaging::zip_tree;
use crate::services::scaffold::create_module;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Copyright { check } => {
            if !cli.json {
                if *check {
                    println!("Checking copyright notices in {}...", cli.root.display());
                } else {
                    println!("Replacing copyright notices in {}...", cli.root.display());
                }
                println!();
            }
            let report = enforce_tree(&cli.root, *check)?;
            let compliant = !*check || report.count == 0;
            print_report(cli.json, compliant, &report, |r| {
                let mut lines: Vec<String> = r
                    .updated
                    .iter()
                    .map(|p| {
                        if r.check_only {
                            format!("Missing notice in {p}")
                        } else {
                            format!("Updating {p}")
                        }
                    })
                    .collect();
                lines.push(String::new());
                lines.push(if r.check_only {
                    format!("Checked: {} files missing the copyright notice.", r.count)
                } else {
                    format!("Completed successfully: {} files updated.", r.count)
                });
                lines
            })?;
            if *check && report.count > 0 {
                bail!("{} files missing copyright notice", report.count);
            }
        }
        Commands::Package {
            mode,
            source_dir,
            output,
        } => {
            if !cli.json {
                println!("Zipping {} to {}", source_dir.display(), output.display());
            }
            let report = zip_tree(source_dir, output, *mode)?;
            print_report(cli.json, true, &report, |r| {
                let mut lines: Vec<String> =
                    r.files.iter().map(|f| format!("Writing {f}")).collect();
                lines.push(String::new());
                lines.push(format!("Zip created successfully: {}", r.archive));
                lines
            })?;
        }
        Commands::Module { name } => {
            if !cli.json {
                println!("Creating module {name}");
            }
            let report = create_module(&cli.root, name)?;
            print_report(cli.json, true, &report, |r| {
                let mut lines: Vec<String> =
                    r.created.iter().map(|f| format!("Writing {f}")).collect();
                lines.push(format!("Registered {} in {}", r.module, r.project_file));
                lines
            })?;
        }
    }

    Ok(())
}
