//! `tdt-bench baseline` - write the curated baseline fixture set
//!
//! Emits one realistic product's worth of entities (an industrial
//! linear actuator) as importable CSV files. Content is literal data,
//! not sampled: every run produces identical output.

use console::style;
use miette::{miette, Result};
use std::fs;
use std::path::PathBuf;

use crate::core::write_fixture;
use crate::entities::EntityKind;

#[derive(clap::Args, Debug)]
pub struct BaselineArgs {
    /// Output directory for the fixture files (created if missing)
    #[arg(default_value = "baseline_csvs")]
    pub output: PathBuf,
}

pub fn run(args: BaselineArgs) -> Result<()> {
    fs::create_dir_all(&args.output)
        .map_err(|e| miette!("failed to create {}: {}", args.output.display(), e))?;

    println!(
        "{} Generating baseline fixtures in {}/",
        style("→").blue(),
        args.output.display()
    );
    println!();

    for kind in EntityKind::ALL {
        let records = kind.baseline();
        let path = args.output.join(kind.fixture_file());
        write_fixture(&path, kind.csv_headers(), &records)
            .map_err(|e| miette!("failed to write {}: {}", path.display(), e))?;
        println!(
            "  {} Created {} ({} rows)",
            style("✓").green(),
            path.display(),
            records.len()
        );
    }

    println!();
    println!("{}", style("Import commands:").bold());
    println!("  cd <your-project>");
    for kind in EntityKind::ALL {
        println!(
            "  tdt import {} {}/{}",
            kind.import_arg(),
            args.output.display(),
            kind.fixture_file()
        );
    }
    println!();
    println!("Then add links and recalculate:");
    println!("  tdt link add REQ@1 TEST@1 verified_by");
    println!("  tdt validate --fix");

    Ok(())
}
