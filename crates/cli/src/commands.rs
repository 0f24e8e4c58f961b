//! Subcommand implementations

// internal
use crate::cli::{DateArgs, KeywordArgs, OutputArgs};

// restools modules
use restools_scan::{
    extract_timesteps, scan_keywords, scan_keywords_with_dates, write_csv_file, Dialect, Tabular,
};

// standard library
use std::fmt::Display;
use std::fs::File;
use std::path::Path;

// external crates
use anyhow::{bail, Context, Result};
use log::{debug, info};
use serde::Serialize;

pub fn keywords(args: &KeywordArgs) -> Result<()> {
    let mut file = open(&args.file)?;

    if args.dates {
        if args.format != Dialect::Ecl {
            bail!("report step dates are only available for ecl files");
        }
        let index = scan_keywords_with_dates(&mut file, args.max_keys)
            .with_context(|| format!("failed to date records in {}", args.file.display()))?;
        info!("Found {} records", index.len());
        return report(&index, &args.output);
    }

    let index = scan_keywords(&mut file, args.format, args.max_keys)
        .with_context(|| format!("failed to scan {}", args.file.display()))?;
    info!("Found {} records", index.len());
    report(&index, &args.output)
}

pub fn dates(args: &DateArgs) -> Result<()> {
    let mut file = open(&args.file)?;
    let timesteps = extract_timesteps(&mut file, args.max_dates)
        .with_context(|| format!("failed to read report steps in {}", args.file.display()))?;
    info!("Found {} report steps", timesteps.len());
    report(&timesteps, &args.output)
}

fn open(path: &Path) -> Result<File> {
    debug!("Opening {}", path.display());
    File::open(path).with_context(|| format!("could not open {}", path.display()))
}

/// Send rows to wherever the user asked for them
fn report<T: Tabular + Serialize + Display>(rows: &[T], output: &OutputArgs) -> Result<()> {
    if let Some(path) = &output.csv {
        write_csv_file(rows, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Table written to {}", path.display());
    } else if output.json {
        println!("{}", serde_json::to_string_pretty(rows)?);
    } else {
        print!("{}", terminal_table(rows));
    }
    Ok(())
}

fn terminal_table<T: Tabular + Display>(rows: &[T]) -> String {
    let mut s = T::columns().join(" ") + "\n";
    s += &"-".repeat(60);
    s += "\n";
    for row in rows {
        s += &format!("{row}\n");
    }
    s
}
