// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for Euler diagram codes.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use euler_codes::canonical::canonicalize;
use euler_codes::decompose::decompose;
use euler_codes::faces::{euler_characteristic, is_planar, trace_faces};
use euler_codes::index::DiagramDatabase;
use euler_codes::zones::compute_zones;
use euler_codes::{GaussCode, ZoneSet};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "euler", version, about = "Gauss codes, faces and zones of Euler diagrams")]
struct Args {
    /// More logging (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Trace the faces of a Gauss code and check planarity.
    Faces { input: PathBuf },

    /// Compute the zones of a Gauss code.
    Zones {
        input: PathBuf,
        /// Index of the outer face in the traced face list.
        #[arg(long, default_value_t = 0)]
        outer: usize,
        #[arg(long)]
        json: bool,
    },

    /// Canonical form of a zone set, e.g. `A,B,AB` (`0` is the empty zone).
    Canonical { zones: String },

    /// Split a zone set into independently drawable parts.
    Decompose { zones: String },

    #[command(subcommand)]
    Db(DbCommand),
}

#[derive(Subcommand)]
enum DbCommand {
    /// Build the binary index from a text database.
    Build {
        text: PathBuf,
        #[arg(long, env = "EULER_DB")]
        db: PathBuf,
    },

    /// Find diagrams with the given zones.
    Lookup {
        zones: String,
        #[arg(long, env = "EULER_DB")]
        db: PathBuf,
        /// Also return diagrams with extra zones.
        #[arg(long)]
        superset: bool,
        #[arg(long)]
        max_curves: Option<usize>,
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_code(path: &Path) -> Result<GaussCode> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    text.parse()
        .with_context(|| format!("parsing {}", path.display()))
}

fn parse_zones(text: &str) -> ZoneSet {
    match text.parse() {
        Ok(zones) => zones,
        Err(never) => match never {},
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Faces { input } => {
            let code = read_code(&input)?;
            let faces = trace_faces(&code)?;
            let chi = euler_characteristic(&code)?;
            println!("{}", faces);
            let planar = if is_planar(&code) { "planar" } else { "not planar" };
            println!("V - E + F = {} ({})", chi, planar);
        }
        Command::Zones {
            input,
            outer,
            json,
        } => {
            let code = read_code(&input)?;
            let faces = trace_faces(&code)?;
            let Some(outer_face) = faces.faces().get(outer) else {
                bail!("outer face {} out of range ({} faces)", outer, faces.len());
            };
            let zones = compute_zones(&code, outer_face)?;
            if json {
                let value: Vec<_> = zones
                    .iter()
                    .map(|(zone, faces)| {
                        json!({
                            "zone": zone.label_string(),
                            "faces": faces.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                for (zone, faces) in &zones {
                    for face in faces {
                        println!("{}\t{}", zone, face);
                    }
                }
            }
        }
        Command::Canonical { zones } => {
            let form = canonicalize(&parse_zones(&zones));
            println!("{}", form.zones);
            for (canonical, original) in &form.label_map {
                println!("{} = {}", canonical, original);
            }
        }
        Command::Decompose { zones } => {
            for part in decompose(&parse_zones(&zones))? {
                println!("{}\twithin {}", part.zones, part.within);
            }
        }
        Command::Db(DbCommand::Build { text, db }) => {
            let database = DiagramDatabase::load_text(&text)?;
            database.save(&db)?;
            println!("{} records written to {}", database.len(), db.display());
        }
        Command::Db(DbCommand::Lookup {
            zones,
            db,
            superset,
            max_curves,
            json,
        }) => {
            let database = DiagramDatabase::open(&db)?;
            let zones = parse_zones(&zones);
            let records = if superset {
                database.lookup_supersets(&zones, max_curves)?
            } else {
                database.lookup(&zones)?
            };
            if json {
                let value: Vec<_> = records
                    .iter()
                    .map(|r| {
                        json!({
                            "zones": r.zones().to_string(),
                            "outer": r.outer().to_string(),
                            "gauss": r.code().to_string(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                let blocks: Vec<String> = records.iter().map(|r| r.to_string()).collect();
                println!("{}", blocks.join("\n\n"));
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args.command)
}
