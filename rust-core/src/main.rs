use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use serde::Serialize;

use crystal_symmetry::space_groups::{
    find_spacegroup_by_ccp4, find_spacegroup_by_name, spacegroup_table, spacegroups_with_number,
    SpaceGroup,
};
use crystal_symmetry::{parse_triplet, SymOp};

#[derive(Parser)]
#[command(name = "crystal-symmetry")]
#[command(about = "Coordinate triplets, symmetry operation algebra and space-group settings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a triplet and print its canonical form
    Parse {
        /// Triplet such as "-x+1/2,y,z+1/3"
        triplet: String,
    },
    /// Compose triplets: rotations multiply, translations add modulo one cell
    Compose {
        #[arg(required = true, num_args = 2..)]
        triplets: Vec<String>,

        /// Compose as affine maps, the right-most one applied first
        #[arg(long)]
        affine: bool,
    },
    /// Print the inverse of a triplet
    Inverse {
        triplet: String,

        /// Inverse of the affine map
        #[arg(long)]
        affine: bool,
    },
    /// Look up a space group by HM symbol, Hall symbol or number
    Lookup {
        name: String,

        /// Treat NAME as a CCP4 space-group number
        #[arg(long)]
        ccp4: bool,
    },
    /// List space-group settings
    List {
        /// Only settings with this sequence number
        #[arg(short, long)]
        number: Option<u8>,
    },
}

#[derive(Serialize)]
struct OperationReport {
    triplet: String,
    rotation: [[i8; 3]; 3],
    translation_twelfths: [i8; 3],
    determinant: i32,
    order: Option<usize>,
}

impl From<&SymOp> for OperationReport {
    fn from(op: &SymOp) -> Self {
        Self {
            triplet: op.triplet(),
            rotation: [op.rot.row(0), op.rot.row(1), op.rot.row(2)],
            translation_twelfths: [op.tr.0[0], op.tr.0[1], op.tr.0[2]],
            determinant: op.rot.determinant(),
            order: op.order(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    debug!("Starting crystal-symmetry v{}", crystal_symmetry::VERSION);

    match cli.command {
        Commands::Parse { triplet } => {
            let op = parse_triplet(&triplet)
                .with_context(|| format!("cannot parse triplet {:?}", triplet))?;
            print_operation(&op, cli.json)
        }
        Commands::Compose { triplets, affine } => {
            let op = compose_all(&triplets, affine)?;
            print_operation(&op, cli.json)
        }
        Commands::Inverse { triplet, affine } => {
            let op = parse_triplet(&triplet)
                .with_context(|| format!("cannot parse triplet {:?}", triplet))?;
            let inverse = if affine {
                op.inverse_affine()
            } else {
                op.inverse()
            };
            let inverse = inverse.with_context(|| format!("cannot invert {}", op))?;
            print_operation(&inverse, cli.json)
        }
        Commands::Lookup { name, ccp4 } => {
            let sg = if ccp4 {
                let number: u16 = name
                    .trim()
                    .parse()
                    .with_context(|| format!("{:?} is not a CCP4 number", name))?;
                find_spacegroup_by_ccp4(number)?
            } else {
                find_spacegroup_by_name(&name)?
            };
            print_spacegroups(std::slice::from_ref(sg), cli.json)
        }
        Commands::List { number } => {
            let rows = match number {
                Some(n) => spacegroups_with_number(n),
                None => spacegroup_table(),
            };
            info!("{} setting(s)", rows.len());
            print_spacegroups(rows, cli.json)
        }
    }
}

fn compose_all(triplets: &[String], affine: bool) -> anyhow::Result<SymOp> {
    let mut result = SymOp::identity();
    for text in triplets {
        let op = parse_triplet(text).with_context(|| format!("cannot parse triplet {:?}", text))?;
        let composed = if affine {
            result.compose_affine(&op)
        } else {
            result.compose(&op)
        };
        result = composed.with_context(|| format!("cannot compose {} with {}", result, op))?;
        debug!("after {}: {}", text, result);
    }
    Ok(result)
}

fn print_operation(op: &SymOp, json: bool) -> anyhow::Result<()> {
    let report = OperationReport::from(op);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("{}", report.triplet);
    for (row, t) in report.rotation.iter().zip(report.translation_twelfths) {
        println!("  [{:>3} {:>3} {:>3} ] + {:>3}/12", row[0], row[1], row[2], t);
    }
    match report.order {
        Some(order) => println!("  determinant {}, order {}", report.determinant, order),
        None => println!("  determinant {}, no finite order", report.determinant),
    }
    Ok(())
}

fn print_spacegroups(rows: &[SpaceGroup], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    for sg in rows {
        println!("{:>3} {:>5}  {:<16} {}", sg.number, sg.ccp4, sg.hm, sg.hall);
    }
    Ok(())
}
