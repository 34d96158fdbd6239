//! Contacts command-line interface

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use contacts::cli::find::FindConfig;
use contacts::cli::output::{self, OutputFormat};
use contacts::cli::{fields, find, logger};
use std::path::PathBuf;

/// Contacts command-line tool
#[derive(Parser)]
#[command(name = "contacts")]
#[command(author, version, about = "Query contacts stored as kind-tagged rows", long_about = None)]
struct Cli {
    /// Verbose output (repeat for more)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(short = 'f', long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find contacts in a JSON row file
    Find {
        /// JSON file holding an array of rows
        rows: PathBuf,

        /// Field to read into each contact (repeatable, default all)
        #[arg(short, long)]
        include: Vec<String>,

        /// FIELD=VALUE equality constraint
        #[arg(long)]
        equal: Vec<String>,

        /// FIELD=VALUE inequality constraint
        #[arg(long)]
        not_equal: Vec<String>,

        /// FIELD=VALUE substring constraint
        #[arg(long)]
        contains: Vec<String>,

        /// FIELD=VALUE prefix constraint
        #[arg(long)]
        starts_with: Vec<String>,

        /// Only contacts with at least one phone number
        #[arg(long)]
        has_phone_number: bool,

        /// Field to order the result by (default DisplayName)
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// List the queryable fields
    Fields,
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("{}", output::format_warning(&e.to_string()));
    }

    let result: Result<()> = match cli.command {
        Commands::Find {
            rows,
            include,
            equal,
            not_equal,
            contains,
            starts_with,
            has_phone_number,
            sort,
        } => find::find(FindConfig {
            rows,
            include,
            equal,
            not_equal,
            contains,
            starts_with,
            has_phone_number,
            sort,
            format: cli.format.unwrap_or_default(),
            output_file: cli.output,
        }),
        Commands::Fields => fields::fields(cli.format),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
