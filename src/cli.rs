use clap::{Parser, Subcommand};

use crate::component_resolution::domain::BomPartQuery;

/// Resolve electronic components, discover alternatives and check BOM
/// supply-chain health using a generative oracle
#[derive(Parser, Debug)]
#[command(name = "partscout")]
#[command(version)]
#[command(about = "Component resolution and BOM health checks backed by a generative oracle", long_about = None)]
pub struct Args {
    /// Path to a config file (defaults to ./partscout.config.yml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a component and compare it against drop-in alternatives
    Find {
        /// Free-text query, e.g. a part number or a description
        query: String,
    },

    /// Resolve many parts sequentially, isolating per-part failures
    Bulk {
        /// Part numbers or queries, one per argument
        #[arg(required = true)]
        parts: Vec<String>,
    },

    /// Check lifecycle and stock health for a BOM
    BomHealth {
        /// BOM lines as MANUFACTURER=PART_NUMBER pairs
        #[arg(required = true, value_name = "MFR=PN")]
        parts: Vec<String>,

        /// Queries per oracle request
        #[arg(long, default_value_t = 5)]
        batch_size: usize,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses a `MANUFACTURER=PART_NUMBER` argument into a BOM query.
pub fn parse_bom_part(raw: &str) -> Result<BomPartQuery, String> {
    match raw.split_once('=') {
        Some((manufacturer, part_number))
            if !manufacturer.trim().is_empty() && !part_number.trim().is_empty() =>
        {
            Ok(BomPartQuery::new(part_number.trim(), manufacturer.trim()))
        }
        _ => Err(format!(
            "Invalid BOM line \"{}\". Expected MANUFACTURER=PART_NUMBER",
            raw
        )),
    }
}
