//! Utils

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Arguments for the cart demo
#[derive(Debug, Parser)]
pub struct DemoCartArgs {
    /// Directory the cart is persisted under
    #[clap(short, long, default_value = "./satchel-data")]
    pub data_dir: PathBuf,

    /// Catalog fixture file (YAML); the built-in demo catalog when omitted
    #[clap(short, long)]
    pub catalog: Option<PathBuf>,

    /// Operation to perform
    #[command(subcommand)]
    pub command: DemoCartCommand,
}

/// Cart operations available to the demo
#[derive(Debug, Subcommand)]
pub enum DemoCartCommand {
    /// Render the current cart contents and total
    Show,

    /// Add a product to the cart
    Add {
        /// Product id, as it would appear on a page element
        product_id: String,

        /// Number of units to add
        #[clap(short, long, default_value_t = 1)]
        quantity: u32,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id to remove
        product_id: String,
    },

    /// Delete the persisted cart entirely
    Clear,
}
