use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::theme::Accent;

#[derive(Parser)]
#[command(
    name = "designkit",
    version,
    about = "Export design-system components as a standalone package"
)]
pub struct Args {
    /// Directory containing the component corpus
    #[arg(long, global = true)]
    pub components: Option<PathBuf>,

    /// Path to designkit.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the component catalog grouped by category
    List {
        /// Only show one category (by id, e.g. "forms")
        #[arg(long)]
        category: Option<String>,
    },

    /// Preview resolution and size for a selection without exporting
    Preview {
        /// Component identifiers to resolve
        ids: Vec<String>,

        /// Emit the preview as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a selection and write the export bundle
    Export {
        /// Component identifiers to export; interactive picker when omitted
        ids: Vec<String>,

        /// Accent color preset
        #[arg(long, value_enum)]
        accent: Option<Accent>,

        /// Custom accent as a hex color (implies --accent custom)
        #[arg(long)]
        custom_color: Option<String>,

        /// Output directory the bundle is written under
        #[arg(long)]
        out: Option<PathBuf>,

        /// Source URL embedded in the setup guide
        #[arg(long)]
        source_url: Option<String>,
    },
}
