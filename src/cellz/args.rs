use cellz::model::CellType;
use cellz::render::Truncate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for dev builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cellz")]
#[command(version = get_version())]
#[command(about = "Operate on Jupyter notebook cells by id", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notebook cells with selected fields
    List {
        /// Path to the .ipynb file
        #[arg(long)]
        path: PathBuf,

        /// Comma-separated fields to show (default: id,type,summary)
        #[arg(long)]
        fields: Option<String>,

        /// Character limit per field (a count, or 'none'/-1 for no limit)
        #[arg(long, default_value = "100")]
        truncate: Truncate,

        /// Only show cells of this type ('code' or 'markdown')
        #[arg(long)]
        cell_type: Option<CellType>,
    },

    /// Get fields for a specific cell id
    Get {
        /// Path to the .ipynb file
        #[arg(long)]
        path: PathBuf,

        /// Cell id to read
        #[arg(long)]
        id: String,

        /// Comma-separated fields to show (default: id,type,source)
        #[arg(long)]
        fields: Option<String>,

        /// Character limit per field (a count, or 'none'/-1 for no limit)
        #[arg(long, default_value = "100")]
        truncate: Truncate,
    },

    /// Update a field (source only) by cell id
    Update {
        /// Path to the .ipynb file
        #[arg(long)]
        path: PathBuf,

        /// Cell id to update
        #[arg(long)]
        id: String,

        /// Field to update (only 'source')
        #[arg(long)]
        field: String,

        /// Inline replacement content
        #[arg(long)]
        content: Option<String>,

        /// Path to a file with replacement content
        #[arg(long)]
        content_file: Option<PathBuf>,

        /// Preview without writing changes
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete a cell by id
    Delete {
        /// Path to the .ipynb file
        #[arg(long)]
        path: PathBuf,

        /// Cell id to delete
        #[arg(long)]
        id: String,

        /// Preview deletion without writing
        #[arg(long)]
        dry_run: bool,

        /// Character limit when previewing source (a count, or 'none'/-1)
        #[arg(long, default_value = "100")]
        truncate: Truncate,
    },

    /// Insert a new cell
    Insert {
        /// Path to the .ipynb file
        #[arg(long)]
        path: PathBuf,

        /// Insert before this cell id (append when omitted)
        #[arg(long)]
        before_id: Option<String>,

        /// Type for the new cell ('code' or 'markdown')
        #[arg(long, visible_alias = "type")]
        cell_type: CellType,

        /// Inline cell content
        #[arg(long)]
        content: Option<String>,

        /// Path to a file with cell content
        #[arg(long)]
        content_file: Option<PathBuf>,

        /// Preview insertion without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Update multiple cell sources from id-prefixed instruction files
    BulkUpdateSource {
        /// Path to the .ipynb file
        #[arg(long)]
        path: PathBuf,

        /// Instruction file (first line = cell id, rest = replacement
        /// source); repeat the flag for multiple files
        #[arg(long = "update-file", required = true)]
        update_files: Vec<PathBuf>,

        /// Preview changes without writing
        #[arg(long)]
        dry_run: bool,
    },
}
