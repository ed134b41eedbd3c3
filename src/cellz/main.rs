use cellz::api::NotebookApi;
use cellz::commands::helpers::read_content;
use cellz::commands::CmdResult;
use cellz::error::{CellzError, Result};
use cellz::render::{parse_fields, GET_FIELDS, LIST_FIELDS};
use cellz::store::fs::FileStore;
use clap::Parser;
use colored::*;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List {
            path,
            fields,
            truncate,
            cell_type,
        } => {
            let api = NotebookApi::new(FileStore::new(path));
            let fields = parse_fields(fields.as_deref(), LIST_FIELDS)?;
            let result = api.list(&fields, truncate, cell_type)?;
            print_records(&result)
        }
        Commands::Get {
            path,
            id,
            fields,
            truncate,
        } => {
            let api = NotebookApi::new(FileStore::new(path));
            let fields = parse_fields(fields.as_deref(), GET_FIELDS)?;
            let result = api.get(&id, &fields, truncate)?;
            print_outcome(&result, true)
        }
        Commands::Update {
            path,
            id,
            field,
            content,
            content_file,
            dry_run,
        } => {
            let mut api = NotebookApi::new(FileStore::new(path));
            let content = read_content(content, content_file.as_deref())?;
            let result = api.update(&id, &field, content, dry_run)?;
            print_outcome(&result, dry_run)
        }
        Commands::Delete {
            path,
            id,
            dry_run,
            truncate,
        } => {
            let mut api = NotebookApi::new(FileStore::new(path));
            let result = api.delete(&id, truncate, dry_run)?;
            print_outcome(&result, dry_run)
        }
        Commands::Insert {
            path,
            before_id,
            cell_type,
            content,
            content_file,
            dry_run,
        } => {
            let mut api = NotebookApi::new(FileStore::new(path));
            let content = read_content(content, content_file.as_deref())?;
            let result = api.insert(cell_type, content, before_id.as_deref(), dry_run)?;
            print_outcome(&result, dry_run)
        }
        Commands::BulkUpdateSource {
            path,
            update_files,
            dry_run,
        } => {
            let mut api = NotebookApi::new(FileStore::new(path));
            let result = api.bulk_update_source(&update_files, dry_run)?;
            print_outcome(&result, dry_run)
        }
    }
}

/// One compact JSON object per line, the `list` output shape.
fn print_records(result: &CmdResult) -> Result<()> {
    for record in &result.records {
        println!(
            "{}",
            serde_json::to_string(record).map_err(CellzError::Serialization)?
        );
    }
    Ok(())
}

/// A single JSON object: pretty-printed for reads and dry-run previews,
/// compact for committed mutations.
fn print_outcome(result: &CmdResult, pretty: bool) -> Result<()> {
    if let Some(outcome) = &result.outcome {
        let rendered = if pretty {
            serde_json::to_string_pretty(outcome).map_err(CellzError::Serialization)?
        } else {
            serde_json::to_string(outcome).map_err(CellzError::Serialization)?
        };
        println!("{}", rendered);
    }
    Ok(())
}
