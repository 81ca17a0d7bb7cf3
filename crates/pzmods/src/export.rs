//! Export of scanned mod lists to CSV and plain-text files.
//!
//! Four artifacts are written per export, all UTF-8, silently overwriting
//! anything already there:
//! - `ModInfo.csv` — `;`-delimited, header `WorkshopItems;Mods`,
//!   `\r\n` row terminator
//! - `WorkshopItems.txt` — ids joined with `;`
//! - `Mods.txt` — names joined with `;`
//! - `ModURLs.txt` — one workshop URL per id, newline-joined
//!
//! Files are written independently; a failure on one does not roll back
//! the others.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::modinfo::{workshop_url, ModCollection};

/// Directory name created under the user's documents folder.
pub const EXPORT_DIR_NAME: &str = "Zomboid-ModInfo";

pub const CSV_FILE: &str = "ModInfo.csv";
pub const WORKSHOP_ITEMS_FILE: &str = "WorkshopItems.txt";
pub const MODS_FILE: &str = "Mods.txt";
pub const MOD_URLS_FILE: &str = "ModURLs.txt";

const CSV_HEADER: &str = "WorkshopItems;Mods";
const CSV_DELIMITER: char = ';';
const CSV_ROW_TERMINATOR: &str = "\r\n";

/// Errors that can occur while exporting.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Default export target: `Documents/Zomboid-ModInfo`.
pub fn default_export_dir() -> Option<PathBuf> {
    dirs::document_dir().map(|documents| documents.join(EXPORT_DIR_NAME))
}

/// Write all four artifacts into `target_dir`, creating it (and any
/// missing parents) first. Returns the written paths in a fixed order:
/// CSV, workshop items, mods, URLs.
pub fn export_collection(
    collection: &ModCollection,
    target_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(target_dir)?;

    let csv_path = target_dir.join(CSV_FILE);
    fs::write(&csv_path, render_csv(collection))?;

    let items_path = target_dir.join(WORKSHOP_ITEMS_FILE);
    fs::write(&items_path, collection.workshop_items_line())?;

    let mods_path = target_dir.join(MODS_FILE);
    fs::write(&mods_path, collection.mod_names_line())?;

    let urls_path = target_dir.join(MOD_URLS_FILE);
    let urls: Vec<String> = collection
        .workshop_items()
        .iter()
        .map(|id| workshop_url(id))
        .collect();
    fs::write(&urls_path, urls.join("\n"))?;

    Ok(vec![csv_path, items_path, mods_path, urls_path])
}

fn render_csv(collection: &ModCollection) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push_str(CSV_ROW_TERMINATOR);
    for record in collection.records() {
        out.push_str(&csv_field(&record.workshop_id));
        out.push(CSV_DELIMITER);
        out.push_str(&csv_field(&record.name));
        out.push_str(CSV_ROW_TERMINATOR);
    }
    out
}

/// Quote a field only when it contains the delimiter, a quote, or a line
/// break; inner quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains(CSV_DELIMITER) || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
