//! Workshop mod enumeration and the `mod.info` format.
//!
//! Installed workshop content is laid out as
//! `<root>/<workshop id>/mods/<mod>/mod.info`, where `mod.info` is a
//! line-oriented `key=value` file. Only the `id` and `name` keys are
//! consumed; mods missing either are skipped with a logged diagnostic.

use std::fs;
use std::io;
use std::path::Path;

use tracing::warn;

/// Base URL for a workshop item page.
pub const WORKSHOP_URL_BASE: &str = "https://steamcommunity.com/sharedfiles/filedetails/?id=";

/// Build the workshop page URL for an item id.
pub fn workshop_url(workshop_id: &str) -> String {
    format!("{WORKSHOP_URL_BASE}{workshop_id}")
}

/// One installed workshop mod.
///
/// `workshop_id` is the name of the workshop container directory the mod
/// was found under; `name` comes from its `mod.info`. Both are non-empty
/// for every record that makes it into a [`ModCollection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModRecord {
    pub workshop_id: String,
    pub name: String,
}

/// Ordered collection of scanned mods.
///
/// Records appear in directory traversal order (not sorted, not stable
/// across platforms). The derived id/name/pair views are always
/// index-aligned with each other.
#[derive(Debug, Clone, Default)]
pub struct ModCollection {
    records: Vec<ModRecord>,
}

impl ModCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ModRecord] {
        &self.records
    }

    /// Workshop ids, in traversal order.
    pub fn workshop_items(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.workshop_id.as_str()).collect()
    }

    /// Mod names, index-aligned with [`Self::workshop_items`].
    pub fn mod_names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    /// `(name, workshop id)` pairs, index-aligned with the other views.
    pub fn display_items(&self) -> Vec<(&str, &str)> {
        self.records
            .iter()
            .map(|r| (r.name.as_str(), r.workshop_id.as_str()))
            .collect()
    }

    /// All workshop ids joined with `;`.
    pub fn workshop_items_line(&self) -> String {
        self.workshop_items().join(";")
    }

    /// All mod names joined with `;`.
    pub fn mod_names_line(&self) -> String {
        self.mod_names().join(";")
    }

    fn push(&mut self, record: ModRecord) {
        self.records.push(record);
    }
}

/// Fields pulled out of a single `mod.info` file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ModInfo {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Parse `mod.info` content.
///
/// The first line starting with `id=` sets the id and the first line
/// starting with `name=` sets the name; the value is the remainder after
/// the first `=` with no unescaping. Parsing stops once both are set.
pub fn parse_mod_info(content: &str) -> ModInfo {
    let mut info = ModInfo::default();

    for line in content.lines() {
        let line = line.trim();
        if info.id.is_none() {
            if let Some(value) = line.strip_prefix("id=") {
                info.id = Some(value.to_string());
            }
        }
        if info.name.is_none() {
            if let Some(value) = line.strip_prefix("name=") {
                info.name = Some(value.to_string());
            }
        }
        if info.id.is_some() && info.name.is_some() {
            break;
        }
    }

    info
}

/// Enumerate the installed mods under a workshop content directory.
///
/// Walks `<root>/<container>/mods/<mod>/mod.info`. Containers without a
/// `mods` directory, non-directories, and mods with a missing or
/// incomplete `mod.info` are skipped; only an unreadable root is an
/// error. Side-effect free beyond reads.
pub fn scan_mods(root: &Path) -> io::Result<ModCollection> {
    let mut collection = ModCollection::new();

    for entry in fs::read_dir(root)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {e}", root.display());
                continue;
            }
        };
        let container = entry.path();
        if !container.is_dir() {
            continue;
        }
        let Some(workshop_id) = container
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
        else {
            continue;
        };

        let mods_dir = container.join("mods");
        let Ok(mod_entries) = fs::read_dir(&mods_dir) else {
            continue;
        };

        for mod_entry in mod_entries.flatten() {
            let mod_dir = mod_entry.path();
            if !mod_dir.is_dir() {
                continue;
            }

            let info_path = mod_dir.join("mod.info");
            let content = match fs::read_to_string(&info_path) {
                Ok(content) => content,
                Err(e) => {
                    warn!("no readable mod.info in {}: {e}", mod_dir.display());
                    continue;
                }
            };

            let info = parse_mod_info(&content);
            match (info.id, info.name) {
                (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => {
                    collection.push(ModRecord {
                        workshop_id: workshop_id.clone(),
                        name,
                    });
                }
                _ => warn!("missing id or name in {}", info_path.display()),
            }
        }
    }

    Ok(collection)
}
