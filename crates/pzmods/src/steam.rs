//! Steam installation and Project Zomboid directory detection
//!
//! This module locates the Steam install root (environment hint, then a
//! filesystem scan over candidate locations, then the Windows registry as a
//! last resort), collects the configured library directories from
//! `libraryfolders.vdf`, and probes those libraries for the Project Zomboid
//! install and workshop content directories.
//!
//! Every lookup degrades to `None` with a logged diagnostic. Not finding
//! anything is a normal outcome, never an error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Steam workshop app id for Project Zomboid.
pub const WORKSHOP_APP_ID: &str = "108600";

/// Folder spellings the game has shipped under.
const GAME_FOLDERS: [&str; 2] = ["Project Zomboid", "ProjectZomboid"];

/// Candidate Steam directories probed under each filesystem root.
#[cfg(windows)]
const ROOT_CANDIDATES: &[&str] = &["Program Files (x86)/Steam", "Program Files/Steam", "Steam"];
#[cfg(not(windows))]
const ROOT_CANDIDATES: &[&str] = &[".steam/steam", ".local/share/Steam", "Steam"];

/// Directories resolved for an installed copy of the game.
///
/// Any subset of the fields may be absent; callers are expected to treat
/// "nothing found" as a valid result.
#[derive(Debug, Clone, Default)]
pub struct SteamLocation {
    /// Steam installation root.
    pub steam_dir: Option<PathBuf>,
    /// `workshop/content/108600` directory holding installed workshop mods.
    pub workshop_dir: Option<PathBuf>,
    /// The game's own install directory.
    pub game_dir: Option<PathBuf>,
}

/// Locate the Steam install, the Project Zomboid directory, and the
/// workshop content directory for the current machine.
pub fn locate() -> SteamLocation {
    let Some(steam_dir) = steam_install_dir() else {
        debug!("no Steam installation found");
        return SteamLocation::default();
    };

    let mut location = locate_in_libraries(&library_dirs(&steam_dir));
    location.steam_dir = Some(steam_dir);
    location
}

/// Find the Steam installation root.
///
/// Tries, in order: the `STEAMPATH` environment hint (falling back to
/// `ProgramFiles(x86)` on Windows), candidate directories under every
/// available filesystem root, and finally the registry install path on
/// Windows. Candidates are accepted only if the platform marker exists
/// under them.
pub fn steam_install_dir() -> Option<PathBuf> {
    if let Some(dir) = install_from_env() {
        debug!("Steam found via environment hint: {}", dir.display());
        return Some(dir);
    }

    if let Some(dir) = find_install_in_roots(&filesystem_roots()) {
        debug!("Steam found via filesystem scan: {}", dir.display());
        return Some(dir);
    }

    install_from_registry()
}

/// Collect the library directories configured for a Steam install.
///
/// The primary `<steam>/steamapps` is always first. Additional libraries
/// come from `libraryfolders.vdf`; if the manifest is unreadable the
/// primary library alone is returned.
pub fn library_dirs(steam_dir: &Path) -> Vec<PathBuf> {
    let manifest = steam_dir.join("steamapps").join("libraryfolders.vdf");
    let mut libraries = vec![steam_dir.join("steamapps")];

    match fs::read_to_string(&manifest) {
        Ok(content) => {
            for path in manifest_library_paths(&content) {
                libraries.push(PathBuf::from(path).join("steamapps"));
            }
        }
        Err(e) => warn!("failed to read {}: {e}", manifest.display()),
    }

    libraries
}

/// Probe each library for the game directory and the workshop content
/// directory. Library scanning stops once workshop content is found.
fn locate_in_libraries(libraries: &[PathBuf]) -> SteamLocation {
    let mut location = SteamLocation::default();

    for library in libraries {
        let Some(game_dir) = GAME_FOLDERS
            .iter()
            .map(|folder| library.join("common").join(folder))
            .find(|dir| dir.exists())
        else {
            continue;
        };
        location.game_dir = Some(game_dir);

        let workshop = library
            .join("workshop")
            .join("content")
            .join(WORKSHOP_APP_ID);
        if workshop.exists() {
            location.workshop_dir = Some(workshop);
            break;
        }
    }

    location
}

/// Pull library roots out of `libraryfolders.vdf` content.
///
/// Every line containing a literal `"path"` token contributes the text
/// between the last two `"` characters on that line. Steam does not
/// guarantee the file's shape, so nothing stricter is attempted.
fn manifest_library_paths(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter(|line| line.contains("\"path\""))
        .filter_map(between_last_quotes)
        .collect()
}

fn between_last_quotes(line: &str) -> Option<&str> {
    let end = line.rfind('"')?;
    let start = line[..end].rfind('"')?;
    Some(&line[start + 1..end])
}

fn install_from_env() -> Option<PathBuf> {
    let base = std::env::var_os("STEAMPATH").or_else(|| std::env::var_os("ProgramFiles(x86)"))?;
    let candidate = PathBuf::from(base).join("Steam");
    has_steam_marker(&candidate).then_some(candidate)
}

/// Probe the fixed candidate subpaths under each root; first marker wins.
fn find_install_in_roots(roots: &[PathBuf]) -> Option<PathBuf> {
    for root in roots {
        for candidate in ROOT_CANDIDATES {
            let dir = root.join(candidate);
            if has_steam_marker(&dir) {
                return Some(dir);
            }
        }
    }
    None
}

#[cfg(windows)]
fn filesystem_roots() -> Vec<PathBuf> {
    ('A'..='Z')
        .map(|drive| PathBuf::from(format!("{drive}:/")))
        .filter(|root| root.exists())
        .collect()
}

#[cfg(not(windows))]
fn filesystem_roots() -> Vec<PathBuf> {
    std::env::var_os("HOME")
        .map(|home| vec![PathBuf::from(home)])
        .unwrap_or_default()
}

#[cfg(windows)]
fn install_from_registry() -> Option<PathBuf> {
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    let key = match RegKey::predef(HKEY_LOCAL_MACHINE)
        .open_subkey("SOFTWARE\\WOW6432Node\\Valve\\Steam")
    {
        Ok(key) => key,
        Err(e) => {
            warn!("Steam registry key unavailable: {e}");
            return None;
        }
    };

    let path: String = match key.get_value("InstallPath") {
        Ok(value) => value,
        Err(e) => {
            warn!("Steam InstallPath registry value unreadable: {e}");
            return None;
        }
    };

    let dir = PathBuf::from(path);
    has_steam_marker(&dir).then_some(dir)
}

#[cfg(not(windows))]
fn install_from_registry() -> Option<PathBuf> {
    None
}

#[cfg(windows)]
fn has_steam_marker(dir: &Path) -> bool {
    dir.join("steam.exe").is_file()
}

#[cfg(not(windows))]
fn has_steam_marker(dir: &Path) -> bool {
    dir.join("steamapps").is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Lay down a directory that passes `has_steam_marker` on any platform.
    fn make_steam_dir(dir: &Path) {
        fs::create_dir_all(dir.join("steamapps")).unwrap();
        fs::write(dir.join("steam.exe"), b"").unwrap();
    }

    #[test]
    fn test_manifest_library_paths() {
        let content = r#"
"libraryfolders"
{
    "0"
    {
        "path"        "C:\\Program Files (x86)\\Steam"
        "label"       ""
    }
    "1"
    {
        "path"        "D:\\SteamLibrary"
    }
}
"#;
        let paths = manifest_library_paths(content);
        assert_eq!(
            paths,
            vec!["C:\\\\Program Files (x86)\\\\Steam", "D:\\\\SteamLibrary"]
        );
    }

    #[test]
    fn test_manifest_value_is_between_last_two_quotes() {
        // The value is whatever sits between the last two quotes, no matter
        // what else is on the line.
        let content = "\"path\" \"ignored\" \"/srv/steam\"\n";
        assert_eq!(manifest_library_paths(content), vec!["/srv/steam"]);
    }

    #[test]
    fn test_manifest_skips_unquoted_lines() {
        let content = "path /srv/steam\n\"label\" \"main\"\n";
        assert!(manifest_library_paths(content).is_empty());
    }

    #[test]
    fn test_find_install_in_roots() {
        let temp_dir = tempfile::tempdir().unwrap();
        let empty_root = temp_dir.path().join("empty");
        let steam_root = temp_dir.path().join("drive");
        fs::create_dir_all(&empty_root).unwrap();
        make_steam_dir(&steam_root.join("Steam"));

        let found = find_install_in_roots(&[empty_root.clone(), steam_root.clone()]);
        assert_eq!(found, Some(steam_root.join("Steam")));
    }

    #[test]
    fn test_find_install_in_roots_no_marker() {
        let temp_dir = tempfile::tempdir().unwrap();
        // A Steam directory without the marker must not be accepted.
        fs::create_dir_all(temp_dir.path().join("Steam")).unwrap();

        assert_eq!(find_install_in_roots(&[temp_dir.path().to_path_buf()]), None);
    }

    #[test]
    fn test_library_dirs_primary_first() {
        let temp_dir = tempfile::tempdir().unwrap();
        let steam = temp_dir.path().join("Steam");
        fs::create_dir_all(steam.join("steamapps")).unwrap();
        fs::write(
            steam.join("steamapps").join("libraryfolders.vdf"),
            "\"path\" \"/mnt/games\"\n",
        )
        .unwrap();

        let libraries = library_dirs(&steam);
        assert_eq!(
            libraries,
            vec![
                steam.join("steamapps"),
                PathBuf::from("/mnt/games").join("steamapps"),
            ]
        );
    }

    #[test]
    fn test_library_dirs_missing_manifest() {
        let temp_dir = tempfile::tempdir().unwrap();
        let steam = temp_dir.path().join("Steam");
        fs::create_dir_all(&steam).unwrap();

        // Unreadable manifest degrades to the primary library only.
        assert_eq!(library_dirs(&steam), vec![steam.join("steamapps")]);
    }

    #[test]
    fn test_locate_in_libraries_finds_game_and_workshop() {
        let temp_dir = tempfile::tempdir().unwrap();
        let library = temp_dir.path().join("steamapps");
        fs::create_dir_all(library.join("common").join("ProjectZomboid")).unwrap();
        fs::create_dir_all(
            library
                .join("workshop")
                .join("content")
                .join(WORKSHOP_APP_ID),
        )
        .unwrap();

        let location = locate_in_libraries(&[library.clone()]);
        assert_eq!(
            location.game_dir,
            Some(library.join("common").join("ProjectZomboid"))
        );
        assert_eq!(
            location.workshop_dir,
            Some(
                library
                    .join("workshop")
                    .join("content")
                    .join(WORKSHOP_APP_ID)
            )
        );
    }

    #[test]
    fn test_locate_in_libraries_prefers_spaced_folder_name() {
        let temp_dir = tempfile::tempdir().unwrap();
        let library = temp_dir.path().join("steamapps");
        fs::create_dir_all(library.join("common").join("Project Zomboid")).unwrap();
        fs::create_dir_all(library.join("common").join("ProjectZomboid")).unwrap();

        let location = locate_in_libraries(&[library.clone()]);
        assert_eq!(
            location.game_dir,
            Some(library.join("common").join("Project Zomboid"))
        );
        assert_eq!(location.workshop_dir, None);
    }

    #[test]
    fn test_locate_in_libraries_stops_at_first_workshop() {
        let temp_dir = tempfile::tempdir().unwrap();
        let first = temp_dir.path().join("a").join("steamapps");
        let second = temp_dir.path().join("b").join("steamapps");
        for library in [&first, &second] {
            fs::create_dir_all(library.join("common").join("ProjectZomboid")).unwrap();
            fs::create_dir_all(
                library
                    .join("workshop")
                    .join("content")
                    .join(WORKSHOP_APP_ID),
            )
            .unwrap();
        }

        let location = locate_in_libraries(&[first.clone(), second]);
        assert_eq!(
            location.workshop_dir,
            Some(first.join("workshop").join("content").join(WORKSHOP_APP_ID))
        );
        assert_eq!(
            location.game_dir,
            Some(first.join("common").join("ProjectZomboid"))
        );
    }

    #[test]
    fn test_locate_in_libraries_nothing_found() {
        let location = locate_in_libraries(&[]);
        assert!(location.workshop_dir.is_none());
        assert!(location.game_dir.is_none());
    }
}
