//! # pzmods
//!
//! Project Zomboid workshop mod discovery and export.
//!
//! This library provides functionality to:
//! - Locate the Steam installation and its library directories
//! - Find the Project Zomboid install and workshop content directories
//! - Enumerate installed workshop mods by parsing their `mod.info` files
//! - Export the discovered mod lists to CSV and plain-text files
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let location = pzmods::locate();
//! if let Some(workshop_dir) = location.workshop_dir {
//!     let mods = pzmods::scan_mods(&workshop_dir)?;
//!     println!("{} mods installed", mods.len());
//!
//!     let export_dir = pzmods::default_export_dir().expect("no documents directory");
//!     pzmods::export_collection(&mods, &export_dir)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod modinfo;
pub mod session;
pub mod steam;

// Re-export commonly used items
pub use export::{default_export_dir, export_collection, ExportError};
pub use modinfo::{scan_mods, workshop_url, ModCollection, ModRecord};
pub use session::{Command, Outcome, Session, SessionError};
pub use steam::{locate, SteamLocation};
