//! # weather-presets
//!
//! A library for managing the weather presets of a racing simulation server.
//!
//! A server ships with a fixed set of weather presets and administrators can
//! install more by dropping directories into `<server>/content/weather`. Each
//! installed preset may carry a `weather.ini` naming it for display.
//!
//! `weather-presets` builds the catalog shown to administrators from those two
//! sources and removes installed presets on request.
//!
//! ## Features
//!
//! - **Built-in baseline**: the seven stock presets are always listed
//! - **Discovery**: every directory under the preset path becomes a catalog entry
//! - **Display names**: read from `[LAUNCHER] NAME` in `weather.ini`, falling back to the key
//! - **Validated deletion**: only keys present in a freshly built catalog are removed
//!
//! ## Example
//!
//! ```rust,no_run
//! use weather_presets::{PresetRegistry, ServerLayout};
//!
//! let layout = ServerLayout::new("/srv/acserver");
//! let registry = PresetRegistry::for_server(&layout);
//!
//! let catalog = registry.list_presets().unwrap();
//! assert!(!catalog.is_empty());
//!
//! let outcome = registry.delete_preset("custom_storm").unwrap();
//! println!("{}", outcome.message());
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Preset catalog, built-in presets, and the registry
//! - [`parsing`]: `weather.ini` metadata parsing
//! - [`config`]: Server install layout
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod config;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use catalog::defaults::{default_catalog, DEFAULT_PRESETS};
pub use catalog::registry::{DeleteOutcome, PresetRegistry, RegistryError};
pub use catalog::store::PresetCatalog;
pub use config::ServerLayout;
pub use parsing::metadata::{resolve_display_name, MetadataError};
