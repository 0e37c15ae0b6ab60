//! Weather preset catalog.
//!
//! The catalog maps preset keys (directory names under the server's
//! `content/weather` directory) to display names. It is rebuilt from disk on
//! every request and never cached.
//!
//! ## Built-in Presets
//!
//! Seven presets ship with every server and are always listed:
//!
//! - `1_heavy_fog`, `2_light_fog`
//! - `3_clear`, `4_mid_clear`
//! - `5_light_clouds`, `6_mid_clouds`, `7_heavy_clouds`
//!
//! An installed directory with the same key replaces the built-in entry.
//!
//! ## Example
//!
//! ```rust,no_run
//! use weather_presets::PresetRegistry;
//!
//! let registry = PresetRegistry::new("/srv/acserver/content/weather");
//!
//! // List all presets
//! for (key, name) in registry.list_presets().unwrap().iter() {
//!     println!("{key}: {name}");
//! }
//!
//! // Remove an installed one
//! let outcome = registry.delete_preset("custom_storm").unwrap();
//! println!("{}", outcome.message());
//! ```

pub mod defaults;
pub mod registry;
pub mod store;
