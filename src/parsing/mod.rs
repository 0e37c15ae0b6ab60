//! Parsers for files shipped inside weather preset directories.
//!
//! A preset directory may carry a `weather.ini` whose `[LAUNCHER]` section
//! names the preset for display:
//!
//! ```text
//! [LAUNCHER]
//! NAME=Custom Storm
//! ```
//!
//! ## Example
//!
//! ```rust
//! use weather_presets::parsing::metadata::parse_display_name;
//!
//! let name = parse_display_name("[LAUNCHER]\nNAME=Custom Storm\n").unwrap();
//! assert_eq!(name.as_deref(), Some("Custom Storm"));
//! ```
//!
//! A missing file, section, or key leaves the name unresolved. Text that is
//! not valid INI is an error.

pub mod metadata;
