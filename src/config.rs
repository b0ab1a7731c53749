//! Configuration for lsr.
//!
//! Settings are read from an optional `lsr.toml`:
//! - [general]: listing defaults (hidden entries, long view, readable sizes).
//! - [display]: colour mode and the time format of the Modified column.
//! - [load]: locating, parsing and generating the file.

pub mod display;
pub mod general;
pub mod load;

pub use display::{ColorMode, Display};
pub use general::General;
pub use load::Config;
