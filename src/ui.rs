//! Rendering of directory listings to a writer.
//!
//! - [grid]: compact multi-column view of entry names.
//! - [table]: one row per entry with metadata columns.
//! - [style]: colouring of names by entry kind.
//!
//! Both views are single-pass and stateless; they write into any [std::io::Write]
//! so the same code serves stdout and tests.

pub mod grid;
pub mod style;
pub mod table;

pub use grid::{COLUMN_GAP, GridFormatter, grid_columns};
pub use table::{HEADERS, TableFormatter};
