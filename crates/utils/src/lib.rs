//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, sorting a directory listing of numbered snapshot files into
//! natural order is useful everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod sort_ext;

// Flatten
pub use sort_ext::{natural_cmp, SortExt};
