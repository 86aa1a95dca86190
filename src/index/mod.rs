// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Indexed storage of canonical diagrams.
//!
//! ## Module Structure
//!
//! - `record`: one diagram with its region counts, and its text form
//! - `trie`: records keyed by sorted zones, with exact and superset lookup
//! - `database`: canonicalizing wrapper with text and binary persistence

mod database;
mod record;
mod trie;

pub use database::DiagramDatabase;
pub use record::DiagramRecord;
pub use trie::{DiagramIndex, Insertion};
