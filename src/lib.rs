// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combinatorial codes for Euler diagrams.
//!
//! An arrangement of closed curves in the plane is described by three
//! interconvertible codes:
//!
//! - the **Gauss code**: for each curve, the cyclic word of signed crossing
//!   labels met while walking around it;
//! - the **region boundary code**: the closed walk of directed segments
//!   around each face;
//! - the **zones**: for each face, the set of curves containing it.
//!
//! # Architecture
//!
//! - [`code`]: the data model and its text forms
//! - [`faces`]: face tracing and the planarity check
//! - [`zones`]: segment orientation and zone computation
//! - [`compose`]: several connected components combined into one Euler code
//! - [`canonical`]: relabelling curves to a canonical zone set
//! - [`index`]: trie of canonical diagrams with exact and superset lookup
//! - [`decompose`]: disconnected and touching diagrams split into parts
//! - [`diagram`]: a mutable diagram with memoized faces and zones
//!
//! # Examples
//!
//! ```
//! use euler_codes::code::GaussCode;
//! use euler_codes::faces::trace_faces;
//! use euler_codes::zones::compute_zones;
//!
//! let code: GaussCode = "A: 1- 2+\nB: 1+ 2-".parse().unwrap();
//! let faces = trace_faces(&code).unwrap();
//! let zones = compute_zones(&code, &faces.faces()[1]).unwrap();
//! let labels: Vec<String> = zones.keys().map(|z| z.to_string()).collect();
//! assert_eq!(labels, vec!["0", "A", "B", "AB"]);
//! ```

pub mod canonical;
pub mod code;
pub mod compose;
pub mod decompose;
pub mod diagram;
pub mod error;
pub mod faces;
pub mod index;
pub mod zones;

// Re-export commonly used types
pub use code::{EulerCode, Face, GaussCode, RegionCode};
pub use diagram::Diagram;
pub use error::{CodeError, DatabaseError};
pub use zones::{Zone, ZoneSet};
