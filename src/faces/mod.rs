// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face tracing and planarity.
//!
//! # Examples
//!
//! ```
//! use euler_codes::code::GaussCode;
//! use euler_codes::faces::{is_planar, trace_faces};
//!
//! let code: GaussCode = "A: 1- 2+\nB: 1+ 2-".parse().unwrap();
//! assert_eq!(trace_faces(&code).unwrap().len(), 4);
//! assert!(is_planar(&code));
//! ```

mod planarity;
mod tracer;

pub(crate) use planarity::check_planar;
pub use planarity::{euler_characteristic, is_planar, require_planar};
pub use tracer::{trace_faces, FaceTracing};
