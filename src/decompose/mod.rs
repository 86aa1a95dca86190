// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Decomposition of disconnected or touching diagrams into biconnected parts.

mod disconnected;
mod graph;

pub use disconnected::{decompose, SubDiagram};
pub use graph::{Biconnected, UndirectedGraph};
