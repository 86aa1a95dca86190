// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical forms of zone sets under curve relabelling.
//!
//! ## Module Structure
//!
//! - `permutation`: Heap's algorithm, word rotations and reversals
//! - `form`: minimal relabelling of a zone set

mod form;
mod permutation;

pub use form::{canonicalize, is_canonical, CanonicalForm};
pub use permutation::{
    canonical_label, cyclic_shifts, equivalent_words, permute_curve_labels, permute_curve_order,
    reverse, HeapPermutations,
};
