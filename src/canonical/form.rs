// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical relabelling of zone sets.
//!
//! Two diagrams that differ only in the names of their curves have the same
//! canonical zone set. The canonical form is the lexicographically smallest
//! image, zone by zone in zone order, over every assignment of the labels
//! `A, B, C, ...` to the curves.

use crate::canonical::{canonical_label, HeapPermutations};
use crate::zones::ZoneSet;
use std::collections::BTreeMap;
use tracing::{trace, warn};

/// Curve counts above this make the search noticeably slow.
const SLOW_CANONICALIZATION: usize = 9;

/// A canonical zone set and the relabelling that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalForm {
    pub zones: ZoneSet,
    /// Canonical label to original label.
    pub label_map: BTreeMap<String, String>,
}

impl CanonicalForm {
    /// Original label to canonical label.
    pub fn inverse_map(&self) -> BTreeMap<String, String> {
        self.label_map
            .iter()
            .map(|(canonical, original)| (original.clone(), canonical.clone()))
            .collect()
    }
}

/// Find the canonical form of `zones`.
///
/// Takes time factorial in the number of curves. When several relabellings
/// reach the minimum, the first found by [`HeapPermutations`] is kept.
///
/// # Examples
///
/// ```
/// use euler_codes::canonical::canonicalize;
/// use euler_codes::zones::ZoneSet;
///
/// let zones: ZoneSet = "Q,PQ".parse().unwrap();
/// let form = canonicalize(&zones);
/// assert_eq!(form.zones.to_string(), "A,AB");
/// assert_eq!(form.label_map["A"], "Q");
/// ```
pub fn canonicalize(zones: &ZoneSet) -> CanonicalForm {
    let labels = zones.labels();
    let n = labels.len();
    if n > SLOW_CANONICALIZATION {
        warn!(curves = n, "canonical form search over {} labels", n);
    }
    let alphabet: Vec<String> = (0..n).map(canonical_label).collect();

    let mut best: Option<(ZoneSet, Vec<usize>)> = None;
    for perm in HeapPermutations::new(n) {
        let map: BTreeMap<String, String> = labels
            .iter()
            .zip(&perm)
            .map(|(label, &p)| (label.clone(), alphabet[p].clone()))
            .collect();
        let image = zones.relabel(&map);
        match &best {
            Some((current, _)) if image >= *current => {}
            _ => best = Some((image, perm)),
        }
    }

    let (zones, perm) = best.unwrap_or_default();
    let label_map = labels
        .into_iter()
        .zip(perm)
        .map(|(label, p)| (alphabet[p].clone(), label))
        .collect();
    trace!(%zones, "canonical form");
    CanonicalForm { zones, label_map }
}

/// True if `zones` is already in canonical form.
pub fn is_canonical(zones: &ZoneSet) -> bool {
    canonicalize(zones).zones == *zones
}
