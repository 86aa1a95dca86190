// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests: results must not depend on where each curve's word
//! starts, on curve order, or on the names given to curves, and text forms
//! must read back unchanged.

mod common;

use common::*;
use euler_codes::canonical::{canonical_label, canonicalize, is_canonical};
use euler_codes::code::{CurveWord, GaussCode, RegionCode};
use euler_codes::faces::{trace_faces, FaceTracing};
use euler_codes::zones::{zone_set, Zone, ZoneSet};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Rotate each curve's word by the matching shift, then reorder curves.
fn rearranged(code: &GaussCode, shifts: &[usize], order: &[usize]) -> GaussCode {
    let curves: Vec<(String, CurveWord)> = order
        .iter()
        .map(|&i| {
            let curve = &code.curves()[i];
            let n = curve.word.len();
            let symbols = (0..n)
                .map(|j| curve.word.at(j + shifts[i]).clone())
                .collect();
            (curve.label.clone(), CurveWord::new(symbols))
        })
        .collect();
    GaussCode::from_curves(curves).unwrap()
}

fn arrangement() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    (
        prop::collection::vec(0usize..4, 3),
        Just(vec![0usize, 1, 2]).prop_shuffle(),
    )
}

/// A fixture with a rotation per curve and a curve order.
fn fixtures() -> impl Strategy<Value = (GaussCode, Vec<usize>, Vec<usize>)> {
    prop_oneof![Just(VENN2), Just(VENN3), Just(FIGURE_EIGHT)].prop_flat_map(|text| {
        let n = code(text).curve_count();
        (
            Just(code(text)),
            prop::collection::vec(0usize..4, n),
            Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
        )
    })
}

/// Zone sets over up to five curves, each zone a non-empty bit mask.
fn zone_sets() -> impl Strategy<Value = ZoneSet> {
    prop::collection::btree_set(1u8..32, 1..8).prop_map(|masks| {
        masks
            .into_iter()
            .map(|mask| {
                Zone::from_labels((0..5).filter(|b| mask & (1 << b) != 0).map(canonical_label))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_faces_independent_of_word_start((shifts, order) in arrangement()) {
        let venn3 = code(VENN3);
        let moved = rearranged(&venn3, &shifts, &order);
        let faces = trace_faces(&moved).unwrap();
        prop_assert_eq!(faces.len(), 8);

        let original = trace_faces(&venn3).unwrap();
        for f in original.faces() {
            prop_assert!(faces.index_of(f).is_some(), "lost face {}", f);
        }
    }

    #[test]
    fn test_zones_independent_of_word_start((shifts, order) in arrangement()) {
        let moved = rearranged(&code(VENN3), &shifts, &order);
        let zones = zone_set(&moved, &face(VENN3_OUTER)).unwrap();
        prop_assert_eq!(zones.to_string(), "0,A,B,C,AB,AC,BC,ABC");
    }

    #[test]
    fn test_every_segment_in_one_face((shifts, order) in arrangement()) {
        let moved = rearranged(&code(VENN3), &shifts, &order);
        let tracing = FaceTracing::trace(&moved).unwrap();
        let mut seen = vec![0; tracing.segment_count()];
        for f in 0..tracing.face_count() {
            for &id in tracing.face_segments(f) {
                seen[id] += 1;
            }
        }
        prop_assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_gauss_code_text_round_trip(
        (base, shifts, order) in fixtures(),
        names in Just(vec!["A", "B", "C", "P", "Q"]).prop_shuffle(),
        offset in 0u64..100,
    ) {
        let moved = rearranged(&base, &shifts, &order)
            .map_curve_labels(|l| names[usize::from(l.as_bytes()[0] - b'A')].to_string())
            .unwrap()
            .map_symbol_labels(|l| (l.parse::<u64>().unwrap() + offset).to_string());
        prop_assert_eq!(moved.to_string().parse::<GaussCode>(), Ok(moved.clone()));
    }

    #[test]
    fn test_region_code_text_round_trip((base, shifts, order) in fixtures()) {
        let faces = trace_faces(&rearranged(&base, &shifts, &order)).unwrap();
        prop_assert_eq!(faces.to_string().parse::<RegionCode>(), Ok(faces.clone()));
    }

    #[test]
    fn test_canonical_form_is_idempotent(zones in zone_sets()) {
        let form = canonicalize(&zones);
        prop_assert!(is_canonical(&form.zones));
        prop_assert_eq!(canonicalize(&form.zones).zones, form.zones.clone());
        prop_assert_eq!(zones.relabel(&form.inverse_map()), form.zones);
    }

    #[test]
    fn test_canonical_form_ignores_curve_names(
        zones in zone_sets(),
        names in Just(vec!["P", "Q", "R", "S", "T"]).prop_shuffle(),
    ) {
        let rename: BTreeMap<String, String> = (0..5)
            .map(|i| (canonical_label(i), names[i].to_string()))
            .collect();
        let renamed = zones.relabel(&rename);
        prop_assert_eq!(canonicalize(&renamed).zones, canonicalize(&zones).zones);
    }
}
