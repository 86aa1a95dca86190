// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end tests from Gauss code text to faces and zones.

mod common;

use common::*;
use euler_codes::faces::{euler_characteristic, is_planar, require_planar, trace_faces};
use euler_codes::zones::{compute_zones, face_zones, region_counts, zone_set};
use euler_codes::CodeError;

#[test]
fn test_simple_loop() {
    let code = code(SIMPLE_LOOP);
    let faces = trace_faces(&code).unwrap();
    let listed: Vec<String> = faces.faces().iter().map(|f| f.to_string()).collect();
    assert_eq!(listed, vec!["{(1+ 1+,+)}", "{(1+ 1+,-)}"]);
    assert_eq!(euler_characteristic(&code), Ok(2));

    let zones = compute_zones(&code, &face(SIMPLE_LOOP_OUTER)).unwrap();
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[&zone("0")][0].to_string(), "{(1+ 1+,+)}");
    assert_eq!(zones[&zone("A")][0].to_string(), "{(1+ 1+,-)}");
}

#[test]
fn test_venn_two() {
    let code = code(VENN2);
    let faces = trace_faces(&code).unwrap();
    assert_eq!(faces.len(), 4);
    let outer = face(VENN2_OUTER);
    assert!(faces.index_of(&outer).is_some());

    let zones = zone_set(&code, &outer).unwrap();
    assert_eq!(zones.to_string(), "0,A,B,AB");
}

#[test]
fn test_malformed_code_rejected() {
    let code = code("A: 1+ 2+\nB: 1- 2+");
    assert_eq!(
        trace_faces(&code),
        Err(CodeError::Malformed {
            label: "2".to_string(),
            positive: 2,
            negative: 0,
        })
    );
    assert!(!is_planar(&code));
}

#[test]
fn test_venn_three_faces() {
    let code = code(VENN3);
    let faces = trace_faces(&code).unwrap();
    assert_eq!(faces.len(), 8);
    assert!(faces.faces().iter().all(|f| f.len() == 3));
    assert_eq!(euler_characteristic(&code), Ok(2));
    assert_eq!(faces.faces()[6], face(VENN3_OUTER));
}

#[test]
fn test_venn_three_zones() {
    let code = code(VENN3);
    let outer = face(VENN3_OUTER);
    let zones = zone_set(&code, &outer).unwrap();
    assert_eq!(zones.to_string(), "0,A,B,C,AB,AC,BC,ABC");

    let per_face: Vec<String> = face_zones(&code, &outer)
        .unwrap()
        .iter()
        .map(|z| z.to_string())
        .collect();
    assert_eq!(per_face, vec!["B", "AB", "BC", "ABC", "C", "AC", "0", "A"]);
}

#[test]
fn test_venn_three_inner_face_as_outer() {
    // Turning the drawing inside out through the central face.
    let code = code(VENN3);
    let faces = trace_faces(&code).unwrap();
    let central = faces.faces()[3].clone();
    let per_face: Vec<String> = face_zones(&code, &central)
        .unwrap()
        .iter()
        .map(|z| z.to_string())
        .collect();
    assert_eq!(per_face, vec!["AC", "C", "A", "0", "AB", "B", "ABC", "BC"]);
}

#[test]
fn test_figure_eight_has_two_lobes_in_one_zone() {
    let code = code(FIGURE_EIGHT);
    let faces = trace_faces(&code).unwrap();
    assert_eq!(faces.len(), 3);
    assert_eq!(faces.faces()[1], face(FIGURE_EIGHT_OUTER));

    let counts = region_counts(&code, &face(FIGURE_EIGHT_OUTER)).unwrap();
    assert_eq!(counts[&zone("0")], 1);
    assert_eq!(counts[&zone("A")], 2);
}

#[test]
fn test_non_planar_word() {
    let code = code(NON_PLANAR);
    let faces = trace_faces(&code).unwrap();
    assert_eq!(faces.len(), 2);
    assert_eq!(euler_characteristic(&code), Ok(0));
    assert_eq!(
        require_planar(&code),
        Err(CodeError::NonPlanar { characteristic: 0 })
    );
    assert!(matches!(
        compute_zones(&code, &faces.faces()[0]),
        Err(CodeError::NonPlanar { .. })
    ));
}

#[test]
fn test_outer_face_must_belong_to_code() {
    let code = code(VENN2);
    assert!(matches!(
        compute_zones(&code, &face("{(7+ 8-,+)}")),
        Err(CodeError::UnknownFace(_))
    ));
}

#[test]
fn test_disconnected_groups_rejected() {
    // Each group traces on its own; together they still sum to 2.
    let code = code(&format!("{}\nC: 3+ 4+ 3- 4-", VENN2));
    assert_eq!(euler_characteristic(&code), Ok(2));
    assert!(!is_planar(&code));

    let faces = trace_faces(&code).unwrap();
    assert_eq!(faces.len(), 6);
    assert_eq!(
        compute_zones(&code, &faces.faces()[1]),
        Err(CodeError::Disconnected { groups: 2 })
    );
}
