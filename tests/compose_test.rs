// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Splitting a zone set, finding each part in a database and putting the
//! drawings back together as one Euler code.

mod common;

use common::*;
use euler_codes::compose::{combine, compose, ComponentSpec, FaceRef};
use euler_codes::decompose::decompose;
use euler_codes::index::{DiagramDatabase, DiagramRecord};
use euler_codes::zones::Zone;
use euler_codes::{CodeError, EulerCode};

fn database() -> DiagramDatabase {
    let mut db = DiagramDatabase::new();
    db.add_diagram(code(SIMPLE_LOOP), face(SIMPLE_LOOP_OUTER))
        .unwrap();
    db.add_diagram(code(VENN2), face(VENN2_OUTER)).unwrap();
    db
}

/// Decompose `text`, look up every part and order the parts so that each
/// comes after the part it is drawn inside.
fn drawable_parts(db: &DiagramDatabase, text: &str) -> Vec<(DiagramRecord, Zone)> {
    let mut pending = decompose(&zones(text)).unwrap();
    let mut placed: Vec<(DiagramRecord, Zone)> = Vec::new();
    while !pending.is_empty() {
        let ready = pending
            .iter()
            .position(|p| {
                p.within.is_empty() || placed.iter().any(|(r, _)| r.zones().contains(&p.within))
            })
            .unwrap();
        let part = pending.remove(ready);
        let record = db
            .lookup(&part.zones)
            .unwrap()
            .into_iter()
            .next()
            .unwrap();
        placed.push((record, part.within));
    }
    placed
}

#[test]
fn test_nested_venn_inside_loop() {
    let db = database();
    let parts = drawable_parts(&db, "A,AB,AC,ABC");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0].1, Zone::empty());
    assert_eq!(parts[1].1, zone("A"));

    let euler = combine(&parts).unwrap();
    assert_eq!(euler.len(), 2);
    assert_eq!(euler.parents().unwrap(), vec![None, Some(0)]);

    let inner = &euler.components()[1];
    assert_eq!(inner.code.to_string(), "B: 2- 3+\nC: 2+ 3-");
    assert_eq!(
        inner.within.as_ref().map(|f| f.to_string()),
        Some("{(1+ 1+,-)}".to_string())
    );
}

#[test]
fn test_side_by_side_loops() {
    let db = database();
    let parts = drawable_parts(&db, "A,B");
    let euler = combine(&parts).unwrap();
    assert_eq!(euler.parents().unwrap(), vec![None, None]);
    let codes: Vec<String> = euler
        .components()
        .iter()
        .map(|c| c.code.to_string())
        .collect();
    assert_eq!(codes, vec!["A: 1+", "B: 2+"]);
}

#[test]
fn test_euler_code_text_round_trip() {
    let db = database();
    let euler = combine(&drawable_parts(&db, "A,AB,AC,ABC")).unwrap();
    let text = euler.to_string();
    let parsed: EulerCode = text.parse().unwrap();
    assert_eq!(parsed, euler);
}

#[test]
fn test_compose_rejects_unknown_face() {
    let spec = |within| ComponentSpec {
        code: code(SIMPLE_LOOP),
        outer: face(SIMPLE_LOOP_OUTER),
        within,
    };
    let result = compose(vec![
        spec(None),
        spec(Some(FaceRef {
            component: 0,
            face: face("{(4+ 4+,-)}"),
        })),
    ]);
    assert!(matches!(result, Err(CodeError::UnknownFace(_))));
}

#[test]
fn test_compose_rejects_non_numeric_labels() {
    let spec = ComponentSpec {
        code: code("A: x+"),
        outer: face("{(x+ x+,+)}"),
        within: None,
    };
    assert!(matches!(
        compose(vec![spec]),
        Err(CodeError::NonNumericLabel(_))
    ));
}
