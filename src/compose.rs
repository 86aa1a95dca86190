// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Composition of connected components into one Euler code.
//!
//! Symbol labels of each component are shifted past the labels of every
//! component before it, so that the composed code has globally unique
//! symbol labels.

use crate::code::{Component, EulerCode, Face, GaussCode};
use crate::error::{CodeError, Result};
use crate::faces::FaceTracing;
use crate::index::DiagramRecord;
use crate::zones::{Zone, ZoneEngine};
use std::collections::BTreeMap;
use tracing::debug;

/// A face of the component at position `component` in the input, in that
/// component's own labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceRef {
    pub component: usize,
    pub face: Face,
}

/// One component to compose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentSpec {
    pub code: GaussCode,
    pub outer: Face,
    /// Face this component is drawn inside; `None` at top level.
    pub within: Option<FaceRef>,
}

fn shift(label: &str, offset: u64) -> String {
    match label.parse::<u64>() {
        Ok(value) => (value + offset).to_string(),
        Err(_) => label.to_string(),
    }
}

/// Running label offsets: each component starts after the sum of the
/// maximum labels of the components before it.
fn offsets<'a>(codes: impl Iterator<Item = &'a GaussCode>) -> Result<Vec<u64>> {
    let mut total = 0;
    let mut result = Vec::new();
    for code in codes {
        result.push(total);
        total += code.max_symbol_label()?;
    }
    Ok(result)
}

/// Compose components into an [`EulerCode`].
///
/// Fails with [`CodeError::NonNumericLabel`] if a symbol label is not an
/// integer, [`CodeError::UnknownFace`] if a `within` reference names no face
/// of its component, or [`CodeError::CyclicNesting`] if nesting loops.
pub fn compose(specs: Vec<ComponentSpec>) -> Result<EulerCode> {
    let offsets = offsets(specs.iter().map(|s| &s.code))?;
    for (i, spec) in specs.iter().enumerate() {
        if let Some(within) = &spec.within {
            if within.component == i {
                return Err(CodeError::CyclicNesting(i));
            }
            let owner = specs
                .get(within.component)
                .ok_or_else(|| CodeError::UnknownFace(within.face.to_string()))?;
            let tracing = FaceTracing::trace(&owner.code)?;
            if tracing.face_index(&within.face).is_none() {
                return Err(CodeError::UnknownFace(within.face.to_string()));
            }
        }
    }

    let components = specs
        .iter()
        .zip(&offsets)
        .map(|(spec, &offset)| Component {
            code: spec.code.map_symbol_labels(|l| shift(l, offset)),
            outer: spec.outer.map_symbol_labels(|l| shift(l, offset)),
            within: spec.within.as_ref().map(|w| {
                let offset = offsets[w.component];
                w.face.map_symbol_labels(|l| shift(l, offset))
            }),
        })
        .collect();
    debug!(components = specs.len(), "composed Euler code");
    EulerCode::new(components)
}

/// The face owning each non-empty zone of one component.
fn zone_faces(code: &GaussCode, outer: &Face) -> Result<BTreeMap<Zone, Face>> {
    if code.is_simple_loop() {
        let curve = &code.curves()[0];
        let inside = curve.word.segments().remove(1);
        return Ok(BTreeMap::from([(
            Zone::from_labels([curve.label.clone()]),
            Face::new(vec![inside]),
        )]));
    }
    let tracing = FaceTracing::trace(code)?;
    let engine = ZoneEngine::new(code, &tracing, outer)?;
    let mut map = BTreeMap::new();
    for (f, zone) in engine.face_zones()?.into_iter().enumerate() {
        if !zone.is_empty() {
            map.entry(zone).or_insert_with(|| tracing.face(f));
        }
    }
    Ok(map)
}

/// Compose database records, each drawn inside the face owning a zone of
/// the records composed so far (the empty zone means top level).
///
/// A crossing-free single curve owns the inside face `(s, s, -)`.
pub fn combine(parts: &[(DiagramRecord, Zone)]) -> Result<EulerCode> {
    let offsets = offsets(parts.iter().map(|(r, _)| r.code()))?;
    let mut faces: BTreeMap<Zone, Face> = BTreeMap::new();
    let mut components = Vec::with_capacity(parts.len());
    for ((record, within), &offset) in parts.iter().zip(&offsets) {
        let code = record.code().map_symbol_labels(|l| shift(l, offset));
        let outer = record.outer().map_symbol_labels(|l| shift(l, offset));
        let within = if within.is_empty() {
            None
        } else {
            Some(
                faces
                    .get(within)
                    .cloned()
                    .ok_or_else(|| CodeError::UnknownFace(within.to_string()))?,
            )
        };
        faces.extend(zone_faces(&code, &outer)?);
        components.push(Component {
            code,
            within,
            outer,
        });
    }
    EulerCode::new(components)
}
