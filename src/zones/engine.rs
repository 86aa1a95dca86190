// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Zone computation.
//!
//! Each face is assigned the set of curves containing it. Starting from the
//! face, a breadth-first expansion over neighbouring faces classifies each
//! curve the first time one of its segments is met: an anticlockwise segment
//! means the curve contains the face.

use crate::code::{Face, GaussCode};
use crate::error::{CodeError, Result};
use crate::faces::{check_planar, FaceTracing};
use crate::zones::{Orientation, Zone, ZoneSet};
use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

/// Faces grouped by zone, in zone order.
pub type ZoneMap = BTreeMap<Zone, Vec<Face>>;

/// Zone computation for one diagram and one choice of outer face.
#[derive(Debug)]
pub struct ZoneEngine<'a> {
    code: &'a GaussCode,
    tracing: &'a FaceTracing,
    orientation: Orientation,
}

impl<'a> ZoneEngine<'a> {
    /// Fails with [`CodeError::UnknownFace`] if `outer` is not a traced face,
    /// [`CodeError::Disconnected`] if some curves never cross the others, or
    /// [`CodeError::NonPlanar`] if the code is not planar.
    pub fn new(code: &'a GaussCode, tracing: &'a FaceTracing, outer: &Face) -> Result<Self> {
        check_planar(code, tracing)?;
        let outer = tracing
            .face_index(outer)
            .ok_or_else(|| CodeError::UnknownFace(outer.to_string()))?;
        let orientation = Orientation::measure(code, tracing, outer)?;
        Ok(Self {
            code,
            tracing,
            orientation,
        })
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    /// Zone of face `face`.
    pub fn zone_of(&self, face: usize) -> Result<Zone> {
        let curve_count = self.code.curve_count();
        let mut classified: Vec<Option<bool>> = vec![None; curve_count];
        let mut remaining = curve_count;
        let mut visited = vec![false; self.tracing.face_count()];
        let mut queue = VecDeque::from([face]);
        visited[face] = true;

        while let Some(current) = queue.pop_front() {
            if remaining == 0 {
                break;
            }
            for &id in self.tracing.face_segments(current) {
                let curve = self.tracing.curve_of(id);
                if classified[curve].is_none() {
                    classified[curve] = Some(!self.orientation.is_clockwise(self.tracing, id));
                    remaining -= 1;
                }
            }
            for (next, _) in self.tracing.neighbours(current) {
                if !visited[next] {
                    visited[next] = true;
                    queue.push_back(next);
                }
            }
        }

        for &id in self.tracing.face_segments(face) {
            let curve = self.tracing.curve_of(id);
            if classified[curve] != Some(!self.orientation.is_clockwise(self.tracing, id)) {
                return Err(CodeError::InconsistentZone {
                    face: self.tracing.face(face).to_string(),
                    curve: self.code.curves()[curve].label.clone(),
                });
            }
        }

        Ok(Zone::from_labels(
            classified
                .iter()
                .zip(self.code.labels())
                .filter(|(inside, _)| **inside == Some(true))
                .map(|(_, label)| label),
        ))
    }

    /// One zone per face, in face order.
    pub fn face_zones(&self) -> Result<Vec<Zone>> {
        (0..self.tracing.face_count())
            .map(|f| self.zone_of(f))
            .collect()
    }

    pub fn zone_map(&self) -> Result<ZoneMap> {
        let mut map = ZoneMap::new();
        for (f, zone) in self.face_zones()?.into_iter().enumerate() {
            map.entry(zone).or_default().push(self.tracing.face(f));
        }
        debug!(zones = map.len(), faces = self.tracing.face_count(), "computed zones");
        Ok(map)
    }
}

/// Zones of `code` with `outer` as the unbounded face, each with its faces.
pub fn compute_zones(code: &GaussCode, outer: &Face) -> Result<ZoneMap> {
    let tracing = FaceTracing::trace(code)?;
    ZoneEngine::new(code, &tracing, outer)?.zone_map()
}

/// The zone of every face, aligned with [`crate::faces::trace_faces`].
pub fn face_zones(code: &GaussCode, outer: &Face) -> Result<Vec<Zone>> {
    let tracing = FaceTracing::trace(code)?;
    ZoneEngine::new(code, &tracing, outer)?.face_zones()
}

/// The distinct zones of `code`.
pub fn zone_set(code: &GaussCode, outer: &Face) -> Result<ZoneSet> {
    Ok(compute_zones(code, outer)?.into_keys().collect())
}

/// Number of faces in each zone.
pub fn region_counts(code: &GaussCode, outer: &Face) -> Result<BTreeMap<Zone, usize>> {
    Ok(compute_zones(code, outer)?
        .into_iter()
        .map(|(zone, faces)| (zone, faces.len()))
        .collect())
}

/// The clockwise directed segments of `code` for this outer face.
pub fn clockwise_segments(code: &GaussCode, outer: &Face) -> Result<Vec<crate::code::Segment>> {
    let tracing = FaceTracing::trace(code)?;
    let engine = ZoneEngine::new(code, &tracing, outer)?;
    Ok(engine
        .orientation()
        .clockwise_segments(&tracing)
        .into_iter()
        .map(|id| tracing.segment(id).clone())
        .collect())
}
