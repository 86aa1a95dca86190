// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face tracing over the rotation system encoded by a Gauss code.
//!
//! Directed segments are numbered in discovery order: curve order, then
//! position within the word, forward before backward. Segment `2k` is the
//! forward traversal of the `k`th symbol's outgoing edge and `2k + 1` the
//! backward one, so `id ^ 1` is always the inverse segment.

use crate::code::{Direction, Face, GaussCode, RegionCode, Segment, Sign};
use crate::error::Result;
use std::collections::HashMap;
use tracing::trace;

type SegmentKey = (String, Sign, String, Sign, Direction);

fn key_of(segment: &Segment) -> SegmentKey {
    (
        segment.first.label().to_string(),
        segment.first.sign(),
        segment.second.label().to_string(),
        segment.second.sign(),
        segment.direction,
    )
}

/// The faces of a Gauss code, with segment and face lookup tables.
#[derive(Debug, Clone)]
pub struct FaceTracing {
    segments: Vec<Segment>,
    /// Curve index for each directed segment.
    curve_of: Vec<usize>,
    /// Segment ids of each face, in walk order.
    faces: Vec<Vec<usize>>,
    /// Face index for each directed segment.
    face_of: Vec<usize>,
    ids: HashMap<SegmentKey, usize>,
}

/// Per-occurrence successor data.
struct Occurrences {
    sign: Vec<Sign>,
    next: Vec<usize>,
    prev: Vec<usize>,
    partner: Vec<usize>,
}

impl Occurrences {
    fn build(code: &GaussCode) -> Self {
        let n = code.occurrence_count();
        let mut sign = Vec::with_capacity(n);
        let mut next = Vec::with_capacity(n);
        let mut prev = Vec::with_capacity(n);
        let mut index: HashMap<(&str, Sign), usize> = HashMap::with_capacity(n);

        let mut base = 0;
        for curve in code.curves() {
            let len = curve.word.len();
            for (j, symbol) in curve.word.iter().enumerate() {
                sign.push(symbol.sign());
                next.push(base + (j + 1) % len);
                prev.push(base + (j + len - 1) % len);
                index.insert(symbol.key(), base + j);
            }
            base += len;
        }

        let partner = code
            .curves()
            .iter()
            .flat_map(|c| c.word.iter())
            .map(|s| index[&(s.label(), s.sign().opposite())])
            .collect();

        Self {
            sign,
            next,
            prev,
            partner,
        }
    }

    /// Next directed segment along the face to the left of `id`.
    fn successor(&self, id: usize) -> usize {
        let k = id / 2;
        if id % 2 == 0 {
            let b = self.next[k];
            let q = self.partner[b];
            match self.sign[b] {
                Sign::Plus => 2 * self.prev[q] + 1,
                Sign::Minus => 2 * q,
            }
        } else {
            let q = self.partner[k];
            match self.sign[k] {
                Sign::Plus => 2 * q,
                Sign::Minus => 2 * self.prev[q] + 1,
            }
        }
    }
}

impl FaceTracing {
    /// Trace every face of `code`.
    ///
    /// Fails if the code is malformed.
    pub fn trace(code: &GaussCode) -> Result<Self> {
        code.validate()?;
        let segments = code.segments();
        let curve_of = code
            .curves()
            .iter()
            .enumerate()
            .flat_map(|(i, c)| std::iter::repeat(i).take(2 * c.word.len()))
            .collect();
        let ids = segments
            .iter()
            .enumerate()
            .map(|(i, s)| (key_of(s), i))
            .collect();

        let (faces, face_of) = if code.is_simple_loop() {
            (vec![vec![0], vec![1]], vec![0, 1])
        } else {
            Self::walk_faces(&Occurrences::build(code), segments.len())
        };
        trace!(
            faces = faces.len(),
            segments = segments.len(),
            "traced faces"
        );

        Ok(Self {
            segments,
            curve_of,
            faces,
            face_of,
            ids,
        })
    }

    fn walk_faces(occurrences: &Occurrences, count: usize) -> (Vec<Vec<usize>>, Vec<usize>) {
        const UNVISITED: usize = usize::MAX;
        let mut face_of = vec![UNVISITED; count];
        let mut faces = Vec::new();
        for start in 0..count {
            if face_of[start] != UNVISITED {
                continue;
            }
            let face = faces.len();
            let mut walk = Vec::new();
            let mut current = start;
            loop {
                face_of[current] = face;
                walk.push(current);
                current = occurrences.successor(current);
                if current == start {
                    break;
                }
                debug_assert_eq!(face_of[current], UNVISITED, "successor is not a permutation");
            }
            faces.push(walk);
        }
        (faces, face_of)
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, id: usize) -> &Segment {
        &self.segments[id]
    }

    pub fn segment_id(&self, segment: &Segment) -> Option<usize> {
        self.ids.get(&key_of(segment)).copied()
    }

    pub fn curve_of(&self, id: usize) -> usize {
        self.curve_of[id]
    }

    pub fn face_of(&self, id: usize) -> usize {
        self.face_of[id]
    }

    pub fn face_segments(&self, face: usize) -> &[usize] {
        &self.faces[face]
    }

    /// Index of the traced face that `face` names, in any rotation.
    pub fn face_index(&self, face: &Face) -> Option<usize> {
        face.segments()
            .first()
            .and_then(|s| self.segment_id(s))
            .map(|id| self.face_of[id])
            .filter(|&f| self.face(f).same_face(face))
    }

    /// Faces across each boundary segment of `face`, paired with that segment.
    pub fn neighbours(&self, face: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.faces[face]
            .iter()
            .map(move |&id| (self.face_of[id ^ 1], id))
    }

    pub fn face(&self, face: usize) -> Face {
        Face::new(
            self.faces[face]
                .iter()
                .map(|&id| self.segments[id].clone())
                .collect(),
        )
    }

    pub fn region_code(&self) -> RegionCode {
        RegionCode::new((0..self.faces.len()).map(|f| self.face(f)).collect())
    }
}

/// Trace the faces of a Gauss code.
///
/// Fails with [`crate::CodeError::Malformed`] if some label does not occur
/// exactly once with each sign.
pub fn trace_faces(code: &GaussCode) -> Result<RegionCode> {
    Ok(FaceTracing::trace(code)?.region_code())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodeError;

    #[test]
    fn test_simple_loop_has_two_faces() {
        let code: GaussCode = "A: 1+".parse().unwrap();
        let faces = trace_faces(&code).unwrap();
        assert_eq!(faces.to_string(), "{(1+ 1+,+)}\n{(1+ 1+,-)}");
    }

    #[test]
    fn test_two_crossing_circles() {
        let code: GaussCode = "A: 1- 2+\nB: 1+ 2-".parse().unwrap();
        let faces = trace_faces(&code).unwrap();
        assert_eq!(
            faces.to_string(),
            "{(1- 2+,+),(1+ 2-,-)}\n\
             {(1- 2+,-),(2- 1+,-)}\n\
             {(2+ 1-,+),(1+ 2-,+)}\n\
             {(2+ 1-,-),(2- 1+,+)}"
        );
    }

    #[test]
    fn test_every_segment_in_one_face() {
        let code: GaussCode = "A: 1- 2+\nB: 1+ 2-".parse().unwrap();
        let tracing = FaceTracing::trace(&code).unwrap();
        let mut seen = vec![0; tracing.segment_count()];
        for f in 0..tracing.face_count() {
            for &id in tracing.face_segments(f) {
                seen[id] += 1;
                assert_eq!(tracing.face_of(id), f);
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn test_neighbours_cross_inverse_segment() {
        let code: GaussCode = "A: 1- 2+\nB: 1+ 2-".parse().unwrap();
        let tracing = FaceTracing::trace(&code).unwrap();
        for (g, id) in tracing.neighbours(0) {
            assert!(tracing.face_segments(g).contains(&(id ^ 1)));
        }
    }

    #[test]
    fn test_malformed_code_rejected() {
        let code: GaussCode = "A: 1+ 2+\nB: 1- 2+".parse().unwrap();
        assert!(matches!(
            trace_faces(&code),
            Err(CodeError::Malformed { .. })
        ));
    }
}
