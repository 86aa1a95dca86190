// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Segment orientation by crossing parity.
//!
//! For each curve, a breadth-first search over the face adjacency graph
//! starting at the outer face assigns every face a rank: the number of
//! times the search path crossed that curve. A face of even rank lies
//! outside the curve, so its boundary segments on that curve run clockwise.

use crate::code::GaussCode;
use crate::error::{CodeError, Result};
use crate::faces::FaceTracing;
use std::collections::VecDeque;

/// Rank parity of every face with respect to every curve.
#[derive(Debug, Clone)]
pub struct Orientation {
    /// `odd[curve][face]` is true if the face lies inside the curve.
    odd: Vec<Vec<bool>>,
}

impl Orientation {
    /// Rank every face against every curve, starting from face `outer`.
    ///
    /// Fails with [`CodeError::InconsistentZone`] if a face is reached with
    /// both parities, which cannot happen for a planar code, or
    /// [`CodeError::UnreachableFace`] if some face is not reachable from
    /// `outer`, as happens when the curves do not all cross each other.
    pub fn measure(code: &GaussCode, tracing: &FaceTracing, outer: usize) -> Result<Self> {
        let odd = (0..code.curve_count())
            .map(|curve| Self::rank_parities(code, tracing, outer, curve))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { odd })
    }

    fn rank_parities(
        code: &GaussCode,
        tracing: &FaceTracing,
        outer: usize,
        curve: usize,
    ) -> Result<Vec<bool>> {
        let mut rank: Vec<Option<usize>> = vec![None; tracing.face_count()];
        let mut queue = VecDeque::from([outer]);
        rank[outer] = Some(0);

        while let Some(face) = queue.pop_front() {
            let Some(r) = rank[face] else {
                unreachable!("queued face {face} has no rank");
            };
            for (next, segment) in tracing.neighbours(face) {
                let next_rank = r + usize::from(tracing.curve_of(segment) == curve);
                match rank[next] {
                    None => {
                        rank[next] = Some(next_rank);
                        queue.push_back(next);
                    }
                    Some(seen) if seen % 2 != next_rank % 2 => {
                        return Err(CodeError::InconsistentZone {
                            face: tracing.face(next).to_string(),
                            curve: code.curves()[curve].label.clone(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        rank.into_iter()
            .enumerate()
            .map(|(face, r)| match r {
                Some(r) => Ok(r % 2 == 1),
                None => Err(CodeError::UnreachableFace(tracing.face(face).to_string())),
            })
            .collect()
    }

    /// True if `face` lies inside curve `curve`.
    pub fn inside(&self, curve: usize, face: usize) -> bool {
        self.odd[curve][face]
    }

    /// True if the directed segment `id` runs clockwise, i.e. the face it
    /// bounds lies outside the segment's curve.
    pub fn is_clockwise(&self, tracing: &FaceTracing, id: usize) -> bool {
        !self.inside(tracing.curve_of(id), tracing.face_of(id))
    }

    /// Ids of the clockwise directed segments.
    pub fn clockwise_segments(&self, tracing: &FaceTracing) -> Vec<usize> {
        (0..tracing.segment_count())
            .filter(|&id| self.is_clockwise(tracing, id))
            .collect()
    }
}
