// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Directed segments between cyclically adjacent symbols of a curve word.

use crate::code::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::EnumIter;

/// Direction in which a segment is traversed.
///
/// `Forward` follows the curve word, `Backward` runs against it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Serialize, Deserialize,
)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn inverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Direction::Forward => '+',
            Direction::Backward => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Direction::Forward),
            '-' => Some(Direction::Backward),
            _ => None,
        }
    }
}

/// A segment of a curve from `first` to `second`, traversed in `direction`.
///
/// The same pair of symbols gives two distinct segments, one per direction;
/// each bounds a different face.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub first: Symbol,
    pub second: Symbol,
    pub direction: Direction,
}

impl Segment {
    pub fn new(first: Symbol, second: Symbol, direction: Direction) -> Self {
        Self {
            first,
            second,
            direction,
        }
    }

    /// The same edge traversed the other way.
    pub fn inverse(&self) -> Self {
        Self::new(
            self.first.clone(),
            self.second.clone(),
            self.direction.inverse(),
        )
    }

    /// True if both segments lie on the same edge, whatever their direction.
    pub fn same_edge(&self, other: &Segment) -> bool {
        self.first.same_occurrence(&other.first) && self.second.same_occurrence(&other.second)
    }

    /// True if both segments are the same directed segment, ignoring
    /// under/over data on the symbols.
    pub fn same_segment(&self, other: &Segment) -> bool {
        self.same_edge(other) && self.direction == other.direction
    }

    /// Spaced form used in full region boundary listings, e.g. `(1+, 2-, +)`.
    pub fn spaced(&self) -> String {
        format!(
            "({}, {}, {})",
            self.first,
            self.second,
            self.direction.to_char()
        )
    }
}

/// Compact form, e.g. `(1+ 2-,+)`.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {},{})",
            self.first,
            self.second,
            self.direction.to_char()
        )
    }
}
