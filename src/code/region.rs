// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Faces and region boundary codes.
//!
//! A face is the closed walk of directed segments around one region of the
//! plane. The region boundary code lists every face of a diagram.
//!
//! # Examples
//!
//! ```
//! use euler_codes::code::Face;
//!
//! let face: Face = "{(1+ 2-,+),(2- 1+,-)}".parse().unwrap();
//! assert_eq!(face.len(), 2);
//! assert_eq!(face.to_string(), "{(1+ 2-,+),(2- 1+,-)}");
//! ```

use crate::code::{Direction, Segment, Symbol};
use crate::error::{CodeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed walk of segments bounding one region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Face {
    segments: Vec<Segment>,
}

impl Face {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if the face contains this directed segment.
    pub fn contains(&self, segment: &Segment) -> bool {
        self.segments.iter().any(|s| s.same_segment(segment))
    }

    /// True if both walks consist of the same directed segments.
    pub fn same_face(&self, other: &Face) -> bool {
        self.len() == other.len() && self.segments.iter().all(|s| other.contains(s))
    }

    pub fn map_symbol_labels(&self, mut f: impl FnMut(&str) -> String) -> Face {
        Face::new(
            self.segments
                .iter()
                .map(|s| {
                    Segment::new(
                        s.first.with_label(f(s.first.label())),
                        s.second.with_label(f(s.second.label())),
                        s.direction,
                    )
                })
                .collect(),
        )
    }

    /// Spaced listing, e.g. `{(1+, 2-, +),(2-, 1+, -)}`.
    pub fn spaced(&self) -> String {
        let parts: Vec<String> = self.segments.iter().map(Segment::spaced).collect();
        format!("{{{}}}", parts.join(","))
    }

    /// Parse one face written on line `line` of some larger text.
    pub fn parse_line(s: &str, line: usize) -> Result<Self> {
        let s = s.trim();
        let inner = s
            .strip_prefix("{(")
            .and_then(|rest| rest.strip_suffix(")}"))
            .ok_or_else(|| CodeError::format(line, "Unparseable region code"))?;
        let mut segments = Vec::new();
        for part in inner.split("),(") {
            let tokens: Vec<&str> = part
                .split([' ', ','])
                .filter(|t| !t.is_empty())
                .collect();
            let [first, second, direction] = tokens[..] else {
                return Err(CodeError::format(line, "Unparseable segment"));
            };
            let first: Symbol = first
                .parse()
                .map_err(|e: crate::code::SymbolParseError| CodeError::format(line, e.0))?;
            let second: Symbol = second
                .parse()
                .map_err(|e: crate::code::SymbolParseError| CodeError::format(line, e.0))?;
            let mut chars = direction.chars();
            let direction = match (chars.next().and_then(Direction::from_char), chars.next()) {
                (Some(d), None) => d,
                _ => return Err(CodeError::format(line, "Wrong direction")),
            };
            segments.push(Segment::new(first, second, direction));
        }
        Ok(Face::new(segments))
    }
}

impl FromStr for Face {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        Face::parse_line(s, 1)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, s) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", s)?;
        }
        write!(f, "}}")
    }
}

/// Every face of a diagram, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCode {
    faces: Vec<Face>,
}

impl RegionCode {
    pub fn new(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Index of the face containing this directed segment.
    pub fn face_index(&self, segment: &Segment) -> Option<usize> {
        self.faces.iter().position(|f| f.contains(segment))
    }

    /// The face containing this directed segment.
    pub fn face_containing(&self, segment: &Segment) -> Option<&Face> {
        self.face_index(segment).map(|i| &self.faces[i])
    }

    /// Index of the face equal to `face`, in any rotation.
    pub fn index_of(&self, face: &Face) -> Option<usize> {
        face.segments()
            .first()
            .and_then(|s| self.face_index(s))
            .filter(|&i| self.faces[i].same_face(face))
    }
}

impl FromStr for RegionCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        let faces = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| Face::parse_line(line, i + 1))
            .collect::<Result<Vec<_>>>()?;
        Ok(RegionCode::new(faces))
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", face)?;
        }
        Ok(())
    }
}
