// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for code parsing, face tracing and zone computation.

use thiserror::Error;

/// Errors raised while reading or analysing a diagram code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// A crossing label does not occur exactly once with each sign.
    #[error("malformed Gauss code: label {label} occurs {positive} time(s) as '+' and {negative} time(s) as '-'")]
    Malformed {
        label: String,
        positive: usize,
        negative: usize,
    },

    /// A curve has no symbols at all.
    #[error("malformed Gauss code: curve {0} has an empty word")]
    EmptyWord(String),

    /// Euler's formula does not hold for the traced faces.
    #[error("Gauss code is not planar (V - E + F = {characteristic})")]
    NonPlanar { characteristic: i64 },

    /// The curves fall into groups that never cross each other. Such
    /// diagrams are built from their parts with [`crate::compose`].
    #[error("Gauss code has {groups} groups of curves that do not cross; compose them instead")]
    Disconnected { groups: usize },

    /// A face cannot be reached from the outer face across curve segments.
    #[error("face {0} is unreachable from the outer face")]
    UnreachableFace(String),

    /// Two boundary segments of one face disagree on containment by a curve.
    #[error("inconsistent zone: face {face} is both inside and outside curve {curve}")]
    InconsistentZone { face: String, curve: String },

    /// Text could not be parsed. Lines are numbered from 1.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// A face passed in does not belong to the diagram.
    #[error("face {0} is not a face of this diagram")]
    UnknownFace(String),

    /// A curve label passed in does not belong to the diagram.
    #[error("no curve labelled {0}")]
    UnknownCurve(String),

    #[error("curve label {0} is used twice")]
    DuplicateCurve(String),

    /// Composition offsets symbol labels, so they must be integers.
    #[error("symbol label {0} is not numeric")]
    NonNumericLabel(String),

    /// A component is (transitively) nested inside itself.
    #[error("component {0} is nested inside itself")]
    CyclicNesting(usize),

    /// A biconnected component contains more than one nesting zone, or a zone
    /// is claimed by two components.
    #[error("ambiguous nesting for zone {0}")]
    AmbiguousNesting(String),
}

impl CodeError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        CodeError::Format {
            line,
            message: message.into(),
        }
    }
}

/// Errors raised by the diagram database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("database I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("database encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error(transparent)]
    Code(#[from] CodeError),
}

pub type Result<T, E = CodeError> = std::result::Result<T, E>;
