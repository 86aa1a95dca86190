// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cyclic curve words.

use crate::code::{Direction, Segment, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The cyclic sequence of symbols met while walking once around a curve.
///
/// Indices wrap modulo the word length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveWord(Vec<Symbol>);

impl CurveWord {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.0.iter()
    }

    /// Symbol at `index` modulo the length.
    ///
    /// # Panics
    ///
    /// Panics if the word is empty.
    pub fn at(&self, index: usize) -> &Symbol {
        &self.0[index % self.0.len()]
    }

    /// Position of the symbol with this `(label, sign)`, if any.
    pub fn position(&self, symbol: &Symbol) -> Option<usize> {
        self.0.iter().position(|s| s.same_occurrence(symbol))
    }

    /// The directed segments of this word, in position order with `+`
    /// before `-`, closing with the segment from the last symbol back to
    /// the first.
    pub fn segments(&self) -> Vec<Segment> {
        let n = self.0.len();
        let mut result = Vec::with_capacity(2 * n);
        for i in 0..n {
            let first = self.at(i);
            let second = self.at(i + 1);
            result.push(Segment::new(
                first.clone(),
                second.clone(),
                Direction::Forward,
            ));
            result.push(Segment::new(
                first.clone(),
                second.clone(),
                Direction::Backward,
            ));
        }
        result
    }

    /// All `n - 1` non-trivial rotations of this word.
    pub fn cyclic_shifts(&self) -> Vec<CurveWord> {
        crate::canonical::cyclic_shifts(&self.0)
            .into_iter()
            .map(CurveWord)
            .collect()
    }

    pub fn reversed(&self) -> CurveWord {
        CurveWord(crate::canonical::reverse(&self.0))
    }

    /// True if `other` is a rotation of this word or of its reversal.
    pub fn is_equivalent(&self, other: &CurveWord) -> bool {
        crate::canonical::equivalent_words(&self.0, &other.0)
    }

    pub fn map_labels(&self, mut f: impl FnMut(&str) -> String) -> CurveWord {
        CurveWord(self.0.iter().map(|s| s.with_label(f(s.label()))).collect())
    }
}

impl From<Vec<Symbol>> for CurveWord {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl fmt::Display for CurveWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", s)?;
        }
        Ok(())
    }
}
