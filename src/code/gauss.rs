// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gauss codes: one labelled cyclic word per curve.
//!
//! # Examples
//!
//! ```
//! use euler_codes::code::GaussCode;
//!
//! let code: GaussCode = "A: 1- 2+\nB: 1+ 2-".parse().unwrap();
//! assert_eq!(code.curve_count(), 2);
//! assert_eq!(code.occurrence_count(), 4);
//! assert!(code.validate().is_ok());
//! assert_eq!(code.to_string(), "A: 1- 2+\nB: 1+ 2-");
//! ```

use crate::code::{CurveWord, Segment, Sign, Symbol};
use crate::error::{CodeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

/// A labelled curve and its word.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Curve {
    pub label: String,
    pub word: CurveWord,
}

/// Ordered list of curves. Insertion order is the curve enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GaussCode {
    curves: Vec<Curve>,
}

impl GaussCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a code from `(label, word)` pairs.
    pub fn from_curves<I, S>(curves: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, CurveWord)>,
        S: Into<String>,
    {
        let mut code = Self::new();
        for (label, word) in curves {
            code.push_curve(label, word)?;
        }
        Ok(code)
    }

    pub fn push_curve(&mut self, label: impl Into<String>, word: CurveWord) -> Result<()> {
        let label = label.into();
        if self.curve(&label).is_some() {
            return Err(CodeError::DuplicateCurve(label));
        }
        self.curves.push(Curve { label, word });
        Ok(())
    }

    pub fn remove_curve(&mut self, label: &str) -> Result<Curve> {
        let index = self
            .curves
            .iter()
            .position(|c| c.label == label)
            .ok_or_else(|| CodeError::UnknownCurve(label.to_string()))?;
        Ok(self.curves.remove(index))
    }

    pub fn set_word(&mut self, label: &str, word: CurveWord) -> Result<()> {
        let curve = self
            .curves
            .iter_mut()
            .find(|c| c.label == label)
            .ok_or_else(|| CodeError::UnknownCurve(label.to_string()))?;
        curve.word = word;
        Ok(())
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    pub fn curve(&self, label: &str) -> Option<&Curve> {
        self.curves.iter().find(|c| c.label == label)
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.curves.iter().map(|c| c.label.as_str())
    }

    /// Total number of symbol occurrences over all words.
    pub fn occurrence_count(&self) -> usize {
        self.curves.iter().map(|c| c.word.len()).sum()
    }

    /// One curve with one symbol and no crossings.
    pub fn is_simple_loop(&self) -> bool {
        self.curves.len() == 1 && self.curves[0].word.len() == 1
    }

    /// Check that every label occurs exactly once with each sign.
    ///
    /// The crossing-free single curve is accepted.
    pub fn validate(&self) -> Result<()> {
        if let Some(curve) = self.curves.iter().find(|c| c.word.is_empty()) {
            return Err(CodeError::EmptyWord(curve.label.clone()));
        }
        if self.is_simple_loop() {
            return Ok(());
        }
        let mut counts: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for symbol in self.curves.iter().flat_map(|c| c.word.iter()) {
            let entry = counts.entry(symbol.label()).or_default();
            match symbol.sign() {
                Sign::Plus => entry.0 += 1,
                Sign::Minus => entry.1 += 1,
            }
        }
        match counts.into_iter().find(|(_, counts)| *counts != (1, 1)) {
            Some((label, (positive, negative))) => Err(CodeError::Malformed {
                label: label.to_string(),
                positive,
                negative,
            }),
            None => Ok(()),
        }
    }

    /// All directed segments, in curve order then position order, `+`
    /// before `-`.
    pub fn segments(&self) -> Vec<Segment> {
        self.curves.iter().flat_map(|c| c.word.segments()).collect()
    }

    /// Largest symbol label, read as an integer.
    pub fn max_symbol_label(&self) -> Result<u64> {
        let mut max = 0;
        for symbol in self.curves.iter().flat_map(|c| c.word.iter()) {
            let value: u64 = symbol
                .label()
                .parse()
                .map_err(|_| CodeError::NonNumericLabel(symbol.label().to_string()))?;
            max = max.max(value);
        }
        Ok(max)
    }

    /// The same code with every symbol label passed through `f`.
    pub fn map_symbol_labels(&self, mut f: impl FnMut(&str) -> String) -> GaussCode {
        GaussCode {
            curves: self
                .curves
                .iter()
                .map(|c| Curve {
                    label: c.label.clone(),
                    word: c.word.map_labels(&mut f),
                })
                .collect(),
        }
    }

    /// The same code with curve labels renamed by `f`.
    pub fn map_curve_labels(&self, mut f: impl FnMut(&str) -> String) -> Result<GaussCode> {
        GaussCode::from_curves(self.curves.iter().map(|c| (f(&c.label), c.word.clone())))
    }

    /// Groups of curves that share no crossing with any curve outside their
    /// group. A code with more than one group draws a disconnected diagram.
    pub fn connected_curve_groups(&self) -> Vec<Vec<String>> {
        let mut owner: HashMap<&str, usize> = HashMap::new();
        let mut parent: Vec<usize> = (0..self.curves.len()).collect();

        fn find(parent: &mut [usize], mut i: usize) -> usize {
            while parent[i] != i {
                parent[i] = parent[parent[i]];
                i = parent[i];
            }
            i
        }

        for (i, curve) in self.curves.iter().enumerate() {
            for symbol in curve.word.iter() {
                match owner.get(symbol.label()) {
                    Some(&j) => {
                        let (a, b) = (find(&mut parent, i), find(&mut parent, j));
                        if a != b {
                            parent[a.max(b)] = a.min(b);
                        }
                    }
                    None => {
                        owner.insert(symbol.label(), i);
                    }
                }
            }
        }

        let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for i in 0..self.curves.len() {
            let root = find(&mut parent, i);
            groups
                .entry(root)
                .or_default()
                .push(self.curves[i].label.clone());
        }
        groups.into_values().collect()
    }

    /// Distinct symbol labels in first-seen order.
    pub fn symbol_labels(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        self.curves
            .iter()
            .flat_map(|c| c.word.iter())
            .filter(|s| seen.insert(s.label().to_string()))
            .map(|s| s.label().to_string())
            .collect()
    }
}

impl FromStr for GaussCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut code = GaussCode::new();
        for (i, line) in s.lines().enumerate() {
            let line_no = i + 1;
            if line.trim().is_empty() {
                continue;
            }
            let (label, rest) = line
                .split_once(':')
                .ok_or_else(|| CodeError::format(line_no, "Unparseable line"))?;
            let label = label.trim();
            if label.is_empty() || rest.trim().is_empty() {
                return Err(CodeError::format(line_no, "Unparseable line"));
            }
            let symbols = rest
                .split_whitespace()
                .map(|tok| tok.parse::<Symbol>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| CodeError::format(line_no, e.0))?;
            code.push_curve(label, CurveWord::new(symbols))
                .map_err(|_| CodeError::format(line_no, "Duplicate curve"))?;
        }
        Ok(code)
    }
}

impl fmt::Display for GaussCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, curve) in self.curves.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", curve.label, curve.word)?;
        }
        Ok(())
    }
}
