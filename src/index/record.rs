// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Diagram records stored in the index.
//!
//! The text form of a record is three parts on consecutive lines:
//!
//! ```text
//! -1,A-1,B-1,AB-1
//! {(1- 2+,-),(2- 1+,-)}
//! A: 1- 2+
//! B: 1+ 2-
//! ```
//!
//! The header lists `<zone>-<count>` for each zone, empty zone first, then
//! come the outer face and the Gauss code.

use crate::canonical::canonical_label;
use crate::code::{Face, GaussCode};
use crate::error::{CodeError, Result};
use crate::zones::{region_counts, Zone, ZoneSet};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A diagram with its outer face and the number of faces in each zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramRecord {
    code: GaussCode,
    outer: Face,
    region_counts: BTreeMap<Zone, usize>,
}

impl DiagramRecord {
    pub fn new(code: GaussCode, outer: Face, region_counts: BTreeMap<Zone, usize>) -> Self {
        Self {
            code,
            outer,
            region_counts,
        }
    }

    /// Record for `code` drawn with `outer` as the unbounded face.
    pub fn from_diagram(code: GaussCode, outer: Face) -> Result<Self> {
        let region_counts = region_counts(&code, &outer)?;
        Ok(Self::new(code, outer, region_counts))
    }

    pub fn code(&self) -> &GaussCode {
        &self.code
    }

    pub fn outer(&self) -> &Face {
        &self.outer
    }

    pub fn region_counts(&self) -> &BTreeMap<Zone, usize> {
        &self.region_counts
    }

    /// The non-empty zones, in zone order.
    pub fn zones(&self) -> ZoneSet {
        self.region_counts
            .keys()
            .filter(|z| !z.is_empty())
            .cloned()
            .collect()
    }

    pub fn curve_count(&self) -> usize {
        self.code.curve_count()
    }

    pub fn max_symbol_label(&self) -> Result<u64> {
        self.code.max_symbol_label()
    }

    /// Rename curves by `map`; curves the map does not mention keep their
    /// label, or get a fresh one if that label is taken by the map.
    pub fn rename_curves(&self, map: &BTreeMap<String, String>) -> Result<Self> {
        let mut taken: BTreeSet<String> = map.values().cloned().collect();
        let mut full = BTreeMap::new();
        for label in self.code.labels() {
            let renamed = match map.get(label) {
                Some(renamed) => renamed.clone(),
                None => {
                    let fresh = if taken.contains(label) {
                        (0..)
                            .map(canonical_label)
                            .find(|l| !taken.contains(l))
                            .unwrap_or_else(|| label.to_string())
                    } else {
                        label.to_string()
                    };
                    taken.insert(fresh.clone());
                    fresh
                }
            };
            full.insert(label.to_string(), renamed);
        }
        let code = self
            .code
            .map_curve_labels(|l| full.get(l).cloned().unwrap_or_else(|| l.to_string()))?;
        let region_counts = self
            .region_counts
            .iter()
            .map(|(zone, &count)| (zone.relabel(&full), count))
            .collect();
        Ok(Self::new(code, self.outer.clone(), region_counts))
    }
}

impl fmt::Display for DiagramRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (zone, count)) in self.region_counts.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}-{}", zone.label_string(), count)?;
        }
        write!(f, "\n{}\n{}", self.outer, self.code)
    }
}

impl FromStr for DiagramRecord {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim_matches('\n').splitn(3, '\n');
        let (Some(header), Some(outer), Some(code)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(CodeError::format(1, "Incomplete record"));
        };
        let mut region_counts = BTreeMap::new();
        for entry in header.split(',') {
            let (zone, count) = entry
                .rsplit_once('-')
                .ok_or_else(|| CodeError::format(1, "Unparseable zone count"))?;
            let count: usize = count
                .trim()
                .parse()
                .map_err(|_| CodeError::format(1, "Unparseable zone count"))?;
            region_counts.insert(Zone::from_label_string(zone.trim()), count);
        }
        let outer = Face::parse_line(outer, 2)?;
        let code = code.parse::<GaussCode>().map_err(|e| match e {
            CodeError::Format { line, message } => CodeError::Format {
                line: line + 2,
                message,
            },
            other => other,
        })?;
        Ok(Self::new(code, outer, region_counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VENN2: &str = "-1,A-1,B-1,AB-1\n{(1- 2+,-),(2- 1+,-)}\nA: 1- 2+\nB: 1+ 2-";

    #[test]
    fn test_text_round_trip() {
        let record: DiagramRecord = VENN2.parse().unwrap();
        assert_eq!(record.curve_count(), 2);
        assert_eq!(record.zones().to_string(), "A,B,AB");
        assert_eq!(record.to_string(), VENN2);
    }

    #[test]
    fn test_from_diagram_matches_text() {
        let code: GaussCode = "A: 1- 2+\nB: 1+ 2-".parse().unwrap();
        let outer: Face = "{(1- 2+,-),(2- 1+,-)}".parse().unwrap();
        let record = DiagramRecord::from_diagram(code, outer).unwrap();
        assert_eq!(record, VENN2.parse().unwrap());
    }

    #[test]
    fn test_rename_with_fresh_labels() {
        let record: DiagramRecord = VENN2.parse().unwrap();
        let map = BTreeMap::from([("B".to_string(), "A".to_string())]);
        let renamed = record.rename_curves(&map).unwrap();
        let labels: Vec<&str> = renamed.code().labels().collect();
        assert_eq!(labels, vec!["B", "A"]);
        assert_eq!(renamed.zones().to_string(), "A,B,AB");
        assert_eq!(renamed.region_counts()[&Zone::from_label_string("B")], 1);
    }

    #[test]
    fn test_bad_header() {
        let text = "-1,Ax\n{(1+ 1+,+)}\nA: 1+";
        assert_eq!(
            text.parse::<DiagramRecord>(),
            Err(CodeError::format(1, "Unparseable zone count"))
        );
    }
}
