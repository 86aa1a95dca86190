// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Zones: the set of curves containing a region.
//!
//! Zones are ordered by their label string (the sorted labels concatenated):
//! shorter strings first, then lexicographically. This order drives the
//! canonical form and the diagram index.
//!
//! # Examples
//!
//! ```
//! use euler_codes::zones::{Zone, ZoneSet};
//!
//! let zones: ZoneSet = "AB,B,0,A".parse().unwrap();
//! let order: Vec<String> = zones.iter().map(|z| z.label_string()).collect();
//! assert_eq!(order, vec!["", "A", "B", "AB"]);
//! assert!(Zone::from_labels(["A", "B"]).is_superset(&Zone::from_labels(["B"])));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Set of curve labels. The empty zone is outside every curve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone(BTreeSet<String>);

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

impl Zone {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// Split a label string into labels: one base character each, together
    /// with any combining marks that follow it.
    pub fn from_label_string(s: &str) -> Self {
        let mut labels = BTreeSet::new();
        let mut current = String::new();
        for c in s.chars() {
            if !current.is_empty() && !is_combining_mark(c) {
                labels.insert(std::mem::take(&mut current));
            }
            current.push(c);
        }
        if !current.is_empty() {
            labels.insert(current);
        }
        Self(labels)
    }

    /// Sorted labels concatenated; empty for the empty zone.
    pub fn label_string(&self) -> String {
        self.0.iter().map(String::as_str).collect()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains(label)
    }

    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        self.0.insert(label.into())
    }

    pub fn is_superset(&self, other: &Zone) -> bool {
        self.0.is_superset(&other.0)
    }

    pub fn difference(&self, other: &Zone) -> Zone {
        Zone(self.0.difference(&other.0).cloned().collect())
    }

    /// Largest label in label order.
    pub fn max_label(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The zones obtained by removing exactly one curve.
    pub fn minus_one(&self) -> Vec<Zone> {
        self.0
            .iter()
            .map(|label| {
                let mut z = self.0.clone();
                z.remove(label);
                Zone(z)
            })
            .collect()
    }

    /// Relabel through `map`; labels missing from the map are kept.
    pub fn relabel(&self, map: &BTreeMap<String, String>) -> Zone {
        Zone(
            self.0
                .iter()
                .map(|l| map.get(l).cloned().unwrap_or_else(|| l.clone()))
                .collect(),
        )
    }

    fn sort_key(&self) -> (usize, String) {
        let s = self.label_string();
        (s.chars().count(), s)
    }
}

impl Ord for Zone {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Zone {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `0` for the empty zone, otherwise the label string.
impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", self.label_string())
        }
    }
}

impl FromStr for Zone {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "0" {
            Ok(Zone::empty())
        } else {
            Ok(Zone::from_label_string(s))
        }
    }
}

/// Ordered set of zones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ZoneSet(BTreeSet<Zone>);

impl ZoneSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, zone: Zone) -> bool {
        self.0.insert(zone)
    }

    pub fn remove(&mut self, zone: &Zone) -> bool {
        self.0.remove(zone)
    }

    pub fn contains(&self, zone: &Zone) -> bool {
        self.0.contains(zone)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Zone> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distinct curve labels in first-seen order.
    pub fn labels(&self) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut labels = Vec::new();
        for label in self.0.iter().flat_map(|z| z.labels()) {
            if seen.insert(label) {
                labels.push(label.to_string());
            }
        }
        labels
    }

    /// The same zones without the empty zone.
    pub fn without_empty(&self) -> ZoneSet {
        self.0.iter().filter(|z| !z.is_empty()).cloned().collect()
    }

    pub fn relabel(&self, map: &BTreeMap<String, String>) -> ZoneSet {
        self.0.iter().map(|z| z.relabel(map)).collect()
    }

    /// The zones in order, as a key for the diagram index.
    pub fn to_vec(&self) -> Vec<Zone> {
        self.0.iter().cloned().collect()
    }
}

impl FromIterator<Zone> for ZoneSet {
    fn from_iter<I: IntoIterator<Item = Zone>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ZoneSet {
    type Item = Zone;
    type IntoIter = std::collections::btree_set::IntoIter<Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ZoneSet {
    type Item = &'a Zone;
    type IntoIter = std::collections::btree_set::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ZoneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, zone) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", zone)?;
        }
        Ok(())
    }
}

/// Comma separated zones; `0` is the empty zone.
impl FromStr for ZoneSet {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| t.parse::<Zone>().unwrap_or_default())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_shorter_first() {
        let mut zones = vec![
            Zone::from_label_string("B"),
            Zone::from_label_string("AB"),
            Zone::from_label_string("C"),
            Zone::empty(),
            Zone::from_label_string("A"),
        ];
        zones.sort();
        let order: Vec<String> = zones.iter().map(|z| z.to_string()).collect();
        assert_eq!(order, vec!["0", "A", "B", "C", "AB"]);
    }

    #[test]
    fn test_combining_marks_stay_with_label() {
        let z = Zone::from_label_string("AB\u{0307}C");
        assert_eq!(z.len(), 3);
        assert!(z.contains("B\u{0307}"));
        assert_eq!(z.label_string(), "AB\u{0307}C");
    }

    #[test]
    fn test_minus_one() {
        let z = Zone::from_label_string("ABC");
        let minus: Vec<String> = z.minus_one().iter().map(|z| z.to_string()).collect();
        assert_eq!(minus, vec!["BC", "AC", "AB"]);
        assert!(Zone::empty().minus_one().is_empty());
    }

    #[test]
    fn test_labels_first_seen() {
        let zones: ZoneSet = "C,AC,B".parse().unwrap();
        assert_eq!(zones.labels(), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_relabel() {
        let map = BTreeMap::from([("A".to_string(), "C".to_string())]);
        let zones: ZoneSet = "A,AB".parse().unwrap();
        assert_eq!(zones.relabel(&map).to_string(), "C,BC");
    }
}
