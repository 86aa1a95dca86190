// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trie of diagram records keyed by their sorted zones.
//!
//! The path from the root spells out a sorted list of zones; the node at the
//! end holds every record with exactly those zones. Siblings are kept in zone
//! order so a superset search can stop scanning at the next required zone.
//!
//! # Examples
//!
//! ```
//! use euler_codes::index::{DiagramIndex, DiagramRecord, Insertion};
//!
//! let record: DiagramRecord = "-1,A-1\n{(1+ 1+,+)}\nA: 1+".parse().unwrap();
//! let zones = record.zones().to_vec();
//! let mut index = DiagramIndex::new();
//! assert_eq!(index.insert(&zones, record.clone()), Insertion::Inserted);
//! assert_eq!(index.insert(&zones, record), Insertion::Duplicate);
//! assert_eq!(index.lookup_exact(&zones).len(), 1);
//! ```

use crate::index::DiagramRecord;
use crate::zones::Zone;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound;

/// Outcome of inserting a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Inserted,
    /// An identical record was already stored under the same key.
    Duplicate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct TrieNode {
    children: BTreeMap<Zone, TrieNode>,
    records: Vec<DiagramRecord>,
}

impl TrieNode {
    fn count(&self) -> usize {
        self.records.len() + self.children.values().map(TrieNode::count).sum::<usize>()
    }

    fn collect_all<'a>(&'a self, out: &mut Vec<&'a DiagramRecord>) {
        out.extend(&self.records);
        for child in self.children.values() {
            child.collect_all(out);
        }
    }

    fn collect_supersets<'a>(
        &'a self,
        required: &[Zone],
        max_label: &str,
        out: &mut Vec<&'a DiagramRecord>,
    ) {
        let upper = match required.first() {
            None => {
                out.extend(&self.records);
                Bound::Unbounded
            }
            Some(next) => Bound::Included(next),
        };
        for (key, child) in self.children.range((Bound::Unbounded, upper)) {
            if key.max_label().is_some_and(|l| l > max_label) {
                continue;
            }
            let rest = match required.first() {
                Some(next) if next == key => &required[1..],
                _ => required,
            };
            child.collect_supersets(rest, max_label, out);
        }
    }
}

/// Trie index of diagram records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramIndex {
    root: TrieNode,
}

impl DiagramIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under the sorted `zones`.
    pub fn insert(&mut self, zones: &[Zone], record: DiagramRecord) -> Insertion {
        let mut node = &mut self.root;
        for zone in zones {
            node = node.children.entry(zone.clone()).or_default();
        }
        if node.records.contains(&record) {
            Insertion::Duplicate
        } else {
            node.records.push(record);
            Insertion::Inserted
        }
    }

    /// Records whose zones are exactly `zones` (sorted).
    pub fn lookup_exact(&self, zones: &[Zone]) -> &[DiagramRecord] {
        let mut node = &self.root;
        for zone in zones {
            match node.children.get(zone) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.records
    }

    /// Records whose zones include all of `zones` (sorted) and use no curve
    /// label beyond `max_label`.
    pub fn lookup_supersets(&self, zones: &[Zone], max_label: &str) -> Vec<&DiagramRecord> {
        let mut out = Vec::new();
        self.root.collect_supersets(zones, max_label, &mut out);
        out
    }

    /// Every stored record, depth first in key order.
    pub fn records(&self) -> Vec<&DiagramRecord> {
        let mut out = Vec::new();
        self.root.collect_all(&mut out);
        out
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::ZoneSet;

    fn record(text: &str) -> DiagramRecord {
        text.parse().unwrap()
    }

    fn key(zones: &str) -> Vec<Zone> {
        zones.parse::<ZoneSet>().unwrap().to_vec()
    }

    fn sample_index() -> DiagramIndex {
        let mut index = DiagramIndex::new();
        let one = record("-1,A-1\n{(1+ 1+,+)}\nA: 1+");
        let venn = record("-1,A-1,B-1,AB-1\n{(1- 2+,-),(2- 1+,-)}\nA: 1- 2+\nB: 1+ 2-");
        let nested = record("-1,A-1,AB-1\n{(1+ 1+,+)}\nA: 1+");
        index.insert(&key("A"), one);
        index.insert(&key("A,B,AB"), venn);
        index.insert(&key("A,AB"), nested);
        index
    }

    #[test]
    fn test_exact_lookup() {
        let index = sample_index();
        assert_eq!(index.len(), 3);
        assert_eq!(index.lookup_exact(&key("A,B,AB")).len(), 1);
        assert!(index.lookup_exact(&key("A,B")).is_empty());
        assert!(index.lookup_exact(&key("C")).is_empty());
    }

    #[test]
    fn test_superset_lookup() {
        let index = sample_index();
        assert_eq!(index.lookup_supersets(&key("A"), "B").len(), 3);
        assert_eq!(index.lookup_supersets(&key("AB"), "B").len(), 2);
        assert_eq!(index.lookup_supersets(&key("B,AB"), "B").len(), 1);
        assert_eq!(index.lookup_supersets(&key("A"), "A").len(), 1);
        assert_eq!(index.lookup_supersets(&[], "Z").len(), 3);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut index = sample_index();
        let venn = record("-1,A-1,B-1,AB-1\n{(1- 2+,-),(2- 1+,-)}\nA: 1- 2+\nB: 1+ 2-");
        assert_eq!(index.insert(&key("A,B,AB"), venn), Insertion::Duplicate);
        assert_eq!(index.len(), 3);
    }
}
