// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Splitting a zone set into independently drawable sub-diagrams.
//!
//! The zones, plus the empty zone, form a graph in which each zone is
//! joined to the nearest existing zones obtained by removing curves. Each
//! biconnected component of this graph is a sub-diagram. A component whose
//! zones all contain one of its cut vertices is drawn inside that zone, and
//! its zones are re-expressed without the containing curves.

use crate::decompose::UndirectedGraph;
use crate::error::{CodeError, Result};
use crate::zones::{Zone, ZoneSet};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// First combining mark used to tell apart reused curve labels.
const FIRST_MARK: u32 = 0x0307;

/// One independently drawable part of a diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubDiagram {
    pub zones: ZoneSet,
    /// Zone of the enclosing diagram this part is drawn inside; empty at top
    /// level.
    pub within: Zone,
}

/// A reduced zone, with an index telling apart equal reductions.
type Entry = (Zone, usize);

fn zone_graph(vertices: &[Zone]) -> UndirectedGraph {
    let index: BTreeMap<&Zone, usize> = vertices.iter().enumerate().map(|(i, z)| (z, i)).collect();
    let mut graph = UndirectedGraph::new(vertices.len());
    for (i, zone) in vertices.iter().enumerate() {
        let mut frontier: BTreeSet<Zone> = zone.minus_one().into_iter().collect();
        while !frontier.is_empty() {
            let hits: Vec<usize> = frontier.iter().filter_map(|z| index.get(z).copied()).collect();
            if !hits.is_empty() {
                for j in hits {
                    graph.add_edge(i, j);
                }
                break;
            }
            frontier = frontier.iter().flat_map(Zone::minus_one).collect();
        }
    }
    graph
}

fn with_mark(label: &str, mark: u32) -> String {
    let mut chars = label.chars();
    let mut result: String = chars.next().into_iter().collect();
    if let Some(mark) = char::from_u32(mark) {
        result.push(mark);
    }
    result.extend(chars);
    result
}

/// Split `zones` into sub-diagrams.
///
/// Multi-curve parts come first, single-curve parts last. Curve labels used
/// by more than one part are made distinct by inserting a combining mark
/// after their first character.
///
/// # Examples
///
/// ```
/// use euler_codes::decompose::decompose;
/// use euler_codes::zones::{Zone, ZoneSet};
///
/// let zones: ZoneSet = "A,AB".parse().unwrap();
/// let parts = decompose(&zones).unwrap();
/// assert_eq!(parts.len(), 2);
/// assert_eq!(parts[1].zones.to_string(), "B");
/// assert_eq!(parts[1].within, Zone::from_label_string("A"));
/// ```
pub fn decompose(zones: &ZoneSet) -> Result<Vec<SubDiagram>> {
    let mut all = zones.clone();
    all.insert(Zone::empty());
    let vertices = all.to_vec();
    let empty = 0;
    debug_assert!(vertices[empty].is_empty());

    let biconnected = zone_graph(&vertices).biconnected();
    let components: Vec<&BTreeSet<usize>> = biconnected
        .components
        .iter()
        .filter(|c| c.len() > 1)
        .collect();

    let mut within: Vec<Option<usize>> = vec![None; components.len()];
    for &cut in &biconnected.cut_vertices {
        for (c, component) in components.iter().enumerate() {
            if component.contains(&cut)
                && component
                    .iter()
                    .all(|&v| vertices[v].is_superset(&vertices[cut]))
            {
                if within[c].is_some() {
                    return Err(CodeError::AmbiguousNesting(vertices[cut].to_string()));
                }
                within[c] = Some(cut);
            }
        }
    }

    let mut renamed: BTreeMap<usize, Entry> = BTreeMap::new();
    let mut used: BTreeSet<Entry> = BTreeSet::new();
    let mut parts: Vec<(Vec<Entry>, Entry)> = Vec::new();
    for (c, component) in components.iter().enumerate() {
        let w = within[c].unwrap_or(empty);
        let mut entries = Vec::new();
        for &v in component.iter().filter(|&&v| v != w) {
            let reduced = vertices[v].difference(&vertices[w]);
            let index = (0..)
                .find(|&i| !used.contains(&(reduced.clone(), i)))
                .unwrap_or_default();
            let entry = (reduced, index);
            used.insert(entry.clone());
            if renamed.insert(v, entry.clone()).is_some() {
                return Err(CodeError::AmbiguousNesting(vertices[v].to_string()));
            }
            entries.push(entry);
        }
        parts.push((entries, (Zone::empty(), w)));
    }

    for part in &mut parts {
        let w = part.1 .1;
        part.1 = if w == empty {
            (Zone::empty(), 0)
        } else {
            renamed
                .get(&w)
                .cloned()
                .ok_or_else(|| CodeError::AmbiguousNesting(vertices[w].to_string()))?
        };
    }

    let is_single_curve = |entries: &[Entry]| entries.len() == 1 && entries[0].0.len() == 1;
    let (multi, single): (Vec<_>, Vec<_>) = parts
        .into_iter()
        .partition(|(entries, _)| !is_single_curve(entries));

    let mut used_labels: BTreeSet<String> = BTreeSet::new();
    let mut relabelled: BTreeMap<Entry, Zone> = BTreeMap::new();
    let ordered: Vec<(Vec<Entry>, Entry)> = multi.into_iter().chain(single).collect();
    for (entries, _) in &ordered {
        let labels: BTreeSet<String> = entries
            .iter()
            .flat_map(|(z, _)| z.labels().map(str::to_string))
            .collect();
        let clashes: Vec<String> = labels.intersection(&used_labels).cloned().collect();
        used_labels.extend(labels);
        let mut map = BTreeMap::new();
        for label in clashes {
            let mut mark = FIRST_MARK;
            let mut candidate = with_mark(&label, mark);
            while used_labels.contains(&candidate) {
                mark += 1;
                candidate = with_mark(&label, mark);
            }
            used_labels.insert(candidate.clone());
            map.insert(label, candidate);
        }
        for entry in entries {
            relabelled.insert(entry.clone(), entry.0.relabel(&map));
        }
    }

    let result: Vec<SubDiagram> = ordered
        .into_iter()
        .map(|(entries, within)| SubDiagram {
            zones: entries.iter().map(|e| relabelled[e].clone()).collect(),
            within: relabelled.get(&within).cloned().unwrap_or_default(),
        })
        .collect();
    debug!(parts = result.len(), "decomposed zones");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zs(s: &str) -> ZoneSet {
        s.parse().unwrap()
    }

    fn describe(parts: &[SubDiagram]) -> Vec<String> {
        parts
            .iter()
            .map(|p| format!("{} in {}", p.zones, p.within))
            .collect()
    }

    #[test]
    fn test_disjoint_curves() {
        let parts = decompose(&zs("A,B")).unwrap();
        assert_eq!(describe(&parts), vec!["A in 0", "B in 0"]);
    }

    #[test]
    fn test_connected_diagram_is_one_part() {
        let parts = decompose(&zs("A,B,AB")).unwrap();
        assert_eq!(describe(&parts), vec!["A,B,AB in 0"]);
    }

    #[test]
    fn test_nested_parts_reduce_zones() {
        let parts = decompose(&zs("A,AB,AC,ABC")).unwrap();
        assert_eq!(describe(&parts), vec!["B,C,BC in A", "A in 0"]);
    }

    #[test]
    fn test_reused_labels_get_marks() {
        let parts = decompose(&zs("A,AB,C,BC")).unwrap();
        assert_eq!(
            describe(&parts),
            vec!["A in 0", "C in 0", "B in A", "B\u{0307} in C"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(decompose(&ZoneSet::new()).unwrap().is_empty());
    }
}
