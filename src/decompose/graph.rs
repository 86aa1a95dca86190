// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Undirected graphs with biconnected components and cut vertices.

use std::collections::BTreeSet;

/// Simple undirected graph on vertices `0..n`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    adjacency: Vec<BTreeSet<usize>>,
}

/// Result of [`UndirectedGraph::biconnected`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Biconnected {
    /// Vertex sets of the biconnected components, in discovery order: a
    /// component comes after the one holding its root-side cut vertex.
    pub components: Vec<BTreeSet<usize>>,
    pub cut_vertices: BTreeSet<usize>,
}

struct DepthFirst<'a> {
    graph: &'a UndirectedGraph,
    discovered: Vec<Option<usize>>,
    low: Vec<usize>,
    time: usize,
    edges: Vec<(usize, usize)>,
    result: Biconnected,
}

impl DepthFirst<'_> {
    fn visit(&mut self, u: usize, parent: Option<usize>) {
        self.discovered[u] = Some(self.time);
        self.low[u] = self.time;
        self.time += 1;
        let mut children = 0;

        let graph = self.graph;
        for &v in &graph.adjacency[u] {
            let seen = self.discovered[v];
            match seen {
                None => {
                    children += 1;
                    self.edges.push((u, v));
                    self.visit(v, Some(u));
                    self.low[u] = self.low[u].min(self.low[v]);
                    let disc_u = self.time_of(u);
                    if self.low[v] >= disc_u {
                        if parent.is_some() || children > 1 {
                            self.result.cut_vertices.insert(u);
                        }
                        self.pop_component(u, v);
                    }
                }
                Some(disc_v) if Some(v) != parent && disc_v < self.time_of(u) => {
                    self.edges.push((u, v));
                    self.low[u] = self.low[u].min(disc_v);
                }
                Some(_) => {}
            }
        }
    }

    fn time_of(&self, v: usize) -> usize {
        self.discovered[v].unwrap_or(usize::MAX)
    }

    fn pop_component(&mut self, u: usize, v: usize) {
        let mut component = BTreeSet::new();
        while let Some((a, b)) = self.edges.pop() {
            component.insert(a);
            component.insert(b);
            if (a, b) == (u, v) {
                break;
            }
        }
        self.result.components.push(component);
    }
}

impl UndirectedGraph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Add the edge `a - b`. Self loops are ignored.
    pub fn add_edge(&mut self, a: usize, b: usize) {
        if a != b {
            self.adjacency[a].insert(b);
            self.adjacency[b].insert(a);
        }
    }

    /// Biconnected components and cut vertices (Hopcroft-Tarjan).
    ///
    /// An isolated vertex forms a component on its own.
    pub fn biconnected(&self) -> Biconnected {
        let n = self.vertex_count();
        let mut search = DepthFirst {
            graph: self,
            discovered: vec![None; n],
            low: vec![0; n],
            time: 0,
            edges: Vec::new(),
            result: Biconnected::default(),
        };
        for root in 0..n {
            if search.discovered[root].is_none() {
                if self.adjacency[root].is_empty() {
                    search.discovered[root] = Some(search.time);
                    search.time += 1;
                    search.result.components.push(BTreeSet::from([root]));
                } else {
                    search.visit(root, None);
                }
            }
        }

        let discovered = search.discovered;
        let mut result = search.result;
        result.components.sort_by_cached_key(|component| {
            let mut times: Vec<usize> = component
                .iter()
                .map(|&v| discovered[v].unwrap_or(usize::MAX))
                .collect();
            times.sort_unstable();
            times
        });
        result
    }
}
