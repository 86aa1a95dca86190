// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutations, rotations and reversals of words and labels.

use crate::code::GaussCode;
use crate::error::Result;

/// The `i`th canonical curve label: `A`..`Z`, then `a`..`z`, then `Z52`,
/// `Z53`, ...
pub fn canonical_label(i: usize) -> String {
    match i {
        0..=25 => char::from(b'A' + i as u8).to_string(),
        26..=51 => char::from(b'a' + (i - 26) as u8).to_string(),
        _ => format!("Z{}", i),
    }
}

/// All permutations of `0..n` by Heap's algorithm.
///
/// Each permutation differs from the previous one by a single swap. The
/// identity comes first.
///
/// # Examples
///
/// ```
/// use euler_codes::canonical::HeapPermutations;
///
/// let perms: Vec<Vec<usize>> = HeapPermutations::new(3).collect();
/// assert_eq!(perms.len(), 6);
/// assert_eq!(perms[0], vec![0, 1, 2]);
/// assert_eq!(perms[1], vec![1, 0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct HeapPermutations {
    current: Vec<usize>,
    counters: Vec<usize>,
    i: usize,
    started: bool,
}

impl HeapPermutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            counters: vec![0; n],
            i: 1,
            started: false,
        }
    }
}

impl Iterator for HeapPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.current.clone());
        }
        while self.i < self.current.len() {
            let i = self.i;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.current.swap(0, i);
                } else {
                    self.current.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.i = 1;
                return Some(self.current.clone());
            }
            self.counters[i] = 0;
            self.i += 1;
        }
        None
    }
}

/// All `n - 1` non-trivial rotations of `word`; rotation `i` starts at
/// position `i`.
pub fn cyclic_shifts<T: Clone>(word: &[T]) -> Vec<Vec<T>> {
    let n = word.len();
    (1..n)
        .map(|i| (0..n).map(|j| word[(i + j) % n].clone()).collect())
        .collect()
}

pub fn reverse<T: Clone>(word: &[T]) -> Vec<T> {
    word.iter().rev().cloned().collect()
}

/// True if `b` equals `a`, a rotation of `a`, or a rotation of `a` reversed.
pub fn equivalent_words<T: Clone + PartialEq>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a == b {
        return true;
    }
    let reversed = reverse(a);
    reversed == b
        || cyclic_shifts(a).iter().any(|w| w == b)
        || cyclic_shifts(&reversed).iter().any(|w| w == b)
}

/// Every ordering of the curves of `code`, identity first.
pub fn permute_curve_order(code: &GaussCode) -> Result<Vec<GaussCode>> {
    let curves = code.curves();
    HeapPermutations::new(curves.len())
        .map(|perm| {
            GaussCode::from_curves(
                perm.iter()
                    .map(|&i| (curves[i].label.clone(), curves[i].word.clone())),
            )
        })
        .collect()
}

/// Every arrangement of the first `n` canonical labels, identity first.
pub fn permute_curve_labels(n: usize) -> Vec<Vec<String>> {
    HeapPermutations::new(n)
        .map(|perm| perm.into_iter().map(canonical_label).collect())
        .collect()
}
