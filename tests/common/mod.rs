// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use euler_codes::code::{Face, GaussCode};
use euler_codes::zones::{Zone, ZoneSet};

/// Two crossing circles.
pub const VENN2: &str = "A: 1- 2+\nB: 1+ 2-";
pub const VENN2_OUTER: &str = "{(1- 2+,-),(2- 1+,-)}";

/// Three mutually crossing circles, each bounding face a triangle.
pub const VENN3: &str = "A: 1- 3- 2+ 4+\nB: 5- 2- 6+ 1+\nC: 4- 6- 3+ 5+";
pub const VENN3_OUTER: &str = "{(4+ 1-,+),(1+ 5-,+),(5+ 4-,+)}";

/// One curve crossing itself once.
pub const FIGURE_EIGHT: &str = "A: 1+ 1-";
pub const FIGURE_EIGHT_OUTER: &str = "{(1+ 1-,-),(1- 1+,+)}";

/// A signed word with no planar drawing.
pub const NON_PLANAR: &str = "A: 1+ 2+ 1- 2-";

pub const SIMPLE_LOOP: &str = "A: 1+";
pub const SIMPLE_LOOP_OUTER: &str = "{(1+ 1+,+)}";

pub fn code(text: &str) -> GaussCode {
    text.parse().unwrap()
}

pub fn face(text: &str) -> Face {
    text.parse().unwrap()
}

pub fn zones(text: &str) -> ZoneSet {
    text.parse().unwrap()
}

pub fn zone(text: &str) -> Zone {
    text.parse().unwrap()
}
