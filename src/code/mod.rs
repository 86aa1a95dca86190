// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The code model: symbols, segments, curve words, Gauss codes, faces and
//! Euler codes, with their text forms.

mod euler;
mod gauss;
mod region;
mod segment;
mod symbol;
mod word;

pub use euler::{Component, EulerCode};
pub use gauss::{Curve, GaussCode};
pub use region::{Face, RegionCode};
pub use segment::{Direction, Segment};
pub use symbol::{Sign, Symbol, SymbolParseError};
pub use word::CurveWord;
