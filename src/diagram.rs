// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A mutable diagram with memoized faces and zones.
//!
//! Every edit bumps the diagram's version. Cached faces and zones remember
//! the version they were computed for and are recomputed when it is stale.
//!
//! # Examples
//!
//! ```
//! use euler_codes::diagram::Diagram;
//!
//! let mut diagram = Diagram::new("A: 1+".parse().unwrap());
//! let faces = diagram.region_boundary_code().unwrap();
//! let zones = diagram.zones(&faces.faces()[0]).unwrap();
//! assert_eq!(zones.len(), 2);
//!
//! diagram.remove_curve("A").unwrap();
//! assert!(diagram.region_boundary_code().is_err());
//! ```

use crate::code::{Curve, CurveWord, Face, GaussCode, RegionCode};
use crate::error::Result;
use crate::faces::{check_planar, FaceTracing};
use crate::zones::{ZoneEngine, ZoneMap};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::trace;

#[derive(Debug)]
pub struct Diagram {
    code: GaussCode,
    version: u64,
    /// (version, faces)
    faces: RefCell<Option<(u64, Rc<FaceTracing>)>>,
    /// (version, outer face, zones)
    zones: RefCell<Option<(u64, Face, ZoneMap)>>,
}

impl Diagram {
    /// Wrap a Gauss code. The code is checked when faces are first asked for.
    pub fn new(code: GaussCode) -> Self {
        Self {
            code,
            version: 1,
            faces: RefCell::new(None),
            zones: RefCell::new(None),
        }
    }

    pub fn gauss_code(&self) -> &GaussCode {
        &self.code
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Drop every cached result.
    pub fn invalidate(&mut self) {
        self.touch();
        self.faces.borrow_mut().take();
        self.zones.borrow_mut().take();
    }

    pub fn add_curve(&mut self, label: impl Into<String>, word: CurveWord) -> Result<()> {
        self.code.push_curve(label, word)?;
        self.touch();
        Ok(())
    }

    pub fn set_curve_word(&mut self, label: &str, word: CurveWord) -> Result<()> {
        self.code.set_word(label, word)?;
        self.touch();
        Ok(())
    }

    pub fn remove_curve(&mut self, label: &str) -> Result<Curve> {
        let curve = self.code.remove_curve(label)?;
        self.touch();
        Ok(curve)
    }

    fn tracing(&self) -> Result<Rc<FaceTracing>> {
        if let Some((version, tracing)) = self.faces.borrow().as_ref() {
            if *version == self.version {
                return Ok(Rc::clone(tracing));
            }
        }
        trace!(version = self.version, "tracing faces");
        let tracing = Rc::new(FaceTracing::trace(&self.code)?);
        check_planar(&self.code, &tracing)?;
        *self.faces.borrow_mut() = Some((self.version, Rc::clone(&tracing)));
        Ok(tracing)
    }

    /// The faces of the diagram; fails if the code is malformed, disconnected
    /// or not planar.
    pub fn region_boundary_code(&self) -> Result<RegionCode> {
        Ok(self.tracing()?.region_code())
    }

    /// Zones with `outer` as the unbounded face.
    pub fn zones(&self, outer: &Face) -> Result<ZoneMap> {
        if let Some((version, cached_outer, zones)) = self.zones.borrow().as_ref() {
            if *version == self.version && cached_outer.same_face(outer) {
                return Ok(zones.clone());
            }
        }
        let tracing = self.tracing()?;
        let zones = ZoneEngine::new(&self.code, &tracing, outer)?.zone_map()?;
        *self.zones.borrow_mut() = Some((self.version, outer.clone(), zones.clone()));
        Ok(zones)
    }
}

impl From<GaussCode> for Diagram {
    fn from(code: GaussCode) -> Self {
        Self::new(code)
    }
}
