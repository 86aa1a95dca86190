// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Zones, segment orientation and zone computation.

mod engine;
mod orientation;
mod zone;

pub use engine::{
    clockwise_segments, compute_zones, face_zones, region_counts, zone_set, ZoneEngine, ZoneMap,
};
pub use orientation::Orientation;
pub use zone::{Zone, ZoneSet};
