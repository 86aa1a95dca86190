// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Planarity check by Euler's formula.

use crate::code::{GaussCode, RegionCode};
use crate::error::{CodeError, Result};
use crate::faces::FaceTracing;
use tracing::debug;

/// `V - E + F` for the traced faces of `code`.
///
/// `V` is half the symbol occurrences, `E` the occurrences. The
/// crossing-free single curve counts its symbol as one vertex.
pub fn euler_characteristic(code: &GaussCode) -> Result<i64> {
    let tracing = FaceTracing::trace(code)?;
    Ok(characteristic_of(code, &tracing))
}

pub(crate) fn characteristic_of(code: &GaussCode, tracing: &FaceTracing) -> i64 {
    let occurrences = code.occurrence_count() as i64;
    let vertices = if code.is_simple_loop() {
        1
    } else {
        occurrences / 2
    };
    vertices - occurrences + tracing.face_count() as i64
}

/// Fails unless the curves form one crossing-connected group with
/// `V - E + F == 2`.
///
/// The connectivity check comes first: a planar group beside a non-planar
/// one can still sum to 2.
pub(crate) fn check_planar(code: &GaussCode, tracing: &FaceTracing) -> Result<()> {
    let groups = code.connected_curve_groups().len();
    if groups > 1 {
        return Err(CodeError::Disconnected { groups });
    }
    let characteristic = characteristic_of(code, tracing);
    if characteristic != 2 {
        return Err(CodeError::NonPlanar { characteristic });
    }
    Ok(())
}

/// True if the Gauss code describes a connected planar curve arrangement.
///
/// Never fails; malformed and disconnected codes are not planar. The
/// crossing-free single curve `A: 1+` is planar here: its symbol counts as
/// one vertex, giving `1 - 1 + 2 = 2`, where a plain `occurrences / 2`
/// count would give 1.
pub fn is_planar(code: &GaussCode) -> bool {
    match require_planar(code) {
        Ok(_) => true,
        Err(err) => {
            debug!(%err, "not planar");
            false
        }
    }
}

/// The faces of `code`, or [`CodeError::NonPlanar`] if Euler's formula
/// fails, or [`CodeError::Disconnected`] if some curves never cross the
/// others.
pub fn require_planar(code: &GaussCode) -> Result<RegionCode> {
    let tracing = FaceTracing::trace(code)?;
    check_planar(code, &tracing)?;
    Ok(tracing.region_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venn_two_is_planar() {
        let code: GaussCode = "A: 1- 2+\nB: 1+ 2-".parse().unwrap();
        assert_eq!(euler_characteristic(&code), Ok(2));
        assert!(is_planar(&code));
    }

    #[test]
    fn test_simple_loop_is_planar() {
        let code: GaussCode = "A: 1+".parse().unwrap();
        assert!(is_planar(&code));
    }

    #[test]
    fn test_tangent_loops_are_not_planar() {
        let code: GaussCode = "A: 1+\nB: 1-".parse().unwrap();
        assert_eq!(euler_characteristic(&code), Ok(0));
        assert_eq!(
            require_planar(&code),
            Err(CodeError::NonPlanar { characteristic: 0 })
        );
    }

    #[test]
    fn test_malformed_is_not_planar() {
        let code: GaussCode = "A: 1+ 2+".parse().unwrap();
        assert!(!is_planar(&code));
    }

    #[test]
    fn test_disconnected_groups_rejected() {
        // A planar pair of circles beside a non-planar curve: 2 + 0 = 2.
        let code: GaussCode = "A: 1- 2+\nB: 1+ 2-\nC: 3+ 4+ 3- 4-".parse().unwrap();
        assert_eq!(euler_characteristic(&code), Ok(2));
        assert!(!is_planar(&code));
        assert_eq!(
            require_planar(&code),
            Err(CodeError::Disconnected { groups: 2 })
        );
    }
}
