//! Drop-target resolution.
//!
//! Resolution runs in two tiers. Regions containing the pointer win, the
//! smallest first, with task slots preferred over columns of equal area.
//! Otherwise the region whose centre is nearest the dragged element's centre
//! is chosen. Ties in either tier go to the region seen first.

use super::{Point, Rect, Region, RegionSnapshot};

/// Which tier produced a collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionTier {
    /// The pointer lies inside the region.
    Containment,
    /// No region contains the pointer; the nearest centre was used.
    NearestCenter,
}

/// A resolved drop region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision<'a> {
    /// The winning region.
    pub region: &'a Region,
    /// The tier that selected it.
    pub tier: CollisionTier,
}

/// Resolves the best drop region for the current drag geometry.
///
/// Returns `None` when the snapshot has no regions or when the pointer lies
/// outside the snapshot's board bounds.
#[must_use]
pub fn resolve(snapshot: &RegionSnapshot, pointer: Point, dragged: Rect) -> Option<Collision<'_>> {
    if snapshot
        .board_bounds()
        .is_some_and(|bounds| !bounds.contains(pointer))
    {
        return None;
    }

    let contained = snapshot
        .regions()
        .iter()
        .filter(|region| region.bounds().contains(pointer))
        .min_by_key(|region| (region.bounds().area(), region.target().is_column()));
    if let Some(region) = contained {
        return Some(Collision {
            region,
            tier: CollisionTier::Containment,
        });
    }

    snapshot
        .regions()
        .iter()
        .min_by_key(|region| region.bounds().center_distance_sq(&dragged))
        .map(|region| Collision {
            region,
            tier: CollisionTier::NearestCenter,
        })
}
