//! Static zone geometry, created once per run and immutable for its
//! duration.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::geometry::direction_or_x;
use crate::types::Position;

/// The detection tower: a no-fly core inside an outer detection fence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DetectionTower {
    pub center: Position,
    /// Radius of the physical no-fly core.
    pub core_radius: f64,
    /// Outer fence radius; drones inside it are detected.
    pub fence_radius: f64,
}

/// A circular zone the renderer draws as a pad (target or safe zone).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Zone {
    pub center: Position,
    /// Zone diameter; arrival counts at half this distance.
    pub size: f64,
}

/// Complete static geometry for a run: tower, target zone, safe zone,
/// and the two precomputed flanking detour points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZoneLayout {
    pub tower: DetectionTower,
    pub target: Zone,
    pub safe: Zone,
    /// Detour points just outside the tower core, left and right of the
    /// tower→safe axis.
    pub detour_points: [Position; 2],
}

impl ZoneLayout {
    /// Build a layout, precomputing the flanking detour points
    /// perpendicular to the tower→safe axis at core radius + clearance.
    pub fn new(tower: DetectionTower, target: Zone, safe: Zone) -> Self {
        let axis = direction_or_x(tower.center, safe.center);
        let perp = DVec2::new(-axis.y, axis.x);
        let reach = tower.core_radius + DETOUR_CLEARANCE;

        let detour_points = [
            Position::from_vec2(tower.center.vec2() + perp * reach),
            Position::from_vec2(tower.center.vec2() - perp * reach),
        ];

        Self {
            tower,
            target,
            safe,
            detour_points,
        }
    }

    /// The default demo layout: tower mid-stage, target on the east
    /// edge, safe zone in the southwest corner.
    pub fn standard() -> Self {
        Self::new(
            DetectionTower {
                center: Position::new(TOWER_X, TOWER_Y),
                core_radius: TOWER_CORE_RADIUS,
                fence_radius: TOWER_FENCE_RADIUS,
            },
            Zone {
                center: Position::new(TARGET_ZONE_X, TARGET_ZONE_Y),
                size: TARGET_ZONE_SIZE,
            },
            Zone {
                center: Position::new(SAFE_ZONE_X, SAFE_ZONE_Y),
                size: SAFE_ZONE_SIZE,
            },
        )
    }

    /// Distance from the safe zone center at which a redirected drone
    /// counts as secured.
    pub fn safe_arrival_radius(&self) -> f64 {
        self.safe.size / 2.0
    }
}
