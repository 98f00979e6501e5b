#[cfg(test)]
mod tests {
    use crate::commands::OperatorCommand;
    use crate::constants::*;
    use crate::enums::*;
    use crate::events::Footprint;
    use crate::geometry::{segment_intersects_circle, steer_towards};
    use crate::state::ScenarioSnapshot;
    use crate::types::{Position, SimTime};
    use crate::zones::ZoneLayout;

    /// Verify the status and phase enums round-trip through serde_json.
    #[test]
    fn test_drone_status_serde() {
        let variants = vec![
            DroneStatus::Normal,
            DroneStatus::Redirected,
            DroneStatus::Safe,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: DroneStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_scenario_phase_serde() {
        let variants = vec![
            ScenarioPhase::Inactive,
            ScenarioPhase::NormalFlight,
            ScenarioPhase::AttackActive,
            ScenarioPhase::Secured,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ScenarioPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_scenario_kind_serde() {
        let variants = vec![
            ScenarioKind::Redirect,
            ScenarioKind::RedirectDetour,
            ScenarioKind::TelemetryInject,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ScenarioKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify OperatorCommand round-trips through serde (tagged union).
    #[test]
    fn test_operator_command_serde() {
        let commands = vec![
            OperatorCommand::SelectScenario {
                kind: ScenarioKind::RedirectDetour,
            },
            OperatorCommand::Start { drone_count: 5 },
            OperatorCommand::Reset,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: OperatorCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_footprint_timestamp_from_sim_time() {
        let mut time = SimTime::default();
        for _ in 0..45 {
            time.advance();
        }
        let fp = Footprint::new(FootprintCategory::Attack, "detected", &time);
        assert_eq!(fp.tick, 45);
        // 45 ticks at 30Hz = 1.5s
        assert_eq!(fp.timestamp, "T+0001.5s");
    }

    /// Verify the default snapshot serializes and stays small.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = ScenarioSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: ScenarioSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// Verify Position distance.
    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-10);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    // ---- Steering ----

    /// Steering from a point to itself returns the point for any
    /// positive step — no division by zero, no NaN.
    #[test]
    fn test_steer_degenerate_same_point() {
        let p = Position::new(42.0, -7.5);
        for step in [0.1, 1.5, 100.0] {
            let out = steer_towards(p, p, step);
            assert_eq!(out, p);
            assert!(out.x.is_finite() && out.y.is_finite());
        }
    }

    /// Within one step of the destination, steering snaps exactly to it.
    #[test]
    fn test_steer_snaps_within_step() {
        let from = Position::new(10.0, 10.0);
        let to = Position::new(11.0, 10.0);
        let out = steer_towards(from, to, 1.5);
        assert_eq!(out, to);
    }

    #[test]
    fn test_steer_advances_by_step() {
        let from = Position::new(0.0, 0.0);
        let to = Position::new(10.0, 0.0);
        let out = steer_towards(from, to, 1.5);
        assert!((out.x - 1.5).abs() < 1e-10);
        assert!(out.y.abs() < 1e-10);
        assert!((from.range_to(&out) - 1.5).abs() < 1e-10);
    }

    // ---- Segment / circle ----

    /// A segment passing through the circle's center intersects for any
    /// positive radius.
    #[test]
    fn test_segment_through_center_intersects() {
        let from = Position::new(-10.0, 0.0);
        let to = Position::new(10.0, 0.0);
        let center = Position::new(0.0, 0.0);
        for radius in [0.001, 1.0, 9.0] {
            assert!(segment_intersects_circle(from, to, center, radius));
        }
    }

    /// A segment whose bounding box does not overlap the circle's
    /// bounding box does not intersect.
    #[test]
    fn test_segment_far_outside_misses() {
        let from = Position::new(100.0, 100.0);
        let to = Position::new(200.0, 120.0);
        let center = Position::new(0.0, 0.0);
        assert!(!segment_intersects_circle(from, to, center, 50.0));
    }

    /// The intersection must lie within the segment, not just the
    /// infinite line.
    #[test]
    fn test_segment_short_of_circle_misses() {
        let from = Position::new(-100.0, 0.0);
        let to = Position::new(-50.0, 0.0);
        let center = Position::new(0.0, 0.0);
        // The line continues through the circle but the segment stops short.
        assert!(!segment_intersects_circle(from, to, center, 10.0));
    }

    #[test]
    fn test_segment_grazing_edge() {
        let from = Position::new(-10.0, 5.0);
        let to = Position::new(10.0, 5.0);
        let center = Position::new(0.0, 0.0);
        assert!(segment_intersects_circle(from, to, center, 5.0));
        assert!(!segment_intersects_circle(from, to, center, 4.999));
    }

    // ---- Zone layout ----

    /// Flanking detour points sit outside the tower core, symmetric
    /// about the tower→safe axis.
    #[test]
    fn test_detour_points_outside_core() {
        let layout = ZoneLayout::standard();
        let expected = layout.tower.core_radius + DETOUR_CLEARANCE;
        for p in layout.detour_points {
            let d = layout.tower.center.range_to(&p);
            assert!(
                (d - expected).abs() < 1e-9,
                "Detour point should sit at core + clearance, got {d}"
            );
            assert!(d > layout.tower.core_radius);
        }
        // Distinct points on opposite sides.
        let [a, b] = layout.detour_points;
        assert!(a.range_to(&b) > layout.tower.core_radius);
    }

    #[test]
    fn test_safe_arrival_radius_is_half_size() {
        let layout = ZoneLayout::standard();
        assert!((layout.safe_arrival_radius() - layout.safe.size / 2.0).abs() < 1e-10);
    }
}
