#[cfg(test)]
mod tests {
    use skyjack_core::constants::{DRONE_STEP, WAYPOINT_ARRIVAL_FACTOR};
    use skyjack_core::enums::DroneStatus;
    use skyjack_core::types::Position;
    use skyjack_core::zones::ZoneLayout;

    use crate::fsm::{advance, NavContext};
    use crate::route::{advance_along_plan, divert_route};

    fn make_context(
        layout: &ZoneLayout,
        status: DroneStatus,
        position: Position,
        nav_target: Option<Position>,
    ) -> NavContext<'_> {
        NavContext {
            status,
            position,
            nav_target,
            layout,
            step: DRONE_STEP,
        }
    }

    // ---- Movement FSM ----

    #[test]
    fn test_normal_drone_heads_for_target() {
        let layout = ZoneLayout::standard();
        let start = Position::new(100.0, 100.0);
        let ctx = make_context(&layout, DroneStatus::Normal, start, None);

        let update = advance(&ctx);
        assert_eq!(update.status, DroneStatus::Normal);
        assert!(!update.secured);

        let before = start.range_to(&layout.target.center);
        let after = update.position.range_to(&layout.target.center);
        assert!(
            (before - after - DRONE_STEP).abs() < 1e-9,
            "Should close exactly one step toward the target"
        );
    }

    #[test]
    fn test_redirected_without_waypoint_heads_for_safe_zone() {
        let layout = ZoneLayout::standard();
        let start = Position::new(700.0, 200.0);
        let ctx = make_context(&layout, DroneStatus::Redirected, start, None);

        let update = advance(&ctx);
        assert_eq!(update.status, DroneStatus::Redirected);

        let before = start.range_to(&layout.safe.center);
        let after = update.position.range_to(&layout.safe.center);
        assert!((before - after - DRONE_STEP).abs() < 1e-9);
    }

    #[test]
    fn test_redirected_with_waypoint_heads_for_waypoint() {
        let layout = ZoneLayout::standard();
        let start = Position::new(700.0, 200.0);
        let wp = layout.detour_points[0];
        let ctx = make_context(&layout, DroneStatus::Redirected, start, Some(wp));

        let update = advance(&ctx);
        let before = start.range_to(&wp);
        let after = update.position.range_to(&wp);
        assert!((before - after - DRONE_STEP).abs() < 1e-9);
        assert_eq!(update.nav_target, Some(wp));
    }

    /// Reaching the intermediate waypoint switches to the final
    /// approach: nav_target clears, next ticks head for the safe zone.
    #[test]
    fn test_waypoint_arrival_clears_nav_target() {
        let layout = ZoneLayout::standard();
        let wp = layout.detour_points[0];
        // Just outside the arrival window, closing in.
        let start = Position::new(
            wp.x + WAYPOINT_ARRIVAL_FACTOR * DRONE_STEP + 1.0,
            wp.y,
        );
        let ctx = make_context(&layout, DroneStatus::Redirected, start, Some(wp));

        let update = advance(&ctx);
        assert_eq!(
            update.nav_target, None,
            "Within 2x step of the waypoint, detour mode should end"
        );
        assert_eq!(update.status, DroneStatus::Redirected);
    }

    #[test]
    fn test_safe_zone_arrival_flips_to_safe() {
        let layout = ZoneLayout::standard();
        // One step outside the arrival radius, heading in.
        let start = Position::new(
            layout.safe.center.x + layout.safe_arrival_radius() + DRONE_STEP / 2.0,
            layout.safe.center.y,
        );
        let ctx = make_context(&layout, DroneStatus::Redirected, start, None);

        let update = advance(&ctx);
        assert_eq!(update.status, DroneStatus::Safe);
        assert!(update.secured);
        assert_eq!(update.nav_target, None);
    }

    #[test]
    fn test_safe_drone_does_not_move() {
        let layout = ZoneLayout::standard();
        let start = layout.safe.center;
        let ctx = make_context(&layout, DroneStatus::Safe, start, None);

        let update = advance(&ctx);
        assert_eq!(update.position, start);
        assert_eq!(update.status, DroneStatus::Safe);
        assert!(!update.secured);
    }

    // ---- Detour routing ----

    #[test]
    fn test_divert_route_disabled_is_direct() {
        let layout = ZoneLayout::standard();
        // Opposite side of the tower from the safe zone — blocked if
        // detours were on.
        let position = Position::new(760.0, 305.0);
        assert_eq!(divert_route(position, &layout, false), None);
    }

    #[test]
    fn test_divert_route_blocked_picks_nearer_flank() {
        let layout = ZoneLayout::standard();
        // The segment from here to the safe zone passes well inside the
        // tower core + buffer.
        let position = Position::new(760.0, 305.0);
        let wp = divert_route(position, &layout, true);

        let [a, b] = layout.detour_points;
        let nearer = if position.range_to(&a) <= position.range_to(&b) {
            a
        } else {
            b
        };
        assert_eq!(wp, Some(nearer), "Blocked path should route via the nearer flank");
    }

    #[test]
    fn test_divert_route_clear_path_is_direct() {
        let layout = ZoneLayout::standard();
        // Just outside the safe zone, nowhere near the tower core.
        let position = Position::new(150.0, 500.0);
        assert_eq!(divert_route(position, &layout, true), None);
    }

    // ---- Waypoint sequencing ----

    #[test]
    fn test_plan_advances_through_waypoints_in_order() {
        let waypoints = vec![Position::new(10.0, 0.0), Position::new(10.0, 10.0)];
        let mut position = Position::new(0.0, 0.0);
        let mut next = 0;

        let mut visited_first = false;
        for _ in 0..40 {
            let (p, n) = advance_along_plan(position, &waypoints, next, 1.5);
            if n == 1 && next == 0 {
                visited_first = true;
                assert!(p.range_to(&waypoints[0]) <= 1.5);
            }
            position = p;
            next = n;
        }

        assert!(visited_first, "Should have passed the first waypoint");
        assert_eq!(next, 2, "Should have consumed the whole plan");
        assert!(position.range_to(&waypoints[1]) <= 1.5);
    }

    #[test]
    fn test_plan_exhausted_holds_position() {
        let waypoints = vec![Position::new(10.0, 0.0)];
        let position = Position::new(10.0, 0.0);
        let (p, n) = advance_along_plan(position, &waypoints, 1, 1.5);
        assert_eq!(p, position);
        assert_eq!(n, 1);
    }

    #[test]
    fn test_empty_plan_holds_position() {
        let position = Position::new(5.0, 5.0);
        let (p, n) = advance_along_plan(position, &[], 0, 1.5);
        assert_eq!(p, position);
        assert_eq!(n, 0);
    }
}
