mod tests {
    use iris_composer::geometry::{Point, seek};

    const EPS: f32 = 1e-4;

    #[test]
    fn test_snap_within_one_step() {
        let current = Point::new(100.0, 100.0);
        let target = Point::new(103.0, 104.0);
        // Distance 5 < speed 6: exact snap, no overshoot.
        let next = seek(current, target, 6.0);
        assert_eq!(next, target);
    }

    #[test]
    fn test_zero_distance_snaps() {
        let p = Point::new(120.0, 120.0);
        assert_eq!(seek(p, p, 5.0), p);
        // Degenerate zero speed on a zero delta must not produce NaN.
        let held = seek(p, p, 0.0);
        assert!(held.x.is_finite() && held.y.is_finite());
        assert_eq!(held, p);
    }

    #[test]
    fn test_bounded_step_length() {
        let current = Point::new(0.0, 0.0);
        let target = Point::new(30.0, 40.0);
        let next = seek(current, target, 5.0);

        // Step length equals the speed.
        assert!((current.distance_to(next) - 5.0).abs() < EPS);
        // Result lies strictly between current and target on the segment.
        assert!(next.distance_to(target) < current.distance_to(target));
        assert!(next.x > 0.0 && next.x < 30.0);
        assert!(next.y > 0.0 && next.y < 40.0);
    }

    #[test]
    fn test_left_look_reached_in_five_steps() {
        // Reference scenario: center -> left at speed 10 covers the
        // 50-unit delta in exactly ceil(50/10) = 5 steps.
        let target = Point::new(70.0, 120.0);
        let mut pupil = Point::new(120.0, 120.0);

        for step in 1..=5 {
            pupil = seek(pupil, target, 10.0);
            if step < 5 {
                assert_ne!(pupil, target, "arrived early at step {step}");
            }
        }
        assert_eq!(pupil, target);
    }
}
