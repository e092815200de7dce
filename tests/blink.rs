mod tests {
    use embassy_time::Instant;
    use iris_composer::blink::{BlinkAnimator, LID_CLOSED, LID_SPAN, LidState};
    use iris_composer::rng::XorShift32;

    fn ms(v: u64) -> Instant {
        Instant::from_millis(v)
    }

    #[test]
    fn test_full_cycle_returns_to_open() {
        let mut rng = XorShift32::new(5);
        let mut blink = BlinkAnimator::new(ms(0), &mut rng);
        assert_eq!(blink.state(), LidState::Open);

        // The first blink is scheduled 5-15 s out.
        blink.update(ms(4_999), &mut rng);
        assert_eq!(blink.state(), LidState::Open);
        blink.update(ms(15_000), &mut rng);
        assert_eq!(blink.state(), LidState::Closing);

        // Step 60 against threshold 120: two frames down, two frames up.
        blink.update(ms(15_025), &mut rng);
        blink.update(ms(15_050), &mut rng);
        assert_eq!(blink.state(), LidState::Opening);
        blink.update(ms(15_075), &mut rng);
        let offsets = blink.update(ms(15_100), &mut rng);
        assert_eq!(blink.state(), LidState::Open);

        // Offset back to exactly zero: lids fully parked.
        assert_eq!(offsets.upper, -(LID_SPAN / 2));
        assert_eq!(offsets.lower, LID_SPAN);
    }

    #[test]
    fn test_lid_offsets_meet_at_center_when_closed() {
        let mut rng = XorShift32::new(5);
        let mut blink = BlinkAnimator::new(ms(0), &mut rng);

        blink.update(ms(15_000), &mut rng);
        blink.update(ms(15_025), &mut rng);
        let offsets = blink.update(ms(15_050), &mut rng);

        // Fully closed: upper mask bottom edge and lower mask top edge
        // both sit at the vertical center.
        assert_eq!(offsets.upper, -(LID_SPAN / 2) + LID_CLOSED);
        assert_eq!(offsets.lower, LID_SPAN - LID_CLOSED);
    }

    #[test]
    fn test_non_divisible_step_clamps() {
        let mut rng = XorShift32::new(9);
        let mut blink = BlinkAnimator::new(ms(0), &mut rng);
        blink.update_with_step(ms(15_000), &mut rng, 50);
        assert_eq!(blink.state(), LidState::Closing);

        // 50 does not divide 120: the offset clamps at the bounds instead
        // of overshooting past the mask travel.
        for frame in 0..32 {
            let offsets = blink.update_with_step(ms(15_025 + frame * 25), &mut rng, 50);
            let offset = offsets.upper + LID_SPAN / 2;
            assert!((0..=LID_CLOSED).contains(&offset), "offset {offset} out of range");
        }
        assert_eq!(blink.state(), LidState::Open);
    }

    #[test]
    fn test_reblink_scheduled_sooner_than_first() {
        let mut rng = XorShift32::new(5);
        let mut blink = BlinkAnimator::new(ms(0), &mut rng);

        // Drive through the first full cycle.
        blink.update(ms(15_000), &mut rng);
        for frame in 0..4 {
            blink.update(ms(15_025 + frame * 25), &mut rng);
        }
        assert_eq!(blink.state(), LidState::Open);

        // Post-blink interval is 2-5 s, so by +5.1 s the next blink has
        // always started.
        blink.update(ms(15_125 + 5_100), &mut rng);
        assert_eq!(blink.state(), LidState::Closing);
    }
}
