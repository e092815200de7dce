mod tests {
    use embassy_time::{Duration, Instant};
    use iris_composer::flame::{BandProfile, FlameRenderer};
    use iris_composer::{
        EyeEngine, EyeEngineConfig, EyeSurface, FlameOutput, FrameClock, FrameScheduler,
        LayerId, Rgb,
    };

    fn ms(v: u64) -> Instant {
        Instant::from_millis(v)
    }

    #[test]
    fn test_frame_budget_with_fast_work() {
        // 40 fps => 25 ms budget; 10 ms of work leaves 15 ms of sleep.
        let clock = FrameClock::new();
        let budget = clock.frame_budget(ms(1000), ms(1010));
        assert_eq!(budget, Duration::from_millis(15));
    }

    #[test]
    fn test_frame_budget_never_negative() {
        // 30 ms of work overruns the 25 ms budget: zero sleep, and the
        // next frame simply starts from its own clock with no catch-up.
        let clock = FrameClock::new();
        let budget = clock.frame_budget(ms(1000), ms(1030));
        assert_eq!(budget, Duration::from_millis(0));

        let next = clock.frame_budget(ms(1030), ms(1035));
        assert_eq!(next, Duration::from_millis(20));
    }

    #[derive(Default)]
    struct RecordingSurface {
        moves: Vec<(LayerId, i32, i32)>,
        colors: Vec<(LayerId, Rgb)>,
        presents: usize,
    }

    impl EyeSurface for RecordingSurface {
        fn move_layer(&mut self, layer: LayerId, x: i32, y: i32) {
            self.moves.push((layer, x, y));
        }

        fn set_layer_color(&mut self, layer: LayerId, color: Rgb) {
            self.colors.push((layer, color));
        }

        fn present(&mut self) {
            self.presents += 1;
        }
    }

    #[derive(Default)]
    struct RecordingLeds {
        writes: usize,
        last_len: usize,
    }

    impl FlameOutput for RecordingLeds {
        fn write(&mut self, colors: &[Rgb]) {
            self.writes += 1;
            self.last_len = colors.len();
        }
    }

    fn scheduler() -> FrameScheduler<RecordingSurface, RecordingLeds, 64> {
        let engine = EyeEngine::new(&EyeEngineConfig::default(), ms(0)).unwrap();
        let flame = FlameRenderer::new_banded(BandProfile::Narrow, 2).unwrap();
        FrameScheduler::new(
            engine,
            RecordingSurface::default(),
            RecordingLeds::default(),
            Some(flame),
        )
    }

    #[test]
    fn test_tick_presents_and_writes_once_per_frame() {
        let mut scheduler = scheduler();
        scheduler.tick(ms(25));
        assert_eq!(scheduler.surface().presents, 1);
        assert_eq!(scheduler.flame_output().writes, 1);
        assert_eq!(scheduler.flame_output().last_len, 64);

        scheduler.tick(ms(50));
        assert_eq!(scheduler.surface().presents, 2);
        assert_eq!(scheduler.flame_output().writes, 2);
    }

    #[test]
    fn test_palette_pushed_only_on_change() {
        let mut scheduler = scheduler();

        // First frame pushes both palette colors; the second frame is
        // still inside the palette interval and pushes none.
        scheduler.tick(ms(25));
        assert_eq!(scheduler.surface().colors.len(), 2);
        scheduler.tick(ms(50));
        assert_eq!(scheduler.surface().colors.len(), 2);
    }

    #[test]
    fn test_pupil_layer_moved_every_frame() {
        let mut scheduler = scheduler();
        scheduler.tick(ms(25));
        scheduler.tick(ms(50));

        let pupil_moves = scheduler
            .surface()
            .moves
            .iter()
            .filter(|(layer, _, _)| *layer == LayerId::Pupil)
            .count();
        assert_eq!(pupil_moves, 2);

        // Pupil rests on "center" (120,120) with radius 40: layer origin
        // is at (80,80).
        let (_, x, y) = scheduler.surface().moves[0];
        assert_eq!((x, y), (80, 80));
    }

    #[test]
    fn test_no_flame_scheduler_skips_led_writes() {
        let engine = EyeEngine::new(&EyeEngineConfig::default(), ms(0)).unwrap();
        let mut scheduler: FrameScheduler<RecordingSurface, RecordingLeds, 64> =
            FrameScheduler::new(
                engine,
                RecordingSurface::default(),
                RecordingLeds::default(),
                None,
            );
        scheduler.tick(ms(25));
        assert_eq!(scheduler.flame_output().writes, 0);
        assert_eq!(scheduler.surface().presents, 1);
    }
}
