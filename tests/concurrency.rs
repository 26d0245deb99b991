mod tests {
    use std::thread;

    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use myrtio_matrix_driver::priority::{EVENT_CHANNEL_SIZE, EventChannel};
    use myrtio_matrix_driver::quadrant::{
        DISPLAY_PRIORITY, MATRIX_SIZE, QUAD_SIZE, QUADRANTS, quadrant_tasks,
    };
    use myrtio_matrix_driver::{
        DisplayConfig, DisplayTask, Duration, Instant, Priority, Rgb, SharedFrame, Transport,
        button_pressed,
    };

    const TICKS: u64 = 200;
    const BUF: usize = MATRIX_SIZE * MATRIX_SIZE * 24 + 82;

    type Frame = SharedFrame<CriticalSectionRawMutex, MATRIX_SIZE, MATRIX_SIZE>;

    #[derive(Default)]
    struct CountingTransport {
        frames: usize,
    }

    impl Transport for CountingTransport {
        type Error = ();

        fn write(&mut self, symbols: &[u8]) -> Result<(), Self::Error> {
            assert_eq!(symbols.len(), BUF);
            self.frames += 1;
            Ok(())
        }
    }

    fn snapshot(frame: &Frame, quadrant: usize) -> Vec<Rgb> {
        let region = myrtio_matrix_driver::Region::quadrant(quadrant, MATRIX_SIZE, MATRIX_SIZE);
        let mut pixels = vec![Rgb::default(); QUAD_SIZE * QUAD_SIZE];
        assert_eq!(frame.snapshot_region(region, &mut pixels), QUAD_SIZE * QUAD_SIZE);
        pixels
    }

    #[test]
    fn test_quadrant_setup() {
        let channel = EventChannel::<EVENT_CHANNEL_SIZE>::new();
        let tasks = quadrant_tasks(channel.receiver()).unwrap();
        let priorities: Vec<Priority> = tasks.iter().map(|task| task.priority()).collect();
        assert_eq!(
            priorities,
            [Priority(4), Priority(2), Priority(6), Priority(8)]
        );
        assert!(tasks
            .iter()
            .all(|task| DISPLAY_PRIORITY.is_more_urgent_than(task.priority())));
        assert!(tasks.iter().all(|task| task.period() == Duration::from_millis(50)));
        assert_eq!(tasks[3].region().x, QUAD_SIZE);
        assert_eq!(tasks[3].region().y, QUAD_SIZE);
        assert_eq!(tasks[0].name(), "quad1");
    }

    #[test]
    fn test_concurrent_writers_stay_in_their_regions() {
        let frame = Frame::new();
        let channel = EventChannel::<EVENT_CHANNEL_SIZE>::new();
        assert!(button_pressed(&channel.sender()));
        let tasks = quadrant_tasks(channel.receiver()).unwrap();

        let mut display =
            DisplayTask::<_, _, MATRIX_SIZE, MATRIX_SIZE, BUF>::new(
                &frame,
                CountingTransport::default(),
                &DisplayConfig::DEFAULT,
            );
        display.init().unwrap();

        thread::scope(|scope| {
            for mut task in tasks {
                let frame = &frame;
                scope.spawn(move || {
                    for tick in 0..TICKS {
                        task.tick(frame, Instant::from_millis(tick * 50));
                        thread::yield_now();
                    }
                });
            }
            scope.spawn(|| {
                for tick in 0..TICKS {
                    display.tick(Instant::from_millis(tick * 20));
                    thread::yield_now();
                }
            });
        });

        assert_eq!(display.stats().frames_sent, TICKS as u32);
        assert_eq!(display.stats().frames_dropped, 0);

        // Replay each quadrant alone and compare.
        let replay_channel = EventChannel::<EVENT_CHANNEL_SIZE>::new();
        assert!(button_pressed(&replay_channel.sender()));
        let replay_tasks = quadrant_tasks(replay_channel.receiver()).unwrap();
        for (index, mut task) in replay_tasks.into_iter().enumerate() {
            let alone = Frame::new();
            for tick in 0..TICKS {
                task.tick(&alone, Instant::from_millis(tick * 50));
            }
            assert_eq!(snapshot(&frame, index), snapshot(&alone, index), "quadrant {index}");
            assert!(snapshot(&frame, index).iter().any(|pixel| *pixel != Rgb::default()));
        }
    }
}
