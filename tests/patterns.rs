mod tests {
    use myrtio_matrix_driver::color::{BLACK, hsv2rgb};
    use myrtio_matrix_driver::pattern::{
        BallPattern, BallState, FLASH_FRAMES, FlashBurst, PRIORITY_LEVELS, PriorityBars,
        QuadrantBall, RainbowSweep, WavePattern, bar_length,
    };
    use myrtio_matrix_driver::priority::{CYCLE_LEVELS, PriorityLevel};
    use myrtio_matrix_driver::{
        Canvas, FrameBuffer, Hsv, Pattern, PatternId, Priority, Region, Rgb,
    };

    const TEST_LEVEL: PriorityLevel = PriorityLevel {
        name: "test",
        priority: Priority(4),
        speed: 1.0,
        color: Rgb { r: 0, g: 64, b: 0 },
    };

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(
            hsv2rgb(Hsv {
                hue: 0,
                sat: 255,
                val: 255
            }),
            Rgb { r: 255, g: 0, b: 0 }
        );
        assert_eq!(
            hsv2rgb(Hsv {
                hue: 85,
                sat: 255,
                val: 255
            }),
            Rgb { r: 0, g: 255, b: 0 }
        );
    }

    #[test]
    fn test_quadrant_ball_bounces_inside_bounds() {
        assert_eq!(QuadrantBall::bounds(8), (0.5, 6.5));

        let mut ball = QuadrantBall::new(&TEST_LEVEL);
        assert_eq!(ball.state(), BallState::START);
        let mut bounces = 0;
        for _ in 0..500 {
            let before = ball.state();
            ball.advance(8, 8);
            let after = ball.state();

            for (pos, vel, new_pos, new_vel) in [
                (before.x, before.vx, after.x, after.vx),
                (before.y, before.vy, after.y, after.vy),
            ] {
                let raw = pos + vel;
                let crossed = raw <= 0.5 || raw >= 6.5;
                assert_eq!(new_vel == -vel, crossed, "raw {raw}");
                if crossed {
                    bounces += 1;
                } else {
                    assert_eq!(new_pos, raw);
                }
                assert!((0.5..=6.5).contains(&new_pos), "position {new_pos}");
            }
        }
        assert!(bounces > 0);
    }

    #[test]
    fn test_quadrant_ball_step_axis_clamps() {
        let (mut x, mut vx) = (6.4, 0.3);
        assert!(QuadrantBall::step_axis(&mut x, &mut vx, 1.0, 8));
        assert_eq!(vx, -0.3);
        assert!((x - 6.4).abs() < 1e-6);

        let (mut y, mut vy) = (0.7, -0.25);
        assert!(QuadrantBall::step_axis(&mut y, &mut vy, 1.0, 8));
        assert_eq!(vy, 0.25);
        assert!((y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_quadrant_ball_erases_only_its_footprint() {
        let mut frame = FrameBuffer::<8, 8>::new();
        let marker = Rgb { r: 1, g: 1, b: 1 };
        frame.set_pixel(0, 7, marker);

        let mut ball = QuadrantBall::new(&TEST_LEVEL);
        ball.draw(&mut frame);
        assert_eq!(frame.get_pixel(4, 4), TEST_LEVEL.color);
        assert_eq!(frame.get_pixel(5, 5), TEST_LEVEL.color);

        for _ in 0..10 {
            ball.advance(8, 8);
            ball.draw(&mut frame);
        }
        let state = ball.state();
        let lit = frame
            .slots()
            .iter()
            .filter(|pixel| **pixel == TEST_LEVEL.color)
            .count();
        assert_eq!(lit, 4);
        assert_eq!(
            frame.get_pixel(state.x as i32, state.y as i32),
            TEST_LEVEL.color
        );
        assert_eq!(frame.get_pixel(0, 7), marker);
    }

    #[test]
    fn test_quadrant_ball_reset_erases_old_footprint() {
        let mut frame = FrameBuffer::<8, 8>::new();
        let mut ball = QuadrantBall::new(&TEST_LEVEL).with_state(BallState {
            x: 1.0,
            y: 1.0,
            vx: 0.3,
            vy: 0.25,
        });
        ball.draw(&mut frame);
        assert_eq!(frame.get_pixel(1, 1), TEST_LEVEL.color);

        ball.reset();
        ball.draw(&mut frame);
        assert_eq!(frame.get_pixel(1, 1), BLACK);
        assert_eq!(frame.get_pixel(4, 4), TEST_LEVEL.color);
        let lit = frame
            .slots()
            .iter()
            .filter(|pixel| **pixel == TEST_LEVEL.color)
            .count();
        assert_eq!(lit, 4);
    }

    #[test]
    fn test_quadrant_ball_takes_level_speed_and_color() {
        let mut ball = QuadrantBall::new(&CYCLE_LEVELS[0]);
        assert_eq!(ball.speed(), 1.5);
        ball.apply_level(&CYCLE_LEVELS[3]);
        assert_eq!(ball.speed(), 1.2);
        assert_eq!(ball.color(), CYCLE_LEVELS[3].color);
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(255, 16), 16);
        assert_eq!(bar_length(128, 16), 8);
        assert_eq!(bar_length(0, 16), 0);
    }

    #[test]
    fn test_priority_bars_draw_lit_length() {
        let mut frame = FrameBuffer::<16, 16>::new();
        let mut bars = PriorityBars::new(1);
        bars.set_activity(0, 255);
        bars.set_activity(1, 128);
        bars.draw(&mut frame);

        let red = Rgb { r: 255, g: 0, b: 0 };
        for x in 0..16 {
            assert_eq!(frame.get_pixel(x, 0), red);
            assert_eq!(frame.get_pixel(x, 1), red);
        }
        let lit_row_2 = (0..16)
            .filter(|x| frame.get_pixel(*x, 2) == Rgb { r: 128, g: 64, b: 0 })
            .count();
        assert_eq!(lit_row_2, 8);
        assert_eq!(frame.get_pixel(15, 2), Rgb { r: 25, g: 12, b: 0 });
    }

    #[test]
    fn test_priority_bars_decay() {
        let mut bars = PriorityBars::new(7);
        assert_eq!(bars.activity().len(), PRIORITY_LEVELS);
        bars.set_activity(7, 255);
        bars.advance(16, 16);
        let activity = bars.activity()[7];
        assert!(activity == 229 || activity == 255);
    }

    #[test]
    fn test_wave_levels() {
        assert_eq!(WavePattern::level(0, 16), 128);
        assert!(WavePattern::level(4, 16) >= 254);
        assert!(WavePattern::level(12, 16) <= 1);

        let mut wave = WavePattern::new();
        for _ in 0..16 {
            wave.advance(16, 16);
        }
        assert_eq!(wave.offset(), 0);
    }

    #[test]
    fn test_ball_pattern_sets_blue_only() {
        let mut frame = FrameBuffer::<16, 16>::new();
        frame.fill(Rgb { r: 10, g: 20, b: 0 });
        let mut ball = BallPattern::new();
        ball.draw(&mut frame);
        assert_eq!(frame.get_pixel(8, 8), Rgb { r: 10, g: 20, b: 255 });
        assert_eq!(frame.get_pixel(7, 7), Rgb { r: 10, g: 20, b: 255 });
        assert_eq!(frame.get_pixel(10, 10), Rgb { r: 10, g: 20, b: 0 });
    }

    #[test]
    fn test_flash_burst_fades_out() {
        let mut frame = FrameBuffer::<4, 4>::new();
        let mut flash = FlashBurst::new();
        let mut levels = Vec::new();
        while !flash.is_finished() {
            flash.advance(4, 4);
            flash.draw(&mut frame);
            levels.push(frame.get_pixel(0, 0).r);
        }
        assert_eq!(levels.len(), usize::from(FLASH_FRAMES));
        assert_eq!(levels, [255, 230, 205, 180, 155, 130, 105, 80, 55, 30]);
        assert_eq!(frame.get_pixel(3, 3).b, 0);
    }

    #[test]
    fn test_rainbow_sweep_starts_red() {
        let mut frame = FrameBuffer::<16, 1>::new();
        let mut rainbow = RainbowSweep::new();
        rainbow.draw(&mut frame);
        assert_eq!(frame.get_pixel(0, 0), Rgb { r: 255, g: 0, b: 0 });
        assert_ne!(frame.get_pixel(8, 0), frame.get_pixel(0, 0));
    }

    #[test]
    fn test_pattern_stays_inside_view() {
        let mut frame = FrameBuffer::<16, 16>::new();
        let region = Region::quadrant(1, 16, 16);
        let mut wave = WavePattern::new();
        wave.draw(&mut frame.view(region));
        for y in 0..16 {
            for x in 0..16 {
                if !region.contains(x, y) {
                    assert_eq!(frame.get_pixel(x as i32, y as i32), BLACK, "({x}, {y})");
                }
            }
        }
        assert_eq!(frame.get_pixel(8, 0), Rgb { r: 128, g: 128, b: 0 });
    }

    #[test]
    fn test_pattern_id_parse() {
        assert_eq!(PatternId::parse_from_str("wave"), Some(PatternId::Wave));
        assert_eq!(
            PatternId::parse_from_str("quadrant_ball"),
            Some(PatternId::QuadrantBall)
        );
        assert_eq!(PatternId::parse_from_str("aurora"), None);
    }

    #[test]
    fn test_pattern_id_from_raw() {
        assert_eq!(PatternId::from_raw(0), Some(PatternId::Wave));
        assert_eq!(PatternId::from_raw(6), Some(PatternId::FlashBurst));
        assert_eq!(PatternId::from_raw(8), None);
    }

    #[test]
    fn test_pattern_id_round_trips_through_slot() {
        for raw in 0..8 {
            let id = PatternId::from_raw(raw).unwrap();
            assert_eq!(id.to_slot().id(), id);
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(id));
        }
    }
}
