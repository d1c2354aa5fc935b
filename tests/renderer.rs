mod common;

mod tests {
    use myrtio_light_organ::color::palette::{BLUE, RED, WHITE_DIM};
    use myrtio_light_organ::renderer::active_led_count;
    use myrtio_light_organ::traversal::Traversal;
    use myrtio_light_organ::{
        Action, BandMask, ConfigError, OFF, Renderer, Rgb, SegmentOptions, SegmentStore,
        SegmentUpdate, rgb7,
    };

    use crate::common::{count_color, lit_positions};

    type Store = SegmentStore<'static, 8>;

    fn push(
        store: &mut Store,
        first: u16,
        len: u16,
        action: Action,
        color: Rgb,
        update: SegmentUpdate,
    ) {
        let id = store
            .define(first, len, action, color, BandMask::NONE)
            .unwrap();
        store.update(id, &update).unwrap();
    }

    fn single(first: u16, len: u16, action: Action, level: u16, update: SegmentUpdate) -> Store {
        let mut store = Store::new();
        push(&mut store, first, len, action, RED, update.level(level));
        store
    }

    fn render(store: &Store) -> Vec<Rgb> {
        let mut renderer: Renderer<60> = Renderer::new(60, 1).unwrap();
        renderer.render(store).to_vec()
    }

    #[test]
    fn test_active_led_count() {
        assert_eq!(active_led_count(0, 60), 0);
        assert_eq!(active_led_count(1023, 60), 60);
        assert_eq!(active_led_count(5000, 60), 60);
        assert_eq!(active_led_count(306, 60), 18);
        assert_eq!(active_led_count(1023, 0), 0);

        for len in [1, 7, 10, 60, 160, 1000] {
            let mut previous = 0;
            for level in 0..=1023 {
                let count = active_led_count(level, len);
                assert!(count >= previous);
                assert!(count <= len);
                previous = count;
            }
            assert_eq!(previous, len);
        }
    }

    #[test]
    fn test_strip_too_long() {
        assert_eq!(
            Renderer::<60>::new(61, 0).err(),
            Some(ConfigError::StripTooLong {
                led_count: 61,
                capacity: 60
            })
        );

        let mut renderer: Renderer<60> = Renderer::new(20, 0).unwrap();
        assert_eq!(renderer.render(&Store::new()).len(), 20);
    }

    #[test]
    fn test_fill_from_start() {
        let frame = render(&single(0, 60, Action::FillFromStart, 306, SegmentUpdate::new()));
        assert_eq!(lit_positions(&frame, RED), (0..18).collect::<Vec<_>>());
        assert_eq!(count_color(&frame, OFF), 42);
    }

    #[test]
    fn test_fill_from_end() {
        let frame = render(&single(10, 20, Action::FillFromEnd, 466, SegmentUpdate::new()));
        // 466 lights 9 of 20
        assert_eq!(lit_positions(&frame, RED), (21..30).collect::<Vec<_>>());
    }

    #[test]
    fn test_fill_from_center_order() {
        let positions: Vec<i32> = Traversal::new(Action::FillFromCenter, 0, 10, 0)
            .map(|step| step.position)
            .collect();
        assert_eq!(positions, [4, 5, 3, 6, 2, 7, 1, 8, 0, 9]);

        // 280 lights 3 of 10
        let frame = render(&single(0, 10, Action::FillFromCenter, 280, SegmentUpdate::new()));
        assert_eq!(lit_positions(&frame, RED), [3, 4, 5]);
    }

    #[test]
    fn test_fill_from_center_spacing() {
        // Spacing counts visiting steps, not physical offsets
        let frame = render(&single(
            0,
            10,
            Action::FillFromCenter,
            1023,
            SegmentUpdate::new().spacing(2),
        ));
        assert_eq!(lit_positions(&frame, RED), [1, 4, 6, 9]);
    }

    #[test]
    fn test_static_ignores_level() {
        let frame = render(&single(5, 10, Action::Static, 0, SegmentUpdate::new()));
        assert_eq!(lit_positions(&frame, RED), (5..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_none_is_not_rendered() {
        let frame = render(&single(0, 10, Action::None, 1023, SegmentUpdate::new()));
        assert_eq!(count_color(&frame, OFF), 60);
    }

    #[test]
    fn test_spacing_duty() {
        for action in [
            Action::FillFromStart,
            Action::FillFromEnd,
            Action::FillFromCenter,
            Action::Static,
        ] {
            for len in [1u16, 7, 10, 33, 60] {
                for spacing in 0..4u16 {
                    let frame = render(&single(
                        0,
                        len,
                        action,
                        1023,
                        SegmentUpdate::new().spacing(spacing),
                    ));
                    let expected = usize::from(len.div_ceil(spacing + 1));
                    assert_eq!(count_color(&frame, RED), expected, "{action:?} {len} {spacing}");
                }
            }
        }
    }

    #[test]
    fn test_spacing_with_background() {
        let frame = render(&single(
            0,
            10,
            Action::FillFromStart,
            466,
            SegmentUpdate::new().spacing(1).background(WHITE_DIM),
        ));
        assert_eq!(lit_positions(&frame, RED), [0, 2, 4]);
        assert_eq!(lit_positions(&frame, WHITE_DIM), [6, 8]);
        assert_eq!(count_color(&frame[..10], OFF), 5);
    }

    #[test]
    fn test_fill_from_end_spacing_starts_at_last_led() {
        let frame = render(&single(
            0,
            10,
            Action::FillFromEnd,
            1023,
            SegmentUpdate::new().spacing(2),
        ));
        assert_eq!(lit_positions(&frame, RED), [0, 3, 6, 9]);
    }

    #[test]
    fn test_modulate_color() {
        let background = rgb7(10, 20, 30);
        let update = SegmentUpdate::new()
            .foreground(rgb7(100, 20, 0))
            .background(background)
            .options(SegmentOptions::MODULATE_COLOR);

        let frame = render(&single(0, 10, Action::FillFromStart, 0, update));
        assert_eq!(count_color(&frame, background), 10);

        let frame = render(&single(0, 10, Action::FillFromStart, 1023, update));
        assert_eq!(count_color(&frame, rgb7(100, 20, 0)), 10);

        // Half lit: foreground is halfway between the two colors
        let frame = render(&single(0, 10, Action::FillFromStart, 466, update));
        assert_eq!(lit_positions(&frame, rgb7(55, 20, 15)), [0, 1, 2, 3, 4]);
        assert_eq!(lit_positions(&frame, background), [5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_modulate_static_follows_level() {
        let background = rgb7(10, 20, 30);
        let update = SegmentUpdate::new()
            .foreground(rgb7(100, 20, 0))
            .background(background)
            .options(SegmentOptions::MODULATE_COLOR);

        // Every LED is lit, the color tracks the level
        let frame = render(&single(0, 10, Action::Static, 0, update));
        assert_eq!(count_color(&frame[..10], background), 10);

        let frame = render(&single(0, 10, Action::Static, 466, update));
        assert_eq!(count_color(&frame[..10], rgb7(55, 20, 15)), 10);

        let frame = render(&single(0, 10, Action::Static, 1023, update));
        assert_eq!(count_color(&frame[..10], rgb7(100, 20, 0)), 10);
    }

    #[test]
    fn test_modulate_random_threshold_follows_level() {
        let background = rgb7(10, 20, 30);
        let update = SegmentUpdate::new()
            .foreground(rgb7(100, 20, 0))
            .background(background)
            .options(SegmentOptions::MODULATE_COLOR);

        let frame = render(&single(0, 60, Action::RandomThreshold, 1023, update));
        assert_eq!(count_color(&frame, rgb7(100, 20, 0)), 60);

        // 512 lights 30 of 60, so the blend sits halfway
        let store = single(0, 60, Action::RandomThreshold, 512, update);
        let mut renderer: Renderer<60> = Renderer::new(60, 9).unwrap();
        let frame = renderer.render(&store).to_vec();
        for (step, led) in frame.iter().enumerate() {
            let threshold = renderer.thresholds().threshold(u16::try_from(step).unwrap());
            let expected = if threshold <= 512 {
                rgb7(55, 20, 15)
            } else {
                OFF
            };
            assert_eq!(*led, expected);
        }
    }

    #[test]
    fn test_invert_level() {
        let update = SegmentUpdate::new().options(SegmentOptions::INVERT_LEVEL);

        let store = single(0, 10, Action::FillFromStart, 0, update);
        assert_eq!(count_color(&render(&store), RED), 10);
        assert_eq!(store.current().unwrap().level(), 0);

        let frame = render(&single(0, 10, Action::FillFromStart, 1023, update));
        assert_eq!(count_color(&frame, RED), 0);
    }

    #[test]
    fn test_later_segments_overwrite() {
        let mut store = Store::new();
        push(&mut store, 0, 10, Action::Static, RED, SegmentUpdate::new());
        push(&mut store, 5, 10, Action::Static, BLUE, SegmentUpdate::new());

        let frame = render(&store);
        assert_eq!(lit_positions(&frame, RED), [0, 1, 2, 3, 4]);
        assert_eq!(lit_positions(&frame, BLUE), (5..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_suppress_background_overwrite() {
        let overlay = |options: SegmentOptions, background: Rgb| {
            let mut store = Store::new();
            push(&mut store, 0, 10, Action::Static, RED, SegmentUpdate::new());
            push(
                &mut store,
                0,
                10,
                Action::FillFromStart,
                BLUE,
                SegmentUpdate::new()
                    .level(466)
                    .options(options)
                    .background(background),
            );
            render(&store)
        };

        let frame = overlay(SegmentOptions::SUPPRESS_BACKGROUND_OVERWRITE, OFF);
        assert_eq!(lit_positions(&frame, BLUE), [0, 1, 2, 3, 4]);
        assert_eq!(lit_positions(&frame, RED), [5, 6, 7, 8, 9]);

        let frame = overlay(SegmentOptions::empty(), OFF);
        assert_eq!(count_color(&frame, RED), 0);

        // Only off pixels are skipped
        let frame = overlay(SegmentOptions::SUPPRESS_BACKGROUND_OVERWRITE, WHITE_DIM);
        assert_eq!(lit_positions(&frame, WHITE_DIM), [5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_segment_past_strip_end() {
        let frame = render(&single(55, 10, Action::Static, 0, SegmentUpdate::new()));
        assert_eq!(lit_positions(&frame, RED), [55, 56, 57, 58, 59]);

        let frame = render(&single(100, 10, Action::Static, 0, SegmentUpdate::new()));
        assert_eq!(count_color(&frame, OFF), 60);
    }

    #[test]
    fn test_random_threshold_follows_table() {
        let store = single(0, 60, Action::RandomThreshold, 500, SegmentUpdate::new());
        let mut renderer: Renderer<60> = Renderer::new(60, 42).unwrap();
        let frame = renderer.render(&store).to_vec();

        for (step, led) in frame.iter().enumerate() {
            let threshold = renderer.thresholds().threshold(u16::try_from(step).unwrap());
            let expected = if threshold <= 500 { RED } else { OFF };
            assert_eq!(*led, expected);
        }
    }

    #[test]
    fn test_random_threshold_extremes() {
        let frame = render(&single(0, 60, Action::RandomThreshold, 1023, SegmentUpdate::new()));
        assert_eq!(count_color(&frame, RED), 60);

        let mut renderer: Renderer<60> = Renderer::new(60, 1).unwrap();
        let zeros = renderer
            .thresholds()
            .thresholds()
            .iter()
            .filter(|threshold| **threshold == 0)
            .count();
        let store = single(0, 60, Action::RandomThreshold, 0, SegmentUpdate::new());
        assert!(count_color(renderer.render(&store), RED) <= zeros);
    }

    #[test]
    fn test_random_threshold_reseed_is_deterministic() {
        let store = single(0, 60, Action::RandomThreshold, 600, SegmentUpdate::new());
        let mut first: Renderer<60> = Renderer::new(60, 42).unwrap();
        let mut second: Renderer<60> = Renderer::new(60, 7).unwrap();
        second.thresholds_mut().reseed(42);

        let frame = first.render(&store).to_vec();
        assert_eq!(second.render(&store), frame.as_slice());
        assert_eq!(first.render(&store), frame.as_slice());

        first.thresholds_mut().reshuffle();
        second.thresholds_mut().reshuffle();
        assert_eq!(first.thresholds().thresholds(), second.thresholds().thresholds());
    }

    #[test]
    fn test_thresholds_below_max_level() {
        let mut renderer: Renderer<60> = Renderer::new(60, 3).unwrap();
        for _ in 0..20 {
            assert!(renderer.thresholds().thresholds().iter().all(|t| *t < 1023));
            renderer.thresholds_mut().reshuffle();
        }
    }
}
