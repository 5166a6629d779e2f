mod tests {
    use led_cube_driver::frame::{CHANNELS, CubeFrame};
    use led_cube_driver::map::LIVE_LED_COUNT;
    use led_cube_driver::Rgb;

    const ORANGE: Rgb = Rgb {
        r: 200,
        g: 100,
        b: 10,
    };

    #[test]
    fn test_set_voxel_writes_grb_at_compacted_slot() {
        let mut frame = CubeFrame::new();
        // Voxel (0,0,6) is LED number 1, chain index 0 - dead, dropped.
        // Voxel (0,0,5) is LED number 2, chain index 1, slot 0.
        frame.set_voxel(0, 0, 5, ORANGE);

        let bytes = frame.as_bytes();
        assert_eq!(&bytes[..CHANNELS], &[100, 200, 10]);
        assert!(bytes[CHANNELS..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_out_of_range_writes_are_dropped() {
        let mut frame = CubeFrame::new();
        frame.set_voxel(7, 0, 0, ORANGE);
        frame.set_voxel(0, 7, 0, ORANGE);
        frame.set_voxel(0, 0, 7, ORANGE);
        frame.set_led(usize::MAX, ORANGE);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_dead_voxel_writes_are_dropped() {
        let mut frame = CubeFrame::new();
        // LED number 109 sits on dead chain index 108.
        frame.set_voxel(2, 1, 3, ORANGE);
        frame.set_led(108, ORANGE);
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_neighbors_of_a_dead_led_do_not_collide() {
        let mut frame = CubeFrame::new();
        frame.set_voxel(2, 1, 4, ORANGE); // LED number 110, slot 107
        frame.set_voxel(2, 1, 2, Rgb { r: 1, g: 2, b: 3 }); // number 108, slot 106

        let bytes = frame.as_bytes();
        assert_eq!(&bytes[107 * CHANNELS..108 * CHANNELS], &[100, 200, 10]);
        assert_eq!(&bytes[106 * CHANNELS..107 * CHANNELS], &[2, 1, 3]);
    }

    #[test]
    fn test_clear_zeroes_whole_buffer() {
        let mut frame = CubeFrame::new();
        for x in 0..7 {
            for y in 0..7 {
                for z in 0..7 {
                    frame.set_voxel(x, y, z, ORANGE);
                }
            }
        }
        frame.clear();
        assert!(frame.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_render_scales_and_truncates() {
        let mut frame = CubeFrame::new();
        frame.set_voxel(0, 0, 5, Rgb { r: 41, g: 40, b: 1 });

        let scaled = frame.render(0.5);
        assert_eq!(scaled.len(), LIVE_LED_COUNT * CHANNELS);
        // 40 * 0.5 = 20, 41 * 0.5 = 20.5 truncated, 1 * 0.5 floors to 0.
        assert_eq!(&scaled[..CHANNELS], &[20, 20, 0]);
    }

    #[test]
    fn test_render_never_increases_a_channel() {
        let mut frame = CubeFrame::new();
        frame.set_voxel(0, 0, 5, ORANGE);
        frame.set_voxel(3, 3, 3, Rgb::new(255, 255, 255));

        for factor in [0.0, 0.1, 0.33, 0.5, 0.99, 1.0] {
            let unscaled: Vec<u8> = frame.as_bytes().to_vec();
            let scaled = frame.render(factor);
            for (out, raw) in scaled.iter().zip(unscaled.iter()) {
                assert!(out <= raw, "channel grew at factor {factor}");
            }
        }
    }

    #[test]
    fn test_render_at_full_brightness_is_identity() {
        let mut frame = CubeFrame::new();
        frame.set_voxel(6, 6, 0, ORANGE);
        let unscaled: Vec<u8> = frame.as_bytes().to_vec();
        assert_eq!(frame.render(1.0), &unscaled[..]);
    }

    #[test]
    fn test_last_write_wins() {
        let mut frame = CubeFrame::new();
        frame.set_voxel(1, 1, 1, ORANGE);
        frame.set_voxel(1, 1, 1, Rgb::new(5, 6, 7));

        let count = frame
            .as_bytes()
            .chunks(CHANNELS)
            .filter(|chunk| *chunk != [0, 0, 0])
            .count();
        assert_eq!(count, 1);
    }
}
