mod tests {
    use embassy_time::{Duration, Instant};
    use led_cube_driver::brightness::BrightnessInput;
    use led_cube_driver::command::{CommandQueue, CubeCommand};
    use led_cube_driver::pattern::PatternId;
    use led_cube_driver::scheduler::{CubeScheduler, FAILURE_COOLDOWN, FRAME_INTERVAL};
    use led_cube_driver::transmit::Transmitter;
    use led_cube_driver::{AnalogSource, WireBus};

    struct HalfPot;

    impl AnalogSource for HalfPot {
        fn read_channel(&mut self, _channel: u8) -> u16 {
            4095
        }
    }

    struct TestBus {
        pushed: usize,
        wedged: bool,
    }

    impl WireBus for TestBus {
        fn is_ready(&self) -> bool {
            !self.wedged
        }

        fn push(&mut self, _byte: u8) {
            self.pushed += 1;
        }

        fn is_busy(&self) -> bool {
            false
        }

        fn reset(&mut self) {
            self.wedged = false;
        }
    }

    fn scheduler(
        queue: &CommandQueue<4>,
        wedged: bool,
    ) -> CubeScheduler<'_, HalfPot, TestBus, 4> {
        CubeScheduler::new(
            BrightnessInput::new(HalfPot),
            Transmitter::new(TestBus { pushed: 0, wedged }),
            queue.receiver(),
        )
    }

    #[test]
    fn test_tick_sends_a_frame_and_paces() {
        let queue = CommandQueue::new();
        let mut cube = scheduler(&queue, false);

        let now = Instant::from_millis(10);
        let result = cube.tick(now);
        assert_eq!(result.sent, Ok(()));
        assert_eq!(result.next_deadline, now + FRAME_INTERVAL);
        assert_eq!(result.sleep_duration, FRAME_INTERVAL);
        assert!(cube.transmitter().bus().pushed > 0);
    }

    #[test]
    fn test_failed_send_schedules_cooldown_and_clears() {
        let queue = CommandQueue::new();
        let mut cube = scheduler(&queue, true);

        let now = Instant::from_millis(10);
        let result = cube.tick(now);
        assert!(result.sent.is_err());
        assert_eq!(result.sleep_duration, FAILURE_COOLDOWN);
        assert!(cube.frame_mut().as_bytes().iter().all(|&b| b == 0));

        // The transmitter reset the bus; the next tick succeeds.
        let result = cube.tick(now + FAILURE_COOLDOWN);
        assert_eq!(result.sent, Ok(()));
    }

    #[test]
    fn test_commands_switch_pattern_and_position() {
        let queue = CommandQueue::new();
        let sender = queue.sender();
        let mut cube = scheduler(&queue, false);

        assert_eq!(cube.pattern_id(), PatternId::PlanesX);
        sender.try_send(CubeCommand::NextPattern).unwrap();
        cube.tick(Instant::from_millis(0));
        assert_eq!(cube.pattern_id(), PatternId::PlanesY);

        sender.try_send(CubeCommand::AdvancePosition).unwrap();
        sender.try_send(CubeCommand::AdvancePosition).unwrap();
        cube.tick(Instant::from_millis(5));
        assert_eq!(cube.position(), 2);
    }

    #[test]
    fn test_auto_clocks_advance() {
        let queue = CommandQueue::new();
        let mut cube = scheduler(&queue, false);

        let start = Instant::from_millis(0);
        cube.tick(start);
        assert_eq!(cube.position(), 0);

        cube.tick(start + Duration::from_millis(1100));
        assert_eq!(cube.position(), 1);

        cube.tick(start + Duration::from_millis(15_100));
        assert_eq!(cube.pattern_id(), PatternId::PlanesY);
        assert_eq!(cube.position(), 0);
    }

    #[test]
    fn test_render_and_send_is_exposed_directly() {
        let queue = CommandQueue::new();
        let mut cube = scheduler(&queue, false);

        cube.frame_mut().set_voxel(3, 3, 3, led_cube_driver::Rgb::new(10, 20, 30));
        assert_eq!(cube.render_and_send(0.5), Ok(()));
    }
}
