use std::time::Instant;

/// Frame clock for the fixed-timestep loop. Ticks are never queued; a slow
/// host just keeps accumulating until a single tick fires.
pub struct Timer {
    last_reset: Instant,
    delta: f32,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            last_reset: Instant::now(),
            delta: 0.0,
        }
    }

    pub fn update(&mut self) {
        self.delta = self.last_reset.elapsed().as_secs_f32();
    }

    pub fn delta_time(&self) -> f32 {
        self.delta
    }

    pub fn reset(&mut self) {
        self.last_reset = Instant::now();
        self.delta = 0.0;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reset_clears_the_accumulated_delta() {
        let mut timer = Timer::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        timer.update();
        assert!(timer.delta_time() > 0.0);
        timer.reset();
        assert_eq!(timer.delta_time(), 0.0);
    }
}
