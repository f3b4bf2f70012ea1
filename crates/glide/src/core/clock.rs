/// Fixed timestep accumulator that doubles as the frame loop's clock.
///
/// Variable frame deltas go in through `accumulate`; for each fixed step
/// the host runs, `advance` moves the monotonic `now` counter forward by
/// exactly one step. `now` is the "current time in seconds" source the
/// tween system steps against.
pub struct FrameClock {
    /// The fixed delta time per step.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
    /// Seconds of simulation advanced so far. Never decreases.
    now: f32,
}

impl FrameClock {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            now: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Consume one fixed step, advancing the clock. Returns the new time.
    pub fn advance(&mut self) -> f32 {
        self.now += self.dt;
        self.now
    }

    /// Simulation time in seconds.
    pub fn now(&self) -> f32 {
        self.now
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
