//! Fixed-step scheduler
//!
//! Converts variable frame times into whole simulation ticks and fires the
//! spawn cadence every `spawn_interval_ticks` of them. Both cadences share one
//! accumulator, so their relative order is deterministic.

use crate::consts::MAX_FRAME_DT;
use crate::sim::{InputState, SimulationState, TickInput, Viewport, tick};
use crate::tuning::Tuning;

/// Game instance holding simulation state and its scheduling
pub struct GameLoop {
    state: SimulationState,
    input: InputState,
    viewport: Viewport,
    tuning: Tuning,
    accumulator: f32,
    /// Ticks left until the next spawn fires
    spawn_countdown: u32,
    running: bool,
}

impl GameLoop {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let state = SimulationState::new(seed, &tuning);
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state,
            input: InputState::new(),
            viewport: tuning.viewport,
            spawn_countdown: tuning.spawn_interval_ticks(),
            tuning,
            accumulator: 0.0,
            running: true,
        }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true if `key` is a movement key
    pub fn key_down(&mut self, key: &str) -> bool {
        self.input.press(key)
    }

    /// Returns true if `key` is a movement key
    pub fn key_up(&mut self, key: &str) -> bool {
        self.input.release(key)
    }

    pub fn release_all_keys(&mut self) {
        self.input.release_all();
    }

    /// Takes effect at the next tick boundary
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
            self.viewport = viewport;
        }
    }

    /// Halt both the movement and spawn cadences
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!("Simulation stopped at tick {}", self.state.time_ticks);
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulator = 0.0;
            log::info!("Simulation resumed");
        }
    }

    /// Reset to a fresh run
    pub fn restart(&mut self, seed: u64) {
        self.state = SimulationState::new(seed, &self.tuning);
        self.accumulator = 0.0;
        self.spawn_countdown = self.tuning.spawn_interval_ticks();
        self.input.release_all();
        self.running = true;
        log::info!("Game restarted with seed: {}", seed);
    }

    /// Run as many ticks as `frame_dt` seconds cover. Returns ticks run.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        if !self.running {
            return 0;
        }

        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let step = self.tuning.tick_dt();
        let mut substeps = 0;
        while self.accumulator >= step && substeps < self.tuning.max_substeps {
            self.step();
            self.accumulator -= step;
            substeps += 1;
        }

        if substeps == self.tuning.max_substeps && self.accumulator >= step {
            log::trace!("Substep cap hit, dropping {:.4}s", self.accumulator);
            self.accumulator = 0.0;
        }

        substeps
    }

    /// Run exactly one tick, firing the spawn cadence if it is due
    pub fn step(&mut self) {
        self.spawn_countdown = self.spawn_countdown.saturating_sub(1);
        let spawn = self.spawn_countdown == 0;
        if spawn {
            self.spawn_countdown = self.tuning.spawn_interval_ticks();
        }

        let input = TickInput {
            held: self.input,
            viewport: self.viewport,
            spawn,
        };
        let outcome = tick(&mut self.state, &input, &self.tuning);
        if outcome.culled > 0 {
            log::debug!("Score {} (+{})", self.state.score, outcome.culled);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn game() -> GameLoop {
        GameLoop::new(12345, Tuning::default())
    }

    #[test]
    fn test_update_runs_whole_ticks() {
        let mut g = game();
        // 10ms at 250Hz = 2.5 ticks
        assert_eq!(g.update(0.010), 2);
        assert_eq!(g.update(0.003), 1);
        assert_eq!(g.state().time_ticks, 3);
    }

    #[test]
    fn test_spawn_cadence() {
        let mut g = game();
        let interval = g.tuning().spawn_interval_ticks();
        for _ in 0..interval - 1 {
            g.step();
        }
        assert!(g.state().enemies.is_empty());
        g.step();
        assert_eq!(g.state().enemies.len(), 1);
        for _ in 0..interval {
            g.step();
        }
        assert_eq!(g.state().enemies.len(), 2);
    }

    #[test]
    fn test_substep_cap() {
        let tuning = Tuning {
            max_substeps: 4,
            ..Tuning::default()
        };
        let mut g = GameLoop::new(1, tuning);
        assert_eq!(g.update(10.0), 4);
        // Backlog is dropped rather than replayed next frame
        assert_eq!(g.update(0.0), 0);
    }

    #[test]
    fn test_stop_halts_both_cadences() {
        let mut g = game();
        g.key_down("d");
        assert!(g.is_running());
        g.stop();
        assert!(!g.is_running());
        assert_eq!(g.update(0.1), 0);
        assert_eq!(g.state().time_ticks, 0);
        assert!(g.state().enemies.is_empty());
        assert_eq!(g.state().player.pos, Vec2::new(50.0, 50.0));

        g.start();
        assert!(g.is_running());
        assert!(g.update(0.005) >= 1);
        assert!(g.state().player.pos.x > 50.0);
    }

    #[test]
    fn test_key_events_between_ticks() {
        let mut g = game();
        g.key_down("d");
        g.key_down("d");
        g.step();
        assert_eq!(g.state().player.pos, Vec2::new(52.0, 50.0));
        g.key_up("d");
        g.key_up("d");
        g.step();
        assert_eq!(g.state().player.pos, Vec2::new(52.0, 50.0));
        assert!(!g.key_down("Escape"));
    }

    #[test]
    fn test_release_all_keys() {
        let mut g = game();
        g.key_down("s");
        g.release_all_keys();
        g.step();
        assert_eq!(g.state().player.pos, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_zero_viewport_skips_spawn() {
        let mut g = game();
        g.set_viewport(Viewport::new(0.0, 0.0));
        for _ in 0..100 {
            g.step();
        }
        assert!(g.state().enemies.is_empty());
        assert_eq!(g.state().score, 0);
    }

    #[test]
    fn test_resize_clamps_player() {
        let mut g = game();
        for _ in 0..500 {
            g.key_down("d");
            g.key_down("s");
            g.step();
        }
        g.set_viewport(Viewport::new(300.0, 200.0));
        g.step();
        assert_eq!(g.state().player.pos, Vec2::new(275.0, 175.0));
    }

    #[test]
    fn test_population_stays_bounded() {
        let mut g = game();
        for _ in 0..20_000 {
            g.step();
        }
        // Transit is at most 180 ticks and a spawn lands every 25
        assert!(g.state().enemies.len() <= 8, "{} live", g.state().enemies.len());
        assert!(g.state().score > 700);
    }

    #[test]
    fn test_restart() {
        let mut g = game();
        g.key_down("d");
        for _ in 0..100 {
            g.step();
        }
        g.restart(7);
        assert_eq!(g.state().time_ticks, 0);
        assert_eq!(g.state().score, 0);
        assert!(g.state().enemies.is_empty());
        assert!(!g.input().any_held());
        assert_eq!(g.state().seed, 7);
    }
}
