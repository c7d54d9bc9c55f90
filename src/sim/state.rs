//! Simulation state and per-tick entity updates
//!
//! All randomness comes from the state's seeded RNG, so a run is reproducible
//! from its seed and input sequence.

use std::fmt;

use glam::{IVec2, Vec2};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::viewport::Viewport;
use crate::tuning::Tuning;

/// Unique enemy identifier (random UUID drawn from the simulation RNG)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnemyId(uuid::Uuid);

impl EnemyId {
    fn generate(rng: &mut Pcg32) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The player's circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
}

/// An enemy square travelling in a fixed direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Vec2,
    /// Chosen once at spawn, never changes
    pub direction: Direction,
}

impl Enemy {
    /// Edge point an enemy heading in `direction` enters from.
    ///
    /// `t` in `[0, 1)` picks the position along that edge.
    pub fn spawn_position(direction: Direction, viewport: Viewport, t: f32) -> Vec2 {
        let heading = direction.enemy_heading();
        if direction.is_horizontal() {
            let x = if heading.x > 0.0 { 0.0 } else { viewport.width };
            Vec2::new(x, t * viewport.height)
        } else {
            let y = if heading.y > 0.0 { 0.0 } else { viewport.height };
            Vec2::new(t * viewport.width, y)
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub player: Player,
    /// Live enemies, in spawn order
    pub enemies: Vec<Enemy>,
    /// Enemies that have left the viewport. Never decreases.
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimulationState {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player {
                pos: tuning.player_start,
                radius: tuning.player_radius(),
            },
            enemies: Vec::new(),
            score: 0,
            time_ticks: 0,
        }
    }

    /// Move the player one tick along `move_vec`, keeping the whole circle on screen
    pub fn advance_player(&mut self, move_vec: IVec2, viewport: Viewport, speed: f32) {
        let target = self.player.pos + move_vec.as_vec2() * speed;
        self.player.pos = viewport.clamp_circle(target, self.player.radius);
    }

    /// Spawn one enemy on a random edge. Returns `None` on a degenerate viewport.
    pub fn spawn_enemy(&mut self, viewport: Viewport) -> Option<EnemyId> {
        if viewport.is_degenerate() {
            return None;
        }
        let direction = Direction::ALL[self.rng.random_range(0..Direction::ALL.len())];
        self.spawn_enemy_heading(direction, viewport)
    }

    /// Spawn one enemy travelling in `direction`. Returns `None` on a degenerate viewport.
    pub fn spawn_enemy_heading(
        &mut self,
        direction: Direction,
        viewport: Viewport,
    ) -> Option<EnemyId> {
        if viewport.is_degenerate() {
            return None;
        }
        let t: f32 = self.rng.random();
        let pos = Enemy::spawn_position(direction, viewport, t);
        let id = EnemyId::generate(&mut self.rng);
        log::debug!("spawn enemy {id} at ({:.1}, {:.1}) heading {direction:?}", pos.x, pos.y);
        self.enemies.push(Enemy { id, pos, direction });
        Some(id)
    }

    /// Move every enemy one tick; drop and score the ones that leave the viewport.
    ///
    /// Returns how many enemies were culled.
    pub fn advance_enemies(&mut self, viewport: Viewport, speed: f32) -> u32 {
        let before = self.enemies.len();
        self.enemies.retain_mut(|enemy| {
            let next = enemy.pos + enemy.direction.enemy_heading() * speed;
            if viewport.contains(next) {
                enemy.pos = next;
                true
            } else {
                log::debug!("cull enemy {}", enemy.id);
                false
            }
        });
        let culled = (before - self.enemies.len()) as u32;
        self.score += u64::from(culled);
        culled
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VP: Viewport = Viewport::new(900.0, 900.0);

    fn state() -> SimulationState {
        SimulationState::new(42, &Tuning::default())
    }

    #[test]
    fn test_initial_state() {
        let s = state();
        assert_eq!(s.player.pos, Vec2::new(50.0, 50.0));
        assert_eq!(s.player.radius, 25.0);
        assert!(s.enemies.is_empty());
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_player_moves_right() {
        let mut s = state();
        s.advance_player(IVec2::new(1, 0), VP, 2.0);
        assert_eq!(s.player.pos, Vec2::new(52.0, 50.0));
    }

    #[test]
    fn test_player_zero_vector_stays_put() {
        let mut s = state();
        s.player.pos = Vec2::new(123.5, 456.25);
        s.advance_player(IVec2::ZERO, VP, 2.0);
        assert_eq!(s.player.pos, Vec2::new(123.5, 456.25));
    }

    #[test]
    fn test_player_clamped_at_edge() {
        let mut s = state();
        s.player.pos = Vec2::new(26.0, 874.0);
        s.advance_player(IVec2::new(-1, 1), VP, 2.0);
        assert_eq!(s.player.pos, Vec2::new(25.0, 875.0));
    }

    #[test]
    fn test_spawn_edges_per_direction() {
        let mut s = state();
        for _ in 0..50 {
            let id = s.spawn_enemy_heading(Direction::Right, VP).unwrap();
            let e = s.enemy(id).copied().unwrap();
            assert_eq!(e.pos.x, 0.0);
            assert!((0.0..900.0).contains(&e.pos.y));

            let id = s.spawn_enemy_heading(Direction::Left, VP).unwrap();
            let e = s.enemy(id).copied().unwrap();
            assert_eq!(e.pos.x, 900.0);
            assert!((0.0..900.0).contains(&e.pos.y));

            let id = s.spawn_enemy_heading(Direction::Up, VP).unwrap();
            let e = s.enemy(id).copied().unwrap();
            assert_eq!(e.pos.y, 0.0);
            assert!((0.0..900.0).contains(&e.pos.x));

            let id = s.spawn_enemy_heading(Direction::Down, VP).unwrap();
            let e = s.enemy(id).copied().unwrap();
            assert_eq!(e.pos.y, 900.0);
            assert!((0.0..900.0).contains(&e.pos.x));
        }
    }

    #[test]
    fn test_spawn_spreads_along_edge() {
        let mut s = state();
        let ys: Vec<f32> = (0..400)
            .map(|_| {
                let id = s.spawn_enemy_heading(Direction::Right, VP).unwrap();
                s.enemy(id).unwrap().pos.y
            })
            .collect();
        let low = ys.iter().filter(|&&y| y < 450.0).count();
        // Roughly half in each half of the edge
        assert!((120..280).contains(&low), "low half count {low}");
    }

    #[test]
    fn test_spawn_picks_all_directions() {
        let mut s = state();
        for _ in 0..200 {
            s.spawn_enemy(VP);
        }
        for dir in Direction::ALL {
            assert!(s.enemies.iter().any(|e| e.direction == dir), "{dir:?} never spawned");
        }
    }

    #[test]
    fn test_spawn_ids_unique() {
        let mut s = state();
        for _ in 0..500 {
            s.spawn_enemy(VP);
        }
        let mut ids: Vec<_> = s.enemies.iter().map(|e| e.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_spawn_degenerate_viewport() {
        let mut s = state();
        assert_eq!(s.spawn_enemy(Viewport::new(0.0, 900.0)), None);
        assert_eq!(s.spawn_enemy(Viewport::new(900.0, f32::NAN)), None);
        assert!(s.enemies.is_empty());
    }

    #[test]
    fn test_directed_spawn_degenerate_viewport() {
        let mut s = state();
        let nan_height = Viewport::new(900.0, f32::NAN);
        assert_eq!(s.spawn_enemy_heading(Direction::Right, nan_height), None);
        assert_eq!(s.spawn_enemy_heading(Direction::Left, Viewport::new(0.0, 0.0)), None);
        assert_eq!(s.spawn_enemy_heading(Direction::Up, Viewport::new(-10.0, 900.0)), None);
        assert!(s.enemies.is_empty());

        // Nothing to cull once the viewport is valid again
        assert_eq!(s.advance_enemies(VP, 5.0), 0);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn test_enemy_ids_are_v4_uuids() {
        let mut s = state();
        let id = s.spawn_enemy_heading(Direction::Up, VP).unwrap();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        // Version nibble of a random (v4) UUID
        assert_eq!(text.as_bytes()[14], b'4');
    }

    #[test]
    fn test_enemy_leaving_right_edge_is_culled() {
        let mut s = state();
        let id = s.spawn_enemy_heading(Direction::Right, VP).unwrap();
        s.enemies[0].pos.x = 899.0;

        let culled = s.advance_enemies(VP, 5.0);
        assert_eq!(culled, 1);
        assert_eq!(s.score, 1);
        assert!(s.enemy(id).is_none());
    }

    #[test]
    fn test_down_enemy_crosses_whole_viewport() {
        let mut s = state();
        s.spawn_enemy_heading(Direction::Down, VP);
        assert_eq!(s.enemies[0].pos.y, 900.0);

        s.advance_enemies(VP, 5.0);
        assert_eq!(s.enemies.len(), 1);
        assert_eq!(s.enemies[0].pos.y, 895.0);

        // 900 / 5 = 180 steps reach y = 0 exactly; one more leaves
        for _ in 1..180 {
            assert_eq!(s.advance_enemies(VP, 5.0), 0);
        }
        assert_eq!(s.enemies[0].pos.y, 0.0);
        assert_eq!(s.advance_enemies(VP, 5.0), 1);
        assert_eq!(s.score, 1);
        assert!(s.enemies.is_empty());
    }

    #[test]
    fn test_survivors_keep_order_and_move() {
        let mut s = state();
        let a = s.spawn_enemy_heading(Direction::Right, VP).unwrap();
        let b = s.spawn_enemy_heading(Direction::Left, VP).unwrap();
        let c = s.spawn_enemy_heading(Direction::Up, VP).unwrap();
        s.enemies[1].pos.x = 2.0; // b is about to leave

        assert_eq!(s.advance_enemies(VP, 5.0), 1);
        let ids: Vec<_> = s.enemies.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert_eq!(s.enemy(a).unwrap().pos.x, 5.0);
        assert_eq!(s.enemy(c).unwrap().pos.y, 5.0);
        assert!(s.enemy(b).is_none());
    }

    #[test]
    fn test_seed_reproducible() {
        let mut a = state();
        let mut b = state();
        for _ in 0..20 {
            a.spawn_enemy(VP);
            b.spawn_enemy(VP);
        }
        assert_eq!(a.enemies, b.enemies);
    }

    proptest! {
        #[test]
        fn player_stays_in_bounds(
            x in -2000.0f32..2000.0,
            y in -2000.0f32..2000.0,
            dx in -1i32..=1,
            dy in -1i32..=1,
            w in 50.0f32..2000.0,
            h in 50.0f32..2000.0,
        ) {
            let mut s = state();
            s.player.pos = Vec2::new(x, y);
            let vp = Viewport::new(w, h);
            s.advance_player(IVec2::new(dx, dy), vp, 2.0);
            let r = s.player.radius;
            prop_assert!(s.player.pos.x >= r && s.player.pos.x <= w - r);
            prop_assert!(s.player.pos.y >= r && s.player.pos.y <= h - r);
        }

        #[test]
        fn score_never_decreases(seed in any::<u64>(), ticks in 1usize..400) {
            let mut s = SimulationState::new(seed, &Tuning::default());
            let mut last = 0;
            for i in 0..ticks {
                if i % 7 == 0 {
                    s.spawn_enemy(VP);
                }
                s.advance_enemies(VP, 5.0);
                prop_assert!(s.score >= last);
                last = s.score;
            }
        }
    }
}
