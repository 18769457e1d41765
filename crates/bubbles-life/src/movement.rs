//! Movement kinematics for marine life.
//!
//! Each creature owns a [`MovementState`] that the host advances once per
//! tick with `advance(dt)`. The state machine is explicit (origin, angle,
//! elapsed time, patrol direction); there is no suspended coroutine hiding
//! in here, and the same dt sequence always reproduces the same path.

use crate::species::MovementPattern;
use bubbles_common::WorldPos;
use noise::{NoiseFn, Perlin};

/// Pulse frequency used when a species pulses (jellyfish tuning).
const PULSE_FREQUENCY: f32 = 1.5;
/// Pulse amplitude used when a species pulses.
const PULSE_AMPLITUDE: f32 = 0.2;
/// Horizontal span of a patrol sweep in world units.
const PATROL_SPAN: f32 = 8.0;
/// Distance at which a patrol target counts as reached.
const PATROL_ARRIVAL: f32 = 0.1;

/// Per-creature movement state, advanced by the host each tick.
pub struct MovementState {
    pattern: MovementPattern,
    origin: WorldPos,
    position: WorldPos,
    angle: f32,
    elapsed: f32,
    patrol_direction: f32,
    move_speed: f32,
    move_radius: f32,
    scale_multiplier: f32,
    hover_noise: Perlin,
}

impl MovementState {
    /// Creates movement state for a freshly spawned creature.
    ///
    /// The starting phase angle and the hover noise seed are drawn from
    /// `rng` so creatures of the same species don't move in lockstep.
    #[must_use]
    pub fn spawn(
        pattern: MovementPattern,
        origin: WorldPos,
        move_speed: f32,
        move_radius: f32,
        rng: &mut fastrand::Rng,
    ) -> Self {
        Self {
            pattern,
            origin,
            position: origin,
            angle: rng.f32() * 360.0,
            elapsed: 0.0,
            patrol_direction: 1.0,
            move_speed,
            move_radius,
            scale_multiplier: 1.0,
            hover_noise: Perlin::new(rng.u32(..)),
        }
    }

    /// The creature's movement pattern.
    #[must_use]
    pub fn pattern(&self) -> MovementPattern {
        self.pattern
    }

    /// The spawn point the creature moves around.
    #[must_use]
    pub fn origin(&self) -> WorldPos {
        self.origin
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> WorldPos {
        self.position
    }

    /// Current scale multiplier (pulsing creatures breathe around 1.0).
    #[must_use]
    pub fn scale_multiplier(&self) -> f32 {
        self.scale_multiplier
    }

    /// Advances the state by `dt` seconds and returns the new position.
    pub fn advance(&mut self, dt: f32) -> WorldPos {
        match self.pattern {
            MovementPattern::Circular => self.advance_circular(dt),
            MovementPattern::Pulse => self.advance_pulse(dt),
            MovementPattern::Patrol => self.advance_patrol(dt),
            MovementPattern::Hover => self.advance_hover(dt),
            MovementPattern::Glide => self.advance_glide(dt),
            MovementPattern::Drift => self.advance_drift(dt),
        }
        self.position
    }

    fn advance_circular(&mut self, dt: f32) {
        self.angle += self.move_speed * dt;
        let rad = self.angle.to_radians();
        self.position = WorldPos::new(
            self.origin.x + rad.cos() * self.move_radius,
            self.origin.y + rad.sin() * self.move_radius,
        );
    }

    fn advance_pulse(&mut self, dt: f32) {
        self.elapsed += dt;
        let pulse = (self.elapsed * PULSE_FREQUENCY).sin() * PULSE_AMPLITUDE;
        self.scale_multiplier = 1.0 + pulse * 0.2;

        // Gentle upward drift with sideways sway.
        let drift_x = (self.elapsed * 0.5).sin() * 0.5 * self.move_speed * dt;
        let drift_y = (pulse + 0.5) * self.move_speed * dt;
        self.position = WorldPos::new(self.position.x + drift_x, self.position.y + drift_y);

        // Snap back once the drift carries the creature too far out.
        if self.position.distance(self.origin) > self.move_radius {
            self.position = self.origin;
        }
    }

    fn advance_patrol(&mut self, dt: f32) {
        let target = WorldPos::new(
            self.origin.x + PATROL_SPAN * self.patrol_direction,
            self.origin.y,
        );
        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < PATROL_ARRIVAL {
            self.patrol_direction = -self.patrol_direction;
            return;
        }
        let step = (self.move_speed * dt).min(dist);
        self.position = WorldPos::new(
            self.position.x + dx / dist * step,
            self.position.y + dy / dist * step,
        );
    }

    fn advance_hover(&mut self, dt: f32) {
        self.elapsed += dt;
        let t = f64::from(self.elapsed) * 0.5;
        let wobble_x = self.hover_noise.get([t, 0.0]) as f32 * 0.5;
        let wobble_y = self.hover_noise.get([0.0, t]) as f32 * 0.5;
        self.position = WorldPos::new(
            self.origin.x + wobble_x * self.move_radius,
            self.origin.y + wobble_y * self.move_radius,
        );
    }

    fn advance_glide(&mut self, dt: f32) {
        self.angle += self.move_speed * dt;
        let rad = self.angle.to_radians();
        self.position = WorldPos::new(
            self.origin.x + (rad * 0.5).cos() * self.move_radius,
            self.origin.y + rad.sin() * 0.5 * self.move_radius,
        );
    }

    fn advance_drift(&mut self, dt: f32) {
        self.angle += self.move_speed * 0.5 * dt;
        let rad = self.angle.to_radians();
        self.position = WorldPos::new(
            self.origin.x + (rad * 0.3).cos() * self.move_radius,
            self.origin.y + (rad * 0.2).sin() * self.move_radius,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(pattern: MovementPattern, speed: f32, radius: f32) -> MovementState {
        let mut rng = fastrand::Rng::with_seed(99);
        MovementState::spawn(pattern, WorldPos::new(10.0, -5.0), speed, radius, &mut rng)
    }

    #[test]
    fn test_circular_stays_on_radius() {
        let mut m = state(MovementPattern::Circular, 90.0, 3.0);
        for _ in 0..100 {
            let pos = m.advance(0.016);
            assert!((pos.distance(m.origin()) - 3.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_patrol_reverses_at_extent() {
        let mut m = state(MovementPattern::Patrol, 100.0, 4.0);
        let mut seen_left_of_origin = false;
        for _ in 0..2_000 {
            let pos = m.advance(0.016);
            // Patrol never strays vertically.
            assert!((pos.y - m.origin().y).abs() < 1e-3);
            if pos.x < m.origin().x - 1.0 {
                seen_left_of_origin = true;
            }
            assert!(pos.x <= m.origin().x + PATROL_SPAN + 1e-3);
            assert!(pos.x >= m.origin().x - PATROL_SPAN - 1e-3);
        }
        assert!(seen_left_of_origin, "patrol should have flipped direction");
    }

    #[test]
    fn test_pulse_scale_oscillates_around_one() {
        let mut m = state(MovementPattern::Pulse, 1.0, 2.0);
        let mut min_scale = f32::MAX;
        let mut max_scale = f32::MIN;
        for _ in 0..500 {
            m.advance(0.016);
            min_scale = min_scale.min(m.scale_multiplier());
            max_scale = max_scale.max(m.scale_multiplier());
        }
        assert!(min_scale < 1.0 && max_scale > 1.0);
        assert!(min_scale >= 1.0 - PULSE_AMPLITUDE * 0.2 - 1e-3);
        assert!(max_scale <= 1.0 + PULSE_AMPLITUDE * 0.2 + 1e-3);
    }

    #[test]
    fn test_pulse_resets_when_out_of_radius() {
        let mut m = state(MovementPattern::Pulse, 5.0, 2.0);
        for _ in 0..2_000 {
            let pos = m.advance(0.016);
            assert!(pos.distance(m.origin()) <= 2.0 + 1e-3);
        }
    }

    #[test]
    fn test_hover_stays_near_origin() {
        let mut m = state(MovementPattern::Hover, 1.0, 2.0);
        for _ in 0..200 {
            let pos = m.advance(0.016);
            assert!(pos.distance(m.origin()) <= 2.0);
        }
    }

    #[test]
    fn test_advance_is_deterministic() {
        let mut rng1 = fastrand::Rng::with_seed(5);
        let mut rng2 = fastrand::Rng::with_seed(5);
        let origin = WorldPos::new(0.0, 0.0);
        let mut a = MovementState::spawn(MovementPattern::Glide, origin, 3.0, 4.0, &mut rng1);
        let mut b = MovementState::spawn(MovementPattern::Glide, origin, 3.0, 4.0, &mut rng2);
        for _ in 0..100 {
            assert_eq!(a.advance(0.02), b.advance(0.02));
        }
    }
}
