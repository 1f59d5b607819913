//! Confetti burst emitter
//!
//! One-shot, time-bounded particle generator. `fire` opens a short emission
//! window; spawned particles then animate on their own until each exceeds
//! its lifetime, after which the emitter is inert and reusable. Attribute
//! draws come from a seeded RNG so bursts are reproducible.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{
    EMISSION_CONE_HALF_WIDTH, EMISSION_WINDOW_SECS, PARTICLE_FADE_RATE, PARTICLE_LIFETIME_SECS,
};

/// Default cap on live particles across all overlapping bursts
pub const MAX_PARTICLES: usize = 512;

/// Base confetti color (warm gold), jittered per particle
const BASE_COLOR: [f32; 3] = [1.0, 0.84, 0.31];
/// Maximum per-channel color jitter
const COLOR_JITTER: f32 = 0.18;
/// Spin magnitude bound (radians/sec, either direction)
const MAX_SPIN: f32 = 4.0;
/// Straight-down in view coordinates (+y down)
const DOWNWARD: f32 = std::f32::consts::FRAC_PI_2;

/// A particle sub-population sharing speed/scale ranges.
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    /// Spawns per second while an emission window is open
    pub rate: f32,
    pub speed: (f32, f32),
    pub scale: (f32, f32),
}

/// Three tiers of differing size and speed give the burst layered depth:
/// small/fast up front, large/slow behind.
pub const TIERS: [Tier; 3] = [
    Tier {
        rate: 28.0,
        speed: (180.0, 260.0),
        scale: (0.45, 0.7),
    },
    Tier {
        rate: 20.0,
        speed: (120.0, 200.0),
        scale: (0.7, 1.0),
    },
    Tier {
        rate: 12.0,
        speed: (80.0, 140.0),
        scale: (1.0, 1.4),
    },
];

/// A live confetti particle. Fields are the render attributes the host
/// samples at its own refresh cadence.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Position in view coordinates; y is the drop below the origin line
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    /// Angular velocity (radians/sec)
    pub spin: f32,
    pub scale: f32,
    pub alpha: f32,
    pub color: [f32; 3],
    /// Seconds since spawn
    pub age: f32,
}

/// One open emission window. Rapid re-fires overlay independent windows so
/// bursts are strictly additive.
#[derive(Debug, Clone, Copy)]
struct Emission {
    origin_x: f32,
    origin_width: f32,
    remaining: f32,
    /// Fractional spawns carried across updates, one slot per tier
    accum: [f32; 3],
}

pub struct ParticleBurstEmitter {
    rng: Pcg32,
    particles: Vec<Particle>,
    emissions: Vec<Emission>,
    max_particles: usize,
}

impl ParticleBurstEmitter {
    pub fn new(seed: u64) -> Self {
        Self::with_capacity(seed, MAX_PARTICLES)
    }

    pub fn with_capacity(seed: u64, max_particles: usize) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            particles: Vec::new(),
            emissions: Vec::new(),
            max_particles,
        }
    }

    /// Begin a burst across `[origin_x, origin_x + origin_width]`.
    ///
    /// Firing while earlier particles are still alive overlays a second
    /// population; populations do not interact.
    pub fn fire(&mut self, origin_x: f32, origin_width: f32) {
        self.emissions.push(Emission {
            origin_x,
            origin_width: origin_width.max(0.0),
            remaining: EMISSION_WINDOW_SECS,
            accum: [0.0; 3],
        });
        log::debug!("burst fired at x={origin_x} w={origin_width}");
    }

    /// Advance every emission window and live particle by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for i in 0..self.emissions.len() {
            let mut emission = self.emissions[i];
            // Spawning stops exactly at the window's edge
            let window_dt = dt.min(emission.remaining);
            for (t, tier) in TIERS.iter().enumerate() {
                emission.accum[t] += tier.rate * window_dt;
                while emission.accum[t] >= 1.0 {
                    emission.accum[t] -= 1.0;
                    let particle = self.spawn(tier, emission.origin_x, emission.origin_width);
                    self.push(particle);
                }
            }
            emission.remaining -= dt;
            self.emissions[i] = emission;
        }
        // Birth rate is 0 once the window closes
        self.emissions.retain(|e| e.remaining > 0.0);

        for p in self.particles.iter_mut() {
            p.pos += p.vel * dt;
            p.rotation += p.spin * dt;
            p.alpha = (p.alpha - PARTICLE_FADE_RATE * dt).max(0.0);
            p.age += dt;
        }
        self.particles.retain(|p| p.age < PARTICLE_LIFETIME_SECS);
    }

    /// Live particles for rendering, oldest first.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    /// True once the last particle has expired and no window is open. The
    /// emitter holds no other state and may be reused for a new `fire`.
    pub fn is_idle(&self) -> bool {
        self.particles.is_empty() && self.emissions.is_empty()
    }

    fn spawn(&mut self, tier: &Tier, origin_x: f32, origin_width: f32) -> Particle {
        let rng = &mut self.rng;
        // Bounded cone below horizontal, centered on straight-down
        let angle =
            DOWNWARD + rng.random_range(-EMISSION_CONE_HALF_WIDTH..EMISSION_CONE_HALF_WIDTH);
        let speed = rng.random_range(tier.speed.0..tier.speed.1);
        let scale = rng.random_range(tier.scale.0..tier.scale.1);
        let spin = rng.random_range(-MAX_SPIN..MAX_SPIN);
        let x = if origin_width > 0.0 {
            origin_x + rng.random_range(0.0..origin_width)
        } else {
            origin_x
        };

        let mut color = BASE_COLOR;
        for channel in color.iter_mut() {
            *channel = (*channel + rng.random_range(-COLOR_JITTER..COLOR_JITTER)).clamp(0.0, 1.0);
        }

        Particle {
            pos: Vec2::new(x, 0.0),
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            rotation: rng.random_range(0.0..std::f32::consts::TAU),
            spin,
            scale,
            alpha: 1.0,
            color,
            age: 0.0,
        }
    }

    fn push(&mut self, particle: Particle) {
        if self.max_particles == 0 {
            return;
        }
        if self.particles.len() >= self.max_particles {
            // Remove the oldest particle to make room
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn step(emitter: &mut ParticleBurstEmitter, seconds: f32) {
        let steps = (seconds / DT).round() as usize;
        for _ in 0..steps {
            emitter.update(DT);
        }
    }

    #[test]
    fn test_burst_rises_then_drains() {
        let mut emitter = ParticleBurstEmitter::new(12345);
        emitter.fire(0.0, 200.0);

        step(&mut emitter, EMISSION_WINDOW_SECS / 2.0);
        let rising = emitter.live_count();
        assert!(rising > 0);

        step(&mut emitter, EMISSION_WINDOW_SECS / 2.0);
        let peak = emitter.live_count();
        assert!(peak > rising);

        // One tick of slack for the window edge, then the population only shrinks
        emitter.update(DT);
        let mut prev = emitter.live_count();
        for _ in 0..((PARTICLE_LIFETIME_SECS / DT) as usize + 5) {
            emitter.update(DT);
            let count = emitter.live_count();
            assert!(count <= prev);
            prev = count;
        }
        assert!(emitter.is_idle());
    }

    #[test]
    fn test_no_particle_outlives_lifetime() {
        let mut emitter = ParticleBurstEmitter::new(7);
        emitter.fire(50.0, 100.0);

        for _ in 0..((PARTICLE_LIFETIME_SECS / DT) as usize * 2) {
            emitter.update(DT);
            for p in emitter.particles() {
                assert!(p.age < PARTICLE_LIFETIME_SECS);
            }
        }
    }

    #[test]
    fn test_double_fire_is_additive() {
        let mut single = ParticleBurstEmitter::new(99);
        let mut double = ParticleBurstEmitter::new(99);
        single.fire(0.0, 100.0);
        double.fire(0.0, 100.0);

        // Second fire 0.1s later on one emitter only
        for i in 0..((PARTICLE_LIFETIME_SECS / DT) as usize + 60) {
            if i == 6 {
                double.fire(0.0, 100.0);
            }
            single.update(DT);
            double.update(DT);
            assert!(double.live_count() >= single.live_count());
        }
    }

    #[test]
    fn test_seeded_bursts_reproduce() {
        let mut a = ParticleBurstEmitter::new(2024);
        let mut b = ParticleBurstEmitter::new(2024);
        a.fire(10.0, 80.0);
        b.fire(10.0, 80.0);
        step(&mut a, 0.5);
        step(&mut b, 0.5);

        assert_eq!(a.live_count(), b.live_count());
        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.rotation, pb.rotation);
            assert_eq!(pa.color, pb.color);
        }
    }

    #[test]
    fn test_attributes_within_bounds() {
        let mut emitter = ParticleBurstEmitter::new(5);
        emitter.fire(0.0, 100.0);
        step(&mut emitter, 0.2);

        let min_scale = TIERS.iter().map(|t| t.scale.0).fold(f32::MAX, f32::min);
        let max_scale = TIERS.iter().map(|t| t.scale.1).fold(f32::MIN, f32::max);
        for p in emitter.particles() {
            // Emission cone points below horizontal: downward velocity
            assert!(p.vel.y > 0.0);
            assert!(p.spin.abs() <= MAX_SPIN);
            assert!(p.scale >= min_scale && p.scale <= max_scale);
            assert!(p.alpha > 0.0 && p.alpha <= 1.0);
        }
    }

    #[test]
    fn test_population_cap_evicts_oldest() {
        let mut emitter = ParticleBurstEmitter::with_capacity(1, 8);
        emitter.fire(0.0, 100.0);
        step(&mut emitter, EMISSION_WINDOW_SECS);

        assert!(emitter.live_count() <= 8);
        // Survivors are the youngest spawns
        let oldest = emitter
            .particles()
            .iter()
            .map(|p| p.age)
            .fold(f32::MIN, f32::max);
        assert!(oldest < EMISSION_WINDOW_SECS / 2.0);
    }

    #[test]
    fn test_reusable_after_idle() {
        let mut emitter = ParticleBurstEmitter::new(3);
        emitter.fire(0.0, 50.0);
        step(&mut emitter, PARTICLE_LIFETIME_SECS + 1.0);
        assert!(emitter.is_idle());

        emitter.fire(0.0, 50.0);
        step(&mut emitter, 0.2);
        assert!(emitter.live_count() > 0);
    }
}
