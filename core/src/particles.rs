use alloc::collections::VecDeque;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::types::{ColorTag, Symbol, Tick};

/// A short-lived decorative element. Horizontal position and drift are in
/// normalized viewport units (0..100); the motion curve itself is the
/// presentation layer's business.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub x: f32,
    pub drift: f32,
    pub rotation: f32,
    pub scale: f32,
    pub color: ColorTag,
    pub symbol: Symbol,
    pub spawned_at: Tick,
    pub lifetime: Tick,
}

impl Particle {
    pub const fn age(&self, now: Tick) -> Tick {
        now.saturating_sub(self.spawned_at)
    }

    pub const fn is_expired(&self, now: Tick) -> bool {
        self.age(now) >= self.lifetime
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleFieldConfig {
    /// Hard cap on live particles; oldest dropped first past this.
    pub cap: usize,
    /// Particles created per spawn call.
    pub batch: usize,
    pub min_lifetime: Tick,
    pub max_lifetime: Tick,
    /// Maximum sideways wander, in viewport units either direction.
    pub drift_span: f32,
}

impl ParticleFieldConfig {
    pub const fn confetti() -> Self {
        Self {
            cap: 30,
            batch: 3,
            min_lifetime: 40,
            max_lifetime: 60,
            drift_span: 4.0,
        }
    }

    pub const fn floating() -> Self {
        Self {
            cap: 15,
            batch: 2,
            min_lifetime: 30,
            max_lifetime: 70,
            drift_span: 10.0,
        }
    }
}

impl Default for ParticleFieldConfig {
    fn default() -> Self {
        Self::confetti()
    }
}

/// The live particle set: spawning, expiry, and the memory bound. Time is an
/// abstract tick counter owned by the caller, so the field stays clock-free
/// and deterministic under a seeded rng.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleField {
    config: ParticleFieldConfig,
    particles: VecDeque<Particle>,
    next_id: u32,
}

impl ParticleField {
    pub fn new(config: ParticleFieldConfig) -> Self {
        Self {
            config,
            particles: VecDeque::new(),
            next_id: 0,
        }
    }

    pub fn config(&self) -> &ParticleFieldConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Spawns one batch of randomized particles, evicting the oldest ones
    /// when the cap would be exceeded.
    pub fn spawn_batch<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Tick) {
        for _ in 0..self.config.batch {
            let particle = Particle {
                id: self.next_id,
                x: rng.random_range(0.0..100.0),
                drift: rng.random_range(-self.config.drift_span..=self.config.drift_span),
                rotation: rng.random_range(0.0..360.0),
                scale: rng.random_range(0.5..=1.0),
                color: *ColorTag::ALL.choose(rng).unwrap(),
                symbol: *Symbol::ALL.choose(rng).unwrap(),
                spawned_at: now,
                lifetime: rng.random_range(self.config.min_lifetime..=self.config.max_lifetime),
            };
            self.next_id = self.next_id.wrapping_add(1);

            while self.particles.len() >= self.config.cap {
                self.particles.pop_front();
            }
            self.particles.push_back(particle);
        }
    }

    /// Drops every particle whose lifetime has elapsed; returns how many went.
    pub fn prune(&mut self, now: Tick) -> usize {
        let before = self.particles.len();
        self.particles.retain(|particle| !particle.is_expired(now));
        before - self.particles.len()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn spawn_respects_the_cap() {
        let config = ParticleFieldConfig::confetti();
        let mut field = ParticleField::new(config);
        let mut rng = rng();

        for now in 0..100 {
            field.spawn_batch(&mut rng, now);
            assert!(field.len() <= config.cap);
        }
        assert_eq!(field.len(), config.cap);
    }

    #[test]
    fn cap_evicts_oldest_first() {
        let config = ParticleFieldConfig {
            cap: 2,
            batch: 1,
            ..ParticleFieldConfig::confetti()
        };
        let mut field = ParticleField::new(config);
        let mut rng = rng();

        field.spawn_batch(&mut rng, 0);
        field.spawn_batch(&mut rng, 1);
        field.spawn_batch(&mut rng, 2);

        let spawn_times: alloc::vec::Vec<Tick> =
            field.iter().map(|particle| particle.spawned_at).collect();
        assert_eq!(spawn_times, [1, 2]);
    }

    #[test]
    fn prune_drops_expired_particles() {
        let config = ParticleFieldConfig {
            min_lifetime: 5,
            max_lifetime: 5,
            ..ParticleFieldConfig::confetti()
        };
        let mut field = ParticleField::new(config);
        let mut rng = rng();

        field.spawn_batch(&mut rng, 0);
        assert_eq!(field.prune(4), 0);
        assert_eq!(field.prune(5), config.batch);
        assert!(field.is_empty());
    }

    #[test]
    fn particle_ids_are_unique_within_the_field() {
        let mut field = ParticleField::new(ParticleFieldConfig::confetti());
        let mut rng = rng();

        for now in 0..10 {
            field.spawn_batch(&mut rng, now);
        }

        let mut ids: alloc::vec::Vec<u32> = field.iter().map(|particle| particle.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), field.len());
    }

    #[test]
    fn same_seed_spawns_the_same_particles() {
        let mut a = ParticleField::new(ParticleFieldConfig::confetti());
        let mut b = ParticleField::new(ParticleFieldConfig::confetti());

        a.spawn_batch(&mut rng(), 0);
        b.spawn_batch(&mut rng(), 0);

        assert_eq!(a, b);
    }
}
