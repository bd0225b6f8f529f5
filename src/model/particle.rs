use super::*;

use rand::rngs::StdRng;

/// Size of a particle rectangle, in pixels.
pub const PARTICLE_SIZE: Coord = 8;

/// A finite random walk: a random number of small random steps.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    rng: StdRng,
    steps_left: u32,
    magnitude: Coord,
}

impl RandomWalk {
    /// Walk for `max(0, randint(-magnitude, magnitude))` steps, each axis of
    /// each step drawn from `[-magnitude, magnitude]`.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, magnitude: Coord) -> Self {
        let magnitude = magnitude.abs();
        let steps = rng.gen_range(-magnitude..=magnitude).max(0);
        Self {
            rng: StdRng::seed_from_u64(rng.gen()),
            steps_left: steps as u32,
            magnitude,
        }
    }

    pub fn steps_left(&self) -> u32 {
        self.steps_left
    }
}

impl Iterator for RandomWalk {
    type Item = vec2<Coord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.steps_left == 0 {
            return None;
        }
        self.steps_left -= 1;
        let range = -self.magnitude..=self.magnitude;
        Some(vec2(
            self.rng.gen_range(range.clone()),
            self.rng.gen_range(range),
        ))
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub body: Body,
    pub color: Color,
    /// Ticks left to live.
    pub duration: i32,
    walk: RandomWalk,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(
        rng: &mut R,
        position: vec2<Coord>,
        config: &ParticleConfig,
    ) -> Self {
        let variation = config.variation as f32;
        let jitter = |rng: &mut R, channel: u8| {
            clamp(gaussian(rng, channel as f32, variation), 0, 255) as u8
        };
        let [r, g, b] = config.color;
        let color = rgb_color([jitter(rng, r), jitter(rng, g), jitter(rng, b)]);
        let duration = gaussian(rng, config.duration, variation);
        let walk = RandomWalk::new(rng, config.variation);
        Self::with_walk(position, color, duration, walk)
    }

    pub fn with_walk(
        position: vec2<Coord>,
        color: Color,
        duration: i32,
        walk: RandomWalk,
    ) -> Self {
        Self {
            body: Body::new(rect_at(position, vec2(PARTICLE_SIZE, PARTICLE_SIZE))),
            color,
            duration,
            walk,
        }
    }

    /// Drift, draw, and count down. Returns `false` once the particle is
    /// spent and should be dropped.
    pub fn update(
        &mut self,
        obstacles: &[Obstacle],
        canvas: &mut impl Canvas,
        camera: &Camera,
    ) -> bool {
        if self.duration <= 0 {
            return false;
        }
        // An exhausted walk leaves the particle where it is
        if let Some(step) = self.walk.next() {
            self.body.push(None, step.map(|x| x as f32), obstacles);
        }
        canvas.fill_rect(camera.apply(self.body.rect), self.color);
        self.duration -= 1;
        true
    }
}

/// Owns the particles a living entity sheds when hurt.
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    pub config: ParticleConfig,
    /// Mean particle count on death.
    pub blood: f32,
    /// Mean particle count on a hit that is survived.
    pub hurt_blood: f32,
    pub particles: Vec<Particle>,
}

impl ParticleEmitter {
    pub fn new(blood: f32, config: ParticleConfig) -> Self {
        Self {
            config,
            blood,
            hurt_blood: (blood / 4.0).round_ties_even(),
            particles: Vec::new(),
        }
    }

    /// Spawn a burst at `position`, bigger when `fatal`.
    /// Returns the number of particles spawned.
    pub fn burst<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        position: vec2<Coord>,
        fatal: bool,
    ) -> usize {
        let mean = if fatal { self.blood } else { self.hurt_blood };
        let count = gaussian(rng, mean, self.config.count_inverse_scale).max(0) as usize;
        let config = &self.config;
        self.particles
            .extend((0..count).map(|_| Particle::new(rng, position, config)));
        count
    }

    pub fn update(&mut self, obstacles: &[Obstacle], canvas: &mut impl Canvas, camera: &Camera) {
        self.particles
            .retain_mut(|particle| particle.update(obstacles, canvas, camera));
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
