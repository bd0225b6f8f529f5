use super::*;

/// Rectangle size of entities that have no sprite.
pub const DEFAULT_SIZE: vec2<Coord> = vec2(8, 8);

#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub body: Body,
    /// Degrees in `[0, 360)`.
    pub angle: f32,
    pub speed: f32,
    pub sprites: SpriteSet,
    /// Whether other entities bump into this one.
    pub solid: bool,
    pub life: Life,
    pub health: Option<Health>,
    pub emitter: Option<ParticleEmitter>,
    pub gravity: Option<Gravity>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Life {
    Alive,
    /// Dead, but still waiting for its particles to settle.
    Dying,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Player {
        /// Ticks until the next shot is allowed.
        cool_down: i32,
        attack_strength: Hp,
    },
    Follower {
        target: Id,
        attack_strength: Hp,
    },
    Bullet {
        owner: Id,
        velocity: vec2<f32>,
        strength: Hp,
    },
    Wall,
    Floor,
    Prop,
}

/// What running into another entity does to both of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reaction {
    pub resolution: Resolution,
    /// Damage dealt to the entity that was run into.
    pub damage: Hp,
    /// Whether the mover is used up by the contact.
    pub despawn: bool,
}

impl Reaction {
    pub const BLOCK: Self = Self {
        resolution: Resolution::PushOut,
        damage: 0,
        despawn: false,
    };
    pub const IGNORE: Self = Self {
        resolution: Resolution::PassThrough,
        damage: 0,
        despawn: false,
    };
}

impl EntityKind {
    /// React to running into `other`.
    pub fn on_contact(&self, other: Id) -> Reaction {
        match *self {
            Self::Follower {
                target,
                attack_strength,
            } if other == target => Reaction {
                damage: attack_strength,
                ..Reaction::BLOCK
            },
            Self::Bullet {
                owner, strength, ..
            } if other != owner => Reaction {
                damage: strength,
                despawn: true,
                ..Reaction::IGNORE
            },
            Self::Bullet { .. } => Reaction::IGNORE,
            _ => Reaction::BLOCK,
        }
    }
}

impl Entity {
    pub fn new(kind: EntityKind, position: vec2<Coord>, sprites: Option<SpriteSet>) -> Self {
        let sprites = sprites.unwrap_or_default();
        let size = sprites
            .get(SpriteState::Base)
            .map_or(DEFAULT_SIZE, |sprite| sprite.size);
        Self {
            kind,
            body: Body::new(rect_at(position, size)),
            angle: 0.0,
            speed: 1.0,
            sprites,
            solid: true,
            life: Life::Alive,
            health: None,
            emitter: None,
            gravity: None,
        }
    }

    pub fn with_speed(self, speed: f32) -> Self {
        Self { speed, ..self }
    }

    pub fn with_solid(self, solid: bool) -> Self {
        Self { solid, ..self }
    }

    pub fn with_health(self, health: Health) -> Self {
        Self {
            health: Some(health),
            ..self
        }
    }

    pub fn with_emitter(self, emitter: ParticleEmitter) -> Self {
        Self {
            emitter: Some(emitter),
            ..self
        }
    }

    pub fn with_gravity(self, gravity: Gravity) -> Self {
        Self {
            gravity: Some(gravity),
            ..self
        }
    }

    pub fn rect(&self) -> Aabb2<Coord> {
        self.body.rect
    }

    pub fn is_alive(&self) -> bool {
        self.life == Life::Alive
    }

    /// Alive entities that others collide with.
    pub fn is_solid(&self) -> bool {
        self.solid && self.is_alive()
    }

    /// Dead with nothing left to show.
    pub fn is_finished(&self) -> bool {
        let dead = self.health.as_ref().is_some_and(Health::is_dead);
        dead && self.emitter.as_ref().map_or(true, ParticleEmitter::is_empty)
    }

    /// Turn to `angle` degrees, keeping the rectangle centered where it was.
    pub fn rotate(&mut self, angle: f32) {
        let angle = angle.rem_euclid(360.0);
        // Tiny negative angles round up to exactly 360
        self.angle = if angle >= 360.0 { 0.0 } else { angle };
        let Some(sprite) = self.sprites.get(SpriteState::NoRotation) else {
            return;
        };
        let size = sprite.rotated_size(self.angle);
        self.body.rect.resize_centered(size);
        self.sprites.assign(SpriteState::Current, SpriteState::NoRotation);
    }

    /// Turn to face a point, `0` meaning up and angles growing
    /// counter-clockwise on screen.
    pub fn rotate_towards(&mut self, point: vec2<f32>) {
        let center = self.body.rect.pixel_center().map(|x| x as f32);
        let vec2(dx, dy) = center - point;
        let theta = if dx == 0.0 && dy == 0.0 {
            0.0
        } else {
            -dy.atan2(dx).to_degrees() + 90.0
        };
        self.rotate(theta);
    }

    /// Velocity that brings this entity closer to `target` at its own speed.
    pub fn heading_to(&self, target: Aabb2<Coord>) -> Option<vec2<f32>> {
        let delta = (target.pixel_center() - self.body.rect.pixel_center()).map(|x| x as f32);
        let distance = delta.x.hypot(delta.y);
        if distance == 0.0 {
            return None;
        }
        Some(delta / distance * self.speed)
    }

    /// Take damage: flash, spill particles, and start dying when out of
    /// health. Entities without health ignore damage.
    ///
    /// Returns the number of particles spilled.
    pub fn damage<R: Rng + ?Sized>(&mut self, amount: Hp, rng: &mut R) -> Option<usize> {
        let health = self.health.as_mut()?;
        health.hit(amount);
        let dead = health.is_dead();

        // Sprites without a hurt variant keep their look
        if self.sprites.assign(SpriteState::NoRotation, SpriteState::Hurt) {
            self.rotate(self.angle);
        }

        if dead && self.is_alive() {
            log::debug!("{:?} died", self.kind);
            self.life = Life::Dying;
        }

        let origin = self.body.rect.min;
        Some(
            self.emitter
                .as_mut()
                .map_or(0, |emitter| emitter.burst(rng, origin, dead)),
        )
    }

    /// Advance the hurt flash and the particles, dead or alive.
    pub fn update_effects(
        &mut self,
        obstacles: &[Obstacle],
        canvas: &mut impl Canvas,
        camera: &Camera,
    ) {
        let flash_ended = self.health.as_mut().is_some_and(Health::tick);
        if flash_ended {
            self.sprites.assign(SpriteState::NoRotation, SpriteState::Base);
            self.rotate(self.angle);
        }
        if let Some(emitter) = &mut self.emitter {
            emitter.update(obstacles, canvas, camera);
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas, camera: &Camera) {
        if !self.is_alive() {
            return;
        }
        if let Some(sprite) = self.sprites.get(SpriteState::Current) {
            canvas.blit(sprite, camera.apply(self.body.rect), self.angle);
        }
    }
}
