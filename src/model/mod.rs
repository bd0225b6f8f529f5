mod body;
mod camera;
mod canvas;
mod entity;
mod health;
mod level;
mod logic;
mod particle;
mod physics;
mod rect;
mod sprite;
mod spritesheet;

pub use self::{
    body::*, camera::*, canvas::*, entity::*, health::*, level::*, logic::*, particle::*,
    physics::*, rect::*, sprite::*, spritesheet::*,
};

use crate::prelude::*;

pub type Coord = i32;

/// Everything that lives in the game, updated one frame at a time.
pub struct World {
    pub config: Config,
    pub entities: Arena<Entity>,
    /// The entity steered by input and followed by the camera.
    pub player: Option<Id>,
    pub camera: Camera,
    /// The playing area. Bullets leaving it are dropped.
    pub bounds: Aabb2<Coord>,
    pub bullet_sprite: Option<Sprite>,
    /// Number of ticks so far.
    pub frame: u64,
    rng: StdRng,
}

impl World {
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// A world with reproducible randomness.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        Self {
            camera: Camera::simple(config.view_size),
            bounds: rect_at(vec2(0, 0), config.view_size),
            config,
            entities: Arena::new(),
            player: None,
            bullet_sprite: None,
            frame: 0,
            rng,
        }
    }

    pub fn spawn(&mut self, entity: Entity) -> Id {
        let kind = format!("{:?}", entity.kind);
        let id = self.entities.insert(entity);
        log::debug!("Spawned {} as {:?}", kind, id);
        id
    }

    /// Give an entity health and a particle emitter.
    fn make_living(&self, entity: Entity, health: Hp, hurt_time: i32) -> Entity {
        let living = &self.config.living;
        entity
            .with_health(Health::new(health, hurt_time))
            .with_emitter(ParticleEmitter::new(living.blood, living.particle.clone()))
    }

    pub fn spawn_player(&mut self, position: vec2<Coord>, sprites: SpriteSet) -> Id {
        let config = &self.config.player;
        let entity = Entity::new(
            EntityKind::Player {
                cool_down: 0,
                attack_strength: config.attack_strength,
            },
            position,
            Some(sprites),
        )
        .with_speed(config.speed);
        let entity = self.make_living(entity, config.health, config.hurt_time);
        let id = self.spawn(entity);
        self.player = Some(id);
        id
    }

    pub fn spawn_follower(
        &mut self,
        position: vec2<Coord>,
        sprites: SpriteSet,
        target: Id,
    ) -> Id {
        let config = &self.config.follower;
        let entity = Entity::new(
            EntityKind::Follower {
                target,
                attack_strength: config.attack_strength,
            },
            position,
            Some(sprites),
        )
        .with_speed(config.speed);
        let entity = self.make_living(entity, config.health, self.config.living.hurt_time);
        self.spawn(entity)
    }

    /// Spawn something that can be hurt, with the shared living defaults.
    pub fn spawn_living(
        &mut self,
        kind: EntityKind,
        position: vec2<Coord>,
        sprites: Option<SpriteSet>,
    ) -> Id {
        let living = &self.config.living;
        let entity = Entity::new(kind, position, sprites);
        let entity = self.make_living(entity, living.health, living.hurt_time);
        self.spawn(entity)
    }

    /// Make an entity fall with the configured gravity.
    pub fn enable_gravity(&mut self, id: Id) -> bool {
        let grav = self.config.gravity;
        match self.entities.get_mut(id) {
            Some(entity) => {
                entity.gravity = Some(Gravity::new(grav));
                true
            }
            None => false,
        }
    }

    pub fn spawn_wall(&mut self, position: vec2<Coord>, sprite: Sprite) -> Id {
        let entity = Entity::new(EntityKind::Wall, position, Some(SpriteSet::new(sprite, None)));
        self.entities.insert(entity)
    }

    pub fn spawn_floor(&mut self, position: vec2<Coord>, sprite: Sprite) -> Id {
        let entity = Entity::new(EntityKind::Floor, position, Some(SpriteSet::new(sprite, None)))
            .with_solid(false);
        self.entities.insert(entity)
    }

    /// Hurt an entity. Returns the number of particles spilled, or `None`
    /// if there is no such entity or it cannot be hurt.
    pub fn damage(&mut self, id: Id, amount: Hp) -> Option<usize> {
        let entity = self.entities.get_mut(id)?;
        entity.damage(amount, &mut self.rng)
    }

    /// Everything alive that blocks movement, in arena order.
    pub fn obstacles(&self) -> Vec<Obstacle> {
        self.entities
            .iter()
            .filter(|(_, entity)| entity.is_solid())
            .map(|(id, entity)| Obstacle {
                id,
                rect: entity.rect(),
            })
            .collect()
    }

    /// Blit every living entity, shifted by the camera.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        for (_, entity) in &self.entities {
            entity.draw(canvas, &self.camera);
        }
    }
}
