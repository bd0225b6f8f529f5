mod action;
mod movement;

pub use self::action::*;

use super::*;

impl World {
    /// Run one frame: apply input, follow the player with the camera, then
    /// update every entity in arena order.
    ///
    /// Damage dealt while an entity moves is visible to the entities updated
    /// after it in the same frame. Particles are drawn onto `canvas` as they
    /// update, so call [`World::draw`] first.
    pub fn tick(&mut self, input: &FrameInput, canvas: &mut impl Canvas) {
        self.frame += 1;
        self.player_action(input);

        if let Some(target) = self.player.and_then(|id| self.entities.get(id)) {
            let target = target.rect();
            self.camera.update(target);
        }

        let ids: Vec<Id> = self.entities.iter().map(|(id, _)| id).collect();
        for id in ids {
            self.update_entity(id, canvas);
        }
    }

    fn update_entity(&mut self, id: Id, canvas: &mut impl Canvas) {
        let obstacles = self.obstacles();
        let Some(entity) = self.entities.get_mut(id) else {
            // Despawned earlier this frame
            return;
        };

        entity.update_effects(&obstacles, canvas, &self.camera);
        if entity.is_finished() {
            log::debug!("Removing {:?}", entity.kind);
            self.entities.remove(id);
            if self.player == Some(id) {
                self.player = None;
            }
            return;
        }
        if !entity.is_alive() {
            return;
        }

        match entity.kind.clone() {
            EntityKind::Player { .. } => self.cool_down(id),
            EntityKind::Follower { target, .. } => self.follow(id, target),
            EntityKind::Bullet { velocity, .. } => self.fly(id, velocity),
            EntityKind::Wall | EntityKind::Floor | EntityKind::Prop => {}
        }
        self.fall(id);
    }

    fn cool_down(&mut self, id: Id) {
        if let Some(Entity {
            kind: EntityKind::Player { cool_down, .. },
            ..
        }) = self.entities.get_mut(id)
        {
            if *cool_down >= 0 {
                *cool_down -= 1;
            }
        }
    }

    fn follow(&mut self, id: Id, target: Id) {
        let Some(target) = self
            .entities
            .get(target)
            .filter(|target| target.is_alive())
            .map(Entity::rect)
        else {
            return;
        };
        let heading = self
            .entities
            .get(id)
            .and_then(|entity| entity.heading_to(target));
        if let Some(velocity) = heading {
            self.move_entity(id, velocity);
        }
    }

    fn fly(&mut self, id: Id, velocity: vec2<f32>) {
        self.move_entity(id, velocity);
        let gone = self
            .entities
            .get(id)
            .is_some_and(|bullet| bullet.rect().is_outside(&self.bounds));
        if gone {
            log::debug!("Bullet {:?} left the level", id);
            self.entities.remove(id);
        }
    }

    fn fall(&mut self, id: Id) {
        let obstacles = self.obstacles();
        let (frame, fps) = (self.frame, self.config.fps);
        let Some(entity) = self.entities.get_mut(id) else {
            return;
        };
        let Some(gravity) = &mut entity.gravity else {
            return;
        };
        gravity.update(&entity.body, Some(id), &obstacles, frame, fps);
        let y_vel = gravity.y_vel;
        if y_vel != 0.0 {
            self.move_entity(id, vec2(0.0, y_vel));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprites(key: &str, size: Coord) -> SpriteSet {
        SpriteSet::new(
            Sprite::new(key, vec2(size, size)),
            Some(Sprite::new(format!("{}-hurt", key), vec2(size, size))),
        )
    }

    fn world() -> World {
        World::with_seed(Config::default(), 42)
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    #[test]
    fn test_follower_closes_in_and_bites() {
        let mut world = world();
        let player = world.spawn_player(vec2(200, 100), sprites("player", 32));
        let follower = world.spawn_follower(vec2(100, 100), sprites("enemy", 32), player);

        let mut canvas = DrawList::new();
        for _ in 0..150 {
            world.tick(&idle(), &mut canvas);
        }

        let follower_rect = world.entities[follower].rect();
        let player_rect = world.entities[player].rect();
        // Pushed out against the player, never overlapping
        assert_eq!(follower_rect.max.x, player_rect.min.x);
        assert!(world.entities[player].health.as_ref().unwrap().health < 100);
    }

    #[test]
    fn test_follower_speed_is_averaged() {
        let mut world = world();
        let player = world.spawn_player(vec2(1000, 100), sprites("player", 32));
        let follower = world.spawn_follower(vec2(0, 100), sprites("enemy", 32), player);
        for _ in 0..100 {
            world.tick(&idle(), &mut DrawList::new());
        }
        // 0.75 px per frame
        let x = world.entities[follower].rect().min.x;
        assert!((x - 75).abs() <= 1, "x = {}", x);
    }

    #[test]
    fn test_dead_entity_lingers_until_particles_are_gone() {
        let mut world = world();
        let enemy = world.spawn_follower(vec2(0, 0), sprites("enemy", 32), Id::from_raw_parts(99, 0));
        let particles = world.damage(enemy, 100).unwrap();
        assert!(particles > 0);

        let mut canvas = DrawList::new();
        world.tick(&idle(), &mut canvas);
        assert!(world.entities.contains(enemy));
        assert!(!world.entities[enemy].is_alive());
        assert!(world.obstacles().iter().all(|o| o.id != enemy));

        let mut ticks = 0;
        while world.entities.contains(enemy) {
            world.tick(&idle(), &mut canvas);
            ticks += 1;
            assert!(ticks < 1000);
        }
    }

    #[test]
    fn test_dead_entity_without_particles_is_removed_next_tick() {
        let mut world = world();
        let prop = world.spawn(
            Entity::new(EntityKind::Prop, vec2(0, 0), None).with_health(Health::new(1, 20)),
        );
        world.damage(prop, 1);
        assert!(world.entities.contains(prop));
        world.tick(&idle(), &mut DrawList::new());
        assert!(!world.entities.contains(prop));
    }

    #[test]
    fn test_draw_skips_the_dead() {
        let mut world = world();
        let player = world.spawn_player(vec2(100, 100), sprites("player", 32));
        let enemy = world.spawn_follower(vec2(300, 300), sprites("enemy", 32), player);
        world.damage(enemy, 100);

        let mut canvas = DrawList::new();
        world.draw(&mut canvas);
        let keys: Vec<_> = canvas.blits().map(|(sprite, _)| sprite.key.clone()).collect();
        assert_eq!(keys, vec!["player".to_string()]);
    }

    #[test]
    fn test_camera_follows_player() {
        let mut world = world();
        world.spawn_player(vec2(100, 100), sprites("player", 32));
        world.tick(&idle(), &mut DrawList::new());
        assert_eq!(world.camera.state.min, vec2(300, 220));
    }

    #[test]
    fn test_gravity_drops_onto_the_floor() {
        let mut world = world();
        world.spawn_wall(vec2(0, 200), Sprite::new("wall", vec2(320, 32)));
        let crate_id = world.spawn(
            Entity::new(EntityKind::Prop, vec2(100, 100), None).with_gravity(Gravity::new(10.0)),
        );
        for _ in 0..300 {
            world.tick(&idle(), &mut DrawList::new());
        }
        assert_eq!(world.entities[crate_id].rect().max.y, 200);
        assert!(!world.entities[crate_id].gravity.as_ref().unwrap().falling);
    }

    /// A follower bites a prop, then a bullet updated after both flies over
    /// the spot in the same tick. Returns the prop and the bullet.
    fn bite_then_shoot(prop_health: Hp) -> (World, Id, Id) {
        let mut world = world();
        let living = &world.config.living;
        let emitter = ParticleEmitter::new(living.blood, living.particle.clone());
        let prop = world.spawn(
            Entity::new(EntityKind::Prop, vec2(9, 0), None)
                .with_health(Health::new(prop_health, 20))
                .with_emitter(emitter),
        );
        let biter = world.spawn(
            Entity::new(
                EntityKind::Follower {
                    target: prop,
                    attack_strength: 1,
                },
                vec2(0, 0),
                None,
            )
            .with_speed(2.0),
        );
        let bullet = world.spawn(
            Entity::new(
                EntityKind::Bullet {
                    owner: biter,
                    velocity: vec2(-4.0, 0.0),
                    strength: 3,
                },
                vec2(20, 0),
                None,
            )
            .with_solid(false),
        );
        world.tick(&idle(), &mut DrawList::new());
        (world, prop, bullet)
    }

    #[test]
    fn test_kill_is_seen_by_later_entities_in_the_same_tick() {
        let (world, prop, bullet) = bite_then_shoot(1);
        let prop = &world.entities[prop];
        assert!(!prop.is_alive());
        assert!(!prop.is_solid());
        // The bullet flew over the corpse without hitting it
        assert!(world.entities.contains(bullet));
        assert_eq!(prop.health.as_ref().unwrap().health, 0);
    }

    #[test]
    fn test_survivor_still_blocks_later_entities() {
        let (world, prop, bullet) = bite_then_shoot(10);
        assert!(world.entities[prop].is_alive());
        assert!(!world.entities.contains(bullet));
        assert_eq!(world.entities[prop].health.as_ref().unwrap().health, 6);
    }
}
