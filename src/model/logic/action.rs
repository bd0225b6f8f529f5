use super::*;

/// What the player asked for during one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Each axis in `[-1, 1]`, scaled by the player speed.
    pub movement: vec2<f32>,
    /// Pointer position in screen space.
    pub aim: Option<vec2<f32>>,
    pub fire: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            movement: vec2(0.0, 0.0),
            aim: None,
            fire: false,
        }
    }
}

impl World {
    pub fn player_action(&mut self, input: &FrameInput) {
        let Some(id) = self.player else {
            return;
        };
        let offset = self.camera.state.min.map(|x| x as f32);
        let Some(player) = self.entities.get_mut(id).filter(|player| player.is_alive()) else {
            return;
        };

        if let Some(aim) = input.aim {
            player.rotate_towards(aim - offset);
        }

        let speed = player.speed;
        if input.movement != vec2(0.0, 0.0) {
            self.move_entity(id, input.movement * speed);
        }

        if input.fire {
            self.attack(id);
        }
    }

    /// Shoot a bullet the way the player is facing.
    /// Returns whether a bullet was fired.
    pub fn attack(&mut self, id: Id) -> bool {
        let config = &self.config.player;
        let Some(player) = self.entities.get_mut(id) else {
            return false;
        };
        let EntityKind::Player {
            cool_down,
            attack_strength,
        } = &mut player.kind
        else {
            log::error!("{:?} is not a player and cannot attack", id);
            return false;
        };
        if *cool_down > 0 {
            return false;
        }
        *cool_down = config.cool_down;

        let speed = player.speed + config.bullet_speed_bonus;
        let angle = player.angle.to_radians();
        let velocity = vec2(-angle.sin(), -angle.cos()) * speed;
        let sprites = self
            .bullet_sprite
            .as_ref()
            .map(|sprite| SpriteSet::new(sprite.scaled(config.bullet_scale), None));
        let mut bullet = Entity::new(
            EntityKind::Bullet {
                owner: id,
                velocity,
                strength: *attack_strength,
            },
            vec2(0, 0),
            sprites,
        )
        .with_speed(speed)
        .with_solid(false);
        bullet.body.rect.set_pixel_center(player.rect().pixel_center());
        bullet.rotate(player.angle);

        self.spawn(bullet);
        self.camera.shake();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        let mut world = World::with_seed(Config::default(), 7);
        world.bounds = rect_at(vec2(0, 0), vec2(2000, 2000));
        world.bullet_sprite = Some(Sprite::new("bullet", vec2(16, 16)));
        world
    }

    fn player(world: &mut World, position: vec2<Coord>) -> Id {
        let sprites = SpriteSet::new(Sprite::new("player", vec2(32, 32)), None);
        world.spawn_player(position, sprites)
    }

    fn bullets(world: &World) -> Vec<&Entity> {
        world
            .entities
            .iter()
            .map(|(_, entity)| entity)
            .filter(|entity| matches!(entity.kind, EntityKind::Bullet { .. }))
            .collect()
    }

    #[test]
    fn test_movement_input() {
        let mut world = world();
        let id = player(&mut world, vec2(100, 100));
        let input = FrameInput {
            movement: vec2(1.0, -1.0),
            ..Default::default()
        };
        for _ in 0..10 {
            world.player_action(&input);
        }
        assert_eq!(world.entities[id].rect().min, vec2(110, 90));
    }

    #[test]
    fn test_aim_is_relative_to_camera() {
        let mut world = world();
        let id = player(&mut world, vec2(100, 100));
        world.camera.update(world.entities[id].rect());
        // Player center on screen is (416, 336), aim straight to its right
        let input = FrameInput {
            aim: Some(vec2(500.0, 336.0)),
            ..Default::default()
        };
        world.player_action(&input);
        let angle = world.entities[id].angle;
        assert!((angle - 270.0).abs() < 1e-3, "angle = {}", angle);
    }

    #[test]
    fn test_shot_follows_facing() {
        let mut world = world();
        let id = player(&mut world, vec2(100, 100));
        world.entities[id].rotate(270.0);
        assert!(world.attack(id));

        let bullets = bullets(&world);
        assert_eq!(bullets.len(), 1);
        let bullet = bullets[0];
        // Scaled down from the shared bullet sprite, which is left alone
        assert_eq!(bullet.rect().size(), vec2(8, 8));
        assert_eq!(world.bullet_sprite.as_ref().unwrap().size, vec2(16, 16));
        let shooter = world.entities[id].rect();
        assert_eq!(bullet.rect().pixel_center(), shooter.pixel_center());
        let EntityKind::Bullet {
            owner,
            velocity,
            strength,
        } = bullet.kind
        else {
            unreachable!()
        };
        assert_eq!(owner, id);
        assert_eq!(strength, 5);
        assert!((velocity.x - 2.0).abs() < 1e-5 && velocity.y.abs() < 1e-5, "{:?}", velocity);
        assert!(world.camera.is_shaking());
    }

    #[test]
    fn test_cool_down() {
        let mut world = world();
        player(&mut world, vec2(100, 100));
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        let mut canvas = DrawList::new();
        for _ in 0..25 {
            world.tick(&fire, &mut canvas);
        }
        // Fires on ticks 1, 11 and 21
        assert_eq!(bullets(&world).len(), 3);
    }

    #[test]
    fn test_only_players_attack() {
        let mut world = world();
        let prop = world.spawn(Entity::new(EntityKind::Prop, vec2(0, 0), None));
        assert!(!world.attack(prop));
        assert!(bullets(&world).is_empty());
    }

    #[test]
    fn test_dead_player_is_ignored() {
        let mut world = world();
        let id = player(&mut world, vec2(100, 100));
        world.damage(id, 1000);
        let input = FrameInput {
            movement: vec2(1.0, 0.0),
            fire: true,
            ..Default::default()
        };
        world.player_action(&input);
        assert_eq!(world.entities[id].rect().min, vec2(100, 100));
        assert!(bullets(&world).is_empty());
    }

    #[test]
    fn test_bullet_kills_follower() {
        let mut world = world();
        let shooter = player(&mut world, vec2(100, 100));
        let enemy_sprites = SpriteSet::new(Sprite::new("enemy", vec2(32, 32)), None);
        let enemy = world.spawn_follower(vec2(300, 100), enemy_sprites, shooter);
        // Facing right
        world.entities[shooter].rotate(270.0);

        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        let mut canvas = DrawList::new();
        let mut ticks = 0;
        while world.entities[enemy].is_alive() {
            world.tick(&fire, &mut canvas);
            ticks += 1;
            assert!(ticks < 500);
        }
        assert!(world.entities[shooter].is_alive());
    }

    #[test]
    fn test_bullet_leaving_bounds_is_dropped() {
        let mut world = world();
        world.bounds = rect_at(vec2(0, 0), vec2(200, 200));
        let id = player(&mut world, vec2(100, 100));
        assert!(world.attack(id));
        // Facing up
        let mut canvas = DrawList::new();
        for _ in 0..100 {
            world.tick(&FrameInput::default(), &mut canvas);
        }
        assert!(bullets(&world).is_empty());
    }
}
