use geng::{prelude::*, Key};
use geng_utils::conversions::*;

use sprite_toolkit::{
    config::Config,
    model::{DrawList, Level, Sprite, SpriteSet, World, DEMO_LEVEL},
};

use crate::{assets::Assets, controls::Controls, render::GameRender};

pub struct Game {
    assets: Rc<Assets>,
    render: GameRender,
    controls: Controls,
    config: Config,
    seed: Option<u64>,
    world: World,
    /// What the last tick drew, replayed every frame.
    draw_list: DrawList,
    framebuffer_size: vec2<usize>,
    /// Time not yet spent on ticks.
    lag: f64,
}

impl Game {
    pub fn new(geng: &Geng, assets: &Rc<Assets>, config: Config, seed: Option<u64>) -> Self {
        Self {
            assets: assets.clone(),
            render: GameRender::new(geng, assets, config.view_size),
            controls: Controls::new(),
            world: demo_world(|key| assets.sprites.sprite(key), config.clone(), seed),
            config,
            seed,
            draw_list: DrawList::new(),
            framebuffer_size: vec2(1, 1),
            lag: 0.0,
        }
    }

    fn restart(&mut self) {
        log::info!("Restarting");
        let sprites = &self.assets.sprites;
        self.world = demo_world(|key| sprites.sprite(key), self.config.clone(), self.seed);
        self.draw_list.clear();
    }
}

/// The walled room with the player in the middle and one follower after them.
/// `sprite` looks up a sprite handle by asset key.
fn demo_world(sprite: impl Fn(&str) -> Sprite, config: Config, seed: Option<u64>) -> World {
    let center = config.view_size / 2;
    let mut world = match seed {
        Some(seed) => World::with_seed(config, seed),
        None => World::new(config),
    };

    // Walls are drawn at twice the texture size and overlap their neighbours
    let wall = sprite("wall").scaled(2.0);
    world.load_level(&Level::parse(DEMO_LEVEL), &wall, &sprite("floor"));
    world.bullet_sprite = Some(sprite("bullet"));

    let player = world.spawn_player(
        center,
        SpriteSet::new(sprite("player"), Some(sprite("player_hurt"))),
    );
    world.spawn_follower(
        vec2(100, 100),
        SpriteSet::new(sprite("enemy"), Some(sprite("enemy_hurt"))),
        player,
    );
    world
}

impl geng::State for Game {
    fn draw(&mut self, framebuffer: &mut ugli::Framebuffer) {
        self.framebuffer_size = framebuffer.size();
        ugli::clear(framebuffer, Some(Rgba::WHITE), None, None);
        self.render.draw(&self.draw_list, framebuffer);
    }

    fn handle_event(&mut self, event: geng::Event) {
        if geng_utils::key::is_event_press(&event, [Key::R]) {
            self.restart();
            return;
        }
        if let geng::Event::CursorMove { position } = event {
            let aim = self
                .render
                .screen_to_view(self.framebuffer_size.as_f32(), position.as_f32());
            self.controls.aim_at(aim);
        }
        self.controls.handle_event(&event);
    }

    fn update(&mut self, delta_time: f64) {
        let frame_time = 1.0 / self.config.fps.max(1.0) as f64;
        self.lag += delta_time;
        let input = self.controls.input();
        while self.lag >= frame_time {
            self.lag -= frame_time;
            self.draw_list.clear();
            self.world.draw(&mut self.draw_list);
            self.world.tick(&input, &mut self.draw_list);
        }
    }
}
