use geng::prelude::*;

use sprite_toolkit::model::{Coord, DrawCommand, DrawList, Sprite};

use crate::assets::Assets;

/// Replays recorded draw commands through `draw2d`.
pub struct GameRender {
    geng: Geng,
    assets: Rc<Assets>,
    pub camera: Camera2d,
    /// Size of the visible area in world pixels.
    view_size: vec2<f32>,
}

impl GameRender {
    pub fn new(geng: &Geng, assets: &Rc<Assets>, view_size: vec2<Coord>) -> Self {
        let view_size = view_size.map(|x| x as f32);
        Self {
            geng: geng.clone(),
            assets: assets.clone(),
            camera: Camera2d {
                center: view_size / 2.0,
                rotation: Angle::ZERO,
                fov: view_size.y,
            },
            view_size,
        }
    }

    /// Convert a cursor position into world pixels with y pointing down.
    pub fn screen_to_view(&self, framebuffer_size: vec2<f32>, cursor: vec2<f32>) -> vec2<f32> {
        let pos = self.camera.screen_to_world(framebuffer_size, cursor);
        vec2(pos.x, self.view_size.y - pos.y)
    }

    pub fn draw(&self, draw_list: &DrawList, framebuffer: &mut ugli::Framebuffer) {
        for command in &draw_list.commands {
            match command {
                DrawCommand::Blit {
                    sprite,
                    target,
                    angle,
                } => self.draw_sprite(sprite, *target, *angle, framebuffer),
                DrawCommand::Fill { target, color } => {
                    self.geng.draw2d().draw2d(
                        framebuffer,
                        &self.camera,
                        &draw2d::Quad::new(self.aabb(*target), *color),
                    );
                }
            }
        }
    }

    fn draw_sprite(
        &self,
        sprite: &Sprite,
        target: Aabb2<Coord>,
        angle: f32,
        framebuffer: &mut ugli::Framebuffer,
    ) {
        let Some(texture) = self.assets.sprites.get(&sprite.key) else {
            log::warn!("no texture for sprite {:?}", sprite.key);
            return;
        };
        // The target is the rotated bounding box, the sprite keeps its own size
        let center = self.aabb(target).center();
        let size = sprite.size.map(|x| x as f32);
        self.geng.draw2d().draw2d(
            framebuffer,
            &self.camera,
            &draw2d::TexturedQuad::unit(texture).transform(
                mat3::translate(center)
                    * mat3::rotate(Angle::from_degrees(angle))
                    * mat3::scale(size / 2.0),
            ),
        );
    }

    /// Flip a screen rectangle into the y-up space of the camera.
    fn aabb(&self, rect: Aabb2<Coord>) -> Aabb2<f32> {
        let bottom = self.view_size.y - rect.max.y as f32;
        Aabb2::point(vec2(rect.min.x as f32, bottom))
            .extend_positive(rect.size().map(|x| x as f32))
    }
}
