use super::*;

use std::collections::HashMap;

/// Handle to a bitmap owned by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    /// Asset name the front-end uses to find the texture.
    pub key: String,
    /// Size in world pixels, after scaling.
    pub size: vec2<Coord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteState {
    Base,
    Hurt,
    /// The image rotations are computed from.
    NoRotation,
    /// The image that is currently drawn.
    Current,
}

impl Sprite {
    pub fn new(key: impl Into<String>, size: vec2<Coord>) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }

    /// Resize by `scale`, truncating to whole pixels.
    pub fn scaled(&self, scale: f32) -> Self {
        Self {
            key: self.key.clone(),
            size: self.size.map(|x| (x as f32 * scale) as Coord),
        }
    }

    /// Size of the bounding box of the sprite rotated by `angle` degrees.
    pub fn rotated_size(&self, angle: f32) -> vec2<Coord> {
        let (sin, cos) = angle.to_radians().sin_cos();
        let vec2(w, h) = self.size.map(|x| x as f32);
        let width = w * cos.abs() + h * sin.abs();
        let height = w * sin.abs() + h * cos.abs();
        vec2(width.round() as Coord, height.round() as Coord)
    }
}

/// The images an entity can show, by state.
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    sprites: HashMap<SpriteState, Sprite>,
}

impl SpriteSet {
    /// Create a set from the `Base` image and an optional `Hurt` variant.
    pub fn new(base: Sprite, hurt: Option<Sprite>) -> Self {
        let mut sprites = HashMap::new();
        sprites.insert(SpriteState::NoRotation, base.clone());
        sprites.insert(SpriteState::Current, base.clone());
        sprites.insert(SpriteState::Base, base);
        if let Some(hurt) = hurt {
            sprites.insert(SpriteState::Hurt, hurt);
        }
        Self { sprites }
    }

    pub fn get(&self, state: SpriteState) -> Option<&Sprite> {
        self.sprites.get(&state)
    }

    /// Copy the sprite of one state into another.
    /// Returns `false` when the source state has no sprite.
    pub fn assign(&mut self, target: SpriteState, source: SpriteState) -> bool {
        match self.sprites.get(&source).cloned() {
            Some(sprite) => {
                self.sprites.insert(target, sprite);
                true
            }
            None => false,
        }
    }
}
