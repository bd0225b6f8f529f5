use geng::prelude::*;

use sprite_toolkit::model::{Coord, Sprite};

#[derive(geng::asset::Load)]
pub struct Assets {
    pub sprites: Sprites,
}

#[derive(geng::asset::Load)]
pub struct Sprites {
    pub player: ugli::Texture,
    pub player_hurt: ugli::Texture,
    pub enemy: ugli::Texture,
    pub enemy_hurt: ugli::Texture,
    pub wall: ugli::Texture,
    pub floor: ugli::Texture,
    pub bullet: ugli::Texture,
}

impl Assets {
    pub async fn load(manager: &geng::asset::Manager) -> anyhow::Result<Self> {
        geng::asset::Load::load(manager, &run_dir().join("assets"), &())
            .await
            .context("failed to load assets")
    }
}

impl Sprites {
    /// The texture a sprite key refers to.
    pub fn get(&self, key: &str) -> Option<&ugli::Texture> {
        let texture = match key {
            "player" => &self.player,
            "player_hurt" => &self.player_hurt,
            "enemy" => &self.enemy,
            "enemy_hurt" => &self.enemy_hurt,
            "wall" => &self.wall,
            "floor" => &self.floor,
            "bullet" => &self.bullet,
            _ => return None,
        };
        Some(texture)
    }

    /// A sprite handle sized after its texture.
    pub fn sprite(&self, key: &str) -> Sprite {
        let size = self
            .get(key)
            .map_or(vec2::ZERO, |texture| texture.size().map(|x| x as Coord));
        Sprite::new(key, size)
    }
}
