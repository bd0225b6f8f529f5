use crate::prelude::*;

use anyhow::Context as _;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub view_size: vec2<Coord>,
    /// Frames per second the loop is capped at.
    pub fps: f32,
    /// Size of a level tile in pixels.
    pub tile_size: Coord,
    pub player: PlayerConfig,
    pub follower: FollowerConfig,
    pub living: LivingConfig,
    pub gravity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub speed: f32,
    pub health: Hp,
    pub hurt_time: i32,
    /// Ticks between two shots.
    pub cool_down: i32,
    pub attack_strength: Hp,
    /// How much faster than the player its bullets fly.
    pub bullet_speed_bonus: f32,
    pub bullet_scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowerConfig {
    pub speed: f32,
    pub health: Hp,
    pub attack_strength: Hp,
}

/// Defaults shared by everything that can be hurt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LivingConfig {
    pub health: Hp,
    pub hurt_time: i32,
    /// Mean number of particles spilled on death.
    pub blood: f32,
    pub particle: ParticleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub color: [u8; 3],
    /// Mean lifetime in ticks.
    pub duration: f32,
    /// Inverse spread of color and lifetime, and the random walk magnitude.
    pub variation: Coord,
    /// Inverse spread of the particle count.
    pub count_inverse_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            view_size: vec2(800, 640),
            fps: 60.0,
            tile_size: 32,
            player: PlayerConfig::default(),
            follower: FollowerConfig::default(),
            living: LivingConfig::default(),
            gravity: 10.0,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            health: 100,
            hurt_time: 50,
            cool_down: 10,
            attack_strength: 5,
            bullet_speed_bonus: 1.0,
            bullet_scale: 0.5,
        }
    }
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            speed: 0.75,
            health: 10,
            attack_strength: 1,
        }
    }
}

impl Default for LivingConfig {
    fn default() -> Self {
        Self {
            health: 1,
            hurt_time: 20,
            blood: 50.0,
            particle: ParticleConfig::default(),
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            color: [200, 25, 25],
            duration: 50.0,
            variation: 4,
            count_inverse_scale: 4.0,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .context(format!("when loading config file at {:?}", path))?;
        let config = Self::parse(&content)
            .context(format!("when parsing config file at {:?}", path))?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(content)?)
    }
}
