pub use batbox_color::Rgba;
pub use batbox_la::{vec2, Aabb2};
pub use generational_arena::{Arena, Index as Id};
pub use rand::prelude::*;
pub use serde::{Deserialize, Serialize};

pub use crate::{config::*, model::*, util::*};

pub type Color = Rgba<f32>;
