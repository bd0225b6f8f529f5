//! Building blocks for small 2D sprite games: pixel bodies with sub-pixel
//! movement and axis-separated collisions, entities with health and blood
//! particles, follow cameras with screen shake, and sprite sheet animation.

pub mod config;
pub mod model;
pub mod prelude;
pub mod util;
