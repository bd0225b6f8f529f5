use super::*;

/// Opaque color from 8-bit channels.
pub fn rgb_color([r, g, b]: [u8; 3]) -> Color {
    let channel = |value: u8| value as f32 / 255.0;
    Rgba::new(channel(r), channel(g), channel(b), 1.0)
}

/// The surface everything gets drawn onto. Rectangles are already in
/// screen space when they get here.
pub trait Canvas {
    /// Draw `sprite` rotated by `angle` degrees, centered inside `target`.
    fn blit(&mut self, sprite: &Sprite, target: Aabb2<Coord>, angle: f32);
    fn fill_rect(&mut self, target: Aabb2<Coord>, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Blit {
        sprite: Sprite,
        target: Aabb2<Coord>,
        angle: f32,
    },
    Fill {
        target: Aabb2<Coord>,
        color: Color,
    },
}

/// A canvas that records commands for later replay.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn fills(&self) -> impl Iterator<Item = (&Aabb2<Coord>, &Color)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Fill { target, color } => Some((target, color)),
            DrawCommand::Blit { .. } => None,
        })
    }

    pub fn blits(&self) -> impl Iterator<Item = (&Sprite, &Aabb2<Coord>)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Blit { sprite, target, .. } => Some((sprite, target)),
            DrawCommand::Fill { .. } => None,
        })
    }
}

impl Canvas for DrawList {
    fn blit(&mut self, sprite: &Sprite, target: Aabb2<Coord>, angle: f32) {
        self.commands.push(DrawCommand::Blit {
            sprite: sprite.clone(),
            target,
            angle,
        });
    }

    fn fill_rect(&mut self, target: Aabb2<Coord>, color: Color) {
        self.commands.push(DrawCommand::Fill { target, color });
    }
}
