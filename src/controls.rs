use geng::prelude::*;

use sprite_toolkit::model::FrameInput;

/// Tracks held keys and the pointer between frames.
pub struct Controls {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    /// Fire key held.
    fire_key: bool,
    /// Left mouse button held.
    fire_mouse: bool,
    /// Pointer position in world pixels, y pointing down.
    aim: Option<vec2<f32>>,
}

impl Controls {
    pub fn new() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            fire_key: false,
            fire_mouse: false,
            aim: None,
        }
    }

    pub fn handle_event(&mut self, event: &geng::Event) {
        match event {
            geng::Event::KeyPress { key } => self.set_key(*key, true),
            geng::Event::KeyRelease { key } => self.set_key(*key, false),
            geng::Event::MousePress {
                button: geng::MouseButton::Left,
            } => self.fire_mouse = true,
            geng::Event::MouseRelease {
                button: geng::MouseButton::Left,
            } => self.fire_mouse = false,
            _ => {}
        }
    }

    fn set_key(&mut self, key: geng::Key, pressed: bool) {
        use geng::Key;
        match key {
            Key::W | Key::ArrowUp => self.up = pressed,
            Key::S | Key::ArrowDown => self.down = pressed,
            Key::A | Key::ArrowLeft => self.left = pressed,
            Key::D | Key::ArrowRight => self.right = pressed,
            Key::Space => self.fire_key = pressed,
            _ => {}
        }
    }

    pub fn aim_at(&mut self, position: vec2<f32>) {
        self.aim = Some(position);
    }

    pub fn input(&self) -> FrameInput {
        let axis = |negative: bool, positive: bool| positive as i32 as f32 - negative as i32 as f32;
        FrameInput {
            movement: vec2(axis(self.left, self.right), axis(self.up, self.down)),
            aim: self.aim,
            fire: self.fire_key || self.fire_mouse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_sources_are_independent() {
        let mut controls = Controls::new();
        controls.handle_event(&geng::Event::KeyPress {
            key: geng::Key::Space,
        });
        controls.handle_event(&geng::Event::MousePress {
            button: geng::MouseButton::Left,
        });
        controls.handle_event(&geng::Event::MouseRelease {
            button: geng::MouseButton::Left,
        });
        // Space is still held
        assert!(controls.input().fire);
        controls.handle_event(&geng::Event::KeyRelease {
            key: geng::Key::Space,
        });
        assert!(!controls.input().fire);
    }

    #[test]
    fn test_movement_axes() {
        let mut controls = Controls::new();
        controls.handle_event(&geng::Event::KeyPress { key: geng::Key::D });
        controls.handle_event(&geng::Event::KeyPress { key: geng::Key::W });
        assert_eq!(controls.input().movement, vec2(1.0, -1.0));
        controls.handle_event(&geng::Event::KeyPress { key: geng::Key::A });
        assert_eq!(controls.input().movement, vec2(0.0, -1.0));
    }
}
