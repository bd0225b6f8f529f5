use super::*;

/// Falling for entities that are not held up by anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Gravity {
    /// Acceleration, in pixels per frame per second.
    pub grav: f32,
    pub y_vel: f32,
    /// Vertical velocity at the moment the fall started.
    pub y_vel_initial: f32,
    pub falling: bool,
    fall_started: Option<u64>,
}

impl Gravity {
    pub fn new(grav: f32) -> Self {
        Self {
            grav,
            y_vel: 0.0,
            y_vel_initial: 0.0,
            falling: false,
            fall_started: None,
        }
    }

    /// Recompute the vertical velocity for the current frame.
    pub fn update(
        &mut self,
        body: &Body,
        this: Option<Id>,
        obstacles: &[Obstacle],
        frame: u64,
        fps: f32,
    ) {
        self.falling = !body.touches(this, vec2(0, 1), obstacles);
        if self.falling {
            let started = *self.fall_started.get_or_insert(frame);
            let seconds = (frame - started) as f32 / fps;
            self.y_vel = self.grav * seconds + self.y_vel_initial;
        } else {
            self.fall_started = None;
            self.y_vel = 0.0;
            self.y_vel_initial = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accelerates_while_falling() {
        let body = Body::new(rect_at(vec2(0, 0), vec2(16, 16)));
        let mut gravity = Gravity::new(10.0);
        gravity.update(&body, None, &[], 100, 60.0);
        assert!(gravity.falling);
        assert_eq!(gravity.y_vel, 0.0);
        gravity.update(&body, None, &[], 130, 60.0);
        assert_eq!(gravity.y_vel, 5.0);
        gravity.update(&body, None, &[], 160, 60.0);
        assert_eq!(gravity.y_vel, 10.0);
    }

    #[test]
    fn test_grounded_resets() {
        let mut arena = Arena::new();
        let floor = [Obstacle {
            id: arena.insert(()),
            rect: rect_at(vec2(-100, 16), vec2(200, 16)),
        }];
        let mut body = Body::new(rect_at(vec2(0, -40), vec2(16, 16)));
        let mut gravity = Gravity::new(10.0);

        let mut frame = 0;
        while body.rect.max.y < 16 && frame < 600 {
            gravity.update(&body, None, &floor, frame, 60.0);
            body.push(None, vec2(0.0, gravity.y_vel), &floor);
            frame += 1;
        }
        assert_eq!(body.rect.max.y, 16);
        gravity.update(&body, None, &floor, frame, 60.0);
        assert!(!gravity.falling);
        assert_eq!(gravity.y_vel, 0.0);
    }
}
