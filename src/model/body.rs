use super::*;

/// Something a body can bump into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: Id,
    pub rect: Aabb2<Coord>,
}

/// What to do with the mover after it has run into an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Clamp the mover against the obstacle along the axis of motion.
    PushOut,
    /// Leave the mover where it is.
    PassThrough,
}

/// The moving part of an entity: the collision rectangle and the
/// fractional movement that has not been applied to it yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Aabb2<Coord>,
    /// Each axis always in `(-1, 1)`.
    pub speed_buffer: vec2<f32>,
}

impl Body {
    pub fn new(rect: Aabb2<Coord>) -> Self {
        Self {
            rect,
            speed_buffer: vec2(0.0, 0.0),
        }
    }

    /// Move by a fractional velocity, pushing out of every obstacle hit.
    pub fn push(&mut self, this: Option<Id>, velocity: vec2<f32>, obstacles: &[Obstacle]) {
        self.move_by(this, velocity, obstacles, |_| Resolution::PushOut);
    }

    /// Accumulate a fractional per-frame velocity and apply whole pixels
    /// once they are available, horizontal axis first.
    ///
    /// `this` is the id of the mover itself, so it can be skipped when it is
    /// part of `obstacles`. The `hook` is called for every obstacle the mover
    /// overlaps after a pixel step, in the order of `obstacles`.
    pub fn move_by(
        &mut self,
        this: Option<Id>,
        velocity: vec2<f32>,
        obstacles: &[Obstacle],
        mut hook: impl FnMut(&Obstacle) -> Resolution,
    ) {
        if velocity.x != 0.0 {
            self.speed_buffer.x += velocity.x;
            if self.speed_buffer.x.abs() >= 1.0 {
                let step = self.speed_buffer.x.trunc();
                self.move_single_axis(this, vec2(step as Coord, 0), obstacles, &mut hook);
                self.speed_buffer.x -= step;
            }
        }
        if velocity.y != 0.0 {
            self.speed_buffer.y += velocity.y;
            if self.speed_buffer.y.abs() >= 1.0 {
                let step = self.speed_buffer.y.trunc();
                self.move_single_axis(this, vec2(0, step as Coord), obstacles, &mut hook);
                self.speed_buffer.y -= step;
            }
        }
    }

    /// Apply a whole-pixel step along one axis and resolve the collisions it
    /// causes.
    pub fn move_single_axis(
        &mut self,
        this: Option<Id>,
        step: vec2<Coord>,
        obstacles: &[Obstacle],
        hook: &mut impl FnMut(&Obstacle) -> Resolution,
    ) {
        self.rect = self.rect.translate(step);

        for other in obstacles {
            if this == Some(other.id) || !self.rect.overlaps(&other.rect) {
                continue;
            }
            if let Resolution::PushOut = hook(other) {
                self.push_out(step, &other.rect);
            }
        }
    }

    fn push_out(&mut self, step: vec2<Coord>, other: &Aabb2<Coord>) {
        if step.x > 0 {
            self.rect.set_right(other.min.x);
        } else if step.x < 0 {
            self.rect.set_left(other.max.x);
        }
        if step.y > 0 {
            self.rect.set_bottom(other.min.y);
        } else if step.y < 0 {
            self.rect.set_top(other.max.y);
        }
    }

    /// Whether the body would overlap any obstacle if shifted by the offset.
    pub fn touches(&self, this: Option<Id>, offset: vec2<Coord>, obstacles: &[Obstacle]) -> bool {
        let shifted = self.rect.translate(offset);
        obstacles
            .iter()
            .any(|other| this != Some(other.id) && shifted.overlaps(&other.rect))
    }
}
