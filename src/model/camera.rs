use super::*;

/// Maps the previous camera state and the target rectangle onto the new
/// camera state.
pub type FollowFn = Box<dyn Fn(Aabb2<Coord>, Aabb2<Coord>, vec2<Coord>) -> Aabb2<Coord>>;

/// Keeps the target centered, showing whatever lies beyond the level.
pub fn simple_follow(
    state: Aabb2<Coord>,
    target: Aabb2<Coord>,
    view_size: vec2<Coord>,
) -> Aabb2<Coord> {
    rect_at(view_size / 2 - target.min, state.size())
}

/// Keeps the target centered, but never scrolls past the edges of a world
/// of the given size.
pub fn bounded_follow(
    world_size: vec2<Coord>,
) -> impl Fn(Aabb2<Coord>, Aabb2<Coord>, vec2<Coord>) -> Aabb2<Coord> {
    move |state, target, view_size| {
        let centered = simple_follow(state, target, view_size);
        // A world smaller than the view pins the camera at the origin
        let lowest = (view_size - world_size).map(|x| x.min(0));
        let offset = vec2(
            clamp(centered.min.x, lowest.x, 0),
            clamp(centered.min.y, lowest.y, 0),
        );
        rect_at(offset, centered.size())
    }
}

pub struct Camera {
    follow: FollowFn,
    /// Offset applied to world rectangles, with the size of the view.
    pub state: Aabb2<Coord>,
    pub view_size: vec2<Coord>,
    shake: Option<ScreenShake>,
    shake_offset: vec2<Coord>,
}

impl Camera {
    pub fn new(
        follow: impl Fn(Aabb2<Coord>, Aabb2<Coord>, vec2<Coord>) -> Aabb2<Coord> + 'static,
        view_size: vec2<Coord>,
    ) -> Self {
        Self {
            follow: Box::new(follow),
            state: rect_at(vec2(0, 0), view_size),
            view_size,
            shake: None,
            shake_offset: vec2(0, 0),
        }
    }

    pub fn simple(view_size: vec2<Coord>) -> Self {
        Self::new(simple_follow, view_size)
    }

    pub fn bounded(view_size: vec2<Coord>, world_size: vec2<Coord>) -> Self {
        Self::new(bounded_follow(world_size), view_size)
    }

    /// Translate a world rectangle into screen space.
    pub fn apply(&self, rect: Aabb2<Coord>) -> Aabb2<Coord> {
        rect.translate(self.state.min + self.shake_offset)
    }

    pub fn update(&mut self, target: Aabb2<Coord>) {
        self.state = (self.follow)(self.state, target, self.view_size);
        self.shake_offset = match self.shake.as_mut().and_then(Iterator::next) {
            Some(offset) => offset,
            None => {
                self.shake = None;
                vec2(0, 0)
            }
        };
    }

    /// Start shaking, restarting any shake in progress.
    pub fn shake(&mut self) {
        self.shake = Some(ScreenShake::new());
    }

    pub fn is_shaking(&self) -> bool {
        self.shake.is_some()
    }
}

/// A short sequence of offsets jolting the view back and forth.
#[derive(Debug, Clone)]
pub struct ScreenShake {
    rounds_left: usize,
    amplitude: Coord,
    step: Coord,
    sign: Coord,
}

impl ScreenShake {
    pub fn new() -> Self {
        Self::with(3, 2)
    }

    /// Shake for `rounds` swings of `amplitude` steps each.
    pub fn with(rounds: usize, amplitude: Coord) -> Self {
        Self {
            rounds_left: rounds,
            amplitude,
            step: 0,
            sign: -1,
        }
    }
}

impl Default for ScreenShake {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ScreenShake {
    type Item = vec2<Coord>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.rounds_left > 0 {
            if self.step < self.amplitude {
                let offset = self.step * self.sign;
                self.step += 1;
                return Some(vec2(offset, offset));
            }
            self.step = 0;
            self.sign = -self.sign;
            self.rounds_left -= 1;
        }
        None
    }
}
