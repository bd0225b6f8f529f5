use super::*;

use anyhow::Context as _;
use image::{imageops, RgbaImage};

use std::ops::Add;
use std::path::Path;

/// A bitmap that frames can be cut out of.
pub struct SpriteSheet {
    pub sheet: RgbaImage,
}

impl SpriteSheet {
    pub fn new(sheet: RgbaImage) -> Self {
        Self { sheet }
    }

    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let sheet = image::open(path)
            .with_context(|| format!("could not load sprite sheet at {:?}", path))?
            .into_rgba8();
        log::debug!(
            "Loaded sprite sheet {:?} ({}x{})",
            path,
            sheet.width(),
            sheet.height()
        );
        Ok(Self { sheet })
    }

    /// Cut out the image under `rect`. Parts of the rectangle outside of the
    /// sheet come out transparent.
    pub fn image_at(&self, rect: Aabb2<Coord>) -> RgbaImage {
        let size = rect.size().map(|x| x.max(0) as u32);
        let mut image = RgbaImage::new(size.x, size.y);
        imageops::replace(&mut image, &self.sheet, -(rect.min.x as i64), -(rect.min.y as i64));
        image
    }

    pub fn images_at(&self, rects: impl IntoIterator<Item = Aabb2<Coord>>) -> Vec<RgbaImage> {
        rects.into_iter().map(|rect| self.image_at(rect)).collect()
    }

    /// Cut `count` same-sized images in a row, starting at `start`.
    pub fn load_strip(&self, start: Aabb2<Coord>, count: usize) -> Vec<RgbaImage> {
        self.images_at(strip_rects(start, count))
    }
}

/// The rectangles of `count` same-sized frames laid out left to right.
pub fn strip_rects(start: Aabb2<Coord>, count: usize) -> impl Iterator<Item = Aabb2<Coord>> {
    let width = start.size().x;
    (0..count as Coord).map(move |i| start.translate(vec2(width * i, 0)))
}

/// Plays a sequence of frames, holding each for a number of ticks.
#[derive(Debug, Clone)]
pub struct SpriteSheetAnimator<T = RgbaImage> {
    pub frames: Vec<T>,
    pub looping: bool,
    /// Ticks each frame is shown for.
    pub hold: usize,
    held_left: usize,
    index: usize,
}

impl SpriteSheetAnimator<RgbaImage> {
    pub fn open(
        path: impl AsRef<Path>,
        start: Aabb2<Coord>,
        count: usize,
        looping: bool,
        hold: usize,
    ) -> anyhow::Result<Self> {
        let sheet = SpriteSheet::open(path)?;
        Ok(Self::new(sheet.load_strip(start, count), looping, hold))
    }
}

impl<T> SpriteSheetAnimator<T> {
    pub fn new(frames: Vec<T>, looping: bool, hold: usize) -> Self {
        let hold = hold.max(1);
        Self {
            frames,
            looping,
            hold,
            held_left: hold,
            index: 0,
        }
    }

    /// Rewind to the first frame.
    pub fn restart(&mut self) -> &mut Self {
        self.index = 0;
        self.held_left = self.hold;
        self
    }

    /// Append the frames of another animator.
    pub fn extend(&mut self, other: Self) {
        self.frames.extend(other.frames);
    }

    pub fn next_frame(&mut self) -> Option<&T> {
        if self.index >= self.frames.len() {
            if !self.looping || self.frames.is_empty() {
                return None;
            }
            self.index = 0;
        }

        let index = self.index;
        self.held_left -= 1;
        if self.held_left == 0 {
            self.index += 1;
            self.held_left = self.hold;
        }
        self.frames.get(index)
    }
}

impl<T: Clone> Iterator for SpriteSheetAnimator<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.next_frame().cloned()
    }
}

impl<T> Add for SpriteSheetAnimator<T> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}
