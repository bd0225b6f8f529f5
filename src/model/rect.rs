use super::*;

/// The rectangle at `origin` (its top-left corner) with the given size.
///
/// World rectangles point y down, so `min.y` is the top edge and `max.y`
/// the bottom one.
pub fn rect_at(origin: vec2<Coord>, size: vec2<Coord>) -> Aabb2<Coord> {
    Aabb2::point(origin).extend_positive(size)
}

/// Pixel rectangle helpers on top of [`Aabb2`].
///
/// Edge setters move the rectangle, they never resize it.
pub trait RectExt {
    fn set_left(&mut self, left: Coord);
    fn set_right(&mut self, right: Coord);
    fn set_top(&mut self, top: Coord);
    fn set_bottom(&mut self, bottom: Coord);
    /// Center rounded towards the top-left corner.
    fn pixel_center(&self) -> vec2<Coord>;
    fn set_pixel_center(&mut self, center: vec2<Coord>);
    /// Change the size, keeping the center in place.
    fn resize_centered(&mut self, size: vec2<Coord>);
    /// Whether the two rectangles share a region of positive area.
    /// Touching edges do not count, and empty rectangles never collide.
    fn overlaps(&self, other: &Self) -> bool;
    /// Whether the rectangle lies completely outside of `bounds`.
    fn is_outside(&self, bounds: &Self) -> bool;
}

impl RectExt for Aabb2<Coord> {
    fn set_left(&mut self, left: Coord) {
        *self = self.translate(vec2(left - self.min.x, 0));
    }

    fn set_right(&mut self, right: Coord) {
        *self = self.translate(vec2(right - self.max.x, 0));
    }

    fn set_top(&mut self, top: Coord) {
        *self = self.translate(vec2(0, top - self.min.y));
    }

    fn set_bottom(&mut self, bottom: Coord) {
        *self = self.translate(vec2(0, bottom - self.max.y));
    }

    fn pixel_center(&self) -> vec2<Coord> {
        self.min + self.size() / 2
    }

    fn set_pixel_center(&mut self, center: vec2<Coord>) {
        *self = self.translate(center - self.pixel_center());
    }

    fn resize_centered(&mut self, size: vec2<Coord>) {
        let center = self.pixel_center();
        *self = rect_at(self.min, size);
        self.set_pixel_center(center);
    }

    fn overlaps(&self, other: &Self) -> bool {
        let empty = |rect: &Self| rect.size().x <= 0 || rect.size().y <= 0;
        if empty(self) || empty(other) {
            return false;
        }
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    fn is_outside(&self, bounds: &Self) -> bool {
        self.max.x < bounds.min.x
            || self.min.x > bounds.max.x
            || self.max.y < bounds.min.y
            || self.min.y > bounds.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_move_without_resizing() {
        let mut rect = rect_at(vec2(10, 20), vec2(32, 16));
        rect.set_right(100);
        assert_eq!(rect, rect_at(vec2(68, 20), vec2(32, 16)));
        rect.set_bottom(50);
        assert_eq!(rect, rect_at(vec2(68, 34), vec2(32, 16)));
        rect.set_left(-4);
        rect.set_top(2);
        assert_eq!(rect, rect_at(vec2(-4, 2), vec2(32, 16)));
        rect.set_pixel_center(vec2(0, 0));
        assert_eq!(rect.pixel_center(), vec2(0, 0));
        assert_eq!(rect.size(), vec2(32, 16));
    }

    #[test]
    fn test_pixel_center_rounds_towards_origin() {
        let mut rect = rect_at(vec2(-3, -3), vec2(5, 5));
        assert_eq!(rect.pixel_center(), vec2(-1, -1));
        rect.set_pixel_center(vec2(-7, 9));
        assert_eq!(rect.pixel_center(), vec2(-7, 9));
        assert_eq!(rect.min, vec2(-9, 7));
    }

    #[test]
    fn test_resize_centered() {
        let mut rect = rect_at(vec2(100, 100), vec2(32, 16));
        rect.resize_centered(vec2(16, 32));
        assert_eq!(rect, rect_at(vec2(108, 92), vec2(16, 32)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect_at(vec2(0, 0), vec2(32, 32));
        assert!(!a.overlaps(&rect_at(vec2(32, 0), vec2(32, 32))));
        assert!(!a.overlaps(&rect_at(vec2(0, 32), vec2(32, 32))));
        assert!(a.overlaps(&rect_at(vec2(31, 31), vec2(32, 32))));
        assert!(a.overlaps(&rect_at(vec2(8, 8), vec2(4, 4))));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let a = rect_at(vec2(0, 0), vec2(32, 32));
        assert!(!a.overlaps(&rect_at(vec2(4, 4), vec2(0, 10))));
    }

    #[test]
    fn test_is_outside() {
        let bounds = rect_at(vec2(0, 0), vec2(800, 640));
        assert!(!rect_at(vec2(10, 10), vec2(8, 8)).is_outside(&bounds));
        assert!(!rect_at(vec2(-4, 10), vec2(8, 8)).is_outside(&bounds));
        assert!(rect_at(vec2(-9, 10), vec2(8, 8)).is_outside(&bounds));
        assert!(rect_at(vec2(10, 641), vec2(8, 8)).is_outside(&bounds));
    }
}
