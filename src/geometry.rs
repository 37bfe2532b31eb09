/// Axis-aligned rectangles in playfield units (one unit = one terminal cell).
///
/// `y` grows downward, so `top()` is the smaller coordinate.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Place the rectangle so its bottom edge is centred on `(cx, bottom)`.
    pub fn set_midbottom(&mut self, cx: f32, bottom: f32) {
        self.x = cx - self.width / 2.0;
        self.y = bottom - self.height;
    }

    /// Place the rectangle so its top edge is centred on `(cx, top)`.
    pub fn set_midtop(&mut self, cx: f32, top: f32) {
        self.x = cx - self.width / 2.0;
        self.y = top;
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment, `[left, right) × [top, bottom)`.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }

    /// Shift the rectangle so it lies inside `[0, width] × [0, height]`.
    /// A rectangle larger than the bounds is pinned to the top-left corner.
    pub fn clamp_within(&mut self, width: f32, height: f32) {
        self.x = self.x.min(width - self.width).max(0.0);
        self.y = self.y.min(height - self.height).max(0.0);
    }
}
