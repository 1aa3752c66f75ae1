use serde::Serialize;

/// Axis-aligned key rectangle with its centre precomputed.
///
/// Bounds are private so the centre can never drift from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hitbox {
    top: i32,
    bottom: i32,
    left: i32,
    right: i32,
    cx: f32,
    cy: f32,
}

impl Hitbox {
    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
            cx: midpoint(left, right),
            cy: midpoint(top, bottom),
        }
    }

    /// Builds a hitbox from a top-left corner plus width and height.
    ///
    /// Returns `None` when the far edge does not fit in `i32`.
    pub fn from_rect(x: i32, y: i32, w: i32, h: i32) -> Option<Self> {
        Some(Self::new(y, y.checked_add(h)?, x, x.checked_add(w)?))
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn right(&self) -> i32 {
        self.right
    }

    pub fn cx(&self) -> f32 {
        self.cx
    }

    pub fn cy(&self) -> f32 {
        self.cy
    }

    pub fn width(&self) -> i64 {
        i64::from(self.right) - i64::from(self.left)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.bottom) - i64::from(self.top)
    }

    pub fn central_coords(&self) -> [f32; 2] {
        [self.cx, self.cy]
    }

    /// Half-open containment: the right and bottom edges belong to the neighbour.
    pub fn is_in(&self, x: f32, y: f32) -> bool {
        let (x, y) = (f64::from(x), f64::from(y));
        f64::from(self.left) <= x
            && x < f64::from(self.right)
            && f64::from(self.top) <= y
            && y < f64::from(self.bottom)
    }
}

// i32 bounds sum and halve exactly in f64
fn midpoint(a: i32, b: i32) -> f32 {
    ((f64::from(a) + f64::from(b)) / 2.0) as f32
}
