/// Axis-aligned rectangle defined by min and max corners
///
/// A negative size is allowed and simply puts `max` above or left of `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: [f32; 2], size: [f32; 2]) -> Self {
        Self {
            min,
            max: [min[0] + size[0], min[1] + size[1]],
        }
    }

    pub fn top_left(&self) -> [f32; 2] {
        self.min
    }

    pub fn top_right(&self) -> [f32; 2] {
        [self.max[0], self.min[1]]
    }

    pub fn bottom_left(&self) -> [f32; 2] {
        [self.min[0], self.max[1]]
    }

    pub fn bottom_right(&self) -> [f32; 2] {
        self.max
    }
}
