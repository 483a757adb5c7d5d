/// Planar point in the map's native units (longitude, latitude degrees).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from a raw position slice.
    ///
    /// Returns `None` unless the slice has exactly two finite components.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [x, y] if x.is_finite() && y.is_finite() => Some(Self::new(*x, *y)),
            _ => None,
        }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(self.x - other.x, self.y - other.y)
    }
}
