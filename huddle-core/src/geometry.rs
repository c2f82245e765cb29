use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Pixel offset from the default window anchor, or a pointer position in client space
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const ORIGIN: Offset = Offset { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl From<(i32, i32)> for Offset {
    fn from((x, y): (i32, i32)) -> Self {
        Offset::new(x, y)
    }
}
