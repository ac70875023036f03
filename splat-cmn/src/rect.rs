use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Screen-space rectangle. `start` and `end` are opposite corners in
/// whichever order the gesture produced them; call [`Rect::normalized`]
/// before treating them as min/max.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub start: Vec2,
    pub end: Vec2,
}

impl Rect {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Same area with `start` at the min corner and `end` at the max corner.
    pub fn normalized(&self) -> Self {
        Self {
            start: self.start.min(self.end),
            end: self.start.max(self.end),
        }
    }

    pub fn min(&self) -> Vec2 {
        self.start.min(self.end)
    }

    pub fn max(&self) -> Vec2 {
        self.start.max(self.end)
    }

    pub fn size(&self) -> Vec2 {
        (self.end - self.start).abs()
    }
}
