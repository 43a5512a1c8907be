//! Buildings

use serde::{Deserialize, Serialize};
use strum::Display;

use super::Position;
use crate::actor::ActorId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildingId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum BuildingKind {
    #[default]
    House,
}

/// A rectangular building on the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub kind: BuildingKind,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub owner: Option<ActorId>,
}

impl Building {
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            id: BuildingId::default(),
            name: name.into(),
            kind: BuildingKind::House,
            x,
            y,
            width,
            height,
            owner: None,
        }
    }

    /// Top-left corner; where the owner heads at night
    pub fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn x2(&self) -> i32 {
        self.x + self.width
    }

    pub fn y2(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Position {
        Position::new((self.x + self.x2()) / 2, (self.y + self.y2()) / 2)
    }

    /// True if the two rectangles touch or overlap
    pub fn intersects(&self, other: &Building) -> bool {
        self.x <= other.x2() && self.x2() >= other.x && self.y <= other.y2() && self.y2() >= other.y
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x && pos.x < self.x2() && pos.y >= self.y && pos.y < self.y2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let b = Building::new("Hut", 2, 4, 4, 6);
        assert_eq!(b.center(), Position::new(4, 7));
    }

    #[test]
    fn test_intersects_includes_touching() {
        let a = Building::new("a", 0, 0, 4, 4);
        let b = Building::new("b", 4, 4, 2, 2);
        let c = Building::new("c", 10, 10, 2, 2);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_contains() {
        let b = Building::new("Hut", 1, 1, 3, 3);
        assert!(b.contains(Position::new(3, 3)));
        assert!(!b.contains(Position::new(4, 3)));
    }
}
