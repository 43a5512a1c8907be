//! Map grid
//!
//! Tiles, per-tile visibility, items lying on the floor and the buildings
//! actors call home. Cells are stored column-major (`tiles[x][y]`).

use serde::{Deserialize, Serialize};
use strum::Display;

use super::{Building, BuildingId, Position};
use crate::object::Item;

/// Terrain of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum TileKind {
    #[default]
    Wall,
    Floor,
    Grass,
    /// A building's floor
    Planks,
}

impl TileKind {
    pub const fn is_walkable(self) -> bool {
        !matches!(self, TileKind::Wall)
    }

    pub const fn is_transparent(self) -> bool {
        !matches!(self, TileKind::Wall)
    }
}

/// An item lying on the ground
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorItem {
    pub pos: Position,
    pub item: Item,
}

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    width: i32,
    height: i32,
    tiles: Vec<Vec<TileKind>>,
    visible: Vec<Vec<bool>>,
    explored: Vec<Vec<bool>>,
    pub items: Vec<FloorItem>,
    pub buildings: Vec<Building>,
}

impl GameMap {
    /// A map covered with a single kind of tile
    pub fn filled(width: u16, height: u16, kind: TileKind) -> Self {
        let (w, h) = (usize::from(width), usize::from(height));
        Self {
            width: i32::from(width),
            height: i32::from(height),
            tiles: vec![vec![kind; h]; w],
            visible: vec![vec![false; h]; w],
            explored: vec![vec![false; h]; w],
            items: Vec::new(),
            buildings: Vec::new(),
        }
    }

    /// Solid rock, to be carved out
    pub fn new(width: u16, height: u16) -> Self {
        Self::filled(width, height, TileKind::Wall)
    }

    /// Open ground bounded by a wall
    pub fn walled(width: u16, height: u16) -> Self {
        let mut map = Self::filled(width, height, TileKind::Grass);
        for x in 0..map.width {
            map.set_tile(Position::new(x, 0), TileKind::Wall);
            map.set_tile(Position::new(x, map.height - 1), TileKind::Wall);
        }
        for y in 0..map.height {
            map.set_tile(Position::new(0, y), TileKind::Wall);
            map.set_tile(Position::new(map.width - 1, y), TileKind::Wall);
        }
        map
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub const fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn tile(&self, pos: Position) -> Option<TileKind> {
        self.in_bounds(pos)
            .then(|| self.tiles[pos.x as usize][pos.y as usize])
    }

    pub fn set_tile(&mut self, pos: Position, kind: TileKind) {
        if self.in_bounds(pos) {
            self.tiles[pos.x as usize][pos.y as usize] = kind;
        }
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(TileKind::is_walkable)
    }

    pub fn is_transparent(&self, pos: Position) -> bool {
        self.tile(pos).is_some_and(TileKind::is_transparent)
    }

    /// Set every tile in a rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, kind: TileKind) {
        for tx in x..x + width {
            for ty in y..y + height {
                self.set_tile(Position::new(tx, ty), kind);
            }
        }
    }

    pub fn is_visible(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.visible[pos.x as usize][pos.y as usize]
    }

    pub fn is_explored(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.explored[pos.x as usize][pos.y as usize]
    }

    /// Recompute visible tiles around `origin`.
    ///
    /// A tile is visible when it lies within `radius` by the diamond
    /// (Manhattan) metric and a line of sight reaches it. Everything seen
    /// is marked explored.
    pub fn update_visibility(&mut self, origin: Position, radius: i32) {
        for col in &mut self.visible {
            col.fill(false);
        }
        if !self.in_bounds(origin) {
            return;
        }
        self.mark_seen(origin);

        let radius = radius.max(0);
        for dx in -radius..=radius {
            let span = radius - dx.abs();
            for dy in -span..=span {
                let target = origin.offset(dx, dy);
                if self.in_bounds(target) && self.has_line_of_sight(origin, target) {
                    self.mark_seen(target);
                }
            }
        }
    }

    fn mark_seen(&mut self, pos: Position) {
        self.visible[pos.x as usize][pos.y as usize] = true;
        self.explored[pos.x as usize][pos.y as usize] = true;
    }

    /// Bresenham line of sight. Opaque tiles are seen but not seen past.
    pub fn has_line_of_sight(&self, from: Position, to: Position) -> bool {
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - x).abs();
        let dy = -(to.y - y).abs();
        let sx = if x < to.x { 1 } else { -1 };
        let sy = if y < to.y { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            let here = Position::new(x, y);
            if here != from {
                if !self.in_bounds(here) {
                    return false;
                }
                if !self.is_transparent(here) {
                    return here == to;
                }
            }
            if here == to {
                return true;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Drop an item on a tile
    pub fn place_item(&mut self, pos: Position, item: Item) {
        self.items.push(FloorItem { pos, item });
    }

    pub fn items_at(&self, pos: Position) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |f| f.pos == pos).map(|f| &f.item)
    }

    /// Pick up the topmost item on a tile
    pub fn take_item_at(&mut self, pos: Position) -> Option<Item> {
        let idx = self.items.iter().rposition(|f| f.pos == pos)?;
        Some(self.items.remove(idx).item)
    }

    /// Register a building and lay its floor
    pub fn add_building(&mut self, mut building: Building) -> BuildingId {
        let id = BuildingId(self.buildings.len() as u32 + 1);
        building.id = id;
        self.fill_rect(
            building.x,
            building.y,
            building.width,
            building.height,
            TileKind::Planks,
        );
        self.buildings.push(building);
        id
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }
}
