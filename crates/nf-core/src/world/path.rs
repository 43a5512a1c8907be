//! A* pathfinding over the map grid
//!
//! Moving into a tile costs the tile's cost times the step cost (cardinal
//! or diagonal). Walkable tiles cost 1; a tile holding a living blocking
//! actor costs extra, so actors route around each other when a detour is
//! cheap and queue up behind each other when it isn't.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;

use super::{GameMap, Position};
use crate::DIRECTIONS;
use crate::actor::Actors;
use crate::config::PathConfig;

/// Node in the A* open set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathNode {
    pos: Position,
    g_cost: u32,
    f_cost: u32,
}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| self.g_cost.cmp(&other.g_cost))
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cost of entering a tile, `None` if it can't be entered
fn tile_cost(map: &GameMap, actors: &Actors, pos: Position, config: &PathConfig) -> Option<u32> {
    if !map.is_walkable(pos) {
        return None;
    }
    if actors.blocking_at(pos).is_some() {
        Some(config.blocker_penalty.saturating_add(1))
    } else {
        Some(1)
    }
}

/// Lower bound on the remaining cost, given every tile costs at least 1
fn heuristic(from: Position, to: Position, config: &PathConfig) -> u32 {
    let dx = (from.x - to.x).unsigned_abs();
    let dy = (from.y - to.y).unsigned_abs();
    let (long, short) = (dx.max(dy), dx.min(dy));
    let diagonal = config
        .diagonal_cost
        .min(config.cardinal_cost.saturating_mul(2));
    config
        .cardinal_cost
        .saturating_mul(long - short)
        .saturating_add(diagonal.saturating_mul(short))
}

/// Find the cheapest route from `start` to `goal`.
///
/// The route excludes `start` and ends at `goal`. It is empty when `goal`
/// is `start`, not walkable, or unreachable.
pub fn find_path(
    map: &GameMap,
    actors: &Actors,
    start: Position,
    goal: Position,
    config: &PathConfig,
) -> Vec<Position> {
    if start == goal || !map.in_bounds(start) || !map.is_walkable(goal) {
        return Vec::new();
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut g_scores: HashMap<Position, u32> = HashMap::new();

    g_scores.insert(start, 0);
    open_set.push(PathNode {
        pos: start,
        g_cost: 0,
        f_cost: heuristic(start, goal, config),
    });

    while let Some(current) = open_set.pop() {
        if current.pos == goal {
            return reconstruct_path(&came_from, start, goal);
        }
        if current.g_cost > g_scores.get(&current.pos).copied().unwrap_or(u32::MAX) {
            continue;
        }

        for (dx, dy) in DIRECTIONS {
            let neighbor = current.pos.offset(dx, dy);
            let Some(cost) = tile_cost(map, actors, neighbor, config) else {
                continue;
            };
            let step = if dx != 0 && dy != 0 {
                config.diagonal_cost
            } else {
                config.cardinal_cost
            };

            let tentative_g = current.g_cost.saturating_add(cost.saturating_mul(step));
            if tentative_g < g_scores.get(&neighbor).copied().unwrap_or(u32::MAX) {
                came_from.insert(neighbor, current.pos);
                g_scores.insert(neighbor, tentative_g);
                open_set.push(PathNode {
                    pos: neighbor,
                    g_cost: tentative_g,
                    f_cost: tentative_g.saturating_add(heuristic(neighbor, goal, config)),
                });
            }
        }
    }

    tracing::debug!(?start, ?goal, "no path");
    Vec::new()
}

fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        if prev == start {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
