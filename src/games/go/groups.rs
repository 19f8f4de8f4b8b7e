//! Stone groups, liberties and capture.
//!
//! A group is a maximal set of same-owner stones connected orthogonally.
//! Discovery always walks the whole component before looking at liberties,
//! so a group is never cut short when a liberty turns up early.

use rustc_hash::FxHashSet;

use crate::core::{Cell, Coord, GameState, PlayerSlot};

/// A connected component of one player's stones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub owner: PlayerSlot,
    pub stones: Vec<Coord>,
    pub liberties: FxHashSet<Coord>,
}

impl Group {
    /// True if the group has no liberty left.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Flood-fill the group containing `start`.
///
/// Returns `None` if `start` is off the board or empty.
#[must_use]
pub fn group_at(state: &GameState, start: Coord) -> Option<Group> {
    let owner = state.owner(start);
    if !owner.is_seat() {
        return None;
    }

    let mut seen = FxHashSet::default();
    let mut liberties = FxHashSet::default();
    let mut stones = Vec::new();
    let mut stack = vec![start];
    seen.insert(start);

    while let Some(at) = stack.pop() {
        stones.push(at);
        for next in at.neighbours() {
            match state.get(next) {
                Some(cell) if cell.is_empty() => {
                    liberties.insert(next);
                }
                Some(cell) if cell.owner == owner && seen.insert(next) => stack.push(next),
                _ => {}
            }
        }
    }

    Some(Group {
        owner,
        stones,
        liberties,
    })
}

/// Remove every group not owned by `mover` that has no liberty.
///
/// Groups are judged against the board as it stands before any removal.
/// Returns the number of stones removed.
pub fn capture_dead_groups(state: &mut GameState, mover: PlayerSlot) -> usize {
    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    let mut dead = Vec::new();

    for at in state.coords() {
        let owner = state.owner(at);
        if !owner.is_seat() || owner == mover || visited.contains(&at) {
            continue;
        }
        if let Some(group) = group_at(state, at) {
            visited.extend(group.stones.iter().copied());
            if group.is_dead() {
                dead.push(group);
            }
        }
    }

    let mut removed = 0;
    for group in dead {
        for at in group.stones {
            if let Ok(cell) = state.at_mut(at) {
                *cell = Cell::EMPTY;
                removed += 1;
            }
        }
    }
    removed
}
