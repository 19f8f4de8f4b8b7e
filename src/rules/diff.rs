//! Cell-by-cell comparison of a state and its candidate successor.
//!
//! Every variant validates a move the same way before applying its own
//! constraints: walk both boards, and classify each cell whose owner
//! changed.
//!
//! - **Departure**: owned by the mover before, empty after.
//! - **Arrival**: not owned by the mover before (empty or enemy), owned
//!   by the mover after.
//!
//! Any other ownership change is something the mover could not have done
//! and rejects the candidate outright.

use smallvec::SmallVec;

use super::violation::RuleViolation;
use crate::core::{Cell, Coord, GameState, PlayerSlot};

/// One cell whose owner differs between the two states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellChange {
    pub at: Coord,
    pub before: Cell,
    pub after: Cell,
}

/// The classified differences between `before` and `after`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardDiff {
    pub departures: SmallVec<[CellChange; 2]>,
    pub arrivals: SmallVec<[CellChange; 2]>,
}

impl BoardDiff {
    /// Total number of changed cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.departures.len() + self.arrivals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The single arrival of a placement, rejecting anything else.
    pub fn single_placement(&self) -> Result<CellChange, RuleViolation> {
        if self.len() != 1 {
            return Err(RuleViolation::WrongChangeCount {
                expected: 1,
                found: self.len(),
            });
        }
        if let Some(departure) = self.departures.first() {
            return Err(RuleViolation::IllegalChange { at: departure.at });
        }
        let arrival = self.arrivals[0];
        if !arrival.before.is_empty() {
            return Err(RuleViolation::OccupiedDestination { at: arrival.at });
        }
        Ok(arrival)
    }

    /// The `(departure, arrival)` pair of a relocation, rejecting anything else.
    pub fn single_relocation(&self) -> Result<(CellChange, CellChange), RuleViolation> {
        if self.len() != 2 {
            return Err(RuleViolation::WrongChangeCount {
                expected: 2,
                found: self.len(),
            });
        }
        match (self.departures.as_slice(), self.arrivals.as_slice()) {
            ([from], [to]) => Ok((*from, *to)),
            ([_, second], []) => Err(RuleViolation::IllegalChange { at: second.at }),
            (_, [_, second]) => Err(RuleViolation::IllegalChange { at: second.at }),
            _ => Err(RuleViolation::WrongChangeCount {
                expected: 2,
                found: self.len(),
            }),
        }
    }
}

/// Diff `before` against `after` from `mover`'s point of view.
pub fn classify(
    before: &GameState,
    after: &GameState,
    mover: PlayerSlot,
) -> Result<BoardDiff, RuleViolation> {
    if before.size() != after.size() {
        return Err(RuleViolation::DimensionMismatch {
            expected: before.size(),
            found: after.size(),
        });
    }
    if !mover.is_seat() {
        return Err(RuleViolation::NoMover);
    }

    let mut diff = BoardDiff::default();
    for ((at, &was), (_, &now)) in before.iter().zip(after.iter()) {
        if was.owner == now.owner {
            continue;
        }
        let change = CellChange {
            at,
            before: was,
            after: now,
        };
        if was.owner == mover && now.is_empty() {
            diff.departures.push(change);
        } else if now.owner == mover {
            diff.arrivals.push(change);
        } else {
            return Err(RuleViolation::IllegalChange { at });
        }
    }
    Ok(diff)
}
