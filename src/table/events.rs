//! Table notifications.
//!
//! Everything observable that happens at a table is published as a
//! [`TableEvent`]. The [`EventBus`] delivers each event two ways:
//!
//! - **Subscribers** are called synchronously, in subscription order, while
//!   the table is still publishing. They only see `&TableEvent` and cannot
//!   reach the table, so they can render or log but never play.
//! - **The outbox** keeps a FIFO copy of every event for deferred
//!   consumers. A bot driver drains it after the table call returns and
//!   reacts then, so at most one move is ever in flight.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::game::MoveRejection;
use crate::core::{Coord, PlayerId, PlayerSlot};

/// Something that happened at a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEvent {
    /// A move was committed; the turn has already passed on.
    PlayerMoved {
        player: PlayerId,
        slot: PlayerSlot,
        from: Coord,
        to: Coord,
    },
    /// A move request was refused. The state did not change.
    InvalidMove {
        player: PlayerId,
        reason: MoveRejection,
    },
    /// The game ended. `Unknown` means a draw.
    GameOver { winner: PlayerSlot },
    /// `start_game` was refused for lack of players.
    MissingPlayers { missing: usize },
    /// The table opened or closed.
    GameOpenChanged { open: bool },
    /// A join was refused because every seat is taken.
    MaxPlayersReached { max: usize },
}

impl TableEvent {
    /// True for events after which a different player may be on turn.
    #[must_use]
    pub fn changes_turn(&self) -> bool {
        matches!(
            self,
            TableEvent::PlayerMoved { .. } | TableEvent::GameOpenChanged { .. }
        )
    }
}

/// Handle returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriberId(pub u64);

impl SubscriberId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscriber({})", self.0)
    }
}

type Listener = Box<dyn FnMut(&TableEvent)>;

/// Ordered listener registry plus a FIFO outbox.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(SubscriberId, Listener)>,
    next_id: u64,
    outbox: VecDeque<TableEvent>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners are called in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&TableEvent) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to every listener, then queue it in the outbox.
    pub fn publish(&mut self, event: TableEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
        self.outbox.push_back(event);
    }

    /// Take the oldest queued event.
    pub fn pop(&mut self) -> Option<TableEvent> {
        self.outbox.pop_front()
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> std::collections::vec_deque::Drain<'_, TableEvent> {
        self.outbox.drain(..)
    }

    /// Number of queued events.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.outbox.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .field("outbox", &self.outbox)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_listeners_called_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::new();

        let first = Rc::clone(&log);
        bus.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        bus.subscribe(move |_| second.borrow_mut().push("second"));

        bus.publish(TableEvent::GameOpenChanged { open: true });
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = EventBus::new();

        let c = Rc::clone(&count);
        let id = bus.subscribe(move |_| *c.borrow_mut() += 1);
        bus.publish(TableEvent::GameOver {
            winner: PlayerSlot::Unknown,
        });
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(TableEvent::GameOver {
            winner: PlayerSlot::Unknown,
        });

        assert_eq!(*count.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_outbox_is_fifo() {
        let mut bus = EventBus::new();
        bus.publish(TableEvent::MissingPlayers { missing: 2 });
        bus.publish(TableEvent::GameOpenChanged { open: true });
        assert_eq!(bus.pending(), 2);

        assert_eq!(bus.pop(), Some(TableEvent::MissingPlayers { missing: 2 }));
        let rest: Vec<_> = bus.drain().collect();
        assert_eq!(rest, vec![TableEvent::GameOpenChanged { open: true }]);
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn test_changes_turn() {
        assert!(TableEvent::GameOpenChanged { open: true }.changes_turn());
        assert!(!TableEvent::GameOver {
            winner: PlayerSlot::Player1
        }
        .changes_turn());
        assert!(!TableEvent::MaxPlayersReached { max: 2 }.changes_turn());
    }

    #[test]
    fn test_event_serialization() {
        let event = TableEvent::PlayerMoved {
            player: PlayerId::new("alice"),
            slot: PlayerSlot::Player1,
            from: Coord::new(2, 1),
            to: Coord::new(3, 2),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: TableEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
