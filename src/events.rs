//! Generation events for decoupled reporting.
//!
//! The generator pushes events as a pass runs; callers drain them afterward
//! to log, test, or drive collaborators without tight coupling.

use crate::dungeon_gen::Rect;

/// Events emitted during a generation pass
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationEvent {
    /// A leaf room was carved and added to the room list
    RoomCarved { rect: Rect },
    /// A leaf room overlapped the start area and was left as wall
    RoomDiscarded { leaf: Rect, rect: Rect },
    /// The boss room was carved at the grid center
    BossRoomCarved { rect: Rect },
    /// An L-shaped corridor was dug between two points
    CorridorDug { from: (i32, i32), to: (i32, i32) },
    /// The exit was placed at this cell
    ExitPlaced { position: (i32, i32) },
    /// The pass finished; always the last event of a pass
    MapGenerated { seed: u64, boss: bool },
}

/// Simple event queue - events are pushed during a pass, drained afterward
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GenerationEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GenerationEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GenerationEvent> + '_ {
        self.events.drain(..)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenerationEvent> + '_ {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue() {
        let mut queue = EventQueue::new();
        queue.push(GenerationEvent::ExitPlaced { position: (3, 4) });
        queue.push(GenerationEvent::MapGenerated { seed: 1, boss: false });
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1], GenerationEvent::MapGenerated { seed: 1, boss: false });
        assert!(queue.is_empty());
    }
}
