use std::vec;

use crate::value::Value;

/// Kind of container a structural event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Object,
    Array,
}

/// Child-position facts, decided exactly once when the traversal first
/// reaches the slot: whether a `,` precedes this child, and the mapping key
/// if the enclosing container is an object.
///
/// A deferred child keeps the slot decided here; its resolved replacement
/// re-enters with a blank slot so neither separator nor key is emitted twice.
#[derive(Debug)]
pub struct Slot {
    pub key: Option<String>,
    pub separator: bool,
}

impl Slot {
    fn blank() -> Self {
        Slot { key: None, separator: false }
    }
}

/// One structural event of the depth-first walk.
///
/// `Item.value` is never `Array` or `Object`; containers are announced by
/// `Open`/`Close` pairs, with the child's slot attached to `Open`.
#[derive(Debug)]
pub enum Event {
    Open { kind: ContainerKind, slot: Slot },
    Close { kind: ContainerKind },
    Item { slot: Slot, value: Value },
}

enum Frame {
    Array { items: vec::IntoIter<Value>, first: bool },
    Object { entries: vec::IntoIter<(String, Value)>, first: bool },
}

/// Lazy depth-first traversal of one root value. Single use: construct a new
/// one per serialization.
///
/// The traversal owns the value tree and never awaits anything; resolving a
/// deferred leaf is the consumer's job, after which [`Traversal::splice`]
/// re-enters the replacement at the current position.
pub struct Traversal {
    pending: Option<(Slot, Value)>,
    stack: Vec<Frame>,
}

impl Traversal {
    pub fn new(root: Value) -> Self {
        Traversal {
            pending: Some((Slot::blank(), root)),
            stack: Vec::new(),
        }
    }

    /// Re-enter a resolved deferred's replacement at the current position, as
    /// if it had been the child's original value. The slot was already
    /// decided (and its separator/key emitted) for the deferred item, so the
    /// replacement enters with a blank slot; the parent frame's first-child
    /// flag is already consumed, so the next sibling separates normally.
    pub fn splice(&mut self, replacement: Value) {
        self.pending = Some((Slot::blank(), replacement));
    }

    pub fn next_event(&mut self) -> Option<Event> {
        if let Some((slot, value)) = self.pending.take() {
            return Some(self.enter(slot, value));
        }

        let next_child = match self.stack.last_mut() {
            None => return None,
            Some(Frame::Array { items, first }) => items.next().map(|value| {
                let slot = Slot { key: None, separator: !*first };
                *first = false;
                (slot, value)
            }),
            Some(Frame::Object { entries, first }) => entries.next().map(|(key, value)| {
                let slot = Slot { key: Some(key), separator: !*first };
                *first = false;
                (slot, value)
            }),
        };

        match next_child {
            Some((slot, value)) => Some(self.enter(slot, value)),
            None => match self.stack.pop() {
                Some(Frame::Array { .. }) => Some(Event::Close { kind: ContainerKind::Array }),
                Some(Frame::Object { .. }) => Some(Event::Close { kind: ContainerKind::Object }),
                None => None,
            },
        }
    }

    fn enter(&mut self, slot: Slot, value: Value) -> Event {
        match value {
            Value::Array(items) => {
                self.stack.push(Frame::Array { items: items.into_iter(), first: true });
                Event::Open { kind: ContainerKind::Array, slot }
            }
            Value::Object(entries) => {
                self.stack.push(Frame::Object { entries: entries.into_iter(), first: true });
                Event::Open { kind: ContainerKind::Object, slot }
            }
            value => Event::Item { slot, value },
        }
    }
}
