use crate::core::models::{CellValue, Vec2};
use crate::core::rules::{Counts, Validity};

/// Notifications a grid sends to its observers. Events are delivered only after the cell write,
/// the counts and the validity are all up to date; `CountsChanged` carries the new counts so
/// observers never need to read them back from the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridEvent {
    CellChanged { pos: Vec2, value: CellValue },
    CountsChanged(Counts),
    ValidityChanged(Validity),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&GridEvent)>;

#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

impl Observers {
    pub fn subscribe(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, callback));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, event: &GridEvent) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }
}
