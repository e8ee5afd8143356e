use super::BoundaryError;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Live,
    Consumed,
    Discarded,
}

/// A growable store of objects addressed by their insertion index.
///
/// Indices are never reused: once an object is moved out or discarded, its payload is dropped and
/// its slot shrinks to a one byte tombstone recording how it died, so that a stale index is
/// reported precisely instead of aliasing a newer object.
pub struct Arena<T> {
    slots: Vec<Slot>,
    live: HashMap<usize, T>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Arena {
            slots: Vec::new(),
            live: HashMap::new(),
        }
    }
}

impl<T> Arena<T> {
    pub(crate) fn insert(&mut self, value: T) -> usize {
        let index = self.slots.len();
        self.slots.push(Slot::Live);
        self.live.insert(index, value);
        index
    }

    pub(crate) fn get(&self, index: usize) -> Result<&T, BoundaryError> {
        self.check_live(index)?;
        self.live.get(&index).ok_or(BoundaryError::UnknownHandle)
    }

    /// Moves the object out, leaving a `Consumed` tombstone.
    pub(crate) fn take(&mut self, index: usize) -> Result<T, BoundaryError> {
        self.kill(index, Slot::Consumed)
    }

    /// Drops the object, leaving a `Discarded` tombstone.
    pub(crate) fn discard(&mut self, index: usize) -> Result<(), BoundaryError> {
        self.kill(index, Slot::Discarded).map(drop)
    }

    /// Number of live objects.
    pub(crate) fn live_count(&self) -> usize {
        self.live.len()
    }

    fn check_live(&self, index: usize) -> Result<(), BoundaryError> {
        match self.slots.get(index) {
            Some(Slot::Live) => Ok(()),
            Some(Slot::Consumed) => Err(BoundaryError::HandleConsumed),
            Some(Slot::Discarded) => Err(BoundaryError::HandleDiscarded),
            None => Err(BoundaryError::UnknownHandle),
        }
    }

    // The first tombstone is kept.
    fn kill(&mut self, index: usize, tombstone: Slot) -> Result<T, BoundaryError> {
        self.check_live(index)?;
        let value = self
            .live
            .remove(&index)
            .ok_or(BoundaryError::UnknownHandle)?;
        self.slots[index] = tombstone;
        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn taken_slots_report_consumption() {
        let mut arena = Arena::default();
        let index = arena.insert(3_u64);
        assert_eq!(arena.take(index), Ok(3));
        assert_eq!(arena.get(index), Err(BoundaryError::HandleConsumed));
        assert_eq!(arena.take(index), Err(BoundaryError::HandleConsumed));
        assert_eq!(arena.discard(index), Err(BoundaryError::HandleConsumed));
    }

    #[test]
    fn discarded_slots_report_discard() {
        let mut arena = Arena::default();
        let index = arena.insert(3_u64);
        assert_eq!(arena.discard(index), Ok(()));
        assert_eq!(arena.take(index), Err(BoundaryError::HandleDiscarded));
        assert_eq!(arena.get(index), Err(BoundaryError::HandleDiscarded));
    }

    #[test]
    fn indices_are_not_reused() {
        let mut arena = Arena::default();
        let first = arena.insert(1_u64);
        arena.discard(first).unwrap();
        let second = arena.insert(2_u64);
        assert_ne!(first, second);
        assert_eq!(arena.get(second), Ok(&2));
        assert_eq!(arena.live_count(), 1);
        assert_eq!(arena.get(second + 1), Err(BoundaryError::UnknownHandle));
    }

    #[test]
    fn tombstones_release_their_payload() {
        let mut arena = Arena::default();
        let indices = (0..64)
            .map(|_| arena.insert(vec![0_u64; 1024]))
            .collect::<Vec<_>>();
        for index in indices.iter().step_by(2) {
            arena.take(*index).unwrap();
        }
        for index in indices.iter().skip(1).step_by(2) {
            arena.discard(*index).unwrap();
        }
        assert_eq!(arena.live_count(), 0);
        assert!(arena.live.is_empty());
        assert_eq!(std::mem::size_of::<Slot>(), 1);
        assert_eq!(arena.get(indices[0]), Err(BoundaryError::HandleConsumed));
        assert_eq!(arena.get(indices[1]), Err(BoundaryError::HandleDiscarded));
    }
}
