//! Fixed-capacity entity pool with generational handles.
//!
//! Slots are preallocated and never grow. Free slots sit on an index
//! stack, so `acquire` and `release` are O(1). Exhaustion is a normal
//! outcome: `acquire` hands the value back as `None` and the caller drops
//! the request.

use holdout_core::types::Handle;

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

pub struct Pool<T> {
    slots: Vec<Slot<T>>,
    free_indices: Vec<u32>,
    active: usize,
}

impl<T> Pool<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        let slots = (0..capacity)
            .map(|_| Slot {
                generation: 0,
                value: None,
            })
            .collect();
        // Reversed so the lowest index is handed out first.
        let free_indices = (0..capacity as u32).rev().collect();
        Self {
            slots,
            free_indices,
            active: 0,
        }
    }

    /// Activate a slot holding `value`. Returns `None` when full.
    pub fn acquire(&mut self, value: T) -> Option<Handle> {
        let index = self.free_indices.pop()?;
        let slot = &mut self.slots[index as usize];
        slot.value = Some(value);
        self.active += 1;
        Some(Handle::new(index, slot.generation))
    }

    /// Deactivate the slot and return its value. Stale handles are ignored.
    pub fn release(&mut self, handle: Handle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_indices.push(handle.index);
        self.active -= 1;
        Some(value)
    }

    pub fn get(&self, handle: Handle) -> Option<&T> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_ref()
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_mut()
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    /// Active entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &T)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.value
                .as_ref()
                .map(|v| (Handle::new(i as u32, slot.generation), v))
        })
    }

    /// Active entries in slot order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Handle, &mut T)> {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| {
            let generation = slot.generation;
            slot.value
                .as_mut()
                .map(|v| (Handle::new(i as u32, generation), v))
        })
    }

    /// Release every entry for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(Handle, &mut T) -> bool) {
        for index in 0..self.slots.len() {
            let slot = &mut self.slots[index];
            let handle = Handle::new(index as u32, slot.generation);
            let drop_it = match slot.value.as_mut() {
                Some(value) => !keep(handle, value),
                None => false,
            };
            if drop_it {
                self.release(handle);
            }
        }
    }

    /// Release every active entry.
    pub fn clear(&mut self) {
        self.retain(|_, _| false);
    }

    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    pub fn is_full(&self) -> bool {
        self.free_indices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn acquire_and_release() {
        let mut pool = Pool::with_capacity(4);
        let h0 = pool.acquire("a").unwrap();
        assert_eq!(h0.index, 0);
        assert_eq!(h0.generation, 0);
        assert_eq!(pool.get(h0), Some(&"a"));

        assert_eq!(pool.release(h0), Some("a"));
        assert!(!pool.contains(h0));

        let h0_reuse = pool.acquire("b").unwrap();
        assert_eq!(h0_reuse.index, 0);
        assert_eq!(h0_reuse.generation, 1);
        assert_eq!(pool.get(h0), None);
        assert_eq!(pool.get(h0_reuse), Some(&"b"));
    }

    #[test]
    fn sequential_acquire() {
        let mut pool = Pool::with_capacity(3);
        let handles: Vec<_> = (0..3).map(|i| pool.acquire(i).unwrap().index).collect();
        assert_eq!(handles, vec![0, 1, 2]);
    }

    #[test]
    fn exhaustion_returns_none() {
        let mut pool = Pool::with_capacity(2);
        assert!(pool.acquire(1).is_some());
        assert!(pool.acquire(2).is_some());
        assert!(pool.is_full());
        assert!(pool.acquire(3).is_none());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn double_release_is_noop() {
        let mut pool = Pool::with_capacity(2);
        let h = pool.acquire(7).unwrap();
        assert_eq!(pool.release(h), Some(7));
        assert_eq!(pool.release(h), None);
        assert_eq!(pool.len(), 0);
        // Free list must not contain the index twice.
        assert!(pool.acquire(1).is_some());
        assert!(pool.acquire(2).is_some());
        assert!(pool.acquire(3).is_none());
    }

    #[test]
    fn retain_releases_in_place() {
        let mut pool = Pool::with_capacity(5);
        for i in 0..5 {
            pool.acquire(i).unwrap();
        }
        pool.retain(|_, v| *v % 2 == 0);
        let left: Vec<_> = pool.iter().map(|(_, v)| *v).collect();
        assert_eq!(left, vec![0, 2, 4]);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn clear_empties_pool() {
        let mut pool = Pool::with_capacity(3);
        let h = pool.acquire(1).unwrap();
        pool.acquire(2).unwrap();
        pool.clear();
        assert!(pool.is_empty());
        assert!(!pool.contains(h));
        assert_eq!(pool.capacity(), 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Acquire(u32),
        Release(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u32>().prop_map(Op::Acquire),
            (0usize..16).prop_map(Op::Release),
        ]
    }

    proptest! {
        /// Live handles always read back their own value and the active
        /// count never exceeds capacity.
        #[test]
        fn prop_handles_never_alias(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let capacity = 8;
            let mut pool = Pool::with_capacity(capacity);
            let mut live: Vec<(Handle, u32)> = Vec::new();
            let mut stale: Vec<Handle> = Vec::new();

            for op in ops {
                match op {
                    Op::Acquire(v) => match pool.acquire(v) {
                        Some(h) => live.push((h, v)),
                        None => prop_assert_eq!(live.len(), capacity),
                    },
                    Op::Release(i) => {
                        if !live.is_empty() {
                            let (h, v) = live.remove(i % live.len());
                            prop_assert_eq!(pool.release(h), Some(v));
                            stale.push(h);
                        }
                    }
                }
                prop_assert!(pool.len() <= pool.capacity());
                prop_assert_eq!(pool.len(), live.len());
                for (h, v) in &live {
                    prop_assert_eq!(pool.get(*h), Some(v));
                }
                for h in &stale {
                    prop_assert!(!pool.contains(*h));
                }
            }
        }
    }
}
