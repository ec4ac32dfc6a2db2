use std::vec::Vec;

use crate::mediator::MediatorIndex;

/// Position of an entry inside the heap array.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct HeapIndex(usize);

impl HeapIndex {
    #[cfg(test)]
    #[inline(always)]
    pub(crate) fn new(v: usize) -> Self {
        Self(v)
    }

    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        self.0
    }
}

struct HeapEntry<TPriority> {
    outer_pos: MediatorIndex,
    priority: TPriority,
}

/// Array-backed binary min-heap which knows nothing about keys.
/// Each entry refers to its key by `MediatorIndex`,
/// and every move of an entry is reported to a change handler
/// so the caller can keep its key to position mapping in sync.
pub(crate) struct BinaryHeap<TPriority> {
    data: Vec<HeapEntry<TPriority>>,
}

impl<TPriority: PartialOrd> BinaryHeap<TPriority> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Puts outer index and priority in heap.
    /// Calls change_handler for every moved entry, including the pushed one.
    #[inline(always)]
    pub(crate) fn push<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        outer_pos: MediatorIndex,
        priority: TPriority,
        change_handler: TChangeHandler,
    ) {
        self.data.push(HeapEntry {
            outer_pos,
            priority,
        });
        self.heapify_up(HeapIndex(self.data.len() - 1), change_handler);
    }

    /// Removes the entry with the smallest priority.
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn pop_min<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        change_handler: TChangeHandler,
    ) -> Option<(MediatorIndex, TPriority)> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        if last == 0 {
            let result = self.data.pop()?;
            return Some((result.outer_pos, result.priority));
        }
        self.swap_items(0, last);
        let result = self.data.pop()?;
        self.heapify_down(HeapIndex(0), change_handler);
        Some((result.outer_pos, result.priority))
    }

    #[inline(always)]
    pub(crate) fn most_prioritized_idx(&self) -> Option<(MediatorIndex, HeapIndex)> {
        self.data.first().map(|x| (x.outer_pos, HeapIndex(0)))
    }

    #[inline(always)]
    pub(crate) fn look_into(&self, position: HeapIndex) -> Option<(MediatorIndex, &TPriority)> {
        self.data.get(position.0).map(|x| (x.outer_pos, &x.priority))
    }

    /// Replaces priority of entry at position and restores heap order.
    /// Returns the old priority.
    pub(crate) fn change_priority<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        updated: TPriority,
        change_handler: TChangeHandler,
    ) -> TPriority {
        assert!(
            position < self.len(),
            "Out of index during changing priority"
        );

        let old = std::mem::replace(&mut self.data[position.0].priority, updated);
        let current = &self.data[position.0].priority;
        if *current < old {
            self.heapify_up(position, change_handler);
        } else if old < *current {
            self.heapify_down(position, change_handler);
        }
        old
    }

    /// Points entry at `position` to another outer index.
    /// Needed when the outer storage moves its entries.
    #[inline(always)]
    pub(crate) fn change_outer_pos(&mut self, outer_pos: MediatorIndex, position: HeapIndex) {
        assert!(position < self.len(), "Out of index during changing outer pos");
        self.data[position.0].outer_pos = outer_pos;
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> HeapIndex {
        HeapIndex(self.data.len())
    }

    #[inline(always)]
    pub(crate) fn usize_len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    #[inline(always)]
    pub(crate) fn iter(&self) -> BinaryHeapIterator<TPriority> {
        BinaryHeapIterator {
            inner: self.data.iter(),
        }
    }

    fn heapify_up<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_up");
        let mut position = position.0;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self.data[position].priority < self.data[parent_pos].priority {
                self.swap_items(parent_pos, position);
                change_handler(self.data[position].outer_pos, HeapIndex(position));
                position = parent_pos;
            } else {
                break;
            }
        }
        change_handler(self.data[position].outer_pos, HeapIndex(position));
    }

    fn heapify_down<TChangeHandler: FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_down");
        let mut position = position.0;
        loop {
            let min_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                // Equal priorities go to the left child.
                if child2 < self.data.len()
                    && self.data[child2].priority < self.data[child1].priority
                {
                    child2
                } else {
                    child1
                }
            };

            if self.data[min_child_idx].priority < self.data[position].priority {
                self.swap_items(position, min_child_idx);
                change_handler(self.data[position].outer_pos, HeapIndex(position));
                position = min_child_idx;
            } else {
                break;
            }
        }
        change_handler(self.data[position].outer_pos, HeapIndex(position));
    }

    #[inline(always)]
    fn swap_items(&mut self, pos1: usize, pos2: usize) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
    }
}

/// Iterates entries in array order, which is not priority order.
pub(crate) struct BinaryHeapIterator<'a, TPriority> {
    inner: std::slice::Iter<'a, HeapEntry<TPriority>>,
}

impl<'a, TPriority> Iterator for BinaryHeapIterator<'a, TPriority> {
    type Item = (MediatorIndex, &'a TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|x| (x.outer_pos, &x.priority))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.inner.count()
    }
}

// Default implementations

impl<TPriority: Clone> Clone for HeapEntry<TPriority> {
    fn clone(&self) -> Self {
        Self {
            outer_pos: self.outer_pos,
            priority: self.priority.clone(),
        }
    }
}

impl<TPriority: Clone> Clone for BinaryHeap<TPriority> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn is_valid_heap<TP: PartialOrd>(heap: &BinaryHeap<TP>) -> bool {
    for (i, current) in heap.data.iter().enumerate().skip(1) {
        let parent = &heap.data[(i - 1) / 2];
        if current.priority < parent.priority {
            return false;
        }
    }
    true
}
