use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::Debug;
use std::hash::{BuildHasher, Hash};

use log::debug;

use crate::editable_binary_heap::{BinaryHeap, BinaryHeapIterator};
use crate::error::HeapError;
use crate::mediator::{Mediator, MediatorEntry, MediatorIndex};

/// A min-priority queue that supports changing priority of queued elements.
///
/// Smaller `TPriority` values are extracted first.
/// Default priority type is `f64`; any `PartialOrd` type works
/// as long as its values are comparable with themselves.
/// Priorities like `f64::NAN` are rejected with [`HeapError::UnorderedPriority`].
///
/// Every element can be queued only once. Inserting queued element again
/// fails with [`HeapError::DuplicateElement`], use [`update_priority`] instead.
///
/// It is logic error if element changes its hash or equality while in queue.
/// This changes normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// [`update_priority`]: struct.IndexedMinHeap.html#method.update_priority
///
/// # Examples
///
/// ```
/// use indexed_min_heap::{HeapError, IndexedMinHeap};
///
/// let mut queue: IndexedMinHeap<&str> = IndexedMinHeap::new();
///
/// // Currently queue is empty
/// assert_eq!(queue.peek_min(), Err(HeapError::EmptyQueue));
///
/// queue.insert("Second", 2.0).unwrap();
/// queue.insert("Fourth", 4.0).unwrap();
/// queue.insert("First", 1.0).unwrap();
/// queue.insert("Third", 3.0).unwrap();
///
/// // Same element can't be queued twice
/// assert_eq!(queue.insert("First", 0.5), Err(HeapError::DuplicateElement));
/// assert_eq!(queue.len(), 4);
///
/// assert_eq!(queue.peek_min(), Ok(&"First"));
/// assert_eq!(queue.extract_min(), Ok("First"));
///
/// // Priorities can be decreased
/// assert_eq!(queue.update_priority("Fourth", 0.0), Ok(4.0));
/// assert_eq!(queue.extract_min_entry(), Ok(("Fourth", 0.0)));
/// // And increased
/// queue.update_priority("Second", 10.0).unwrap();
/// assert_eq!(queue.extract_min(), Ok("Third"));
/// assert_eq!(queue.extract_min(), Ok("Second"));
///
/// assert!(queue.is_empty());
/// assert_eq!(queue.extract_min(), Err(HeapError::EmptyQueue));
/// ```
#[derive(Clone)]
pub struct IndexedMinHeap<TElement, TPriority = f64, S = RandomState>
where
    TElement: Hash + Eq,
    TPriority: PartialOrd,
    S: BuildHasher,
{
    heap: BinaryHeap<TPriority>,
    key_to_pos: Mediator<TElement, S>,
}

impl<TElement: Hash + Eq, TPriority: PartialOrd> IndexedMinHeap<TElement, TPriority, RandomState> {
    /// Creates an empty queue
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_heap::IndexedMinHeap;
    /// let mut queue = IndexedMinHeap::new();
    /// queue.insert("Key", 4.0).unwrap();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::default())
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_heap::IndexedMinHeap;
    /// let mut queue = IndexedMinHeap::with_capacity(10);
    /// queue.insert("Key", 4).unwrap();
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<TElement: Hash + Eq, TPriority: PartialOrd, S: BuildHasher>
    IndexedMinHeap<TElement, TPriority, S>
{
    /// Creates an empty queue with specific Hasher
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_heap::IndexedMinHeap;
    /// use std::collections::hash_map::RandomState;
    /// let mut queue = IndexedMinHeap::with_hasher(RandomState::default());
    /// queue.insert("Key", 4.0).unwrap();
    /// ```
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    /// Also useful when Hasher cannot be defaulted.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            key_to_pos: Mediator::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.key_to_pos.reserve(additional);
    }

    /// Adds new element with its priority to queue.
    ///
    /// Fails with [`HeapError::DuplicateElement`] if element is already queued
    /// and with [`HeapError::UnorderedPriority`] if priority isn't comparable with itself.
    /// Queue stays unchanged on failure.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_heap::{HeapError, IndexedMinHeap};
    /// let mut queue = IndexedMinHeap::new();
    /// assert_eq!(queue.insert("First", 5.0), Ok(()));
    /// assert_eq!(queue.insert("First", 1.0), Err(HeapError::DuplicateElement));
    /// assert_eq!(queue.insert("Second", f64::NAN), Err(HeapError::UnorderedPriority));
    /// assert_eq!(queue.peek_min_entry(), Ok((&"First", &5.0)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***
    /// If elements inserted in ascending order, amortized complexity is ***O(1)***.
    ///
    /// The worst case is when reallocation appears.
    /// In this case complexity of single call is ***O(n)***.
    pub fn insert(&mut self, element: TElement, priority: TPriority) -> Result<(), HeapError> {
        check_ordered(&priority)?;

        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let mediator_index = match key_to_pos.entry(element) {
            MediatorEntry::Occupied(entry) => {
                debug!(
                    "Rejected insert of element already queued at heap position {}",
                    entry.get().as_usize()
                );
                return Err(HeapError::DuplicateElement);
            }
            // It will be rewritten during heap rebalancing.
            MediatorEntry::Vacant(entry) => entry.insert(heap.len()),
        };
        heap.push(mediator_index, priority, |index, heap_idx| {
            *key_to_pos.get_index_mut(index) = heap_idx
        });
        Ok(())
    }

    /// Get reference to the element with the minimal priority.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_heap::{HeapError, IndexedMinHeap};
    /// let mut queue: IndexedMinHeap<i32, i32> = IndexedMinHeap::new();
    /// assert_eq!(queue.peek_min(), Err(HeapError::EmptyQueue));
    /// for x in [3, 1, 2] {
    ///     queue.insert(x, x).unwrap();
    /// }
    /// assert_eq!(queue.peek_min(), Ok(&1));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn peek_min(&self) -> Result<&TElement, HeapError> {
        let (element, _) = self.peek_min_entry()?;
        Ok(element)
    }

    /// Get references to the element with the minimal priority and its priority.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn peek_min_entry(&self) -> Result<(&TElement, &TPriority), HeapError> {
        let (first_idx, heap_idx) = self
            .heap
            .most_prioritized_idx()
            .ok_or(HeapError::EmptyQueue)?;
        let (element, _) = self.key_to_pos.get_index(first_idx);
        let (_, priority) = self
            .heap
            .look_into(heap_idx)
            .expect("Checked using most_prioritized_idx");
        Ok((element, priority))
    }

    /// Remove and return element with the minimal priority.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_heap::{HeapError, IndexedMinHeap};
    /// let mut queue = IndexedMinHeap::new();
    /// for (element, priority) in [("e", 5.0), ("a", 1.0), ("d", 4.0), ("b", 2.0), ("c", 3.0)] {
    ///     queue.insert(element, priority).unwrap();
    /// }
    /// assert_eq!(queue.extract_min(), Ok("a"));
    /// assert_eq!(queue.extract_min(), Ok("b"));
    /// assert_eq!(queue.extract_min(), Ok("c"));
    /// assert_eq!(queue.extract_min(), Ok("d"));
    /// assert_eq!(queue.extract_min(), Ok("e"));
    /// assert_eq!(queue.extract_min(), Err(HeapError::EmptyQueue));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Cost of extraction is always ***O(log n)***
    #[inline]
    pub fn extract_min(&mut self) -> Result<TElement, HeapError> {
        let (element, _) = self.extract_min_entry()?;
        Ok(element)
    }

    /// Remove and return element with the minimal priority along with the priority.
    ///
    /// ### Time complexity
    ///
    /// Cost of extraction is always ***O(log n)***
    pub fn extract_min_entry(&mut self) -> Result<(TElement, TPriority), HeapError> {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let (removed_idx, priority) = heap
            .pop_min(|index, heap_idx| *key_to_pos.get_index_mut(index) = heap_idx)
            .ok_or(HeapError::EmptyQueue)?;

        // Last mediator entry takes place of removed one so its heap entry must follow.
        let (removed, _) = key_to_pos.swap_remove_index(removed_idx);
        if MediatorIndex(key_to_pos.len()) != removed_idx {
            let (_, heap_idx_of_moved) = key_to_pos.get_index(removed_idx);
            heap.change_outer_pos(removed_idx, heap_idx_of_moved);
        }

        Ok((removed, priority))
    }

    /// Set new priority for queued element and reorder the queue.
    /// Returns old priority if succeeds.
    ///
    /// Fails with [`HeapError::NotFound`] if element isn't queued
    /// and with [`HeapError::UnorderedPriority`] if priority isn't comparable with itself.
    /// Queue stays unchanged on failure.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_heap::{HeapError, IndexedMinHeap};
    /// let mut queue = IndexedMinHeap::new();
    /// queue.insert("A", 10.0).unwrap();
    /// queue.insert("B", 20.0).unwrap();
    /// queue.insert("C", 30.0).unwrap();
    ///
    /// assert_eq!(queue.update_priority("C", 1.0), Ok(30.0));
    /// assert_eq!(queue.extract_min(), Ok("C"));
    /// assert_eq!(queue.update_priority("A", 100.0), Ok(10.0));
    /// assert_eq!(queue.extract_min(), Ok("B"));
    ///
    /// assert_eq!(queue.update_priority("C", 5.0), Err(HeapError::NotFound));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// In best case ***O(1)***, in average costs ***O(log n)***.
    pub fn update_priority<Q>(
        &mut self,
        element: &Q,
        priority: TPriority,
    ) -> Result<TPriority, HeapError>
    where
        TElement: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_idx = match self.key_to_pos.get(element) {
            Some(heap_idx) => heap_idx,
            None => {
                debug!("Rejected priority update of element which is not queued");
                return Err(HeapError::NotFound);
            }
        };
        check_ordered(&priority)?;

        let key_to_pos = &mut self.key_to_pos;
        Ok(self
            .heap
            .change_priority(heap_idx, priority, |index, heap_idx| {
                *key_to_pos.get_index_mut(index) = heap_idx
            }))
    }

    /// Get reference to the priority of queued element.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_heap::IndexedMinHeap;
    /// let mut queue = IndexedMinHeap::new();
    /// queue.insert(String::from("first"), 1.5).unwrap();
    /// assert_eq!(queue.get_priority("first"), Some(&1.5));
    /// assert_eq!(queue.get_priority("second"), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    pub fn get_priority<Q>(&self, element: &Q) -> Option<&TPriority>
    where
        TElement: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_idx = self.key_to_pos.get(element)?;
        Some(
            self.heap
                .look_into(heap_idx)
                .expect("Must contain if key_to_pos contain")
                .1,
        )
    }

    /// Returns true if element is queued.
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    #[inline]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        TElement: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.contains(element)
    }

    /// Get the number of elements in queue.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.key_to_pos.len(), self.heap.usize_len());
        self.key_to_pos.len()
    }

    /// Returns true if queue is empty.
    ///
    /// ```
    /// let mut queue = indexed_min_heap::IndexedMinHeap::new();
    /// assert!(queue.is_empty());
    /// queue.insert(0, 5.0).unwrap();
    /// assert!(!queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.heap.is_empty(), self.key_to_pos.is_empty());
        self.key_to_pos.is_empty()
    }

    /// Make the queue empty.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
        self.key_to_pos.clear();
    }

    /// Create readonly borrowing iterator over queue.
    /// Items are visited in internal order, not in priority order.
    ///
    /// ```
    /// use indexed_min_heap::IndexedMinHeap;
    /// use std::collections::HashMap;
    /// let mut queue = IndexedMinHeap::new();
    /// for x in 0..5 {
    ///     queue.insert(x, x * 10).unwrap();
    /// }
    /// let entries: HashMap<i32, i32> = queue.iter().map(|(&k, &p)| (k, p)).collect();
    /// let expected: HashMap<i32, i32> = (0..5).map(|x| (x, x * 10)).collect();
    /// assert_eq!(entries, expected);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n)***
    pub fn iter(&self) -> IndexedMinHeapIter<TElement, TPriority, S> {
        IndexedMinHeapIter {
            key_to_pos: &self.key_to_pos,
            heap_iterator: self.heap.iter(),
        }
    }
}

fn check_ordered<TPriority: PartialOrd>(priority: &TPriority) -> Result<(), HeapError> {
    match priority.partial_cmp(priority) {
        Some(_) => Ok(()),
        None => {
            debug!("Rejected priority which is not comparable with itself");
            Err(HeapError::UnorderedPriority)
        }
    }
}

impl<TElement: Hash + Eq + Debug, TPriority: PartialOrd + Debug, S: BuildHasher> Debug
    for IndexedMinHeap<TElement, TPriority, S>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<TElement: Hash + Eq, TPriority: PartialOrd, S: BuildHasher + Default> Default
    for IndexedMinHeap<TElement, TPriority, S>
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<TElement: Hash + Eq, TPriority: PartialOrd, S: BuildHasher> IntoIterator
    for IndexedMinHeap<TElement, TPriority, S>
{
    type Item = (TElement, TPriority);
    type IntoIter = IndexedMinHeapIntoIter<TElement, TPriority, S>;

    /// Make iterator that extracts items in ascending order of priority.
    ///
    /// ### Examples
    ///
    /// ```
    /// use indexed_min_heap::IndexedMinHeap;
    /// let mut queue = IndexedMinHeap::new();
    /// queue.insert("third", 3).unwrap();
    /// queue.insert("first", 1).unwrap();
    /// queue.insert("second", 2).unwrap();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some(("first", 1)));
    /// assert_eq!(iterator.next(), Some(("second", 2)));
    /// assert_eq!(iterator.next(), Some(("third", 3)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// This is consuming iterator that extracts elements in ascending order of priority
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct IndexedMinHeapIntoIter<TElement, TPriority = f64, S = RandomState>
where
    TElement: Hash + Eq,
    TPriority: PartialOrd,
    S: BuildHasher,
{
    queue: IndexedMinHeap<TElement, TPriority, S>,
}

impl<TElement: Hash + Eq, TPriority: PartialOrd, S: BuildHasher> Iterator
    for IndexedMinHeapIntoIter<TElement, TPriority, S>
{
    type Item = (TElement, TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.extract_min_entry().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

/// This is unordered borrowing iterator over queue.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct IndexedMinHeapIter<'a, TElement, TPriority = f64, S = RandomState>
where
    TElement: 'a + Hash + Eq,
    TPriority: 'a,
    S: BuildHasher,
{
    heap_iterator: BinaryHeapIterator<'a, TPriority>,
    key_to_pos: &'a Mediator<TElement, S>,
}

impl<'a, TElement: 'a + Hash + Eq, TPriority: 'a, S: BuildHasher> Iterator
    for IndexedMinHeapIter<'a, TElement, TPriority, S>
{
    type Item = (&'a TElement, &'a TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let key_to_pos = self.key_to_pos;
        self.heap_iterator.next().map(|(index, priority)| {
            let (element, _) = key_to_pos.get_index(index);
            (element, priority)
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap_iterator.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap_iterator.count()
    }
}
