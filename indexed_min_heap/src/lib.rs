//! This is min-priority queue that supports changing priority of queued elements.
//!
//! It uses IndexMap and own implementation of binary heap to achieve this.
//!
//! Each element has associated *priority*.
//! Elements must be unique and hashable; priorities must implement `PartialOrd`
//! and be comparable with themselves (so `f64::NAN` is rejected, other floats are fine).
//!
//! Extraction returns element with the smallest priority.
//! Insertion adds element to queue and fails if element is already queued.
//! Priority of a queued element can be changed in both directions.
//!
//! Insert, extract, update priority have ***O(log n)*** time complexity;
//! peek, lookup by element are ***O(1)***.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra's algorithm][dijkstra] for a maze.
//! Walls can't be entered, mud costs more to walk through than clear cells.
//!
//! Every reachable cell is inserted once with its tentative distance.
//! Sometimes shorter path to a queued cell is found
//! so its priority needs to be lowered.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//!
//! ```
//! use indexed_min_heap::IndexedMinHeap;
//! use std::collections::HashSet;
//!
//! const MAZE: [&str; 10] = [
//!     "xxxxxxxxxx",
//!     "x   ~~   x",
//!     "x   x xx  ",
//!     "x xxx xx x",
//!     "x    xxx x",
//!     "xxxx xxx x",
//!     "xxxx x   x",
//!     "xx x xx  x",
//!     "xxx      x",
//!     "xxxxxx xxx",
//! ];
//!
//! #[derive(Eq, PartialEq, Debug, Hash, Copy, Clone)]
//! struct Position {
//!     row: usize,
//!     column: usize,
//! }
//!
//! fn cost_to_enter(pos: Position) -> Option<u32> {
//!     match MAZE[pos.row].as_bytes()[pos.column] {
//!         b'x' => None,
//!         b'~' => Some(5),
//!         _ => Some(1),
//!     }
//! }
//!
//! // From cell we can move upper, right, bottom and left
//! fn get_neighbors(pos: Position) -> Vec<Position> {
//!     let mut items = Vec::with_capacity(4);
//!     if pos.row > 0 {
//!         items.push(Position { row: pos.row - 1, column: pos.column });
//!     }
//!     if pos.row + 1 < MAZE.len() {
//!         items.push(Position { row: pos.row + 1, column: pos.column });
//!     }
//!     if pos.column > 0 {
//!         items.push(Position { row: pos.row, column: pos.column - 1 });
//!     }
//!     if pos.column + 1 < MAZE[pos.row].len() {
//!         items.push(Position { row: pos.row, column: pos.column + 1 });
//!     }
//!     items
//! }
//!
//! fn shortest_distance(start: Position, exit: Position) -> Option<u32> {
//!     // Cells with final distance
//!     let mut closed_set: HashSet<Position> = HashSet::new();
//!     let mut available = IndexedMinHeap::<Position, u32>::new();
//!     available.insert(start, 0).unwrap();
//!     while let Ok((current, distance)) = available.extract_min_entry() {
//!         if current == exit {
//!             return Some(distance);
//!         }
//!         closed_set.insert(current);
//!
//!         for next in get_neighbors(current)
//!             .into_iter()
//!             .filter(|x| !closed_set.contains(x))
//!         {
//!             let candidate = match cost_to_enter(next) {
//!                 Some(cost) => distance + cost,
//!                 None => continue,
//!             };
//!             match available.get_priority(&next) {
//!                 None => available.insert(next, candidate).unwrap(),
//!                 Some(&known) if candidate < known => {
//!                     // Have found shorter path to queued cell
//!                     available.update_priority(&next, candidate).unwrap();
//!                 }
//!                 _ => { /* Have found longer path. */ }
//!             }
//!         }
//!     }
//!     None
//! }
//!
//! let start = Position { row: 1, column: 1 };
//! assert_eq!(shortest_distance(start, Position { row: 2, column: 9 }), Some(17));
//! assert_eq!(shortest_distance(start, Position { row: 9, column: 6 }), Some(13));
//! assert_eq!(shortest_distance(start, Position { row: 7, column: 2 }), None);
//! ```
//!

mod editable_binary_heap;
mod error;
mod indexed_min_heap;
mod mediator;

pub use crate::error::HeapError;
pub use crate::indexed_min_heap::{IndexedMinHeap, IndexedMinHeapIntoIter, IndexedMinHeapIter};

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
