use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::event::{EventArena, EventId};
use crate::geometry::{Point, SweepScalar};

/// One entry in the heap: just enough to order events without touching the
/// arena. `opposite_point` breaks ties between several left (or several
/// right) events that share the same point but belong to different
/// segments, per the total order below.
struct HeapEntry<T> {
  point: Point<T>,
  is_left: bool,
  opposite_point: Point<T>,
  id: EventId,
}

impl<T: Ord> HeapEntry<T> {
  /// x, then y, then right-before-left, then the y of the opposite endpoint.
  fn natural_cmp(&self, other: &Self) -> Ordering {
    self
      .point
      .x()
      .cmp(other.point.x())
      .then_with(|| self.point.y().cmp(other.point.y()))
      .then_with(|| self.is_left.cmp(&other.is_left))
      .then_with(|| self.opposite_point.y().cmp(other.opposite_point.y()))
  }
}

impl<T: Ord> PartialEq for HeapEntry<T> {
  fn eq(&self, other: &Self) -> bool {
    self.natural_cmp(other) == Ordering::Equal
  }
}
impl<T: Ord> Eq for HeapEntry<T> {}

impl<T: Ord> PartialOrd for HeapEntry<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: Ord> Ord for HeapEntry<T> {
  fn cmp(&self, other: &Self) -> Ordering {
    // `BinaryHeap` is a max-heap; reverse the natural (ascending) order so
    // the smallest point under the total order is popped first.
    other.natural_cmp(self)
  }
}

/// The sweep's event priority queue (component C).
///
/// Coincident *exact duplicate* segments (same left point and same right
/// point) are fused on insertion: rather than allocating a second event
/// pair, the new segment's original index is folded into the existing
/// pair's shared `segments_indices`.
pub struct EventQueue<T> {
  heap: BinaryHeap<HeapEntry<T>>,
  fusion: HashMap<(Point<T>, Point<T>), EventId>,
}

impl<T: SweepScalar> EventQueue<T> {
  pub fn new() -> Self {
    EventQueue {
      heap: BinaryHeap::new(),
      fusion: HashMap::new(),
    }
  }

  /// Inserts one original segment's endpoints. Returns `(left, right)`
  /// event ids — freshly allocated, or an existing fused pair if this
  /// segment duplicates one already queued.
  pub fn insert_segment(
    &mut self,
    arena: &mut EventArena<T>,
    left: Point<T>,
    right: Point<T>,
    segment_index: usize,
  ) -> (EventId, EventId) {
    let key = (left.clone(), right.clone());
    if let Some(&left_id) = self.fusion.get(&key) {
      arena.fuse(left_id, segment_index);
      return (left_id, arena[left_id].opposite);
    }

    let (left_id, right_id) = arena.alloc_pair(left.clone(), right.clone(), segment_index);
    self.fusion.insert(key, left_id);
    self.heap.push(HeapEntry {
      point: left.clone(),
      is_left: true,
      opposite_point: right.clone(),
      id: left_id,
    });
    self.heap.push(HeapEntry {
      point: right,
      is_left: false,
      opposite_point: left,
      id: right_id,
    });
    (left_id, right_id)
  }

  /// The smallest point under the total order still in the queue, without
  /// removing anything. Lets the driver compare against `pending`'s next
  /// scheduled point to decide which source the next sweep point comes from.
  pub fn peek_point(&self) -> Option<Point<T>> {
    self.heap.peek().map(|entry| entry.point.clone())
  }

  /// Pops every event sharing the smallest point under the total order,
  /// together with that point.
  pub fn pop_batch(&mut self) -> Option<(Point<T>, Vec<EventId>)> {
    let point = self.heap.peek()?.point.clone();
    let mut ids = Vec::new();
    while let Some(top) = self.heap.peek() {
      if top.point != point {
        break;
      }
      ids.push(self.heap.pop().unwrap().id);
    }
    Some((point, ids))
  }

  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::Point;

  #[test]
  fn pops_in_total_order() {
    let mut arena = EventArena::new();
    let mut queue = EventQueue::new();
    queue.insert_segment(&mut arena, Point::new(1, 0), Point::new(3, 0), 0);
    queue.insert_segment(&mut arena, Point::new(0, 0), Point::new(2, 0), 1);

    let (p1, _) = queue.pop_batch().unwrap();
    assert_eq!(p1, Point::new(0, 0));
    let (p2, _) = queue.pop_batch().unwrap();
    assert_eq!(p2, Point::new(1, 0));
  }

  #[test]
  fn fuses_exact_duplicates() {
    let mut arena = EventArena::new();
    let mut queue = EventQueue::new();
    let (l0, _) = queue.insert_segment(&mut arena, Point::new(0, 0), Point::new(2, 0), 0);
    let (l1, _) = queue.insert_segment(&mut arena, Point::new(0, 0), Point::new(2, 0), 1);
    assert_eq!(l0, l1);
    assert_eq!(&*arena[l0].segments_indices.borrow(), &[0, 1]);
  }
}
