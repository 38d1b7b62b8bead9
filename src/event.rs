use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::Point;

/// Index into an [`EventArena`]. Never dereferenced outside this crate; the
/// arena owns every [`Event`] and all cross-links between them are by index,
/// not by owning pointer, since two events routinely need to point at each
/// other (`opposite`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub usize);

/// One endpoint of one segment during the sweep.
///
/// Every original input segment is given one persistent left/right event
/// pair at setup. The right event's `point` never changes: it is always the
/// segment's true right endpoint. The left event's `point` starts at the
/// segment's true left endpoint and is advanced forward in place whenever
/// the driver discovers that the segment is split at an interior point
/// further along the sweep — there is no need to allocate a fresh event pair
/// per split, since the eventual right endpoint is already known and fixed.
#[derive(Debug, Clone)]
pub struct Event<T> {
  pub point: Point<T>,
  pub is_left: bool,
  pub opposite: EventId,
  /// Original input indices this event currently stands for. Has more than
  /// one entry only when two or more input segments are exact duplicates
  /// and were fused together at insertion.
  pub segments_indices: Rc<RefCell<Vec<usize>>>,
}

impl<T> Event<T> {
  fn new(point: Point<T>, is_left: bool, opposite: EventId, segments_indices: Rc<RefCell<Vec<usize>>>) -> Self {
    Event {
      point,
      is_left,
      opposite,
      segments_indices,
    }
  }
}

/// Owns every [`Event`] created during a sweep.
#[derive(Debug, Default)]
pub struct EventArena<T> {
  events: Vec<Event<T>>,
}

impl<T> EventArena<T> {
  pub fn new() -> Self {
    EventArena { events: Vec::new() }
  }

  /// Allocates a persistent left/right event pair for one original segment.
  pub fn alloc_pair(&mut self, left: Point<T>, right: Point<T>, segment_index: usize) -> (EventId, EventId) {
    let segments_indices = Rc::new(RefCell::new(vec![segment_index]));

    let left_id = EventId(self.events.len());
    // `opposite` is fixed up immediately below; EventId(0) is a harmless
    // placeholder since nothing observes it before the fixup.
    self.events.push(Event::new(left, true, EventId(0), segments_indices.clone()));
    let right_id = EventId(self.events.len());
    self.events.push(Event::new(right, false, left_id, segments_indices));
    self.events[left_id.0].opposite = right_id;
    (left_id, right_id)
  }

  pub fn fuse(&mut self, left_id: EventId, segment_index: usize) {
    self.events[left_id.0].segments_indices.borrow_mut().push(segment_index);
  }

  pub fn advance_left(&mut self, left_id: EventId, point: Point<T>) {
    self.events[left_id.0].point = point;
  }
}

impl<T> std::ops::Index<EventId> for EventArena<T> {
  type Output = Event<T>;
  fn index(&self, id: EventId) -> &Event<T> {
    &self.events[id.0]
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn alloc_pair_links_opposites() {
    let mut arena = EventArena::new();
    let (left, right) = arena.alloc_pair(Point::new(0, 0), Point::new(4, 0), 0);
    assert_eq!(arena[left].opposite, right);
    assert_eq!(arena[right].opposite, left);
    assert!(arena[left].is_left);
    assert!(!arena[right].is_left);
  }

  #[test]
  fn fuse_shares_the_same_multiset() {
    let mut arena = EventArena::new();
    let (left, right) = arena.alloc_pair(Point::new(0, 0), Point::new(4, 0), 0);
    arena.fuse(left, 1);
    assert_eq!(&*arena[left].segments_indices.borrow(), &[0, 1]);
    assert_eq!(&*arena[right].segments_indices.borrow(), &[0, 1]);
  }
}
