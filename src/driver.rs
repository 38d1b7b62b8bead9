use std::collections::{BTreeMap, HashSet};

use log::{debug, trace};

use crate::event::{EventArena, EventId};
use crate::geometry::{GeometryContext, Point, Relation, Segment, SweepScalar};
use crate::queue::EventQueue;
use crate::status::Status;

pub(crate) fn pair_key(a: usize, b: usize) -> (usize, usize) {
  if a < b {
    (a, b)
  } else {
    (b, a)
  }
}

/// The point where two `Relation::Touch` segments meet: always one of the
/// four endpoints, since a touch with both meeting points interior to both
/// segments would have been classified as a `Cross` instead.
pub(crate) fn touch_point<T: SweepScalar, G: GeometryContext<T>>(context: &G, s: &Segment<T>, t: &Segment<T>) -> Point<T> {
  let (s1, s2) = s.endpoints();
  let (t1, t2) = t.endpoints();
  [s1, s2, t1, t2]
    .into_iter()
    .find(|p| context.point_in_segment(p, s) && context.point_in_segment(p, t))
    .cloned()
    .expect("Relation::Touch guarantees a shared endpoint")
}

/// What a completed sweep produced.
pub enum SweepOutcome<T> {
  /// `any_intersection`/`contour_self_intersects`: the first intersecting
  /// pair found, if any.
  First(Option<(usize, usize)>),
  /// `all_intersections`: every intersecting pair, grouped by the point at
  /// which the segments meet.
  All(BTreeMap<Point<T>, Vec<(usize, usize)>>),
}

/// The sweep driver (component E): runs the event loop of the algorithm,
/// reporting intersecting pairs as it discovers them.
///
/// Two event sources feed the loop: the ordinary segment-endpoint queue
/// (component C), and `pending`, a map from a not-yet-reached point to the
/// event ids that need to be pulled out of the status and reinserted there
/// — populated whenever two segments are found to become neighbours in the
/// status and their geometric relation (computed once, a static fact about
/// two fixed segments) puts their meeting point strictly ahead of the
/// sweep. This is the same role `rgeometry`'s `scheduled` map and
/// `geo-generic-alg`'s requeued split events play, adapted to this crate's
/// mutate-the-left-event-in-place model (see `event` module docs): instead
/// of allocating a fresh event pair per split, the existing persistent left
/// event is simply advanced to the new point.
pub struct Sweep<'a, T, G> {
  context: &'a G,
  segments: &'a [Segment<T>],
  arena: EventArena<T>,
  queue: EventQueue<T>,
  status: Status<'a, T, G>,
  active: HashSet<EventId>,
  pending: BTreeMap<Point<T>, Vec<EventId>>,
  reported: HashSet<(usize, usize)>,
  /// Pairs that must not be reported when the only relation discovered
  /// between them is a plain [`Relation::Touch`] — used by
  /// `contour_self_intersects` to let cyclically-adjacent edges share their
  /// common vertex without that counting as a self-intersection. `None`
  /// means every discovered relation is reportable (the two segment-level
  /// operations never suppress anything).
  suppress_adjacent_touch: Option<HashSet<(usize, usize)>>,
}

impl<'a, T: SweepScalar, G: GeometryContext<T>> Sweep<'a, T, G> {
  pub fn new(
    context: &'a G,
    segments: &'a [Segment<T>],
    suppress_adjacent_touch: Option<HashSet<(usize, usize)>>,
  ) -> Self {
    let mut arena = EventArena::new();
    let mut queue = EventQueue::new();
    for (idx, seg) in segments.iter().enumerate() {
      queue.insert_segment(&mut arena, seg.left().clone(), seg.right().clone(), idx);
    }
    let start = segments[0].left().clone();
    Sweep {
      context,
      segments,
      arena,
      queue,
      status: Status::new(context, start),
      active: HashSet::new(),
      pending: BTreeMap::new(),
      reported: HashSet::new(),
      suppress_adjacent_touch,
    }
  }

  fn representative(&self, id: EventId) -> usize {
    self.arena[id].segments_indices.borrow()[0]
  }

  fn fragment(&self, id: EventId) -> (Point<T>, Point<T>) {
    (self.arena[id].point.clone(), self.arena[self.arena[id].opposite].point.clone())
  }

  /// The point (if any, and if still ahead of `current`) at which the
  /// representative segments of `a` and `b` meet, scheduling a future
  /// status re-sort there.
  fn schedule_if_relevant(&mut self, a: EventId, b: EventId, current: &Point<T>) -> Option<(usize, usize)> {
    if a == b {
      return None;
    }
    let rep_a = self.representative(a);
    let rep_b = self.representative(b);
    let key = pair_key(rep_a, rep_b);
    if self.reported.contains(&key) {
      return None;
    }
    let relation = self.context.segments_relation(&self.segments[key.0], &self.segments[key.1]);
    if relation == Relation::Disjoint {
      return None;
    }
    let meeting_point = match relation {
      Relation::Cross => self.context.crossing_point(&self.segments[key.0], &self.segments[key.1]),
      // A touch is always at one of the four endpoints (an interior-interior
      // meeting is a `Cross`, not a `Touch`), possibly with the two segments
      // running collinear — `crossing_point`'s line-intersection formula
      // divides by a zero determinant in that case, so find the shared
      // point directly instead of asking for it.
      Relation::Touch => touch_point(self.context, &self.segments[key.0], &self.segments[key.1]),
      Relation::Overlap => {
        let left_a = self.segments[key.0].left();
        let left_b = self.segments[key.1].left();
        std::cmp::max(left_a, left_b).clone()
      }
      Relation::Disjoint => unreachable!(),
    };
    if &meeting_point > current {
      trace!("scheduling future meeting of {} and {} at {:?}", key.0, key.1, meeting_point);
      self.pending.entry(meeting_point).or_default().extend([a, b]);
      None
    } else {
      Some(key)
    }
  }

  /// Runs the sweep to completion. `stop_at_first` short-circuits as soon
  /// as one intersecting pair is confirmed, without building the full map.
  pub fn run(mut self, stop_at_first: bool) -> SweepOutcome<T> {
    let mut intersections: BTreeMap<Point<T>, Vec<(usize, usize)>> = BTreeMap::new();

    loop {
      let from_queue = self.queue.peek_point();
      let from_pending = self.pending.keys().next().cloned();
      let point = match (from_queue.clone(), from_pending.clone()) {
        (None, None) => break,
        (Some(q), None) => q,
        (None, Some(p)) => p,
        (Some(q), Some(p)) => {
          if q <= p {
            q
          } else {
            p
          }
        }
      };
      trace!("processing sweep point {:?}", point);

      let mut starts = Vec::new();
      let mut ends = Vec::new();
      if from_queue.as_ref() == Some(&point) {
        let (_, batch) = self.queue.pop_batch().unwrap();
        for id in batch {
          if self.arena[id].is_left {
            starts.push(id);
          } else {
            ends.push(self.arena[id].opposite);
          }
        }
      }
      let mut tangents = self.pending.remove(&point).unwrap_or_default();
      tangents.retain(|id| !starts.contains(id) && !ends.contains(id));
      tangents.sort_unstable();
      tangents.dedup();

      let mut participants: Vec<usize> = Vec::new();
      for &id in starts.iter().chain(ends.iter()).chain(tangents.iter()) {
        participants.extend(self.arena[id].segments_indices.borrow().iter().copied());
      }

      // Newly-adjacent pairs discovered while removing `ends`/`tangents`:
      // whoever was on either side of a removed entry is now next to each
      // other, and that new adjacency can itself be a meeting.
      let mut newly_adjacent = Vec::new();
      for &id in ends.iter().chain(tangents.iter()) {
        let (left, right) = self.fragment(id);
        let (prev, next) = self.status.neighbors(id, left.clone(), right.clone());
        self.status.remove(id, left, right);
        self.active.remove(&id);
        if let (Some(p), Some(n)) = (prev, next) {
          newly_adjacent.push((p, n));
        }
      }

      self.status.set_sweep_point(point.clone());

      for &id in starts.iter() {
        let (left, right) = self.fragment(id);
        self.status.insert(id, left, right);
        self.active.insert(id);
      }
      for &id in tangents.iter() {
        self.arena.advance_left(id, point.clone());
        let right = self.arena[self.arena[id].opposite].point.clone();
        self.status.insert(id, point.clone(), right);
        self.active.insert(id);
      }

      let mut to_check: Vec<(EventId, EventId)> = newly_adjacent;
      for &id in starts.iter().chain(tangents.iter()) {
        let (left, right) = self.fragment(id);
        let (prev, next) = self.status.neighbors(id, left, right);
        if let Some(p) = prev {
          to_check.push((id, p));
        }
        if let Some(n) = next {
          to_check.push((id, n));
        }
      }
      for (a, b) in to_check {
        if !self.active.contains(&a) || !self.active.contains(&b) {
          continue;
        }
        if let Some(pair) = self.schedule_if_relevant(a, b, &point) {
          participants.push(pair.0);
          participants.push(pair.1);
        }
      }

      participants.sort_unstable();
      participants.dedup();

      if participants.len() >= 2 {
        for i in 0..participants.len() {
          for j in (i + 1)..participants.len() {
            let key = pair_key(participants[i], participants[j]);
            if self.reported.contains(&key) {
              continue;
            }
            let relation = self.context.segments_relation(&self.segments[key.0], &self.segments[key.1]);
            if relation == Relation::Disjoint {
              continue;
            }
            if relation == Relation::Touch {
              if let Some(adjacent) = &self.suppress_adjacent_touch {
                if adjacent.contains(&key) {
                  continue;
                }
              }
            }
            debug!("{:?} between segments {} and {} at {:?}", relation, key.0, key.1, point);
            self.reported.insert(key);
            if stop_at_first {
              return SweepOutcome::First(Some(key));
            }
            if relation == Relation::Overlap {
              // A collinear overlap spans a sub-segment, not a point; record
              // both of its endpoints so a caller can recover the whole
              // overlapping range, per the completeness requirement that the
              // output cover both ends of an overlap.
              let lo = std::cmp::max(self.segments[key.0].left(), self.segments[key.1].left()).clone();
              let hi = std::cmp::min(self.segments[key.0].right(), self.segments[key.1].right()).clone();
              intersections.entry(lo).or_default().push(key);
              intersections.entry(hi).or_default().push(key);
            } else {
              intersections.entry(point.clone()).or_default().push(key);
            }
          }
        }
      }
    }

    if stop_at_first {
      SweepOutcome::First(None)
    } else {
      SweepOutcome::All(intersections)
    }
  }
}
