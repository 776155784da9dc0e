//! Overlap clustering
//!
//! Partitions a day's events into connected components of the implicit
//! "overlaps" graph. Edges are evaluated on demand; nothing is materialized
//! besides a visited flag per event.
//!
//! Membership is transitive: A joins B's cluster when it overlaps any member,
//! even if it overlaps none of the others.

use std::collections::VecDeque;

use chrono::NaiveDateTime;
use deskclock_domain::CalendarEvent;

/// Maximal set of events connected by temporal overlap
///
/// Members are kept as `(input_index, event)` pairs in [`placement_key`]
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapCluster<'a> {
    members: Vec<(usize, &'a CalendarEvent)>,
}

impl<'a> OverlapCluster<'a> {
    /// Members in placement order
    pub fn members(&self) -> &[(usize, &'a CalendarEvent)] {
        &self.members
    }

    /// Input positions of the members, in member order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter().map(|(index, _)| *index)
    }

    pub fn events(&self) -> impl Iterator<Item = &'a CalendarEvent> + '_ {
        self.members.iter().map(|(_, event)| *event)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// Group `events` into overlap clusters.
///
/// The input order does not matter for the resulting partition. Clusters are
/// returned ordered by their earliest member. An empty input yields no
/// clusters.
pub fn cluster_overlapping(events: &[CalendarEvent]) -> Vec<OverlapCluster<'_>> {
    let order = start_order(events);
    let mut visited = vec![false; events.len()];
    let mut clusters = Vec::new();

    for &seed in &order {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        // BFS over the implicit overlap graph
        let mut queue = VecDeque::from([seed]);
        let mut members = Vec::new();
        while let Some(current) = queue.pop_front() {
            members.push(current);
            for &candidate in &order {
                if !visited[candidate] && events[current].overlaps(&events[candidate]) {
                    visited[candidate] = true;
                    queue.push_back(candidate);
                }
            }
        }

        members.sort_by_key(|&index| placement_key(events, index));
        clusters.push(OverlapCluster {
            members: members.into_iter().map(|index| (index, &events[index])).collect(),
        });
    }

    clusters
}

/// Order in which events are placed on the timeline: by start, zero-length
/// events before timed ones at the same instant, then by input position.
///
/// A zero-length event does not overlap a timed event starting at the same
/// instant, so placing it first lets both share a column.
pub fn placement_key(events: &[CalendarEvent], index: usize) -> (NaiveDateTime, bool, usize) {
    let event = &events[index];
    (event.start(), event.effective_end() > event.start(), index)
}

/// Input positions sorted by start time; the stable sort keeps input order
/// for identical starts.
fn start_order(events: &[CalendarEvent]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&index| events[index].start());
    order
}
