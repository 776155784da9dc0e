//! Column assignment
//!
//! Greedy interval colouring per cluster: walk the members in placement
//! order and drop each one into the first column whose last event has already
//! ended, opening a new column when none is free. For interval graphs this
//! uses the minimum possible number of columns.

use chrono::NaiveDateTime;
use deskclock_domain::ColumnInfo;

use super::clustering::OverlapCluster;

/// Assign a column to every member of `cluster`.
///
/// Members must arrive sorted by [`placement_key`](super::clustering::placement_key);
/// a zero-length event placed after a timed event with the same start would
/// open an extra column.
///
/// Returns `(input_index, ColumnInfo)` pairs in member order. `total_columns`
/// is identical for all pairs and only known once the last member is placed.
pub fn assign_columns(cluster: &OverlapCluster<'_>) -> Vec<(usize, ColumnInfo)> {
    if let [(index, _)] = cluster.members() {
        return vec![(*index, ColumnInfo::FULL_WIDTH)];
    }

    let mut column_ends: Vec<NaiveDateTime> = Vec::new();
    let mut placed: Vec<(usize, usize)> = Vec::with_capacity(cluster.len());

    for (index, event) in cluster.members() {
        let end = event.effective_end();
        let column = match column_ends.iter().position(|free_at| *free_at <= event.start()) {
            Some(free) => {
                column_ends[free] = end;
                free
            }
            None => {
                column_ends.push(end);
                column_ends.len() - 1
            }
        };
        placed.push((*index, column));
    }

    let total_columns = column_ends.len();
    placed.into_iter().map(|(index, column)| (index, ColumnInfo::new(column, total_columns))).collect()
}
