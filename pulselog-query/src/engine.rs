// Copyright 2025 Pulselog Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Range query engine
//!
//! A query scans every partition in an inclusive day range, merges the
//! per-day session maps, and aggregates. Partition files are
//! independent, so the per-day reads run on scoped threads; the merge
//! is a commutative union, making the result independent of read
//! completion order.

use pulselog_core::{DayKey, Result};
use pulselog_storage::{ActivityStore, DaySessions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::merge::merge_day_sessions;
use crate::stats::ActivityStats;

/// Worker-pool fallback when the machine's parallelism is unknown
const DEFAULT_READ_WORKERS: usize = 4;

/// Read side of the activity log. Stateless between calls; shares the
/// store root with the write side but never touches the write handle.
pub struct QueryEngine {
    store: Arc<ActivityStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<ActivityStore>) -> Self {
        Self { store }
    }

    /// Aggregate activity over `[start, end]` inclusive, optionally
    /// restricted to a single user.
    ///
    /// Days without a partition file count as zero activity. Every
    /// day's read is joined before aggregating; the first hard I/O
    /// error fails the whole query, with no partial result.
    pub fn query(
        &self,
        start: DayKey,
        end: DayKey,
        user_id: Option<&str>,
    ) -> Result<ActivityStats> {
        let days: Vec<DayKey> = DayKey::range(start, end).collect();
        debug!(%start, %end, days = days.len(), "scanning range");

        let per_day = self.read_days(&days)?;
        let mut merged = merge_day_sessions(per_day);

        if let Some(user) = user_id {
            merged.retain(|candidate, _| candidate == user);
        }

        Ok(ActivityStats::from_sessions(&merged))
    }

    /// Read all partitions in parallel on a bounded pool of scoped
    /// threads. The pool is capped at the machine's parallelism, never
    /// the range width, so a multi-century range costs sequential file
    /// opens per worker instead of one OS thread per day. Workers
    /// drain a shared index; a missing file on one day never cancels
    /// or fails sibling reads, and every worker is joined before the
    /// first hard error (if any) fails the query.
    fn read_days(&self, days: &[DayKey]) -> Result<Vec<DaySessions>> {
        if days.is_empty() {
            return Ok(Vec::new());
        }

        let workers = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(DEFAULT_READ_WORKERS)
            .min(days.len());
        let next_day = AtomicUsize::new(0);

        let results: Vec<Result<Vec<DaySessions>>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    let store = &self.store;
                    let next_day = &next_day;
                    scope.spawn(move || {
                        let mut collected = Vec::new();
                        loop {
                            let index = next_day.fetch_add(1, Ordering::Relaxed);
                            let Some(day) = days.get(index) else {
                                break;
                            };
                            collected.push(store.read_day(*day)?);
                        }
                        Ok(collected)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let mut per_day = Vec::with_capacity(days.len());
        for batch in results {
            per_day.extend(batch?);
        }
        Ok(per_day)
    }
}
