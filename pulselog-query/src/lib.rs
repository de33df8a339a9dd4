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

//! Pulselog Query Layer
//!
//! Range aggregation over the day-partitioned activity log: scan the
//! days of an inclusive range in parallel, merge the per-day session
//! maps with cross-day dedup, and reduce to [`ActivityStats`].

pub mod engine;
pub mod merge;
pub mod stats;

pub use engine::QueryEngine;
pub use merge::{merge_day_sessions, MergedSessions};
pub use stats::ActivityStats;
