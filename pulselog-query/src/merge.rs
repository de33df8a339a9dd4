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

//! Cross-day merge of per-day session maps.

use pulselog_storage::DaySessions;

/// Per-user union of session ids across every day in a query range.
/// The same session id reported for a user on different days still
/// counts once.
pub type MergedSessions = DaySessions;

/// Merge per-day session maps into one range-wide map.
///
/// Set union per user is commutative and associative, so the result
/// does not depend on the order the days arrive in; parallel readers
/// can hand their maps over in completion order.
pub fn merge_day_sessions(days: impl IntoIterator<Item = DaySessions>) -> MergedSessions {
    let mut merged = MergedSessions::new();
    for day in days {
        for (user, sessions) in day {
            merged.entry(user).or_default().extend(sessions);
        }
    }
    merged
}
