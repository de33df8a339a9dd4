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

//! Aggregate statistics for a range query.

use serde::{Deserialize, Serialize};

use crate::merge::MergedSessions;

/// Result of a range query over the activity log.
///
/// Field names are the wire format of the stats endpoint and must stay
/// stable for existing consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    /// Users with at least one session in range
    pub unique_users: u64,
    /// Total deduplicated sessions across all users in range
    pub num_sessions: u64,
    /// `num_sessions / unique_users`, defined as `0` when no users
    /// matched so the result is always well-formed and serializable
    pub avg_sessions_per_user: f64,
}

impl ActivityStats {
    /// Reduce a merged session map to its aggregate counts.
    pub fn from_sessions(sessions: &MergedSessions) -> Self {
        let unique_users = sessions.len() as u64;
        let num_sessions: u64 = sessions.values().map(|s| s.len() as u64).sum();
        let avg_sessions_per_user = if unique_users == 0 {
            0.0
        } else {
            num_sessions as f64 / unique_users as f64
        };

        Self {
            unique_users,
            num_sessions,
            avg_sessions_per_user,
        }
    }
}
