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

//! Activity events and the partition line codec
//!
//! Partition files hold one event per line in the form
//! `<user_id>,<session_id>\n` with no header or trailing metadata.
//! The format is fixed for compatibility with existing stores.

use serde::{Deserialize, Serialize};

use crate::error::{PulselogError, Result};

/// One (user, session) occurrence attributed to a single day.
/// Immutable once written to a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEvent {
    pub user_id: String,
    pub session_id: String,
}

impl ActivityEvent {
    /// Validate the ids against the line format. The comma separator
    /// and the newline terminator must not appear inside either field,
    /// and empty ids are meaningless.
    pub fn new(user_id: impl Into<String>, session_id: impl Into<String>) -> Result<Self> {
        let user_id = user_id.into();
        let session_id = session_id.into();
        validate_field("user_id", &user_id)?;
        validate_field("session_id", &session_id)?;
        Ok(Self {
            user_id,
            session_id,
        })
    }

    /// Encode as a newline-terminated partition line
    pub fn to_line(&self) -> String {
        format!("{},{}\n", self.user_id, self.session_id)
    }
}

fn validate_field(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PulselogError::InvalidEvent(format!("{} is empty", name)));
    }
    if value.contains(',') || value.contains('\n') || value.contains('\r') {
        return Err(PulselogError::InvalidEvent(format!(
            "{} contains a reserved character: {:?}",
            name, value
        )));
    }
    Ok(())
}

/// Split a partition line on the first comma into (user, session).
///
/// Returns `None` for blank or comma-less lines; readers skip those
/// rather than failing the whole partition.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    line.split_once(',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_line_round_trip() {
        let event = ActivityEvent::new("4", "1").unwrap();
        assert_eq!(event.to_line(), "4,1\n");
        assert_eq!(parse_line(&event.to_line()), Some(("4", "1")));
    }

    #[test]
    fn test_session_id_may_contain_extra_commas_on_read() {
        // Split is on the first comma only; the remainder belongs to
        // the session id.
        assert_eq!(parse_line("user,a,b"), Some(("user", "a,b")));
    }

    #[test]
    fn test_rejects_reserved_characters() {
        assert!(ActivityEvent::new("a,b", "1").is_err());
        assert!(ActivityEvent::new("a", "1\n2").is_err());
        assert!(ActivityEvent::new("", "1").is_err());
        assert!(ActivityEvent::new("a", "").is_err());
    }

    #[test]
    fn test_parse_skips_blank_and_malformed_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("no-comma-here"), None);
    }
}
