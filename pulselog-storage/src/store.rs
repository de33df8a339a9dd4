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

//! Activity store
//!
//! Record side goes through [`PartitionWriter`]; the read side opens
//! partition files directly (reads never touch the write handle).

use pulselog_core::{parse_line, ActivityEvent, DayKey, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Per-day view of activity: user id to the set of distinct session
/// ids seen that day. Duplicate (user, session) pairs within one day
/// collapse to a single entry.
pub type DaySessions = BTreeMap<String, BTreeSet<String>>;

/// File-backed activity store rooted at a single directory.
///
/// Owns no persistent state besides the root path; all durable state
/// lives in the partition files.
pub struct ActivityStore {
    root: PathBuf,
    writer: super::PartitionWriter,
}

impl ActivityStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let writer = super::PartitionWriter::new(&root);
        Self { root, writer }
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Record one activity event under `day`, defaulting to today in
    /// UTC. Called whenever a client reports a session.
    pub fn record(
        &self,
        user_id: &str,
        session_id: &str,
        day: Option<DayKey>,
    ) -> Result<()> {
        let event = ActivityEvent::new(user_id, session_id)?;
        let day = day.unwrap_or_else(DayKey::today_utc);
        debug!(user_id, session_id, day = %day, "recording activity");
        self.writer.append(day, &event.to_line())
    }

    /// Read and parse one day's partition into [`DaySessions`].
    ///
    /// A missing partition file means no activity was recorded that
    /// day and yields an empty map; every other I/O failure is a real
    /// error. Blank and comma-less lines are skipped.
    pub fn read_day(&self, day: DayKey) -> Result<DaySessions> {
        let path = self.root.join(day.file_name());
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(DaySessions::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut sessions = DaySessions::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if let Some((user, session)) = parse_line(&line) {
                sessions
                    .entry(user.to_string())
                    .or_default()
                    .insert(session.to_string());
            }
        }
        Ok(sessions)
    }
}
