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

//! Append side of the day-partitioned log
//!
//! `PartitionWriter` keeps exactly one partition file open at a time
//! and rolls the handle over when a write targets a different day.
//! Almost all traffic lands on "today", so the open handle is reused
//! across calls instead of reopening per write.

use parking_lot::Mutex;
use pulselog_core::{DayKey, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Currently open append target
struct ActivePartition {
    path: PathBuf,
    file: File,
}

/// Writer owning the single active append handle for a store root.
///
/// The rollover check and the write are one critical section, so two
/// concurrent appends for different days can never race on which
/// handle is active, and a line is always written whole.
pub struct PartitionWriter {
    root: PathBuf,
    active: Mutex<Option<ActivePartition>>,
}

impl PartitionWriter {
    /// Create a writer for the given store root. The root directory
    /// must already exist; creating it belongs to process bootstrap.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            active: Mutex::new(None),
        }
    }

    /// Append one newline-terminated line to the partition for `day`.
    ///
    /// Opens the partition in append+create mode on first use. When
    /// the target differs from the open handle, the old handle is
    /// flushed and dropped best-effort (close errors are ignored; the
    /// data was already written through) and the new one is opened.
    pub fn append(&self, day: DayKey, line: &str) -> Result<()> {
        let target = self.partition_path(day);
        let mut active = self.active.lock();

        let needs_rollover = match active.as_ref() {
            Some(current) => current.path != target,
            None => true,
        };

        if needs_rollover {
            if let Some(mut old) = active.take() {
                debug!(from = %old.path.display(), to = %target.display(), "rolling over partition");
                // Fire-and-forget close of the previous day's handle.
                let _ = old.file.flush();
            }
            let file = OpenOptions::new().append(true).create(true).open(&target)?;
            *active = Some(ActivePartition {
                path: target,
                file,
            });
        }

        let Some(partition) = active.as_mut() else {
            unreachable!("rollover installs the active partition");
        };

        // Single write_all under the lock keeps the line un-interleaved.
        partition.file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Resolved file path for a day's partition
    pub fn partition_path(&self, day: DayKey) -> PathBuf {
        self.root.join(day.file_name())
    }
}
