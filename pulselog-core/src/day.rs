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

//! Day-partition keys
//!
//! Every activity event is attributed to exactly one UTC calendar day,
//! and each day maps to one append-only partition file. `DayKey` is the
//! validated form of the `YYYY-MM-DD` strings that arrive at the API
//! boundary; everything past that boundary works with `DayKey` values.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PulselogError;

/// Wire format for day keys (also the partition file stem)
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// One UTC calendar day, the unit of partitioning.
///
/// Ordering is calendar order, so keys can be compared to form ranges
/// and used directly in ordered maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The current day in UTC; the default attribution for events
    /// recorded without an explicit date.
    pub fn today_utc() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Partition file name for this day, e.g. `2015-10-05.txt`
    pub fn file_name(&self) -> String {
        format!("{}.txt", self)
    }

    /// Next calendar day, or `None` at the end of the supported range
    pub fn succ(&self) -> Option<Self> {
        self.0.succ_opt().map(Self)
    }

    /// All days in `[start, end]` inclusive, ascending. An inverted
    /// range (`end < start`) yields nothing; degenerate, not an error.
    pub fn range(start: DayKey, end: DayKey) -> DayRange {
        DayRange {
            next: Some(start),
            end,
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = PulselogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts unpadded month/day fields; the wire format is
        // exactly 10 bytes, so reject anything else up front.
        if s.len() != 10 {
            return Err(PulselogError::InvalidDayKey(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|_| PulselogError::InvalidDayKey(s.to_string()))
    }
}

/// Inclusive ascending iterator over calendar days
#[derive(Debug, Clone)]
pub struct DayRange {
    next: Option<DayKey>,
    end: DayKey,
}

impl Iterator for DayRange {
    type Item = DayKey;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ();
        Some(current)
    }
}
