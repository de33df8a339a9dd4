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

//! Error types for the Pulselog crates.

use thiserror::Error;

/// Result type used across the Pulselog crates
pub type Result<T> = std::result::Result<T, PulselogError>;

/// Errors that can occur while recording or querying activity
#[derive(Debug, Error)]
pub enum PulselogError {
    /// Underlying storage read/write failure. A missing partition file
    /// during a query is NOT surfaced as this variant; readers treat it
    /// as an empty day.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid day key: {0}")]
    InvalidDayKey(String),

    #[error("invalid activity event: {0}")]
    InvalidEvent(String),
}
