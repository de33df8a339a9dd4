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

//! Pulselog Core
//!
//! Fundamental types shared by the storage, query, and server crates:
//! day-partition keys, activity events, and the error taxonomy.

pub mod day;
pub mod error;
pub mod event;

pub use day::{DayKey, DayRange, DAY_KEY_FORMAT};
pub use error::{PulselogError, Result};
pub use event::{parse_line, ActivityEvent};
