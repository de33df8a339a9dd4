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

//! Pulselog Storage Layer
//!
//! Day-partitioned append-only storage for activity events.
//!
//! ## Layout
//!
//! All durable state lives under a single root directory, one text
//! file per UTC calendar day:
//!
//! ```text
//! <root>/2015-10-04.txt
//! <root>/2015-10-05.txt
//! ```
//!
//! Files are created lazily on first write, grown only by appends, and
//! never rewritten or deleted by this crate. Durability is whatever
//! the underlying file system gives appends; there is no WAL and no
//! compaction, and a single writer process is assumed to own the root.

pub mod partition;
pub mod store;

pub use partition::PartitionWriter;
pub use store::{ActivityStore, DaySessions};
