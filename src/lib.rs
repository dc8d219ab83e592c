/* src/lib.rs */

//! Forward and reverse byte cursors for FST arc data kept on disk.
//!
//! An FST too large to hold in memory is decoded straight from a
//! random-access store. Arcs are often written back to front while the FST
//! is built, so a decoder needs to walk them in either direction while
//! seeing the same logical byte order:
//!
//! - [`ForwardCursor`] maps logical position `p` to `base + p` and counts up.
//! - [`ReverseCursor`] counts down and flips every multi-byte span so it
//!   reads like the forward layout.
//!
//! Both implement [`ByteCursor`]; [`Cursor`] wraps either one behind a
//! [`Direction`] chosen at construction. Stores plug in through
//! [`RandomAccess`]: [`SliceStore`] for in-memory bytes and, with the `std`
//! feature, `IoStore` for any seekable reader.
//!
//! Every read is one seek plus one read against the store. The only check
//! the cursors make is that the resolved physical offset is not negative;
//! the region length is carried for diagnostics only.

#![cfg_attr(not(feature = "std"), no_std)]

mod cursor;
mod error;
mod forward;
mod reverse;
mod store;

pub use crate::cursor::{ByteCursor, Cursor, Direction};
pub use crate::error::{Error, StoreError};
pub use crate::forward::ForwardCursor;
pub use crate::reverse::ReverseCursor;
#[cfg(feature = "std")]
pub use crate::store::IoStore;
pub use crate::store::{RandomAccess, SliceStore};
