/* src/error.rs */

/// Errors produced by a cursor read.
///
/// `E` is the error type of the backing [`RandomAccess`](crate::RandomAccess)
/// store; store failures are passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error<E> {
	/// The physical offset resolved for the pending read is negative.
	#[error("out of range, base: {base}, num: {bound}, cur: {position}, real => {physical}")]
	OutOfRange {
		/// Base offset the cursor was built with.
		base: i64,
		/// Declared length of the addressable region.
		bound: i64,
		/// Logical position at the time of the read.
		position: i64,
		/// Physical offset that would have been handed to the store.
		physical: i64,
	},

	/// The backing store failed the seek or the read.
	#[error(transparent)]
	Store(E),
}

/// Errors produced by the in-memory [`SliceStore`](crate::SliceStore).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
	/// Seek target lies beyond the end of the data.
	#[error("seek to {offset} past end of store ({len} bytes)")]
	SeekPastEnd {
		/// Requested absolute offset.
		offset: u64,
		/// Length of the store.
		len: u64,
	},

	/// A read ran off the end of the data.
	#[error("unexpected end of store: need {need} bytes at {offset}, store has {len}")]
	UnexpectedEof {
		/// Absolute offset the read started at.
		offset: u64,
		/// Bytes requested.
		need: usize,
		/// Length of the store.
		len: u64,
	},
}
