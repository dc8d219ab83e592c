/* src/cursor.rs */

use crate::Error;
use crate::forward::ForwardCursor;
use crate::reverse::ReverseCursor;
use crate::store::RandomAccess;

/// Positional byte reader over an FST arc region.
///
/// Implemented by [`ForwardCursor`], [`ReverseCursor`] and the [`Cursor`]
/// enum, so arc decoding code can be written once for both directions.
/// Positions are logical; only the lower bound of the resolved physical
/// offset is checked, the region length is informational.
pub trait ByteCursor {
	/// Error returned by reads.
	type Error;

	/// Current logical position.
	fn position(&self) -> i64;

	/// Set the logical position. `pos` must not be negative.
	fn seek(&mut self, pos: i64);

	/// Move `count` bytes in the logical read direction without touching the
	/// store. Negative values move back.
	fn skip(&mut self, count: i64);

	/// Whether positions decrease as bytes are consumed.
	fn is_reversed(&self) -> bool;

	/// Read one byte at the current position.
	///
	/// # Errors
	///
	/// Fails when the resolved physical offset is negative, or when the
	/// store fails the seek or the read.
	fn read_byte(&mut self) -> Result<u8, Self::Error>;

	/// Fill `buf` with the next `buf.len()` bytes in logical order.
	///
	/// # Errors
	///
	/// Fails when the resolved physical offset is negative, or when the
	/// store fails the seek or the read.
	fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// Read direction of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Bytes are walked front to back.
	Forward,
	/// Bytes are walked back to front.
	Reverse,
}

impl Direction {
	/// `true` for [`Direction::Reverse`].
	#[must_use]
	pub fn is_reversed(self) -> bool {
		matches!(self, Self::Reverse)
	}
}

/// Cursor whose direction is picked once, at construction.
///
/// ```
/// use fst_cursor::{ByteCursor, Cursor, Direction, SliceStore};
///
/// let bytes = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let mut cur = Cursor::new(Direction::Reverse, SliceStore::new(&bytes), 9, 10);
/// let mut buf = [0u8; 3];
/// cur.read_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [9, 8, 7]);
/// assert_eq!(cur.position(), -3);
/// ```
#[derive(Debug, Clone)]
pub enum Cursor<S> {
	/// Front-to-back cursor.
	Forward(ForwardCursor<S>),
	/// Back-to-front cursor.
	Reverse(ReverseCursor<S>),
}

impl<S: RandomAccess> Cursor<S> {
	/// Build a cursor reading `store` in `direction`, with logical position
	/// `0` at physical offset `base_offset`.
	#[must_use]
	pub fn new(direction: Direction, store: S, base_offset: i64, bound_length: i64) -> Self {
		match direction {
			Direction::Forward => Self::Forward(ForwardCursor::new(store, base_offset, bound_length)),
			Direction::Reverse => Self::Reverse(ReverseCursor::new(store, base_offset, bound_length)),
		}
	}

	/// Direction this cursor was built with.
	#[must_use]
	pub fn direction(&self) -> Direction {
		match self {
			Self::Forward(_) => Direction::Forward,
			Self::Reverse(_) => Direction::Reverse,
		}
	}

	/// Borrow the backing store.
	#[must_use]
	pub fn store(&self) -> &S {
		match self {
			Self::Forward(c) => c.store(),
			Self::Reverse(c) => c.store(),
		}
	}

	/// Give the backing store back.
	#[must_use]
	pub fn into_store(self) -> S {
		match self {
			Self::Forward(c) => c.into_store(),
			Self::Reverse(c) => c.into_store(),
		}
	}
}

impl<S: RandomAccess> ByteCursor for Cursor<S> {
	type Error = Error<S::Error>;

	fn position(&self) -> i64 {
		match self {
			Self::Forward(c) => c.position(),
			Self::Reverse(c) => c.position(),
		}
	}

	fn seek(&mut self, pos: i64) {
		match self {
			Self::Forward(c) => c.seek(pos),
			Self::Reverse(c) => c.seek(pos),
		}
	}

	fn skip(&mut self, count: i64) {
		match self {
			Self::Forward(c) => c.skip(count),
			Self::Reverse(c) => c.skip(count),
		}
	}

	fn is_reversed(&self) -> bool {
		self.direction().is_reversed()
	}

	fn read_byte(&mut self) -> Result<u8, Self::Error> {
		match self {
			Self::Forward(c) => c.read_byte(),
			Self::Reverse(c) => c.read_byte(),
		}
	}

	fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
		match self {
			Self::Forward(c) => c.read_bytes(buf),
			Self::Reverse(c) => c.read_bytes(buf),
		}
	}
}

/// Base offset and declared length shared by both cursor kinds.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Region {
	pub(crate) base: i64,
	pub(crate) bound: i64,
}

impl Region {
	/// Physical offset of `position` shifted down by `back` bytes, as a store
	/// offset. Computed without intermediate clamping; negatives are rejected
	/// and offsets beyond `u64::MAX` are pinned there for the store to refuse.
	pub(crate) fn resolve<E>(self, position: i64, back: i64) -> Result<u64, Error<E>> {
		let physical = i128::from(self.base) + i128::from(position) - i128::from(back);
		if physical < 0 {
			let physical = i64::try_from(physical).unwrap_or(i64::MIN);
			log::debug!(
				"rejecting read at physical offset {physical} (base {}, position {position})",
				self.base
			);
			return Err(Error::OutOfRange {
				base: self.base,
				bound: self.bound,
				position,
				physical,
			});
		}
		Ok(u64::try_from(physical).unwrap_or(u64::MAX))
	}
}
