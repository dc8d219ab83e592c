/* src/reverse.rs */

use crate::Error;
use crate::cursor::{ByteCursor, Region};
use crate::store::RandomAccess;

/// Cursor over an arc region that was written back to front.
///
/// The logical position shrinks as bytes are consumed. A single byte is read
/// at `base_offset + position`. A span of `n` bytes ends at that offset: the
/// `n` physically earlier bytes are read in ascending address order and then
/// flipped, so the caller sees them in the same order a [`ForwardCursor`]
/// would produce for the mirrored layout.
///
/// [`ForwardCursor`]: crate::ForwardCursor
///
/// ```
/// use fst_cursor::{ByteCursor, ReverseCursor, SliceStore};
///
/// let mut store = vec![0u8; 100];
/// store.extend(0..10u8);
/// let mut cur = ReverseCursor::new(SliceStore::new(&store), 109, 10);
/// let mut buf = [0u8; 5];
/// cur.read_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [9, 8, 7, 6, 5]);
/// assert_eq!(cur.position(), -5);
/// ```
#[derive(Debug, Clone)]
pub struct ReverseCursor<S> {
	store: S,
	region: Region,
	pos: i64,
}

impl<S: RandomAccess> ReverseCursor<S> {
	/// Create a cursor at logical position `0`.
	///
	/// `bound_length` is only reported in errors; reads past it are not
	/// rejected.
	#[must_use]
	pub fn new(store: S, base_offset: i64, bound_length: i64) -> Self {
		Self {
			store,
			region: Region {
				base: base_offset,
				bound: bound_length,
			},
			pos: 0,
		}
	}

	/// Physical offset of logical position `0`.
	#[must_use]
	pub fn base_offset(&self) -> i64 {
		self.region.base
	}

	/// Declared size of the addressable region.
	#[must_use]
	pub fn bound_length(&self) -> i64 {
		self.region.bound
	}

	/// Borrow the backing store.
	#[must_use]
	pub fn store(&self) -> &S {
		&self.store
	}

	/// Give the backing store back.
	#[must_use]
	pub fn into_store(self) -> S {
		self.store
	}

	/// Physical offset of the lowest byte in a span of `len` bytes ending at
	/// the current position. A zero-length span resolves one past it.
	fn span_start(&self, len: i64) -> Result<u64, Error<S::Error>> {
		self.region.resolve(self.pos, len - 1)
	}
}

impl<S: RandomAccess> ByteCursor for ReverseCursor<S> {
	type Error = Error<S::Error>;

	fn position(&self) -> i64 {
		self.pos
	}

	fn seek(&mut self, pos: i64) {
		debug_assert!(pos >= 0, "negative cursor position {pos}");
		self.pos = pos;
	}

	// Positive counts move forward logically, which is backward in storage.
	fn skip(&mut self, count: i64) {
		self.pos = self.pos.wrapping_sub(count);
	}

	fn is_reversed(&self) -> bool {
		true
	}

	fn read_byte(&mut self) -> Result<u8, Self::Error> {
		let offset = self.span_start(1)?;
		log::trace!("reverse read of 1 byte at {offset}");
		self.store.seek(offset).map_err(Error::Store)?;
		let val = self.store.read_byte().map_err(Error::Store)?;
		self.pos = self.pos.wrapping_sub(1);
		Ok(val)
	}

	fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
		let len = buf.len() as i64;
		let offset = self.span_start(len)?;
		log::trace!("reverse read of {len} bytes at {offset}");
		self.store.seek(offset).map_err(Error::Store)?;
		self.store.read_bytes(buf).map_err(Error::Store)?;
		buf.reverse();
		self.pos = self.pos.wrapping_sub(len);
		Ok(())
	}
}
