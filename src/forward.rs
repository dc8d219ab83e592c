/* src/forward.rs */

use crate::Error;
use crate::cursor::{ByteCursor, Region};
use crate::store::RandomAccess;

/// Cursor over an arc region laid out front to back.
///
/// Logical position `p` maps to physical offset `base_offset + p`, and the
/// position grows by the number of bytes consumed.
///
/// ```
/// use fst_cursor::{ByteCursor, ForwardCursor, SliceStore};
///
/// let bytes = [0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let mut cur = ForwardCursor::new(SliceStore::new(&bytes), 4, 6);
/// let mut buf = [0u8; 3];
/// cur.read_bytes(&mut buf).unwrap();
/// assert_eq!(buf, [4, 5, 6]);
/// assert_eq!(cur.position(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ForwardCursor<S> {
	store: S,
	region: Region,
	pos: i64,
}

impl<S: RandomAccess> ForwardCursor<S> {
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

	fn physical_offset(&self) -> Result<u64, Error<S::Error>> {
		self.region.resolve(self.pos, 0)
	}
}

impl<S: RandomAccess> ByteCursor for ForwardCursor<S> {
	type Error = Error<S::Error>;

	fn position(&self) -> i64 {
		self.pos
	}

	fn seek(&mut self, pos: i64) {
		debug_assert!(pos >= 0, "negative cursor position {pos}");
		self.pos = pos;
	}

	fn skip(&mut self, count: i64) {
		self.pos = self.pos.wrapping_add(count);
	}

	fn is_reversed(&self) -> bool {
		false
	}

	fn read_byte(&mut self) -> Result<u8, Self::Error> {
		let offset = self.physical_offset()?;
		log::trace!("forward read of 1 byte at {offset}");
		self.store.seek(offset).map_err(Error::Store)?;
		let val = self.store.read_byte().map_err(Error::Store)?;
		self.pos = self.pos.wrapping_add(1);
		Ok(val)
	}

	fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
		let offset = self.physical_offset()?;
		log::trace!("forward read of {} bytes at {offset}", buf.len());
		self.store.seek(offset).map_err(Error::Store)?;
		self.store.read_bytes(buf).map_err(Error::Store)?;
		self.pos = self.pos.wrapping_add(buf.len() as i64);
		Ok(())
	}
}
