/* src/store.rs */

use core::cell::RefCell;

use crate::error::StoreError;

/// Random-access byte store a cursor reads from.
///
/// Every cursor read issues exactly one [`seek`](Self::seek) followed by one
/// read. Implementations keep their own read position, which the cursor never
/// relies on between calls.
pub trait RandomAccess {
	/// Error raised for an unreadable region.
	type Error;

	/// Position the store at an absolute offset for the next read.
	///
	/// # Errors
	///
	/// Returns the store's error when `offset` is invalid for this store.
	fn seek(&mut self, offset: u64) -> Result<(), Self::Error>;

	/// Read one byte at the current store position and advance by one.
	///
	/// # Errors
	///
	/// Returns the store's error when no byte can be read.
	fn read_byte(&mut self) -> Result<u8, Self::Error>;

	/// Fill `buf` from the current store position and advance by its length.
	///
	/// # Errors
	///
	/// Returns the store's error when fewer than `buf.len()` bytes are readable.
	fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<S: RandomAccess + ?Sized> RandomAccess for &mut S {
	type Error = S::Error;

	fn seek(&mut self, offset: u64) -> Result<(), Self::Error> {
		(**self).seek(offset)
	}

	fn read_byte(&mut self) -> Result<u8, Self::Error> {
		(**self).read_byte()
	}

	fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
		(**self).read_bytes(buf)
	}
}

// Lets several cursors share one store on a single thread. The cell is only
// borrowed for the duration of a single store call.
impl<S: RandomAccess + ?Sized> RandomAccess for &RefCell<S> {
	type Error = S::Error;

	fn seek(&mut self, offset: u64) -> Result<(), Self::Error> {
		self.borrow_mut().seek(offset)
	}

	fn read_byte(&mut self) -> Result<u8, Self::Error> {
		self.borrow_mut().read_byte()
	}

	fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
		self.borrow_mut().read_bytes(buf)
	}
}

/// In-memory store over a borrowed byte slice.
///
/// Copying a `SliceStore` is cheap, so each cursor can get its own copy over
/// the same bytes.
///
/// ```
/// use fst_cursor::{RandomAccess, SliceStore};
///
/// let mut store = SliceStore::new(&[1, 2, 3, 4]);
/// store.seek(2).unwrap();
/// assert_eq!(store.read_byte().unwrap(), 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SliceStore<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> SliceStore<'a> {
	/// Create a store positioned at offset `0`.
	#[must_use]
	pub fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	/// Total number of bytes in the store.
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether the store holds no bytes.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Current absolute read position.
	#[must_use]
	pub fn position(&self) -> u64 {
		self.pos as u64
	}

	fn eof(&self, need: usize) -> StoreError {
		StoreError::UnexpectedEof {
			offset: self.pos as u64,
			need,
			len: self.data.len() as u64,
		}
	}
}

impl RandomAccess for SliceStore<'_> {
	type Error = StoreError;

	fn seek(&mut self, offset: u64) -> Result<(), StoreError> {
		match usize::try_from(offset) {
			Ok(pos) if pos <= self.data.len() => {
				self.pos = pos;
				Ok(())
			}
			_ => Err(StoreError::SeekPastEnd {
				offset,
				len: self.data.len() as u64,
			}),
		}
	}

	fn read_byte(&mut self) -> Result<u8, StoreError> {
		let Some(&val) = self.data.get(self.pos) else {
			return Err(self.eof(1));
		};
		self.pos += 1;
		Ok(val)
	}

	fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), StoreError> {
		let Some(src) = self.data.get(self.pos..self.pos + buf.len()) else {
			return Err(self.eof(buf.len()));
		};
		buf.copy_from_slice(src);
		self.pos += buf.len();
		Ok(())
	}
}

/// Store backed by any [`std::io`] reader that can seek, such as a `File`.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoStore<R> {
	inner: R,
}

#[cfg(feature = "std")]
impl<R> IoStore<R> {
	/// Wrap a seekable reader.
	#[must_use]
	pub fn new(inner: R) -> Self {
		Self { inner }
	}

	/// Borrow the wrapped reader.
	#[must_use]
	pub fn get_ref(&self) -> &R {
		&self.inner
	}

	/// Unwrap the reader.
	#[must_use]
	pub fn into_inner(self) -> R {
		self.inner
	}
}

#[cfg(feature = "std")]
impl<R: std::io::Read + std::io::Seek> RandomAccess for IoStore<R> {
	type Error = std::io::Error;

	fn seek(&mut self, offset: u64) -> std::io::Result<()> {
		std::io::Seek::seek(&mut self.inner, std::io::SeekFrom::Start(offset)).map(|_| ())
	}

	fn read_byte(&mut self) -> std::io::Result<u8> {
		let mut byte = [0u8; 1];
		self.inner.read_exact(&mut byte)?;
		Ok(byte[0])
	}

	fn read_bytes(&mut self, buf: &mut [u8]) -> std::io::Result<()> {
		self.inner.read_exact(buf)
	}
}
