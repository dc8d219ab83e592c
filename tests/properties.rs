/* tests/properties.rs */
#![allow(missing_docs)]

mod helpers;

use fst_cursor::{ByteCursor, ForwardCursor, RandomAccess, ReverseCursor, SliceStore};
use proptest::prelude::*;

/// Split `len` bytes into consecutive read sizes from `sizes`, cycling.
fn chunks(len: usize, sizes: &[usize]) -> Vec<usize> {
	let mut out = Vec::new();
	let mut left = len;
	for &size in sizes.iter().cycle() {
		if left == 0 {
			break;
		}
		let n = size.min(left);
		out.push(n);
		left -= n;
	}
	out
}

fn read_all<C>(cur: &mut C, sizes: &[usize]) -> Vec<u8>
where
	C: ByteCursor,
	C::Error: std::fmt::Debug,
{
	let mut out = Vec::new();
	for n in sizes {
		if *n == 1 {
			out.push(cur.read_byte().unwrap());
		} else {
			let mut buf = vec![0u8; *n];
			cur.read_bytes(&mut buf).unwrap();
			out.extend_from_slice(&buf);
		}
	}
	out
}

proptest! {
	#[test]
	fn both_directions_see_the_same_bytes(
		logical in proptest::collection::vec(any::<u8>(), 1..128),
		header in 0usize..32,
		sizes in proptest::collection::vec(1usize..9, 1..8),
	) {
		let fwd_data = helpers::forward_layout(header, &logical);
		let rev_data = helpers::reverse_layout(header, &logical);
		let plan = chunks(logical.len(), &sizes);

		let mut fwd = ForwardCursor::new(SliceStore::new(&fwd_data), header as i64, logical.len() as i64);
		let mut rev = ReverseCursor::new(
			SliceStore::new(&rev_data),
			helpers::reverse_base(header, logical.len()),
			logical.len() as i64,
		);

		prop_assert_eq!(&read_all(&mut fwd, &plan), &logical);
		prop_assert_eq!(&read_all(&mut rev, &plan), &logical);
		prop_assert_eq!(fwd.position(), logical.len() as i64);
		prop_assert_eq!(rev.position(), -(logical.len() as i64));
	}

	#[test]
	fn skip_agrees_with_seek(p in 0i64..1_000_000, k in -1_000_000i64..1_000_000) {
		let data = [0u8; 1];

		let mut fwd = ForwardCursor::new(SliceStore::new(&data), 0, 1);
		fwd.seek(p);
		fwd.skip(k);
		prop_assert_eq!(fwd.position(), p + k);

		// Reverse skip counts down, so the same logical move lands on p - k.
		let mut rev = ReverseCursor::new(SliceStore::new(&data), 0, 1);
		rev.seek(p);
		rev.skip(k);
		prop_assert_eq!(rev.position(), p - k);
	}

	#[test]
	fn flipping_a_reverse_span_restores_storage_order(
		data in proptest::collection::vec(any::<u8>(), 1..64),
		len in 1usize..64,
	) {
		let len = len.min(data.len());
		let end = data.len() - 1;

		let mut cur = ReverseCursor::new(SliceStore::new(&data), 0, data.len() as i64);
		cur.seek(end as i64);
		let mut buf = vec![0u8; len];
		cur.read_bytes(&mut buf).unwrap();
		buf.reverse();

		let mut physical = vec![0u8; len];
		let mut store = SliceStore::new(&data);
		store.seek((end + 1 - len) as u64).unwrap();
		store.read_bytes(&mut physical).unwrap();

		prop_assert_eq!(buf, physical);
		prop_assert_eq!(cur.position(), end as i64 - len as i64);
	}

	#[test]
	fn negative_physical_offset_is_rejected(
		base in -1_000i64..0,
		pos in 0i64..1_000,
	) {
		prop_assume!(base + pos < 0);
		let data = [0u8; 4];
		let mut fwd = ForwardCursor::new(SliceStore::new(&data), base, 4);
		fwd.seek(pos);
		let is_out_of_range = matches!(
			fwd.read_byte(),
			Err(fst_cursor::Error::OutOfRange { physical, .. }) if physical == base + pos
		);
		prop_assert!(is_out_of_range);
		prop_assert_eq!(fwd.position(), pos);
	}
}
