/* tests/helpers/mod.rs */
#![allow(dead_code)]

/// A store whose bytes at `offset..offset + 10` are `0..10`, preceded by
/// filler so that low offsets hold recognisable junk.
pub(crate) fn ramp_at(offset: usize) -> Vec<u8> {
	let mut data = vec![0xFF; offset];
	data.extend(0..10u8);
	data
}

/// Three serialized arcs in logical (decoder) order.
pub(crate) fn arcs() -> Vec<u8> {
	// flags, label, output, target (2 bytes) per arc
	hex::decode(concat!("0e", "61", "05", "0010", "06", "62", "00", "0024", "0b", "7a", "7f", "0031")).unwrap()
}

/// Lay `logical` out after `header` filler bytes, front to back.
pub(crate) fn forward_layout(header: usize, logical: &[u8]) -> Vec<u8> {
	let mut data = vec![0xEE; header];
	data.extend_from_slice(logical);
	data
}

/// Lay `logical` out after `header` filler bytes, back to front.
pub(crate) fn reverse_layout(header: usize, logical: &[u8]) -> Vec<u8> {
	let mut data = vec![0xEE; header];
	data.extend(logical.iter().rev());
	data
}

/// Base offset a reverse cursor needs so logical position `0` is the first
/// logical byte of a region laid out by [`reverse_layout`].
pub(crate) fn reverse_base(header: usize, len: usize) -> i64 {
	(header + len) as i64 - 1
}
