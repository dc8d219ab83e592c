/* demos/walk_arcs.rs */
#![allow(missing_docs)]

use fst_cursor::{ByteCursor, Cursor, Direction, IoStore};

// Arc records as the decoder wants to see them: flags, label, output.
const ARCS: [[u8; 3]; 3] = [[0x06, b'c', 0x01], [0x02, b'a', 0x00], [0x0B, b't', 0x07]];

// Bytes in front of the arc region, standing in for a file header.
const HEADER: usize = 8;

fn main() {
	let logical: Vec<u8> = ARCS.iter().flatten().copied().collect();
	let len = logical.len() as i64;

	let mut forward_file = vec![0xEE; HEADER];
	forward_file.extend_from_slice(&logical);

	let mut reverse_file = vec![0xEE; HEADER];
	reverse_file.extend(logical.iter().rev());

	let store = IoStore::new(std::io::Cursor::new(forward_file));
	let mut fwd = Cursor::new(Direction::Forward, store, HEADER as i64, len);

	// Logical position 0 of a reversed region is its last physical byte.
	let store = IoStore::new(std::io::Cursor::new(reverse_file));
	let mut rev = Cursor::new(Direction::Reverse, store, HEADER as i64 + len - 1, len);

	for cur in [&mut fwd, &mut rev] {
		match walk(cur, ARCS.len()) {
			Ok(arcs) => println!("{:?}: {arcs:02x?}", cur.direction()),
			Err(e) => eprintln!("{:?}: read error: {e}", cur.direction()),
		}
	}
}

fn walk<C: ByteCursor>(cur: &mut C, count: usize) -> Result<Vec<[u8; 3]>, C::Error> {
	let mut arcs = Vec::with_capacity(count);
	for _ in 0..count {
		let flags = cur.read_byte()?;
		let mut rest = [0u8; 2];
		cur.read_bytes(&mut rest)?;
		arcs.push([flags, rest[0], rest[1]]);
	}
	Ok(arcs)
}
