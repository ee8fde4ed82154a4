use {
	crate::{map::SparseTileMap, Error, ReadExt, Result},
	byteorder::{ByteOrder, LE},
	std::io::{Read, Seek, SeekFrom},
};

pub const RECORD_LEN: usize = 4;

const COORD_BITS: u32 = 12;
const COORD_MASK: u32 = (1 << COORD_BITS) - 1;
const TILE_SHIFT: u32 = 2 * COORD_BITS;

/// One placed tile, packed as `[tileIndexPlusOne:8][y:12][x:12]` in a little-endian word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRecord {
	pub tileIndexPlusOne: u8,
	pub x: u16,
	pub y: u16,
}

impl TileRecord {
	pub fn unpack(word: u32) -> TileRecord {
		TileRecord {
			tileIndexPlusOne: (word >> TILE_SHIFT) as u8,
			y: ((word >> COORD_BITS) & COORD_MASK) as u16,
			x: (word & COORD_MASK) as u16,
		}
	}

	/// `-1` when `tileIndexPlusOne` is 0; passed through untouched.
	// Signed on purpose: unsigned wraparound would write 4294967295 to map.json instead of -1.
	pub fn tileId(self) -> i32 {
		i32::from(self.tileIndexPlusOne) - 1
	}
}

pub fn decode<R: Read + Seek>(level: &mut R, start: u64) -> Result<SparseTileMap> {
	let mut map = SparseTileMap::default();
	decodeInto(level, start, &mut map)?;
	Ok(map)
}

/// Reads records from `start` to end of input into `map`, returning how many were read.
pub fn decodeInto<R: Read + Seek>(level: &mut R, start: u64, map: &mut SparseTileMap) -> Result<usize> {
	let actual = level.seek(SeekFrom::Start(start))?;
	if actual != start {
		return Err(Error::SeekMismatch { expected: start, actual });
	}

	let (mut numRecords, mut buffer) = (0, [0; RECORD_LEN]);
	loop {
		match level.readExactOrToEnd(&mut buffer)? {
			0 => break,
			RECORD_LEN => {}
			got => {
				let offset = start + (numRecords * RECORD_LEN) as u64;
				return Err(Error::TruncatedRecord { offset, got });
			}
		}
		let record = TileRecord::unpack(LE::read_u32(&buffer));
		log::trace!("{record:?}");
		map.insert(record.x, record.y, record.tileId());
		numRecords += 1;
	}
	log::debug!("decoded {numRecords} records, {} tiles placed", map.len());
	Ok(numRecords)
}
