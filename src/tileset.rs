//! The BMP blob embedded at the head of a level.
//!
//! ```text
//! offset 0  "BM"
//! offset 2  u32 LE  total blob length, counted from offset 0
//! ...       rest of the bitmap, verbatim
//! ```
//!
//! The tile-record stream starts right after the last blob byte.

use {
	crate::{writeOutput, Error, ReadExt, Result},
	byteorder::{ReadBytesExt, LE},
	std::{
		io::{Read, Seek, SeekFrom},
		path::Path,
	},
};

pub const MAGIC: [u8; 2] = *b"BM";
pub const SIZE_OFFSET: u64 = MAGIC.len() as _;
pub const FILENAME: &str = "tiles.bmp";

pub struct Tileset {
	bytes: Vec<u8>,
}

impl Tileset {
	/// `Ok(None)` when the level doesn't start with [`MAGIC`]; the map then starts at offset 0.
	pub fn extract<R: Read + Seek>(level: &mut R) -> Result<Option<Tileset>> {
		level.seek(SeekFrom::Start(0))?;
		let mut magic = [0; MAGIC.len()];
		if level.readExactOrToEnd(&mut magic)? != MAGIC.len() || magic != MAGIC {
			log::info!("No tileset found");
			return Ok(None);
		}

		let size = level
			.seek(SeekFrom::Start(SIZE_OFFSET))
			.and_then(|_| level.read_u32::<LE>())
			.map_err(|err| {
				log::debug!("tileset size: {err}");
				Error::TilesetSize
			})?;
		log::debug!("tileset size = {size}");

		level.seek(SeekFrom::Start(0))?;
		let mut bytes = Vec::new();
		let got = level.take(size.into()).read_to_end(&mut bytes)? as u64;
		if got != u64::from(size) {
			return Err(Error::TilesetTruncated { expected: size, got });
		}
		Ok(Some(Tileset { bytes }))
	}

	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	/// Offset of the first tile record.
	pub fn streamStart(&self) -> u64 {
		self.bytes.len() as _
	}

	pub fn writeTo(&self, dir: &Path) -> Result<()> {
		let path = dir.join(FILENAME);
		writeOutput(&path, &self.bytes)?;
		log::info!("wrote {} bytes to {path:?}", self.bytes.len());
		Ok(())
	}
}

/// Extracts the tileset (if any) into `dir` and returns where the tile records start.
pub fn extractInto<R: Read + Seek>(level: &mut R, dir: &Path) -> Result<u64> {
	match Tileset::extract(level)? {
		Some(tileset) => {
			tileset.writeTo(dir)?;
			Ok(tileset.streamStart())
		}
		None => Ok(0),
	}
}
