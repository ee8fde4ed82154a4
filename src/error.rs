use {
	std::{io, path::PathBuf},
	thiserror::Error,
};

#[derive(Debug, Error)]
pub enum Error {
	#[error("i/o error: {0}")]
	Io(#[from] io::Error),

	#[error("corrupt level format: tileset size")]
	TilesetSize,

	#[error("corrupt level format: could not read bitmap data, expected {expected} bytes, got {got}")]
	TilesetTruncated { expected: u32, got: u64 },

	#[error("level has no tileset")]
	NoTileset,

	#[error("could not seek to map data, should start at {expected}, we are at {actual}")]
	SeekMismatch { expected: u64, actual: u64 },

	#[error("corrupt level format: truncated record at offset {offset}, expected 4 bytes, got {got}")]
	TruncatedRecord { offset: u64, got: usize },

	#[error("could not create output directory {path:?}: {source}")]
	OutputDir { path: PathBuf, source: io::Error },

	#[error("could not write to {path:?}: {source}")]
	Output { path: PathBuf, source: io::Error },

	#[error("error generating json: {0}")]
	Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
	Io,
	Format,
	Output,
}

impl Error {
	pub fn class(&self) -> ErrorClass {
		match self {
			Self::Io(_) => ErrorClass::Io,
			Self::TilesetSize
			| Self::TilesetTruncated { .. }
			| Self::NoTileset
			| Self::SeekMismatch { .. }
			| Self::TruncatedRecord { .. } => ErrorClass::Format,
			Self::OutputDir { .. } | Self::Output { .. } | Self::Json(_) => ErrorClass::Output,
		}
	}
}

pub type Result<T> = std::result::Result<T, Error>;
