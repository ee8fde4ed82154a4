#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

pub mod error;
pub mod map;
pub mod tiles;
pub mod tileset;

pub use error::{Error, ErrorClass, Result};

use std::{
	fs::{self, File},
	io::{self, BufReader, ErrorKind, Read},
	os,
	path::{Path, PathBuf},
};

pub const LVL_EXTENSION: &str = ".lvl";
pub const EXPORTED_SUFFIX: &str = "-exported";

/// `foo.lvl` exports into `foo`, anything else into `<path>-exported`.
pub fn outputDirFor(levelPath: &Path) -> PathBuf {
	let levelPath = levelPath.as_os_str();
	match levelPath.to_str().and_then(|s| s.strip_suffix(LVL_EXTENSION)) {
		Some(stem) => PathBuf::from(stem),
		None => {
			let mut dir = levelPath.to_os_string();
			dir.push(EXPORTED_SUFFIX);
			PathBuf::from(dir)
		}
	}
}

/// Any failure to stat `dir` (not just `NotFound`) leads to one non-recursive creation attempt.
pub fn ensureOutputDir(dir: &Path) -> Result<()> {
	if let Err(err) = fs::metadata(dir) {
		log::debug!("{dir:?}: {err}, creating it");
		fs::create_dir(dir).map_err(|source| Error::OutputDir { path: dir.to_owned(), source })?;
	}
	Ok(())
}

/// Runs the whole pipeline: `tiles.bmp` (when the level has a tileset) and `map.json` land in `outputDir`.
pub fn export(levelPath: &Path, outputDir: &Path, pretty: bool) -> Result<()> {
	let level = &mut BufReader::new(File::open(levelPath)?);
	ensureOutputDir(outputDir)?;
	let start = tileset::extractInto(level, outputDir)?;
	tiles::decode(level, start)?.writeTo(outputDir, pretty)
}

pub(crate) fn writeOutput(path: &Path, bytes: &[u8]) -> Result<()> {
	let wrap = |source| Error::Output { path: path.to_owned(), source };
	io::Write::write_all(&mut File::create(path).map_err(wrap)?, bytes).map_err(wrap)
}

pub trait ReadExt {
	/// Like `read_exact`, but a short count at end of input is reported instead of failing.
	fn readExactOrToEnd(&mut self, buffer: &mut [u8]) -> io::Result<usize>;
}

impl<R: Read + ?Sized> ReadExt for R {
	fn readExactOrToEnd(&mut self, mut buffer: &mut [u8]) -> io::Result<usize> {
		let mut numBytesRead = 0;
		while !buffer.is_empty() {
			match self.read(buffer) {
				Ok(0) => break,
				Ok(n) => {
					buffer = &mut buffer[n..];
					numBytesRead += n;
				}
				Err(ref e) if e.kind() == ErrorKind::Interrupted => {}
				Err(e) => return Err(e),
			}
		}
		Ok(numBytesRead)
	}
}

pub fn readToVec(mut reader: impl Read) -> io::Result<Vec<u8>> {
	let mut vec = Vec::new();
	reader.read_to_end(&mut vec)?;
	Ok(vec)
}

#[cfg(unix)]
pub fn stdoutRaw() -> File {
	use os::unix::io::FromRawFd;
	unsafe { File::from_raw_fd(1) }
}

#[cfg(windows)]
pub fn stdoutRaw() -> File {
	use os::windows::io::{AsRawHandle, FromRawHandle};
	unsafe { File::from_raw_handle(io::stdout().as_raw_handle()) }
}
