#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	lvl_export::{readToVec, stdoutRaw, tileset::Tileset, Error},
	std::io::{self, Write},
};

fn main() -> Result<(), Error> {
	env_logger::init();
	let tileset = Tileset::extract(&mut io::Cursor::new(readToVec(io::stdin())?))?.ok_or(Error::NoTileset)?;
	eprintln!("{} bytes, map data starts at {}", tileset.bytes().len(), tileset.streamStart());
	stdoutRaw().write_all(&tileset.into_bytes())?;
	Ok(())
}
