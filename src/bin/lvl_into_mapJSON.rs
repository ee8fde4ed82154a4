#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	lvl_export::{map, readToVec, stdoutRaw, tiles, tileset::Tileset},
	std::io::{self, Write},
};

fn main() -> Result<(), lvl_export::Error> {
	env_logger::init();
	let level = &mut io::Cursor::new(readToVec(io::stdin())?);
	let start = Tileset::extract(level)?.map_or(0, |tileset| tileset.streamStart());
	let map = tiles::decode(level, start)?;
	eprintln!("{} tiles", map.len());
	stdoutRaw().write_all(&map::serialize(&map, false)?)?;
	Ok(())
}
