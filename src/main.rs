#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	clap::Parser,
	const_format::concatcp,
	log::LevelFilter,
	lvl_export::{export, map, outputDirFor, tileset},
	std::{path::PathBuf, process::ExitCode},
};

const ABOUT: &str = concatcp!(
	"Exports a level's embedded tileset into ",
	tileset::FILENAME,
	" and its tile placements into ",
	map::FILENAME
);

#[derive(Parser, Debug)]
#[clap(version, about = ABOUT)]
struct Args {
	/// Level to export; `foo.lvl` exports into `foo/`, anything else into `<path>-exported/`
	levelPath: PathBuf,

	/// Export into this directory instead
	#[clap(short, long)]
	outputDir: Option<PathBuf>,

	/// Indent map.json
	#[clap(long)]
	pretty: bool,

	/// More logging (-v debug, -vv trace); RUST_LOG overrides
	#[clap(short, long, parse(from_occurrences))]
	verbose: u64,
}

fn main() -> ExitCode {
	let args = Args::parse();
	env_logger::Builder::new()
		.filter_level(match args.verbose {
			0 => LevelFilter::Info,
			1 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		})
		.parse_default_env()
		.init();

	let outputDir = args.outputDir.clone().unwrap_or_else(|| outputDirFor(&args.levelPath));
	match export(&args.levelPath, &outputDir, args.pretty) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			log::error!("{:?}: {err}", args.levelPath);
			ExitCode::FAILURE
		}
	}
}
