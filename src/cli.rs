use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, long_about = None)]
pub struct Cli {
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	#[arg(
		short,
		long,
		value_name = "FILE",
		env = "SWISS_DATABASE",
		default_value = "tournament.db"
	)]
	pub database: PathBuf,

	/// Write standings and pairings as CSV
	#[arg(long)]
	pub csv: bool,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	Register {
		name: String,
	},
	Report {
		winner: i64,
		loser: i64,
	},
	Count,
	Standings,
	Pairings,
	ClearMatches,
	ClearPlayers,
	/// Record every `winner,loser` row of a CSV file
	Load {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
}
