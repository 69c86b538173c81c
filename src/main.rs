mod cli;

use std::{
	fs::File,
	io::{self, Write},
	path::Path,
};

use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use serde::Serialize;
use swiss_pairings::{data, db, standings, Match, Pairing, Result, Standing};

fn main() -> Result<()> {
	env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

	let cli = Cli::parse();

	let mut conn = db::open(&cli.database)?;

	let mut out = match cli.output.as_deref() {
		Some(path) => Box::new(File::create(path)?) as Box<dyn Write>,
		None => Box::new(io::stdout()) as Box<dyn Write>,
	};

	match cli.command {
		Commands::Register { name } => match data::register_player(&mut conn, &name)? {
			Some(id) => writeln!(out, "{id}")?,
			None => info!("name {name:?} is empty after sanitizing, nothing registered"),
		},
		Commands::Report { winner, loser } => data::report_match(&mut conn, winner, loser)?,
		Commands::Count => writeln!(out, "{}", data::count_players(&conn)?)?,
		Commands::Standings => {
			let rows = standings::get_standings(&mut conn)?;
			if cli.csv {
				write_csv(out, &rows)?;
			} else {
				out.write_all(standings_string(&rows).as_bytes())?;
			}
		}
		Commands::Pairings => {
			let rows = standings::get_pairings(&mut conn)?;
			if cli.csv {
				write_csv(out, &rows)?;
			} else {
				out.write_all(pairings_string(&rows).as_bytes())?;
			}
		}
		Commands::ClearMatches => data::clear_matches(&mut conn)?,
		Commands::ClearPlayers => data::clear_players(&mut conn)?,
		Commands::Load { matches } => {
			let matches = read_matches(&matches)?;
			data::report_matches(&mut conn, &matches)?;
			info!("loaded {} matches", matches.len());
		}
	}

	Ok(())
}

fn read_matches(path: &Path) -> Result<Vec<Match>> {
	let mut reader = csv::Reader::from_path(path)?;
	let mut matches = Vec::new();

	for row in reader.deserialize() {
		let m: Match = row?;
		matches.push(m);
	}

	Ok(matches)
}

fn write_csv<T: Serialize>(out: Box<dyn Write>, rows: &[T]) -> Result<()> {
	let mut writer = csv::Writer::from_writer(out);
	for row in rows {
		writer.serialize(row)?;
	}
	writer.flush()?;

	Ok(())
}

fn standings_string(rows: &[Standing]) -> String {
	let mut string = String::from("# Standings\n```");

	for (rank, s) in rows.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} ({}) - {}/{}",
			rank + 1,
			s.player_name,
			s.player_id,
			s.wins,
			s.played
		));
	}

	string.push_str("\n```\n");

	string
}

fn pairings_string(rows: &[Pairing]) -> String {
	let mut string = String::from("# Pairings\n```");

	for p in rows {
		string.push_str(&format!(
			"\n{} ({}) vs {} ({})",
			p.name1, p.id1, p.name2, p.id2
		));
	}

	string.push_str("\n```\n");

	string
}
