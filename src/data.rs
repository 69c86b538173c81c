use log::debug;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

use crate::{error::Result, sanitize::clean_name};

pub type PlayerId = i64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
	pub id: PlayerId,
	pub name: String,
}

/// A recorded result. There are no draws, so every match has a winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
	pub winner: PlayerId,
	pub loser: PlayerId,
}

pub fn clear_matches(conn: &mut Connection) -> Result<()> {
	let tx = conn.transaction()?;
	let removed = tx.execute("DELETE FROM matches;", [])?;
	tx.commit()?;

	debug!("removed {removed} matches");
	Ok(())
}

/// Removes every player. Matches referencing them must be cleared first.
pub fn clear_players(conn: &mut Connection) -> Result<()> {
	let tx = conn.transaction()?;
	let removed = tx.execute("DELETE FROM players;", [])?;
	tx.commit()?;

	debug!("removed {removed} players");
	Ok(())
}

pub fn count_players(conn: &Connection) -> Result<usize> {
	let count: i64 = conn.query_row("SELECT COUNT(*) FROM players;", [], |row| row.get(0))?;

	Ok(count as usize)
}

/// Registers a player under the sanitized form of `name`.
///
/// Returns the new player's id, or `None` when nothing was left of the name
/// after sanitizing. That case inserts no row and is not an error.
pub fn register_player(conn: &mut Connection, name: &str) -> Result<Option<PlayerId>> {
	let name = clean_name(name);
	if name.is_empty() {
		debug!("dropped registration with empty name");
		return Ok(None);
	}

	let tx = conn.transaction()?;
	tx.execute("INSERT INTO players (name) VALUES (?1);", [&name])?;
	let id = tx.last_insert_rowid();
	tx.commit()?;

	debug!("registered player {id}: {name}");
	Ok(Some(id))
}

pub fn report_match(conn: &mut Connection, winner: PlayerId, loser: PlayerId) -> Result<()> {
	report_matches(conn, &[Match { winner, loser }])
}

/// Records every match in one transaction. Either all are stored or none are.
pub fn report_matches(conn: &mut Connection, matches: &[Match]) -> Result<()> {
	let tx = conn.transaction()?;
	{
		let mut stmt = tx.prepare("INSERT INTO matches (winner, loser) VALUES (?1, ?2);")?;
		for m in matches {
			stmt.execute(params![m.winner, m.loser])?;
		}
	}
	tx.commit()?;

	debug!("recorded {} matches", matches.len());
	Ok(())
}

pub fn get_players(conn: &Connection) -> Result<Vec<Player>> {
	let mut stmt = conn.prepare("SELECT id, name FROM players ORDER BY id;")?;
	let players = stmt
		.query_map([], |row| {
			Ok(Player {
				id: row.get(0)?,
				name: row.get(1)?,
			})
		})?
		.collect::<rusqlite::Result<Vec<_>>>()?;

	Ok(players)
}
