use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

/// Opens the database at `path`, enabling foreign keys and creating the schema.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
	let mut conn = Connection::open(path)?;
	prepare(&mut conn)?;

	Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
	let mut conn = Connection::open_in_memory()?;
	prepare(&mut conn)?;

	Ok(conn)
}

fn prepare(conn: &mut Connection) -> Result<()> {
	// SQLite leaves foreign keys off for every new connection.
	conn.execute_batch("PRAGMA foreign_keys = ON;")?;
	create_schema(conn)
}

pub fn create_schema(conn: &mut Connection) -> Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id     INTEGER PRIMARY KEY AUTOINCREMENT,
			name   TEXT    NOT NULL
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id     INTEGER PRIMARY KEY AUTOINCREMENT,
			winner INTEGER REFERENCES players (id)
						   NOT NULL,
			loser  INTEGER REFERENCES players (id)
						   NOT NULL
		);",
		[],
	)?;

	// One row per player, aggregated from `matches` on every read.
	tx.execute(
		"CREATE VIEW IF NOT EXISTS position AS
		 SELECT p.id   AS player_id,
				p.name AS player_name,
				(SELECT COUNT(*) FROM matches m
				  WHERE m.winner = p.id) AS won,
				(SELECT COUNT(*) FROM matches m
				  WHERE m.winner = p.id OR m.loser = p.id) AS played
		   FROM players p;",
		[],
	)?;

	tx.commit()?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn schema_is_idempotent() {
		let mut conn = open_in_memory().unwrap();
		create_schema(&mut conn).unwrap();

		let views: i64 = conn
			.query_row(
				"SELECT COUNT(*) FROM sqlite_master WHERE type = 'view' AND name = 'position';",
				[],
				|row| row.get(0),
			)
			.unwrap();
		assert_eq!(views, 1);
	}

	#[test]
	fn foreign_keys_are_enforced() {
		let conn = open_in_memory().unwrap();
		let enabled: bool = conn
			.query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
			.unwrap();
		assert!(enabled);
	}
}
