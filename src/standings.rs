use log::info;
use rusqlite::{Connection, Transaction};
use serde::Serialize;

use crate::{data::PlayerId, error::Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
	pub player_id: PlayerId,
	pub player_name: String,
	pub wins: u32,
	pub played: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
	pub id1: PlayerId,
	pub name1: String,
	pub id2: PlayerId,
	pub name2: String,
}

const BY_WINS: &str = "SELECT player_id, player_name, won, played FROM position
	 ORDER BY won DESC, played ASC, player_id ASC;";

// `played` is never zero when `won` is positive, but the CASE keeps the
// division well defined for players without matches.
const BY_WIN_RATIO: &str = "SELECT player_id, player_name, won, played FROM position
	 ORDER BY CASE WHEN played = 0 THEN 0.0
				   ELSE CAST(won AS REAL) / played END DESC,
			  won DESC, played ASC, player_id ASC;";

fn query(tx: &Transaction, sql: &str) -> Result<Vec<Standing>> {
	let mut stmt = tx.prepare(sql)?;
	let standings = stmt
		.query_map([], |row| {
			Ok(Standing {
				player_id: row.get(0)?,
				player_name: row.get(1)?,
				wins: row.get(2)?,
				played: row.get(3)?,
			})
		})?
		.collect::<rusqlite::Result<Vec<_>>>()?;

	Ok(standings)
}

fn top_two_tied(standings: &[Standing]) -> bool {
	match standings {
		[first, second, ..] => first.wins > 0 && first.wins == second.wins,
		_ => false,
	}
}

/// Returns every player ranked by wins, first place first.
///
/// When the two leaders have the same positive number of wins the whole list
/// is re-read ordered by win ratio instead. Only the top two are compared;
/// ties further down keep the default order.
pub fn get_standings(conn: &mut Connection) -> Result<Vec<Standing>> {
	let tx = conn.transaction()?;
	let mut standings = query(&tx, BY_WINS)?;

	// TODO: level records below first place are not broken by ratio; a full
	// comparator would need to replace this re-query.
	if top_two_tied(&standings) {
		info!(
			"{} and {} tied on {} wins, ordering by win ratio",
			standings[0].player_name, standings[1].player_name, standings[0].wins
		);
		standings = query(&tx, BY_WIN_RATIO)?;
	}

	tx.commit()?;

	Ok(standings)
}

/// Pairs adjacent players for the next round.
///
/// Uses the plain wins ordering, without the tie-break. With an odd number of
/// players the last one is left out; no bye is produced.
pub fn get_pairings(conn: &mut Connection) -> Result<Vec<Pairing>> {
	let tx = conn.transaction()?;
	let standings = query(&tx, BY_WINS)?;
	tx.commit()?;

	Ok(pair_adjacent(&standings))
}

fn pair_adjacent(standings: &[Standing]) -> Vec<Pairing> {
	standings
		.chunks_exact(2)
		.map(|pair| Pairing {
			id1: pair[0].player_id,
			name1: pair[0].player_name.clone(),
			id2: pair[1].player_id,
			name2: pair[1].player_name.clone(),
		})
		.collect()
}
