//! Player and match records for a Swiss-system tournament, with standings and
//! next-round pairings derived from the recorded results.

pub mod data;
pub mod db;
pub mod error;
pub mod sanitize;
pub mod standings;

pub use data::{
	clear_matches, clear_players, count_players, get_players, register_player, report_match,
	report_matches, Match, Player, PlayerId,
};
pub use error::{Result, TournamentError};
pub use standings::{get_pairings, get_standings, Pairing, Standing};
