use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
	/// The store could not be reached or failed outside of a constraint check.
	#[error("store error: {0}")]
	Store(rusqlite::Error),

	/// A write was rejected by the schema, e.g. a match naming an unknown player.
	#[error("constraint violation: {0}")]
	ConstraintViolation(String),

	#[error("csv error: {0}")]
	Csv(#[from] csv::Error),

	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for TournamentError {
	fn from(err: rusqlite::Error) -> Self {
		match err {
			rusqlite::Error::SqliteFailure(ref e, ref msg)
				if e.code == ErrorCode::ConstraintViolation =>
			{
				let msg = msg.clone().unwrap_or_else(|| e.to_string());
				TournamentError::ConstraintViolation(msg)
			}
			other => TournamentError::Store(other),
		}
	}
}

pub type Result<T> = std::result::Result<T, TournamentError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn constraint_failures_are_classified() {
		let err = rusqlite::Error::SqliteFailure(
			rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY),
			Some("FOREIGN KEY constraint failed".into()),
		);

		match TournamentError::from(err) {
			TournamentError::ConstraintViolation(msg) => {
				assert_eq!(msg, "FOREIGN KEY constraint failed")
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn other_failures_stay_store_errors() {
		let err = TournamentError::from(rusqlite::Error::QueryReturnedNoRows);
		assert!(matches!(err, TournamentError::Store(_)));
	}
}
