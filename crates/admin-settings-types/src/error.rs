//! Error type shared by the settings store and its adapters.

pub type SetResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	DbError,
	/// The backend exposes only the composed value, not individual fields
	FieldAccessNotSupported,
	Validation(String),
	Config(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::DbError => write!(f, "database error"),
			Error::FieldAccessNotSupported => write!(f, "backend does not support field access"),
			Error::Validation(msg) => write!(f, "validation failed: {}", msg),
			Error::Config(msg) => write!(f, "configuration error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

// vim: ts=4
