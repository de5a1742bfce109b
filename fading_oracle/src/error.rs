use std::{error::Error, fmt::Display, io};

/// Why an oracle file could not be opened. Fatal for the
/// oracle; callers fall back to a non-oracle opponent at their discretion.
#[derive(Debug)]
pub enum OracleError {
  Io(io::Error),
  FileFormat { expected_len: u64, actual_len: u64 },
}

impl Display for OracleError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io(e) => write!(f, "failed to open table: {e}"),
      Self::FileFormat {
        expected_len,
        actual_len,
      } => write!(
        f,
        "table file size {actual_len} does not match header-implied size {expected_len}"
      ),
    }
  }
}

impl Error for OracleError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::FileFormat { .. } => None,
    }
  }
}

impl From<io::Error> for OracleError {
  fn from(e: io::Error) -> Self {
    Self::Io(e)
  }
}
