mod error;
mod oracle;

pub use error::OracleError;
pub use oracle::Oracle;
