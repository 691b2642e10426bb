use std::{error::Error, fmt::Debug};

use diesel::{Connection, MysqlConnection};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::{configuration::DatabaseSettings, telemetry::spawn_blocking_with_tracing};

pub type DbConnection = MysqlConnection;

pub fn error_fmt_chain(f: &mut std::fmt::Formatter<'_>, source: &Option<impl Error>) -> std::fmt::Result{
    if let Some(error) = source{
        write!(f, "\n\tCaused By:\n\t")?;
        write!(f, "{:?}", &error)?;
        error_fmt_chain(f, &error.source())
    } else {
        Ok(())
    }
}

// One connection per request: opened here, dropped by the caller once the
// result set has been read. There is no pool.
pub async fn open_connection(
    settings: &DatabaseSettings
) -> Result<DbConnection, ConnectError>{
    let url = settings.get_database_table_url();

    let conn = spawn_blocking_with_tracing(move || {
        MysqlConnection::establish(url.expose_secret())
    })
    .await??;

    Ok(conn)
}

#[derive(Error)]
pub enum ConnectError{
    #[error("Failed due to threadpool error")]
    ThreadpoolError(#[from] tokio::task::JoinError),
    #[error("Failed to open connection to database")]
    ConnectionError(#[from] diesel::ConnectionError),
}

impl Debug for ConnectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}
