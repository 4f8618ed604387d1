use crate::config::{DatabaseSettings, Settings};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use std::time::Duration;

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type PgPooledConnection = PooledConnection<ConnectionManager<PgConnection>>;

/// Builds the process-wide pool without waiting for a live connection, then
/// probes one so a misconfigured database shows up in the logs. A failed
/// probe does not halt startup; handlers keep reporting 500 until the
/// database is reachable.
pub fn init_pool(settings: &Settings) -> PgPool {
    let manager = ConnectionManager::<PgConnection>::new(settings.database_url());
    let pool = Pool::builder()
        .max_size(settings.pool_size)
        .connection_timeout(Duration::from_secs(settings.pool_timeout_seconds))
        .build_unchecked(manager);

    let mode = match settings.database {
        DatabaseSettings::Hosted { .. } => "hosted",
        DatabaseSettings::Local { .. } => "local",
    };
    match pool.get() {
        Ok(_) => log::info!("Connected to {} database", mode),
        Err(e) => log::error!("Database connection error: {}", e),
    }

    pool
}
