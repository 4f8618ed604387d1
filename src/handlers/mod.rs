pub mod categories;
pub mod orders;
pub mod products;
pub mod promo;
pub mod sliders;

use crate::db::connection::PgPool;
use crate::error::ApiError;
use actix_web::web;
use diesel::pg::PgConnection;
use diesel::QueryResult;

pub async fn health() -> &'static str {
    "Backend is Running..."
}

/// Runs one statement on a pooled connection, pushed onto actix's blocking
/// thread pool. Every handler issues exactly one of these per request.
pub(crate) async fn with_conn<T, F>(pool: PgPool, statement: F) -> Result<T, ApiError>
where
    F: FnOnce(&mut PgConnection) -> QueryResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(move || {
        let mut conn = pool.get().map_err(ApiError::Pool)?;
        statement(&mut conn).map_err(ApiError::Database)
    })
    .await?
}
