use super::with_conn;
use crate::db::repository;
use crate::error::ApiError;
use crate::models::UpdatePromoRequest;
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// Returns the singleton banner row, or a JSON `null` body when the seed row
/// is missing.
pub async fn get_promo(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let promo = with_conn(state.pool.clone(), repository::promo_setting).await?;
    match promo {
        Some(promo) => Ok(HttpResponse::Ok().json(promo)),
        None => Ok(HttpResponse::Ok().json(serde_json::Value::Null)),
    }
}

pub async fn update_promo(
    state: web::Data<AppState>,
    body: web::Json<UpdatePromoRequest>,
) -> Result<HttpResponse, ApiError> {
    let update = body.into_inner();
    with_conn(state.pool.clone(), move |conn| {
        repository::update_promo(conn, &update.message, update.end_time, update.is_active)
    })
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Promo updated" })))
}
