use super::with_conn;
use crate::db::repository;
use crate::error::ApiError;
use crate::models::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::AppState;
use actix_web::{web, HttpResponse};
use serde_json::json;

pub async fn list_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let orders = with_conn(state.pool.clone(), repository::all_orders).await?;
    Ok(HttpResponse::Ok().json(orders))
}

pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    let new_order = body.into_inner().into_row();
    let order = with_conn(state.pool.clone(), move |conn| {
        repository::create_order(conn, new_order)
    })
    .await?;
    Ok(HttpResponse::Ok().json(order))
}

/// Only the status column moves; the response does not reveal whether the
/// order existed.
pub async fn update_order_status(
    state: web::Data<AppState>,
    id: web::Path<i32>,
    body: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    let status = body.into_inner().status;
    with_conn(state.pool.clone(), move |conn| {
        repository::update_order_status(conn, id, &status)
    })
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Order updated" })))
}

pub async fn delete_order(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    with_conn(state.pool.clone(), move |conn| {
        repository::delete_order(conn, id)
    })
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Order deleted" })))
}
