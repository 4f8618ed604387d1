use super::with_conn;
use crate::db::models::NewSlider;
use crate::db::repository;
use crate::error::ApiError;
use crate::models::SliderForm;
use crate::AppState;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use serde_json::json;

pub async fn list_sliders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let sliders = with_conn(state.pool.clone(), repository::all_sliders).await?;
    Ok(HttpResponse::Ok().json(sliders))
}

/// Sliders are nothing but an image, so the upload is mandatory.
pub async fn create_slider(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<SliderForm>,
) -> Result<HttpResponse, ApiError> {
    let image = match form.image {
        Some(file) if file.size > 0 => file,
        _ => return Err(ApiError::MissingImage),
    };
    let image_url = state.image_store.store(&image)?;

    let slider = with_conn(state.pool.clone(), move |conn| {
        repository::create_slider(conn, NewSlider { image_url })
    })
    .await?;
    Ok(HttpResponse::Ok().json(slider))
}

pub async fn delete_slider(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    with_conn(state.pool.clone(), move |conn| {
        repository::delete_slider(conn, id)
    })
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Slider Deleted" })))
}
