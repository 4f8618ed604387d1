use super::with_conn;
use crate::db::repository;
use crate::error::ApiError;
use crate::models::{CategoryForm, CreateCategoryRequest};
use crate::AppState;
use actix_multipart::form::MultipartForm;
use actix_web::{web, Either, HttpResponse};
use serde_json::json;

pub async fn list_categories(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let categories = with_conn(state.pool.clone(), repository::all_categories).await?;
    Ok(HttpResponse::Ok().json(categories))
}

pub async fn create_category(
    state: web::Data<AppState>,
    payload: Either<MultipartForm<CategoryForm>, web::Json<CreateCategoryRequest>>,
) -> Result<HttpResponse, ApiError> {
    let new_category = match payload {
        Either::Left(MultipartForm(form)) => {
            let image_url = match &form.image {
                Some(file) if file.size > 0 => Some(state.image_store.store(file)?),
                _ => None,
            };
            form.into_row(image_url)
        }
        Either::Right(web::Json(body)) => body.into_row(),
    };

    let category = with_conn(state.pool.clone(), move |conn| {
        repository::create_category(conn, new_category)
    })
    .await?;
    Ok(HttpResponse::Ok().json(category))
}

pub async fn delete_category(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    with_conn(state.pool.clone(), move |conn| {
        repository::delete_category(conn, id)
    })
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Category Deleted" })))
}
