use super::with_conn;
use crate::db::repository;
use crate::error::ApiError;
use crate::models::{CreateProductRequest, ProductForm};
use crate::AppState;
use actix_multipart::form::MultipartForm;
use actix_web::{web, Either, HttpResponse};
use serde_json::json;

pub async fn list_products(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let products = with_conn(state.pool.clone(), repository::all_products).await?;
    Ok(HttpResponse::Ok().json(products))
}

pub async fn list_by_category(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let category_id = id.into_inner();
    let products = with_conn(state.pool.clone(), move |conn| {
        repository::products_by_category(conn, category_id)
    })
    .await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Accepts the admin form as multipart (optionally carrying the image file)
/// or as plain JSON. An uploaded file wins over a textual `image_url`.
pub async fn create_product(
    state: web::Data<AppState>,
    payload: Either<MultipartForm<ProductForm>, web::Json<CreateProductRequest>>,
) -> Result<HttpResponse, ApiError> {
    let new_product = match payload {
        Either::Left(MultipartForm(form)) => {
            let image_url = match &form.image {
                Some(file) if file.size > 0 => Some(state.image_store.store(file)?),
                _ => form.text_image_url(),
            };
            form.into_row(image_url)
        }
        Either::Right(web::Json(body)) => body.into_row(),
    };

    let product = with_conn(state.pool.clone(), move |conn| {
        repository::create_product(conn, new_product)
    })
    .await?;
    Ok(HttpResponse::Ok().json(product))
}

pub async fn delete_product(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    with_conn(state.pool.clone(), move |conn| {
        repository::delete_product(conn, id)
    })
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Product Deleted" })))
}
