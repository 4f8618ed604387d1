use crate::db::schema::{categories, orders, products, promo_settings, sliders};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = products)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub discount_tag: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
    pub stock_quantity: i32,
    pub description: String,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub discount_tag: Option<String>,
    pub image_url: Option<String>,
    pub category_id: Option<i32>,
    pub stock_quantity: i32,
    pub description: String,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub discount_percent: i32,
    pub image_url: Option<String>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = categories)]
pub struct NewCategory {
    pub name: String,
    pub discount_percent: i32,
    pub image_url: Option<String>,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = sliders)]
pub struct Slider {
    pub id: i32,
    pub image_url: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = sliders)]
pub struct NewSlider {
    pub image_url: String,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = orders)]
pub struct Order {
    pub id: i32,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub total_amount: f64,
    /// Line items as the opaque JSON text they were submitted with.
    pub items: String,
    pub status: String,
}

// Status is omitted so the column default applies on insert.
#[derive(Insertable, Debug)]
#[diesel(table_name = orders)]
pub struct NewOrder {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub total_amount: f64,
    pub items: String,
}

#[derive(Queryable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = promo_settings)]
pub struct PromoSetting {
    pub id: i32,
    pub message: String,
    pub end_time: Option<DateTime<Utc>>,
    pub is_active: bool,
}
