use crate::db::models::*;
use crate::db::schema::{categories, orders, products, promo_settings, sliders};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// The promo banner lives in a single pre-seeded row.
pub const PROMO_ROW_ID: i32 = 1;

pub fn all_products(conn: &mut PgConnection) -> QueryResult<Vec<Product>> {
    products::table.order(products::id.desc()).load(conn)
}

pub fn products_by_category(conn: &mut PgConnection, category_id: i32) -> QueryResult<Vec<Product>> {
    products::table
        .filter(products::category_id.eq(category_id))
        .load(conn)
}

pub fn create_product(conn: &mut PgConnection, new_product: NewProduct) -> QueryResult<Product> {
    diesel::insert_into(products::table)
        .values(&new_product)
        .get_result(conn)
}

pub fn delete_product(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
    diesel::delete(products::table.find(id)).execute(conn)
}

pub fn all_categories(conn: &mut PgConnection) -> QueryResult<Vec<Category>> {
    categories::table.order(categories::id.asc()).load(conn)
}

pub fn create_category(conn: &mut PgConnection, new_category: NewCategory) -> QueryResult<Category> {
    diesel::insert_into(categories::table)
        .values(&new_category)
        .get_result(conn)
}

pub fn delete_category(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
    diesel::delete(categories::table.find(id)).execute(conn)
}

pub fn all_sliders(conn: &mut PgConnection) -> QueryResult<Vec<Slider>> {
    sliders::table.order(sliders::id.desc()).load(conn)
}

pub fn create_slider(conn: &mut PgConnection, new_slider: NewSlider) -> QueryResult<Slider> {
    diesel::insert_into(sliders::table)
        .values(&new_slider)
        .get_result(conn)
}

pub fn delete_slider(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
    diesel::delete(sliders::table.find(id)).execute(conn)
}

pub fn all_orders(conn: &mut PgConnection) -> QueryResult<Vec<Order>> {
    orders::table.order(orders::id.desc()).load(conn)
}

pub fn create_order(conn: &mut PgConnection, new_order: NewOrder) -> QueryResult<Order> {
    diesel::insert_into(orders::table)
        .values(&new_order)
        .get_result(conn)
}

pub fn update_order_status(conn: &mut PgConnection, id: i32, status: &str) -> QueryResult<usize> {
    diesel::update(orders::table.find(id))
        .set(orders::status.eq(status))
        .execute(conn)
}

pub fn delete_order(conn: &mut PgConnection, id: i32) -> QueryResult<usize> {
    diesel::delete(orders::table.find(id)).execute(conn)
}

pub fn promo_setting(conn: &mut PgConnection) -> QueryResult<Option<PromoSetting>> {
    promo_settings::table
        .find(PROMO_ROW_ID)
        .first(conn)
        .optional()
}

pub fn update_promo(
    conn: &mut PgConnection,
    message: &str,
    end_time: Option<DateTime<Utc>>,
    is_active: bool,
) -> QueryResult<usize> {
    diesel::update(promo_settings::table.find(PROMO_ROW_ID))
        .set((
            promo_settings::message.eq(message),
            promo_settings::end_time.eq(end_time),
            promo_settings::is_active.eq(is_active),
        ))
        .execute(conn)
}
