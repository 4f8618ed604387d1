diesel::table! {
    products (id) {
        id -> Int4,
        title -> Varchar,
        price -> Float8,
        original_price -> Nullable<Float8>,
        discount_tag -> Nullable<Varchar>,
        image_url -> Nullable<Varchar>,
        category_id -> Nullable<Int4>,
        stock_quantity -> Int4,
        description -> Text,
    }
}

diesel::table! {
    categories (id) {
        id -> Int4,
        name -> Varchar,
        discount_percent -> Int4,
        image_url -> Nullable<Varchar>,
    }
}

diesel::table! {
    sliders (id) {
        id -> Int4,
        image_url -> Varchar,
    }
}

diesel::table! {
    orders (id) {
        id -> Int4,
        customer_name -> Varchar,
        phone -> Varchar,
        address -> Text,
        city -> Varchar,
        total_amount -> Float8,
        items -> Text,
        status -> Varchar,
    }
}

diesel::table! {
    promo_settings (id) {
        id -> Int4,
        message -> Text,
        end_time -> Nullable<Timestamptz>,
        is_active -> Bool,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    products,
    categories,
    sliders,
    orders,
    promo_settings,
);
