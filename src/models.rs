use crate::db::models::{NewCategory, NewOrder, NewProduct};
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub title: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub discount_tag: Option<String>,
    pub category_id: Option<i32>,
    pub stock_quantity: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl CreateProductRequest {
    pub fn into_row(self) -> NewProduct {
        NewProduct {
            title: self.title,
            price: self.price,
            original_price: self.original_price,
            discount_tag: self.discount_tag,
            image_url: self.image_url,
            category_id: self.category_id,
            stock_quantity: self.stock_quantity.unwrap_or(0),
            description: self.description.unwrap_or_default(),
        }
    }
}

/// Multipart variant of product creation, as submitted by the admin form.
/// Every field except title and price may be left out.
#[derive(Debug, MultipartForm)]
pub struct ProductForm {
    pub title: Text<String>,
    pub price: Text<f64>,
    pub original_price: Option<Text<f64>>,
    pub discount_tag: Option<Text<String>>,
    pub category_id: Option<Text<String>>,
    pub stock_quantity: Option<Text<i32>>,
    pub description: Option<Text<String>>,
    pub image_url: Option<Text<String>>,
    pub image: Option<TempFile>,
}

impl ProductForm {
    /// The URL supplied as a plain form field, used when no file was
    /// uploaded. Blank means "not set".
    pub fn text_image_url(&self) -> Option<String> {
        self.image_url
            .as_ref()
            .map(|t| t.0.clone())
            .filter(|u| !u.is_empty())
    }

    pub fn into_row(self, image_url: Option<String>) -> NewProduct {
        NewProduct {
            title: self.title.0,
            price: self.price.0,
            original_price: self.original_price.map(|t| t.0),
            discount_tag: self.discount_tag.map(|t| t.0).filter(|t| !t.is_empty()),
            image_url,
            // Form fields arrive as text; anything that is not an integer
            // means "no category", same as a blank field.
            category_id: self.category_id.and_then(|t| t.0.parse().ok()),
            stock_quantity: self.stock_quantity.map(|t| t.0).unwrap_or(0),
            description: self.description.map(|t| t.0).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub discount_percent: Option<i32>,
}

impl CreateCategoryRequest {
    pub fn into_row(self) -> NewCategory {
        NewCategory {
            name: self.name,
            discount_percent: self.discount_percent.unwrap_or(0),
            image_url: None,
        }
    }
}

#[derive(Debug, MultipartForm)]
pub struct CategoryForm {
    pub name: Text<String>,
    pub discount_percent: Option<Text<i32>>,
    pub image: Option<TempFile>,
}

impl CategoryForm {
    pub fn into_row(self, image_url: Option<String>) -> NewCategory {
        NewCategory {
            name: self.name.0,
            discount_percent: self.discount_percent.map(|t| t.0).unwrap_or(0),
            image_url,
        }
    }
}

/// Slider creation carries nothing but the image.
#[derive(Debug, MultipartForm)]
pub struct SliderForm {
    pub image: Option<TempFile>,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub total_amount: f64,
    /// Line items, stored verbatim as serialized JSON.
    pub items: Value,
}

impl CreateOrderRequest {
    pub fn into_row(self) -> NewOrder {
        NewOrder {
            customer_name: self.name,
            phone: self.phone,
            address: self.address,
            city: self.city,
            total_amount: self.total_amount,
            items: self.items.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePromoRequest {
    pub message: String,
    pub end_time: Option<DateTime<Utc>>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_json_defaults_apply() {
        let req: CreateProductRequest =
            serde_json::from_value(json!({ "title": "Chips", "price": 50.0 })).unwrap();
        let row = req.into_row();

        assert_eq!(row.title, "Chips");
        assert_eq!(row.stock_quantity, 0);
        assert_eq!(row.description, "");
        assert!(row.original_price.is_none());
        assert!(row.discount_tag.is_none());
        assert!(row.category_id.is_none());
        assert!(row.image_url.is_none());
    }

    #[test]
    fn product_json_keeps_a_supplied_image_url() {
        let req: CreateProductRequest = serde_json::from_value(json!({
            "title": "Chips",
            "price": 50.0,
            "image_url": "http://x/img.png"
        }))
        .unwrap();

        assert_eq!(req.into_row().image_url.as_deref(), Some("http://x/img.png"));
    }

    #[test]
    fn product_form_parses_category_id_leniently() {
        let form = ProductForm {
            title: Text("Chips".to_string()),
            price: Text(50.0),
            original_price: None,
            discount_tag: Some(Text(String::new())),
            category_id: Some(Text("7".to_string())),
            stock_quantity: None,
            description: None,
            image_url: None,
            image: None,
        };
        let row = form.into_row(None);

        assert_eq!(row.category_id, Some(7));
        // Blank tag means no tag.
        assert!(row.discount_tag.is_none());
        assert_eq!(row.stock_quantity, 0);
    }

    #[test]
    fn product_form_ignores_a_non_numeric_category() {
        let form = ProductForm {
            title: Text("Chips".to_string()),
            price: Text(50.0),
            original_price: None,
            discount_tag: None,
            category_id: Some(Text("".to_string())),
            stock_quantity: Some(Text(3)),
            description: Some(Text("salty".to_string())),
            image_url: None,
            image: None,
        };
        let row = form.into_row(None);

        assert!(row.category_id.is_none());
        assert_eq!(row.stock_quantity, 3);
        assert_eq!(row.description, "salty");
    }

    #[test]
    fn blank_text_image_url_counts_as_absent() {
        let form = ProductForm {
            title: Text("Chips".to_string()),
            price: Text(50.0),
            original_price: None,
            discount_tag: None,
            category_id: None,
            stock_quantity: None,
            description: None,
            image_url: Some(Text(String::new())),
            image: None,
        };
        assert!(form.text_image_url().is_none());
    }

    #[test]
    fn category_discount_defaults_to_zero() {
        let req: CreateCategoryRequest =
            serde_json::from_value(json!({ "name": "Snacks" })).unwrap();
        let row = req.into_row();

        assert_eq!(row.discount_percent, 0);
        assert!(row.image_url.is_none());
    }

    #[test]
    fn order_items_round_trip_through_the_serialized_text() {
        let items = json!([
            { "id": 3, "title": "Chips", "qty": 2, "price": 50.0 },
            { "id": 9, "title": "Salsa", "qty": 1, "price": 120.0 }
        ]);
        let req: CreateOrderRequest = serde_json::from_value(json!({
            "name": "Ali",
            "phone": "0300-0000000",
            "address": "12 Canal Road",
            "city": "Lahore",
            "total_amount": 220.0,
            "items": items
        }))
        .unwrap();

        let row = req.into_row();
        let parsed: Value = serde_json::from_str(&row.items).unwrap();
        assert_eq!(parsed, items);
    }
}
