use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// A catalog product record.
///
/// Records are loaded once and never mutated; derivation works on clones so the
/// source order survives every call.
///
/// Price and rating are optional because real datasets carry malformed rows. An
/// absent (or non-finite/negative) price never matches a price range and sorts
/// after every priced product; an absent rating sorts after every rated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    rating: Option<i64>,
}

impl Product {
    /// Create a product with only identity and name; every other field empty.
    pub fn new(id: ProductId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price: None,
            category: String::new(),
            image: String::new(),
            rating: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Usable price, if any. NaN, infinite and negative values count as absent.
    pub fn price(&self) -> Option<f64> {
        self.price.filter(|p| p.is_finite() && *p >= 0.0)
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Rating as recorded (expected 0..=5, not validated).
    pub fn rating(&self) -> Option<i64> {
        self.rating
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_field() {
        let p = Product::new(ProductId::new(1), "Desk Lamp")
            .with_description("Warm white LED")
            .with_price(1299.0)
            .with_category("Home")
            .with_image("https://img.example/lamp.png")
            .with_rating(4);

        assert_eq!(p.id_typed(), ProductId::new(1));
        assert_eq!(p.name(), "Desk Lamp");
        assert_eq!(p.description(), "Warm white LED");
        assert_eq!(p.price(), Some(1299.0));
        assert_eq!(p.category(), "Home");
        assert_eq!(p.image(), "https://img.example/lamp.png");
        assert_eq!(p.rating(), Some(4));
    }

    #[test]
    fn unusable_prices_read_as_absent() {
        let id = ProductId::new(2);
        assert_eq!(Product::new(id, "x").with_price(f64::NAN).price(), None);
        assert_eq!(Product::new(id, "x").with_price(-5.0).price(), None);
        assert_eq!(Product::new(id, "x").with_price(f64::INFINITY).price(), None);
        assert_eq!(Product::new(id, "x").with_price(0.0).price(), Some(0.0));
    }

    #[test]
    fn deserializes_dataset_shape() {
        let json = r#"{
            "id": 3,
            "name": "Smartphone",
            "description": "6.1 inch display",
            "price": 25999,
            "category": "Electronics",
            "image": "phone.jpg",
            "rating": 5
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(*p.id(), ProductId::new(3));
        assert_eq!(p.price(), Some(25999.0));
        assert_eq!(p.rating(), Some(5));
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let p: Product = serde_json::from_str(r#"{"id": 4, "name": "Mystery"}"#).unwrap();
        assert_eq!(p.description(), "");
        assert_eq!(p.category(), "");
        assert_eq!(p.price(), None);
        assert_eq!(p.rating(), None);
    }
}
