//! Product records.

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: f32 = 5.0;

/// A product in the catalog.
///
/// Products are immutable snapshots: the cart, wishlist and the other
/// shopper lists store copies, so the price in a line item is the price at
/// the time the product was added.
///
/// Deserialization validates the record; see [`Product::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "ProductRecord")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Description shown on the product page.
    pub description: String,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Current price.
    pub price: Money,
    /// Price before the discount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Advertised discount, 0–100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<u8>,
    /// Image references, primary first. Never empty.
    pub images: Vec<String>,
    /// Average rating, 0–5.
    pub rating: f32,
    /// Number of reviews.
    pub review_count: u32,
    /// Whether the product can be bought.
    pub in_stock: bool,
    /// Units left, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<u32>,
    /// Shown with a "new" badge and sorted first by `newest`.
    pub is_new: bool,
    /// Short feature bullet points.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

/// How much stock to show for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// Not purchasable.
    OutOfStock,
    /// In stock with a known count.
    Exact(u32),
    /// In stock, count not recorded.
    Unknown,
}

impl Product {
    /// Create an in-stock product with a single image and no discount.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<CategoryId>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            price,
            original_price: None,
            discount_percent: None,
            images: vec![image.into()],
            rating: 0.0,
            review_count: 0,
            in_stock: true,
            stock_count: None,
            is_new: false,
            features: Vec::new(),
        }
    }

    /// Check the record invariants.
    ///
    /// - at least one image
    /// - price is not negative
    /// - rating within 0–5
    /// - discount within 0–100, and a discount implies an original price
    ///   above the current price
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |reason: &str| CommerceError::InvalidProduct {
            id: self.id.to_string(),
            reason: reason.to_string(),
        };

        if self.images.is_empty() {
            return Err(invalid("no images"));
        }
        if self.price.amount() < 0 {
            return Err(invalid("negative price"));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(invalid("rating outside 0-5"));
        }
        if let Some(percent) = self.discount_percent {
            if percent > 100 {
                return Err(invalid("discount above 100%"));
            }
            match self.original_price {
                Some(original) if original > self.price => {}
                Some(_) => return Err(invalid("original price not above price")),
                None => return Err(invalid("discount without original price")),
            }
        }
        Ok(())
    }

    /// Whether the product carries a discount badge.
    pub fn is_on_sale(&self) -> bool {
        self.discount_percent.is_some()
    }

    /// Amount saved against the original price, zero when not discounted.
    pub fn savings(&self) -> Money {
        match self.original_price {
            Some(original) if original > self.price => original - self.price,
            _ => Money::zero(),
        }
    }

    /// The primary image.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    /// Stock to display.
    ///
    /// Products without a recorded count report [`StockLevel::Unknown`]
    /// rather than an invented number.
    pub fn stock_level(&self) -> StockLevel {
        match (self.in_stock, self.stock_count) {
            (false, _) | (true, Some(0)) => StockLevel::OutOfStock,
            (true, Some(n)) => StockLevel::Exact(n),
            (true, None) => StockLevel::Unknown,
        }
    }

    /// Case-insensitive substring match against name, description and
    /// category. `needle` must already be lowercase.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.as_str().to_lowercase().contains(needle)
    }
}

/// Wire shape of a product: older records carry a single `image` instead
/// of `images`, and the optional flags may be missing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: ProductId,
    name: String,
    #[serde(default)]
    description: String,
    category: CategoryId,
    price: Money,
    #[serde(default)]
    original_price: Option<Money>,
    #[serde(default)]
    discount_percent: Option<u8>,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    review_count: u32,
    #[serde(default = "default_in_stock")]
    in_stock: bool,
    #[serde(default)]
    stock_count: Option<u32>,
    #[serde(default)]
    is_new: bool,
    #[serde(default)]
    features: Vec<String>,
}

fn default_in_stock() -> bool {
    true
}

impl TryFrom<ProductRecord> for Product {
    type Error = CommerceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let mut images = record.images;
        if images.is_empty() {
            images.extend(record.image);
        }

        let product = Product {
            id: record.id,
            name: record.name,
            description: record.description,
            category: record.category,
            price: record.price,
            original_price: record.original_price,
            discount_percent: record.discount_percent,
            images,
            rating: record.rating,
            review_count: record.review_count,
            in_stock: record.in_stock,
            stock_count: record.stock_count,
            is_new: record.is_new,
            features: record.features,
        };
        product.validate()?;
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        let mut p = Product::new(
            "1",
            "Sony WH-CH720N",
            "audio",
            Money::new(849_000),
            "/images/sony.jpg",
        );
        p.original_price = Some(Money::new(999_000));
        p.discount_percent = Some(15);
        p.rating = 4.6;
        p
    }

    #[test]
    fn test_product_creation() {
        let product = headphones();
        assert_eq!(product.id, "1");
        assert!(product.is_on_sale());
        assert_eq!(product.savings(), Money::new(150_000));
        assert_eq!(product.primary_image(), "/images/sony.jpg");
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_single_image_field_is_normalized() {
        let p: Product = serde_json::from_str(
            r#"{"id":"9","name":"Cable","category":"audio","price":50000,"image":"/c.jpg","rating":4.0,"reviewCount":3,"inStock":true}"#,
        )
        .unwrap();
        assert_eq!(p.images, vec!["/c.jpg".to_string()]);
        assert!(!p.is_new);
        assert!(p.features.is_empty());
    }

    #[test]
    fn test_images_take_precedence_over_image() {
        let p: Product = serde_json::from_str(
            r#"{"id":"9","name":"Cable","category":"audio","price":50000,"images":["/a.jpg","/b.jpg"],"image":"/c.jpg"}"#,
        )
        .unwrap();
        assert_eq!(p.primary_image(), "/a.jpg");
    }

    #[test]
    fn test_record_without_images_rejected() {
        let result: Result<Product, _> =
            serde_json::from_str(r#"{"id":"9","name":"Cable","category":"audio","price":50000}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_discount_requires_higher_original_price() {
        let mut p = headphones();
        p.original_price = None;
        assert!(matches!(
            p.validate(),
            Err(CommerceError::InvalidProduct { .. })
        ));

        p.original_price = Some(Money::new(800_000));
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut p = headphones();
        p.rating = 5.5;
        assert!(p.validate().is_err());
        p.rating = f32::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_stock_level() {
        let mut p = headphones();
        assert_eq!(p.stock_level(), StockLevel::Unknown);
        p.stock_count = Some(4);
        assert_eq!(p.stock_level(), StockLevel::Exact(4));
        p.stock_count = Some(0);
        assert_eq!(p.stock_level(), StockLevel::OutOfStock);
        p.stock_count = Some(4);
        p.in_stock = false;
        assert_eq!(p.stock_level(), StockLevel::OutOfStock);
    }

    #[test]
    fn test_matches_text_checks_all_fields() {
        let mut p = headphones();
        p.description = "Noise cancelling".to_string();
        assert!(p.matches_text("sony"));
        assert!(p.matches_text("cancel"));
        assert!(p.matches_text("aud"));
        assert!(!p.matches_text("laptop"));
    }

    #[test]
    fn test_snapshot_roundtrip_omits_empty_optionals() {
        let p = Product::new("2", "Phone", "phones", Money::new(100), "/p.jpg");
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("originalPrice"));
        assert!(json.contains("\"inStock\":true"));
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
