use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category filter value that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered by the posting form.
pub const KNOWN_CATEGORIES: [&str; 6] = [
    "Electronics",
    "Books",
    "Furniture",
    "Clothing",
    "Sports",
    "Other",
];

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com/300x300?text=";

/// A registered marketplace account.
///
/// Serialized with camelCase keys so that stored blobs keep the layout
/// written by the mobile client (`createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    // ---
    /// Creation timestamp in milliseconds, rendered as decimal text.
    pub id: String,
    pub name: String,
    /// Unique key, compared case-sensitively.
    pub email: String,
    pub phone: String,
    /// Stored as entered and compared exactly on login.
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Availability of a listing.
///
/// Only `Available` is ever written. Any other value found in storage
/// decodes as `Unavailable` and is excluded from listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Available,
    #[serde(other)]
    Unavailable,
}

/// A product listing.
///
/// Seller fields are copied from the posting user when the listing is
/// created and are never refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    // ---
    pub id: String,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub condition: String,
    pub description: String,
    pub seller_id: String,
    pub seller_name: String,
    pub seller_phone: String,
    pub image_url: String,
    pub status: ProductStatus,
    pub posted_date: DateTime<Utc>,
}

impl Product {
    // ---
    pub fn is_available(&self) -> bool {
        // ---
        self.status == ProductStatus::Available
    }

    /// `tel:` URI for handing the seller's number to the OS dialer.
    pub fn dial_uri(&self) -> String {
        // ---
        format!("tel:{}", self.seller_phone)
    }
}

/// Placeholder image for listings posted without a picture.
pub fn placeholder_image(category: &str) -> String {
    // ---
    match KNOWN_CATEGORIES.iter().find(|known| **known == category) {
        Some(known) => format!("{PLACEHOLDER_BASE}{known}"),
        None => format!("{PLACEHOLDER_BASE}UniTrade"),
    }
}

/// Registration form input. Missing fields read as empty and are then
/// rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewUser {
    // ---
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Login form input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    // ---
    pub email: String,
    pub password: String,
}

/// Posting form input. `price` is the raw text typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewProduct {
    // ---
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub condition: String,
    pub image_url: Option<String>,
}
