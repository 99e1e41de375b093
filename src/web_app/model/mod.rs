// web_app/model/mod.rs - Shared data models for the storefront
//
// These structs mirror the REST backend's wire format and carry the
// client-side form state that gets coerced into it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category understood by the backend's equality filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Dhoop,
    Agarbatti,
    Perfume,
    Batti,
}

impl Category {
    /// Every category, in the order the filter chips render
    pub const ALL: [Category; 4] = [
        Category::Dhoop,
        Category::Agarbatti,
        Category::Perfume,
        Category::Batti,
    ];

    /// Wire key used in query parameters and JSON bodies
    pub fn key(self) -> &'static str {
        match self {
            Category::Dhoop => "dhoop",
            Category::Agarbatti => "agarbatti",
            Category::Perfume => "perfume",
            Category::Batti => "batti",
        }
    }

    /// Human-facing chip label
    pub fn label(self) -> &'static str {
        match self {
            Category::Dhoop => "Dhoop Batti",
            Category::Agarbatti => "Agarbatti",
            Category::Perfume => "Perfumes",
            Category::Batti => "Batti",
        }
    }

    /// Parse a wire key back into a category
    pub fn from_key(key: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Role attached to a resolved profile; `Admin` unlocks the product form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Profile owned by a bearer token, replaced wholesale on each resolution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Product as served by the catalog endpoints
///
/// Immutable from the client's perspective except via admin creation;
/// identity is the id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Backend identity; document stores expose it as `_id`
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Decimal price, carried as a plain number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Category,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Payload for the admin product-creation endpoint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Category,
    pub images: Vec<String>,
}

/// Free-text state of the admin form before coercion
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: Category,
    pub images: String,
}

impl ProductDraft {
    /// Coerce the free-text draft into the POST payload.
    ///
    /// Price falls back to zero when unparseable; the image list is
    /// split on commas, trimmed, and empty entries are dropped.
    pub fn into_payload(self) -> NewProduct {
        NewProduct {
            title: self.title,
            description: self.description,
            price: parse_price(&self.price),
            category: self.category,
            images: parse_images(&self.images),
        }
    }
}

/// Parse a free-text price, falling back to zero when unparseable
pub fn parse_price(input: &str) -> Decimal {
    input.trim().parse().unwrap_or_default()
}

/// Split a comma-separated image list into trimmed, non-empty URLs
pub fn parse_images(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

/// Contact message posted to the support endpoint; email may stay empty
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportMessage {
    pub name: String,
    pub email: String,
    pub content: String,
}

/// Body of a successful login
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_category_keys_and_labels() {
        assert_eq!(Category::Dhoop.key(), "dhoop");
        assert_eq!(Category::Agarbatti.key(), "agarbatti");
        assert_eq!(Category::Perfume.key(), "perfume");
        assert_eq!(Category::Batti.key(), "batti");

        assert_eq!(Category::Dhoop.label(), "Dhoop Batti");
        assert_eq!(Category::Perfume.label(), "Perfumes");
    }

    #[test]
    fn test_category_from_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("incense"), None);
        assert_eq!(Category::from_key(""), None);
    }

    #[test]
    fn test_category_serializes_as_wire_key() {
        let json = serde_json::to_string(&Category::Agarbatti).unwrap();
        assert_eq!(json, "\"agarbatti\"");

        let parsed: Category = serde_json::from_str("\"perfume\"").unwrap();
        assert_eq!(parsed, Category::Perfume);
    }

    #[test]
    fn test_role_defaults_to_user() {
        assert_eq!(Role::default(), Role::User);

        // Profiles without a role field degrade to non-admin
        let profile: UserProfile = serde_json::from_str(r#"{"name": "Asha"}"#).unwrap();
        assert!(!profile.is_admin());
    }

    #[test]
    fn test_admin_role_gates_admin_check() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"name": "Asha", "role": "admin"}"#).unwrap();
        assert!(profile.is_admin());

        let profile: UserProfile =
            serde_json::from_str(r#"{"name": "Ravi", "role": "user"}"#).unwrap();
        assert!(!profile.is_admin());
    }

    #[test]
    fn test_product_accepts_document_store_id() {
        let json = r#"{
            "_id": "6651f0",
            "title": "Sandal Dhoop",
            "description": "Hand rolled",
            "price": 49.5,
            "category": "dhoop",
            "images": ["https://cdn.example/sandal.jpg"]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "6651f0");
        assert_eq!(product.price, Decimal::new(495, 1));
        assert_eq!(product.category, Category::Dhoop);
        assert_eq!(product.images.len(), 1);
    }

    #[test]
    fn test_product_tolerates_missing_optional_fields() {
        let json = r#"{"id": "p1", "title": "Rose Attar", "price": 120, "category": "perfume"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.description, "");
        assert!(product.images.is_empty());
        assert_eq!(product.price, Decimal::new(120, 0));
    }

    #[test]
    fn test_parse_price_coerces_garbage_to_zero() {
        // Documented coercion behavior: unparseable input becomes zero
        assert_eq!(parse_price("49.ab"), Decimal::ZERO);
        assert_eq!(parse_price(""), Decimal::ZERO);
        assert_eq!(parse_price("not a number"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_price_accepts_plain_decimals() {
        assert_eq!(parse_price("49.5"), Decimal::new(495, 1));
        assert_eq!(parse_price(" 12 "), Decimal::new(12, 0));
        assert_eq!(parse_price("0"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_images_trims_and_drops_empties() {
        assert_eq!(
            parse_images(" a.png , b.png ,"),
            vec!["a.png".to_string(), "b.png".to_string()]
        );
        assert_eq!(parse_images(""), Vec::<String>::new());
        assert_eq!(parse_images(" , ,, "), Vec::<String>::new());
        assert_eq!(parse_images("solo.jpg"), vec!["solo.jpg".to_string()]);
    }

    #[test]
    fn test_draft_coerces_into_payload() {
        let draft = ProductDraft {
            title: "Loban Cups".to_string(),
            description: "Slow burning".to_string(),
            price: "49.ab".to_string(),
            category: Category::Batti,
            images: "one.jpg, two.jpg".to_string(),
        };

        let payload = draft.into_payload();
        assert_eq!(payload.price, Decimal::ZERO);
        assert_eq!(payload.category, Category::Batti);
        assert_eq!(payload.images, vec!["one.jpg", "two.jpg"]);
    }

    #[test]
    fn test_draft_defaults_to_dhoop_category() {
        // The form opens with the first chip's category preselected
        assert_eq!(ProductDraft::default().category, Category::Dhoop);
    }

    #[test]
    fn test_support_message_wire_shape() {
        let message = SupportMessage {
            name: "Meera".to_string(),
            email: String::new(),
            content: "Order enquiry".to_string(),
        };

        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["name"], "Meera");
        assert_eq!(json["email"], "");
        assert_eq!(json["content"], "Order enquiry");
    }

    #[test]
    fn test_new_product_serializes_price_as_number() {
        let payload = NewProduct {
            title: "Rose Agarbatti".to_string(),
            description: String::new(),
            price: parse_price("75.50"),
            category: Category::Agarbatti,
            images: vec![],
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["price"].is_number());
        assert_eq!(json["category"], "agarbatti");
    }
}
