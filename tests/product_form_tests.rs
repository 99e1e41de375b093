// tests/product_form_tests.rs - Admin draft coercion
//
// The admin form is free text end to end; the coercion into the POST
// payload is the documented contract these tests pin down.

use rust_decimal::Decimal;

use rk_storefront::web_app::model::{parse_images, parse_price, Category, ProductDraft};

#[test]
fn test_unparseable_price_coerces_to_zero() {
    let draft = ProductDraft {
        title: "Night Queen Agarbatti".to_string(),
        description: "Floral".to_string(),
        price: "49.ab".to_string(),
        category: Category::Agarbatti,
        images: String::new(),
    };

    let payload = draft.into_payload();
    assert_eq!(payload.price, Decimal::ZERO);
}

#[test]
fn test_valid_price_is_preserved_exactly() {
    let draft = ProductDraft {
        price: "199.99".to_string(),
        ..ProductDraft::default()
    };

    assert_eq!(draft.into_payload().price, Decimal::new(19999, 2));
}

#[test]
fn test_image_list_is_split_and_trimmed() {
    assert_eq!(
        parse_images(" a.png , b.png ,"),
        vec!["a.png".to_string(), "b.png".to_string()]
    );
}

#[test]
fn test_empty_image_list_defaults_to_empty() {
    let draft = ProductDraft::default();
    assert!(draft.into_payload().images.is_empty());
}

#[test]
fn test_draft_fields_pass_through_unchanged() {
    let draft = ProductDraft {
        title: "Rose Attar".to_string(),
        description: "Pure rose oil".to_string(),
        price: "350".to_string(),
        category: Category::Perfume,
        images: "rose.jpg".to_string(),
    };

    let payload = draft.into_payload();
    assert_eq!(payload.title, "Rose Attar");
    assert_eq!(payload.description, "Pure rose oil");
    assert_eq!(payload.category, Category::Perfume);
    assert_eq!(payload.images, vec!["rose.jpg"]);
    assert_eq!(payload.price, parse_price("350"));
}

#[test]
fn test_payload_serializes_to_backend_shape() {
    let draft = ProductDraft {
        title: "Sandal Dhoop".to_string(),
        description: "Hand rolled".to_string(),
        price: "49.5".to_string(),
        category: Category::Dhoop,
        images: "a.jpg,b.jpg".to_string(),
    };

    let json = serde_json::to_value(draft.into_payload()).unwrap();
    assert_eq!(json["title"], "Sandal Dhoop");
    assert_eq!(json["category"], "dhoop");
    assert!(json["price"].is_number());
    assert_eq!(json["images"].as_array().unwrap().len(), 2);
}
