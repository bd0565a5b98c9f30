// Unit tests for the generated field normalizer
// Covers key lookups, JSON recursion and the reverse table used for PascalCase bodies

use crate::field_normalizer::{
    MAPPING_COUNT, denormalize_json, denormalize_key, normalize_json, normalize_key,
};
use serde_json::json;

// ============================================
// UNIT TESTS: Individual Key Transformations
// ============================================

/// **VALUE**: Verifies the acronym fields (ID, URL) map to proper snake_case.
///
/// **WHY THIS MATTERS**: A generic case converter would produce `user_i_d` or
/// `image_u_r_l`, and the model structs would silently miss those fields.
///
/// **BUG THIS CATCHES**: Would catch a broken or missing entry in `api_fields.toml`.
#[test]
fn given_acronym_fields_when_normalize_key_then_converts_to_snake_case() {
    assert_eq!(normalize_key("ID"), "id");
    assert_eq!(normalize_key("UserID"), "user_id");
    assert_eq!(normalize_key("CategoryID"), "category_id");
    assert_eq!(normalize_key("ImageURL"), "image_url");
}

/// **VALUE**: Verifies snake_case keys and unknown keys pass through untouched.
///
/// **WHY THIS MATTERS**: The canonical backend schema is already snake_case; the
/// normalizer must be a no-op for it.
///
/// **BUG THIS CATCHES**: Would catch a generic transformation applied to every key.
#[test]
fn given_snake_case_or_unknown_field_when_normalize_key_then_returns_unchanged() {
    assert_eq!(normalize_key("due_date"), "due_date");
    assert_eq!(normalize_key("current_page"), "current_page");
    assert_eq!(normalize_key("SomethingElse"), "SomethingElse");
}

/// **VALUE**: Verifies the reverse table used when writing PascalCase bodies.
///
/// **BUG THIS CATCHES**: Would catch the reverse lookup not being generated, or keyed wrong.
#[test]
fn given_snake_case_fields_when_denormalize_key_then_converts_to_backend_spelling() {
    assert_eq!(denormalize_key("title"), "Title");
    assert_eq!(denormalize_key("due_date"), "DueDate");
    assert_eq!(denormalize_key("image_url"), "ImageURL");
    assert_eq!(denormalize_key("page"), "page");
}

// ============================================
// ROUND-TRIP PROPERTY TESTS
// ============================================

/// **VALUE**: Every mapped field survives snake -> backend -> snake.
///
/// **WHY THIS MATTERS**: A request written in PascalCase and echoed back by the
/// backend must deserialize into the same model.
///
/// **BUG THIS CATCHES**: Would catch an asymmetric entry added to the table.
#[test]
fn given_all_mappings_when_round_trip_then_returns_original() {
    let snake_keys = [
        "id",
        "title",
        "description",
        "completed",
        "user_id",
        "due_date",
        "name",
        "notes",
        "content",
        "image_url",
        "link",
        "category_id",
        "category",
        "user",
        "username",
        "password",
        "token",
        "created_at",
        "updated_at",
        "deleted_at",
    ];
    assert_eq!(snake_keys.len(), MAPPING_COUNT, "Test list out of date");

    for key in snake_keys {
        let backend = denormalize_key(key);
        assert_ne!(backend, key, "{key} should have a backend spelling");
        assert_eq!(normalize_key(&backend), key, "{key} did not round-trip");
    }
}

// ============================================
// JSON TRANSFORMATION TESTS
// ============================================

/// **VALUE**: A PascalCase paginated envelope normalizes at every level.
///
/// **WHY THIS MATTERS**: Items are nested under `data`, and notes carry a nested
/// `Category` object. Missing recursion would leave those fields unreadable.
///
/// **BUG THIS CATCHES**: Would catch recursion that stops at the top-level object.
#[test]
fn given_nested_pascal_case_json_when_normalize_json_then_transforms_all_levels() {
    // GIVEN: A notes page as a PascalCase backend would send it
    let input = json!({
        "data": [{
            "ID": 4,
            "Title": "Groceries",
            "Content": "milk",
            "CategoryID": 2,
            "Category": { "ID": 2, "Name": "Home" }
        }],
        "pagination": { "total": 1, "per_page": 10, "current_page": 1, "last_page": 1 }
    });

    // WHEN: Normalizing
    let output = normalize_json(input);

    // THEN: Every known key is snake_case, pagination is untouched
    assert_eq!(
        output,
        json!({
            "data": [{
                "id": 4,
                "title": "Groceries",
                "content": "milk",
                "category_id": 2,
                "category": { "id": 2, "name": "Home" }
            }],
            "pagination": { "total": 1, "per_page": 10, "current_page": 1, "last_page": 1 }
        })
    );
}

/// **VALUE**: Primitive values are never altered, only object keys.
///
/// **BUG THIS CATCHES**: Would catch a normalizer that rewrites string values that
/// happen to match a key ("Title" as a title).
#[test]
fn given_values_matching_keys_when_normalize_json_then_values_preserved() {
    let input = json!({ "Title": "Title", "Completed": false, "DueDate": null });

    let output = normalize_json(input);

    assert_eq!(
        output,
        json!({ "title": "Title", "completed": false, "due_date": null })
    );
    assert_eq!(normalize_json(json!([])), json!([]));
    assert_eq!(normalize_json(json!(7)), json!(7));
}

/// **VALUE**: Request bodies convert to PascalCase for backends that expect it.
///
/// **BUG THIS CATCHES**: Would catch denormalization skipping arrays or nested objects.
#[test]
fn given_snake_case_body_when_denormalize_json_then_converts_to_backend_spelling() {
    let input = json!({
        "title": "Write report",
        "due_date": "2026-10-20T09:00:00Z",
        "notes": [{ "image_url": "https://x/y.png" }]
    });

    let output = denormalize_json(input);

    assert_eq!(
        output,
        json!({
            "Title": "Write report",
            "DueDate": "2026-10-20T09:00:00Z",
            "Notes": [{ "ImageURL": "https://x/y.png" }]
        })
    );
}
