use crate::{CategoryDraft, ModelError, NoteDraft, TaskDraft};

use chrono::{TimeZone, Utc};

fn validation_message(error: ModelError) -> String {
    match error {
        ModelError::Validation { message, .. } => message,
    }
}

/// **VALUE**: Verifies that a task without a due date is rejected.
///
/// **WHY THIS MATTERS**: Task create/update forms require title, description and due date.
///
/// **BUG THIS CATCHES**: Would catch if the due date becomes silently optional.
#[test]
fn given_missing_due_date_when_building_task_then_returns_validation_error() {
    let result = TaskDraft::builder()
        .with_title("Buy milk")
        .with_description("2 litres")
        .build();

    assert_eq!(validation_message(result.unwrap_err()), "Due date is required");
}

#[test]
fn given_blank_title_when_building_task_then_returns_validation_error() {
    let result = TaskDraft::builder()
        .with_title("  ")
        .with_description("2 litres")
        .with_due_date(Utc::now())
        .build();

    assert_eq!(validation_message(result.unwrap_err()), "Title cannot be empty");
}

/// **VALUE**: Verifies the task body uses snake_case keys and RFC 3339 dates.
///
/// **WHY THIS MATTERS**: This is the canonical schema; the backend parses `due_date` as an
/// ISO timestamp.
///
/// **BUG THIS CATCHES**: Would catch a serde rename or a date format change.
#[test]
fn given_complete_task_when_serialized_then_uses_canonical_schema() {
    let due = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
    let draft = TaskDraft::builder()
        .with_title("Buy milk")
        .with_description("2 litres")
        .with_due_date(due)
        .build()
        .unwrap();

    let body = serde_json::to_value(&draft).unwrap();

    assert_eq!(
        body,
        serde_json::json!({
            "title": "Buy milk",
            "description": "2 litres",
            "completed": false,
            "due_date": "2025-03-01T12:00:00Z"
        })
    );
}

/// **VALUE**: Verifies that notes require title and content but nothing else.
///
/// **WHY THIS MATTERS**: Notes without category, link or image are the common case.
///
/// **BUG THIS CATCHES**: Would catch if an optional field is accidentally made required.
#[test]
fn given_minimal_note_when_building_then_optional_fields_are_none() {
    let draft = NoteDraft::builder()
        .with_title("Groceries")
        .with_content("milk, eggs")
        .with_link("   ")
        .build()
        .unwrap();

    assert_eq!(draft.title, "Groceries");
    assert!(draft.image_url.is_none());
    assert!(draft.link.is_none(), "Blank link should be dropped");
    assert!(draft.category_id.is_none());
}

#[test]
fn given_missing_content_when_building_note_then_returns_validation_error() {
    let result = NoteDraft::builder().with_title("Groceries").build();

    assert_eq!(validation_message(result.unwrap_err()), "Content is required");
}

#[test]
fn given_blank_category_name_when_creating_then_returns_validation_error() {
    let result = CategoryDraft::new("\t");

    assert_eq!(
        validation_message(result.unwrap_err()),
        "Category name cannot be empty"
    );
}
