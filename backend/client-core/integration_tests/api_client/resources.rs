use crate::helpers::{logged_in_client, tasks_page};

use client_core::list_sync::PageFetcher;

use models::{CategoryDraft, ListParams, NoteDraft, TaskDraft};

use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ----------------------------------------------------------------------------
// Resource helpers
// ----------------------------------------------------------------------------

/// **VALUE**: Task CRUD hits the expected paths with the expected bodies.
///
/// **BUG THIS CATCHES**: Would catch an id formatted into the wrong path segment,
/// or the due date serialized in a format the backend cannot parse.
#[tokio::test]
async fn given_task_draft_when_creating_updating_deleting_then_expected_requests() {
    let server = MockServer::start().await;
    let due = Utc.with_ymd_and_hms(2026, 10, 20, 9, 0, 0).single().expect("valid date");
    let created = json!({
        "id": 5, "title": "Write report", "description": "Quarterly numbers", "completed": false,
        "user_id": 1, "due_date": "2026-10-20T09:00:00Z"
    });

    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_partial_json(json!({
            "title": "Write report",
            "description": "Quarterly numbers",
            "due_date": "2026-10-20T09:00:00Z"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(created.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/tasks/5"))
        .and(body_partial_json(json!({
            "description": "Quarterly numbers",
            "completed": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(created))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = logged_in_client(&server);

    let draft = TaskDraft::builder()
        .with_title("Write report")
        .with_description("Quarterly numbers")
        .with_due_date(due)
        .build()
        .expect("valid draft");
    let task = client.create_task(&draft).await.expect("create");
    assert_eq!(task.id, 5);
    assert_eq!(task.due_date, Some(due));
    assert_eq!(task.description, "Quarterly numbers");

    let done = TaskDraft::builder()
        .with_title("Write report")
        .with_description("Quarterly numbers")
        .with_due_date(due)
        .with_completed(true)
        .build()
        .expect("valid draft");
    client.update_task(task.id, &done).await.expect("update");
    client.delete_task(task.id).await.expect("delete");
}

/// **VALUE**: Notes round-trip their optional fields and nested category.
#[tokio::test]
async fn given_notes_endpoint_when_listing_and_creating_then_optional_fields_handled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1, "title": "Groceries", "content": "milk, eggs",
                "category_id": 2, "category": { "id": 2, "name": "Home" },
                "completed": false
            }, {
                "id": 2, "title": "Link dump", "content": "-", "link": "https://example.com"
            }],
            "pagination": { "total": 2, "per_page": 10, "current_page": 1, "last_page": 1 }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .and(body_partial_json(json!({ "title": "Idea", "content": "ship it" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3, "title": "Idea", "content": "ship it"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = logged_in_client(&server);

    let page = client.list_notes(&ListParams::default()).await.expect("list");
    assert_eq!(page.data.len(), 2);
    assert_eq!(
        page.data[0].category.as_ref().map(|c| c.name.as_str()),
        Some("Home")
    );
    assert_eq!(page.data[1].link.as_deref(), Some("https://example.com"));
    assert!(page.data[1].category.is_none());

    let draft = NoteDraft::builder()
        .with_title("Idea")
        .with_content("ship it")
        .with_link("   ")
        .build()
        .expect("valid draft");
    let note = client.create_note(&draft).await.expect("create");
    assert_eq!(note.id, 3);

    let requests = server.received_requests().await.expect("recording enabled");
    let body: serde_json::Value =
        serde_json::from_slice(&requests[1].body).expect("request body is JSON");
    assert_eq!(body["link"], serde_json::Value::Null, "blank link should be sent as null");
}

/// **VALUE**: Categories come back as a bare array with nested notes.
#[tokio::test]
async fn given_categories_endpoint_when_listing_and_creating_then_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "Work", "notes": [{ "id": 4, "title": "Standup", "content": "9am" }] },
            { "id": 2, "name": "Home" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/categories"))
        .and(body_partial_json(json!({ "name": "Errands" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 3, "name": "Errands" })))
        .expect(1)
        .mount(&server)
        .await;
    let client = logged_in_client(&server);

    let categories = client.list_categories().await.expect("list");
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].notes.len(), 1);
    assert!(categories[1].notes.is_empty());

    let created = client
        .create_category(&CategoryDraft::new("Errands").expect("valid draft"))
        .await
        .expect("create");
    assert_eq!(created.name, "Errands");
}

/// **VALUE**: `task_pages` is a page source bound to `/tasks`.
#[tokio::test]
async fn given_task_pages_when_fetching_then_tasks_endpoint_queried() {
    let server = MockServer::start().await;
    Mock::given(path("/tasks"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tasks_page(21, 5, 3, 3)))
        .expect(1)
        .mount(&server)
        .await;
    let client = logged_in_client(&server);
    let pages = client.task_pages();

    let page = pages
        .fetch_page(&ListParams::default().with_page(3))
        .await
        .expect("page 3");

    assert_eq!(pages.endpoint(), "tasks");
    assert_eq!(page.data.len(), 5);
    assert!(!page.pagination.has_next());
}
