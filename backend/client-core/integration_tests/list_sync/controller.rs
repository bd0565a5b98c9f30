use crate::helpers::{logged_in_client, tasks_page};

use client_core::list_sync::{
    ListController, ListOptions, ListPhase, LoadOutcome, Notice, Notifier, PageFetcher,
};

use models::Task;

use std::sync::{Arc, Mutex};

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().expect("notices lock").push(notice);
    }
}

async fn mount_page(server: &MockServer, search: &str, page: u32, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/tasks"))
        .and(query_param("search", search))
        .and(query_param("page", page.to_string().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ============================================================================
// ListController driven through the real HTTP client
// ============================================================================

/// **VALUE**: Scrolling, searching and deleting work end to end over HTTP.
///
/// **WHY THIS MATTERS**: This is the task screen's whole lifecycle: open, scroll
/// to the bottom twice, search, delete an item.
///
/// **BUG THIS CATCHES**: Would catch a mismatch between the controller's
/// parameters and what the HTTP layer actually sends.
#[tokio::test]
async fn given_task_backend_when_driving_list_lifecycle_then_items_track_backend() {
    // GIVEN: Three pages of tasks, one search result page, and a delete endpoint
    let server = MockServer::start().await;
    mount_page(&server, "", 1, tasks_page(1, 10, 1, 3)).await;
    mount_page(&server, "", 2, tasks_page(11, 10, 2, 3)).await;
    mount_page(&server, "", 3, tasks_page(21, 10, 3, 3)).await;
    mount_page(&server, "report", 1, tasks_page(100, 2, 1, 1)).await;
    Mock::given(method("DELETE"))
        .and(path("/tasks/100"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let notifier = Arc::new(RecordingNotifier::default());
    let list: ListController<Task> = ListController::new(
        Arc::new(client.task_pages()) as Arc<dyn PageFetcher<Task>>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        ListOptions::new("tasks"),
    );

    // WHEN: The screen opens and the user scrolls to the end twice
    assert_eq!(list.refresh().await.expect("open"), LoadOutcome::Replaced { count: 10 });
    assert_eq!(list.on_scroll(9).await.expect("scroll"), LoadOutcome::Appended { count: 10 });
    assert_eq!(list.on_scroll(19).await.expect("scroll"), LoadOutcome::Appended { count: 10 });
    assert_eq!(list.on_scroll(29).await.expect("scroll"), LoadOutcome::EndOfList);

    // THEN: All thirty tasks are shown in order
    let ids: Vec<u64> = list.items().await.iter().map(|t| t.id).collect();
    assert_eq!(ids, (1..=30).collect::<Vec<_>>());

    // WHEN: Searching
    list.search("report").await.expect("search");
    let snapshot = list.snapshot().await;
    assert_eq!(snapshot.items.len(), 2);
    assert_eq!(snapshot.page, 1);

    // WHEN: Deleting the first match; the backend now returns the same page
    let deleted = client.delete_task(100);
    list.delete_and_resync(deleted).await.expect("delete");

    // THEN: Reloaded with the search term kept, no alerts raised
    assert_eq!(list.snapshot().await.search, "report");
    assert_eq!(list.phase().await, ListPhase::Loaded);
    assert!(notifier.notices.lock().expect("notices lock").is_empty());
}

/// **VALUE**: A server error during load-more alerts and keeps what is shown.
#[tokio::test]
async fn given_failing_next_page_when_scrolling_then_alert_and_items_kept() {
    let server = MockServer::start().await;
    mount_page(&server, "", 1, tasks_page(1, 10, 1, 2)).await;
    Mock::given(path("/tasks"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = logged_in_client(&server);
    let notifier = Arc::new(RecordingNotifier::default());
    let list: ListController<Task> = ListController::new(
        Arc::new(client.task_pages()) as Arc<dyn PageFetcher<Task>>,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        ListOptions::new("tasks"),
    );
    list.refresh().await.expect("open");

    let error = list.on_scroll(9).await.expect_err("page 2 fails");

    assert_eq!(error.api_error().status_code().map(|s| s.0), Some(500));
    assert_eq!(list.items().await.len(), 10);
    assert_eq!(list.snapshot().await.page, 1);
    assert_eq!(
        notifier.notices.lock().expect("notices lock").clone(),
        vec![Notice::error("Failed to load tasks.")]
    );
}
