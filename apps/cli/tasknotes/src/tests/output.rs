// Unit tests for text rendering

use crate::output::{category_line, list_footer, note_line, render_list, task_line};

use client_core::ListSnapshot;
use client_core::list_sync::ListPhase;

use models::{Category, Note, NoteCategory, Task};

use chrono::{TimeZone, Utc};

fn task(id: u64, completed: bool) -> Task {
    Task {
        id,
        title: format!("Task {id}"),
        description: String::new(),
        completed,
        user_id: None,
        due_date: Utc.with_ymd_and_hms(2026, 10, 20, 9, 0, 0).single(),
    }
}

fn snapshot(items: Vec<Task>, page: u32, last_page: u32, search: &str) -> ListSnapshot<Task> {
    ListSnapshot {
        items,
        page,
        last_page,
        search: search.to_string(),
        phase: ListPhase::Loaded,
        in_flight: false,
    }
}

/// **VALUE**: Task lines show completion, id, title and due date.
#[test]
fn given_task_when_rendered_then_one_line_summary() {
    assert_eq!(
        task_line(&task(5, true)),
        "[x] #5 Task 5 (due 2026-10-20 09:00 UTC)"
    );
    assert!(task_line(&task(6, false)).starts_with("[ ] #6"));
}

/// **VALUE**: Notes show their category and optional link.
#[test]
fn given_note_with_category_and_link_when_rendered_then_both_shown() {
    let note = Note {
        id: 3,
        title: String::from("Groceries"),
        content: String::from("milk"),
        image_url: None,
        link: Some(String::from("https://shop.example")),
        category_id: Some(2),
        category: Some(NoteCategory {
            id: 2,
            name: String::from("Home"),
        }),
        user_id: None,
        due_date: None,
        completed: false,
    };

    let line = note_line(&note);

    assert!(line.starts_with("[ ] #3 Groceries [Home]"));
    assert!(line.contains("link: https://shop.example"));
}

#[test]
fn given_category_when_rendered_then_note_count_pluralized() {
    let empty = Category {
        id: 1,
        name: String::from("Work"),
        notes: Vec::new(),
    };
    assert_eq!(category_line(&empty), "#1 Work (0 notes)");
}

/// **VALUE**: The footer tells the user when more pages exist.
///
/// **BUG THIS CATCHES**: Would catch the hint showing on the last page.
#[test]
fn given_partial_and_complete_lists_when_footer_rendered_then_more_hint_only_when_needed() {
    let partial = snapshot(vec![task(1, false)], 1, 3, "milk");
    let complete = snapshot(vec![task(1, false)], 3, 3, "");

    assert_eq!(
        list_footer(&partial),
        "page 1/3, 1 shown, search \"milk\", more available (--pages)"
    );
    assert_eq!(list_footer(&complete), "page 3/3, 1 shown");
    assert_eq!(
        render_list(&snapshot(Vec::new(), 1, 1, ""), task_line),
        "(nothing found)"
    );
}
