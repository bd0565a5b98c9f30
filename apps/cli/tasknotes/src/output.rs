//! Plain-text rendering of backend records.

use client_core::ListSnapshot;

use models::{Category, Note, Task};

const DUE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn task_line(task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    let mut line = format!("[{mark}] #{} {}", task.id, task.title);

    if let Some(due) = task.due_date {
        line.push_str(&format!(" (due {})", due.format(DUE_FORMAT)));
    }
    if !task.description.is_empty() {
        line.push_str(&format!("\n      {}", task.description));
    }
    line
}

pub fn note_line(note: &Note) -> String {
    let mark = if note.completed { 'x' } else { ' ' };
    let mut line = format!("[{mark}] #{} {}", note.id, note.title);

    if let Some(category) = &note.category {
        line.push_str(&format!(" [{}]", category.name));
    }
    line.push_str(&format!("\n      {}", note.content));
    if let Some(link) = &note.link {
        line.push_str(&format!("\n      link: {link}"));
    }
    if let Some(image_url) = &note.image_url {
        line.push_str(&format!("\n      image: {image_url}"));
    }
    line
}

pub fn category_line(category: &Category) -> String {
    let count = category.notes.len();
    let noun = if count == 1 { "note" } else { "notes" };
    format!("#{} {} ({count} {noun})", category.id, category.name)
}

/// `page 2/3, 20 shown, search "milk"`
pub fn list_footer<T>(snapshot: &ListSnapshot<T>) -> String {
    let mut footer = format!(
        "page {}/{}, {} shown",
        snapshot.page,
        snapshot.last_page,
        snapshot.items.len()
    );
    if !snapshot.search.is_empty() {
        footer.push_str(&format!(", search \"{}\"", snapshot.search));
    }
    if snapshot.has_more() {
        footer.push_str(", more available (--pages)");
    }
    footer
}

pub fn render_list<T>(snapshot: &ListSnapshot<T>, line: fn(&T) -> String) -> String {
    if snapshot.items.is_empty() {
        return String::from("(nothing found)");
    }

    let mut out: Vec<String> = snapshot.items.iter().map(line).collect();
    out.push(list_footer(snapshot));
    out.join("\n")
}
