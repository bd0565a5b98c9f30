use crate::cli::{ListArgs, NoteFields, NotesCommand};
use crate::commands::lists::load_pages;
use crate::context::AppContext;
use crate::error::TasknotesError;
use crate::output::{note_line, render_list};

use models::NoteDraft;

pub async fn run(context: &AppContext, command: NotesCommand) -> Result<(), TasknotesError> {
    match command {
        NotesCommand::List(args) => list(context, &args).await,
        NotesCommand::Add(fields) => {
            let note = context.client.create_note(&draft(fields)?).await?;
            println!("Created {}", note_line(&note));
            Ok(())
        }
        NotesCommand::Update { id, fields } => {
            let note = context.client.update_note(id, &draft(fields)?).await?;
            println!("Updated {}", note_line(&note));
            Ok(())
        }
        NotesCommand::Delete { id } => {
            let list = context.note_list();
            list.delete_and_resync(context.client.delete_note(id)).await?;
            println!("Deleted note #{id}");
            println!("{}", render_list(&list.snapshot().await, note_line));
            list.unmount().await;
            Ok(())
        }
    }
}

async fn list(context: &AppContext, args: &ListArgs) -> Result<(), TasknotesError> {
    let list = context.note_list();
    let snapshot = load_pages(&list, args).await?;
    println!("{}", render_list(&snapshot, note_line));
    Ok(())
}

pub fn draft(fields: NoteFields) -> Result<NoteDraft, TasknotesError> {
    let mut builder = NoteDraft::builder()
        .with_title(fields.title)
        .with_content(fields.content)
        .with_completed(fields.completed);

    if let Some(image_url) = fields.image_url {
        builder = builder.with_image_url(image_url);
    }
    if let Some(link) = fields.link {
        builder = builder.with_link(link);
    }
    if let Some(category_id) = fields.category {
        builder = builder.with_category_id(category_id);
    }
    if let Some(due) = fields.due {
        builder = builder.with_due_date(due);
    }

    Ok(builder.build()?)
}
