use crate::cli::{ListArgs, TaskFields, TasksCommand};
use crate::commands::lists::load_pages;
use crate::context::AppContext;
use crate::error::TasknotesError;
use crate::output::{render_list, task_line};

use models::TaskDraft;

pub async fn run(context: &AppContext, command: TasksCommand) -> Result<(), TasknotesError> {
    match command {
        TasksCommand::List(args) => list(context, &args).await,
        TasksCommand::Add(fields) => {
            let task = context.client.create_task(&draft(fields)?).await?;
            println!("Created {}", task_line(&task));
            Ok(())
        }
        TasksCommand::Update { id, fields } => {
            let task = context.client.update_task(id, &draft(fields)?).await?;
            println!("Updated {}", task_line(&task));
            Ok(())
        }
        TasksCommand::Delete { id } => {
            let list = context.task_list();
            list.delete_and_resync(context.client.delete_task(id)).await?;
            println!("Deleted task #{id}");
            println!("{}", render_list(&list.snapshot().await, task_line));
            list.unmount().await;
            Ok(())
        }
    }
}

async fn list(context: &AppContext, args: &ListArgs) -> Result<(), TasknotesError> {
    let list = context.task_list();
    let snapshot = load_pages(&list, args).await?;
    println!("{}", render_list(&snapshot, task_line));
    Ok(())
}

pub fn draft(fields: TaskFields) -> Result<TaskDraft, TasknotesError> {
    Ok(TaskDraft::builder()
        .with_title(fields.title)
        .with_description(fields.description)
        .with_completed(fields.completed)
        .with_due_date(fields.due)
        .build()?)
}
