use crate::cli::CategoriesCommand;
use crate::context::AppContext;
use crate::error::TasknotesError;
use crate::output::category_line;

use models::CategoryDraft;

pub async fn run(context: &AppContext, command: CategoriesCommand) -> Result<(), TasknotesError> {
    match command {
        CategoriesCommand::List => {
            let categories = context.client.list_categories().await?;
            if categories.is_empty() {
                println!("(no categories)");
            }
            for category in &categories {
                println!("{}", category_line(category));
            }
            Ok(())
        }
        CategoriesCommand::Add { name } => {
            let category = context
                .client
                .create_category(&CategoryDraft::new(name)?)
                .await?;
            println!("Created {}", category_line(&category));
            Ok(())
        }
    }
}
