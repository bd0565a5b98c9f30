pub mod auth;
pub mod categories;
pub mod lists;
pub mod notes;
pub mod tasks;

use crate::cli::Command;
use crate::context::AppContext;
use crate::error::TasknotesError;

pub async fn run(command: Command, context: &AppContext) -> Result<(), TasknotesError> {
    match command {
        Command::Login(args) => auth::login(context, args).await,
        Command::Register(args) => auth::register(context, args).await,
        Command::Logout => auth::logout(context).await,
        Command::Whoami => auth::whoami(context).await,
        Command::Tasks(command) => tasks::run(context, command).await,
        Command::Notes(command) => notes::run(context, command).await,
        Command::Categories(command) => categories::run(context, command).await,
    }
}
