use crate::cli::{LoginArgs, RegisterArgs};
use crate::context::AppContext;
use crate::error::TasknotesError;

use models::{Credentials, Registration};

pub async fn login(context: &AppContext, args: LoginArgs) -> Result<(), TasknotesError> {
    let credentials = Credentials::new(args.username, args.password)?;
    context.client.login(&credentials).await?;
    println!("Logged in as {}", credentials.username);
    Ok(())
}

pub async fn register(context: &AppContext, args: RegisterArgs) -> Result<(), TasknotesError> {
    let registration = Registration::new(args.username, args.password, args.confirm_password)?;
    context.client.register(&registration).await?;
    println!("Registered {}", registration.credentials().username);
    Ok(())
}

pub async fn logout(context: &AppContext) -> Result<(), TasknotesError> {
    context.client.logout().await?;
    println!("Logged out");
    Ok(())
}

/// Reports whether a token is stored; the backend is not contacted.
pub async fn whoami(context: &AppContext) -> Result<(), TasknotesError> {
    let token = context.client.session().token().await?;
    match token {
        Some(token) => println!(
            "Logged in ({} char token) against {}",
            token.len(),
            context.client.base_url()
        ),
        None => println!("Not logged in"),
    }
    Ok(())
}
