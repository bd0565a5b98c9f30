mod auth;
mod requests;
mod resources;
