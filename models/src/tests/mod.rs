mod auth;
mod drafts;
mod pagination;
