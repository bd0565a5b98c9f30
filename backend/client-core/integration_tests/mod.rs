#![cfg(not(target_arch = "wasm32"))]

mod api_client;
mod helpers;
mod list_sync;
