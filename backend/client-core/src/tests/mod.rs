mod field_normalizer;
#[cfg(not(target_arch = "wasm32"))]
mod session;
