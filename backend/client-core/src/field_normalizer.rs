//! Backend field name normalization.
//!
//! Generated by `build.rs` from `api_fields.toml`.

include!(concat!(env!("OUT_DIR"), "/field_normalizer.rs"));
