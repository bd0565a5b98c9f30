use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::PathBuf;

const API_FIELDS_TOML: &str = "api_fields.toml";
const API_FIELDS_GENERATED_FILE: &str = "field_normalizer.rs";

/// `[mappings]` table: backend spelling -> canonical snake_case.
#[derive(serde::Deserialize)]
struct FieldTable {
    mappings: BTreeMap<String, String>,
}

fn main() {
    println!("cargo:rerun-if-changed={API_FIELDS_TOML}");

    let source = fs::read_to_string(API_FIELDS_TOML)
        .unwrap_or_else(|e| panic!("Failed to read {API_FIELDS_TOML}: {e}"));
    let table: FieldTable = toml::from_str(&source)
        .unwrap_or_else(|e| panic!("Failed to parse {API_FIELDS_TOML}: {e}"));

    check_table(&table.mappings);

    let out_dir = env::var("OUT_DIR").unwrap_or_else(|e| panic!("OUT_DIR not set: {e}"));
    let dest = PathBuf::from(out_dir).join(API_FIELDS_GENERATED_FILE);
    fs::write(&dest, render(&table.mappings))
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", dest.display()));
}

/// Reject tables that cannot round-trip.
fn check_table(mappings: &BTreeMap<String, String>) {
    let mut seen = BTreeSet::new();

    for (backend, snake) in mappings {
        if backend == snake {
            panic!("Mapping '{backend}' maps to itself; remove it");
        }
        if snake.chars().any(|c| c.is_ascii_uppercase()) {
            panic!("Canonical key '{snake}' must be snake_case");
        }
        // would be rewritten twice on a normalize pass
        if mappings.contains_key(snake) {
            panic!("Canonical key '{snake}' is also listed as a backend key");
        }
        if !seen.insert(snake) {
            panic!("Canonical key '{snake}' is the target of more than one mapping");
        }
    }
}

/// One `match` per direction, plus the recursive JSON walk both share.
fn render(mappings: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    out.push_str("// Generated by build.rs from api_fields.toml. Do not edit.\n\n");
    out.push_str("use serde_json::Value;\n");
    out.push_str("use std::borrow::Cow;\n\n");

    let _ = writeln!(out, "/// Number of entries in `api_fields.toml`.");
    let _ = writeln!(out, "pub const MAPPING_COUNT: usize = {};\n", mappings.len());

    let forward: Vec<(&str, &str)> = mappings
        .iter()
        .map(|(backend, snake)| (backend.as_str(), snake.as_str()))
        .collect();
    let mut reverse: Vec<(&str, &str)> = forward.iter().map(|&(b, s)| (s, b)).collect();
    reverse.sort_unstable();

    render_lookup(&mut out, "to_snake", &forward);
    render_lookup(&mut out, "to_backend", &reverse);

    out.push_str(
        r#"/// Backend field name to snake_case. Unknown keys are returned as-is.
pub fn normalize_key(key: &str) -> Cow<'_, str> {
    Cow::Borrowed(to_snake(key).unwrap_or(key))
}

/// snake_case field name to the backend spelling. Unknown keys are returned as-is.
pub fn denormalize_key(key: &str) -> Cow<'_, str> {
    Cow::Borrowed(to_backend(key).unwrap_or(key))
}

/// Rename every object key in a response body to snake_case.
pub fn normalize_json(value: Value) -> Value {
    rename_keys(value, to_snake)
}

/// Rename every object key in a request body to the backend spelling.
pub fn denormalize_json(value: Value) -> Value {
    rename_keys(value, to_backend)
}

fn rename_keys(value: Value, lookup: fn(&str) -> Option<&'static str>) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, inner)| {
                    let key = match lookup(&key) {
                        Some(renamed) => renamed.to_owned(),
                        None => key,
                    };
                    (key, rename_keys(inner, lookup))
                })
                .collect(),
        ),
        Value::Array(items) => {
            Value::Array(items.into_iter().map(|item| rename_keys(item, lookup)).collect())
        }
        other => other,
    }
}
"#,
    );

    out
}

fn render_lookup(out: &mut String, name: &str, pairs: &[(&str, &str)]) {
    let _ = writeln!(out, "fn {name}(key: &str) -> Option<&'static str> {{");
    out.push_str("    match key {\n");
    for (from, to) in pairs {
        let _ = writeln!(out, "        {from:?} => Some({to:?}),");
    }
    out.push_str("        _ => None,\n    }\n}\n\n");
}
