//! Static record sets and config snippets shared across harnesses.

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

/// A small product catalogue in Algolia record shape: (objectID, name, brand).
pub const PRODUCTS: &[(&str, &str, &str)] = &[
    ("5477500", "Amazon - Fire TV Stick", "Amazon"),
    ("5588602", "Amazon - Echo Dot", "Amazon"),
    ("4397400", "Apple - iPad Air 2", "Apple"),
    ("5919830", "Apple - Watch Series 2", "Apple"),
    ("5120505", "Apple - AirPods", "Apple"),
    ("5578400", "Google - Chromecast", "Google"),
    ("5318200", "Roku - Streaming Stick", "Roku"),
    ("5110600", "Samsung - Galaxy S7", "Samsung"),
    ("5060300", "Sony - PlayStation 4 Pro", "Sony"),
    ("5446900", "Vizio - 50\" Class LED Smart TV", "Vizio"),
];

pub fn product_records() -> Vec<Value> {
    PRODUCTS
        .iter()
        .map(|(id, name, brand)| json!({ "objectID": id, "name": name, "brand": brand }))
        .collect()
}

/// Write the product catalogue to a temporary `.json` file.
pub fn product_records_file() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    serde_json::to_writer(&mut file, &product_records()).unwrap();
    file.flush().unwrap();
    file
}

/// Write `contents` to a temporary `.toml` config file.
pub fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Config pointing the Algolia source at `base_url`.
pub fn algolia_config_toml(base_url: &str) -> String {
    format!(
        r#"
[search]
source        = "algolia"
hits_per_page = 3

[algolia]
base_url   = "{base_url}"
app_id     = "TEST_APP"
api_key    = "test-key"
index_name = "products"
agent      = "typeahead-tests"
"#
    )
}
