use std::path::Path;
use std::sync::Arc;

use stockpilot_core::recommend::{AlwaysInStock, Item, Vendor};
use stockpilot_core::RecommendationEngine;

use super::{read_json_file, render_json, CommandResult};

/// Plan recommendations from local JSON files and print them as JSON.
///
/// Stock availability uses the deterministic signal so repeated runs over
/// the same files print identical output.
pub fn run(items_path: &Path, vendors_path: &Path) -> CommandResult {
    let items: Vec<Item> = match read_json_file(items_path) {
        Ok(items) => items,
        Err(message) => return CommandResult::failure(message),
    };
    let vendors: Vec<Vendor> = match read_json_file(vendors_path) {
        Ok(vendors) => vendors,
        Err(message) => return CommandResult::failure(message),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => return CommandResult::failure(format!("runtime setup failed: {error}")),
    };

    let engine = RecommendationEngine::new().with_stock_signal(Arc::new(AlwaysInStock));
    match runtime.block_on(engine.plan_recommendations(&items, &vendors)) {
        Ok(recommendations) => render_json(&recommendations),
        Err(error) => CommandResult::failure(format!("recommendation failed: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn plans_recommendations_from_json_files() {
        let items = write_temp(
            r#"[{"id":"I1","name":"USB Cable","currentStock":2,"reorderPoint":10,"averageDailySales":1.0}]"#,
        );
        let vendors = write_temp(
            r#"[{"id":"V1","name":"CablePro","rating":4.5,"products":[{"itemName":"USB Cable","price":5.0}]}]"#,
        );

        let result = run(items.path(), vendors.path());

        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("\"recommendedQuantity\": 30"));
        assert!(result.output.contains("CablePro"));
    }

    #[test]
    fn missing_input_file_fails_with_its_path() {
        let vendors = write_temp("[]");

        let result = run(Path::new("/nonexistent/items.json"), vendors.path());

        assert_eq!(result.exit_code, 1);
        assert!(result.output.contains("/nonexistent/items.json"));
    }

    #[test]
    fn malformed_vendor_json_fails_cleanly() {
        let items = write_temp("[]");
        let vendors = write_temp("{not json");

        let result = run(items.path(), vendors.path());

        assert_eq!(result.exit_code, 1);
        assert!(result.output.contains("could not parse"));
    }
}
