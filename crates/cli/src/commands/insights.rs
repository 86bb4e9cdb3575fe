use std::path::Path;

use stockpilot_core::analytics::analyze_inventory;
use stockpilot_core::recommend::Item;

use super::{read_json_file, render_json, CommandResult};

pub fn run(items_path: &Path) -> CommandResult {
    let items: Vec<Item> = match read_json_file(items_path) {
        Ok(items) => items,
        Err(message) => return CommandResult::failure(message),
    };

    render_json(&analyze_inventory(&items, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reports_inventory_health_for_local_items() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(
            br#"[{"id":"I1","name":"USB Cable","currentStock":0,"reorderPoint":10,"costPrice":2.0}]"#,
        )
        .expect("write");

        let result = run(file.path());

        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("\"healthScore\""));
        assert!(result.output.contains("out_of_stock"));
    }
}
