use stockpilot_core::discovery;

use super::{render_json, CommandResult};

pub fn run(product: &str, quantity: u32) -> CommandResult {
    if product.trim().is_empty() {
        return CommandResult::failure("product name must not be empty");
    }

    render_json(&discovery::search(product, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_prints_marketplace_results() {
        let result = run("USB Cable", 50);

        assert_eq!(result.exit_code, 0);
        assert!(result.output.contains("\"totalResults\""));
        assert!(result.output.contains("Alibaba"));
    }

    #[test]
    fn blank_product_name_is_rejected() {
        assert_eq!(run("   ", 1).exit_code, 1);
    }
}
