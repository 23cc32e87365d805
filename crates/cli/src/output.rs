//! Human-readable rendering of RPC responses.

use anyhow::Result;
use serde::Serialize;

const RULE: &str = "---------------------------------";

/// Renders a list of records, one banner per element, followed by a count.
///
/// The count line is printed even for an empty list, so a block without
/// deploys still produces `count: 0`.
pub fn render_elements<T: Serialize>(items: &[T], element_name: &str) -> Result<String> {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        out.push_str(&format!("----------- {} {} -----------\n", element_name, index));
        out.push_str(&serde_json::to_string_pretty(item)?);
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
    }
    out.push_str(&format!("count: {}", items.len()));
    Ok(out)
}

/// Renders a single record as pretty JSON.
pub fn render_single<T: Serialize>(item: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(item)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_banners_in_order_with_trailing_count() {
        let items = vec![json!({"hash": "aa"}), json!({"hash": "bb"})];
        let rendered = render_elements(&items, "deploy").unwrap();

        let first = rendered.find("----------- deploy 0 -----------").unwrap();
        let second = rendered.find("----------- deploy 1 -----------").unwrap();
        assert!(first < second);
        assert!(rendered.contains("\"hash\": \"aa\""));
        assert!(rendered.ends_with("count: 2"));
    }

    #[test]
    fn empty_list_renders_count_zero() {
        let items: Vec<serde_json::Value> = Vec::new();
        let rendered = render_elements(&items, "deploy").unwrap();
        assert_eq!(rendered, "count: 0");
    }

    #[test]
    fn single_record_is_pretty_printed() {
        let item = json!({"hash": "cc", "header": {"height": 4}});
        let rendered = render_single(&item).unwrap();
        assert!(rendered.contains("\"height\": 4"));
        assert!(rendered.starts_with('{'));
    }
}
