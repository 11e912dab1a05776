use crate::domain::model::Entry;

/// 以兩位小數輸出購物清單與總額
pub fn render(name: &str, entries: &[Entry], total: f64) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!("{}:", name));
    for entry in entries {
        lines.push(format!("  - {}: ${:.2}", entry.label, entry.amount));
    }
    lines.push(format!("Total: ${:.2}", total));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_receipt() {
        let entries = vec![Entry::new("Apple", 1.5), Entry::new("Orange", 1.25)];
        let text = render("Shopping Cart", &entries, 2.75);
        assert_eq!(
            text,
            "Shopping Cart:\n  - Apple: $1.50\n  - Orange: $1.25\nTotal: $2.75"
        );
    }

    #[test]
    fn test_render_empty_receipt() {
        assert_eq!(render("Empty", &[], 0.0), "Empty:\nTotal: $0.00");
    }
}
