//! Category display formatting

use crate::models::Category;

/// Format categories as `ID: .., Name: ..` lines under a heading
pub fn format_category_list(heading: &str, categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{}\n\n", heading));
    for category in categories {
        output.push_str(&format!("ID: {}, Name: {}\n", category.id, category.name));
    }
    output
}
