//! Text and JSON rendering shared by the commands

use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::catalog::Example;
use crate::Result;

/// Hint printed when search or gallery filters match nothing
pub const NO_MATCHES: &str =
    "No examples found matching your criteria. Try adjusting your search or filters.";

/// Hint printed when a category has no examples
pub const NO_CATEGORY_MATCHES: &str = "No examples match your current filters.";

/// Hint printed when the quiz yields nothing
pub const NO_RECOMMENDATIONS: &str = "No matching examples found. Try different preferences.";

const DESCRIPTION_WIDTH: usize = 50;

/// Table row for example listings
#[derive(Tabled)]
struct ExampleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Categories")]
    categories: String,
    #[tabled(rename = "Difficulty")]
    difficulty: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExampleRow {
    fn from_example(example: &Example) -> Self {
        let title = if example.is_new {
            format!("{} (new)", example.title)
        } else {
            example.title.clone()
        };

        Self {
            id: example.id.clone(),
            title,
            categories: example.categories_display(),
            difficulty: example.difficulty.label().to_string(),
            time: example.estimated_time.clone().unwrap_or_default(),
            description: truncate(&example.description, DESCRIPTION_WIDTH),
        }
    }
}

/// Shorten `text` to at most `width` characters, ending in "..."
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

/// Render examples as a rounded table
pub fn examples_table(examples: &[&Example]) -> String {
    let rows: Vec<ExampleRow> = examples.iter().map(|e| ExampleRow::from_example(e)).collect();

    Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

/// "N example(s) found"
pub fn count_line(count: usize) -> String {
    format!("{count} example(s) found")
}

/// Multi-line detail view of one example
pub fn example_details(example: &Example) -> String {
    let mut lines = vec![
        format!("{} ({})", example.title, example.id),
        format!("Difficulty: {}", example.difficulty.label()),
        format!("Categories: {}", example.categories_display()),
    ];

    if let Some(time) = &example.estimated_time {
        lines.push(format!("Time:       {time}"));
    }
    if !example.tags.is_empty() {
        lines.push(format!("Tags:       {}", example.tags.join(", ")));
    }
    if example.is_new {
        lines.push("New example".to_string());
    }

    lines.push(String::new());
    lines.push(example.description.clone());
    lines.push(String::new());
    lines.extend(example.long_description.lines().map(|l| format!("  {l}")));

    if !example.user_stories.is_empty() {
        lines.push(String::new());
        lines.push("User stories:".to_string());
        lines.extend(example.user_stories.iter().map(|s| format!("  - {s}")));
    }

    lines.push(String::new());
    lines.push(format!("Link: {}", example.url));
    lines.join("\n")
}

/// Pretty JSON for `value`
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }

    #[test]
    fn test_table_contains_rows() {
        let catalog = Catalog::builtin();
        let items = vec![catalog.get("todo").unwrap(), catalog.get("vesting").unwrap()];
        let table = examples_table(&items);
        assert!(table.contains("To-Do List"));
        assert!(table.contains("(new)"));
        assert!(table.contains("Difficulty"));
    }

    #[test]
    fn test_details() {
        let example = Catalog::builtin().get("todo").unwrap();
        let details = example_details(example);
        assert!(details.starts_with("To-Do List (todo)"));
        assert!(details.contains("Categories: Basics"));
        assert!(details.contains("Link: https://"));
    }

    #[test]
    fn test_count_line() {
        assert_eq!(count_line(1), "1 example(s) found");
    }
}
