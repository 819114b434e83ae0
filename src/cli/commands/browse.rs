use serde::Serialize;

use super::{CommandHandler, FinderContext};
use crate::catalog::Example;
use crate::cli::output::{self, NO_CATEGORY_MATCHES};
use crate::session::{CategoryBrowser, CategorySelection};
use crate::{FinderError, Result};

#[derive(Serialize)]
struct BrowseOutput<'a> {
    category: &'static str,
    examples: Vec<&'a Example>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<&'a Example>,
}

/// Category chooser
pub struct BrowseCommand<'a> {
    context: &'a FinderContext,
    browser: CategoryBrowser,
    json: bool,
}

impl<'a> BrowseCommand<'a> {
    pub fn new(
        context: &'a FinderContext,
        selection: CategorySelection,
        select: Option<String>,
        json: bool,
    ) -> Self {
        let mut browser = CategoryBrowser::new();
        browser.set_selection(selection);
        if let Some(id) = select {
            browser.select(id);
        }
        Self {
            context,
            browser,
            json,
        }
    }

    /// Render the listing, plus details for a selected example
    pub fn render(&self) -> Result<String> {
        let catalog = self.context.catalog();
        let examples = self.browser.visible(catalog);
        let selected = match self.browser.selected_id() {
            Some(id) => Some(
                self.browser
                    .selected(catalog)
                    .ok_or_else(|| FinderError::ExampleNotFound(id.to_string()))?,
            ),
            None => None,
        };

        if self.context.wants_json(self.json) {
            return output::to_json(&BrowseOutput {
                category: self.selection_id(),
                examples,
                selected,
            });
        }

        let mut text = format!("{}\n\n", self.browser.selection().label());
        if examples.is_empty() {
            text.push_str(NO_CATEGORY_MATCHES);
        } else {
            text.push_str(&output::examples_table(&examples));
        }
        if let Some(example) = selected {
            text.push_str("\n\n");
            text.push_str(&output::example_details(example));
        }
        Ok(text)
    }

    fn selection_id(&self) -> &'static str {
        match self.browser.selection() {
            CategorySelection::All => "all",
            CategorySelection::Category(category) => category.as_str(),
        }
    }
}

impl CommandHandler for BrowseCommand<'_> {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "browse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_browse_category() {
        let context = FinderContext::builtin();
        let command = BrowseCommand::new(
            &context,
            CategorySelection::Category(Category::Auth),
            None,
            false,
        );
        let text = command.render().unwrap();
        assert!(text.starts_with("Authentication"));
        assert!(text.contains("keyless"));
        assert!(!text.contains("todo"));
    }

    #[test]
    fn test_browse_with_selection_json() {
        let context = FinderContext::builtin();
        let command = BrowseCommand::new(
            &context,
            CategorySelection::All,
            Some("dex".to_string()),
            true,
        );
        let parsed: serde_json::Value = serde_json::from_str(&command.render().unwrap()).unwrap();
        assert_eq!(parsed["category"], "all");
        assert_eq!(parsed["examples"].as_array().unwrap().len(), 16);
        assert_eq!(parsed["selected"]["id"], "dex");
    }

    #[test]
    fn test_browse_unknown_selection_fails() {
        let context = FinderContext::builtin();
        let command =
            BrowseCommand::new(&context, CategorySelection::All, Some("nope".to_string()), false);
        assert!(matches!(command.render(), Err(FinderError::ExampleNotFound(_))));
    }
}
