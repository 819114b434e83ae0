use super::{CommandHandler, FinderContext};
use crate::cli::output;
use crate::{FinderError, Result};

/// Detail view of a single example
pub struct ShowCommand<'a> {
    context: &'a FinderContext,
    id: String,
    json: bool,
}

impl<'a> ShowCommand<'a> {
    pub fn new(context: &'a FinderContext, id: String, json: bool) -> Self {
        Self { context, id, json }
    }

    pub fn render(&self) -> Result<String> {
        let example = self
            .context
            .catalog()
            .get(&self.id)
            .ok_or_else(|| FinderError::ExampleNotFound(self.id.clone()))?;

        if self.context.wants_json(self.json) {
            output::to_json(example)
        } else {
            Ok(output::example_details(example))
        }
    }
}

impl CommandHandler for ShowCommand<'_> {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "show"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_known_example() {
        let context = FinderContext::builtin();
        let text = ShowCommand::new(&context, "keyless".to_string(), false)
            .render()
            .unwrap();
        assert!(text.contains("Keyless"));
        assert!(text.contains("User stories:"));
    }

    #[test]
    fn test_show_unknown_example() {
        let context = FinderContext::builtin();
        let err = ShowCommand::new(&context, "missing".to_string(), false)
            .render()
            .unwrap_err();
        assert_eq!(err.to_string(), "Example not found: missing");
    }
}
