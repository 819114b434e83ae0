use super::{CommandHandler, FinderContext};
use crate::cli::output;
use crate::Result;

/// Print the effective configuration and where it came from
pub struct ConfigCommand<'a> {
    context: &'a FinderContext,
    json: bool,
}

impl<'a> ConfigCommand<'a> {
    pub fn new(context: &'a FinderContext, json: bool) -> Self {
        Self { context, json }
    }

    pub fn render(&self) -> Result<String> {
        let loaded = &self.context.config;
        if self.context.wants_json(self.json) {
            return output::to_json(loaded);
        }

        let catalog = match self.context.catalog_path() {
            Some(path) => path.display().to_string(),
            None => "built-in".to_string(),
        };
        Ok([
            format!("Source:       {}", loaded.source),
            format!("Default sort: {}", loaded.config.default_sort),
            format!("Default mode: {}", loaded.config.default_mode),
            format!("Format:       {}", loaded.config.format),
            format!("Catalog:      {} ({} examples)", catalog, self.context.catalog().len()),
        ]
        .join("\n"))
    }
}

impl CommandHandler for ConfigCommand<'_> {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "config"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_text() {
        let context = FinderContext::builtin();
        let text = ConfigCommand::new(&context, false).render().unwrap();
        assert!(text.contains("Source:       built-in defaults"));
        assert!(text.contains("Default sort: difficulty"));
        assert!(text.contains("Catalog:      built-in (16 examples)"));
    }

    #[test]
    fn test_default_config_json() {
        let context = FinderContext::builtin();
        let parsed: serde_json::Value =
            serde_json::from_str(&ConfigCommand::new(&context, true).render().unwrap()).unwrap();
        assert_eq!(parsed["source"]["kind"], "defaults");
        assert_eq!(parsed["config"]["default_mode"], "simple");
    }
}
