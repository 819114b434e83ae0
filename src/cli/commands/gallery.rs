use super::search::FilterArgs;
use super::{CommandHandler, FinderContext};
use crate::catalog::Example;
use crate::cli::output::{self, NO_MATCHES};
use crate::Result;

/// Every example, narrowed by filter chips and sorted
pub struct GalleryCommand<'a> {
    context: &'a FinderContext,
    args: FilterArgs,
    json: bool,
}

impl<'a> GalleryCommand<'a> {
    pub fn new(context: &'a FinderContext, args: FilterArgs, json: bool) -> Self {
        Self {
            context,
            args: FilterArgs {
                query: None,
                ..args
            },
            json,
        }
    }

    pub fn results(&self) -> Vec<&'a Example> {
        self.args
            .session(self.context.config.config.default_sort)
            .results(self.context.catalog())
    }

    pub fn render(&self, results: &[&Example]) -> Result<String> {
        if self.context.wants_json(self.json) {
            return output::to_json(results);
        }

        let mut text = output::count_line(results.len());
        text.push_str("\n\n");
        if results.is_empty() {
            text.push_str(NO_MATCHES);
        } else {
            text.push_str(&output::examples_table(results));
        }
        Ok(text)
    }
}

impl CommandHandler for GalleryCommand<'_> {
    fn execute(&self) -> Result<()> {
        let results = self.results();
        println!("{}", self.render(&results)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "gallery"
    }
}
