use super::{CommandHandler, FinderContext};
use crate::catalog::{Category, Difficulty, Example};
use crate::cli::output::{self, NO_MATCHES};
use crate::query::{Filters, SortOption};
use crate::session::FilterSession;
use crate::Result;

/// Filter criteria shared by `search` and `gallery`
#[derive(Debug, Clone, Default)]
pub struct FilterArgs {
    pub query: Option<String>,
    pub categories: Vec<Category>,
    pub difficulty: Option<Difficulty>,
    pub only_new: bool,
    pub sort: Option<SortOption>,
}

impl FilterArgs {
    /// Session seeded from the arguments; the config's default sort applies
    /// when no `--sort` is given
    pub fn session(&self, default_sort: SortOption) -> FilterSession {
        let filters = Filters {
            query: self.query.clone(),
            categories: self.categories.clone(),
            difficulty: self.difficulty,
            only_new: self.only_new,
        };
        let mut session = FilterSession::from(filters);
        session.set_sort(self.sort.unwrap_or(default_sort));
        session
    }
}

/// Keyword search over the catalog
pub struct SearchCommand<'a> {
    context: &'a FinderContext,
    args: FilterArgs,
    json: bool,
}

impl<'a> SearchCommand<'a> {
    pub fn new(context: &'a FinderContext, args: FilterArgs, json: bool) -> Self {
        Self {
            context,
            args,
            json,
        }
    }

    /// Matching examples in display order
    pub fn results(&self) -> Vec<&'a Example> {
        let session = self.args.session(self.context.config.config.default_sort);
        session.results(self.context.catalog())
    }

    /// Text or JSON output for `results`
    pub fn render(&self, results: &[&Example]) -> Result<String> {
        if self.context.wants_json(self.json) {
            return output::to_json(results);
        }
        if results.is_empty() {
            return Ok(NO_MATCHES.to_string());
        }
        Ok(format!(
            "Found {} example(s):\n\n{}",
            results.len(),
            output::examples_table(results)
        ))
    }
}

impl CommandHandler for SearchCommand<'_> {
    fn execute(&self) -> Result<()> {
        let results = self.results();
        tracing::debug!(query = ?self.args.query, results = results.len(), "search finished");
        println!("{}", self.render(&results)?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "search"
    }
}
