/// Terminal user interface for the interactive finder
pub mod finder;

use crate::cli::commands::FinderContext;
use crate::Result;

/// Run the interactive finder
pub async fn run_finder(context: FinderContext) -> Result<()> {
    finder::run(context).await
}
