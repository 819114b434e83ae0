use serde::Serialize;

use super::{CommandHandler, FinderContext};
use crate::catalog::Example;
use crate::cli::output;
use crate::paths::{LearningPath, PathKind, PathStep};
use crate::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedPath {
    id: PathKind,
    title: &'static str,
    description: &'static str,
    steps: Vec<ResolvedStep>,
}

#[derive(Serialize)]
struct ResolvedStep {
    #[serde(flatten)]
    step: PathStep,
    example: Example,
}

/// Learning path listing
pub struct PathsCommand<'a> {
    context: &'a FinderContext,
    kind: Option<PathKind>,
    json: bool,
}

impl<'a> PathsCommand<'a> {
    pub fn new(context: &'a FinderContext, kind: Option<PathKind>, json: bool) -> Self {
        Self {
            context,
            kind,
            json,
        }
    }

    fn selected_paths(&self) -> Vec<LearningPath> {
        match self.kind {
            Some(kind) => vec![kind.path()],
            None => LearningPath::all(),
        }
    }

    pub fn render(&self) -> Result<String> {
        let catalog = self.context.catalog();
        let resolved: Vec<ResolvedPath> = self
            .selected_paths()
            .into_iter()
            .map(|path| ResolvedPath {
                id: path.kind,
                title: path.title,
                description: path.description,
                steps: path
                    .resolve(catalog)
                    .into_iter()
                    .map(|(step, example)| ResolvedStep { step, example })
                    .collect(),
            })
            .collect();

        if self.context.wants_json(self.json) {
            return output::to_json(&resolved);
        }

        let sections: Vec<String> = resolved
            .iter()
            .map(|path| {
                let mut lines = vec![path.title.to_string(), path.description.to_string()];
                for resolved in &path.steps {
                    lines.push(String::new());
                    lines.push(format!("  {}", resolved.step.title));
                    lines.push(format!("    {}", resolved.step.description));
                    lines.push(format!(
                        "    -> {} [{}] {}",
                        resolved.example.title,
                        resolved.example.difficulty.label(),
                        resolved.example.url
                    ));
                }
                lines.join("\n")
            })
            .collect();
        Ok(sections.join("\n\n"))
    }
}

impl CommandHandler for PathsCommand<'_> {
    fn execute(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "paths"
    }
}
