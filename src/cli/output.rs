//! Output formatting for CLI commands.

use std::fmt;

use serde::Serialize;

use crate::cli::args::{OutputFormat, SynopticArgs};
use crate::error::Result;
use crate::rewrite::{RewriteOutcome, RewriteTrace};

/// Result structure for the rewrite command.
#[derive(Debug, Serialize)]
pub struct RewriteReport {
    #[serde(flatten)]
    pub outcome: RewriteOutcome,
}

/// Result structure for the inspect command.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    #[serde(flatten)]
    pub trace: RewriteTrace,
}

/// Result structure for the normalize command.
#[derive(Debug, Serialize)]
pub struct NormalizeReport {
    pub input: String,
    pub normalized: String,
}

/// Output a result in the specified format.
pub fn output_result<T>(result: &T, args: &SynopticArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => {
            print!("{result}");
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SynopticArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

impl fmt::Display for RewriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(reason) = self.outcome.unchanged_reason() {
            writeln!(f, "Unchanged: {reason}")?;
        }

        match self.outcome.query().as_query_string() {
            Some(query) => {
                writeln!(f, "Query:                {}", query.query_text())?;
                if !query.fields.is_empty() {
                    writeln!(f, "Fields:               {}", query.fields.join(", "))?;
                }
                if let Some(analyzer) = &query.analyzer {
                    writeln!(f, "Analyzer:             {analyzer}")?;
                }
                writeln!(f, "Default operator:     {}", query.default_operator)?;
                if let Some(minimum) = &query.minimum_should_match {
                    writeln!(f, "Minimum should match: {minimum}")?;
                }
                Ok(())
            }
            None => writeln!(f, "Query type:           {}", self.outcome.query().kind()),
        }
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trace = &self.trace;
        writeln!(f, "Normalized: {}", trace.normalized)?;

        writeln!(f, "Phrases ({}):", trace.phrases.len())?;
        for phrase in &trace.phrases {
            writeln!(f, "  [{}] {}", phrase.position, phrase.text)?;
        }

        writeln!(f, "Variations: {}", trace.variations.len())?;

        writeln!(f, "Expanded ({}):", trace.matched.to_expand.len())?;
        for fragment in &trace.fragments {
            writeln!(f, "  {} => {}", fragment.source, fragment.text)?;
        }

        let literal: Vec<&str> = trace
            .matched
            .not_to_expand
            .iter()
            .map(|phrase| phrase.as_str())
            .collect();
        writeln!(f, "Literal ({}): {}", literal.len(), literal.join(" "))
    }
}

impl fmt::Display for NormalizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.normalized)
    }
}
