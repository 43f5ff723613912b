//! Command implementations for Synoptic CLI.

use std::path::Path;

use crate::analysis::normalize;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::RewriteConfig;
use crate::error::{Result, SynopticError};
use crate::query::{QueryStringQuery, SearchQuery};
use crate::rewrite::SynonymQueryRewriter;
use crate::synonym::SynonymStore;

/// Execute a CLI command.
pub fn execute_command(args: SynopticArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Command::Rewrite(rewrite_args) => rewrite_query(rewrite_args, config, &args),
        Command::Inspect(inspect_args) => inspect_query(inspect_args, config, &args),
        Command::Normalize(normalize_args) => normalize_text(normalize_args, &args),
    }
}

fn load_config(path: Option<&Path>) -> Result<RewriteConfig> {
    match path {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            RewriteConfig::load_from_file(path)
        }
        None => Ok(RewriteConfig::default()),
    }
}

/// Open the synonym dictionary named on the command line, falling back to the
/// configured one. No dictionary at all means an empty one.
fn open_store(synonyms: Option<&Path>, config: &RewriteConfig) -> Result<SynonymStore> {
    match synonyms.or(config.synonyms_path.as_deref()) {
        Some(path) => SynonymStore::from_file(path),
        None => {
            log::warn!("No synonym dictionary given; queries are rewritten without synonyms");
            Ok(SynonymStore::default())
        }
    }
}

/// Rewrite a query.
fn rewrite_query(args: &RewriteArgs, config: RewriteConfig, cli_args: &SynopticArgs) -> Result<()> {
    let query: SearchQuery = if args.json {
        serde_json::from_str(&args.query).map_err(|e| {
            SynopticError::invalid_argument(format!("QUERY is not a JSON search query: {e}"))
        })?
    } else {
        let mut query_string = QueryStringQuery::new(args.query.as_str())
            .with_fields(args.fields.iter().cloned())
            .with_default_operator(args.operator);
        query_string.analyzer = args.analyzer.clone();
        query_string.into()
    };

    let store = open_store(args.synonyms.as_deref(), &config)?;
    let supports_synonyms = config.synonyms_supported && !args.no_synonym_support;
    let rewriter = SynonymQueryRewriter::with_config(config);

    let outcome = rewriter.rewrite(&query, &store.snapshot(), supports_synonyms);
    output_result(&RewriteReport { outcome }, cli_args)
}

/// Show every pipeline stage for a query.
fn inspect_query(args: &InspectArgs, config: RewriteConfig, cli_args: &SynopticArgs) -> Result<()> {
    let store = open_store(args.synonyms.as_deref(), &config)?;
    let rewriter = SynonymQueryRewriter::with_config(config);

    let trace = rewriter.analyze(&args.query, &store.snapshot());
    output_result(&InspectReport { trace }, cli_args)
}

/// Normalize text the way query text is normalized before tokenization.
fn normalize_text(args: &NormalizeArgs, cli_args: &SynopticArgs) -> Result<()> {
    let report = NormalizeReport {
        input: args.text.clone(),
        normalized: normalize(&args.text),
    };
    output_result(&report, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    #[test]
    fn test_execute_rewrite_with_dictionary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dagis": ["förskola", "lekis"]}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let args = SynopticArgs::try_parse_from([
            "synoptic", "-q", "--format", "json", "rewrite", "dagis", "--synonyms", path,
            "--operator", "AND",
        ])
        .unwrap();
        execute_command(args).unwrap();
    }

    #[test]
    fn test_execute_with_missing_dictionary() {
        let args = SynopticArgs::try_parse_from([
            "synoptic",
            "inspect",
            "dagis",
            "--synonyms",
            "/nonexistent/synonyms.json",
        ])
        .unwrap();
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_execute_rejects_invalid_json_query() {
        let args =
            SynopticArgs::try_parse_from(["synoptic", "rewrite", "--json", "{not json"]).unwrap();
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_open_store_prefers_command_line() {
        let config = RewriteConfig::default().with_synonyms_path("/nonexistent/config.json");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[["tv", "television"]]"#).unwrap();

        let store = open_store(Some(file.path()), &config).unwrap();
        assert!(store.snapshot().contains("tv"));
        assert!(open_store(None, &config).is_err());
        assert!(open_store(None, &RewriteConfig::default()).unwrap().snapshot().is_empty());
    }
}
