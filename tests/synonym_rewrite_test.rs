//! Integration tests for synonym query rewriting.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use synoptic::analysis::{normalize, tokenize};
use synoptic::error::Result;
use synoptic::prelude::*;
use synoptic::query::TermQuery;
use synoptic::rewrite::RewriteEvent;

fn resource_dictionary() -> Result<SynonymDictionary> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/synonyms.json");
    SynonymDictionary::load_from_file(path)
}

fn query(text: &str, operator: Operator) -> SearchQuery {
    QueryStringQuery::new(text)
        .field("title")
        .with_default_operator(operator)
        .into()
}

fn rewrite(text: &str, operator: Operator, dictionary: &SynonymDictionary) -> QueryStringQuery {
    let outcome = SynonymQueryRewriter::new().rewrite(&query(text, operator), dictionary, true);
    assert!(outcome.is_rewritten(), "expected a rewrite for {text:?}");
    outcome
        .into_query()
        .as_query_string()
        .cloned()
        .expect("rewrites produce query-string queries")
}

#[test]
fn test_no_match_keeps_phrase_order() {
    let rewritten = rewrite("Alloy tech now", Operator::And, &SynonymDictionary::new());

    assert_eq!(rewritten.query_text(), "Alloy tech now");
    assert_eq!(rewritten.fields, vec!["title"]);
    assert_eq!(rewritten.default_operator, Operator::Or);
    assert_eq!(
        rewritten.minimum_should_match.map(|m| m.to_string()),
        Some("2<60%".to_string())
    );
}

#[test]
fn test_pure_expansion() -> Result<()> {
    let dictionary = resource_dictionary()?;
    let rewritten = rewrite("dagis", Operator::And, &dictionary);

    assert_eq!(
        rewritten.query_text(),
        "((dagis) (forskola)) ((dagis) (lekis))"
    );
    assert_eq!(
        rewritten.minimum_should_match.map(|m| m.to_string()),
        Some("1<40%".to_string())
    );

    Ok(())
}

#[test]
fn test_quoted_phrase_is_atomic() -> Result<()> {
    let phrases = tokenize(&normalize("\"red bike\""));
    assert_eq!(phrases.len(), 1);
    assert_eq!(phrases[0].as_str(), "\"red bike\"");

    let rewritten = rewrite("\"red bike\"", Operator::Or, &SynonymDictionary::new());
    assert_eq!(rewritten.query_text(), "\"red bike\"");

    let dictionary = resource_dictionary()?;
    let rewritten = rewrite("\"red bike\" shop", Operator::Or, &dictionary);
    assert_eq!(
        rewritten.query_text(),
        "((\"red bike\") (\"crimson bicycle\")) shop"
    );

    Ok(())
}

#[test]
fn test_or_query_is_not_relaxed() {
    let rewritten = rewrite("Alloy tech now", Operator::Or, &SynonymDictionary::new());

    assert_eq!(rewritten.query_text(), "Alloy tech now");
    assert_eq!(rewritten.default_operator, Operator::Or);
    assert!(rewritten.minimum_should_match.is_none());
}

#[test]
fn test_hyphen_is_escaped() -> Result<()> {
    let rewritten = rewrite("real-time data", Operator::Or, &SynonymDictionary::new());
    assert_eq!(rewritten.query_text(), r"real\-time data");

    let dictionary = resource_dictionary()?;
    let rewritten = rewrite("ml tutorial", Operator::Or, &dictionary);
    assert_eq!(
        rewritten.query_text(),
        r"((ml) (machine AND learning)) ((ml) (machine\-learning)) tutorial"
    );

    Ok(())
}

#[test]
fn test_multi_word_phrase_is_not_kept_literally() -> Result<()> {
    let dictionary = resource_dictionary()?;
    let rewritten = rewrite("new york pizza", Operator::And, &dictionary);

    assert_eq!(rewritten.query_text(), "((new AND york) (nyc)) pizza");
    assert_eq!(
        rewritten.minimum_should_match,
        Some(MinimumShouldMatch::conditional(2, 60))
    );

    Ok(())
}

#[test]
fn test_diacritics_match_normalized_keys() -> Result<()> {
    let dictionary = resource_dictionary()?;
    let rewritten = rewrite("förskola", Operator::Or, &dictionary);

    assert_eq!(rewritten.query_text(), "((forskola) (dagis)) ((forskola) (lekis))");

    Ok(())
}

#[test]
fn test_spacing_marks_survive_rewrite() {
    let dictionary =
        SynonymDictionary::from_synonym_groups([["\u{0939}\u{093F}\u{0926}\u{0940}", "hindi"]]);
    let rewritten = rewrite(
        "\u{0939}\u{093F}\u{0902}\u{0926}\u{0940}",
        Operator::Or,
        &dictionary,
    );

    assert_eq!(
        rewritten.query_text(),
        "((\u{0939}\u{093F}\u{0926}\u{0940}) (hindi))"
    );
}

#[test]
fn test_synonym_grouping_chars_are_escaped() {
    let dictionary =
        SynonymDictionary::from_synonym_groups([["tv", "c(x)"], ["screen", "5\" display"]]);
    let rewritten = rewrite("tv screen (cheap)", Operator::Or, &dictionary);

    assert_eq!(
        rewritten.query_text(),
        r#"((tv) (c\(x\))) ((screen) (5\" AND display)) cheap"#
    );
    let text = rewritten.query_text();
    let unescaped = |ch: char| {
        text.char_indices()
            .filter(|&(i, c)| c == ch && !text[..i].ends_with('\\'))
            .count()
    };
    assert_eq!(unescaped('('), unescaped(')'));
}

#[test]
fn test_phrase_limit() {
    let text = (0..60)
        .map(|i| format!("term{i}"))
        .collect::<Vec<_>>()
        .join(" ");
    let rewritten = rewrite(&text, Operator::Or, &SynonymDictionary::new());

    let terms: Vec<&str> = rewritten.query_text().split(' ').collect();
    assert_eq!(terms.len(), 50);
    assert_eq!(terms.last(), Some(&"term49"));
    assert!(!terms.contains(&"term50"));
}

#[test]
fn test_pass_through_reasons() {
    let events = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&events);
    let rewriter = SynonymQueryRewriter::new().with_sink(Arc::new(move |event: &RewriteEvent| {
        recorded.lock().unwrap().push(event.reason)
    }));
    let dictionary = SynonymDictionary::from_synonym_groups([["tv", "television"]]);

    let original = query("tv", Operator::And);
    let outcome = rewriter.rewrite(&original, &dictionary, false);
    assert_eq!(outcome.query(), &original);

    let term: SearchQuery = TermQuery::new("title", "tv").into();
    let outcome = rewriter.rewrite(&term, &dictionary, true);
    assert_eq!(outcome.query(), &term);

    let blank = query("   ", Operator::And);
    assert_eq!(rewriter.rewrite(&blank, &dictionary, true).query(), &blank);

    let punctuation = query("?? !!", Operator::And);
    assert_eq!(
        rewriter.rewrite(&punctuation, &dictionary, true).query(),
        &punctuation
    );

    assert_eq!(
        *events.lock().unwrap(),
        vec![
            UnchangedReason::SynonymsUnsupported,
            UnchangedReason::UnsupportedQueryShape,
            UnchangedReason::EmptyQuery,
            UnchangedReason::NoPhrases,
        ]
    );
}

#[test]
fn test_rewrite_is_deterministic() -> Result<()> {
    let dictionary = resource_dictionary()?;
    let rewriter = SynonymQueryRewriter::new();
    let original = query("cheap tv and ai dagis", Operator::And);

    let first = rewriter.rewrite(&original, &dictionary, true);
    for _ in 0..10 {
        assert_eq!(rewriter.rewrite(&original, &dictionary, true), first);
    }

    Ok(())
}

#[test]
fn test_normalize_is_idempotent() {
    for text in [
        "  Crème   Brûlée ",
        "a\\b \\\"quoted\\\"",
        "Ångström\tunits\nhere",
        "",
    ] {
        let once = normalize(text);
        assert_eq!(normalize(&once), once, "not idempotent for {text:?}");
    }
}

#[test]
fn test_concurrent_rewrites_during_replace() {
    let store = SynonymStore::new(SynonymDictionary::from_synonym_groups([["tv", "television"]]));
    let rewriter = SynonymQueryRewriter::new();
    let original = query("tv", Operator::Or);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    let snapshot = store.snapshot();
                    let outcome = rewriter.rewrite(&original, &snapshot, true);
                    let text = outcome.query().as_query_string().unwrap().query_text();
                    assert!(
                        text == "((tv) (television))" || text == "((tv) (telly))",
                        "unexpected rewrite {text:?}"
                    );
                }
            });
        }

        scope.spawn(|| {
            for i in 0..50 {
                let synonym = if i % 2 == 0 { "telly" } else { "television" };
                store.replace(SynonymDictionary::from_synonym_groups([["tv", synonym]]));
            }
        });
    });
}
