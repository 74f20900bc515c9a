use std::fs;

use case_core::source::{CsvFormat, FsResourceLoader, InMemoryResourceLoader, ResolveContext};
use case_core::{ArgValue, CaseEngine, SourceDescriptor, SourceError};

fn rows(engine: &CaseEngine, descriptor: &SourceDescriptor) -> Vec<(usize, Vec<ArgValue>)> {
    engine.resolve(descriptor, &ResolveContext::new("csv"))
          .expect("valid source")
          .map(|row| row.map(|r| (r.index(), r.values().to_vec())))
          .collect::<Result<_, _>>()
          .expect("well formed rows")
}

fn s(text: &str) -> ArgValue {
    ArgValue::from(text)
}

#[test]
fn inline_csv_with_quotes_nulls_and_custom_tokens() {
    let engine = CaseEngine::default();
    let plain = SourceDescriptor::csv(["apple, 1", "banana, 2", "'lemon, lime', 0xF1", "strawberry, 700_000"]);
    assert_eq!(rows(&engine, &plain),
               vec![(1, vec![s("apple"), s("1")]),
                    (2, vec![s("banana"), s("2")]),
                    (3, vec![s("lemon, lime"), s("0xF1")]),
                    (4, vec![s("strawberry"), s("700_000")])]);

    let piped = SourceDescriptor::csv_with(["apple | 1", "lemon, lime | 3"], CsvFormat::default().delimiter('|'));
    assert_eq!(rows(&engine, &piped)[1].1, vec![s("lemon, lime"), s("3")]);

    let tokens = SourceDescriptor::csv_with(["apple, , NIL, ''"], CsvFormat::default().null_values(["NIL"]).empty_value("EMPTY"));
    assert_eq!(rows(&engine, &tokens)[0].1, vec![s("apple"), ArgValue::Null, ArgValue::Null, s("EMPTY")]);
}

#[test]
fn resources_skip_headers_and_keep_counting_rows() {
    let loader = InMemoryResourceLoader::default().with("/two-column.csv", "Country, reference\nSweden, 1\nPoland, 2\n\n")
                                                  .with("/more.csv", "Country, reference\n'United States of America', 3\n");
    let engine = CaseEngine::builder().resources(loader).build();
    let descriptor = SourceDescriptor::csv_resource(["/two-column.csv", "/more.csv"], 1);
    assert_eq!(rows(&engine, &descriptor),
               vec![(1, vec![s("Sweden"), s("1")]), (2, vec![s("Poland"), s("2")]), (3, vec![s("United States of America"), s("3")])]);
}

#[test]
fn filesystem_resources_are_read_relative_to_the_root() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("csv_file_resource.csv"), "Country, reference\nSweden, 1\n").expect("write");
    let engine = CaseEngine::builder().resources(FsResourceLoader::new(dir.path())).build();
    let descriptor = SourceDescriptor::csv_resource(["/csv_file_resource.csv"], 1);
    assert_eq!(rows(&engine, &descriptor), vec![(1, vec![s("Sweden"), s("1")])]);

    let missing = SourceDescriptor::csv_resource(["/missing.csv"], 0);
    let first = engine.resolve(&missing, &ResolveContext::new("csv")).expect("checked lazily").next();
    assert!(matches!(first, Some(Err(SourceError::ResourceUnavailable { .. }))));
}

#[test]
fn malformed_inline_lines_are_rejected_before_any_row() {
    let engine = CaseEngine::default();
    let descriptor = SourceDescriptor::csv(["a, 1", "'b, 2"]);
    assert!(matches!(engine.resolve(&descriptor, &ResolveContext::new("csv")),
                     Err(SourceError::MalformedCsv { line: 2, .. })));
}

#[test]
fn malformed_resource_lines_surface_at_their_row() {
    let loader = InMemoryResourceLoader::default().with("/broken.csv", "a, 1\n'b, 2\nc, 3\n");
    let engine = CaseEngine::builder().resources(loader).build();
    let descriptor = SourceDescriptor::csv_resource(["/broken.csv"], 0);
    let results: Vec<_> = engine.resolve(&descriptor, &ResolveContext::new("csv")).expect("checked lazily").collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(SourceError::MalformedCsv { line: 2, .. })));
}
