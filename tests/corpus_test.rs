mod common;

use questions_api::corpus::collect_matching;
use questions_api::{Config, PageParams, QuestionService};
use std::collections::HashSet;

fn service_for(root: &std::path::Path) -> QuestionService {
    let config = Config {
        corpus_dir: root.to_string_lossy().into_owned(),
        ..Config::default()
    };
    QuestionService::new(&config)
}

#[tokio::test]
async fn missing_root_yields_an_empty_page_not_an_error() {
    let root = common::create_test_corpus().join("does-not-exist");
    let service = service_for(&root);

    let page = service
        .query_by_discipline("mathematics", PageParams { limit: 20, offset: 0 })
        .await
        .expect("missing root should not fail the request");
    assert_eq!(page.metadata.total, 0);
    assert!(page.questions.is_empty());
}

#[tokio::test]
async fn scan_collects_each_match_exactly_once() {
    let root = common::create_test_corpus();
    common::write_question(
        &root,
        2019,
        "q1",
        "details.json",
        &common::question_json("A", 1, 2019, "history"),
    );
    common::write_question(
        &root,
        2019,
        "q2",
        "details.json",
        &common::question_json("B", 2, 2019, "History"),
    );
    common::write_question(
        &root,
        2021,
        "q9",
        "details.json",
        &common::question_json("C", 9, 2021, "history"),
    );
    common::write_question(
        &root,
        2021,
        "q10",
        "details.json",
        &common::question_json("D", 10, 2021, "chemistry"),
    );

    let matches = collect_matching(&root, "HISTORY")
        .await
        .expect("scan should succeed");

    // Branch completion order is not stable, so compare as a set.
    let titles: HashSet<&str> = matches.iter().map(|q| q.title.as_str()).collect();
    assert_eq!(titles, HashSet::from(["A", "B", "C"]));
    assert_eq!(matches.len(), 3);
}

#[tokio::test]
async fn stray_entries_at_every_level_are_tolerated() {
    let root = common::create_test_corpus();
    common::write_question(
        &root,
        2020,
        "q1",
        "details.json",
        &common::question_json("Kept", 1, 2020, "physics"),
    );
    // A plain file where a year directory is expected
    std::fs::write(root.join("README.md"), "not a year").unwrap();
    // A year whose questions entry is a file, not a directory
    std::fs::create_dir_all(root.join("2023")).unwrap();
    std::fs::write(root.join("2023").join("questions"), "oops").unwrap();
    // An empty question subdirectory
    std::fs::create_dir_all(root.join("2020").join("questions").join("q2")).unwrap();

    let matches = collect_matching(&root, "physics")
        .await
        .expect("scan should succeed");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].title, "Kept");
}
