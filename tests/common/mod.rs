use std::path::{Path, PathBuf};

/// Creates a fresh corpus root in the system temp directory, unique per
/// test so parallel tests never share a tree.
pub fn create_test_corpus() -> PathBuf {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let root = std::env::temp_dir().join(format!(
        "questions_api_test_{}_{}",
        std::process::id(),
        id
    ));
    // Clean up leftovers from previous runs
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).expect("failed to create test corpus root");
    root
}

/// Writes one record file at `root/<year>/questions/<subdir>/<file_name>`.
pub fn write_question(root: &Path, year: i64, subdir: &str, file_name: &str, body: &str) {
    let dir = root.join(year.to_string()).join("questions").join(subdir);
    std::fs::create_dir_all(&dir).expect("failed to create question directory");
    std::fs::write(dir.join(file_name), body).expect("failed to write question file");
}

/// Builds a valid question record as raw JSON.
pub fn question_json(title: &str, index: i64, year: i64, discipline: &str) -> String {
    serde_json::json!({
        "title": title,
        "index": index,
        "year": year,
        "discipline": discipline,
        "correctAlternative": "A",
        "alternatives": [
            { "letter": "A", "text": "right", "isCorrect": true },
            { "letter": "B", "text": "wrong", "isCorrect": false }
        ]
    })
    .to_string()
}
