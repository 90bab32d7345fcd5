//! Corpus scanner.
//!
//! Walks the fixed nesting `root/<year>/questions/<subdir>/<file>.json` and
//! loads every record that validates and matches the requested discipline.
//! Sibling directories and files are read concurrently; each branch collects
//! into its own local list and the branches are concatenated once all of them
//! finish, so no branch ever writes into a shared collection.
//!
//! The scan is best-effort: a missing `questions` directory, an unreadable
//! subdirectory, or a malformed file costs only that branch's contribution
//! and is reported through `tracing`, never as a request failure.

use crate::corpus::filter::matches_discipline;
use crate::models::Question;
use anyhow::{Context, Result};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, warn};

/// Collects every valid question under `root` whose discipline matches
/// `discipline` case-insensitively.
///
/// An absent root is not an error: the corpus is simply empty. A root that
/// exists but cannot be listed is an unexpected system fault and propagates.
pub async fn collect_matching(root: &Path, discipline: &str) -> Result<Vec<Question>> {
    if !fs::try_exists(root).await.unwrap_or(false) {
        error!("corpus root not found: {}", root.display());
        return Ok(Vec::new());
    }

    let year_dirs = list_dir(root)
        .await
        .with_context(|| format!("failed to list corpus root {}", root.display()))?;

    let wanted = discipline.to_lowercase();
    let branches = year_dirs.into_iter().map(|dir| scan_year(dir, &wanted));
    let per_year: Vec<Vec<Question>> = join_all(branches).await;

    Ok(per_year.into_iter().flatten().collect())
}

/// Scans one `<year>/questions` subtree. A year without a readable
/// `questions` directory contributes nothing.
async fn scan_year(year_dir: PathBuf, wanted: &str) -> Vec<Question> {
    let questions_dir = year_dir.join("questions");

    let subdirs = match list_dir(&questions_dir).await {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                "questions directory unavailable under {}: {}",
                year_dir.display(),
                err
            );
            return Vec::new();
        }
    };

    let branches = subdirs
        .into_iter()
        .map(|dir| scan_question_dir(dir, wanted));

    join_all(branches).await.into_iter().flatten().collect()
}

/// Scans one per-question subdirectory, reading every `.json` file in it.
async fn scan_question_dir(question_dir: PathBuf, wanted: &str) -> Vec<Question> {
    let files = match list_dir(&question_dir).await {
        Ok(entries) => entries,
        Err(err) => {
            warn!(
                "question subdirectory unreadable {}: {}",
                question_dir.display(),
                err
            );
            return Vec::new();
        }
    };

    let loads = files
        .into_iter()
        .filter(|path| has_json_extension(path))
        .map(|path| load_matching_question(path, wanted));

    join_all(loads).await.into_iter().flatten().collect()
}

/// Reads and validates one record file, keeping it only on a discipline
/// match. Any failure skips the file and leaves siblings untouched.
async fn load_matching_question(path: PathBuf, wanted: &str) -> Option<Question> {
    let raw = match fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(err) => {
            warn!("failed to read question file {}: {}", path.display(), err);
            return None;
        }
    };

    let question = match Question::from_json(&raw) {
        Ok(question) => question,
        Err(err) => {
            warn!("skipping malformed question file {}: {}", path.display(), err);
            return None;
        }
    };

    matches_discipline(&question, wanted).then_some(question)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

async fn list_dir(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        paths.push(entry.path());
    }
    Ok(paths)
}
