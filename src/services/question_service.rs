//! Discipline query orchestration.
//!
//! One service call runs the whole retrieval pipeline for a request: scan
//! the corpus for discipline matches, impose a stable order, paginate.

use crate::config::Config;
use crate::corpus;
use crate::error::Result;
use crate::pagination::{paginate, DisciplinePage, PageParams};
use std::path::PathBuf;
use tracing::info;

pub struct QuestionService {
    corpus_root: PathBuf,
}

impl QuestionService {
    pub fn new(config: &Config) -> Self {
        Self {
            corpus_root: PathBuf::from(&config.corpus_dir),
        }
    }

    /// Returns one page of questions matching `discipline`.
    ///
    /// The corpus is re-read from disk per call; nothing is cached between
    /// requests. Matches are sorted by year then question index so that
    /// repeated paginated calls against one corpus snapshot see a stable
    /// order regardless of how the concurrent scan branches completed.
    pub async fn query_by_discipline(
        &self,
        discipline: &str,
        params: PageParams,
    ) -> Result<DisciplinePage> {
        let mut matches = corpus::collect_matching(&self.corpus_root, discipline).await?;

        matches.sort_by(|a, b| a.year.cmp(&b.year).then(a.index.cmp(&b.index)));

        info!(discipline, matched = matches.len(), "corpus scan complete");
        Ok(paginate(matches, params))
    }
}
