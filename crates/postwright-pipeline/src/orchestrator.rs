//! Core Pipeline implementation

use crate::config::PipelineConfig;
use crate::error::{ConfigError, PipelineError};
use crate::stage::{NullObserver, ProgressObserver, Stage};
use postwright_composer::PostComposer;
use postwright_domain::traits::{LlmProvider, PageFetcher, SearchProvider};
use postwright_domain::{Post, Query, RunId};
use postwright_scraper::ContentExtractor;
use postwright_selector::ArticleSelector;
use postwright_summarizer::ChunkedSummarizer;
use std::sync::Arc;
use tracing::{info, warn};

/// The pipeline orchestrator
///
/// Owns one configured instance of every stage and runs them in order.
/// `run` takes `&mut self`, so one orchestrator cannot execute two runs
/// concurrently; a new run may start once the previous one has returned.
pub struct Pipeline<S, L, F> {
    search: S,
    selector: ArticleSelector<L>,
    extractor: ContentExtractor<F>,
    summarizer: ChunkedSummarizer<L>,
    composer: PostComposer<L>,
    observer: Box<dyn ProgressObserver>,
    stage: Stage,
}

impl<S, L, F> Pipeline<S, L, F>
where
    S: SearchProvider + Send + Sync,
    L: LlmProvider + Send + Sync,
    F: PageFetcher + Send + Sync,
{
    /// Assemble a pipeline from its providers
    ///
    /// The configuration is validated here, before any run can start.
    pub fn new(
        search: S,
        llm: L,
        fetcher: F,
        config: PipelineConfig,
    ) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::Invalid)?;

        let llm = Arc::new(llm);
        Ok(Self {
            search,
            selector: ArticleSelector::new(Arc::clone(&llm)),
            extractor: ContentExtractor::new(Arc::new(fetcher))
                .with_concurrency(config.extract_concurrency),
            summarizer: ChunkedSummarizer::new(Arc::clone(&llm), config.summarizer),
            composer: PostComposer::new(llm),
            observer: Box::new(NullObserver),
            stage: Stage::Idle,
        })
    }

    /// Attach a progress observer
    pub fn with_observer(mut self, observer: Box<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The stage the orchestrator is currently in
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Execute one run for the given query
    ///
    /// On success the final post is returned and the orchestrator ends in
    /// `Done`; on any unrecovered stage error it ends in `Failed` and the
    /// error carries the failing stage. All intermediate outputs are
    /// discarded either way.
    pub async fn run(&mut self, query: Query) -> Result<Post, PipelineError> {
        let run_id = RunId::new();
        info!(run_id = %run_id, query = %query, "Pipeline run started");

        self.set_stage(Stage::Searching);
        let searched = self.search.search(&query).await;
        let results =
            searched.map_err(|e| self.fail(PipelineError::Search(e.to_string())))?;

        self.set_stage(Stage::SelectingArticles);
        let selected = self.selector.select(&results, &query).await;
        let urls =
            selected.map_err(|e| self.fail(PipelineError::Selection(e.to_string())))?;

        self.set_stage(Stage::Extracting);
        let documents = self.extractor.extract(&urls).await;

        self.set_stage(Stage::Summarizing);
        let summarized = self.summarizer.summarize(&documents, &query).await;
        let summaries =
            summarized.map_err(|e| self.fail(PipelineError::Summarize(e.to_string())))?;

        self.set_stage(Stage::Composing);
        let composed = self.composer.compose(&summaries, &query).await;
        let post = composed.map_err(|e| self.fail(PipelineError::Compose(e.to_string())))?;

        self.set_stage(Stage::Done);
        info!(run_id = %run_id, chars = post.text().len(), "Pipeline run complete");
        Ok(post)
    }

    fn set_stage(&mut self, stage: Stage) {
        self.stage = stage;
        self.observer.stage_changed(stage);
    }

    fn fail(&mut self, error: PipelineError) -> PipelineError {
        warn!(error = %error, "Pipeline run failed");
        self.set_stage(Stage::Failed);
        error
    }
}
