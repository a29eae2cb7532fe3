use {
    tracing::info,
    crate::{
        config::AnalysisConfig,
        error::AnalysisError,
        paginator::{CommentSource, Paginator},
        ranking::{rank, FrequencyTable},
        tagging::{tag_corpus, Tagger},
        video_id::VideoId,
    },
};

/// Runs one analysis: every comment page, joined, tagged, filtered and
/// ranked. Either the full table comes back or an error does.
pub async fn analyze<S: CommentSource + ?Sized>(
    source: &S,
    tagger: &dyn Tagger,
    identifier: &str,
    config: &AnalysisConfig,
) -> Result<FrequencyTable, AnalysisError> {
    let video = VideoId::new(identifier)?;

    match config.run_timeout() {
        Some(timeout) => tokio::time::timeout(timeout, run(source, tagger, &video, config))
            .await
            .map_err(|_| AnalysisError::TimedOut(timeout))?,
        None => run(source, tagger, &video, config).await,
    }
}

async fn run<S: CommentSource + ?Sized>(
    source: &S,
    tagger: &dyn Tagger,
    video: &VideoId,
    config: &AnalysisConfig,
) -> Result<FrequencyTable, AnalysisError> {
    info!("analyzing comments for {}", video);

    let comments = Paginator::new(source, config.page_size(), config.max_pages)
        .collect_comments(video)
        .await?;
    info!("fetched {} comments", comments.len());

    let corpus = comments.join(" ");
    drop(comments);

    let tagged = tag_corpus(&corpus, tagger)?;
    let table = rank(&tagged, &config.allowed_categories, config.top_k);
    info!("{} tokens tagged, {} words ranked", tagged.len(), table.len());

    Ok(table)
}

#[cfg(test)]
mod tests {
    use {
        std::time::Duration,
        async_trait::async_trait,
        super::*,
        crate::{
            error::{FetchError, FailureKind},
            paginator::{tests::ScriptedSource, Page},
            tagging::LexiconTagger,
        },
    };

    fn texts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn ranks_nouns_and_adjectives_from_a_single_page() {
        let source = ScriptedSource::pages(vec![
            Page::last(texts(&["Great video!", "So funny dogs", "dogs are funny"])),
        ]);

        let table = analyze(&source, &LexiconTagger::new(), "abc123", &AnalysisConfig::default()).await.unwrap();

        assert_eq!(table.words(), vec!["funny", "dogs", "Great", "video"]);
        assert_eq!(table.get("dogs"), Some(2));
        assert_eq!(table.get("funny"), Some(2));
        assert_eq!(table.get("Great"), Some(1));
        assert_eq!(table.get("video"), Some(1));
        assert_eq!(table.get("are"), None);
    }

    #[tokio::test]
    async fn comments_across_pages_are_joined_before_counting() {
        let source = ScriptedSource::pages(vec![
            Page::new(texts(&["nice song"]), Some("next".to_owned())),
            Page::last(texts(&["song"])),
        ]);

        let table = analyze(&source, &LexiconTagger::new(), "abc123", &AnalysisConfig::default()).await.unwrap();

        assert_eq!(table.words(), vec!["song", "nice"]);
        assert_eq!(table.get("song"), Some(2));
    }

    #[tokio::test]
    async fn nouns_after_pronouns_and_to_are_counted() {
        let source = ScriptedSource::pages(vec![
            Page::last(texts(&["thank you guys", "we went to school today"])),
        ]);

        let table = analyze(&source, &LexiconTagger::new(), "abc123", &AnalysisConfig::default()).await.unwrap();

        assert_eq!(table.words(), vec!["guys", "school", "today"]);
    }

    #[tokio::test]
    async fn no_comments_gives_empty_table() {
        let source = ScriptedSource::pages(vec![Page::last(Vec::new())]);

        let table = analyze(&source, &LexiconTagger::new(), "abc123", &AnalysisConfig::default()).await.unwrap();

        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn only_function_words_gives_empty_table() {
        let source = ScriptedSource::pages(vec![Page::last(texts(&["it is what it is", "!!!"]))]);

        let table = analyze(&source, &LexiconTagger::new(), "abc123", &AnalysisConfig::default()).await.unwrap();

        assert!(table.is_empty());
    }

    #[tokio::test]
    async fn failure_on_second_of_three_pages_returns_no_table() {
        let source = ScriptedSource::new(vec![
            Ok(Page::new(texts(&["great dogs"]), Some("t1".to_owned()))),
            Err(FetchError::Api {
                status: 500,
                message: "backendError".to_owned(),
            }),
            Ok(Page::last(texts(&["more dogs"]))),
        ]);

        let result = analyze(&source, &LexiconTagger::new(), "abc123", &AnalysisConfig::default()).await;

        match result {
            Err(err @ AnalysisError::Fetch(_)) => assert_eq!(err.kind(), FailureKind::Remote),
            other => panic!("expected a fetch failure, got {:?}", other),
        }
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn invalid_identifier_fails_before_fetching() {
        let source = ScriptedSource::pages(Vec::new());

        let result = analyze(&source, &LexiconTagger::new(), "not/a video", &AnalysisConfig::default()).await;

        assert!(matches!(result, Err(AnalysisError::InvalidIdentifier(_))));
        assert!(source.requests().is_empty());
    }

    struct Stalled;

    #[async_trait]
    impl CommentSource for Stalled {
        async fn fetch_page(&self, _video: &VideoId, _page_token: Option<&str>, _page_size: u32) -> Result<Page, FetchError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Page::default())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn run_timeout_bounds_a_stalled_source() {
        let config: AnalysisConfig = toml::from_str("run_timeout_secs = 5").unwrap();

        let result = analyze(&Stalled, &LexiconTagger::new(), "abc123", &config).await;

        assert!(matches!(result, Err(AnalysisError::TimedOut(timeout)) if timeout == Duration::from_secs(5)));
    }
}
