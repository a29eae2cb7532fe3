use {
    async_trait::async_trait,
    tracing::debug,
    crate::{
        error::FetchError,
        progress::Progress,
        video_id::VideoId,
    },
};

/// One response worth of comment texts. `next_page_token` is `None` on the
/// last page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub comments: Vec<String>,
    pub next_page_token: Option<String>,
}

impl Page {
    pub fn new(comments: Vec<String>, next_page_token: Option<String>) -> Self {
        Self {
            comments,
            next_page_token: next_page_token.filter(|token| !token.is_empty()),
        }
    }

    pub fn last(comments: Vec<String>) -> Self {
        Self::new(comments, None)
    }
}

#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch_page(&self, video: &VideoId, page_token: Option<&str>, page_size: u32) -> Result<Page, FetchError>;
}

enum PaginationState {
    Fetching(Option<String>),
    Exhausted,
}

pub struct Paginator<'a, S: ?Sized> {
    source: &'a S,
    page_size: u32,
    max_pages: usize,
}

impl<'a, S: CommentSource + ?Sized> Paginator<'a, S> {
    pub fn new(source: &'a S, page_size: u32, max_pages: usize) -> Self {
        Self {
            source,
            page_size,
            max_pages,
        }
    }

    /// Walks pages one at a time until a response arrives without a
    /// continuation token. Any failing page fails the whole walk.
    pub async fn collect_comments(&self, video: &VideoId) -> Result<Vec<String>, FetchError> {
        let mut comments = Vec::new();
        let mut progress = Progress::new(format!("fetching comments for {}", video));
        let mut pages_fetched = 0;
        let mut state = PaginationState::Fetching(None);

        while let PaginationState::Fetching(page_token) = state {
            if pages_fetched >= self.max_pages {
                return Err(FetchError::PageLimitExceeded(pages_fetched));
            }

            let page = self.source.fetch_page(video, page_token.as_deref(), self.page_size).await?;
            pages_fetched += 1;

            debug!("fetched page {} with {} comments", pages_fetched, page.comments.len());
            progress.update(page.comments.len() as u64);
            comments.extend(page.comments);

            state = match page.next_page_token.filter(|token| !token.is_empty()) {
                Some(token) => PaginationState::Fetching(Some(token)),
                None => PaginationState::Exhausted,
            };
        }

        progress.finish();
        Ok(comments)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use {
        std::{collections::VecDeque, sync::Mutex},
        super::*,
    };

    /// Replays a fixed list of responses and records every request.
    pub(crate) struct ScriptedSource {
        responses: Mutex<VecDeque<Result<Page, FetchError>>>,
        requests: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        pub(crate) fn new(responses: Vec<Result<Page, FetchError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn pages(pages: Vec<Page>) -> Self {
            Self::new(pages.into_iter().map(Ok).collect())
        }

        pub(crate) fn requests(&self) -> Vec<Option<String>> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CommentSource for ScriptedSource {
        async fn fetch_page(&self, _video: &VideoId, page_token: Option<&str>, page_size: u32) -> Result<Page, FetchError> {
            assert_eq!(page_size, 100);
            self.requests.lock().unwrap().push(page_token.map(|v| v.to_owned()));
            self.responses.lock().unwrap()
                .pop_front()
                .expect("paginator requested more pages than scripted")
        }
    }

    fn texts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn video() -> VideoId {
        VideoId::new("abc123").unwrap()
    }

    #[tokio::test]
    async fn concatenates_every_page_in_order() {
        let source = ScriptedSource::pages(vec![
            Page::new(texts(&["a", "b"]), Some("t1".to_owned())),
            Page::new(texts(&["c"]), Some("t2".to_owned())),
            Page::last(texts(&["d", "e"])),
        ]);

        let comments = Paginator::new(&source, 100, 10).collect_comments(&video()).await.unwrap();

        assert_eq!(comments, texts(&["a", "b", "c", "d", "e"]));
        assert_eq!(source.requests(), vec![None, Some("t1".to_owned()), Some("t2".to_owned())]);
    }

    #[tokio::test]
    async fn single_page_without_token_is_final() {
        let source = ScriptedSource::pages(vec![Page::last(texts(&["only"]))]);

        let comments = Paginator::new(&source, 100, 10).collect_comments(&video()).await.unwrap();

        assert_eq!(comments, texts(&["only"]));
        assert_eq!(source.requests().len(), 1);
    }

    #[tokio::test]
    async fn empty_token_counts_as_absent() {
        let source = ScriptedSource::pages(vec![Page::new(texts(&["x"]), Some(String::new()))]);

        let comments = Paginator::new(&source, 100, 10).collect_comments(&video()).await.unwrap();

        assert_eq!(comments, texts(&["x"]));
        assert_eq!(source.requests().len(), 1);
    }

    #[tokio::test]
    async fn empty_final_page_yields_no_comments() {
        let source = ScriptedSource::pages(vec![Page::last(Vec::new())]);

        let comments = Paginator::new(&source, 100, 10).collect_comments(&video()).await.unwrap();

        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn failure_mid_walk_discards_collected_comments() {
        let source = ScriptedSource::new(vec![
            Ok(Page::new(texts(&["a"]), Some("t1".to_owned()))),
            Err(FetchError::Quota("quotaExceeded".to_owned())),
            Ok(Page::last(texts(&["never"]))),
        ]);

        let result = Paginator::new(&source, 100, 10).collect_comments(&video()).await;

        assert!(matches!(result, Err(FetchError::Quota(_))));
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn stops_at_page_limit() {
        let source = ScriptedSource::pages(vec![
            Page::new(texts(&["a"]), Some("t1".to_owned())),
            Page::new(texts(&["b"]), Some("t2".to_owned())),
            Page::new(texts(&["c"]), Some("t3".to_owned())),
        ]);

        let result = Paginator::new(&source, 100, 2).collect_comments(&video()).await;

        assert!(matches!(result, Err(FetchError::PageLimitExceeded(2))));
        assert_eq!(source.requests().len(), 2);
    }
}
