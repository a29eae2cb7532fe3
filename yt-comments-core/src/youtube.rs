use {
    async_trait::async_trait,
    serde::Deserialize,
    tracing::{info, warn},
    crate::{
        config::{YouTubeConfig, API_KEY_ENV_VAR},
        error::FetchError,
        paginator::{CommentSource, Page},
        video_id::VideoId,
    },
};

const QUOTA_REASONS: [&str; 4] = ["quotaExceeded", "rateLimitExceeded", "dailyLimitExceeded", "userRateLimitExceeded"];
const AUTH_REASONS: [&str; 4] = ["keyInvalid", "keyExpired", "forbidden", "accessNotConfigured"];

/// `commentThreads.list` client for the YouTube Data API v3.
pub struct YouTube {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CommentThreadListResponse {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Deserialize, Debug)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    text_display: String,
}

#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    error: ApiError,
}

#[derive(Deserialize, Debug)]
struct ApiError {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorDetail {
    #[serde(default)]
    reason: String,
}

impl YouTube {
    pub fn new(config: &YouTubeConfig) -> Result<Self, FetchError> {
        let api_key = config.api_key();
        if api_key.is_none() {
            warn!("no youtube api key configured, set {} or youtube.api_key", API_KEY_ENV_VAR);
        }

        Ok(Self {
            client: reqwest::Client::builder()
                .timeout(config.request_timeout())
                .build()?,
            endpoint: config.endpoint(),
            api_key,
        })
    }

    fn comment_threads_url(&self) -> String {
        format!("{}/commentThreads", self.endpoint)
    }
}

#[async_trait]
impl CommentSource for YouTube {
    async fn fetch_page(&self, video: &VideoId, page_token: Option<&str>, page_size: u32) -> Result<Page, FetchError> {
        let api_key = self.api_key.as_deref()
            .ok_or_else(|| FetchError::Auth(format!("no api key, set {}", API_KEY_ENV_VAR)))?;

        let page_size = page_size.to_string();
        let mut query = vec![
            ("part", "snippet"),
            ("videoId", video.as_str()),
            ("textFormat", "plainText"),
            ("maxResults", page_size.as_str()),
            ("key", api_key),
        ];
        if let Some(page_token) = page_token {
            query.push(("pageToken", page_token));
        }

        let res = self.client.get(self.comment_threads_url())
            .query(&query)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return page_from_error(video, status.as_u16(), &body);
        }

        parse_page(&body)
    }
}

fn parse_page(body: &str) -> Result<Page, FetchError> {
    let response: CommentThreadListResponse = serde_json::from_str(body)
        .map_err(|err| FetchError::Malformed(err.to_string()))?;

    let comments = response.items.into_iter()
        .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
        .collect();

    Ok(Page::new(comments, response.next_page_token))
}

/// Maps an error response onto a failure, except for disabled comments which
/// read as an empty final page.
fn page_from_error(video: &VideoId, status: u16, body: &str) -> Result<Page, FetchError> {
    let (message, reasons): (String, Vec<String>) = match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(res) => (
            res.error.message,
            res.error.errors.into_iter().map(|detail| detail.reason).collect(),
        ),
        Err(_) => (body.trim().to_owned(), Vec::new()),
    };
    let has_reason = |candidates: &[&str]| reasons.iter().any(|reason| candidates.contains(&reason.as_str()));

    if has_reason(&["commentsDisabled"]) {
        info!("comments are disabled for {}", video);
        return Ok(Page::last(Vec::new()));
    }

    let message = if message.is_empty() {
        format!("status {}", status)
    } else {
        message
    };

    Err(if status == 429 || has_reason(&QUOTA_REASONS) {
        FetchError::Quota(message)
    } else if status == 404 || has_reason(&["videoNotFound"]) {
        FetchError::VideoNotFound(video.to_string())
    } else if status == 401 || status == 403 || has_reason(&AUTH_REASONS) {
        FetchError::Auth(message)
    } else {
        FetchError::Api {
            status,
            message,
        }
    })
}
