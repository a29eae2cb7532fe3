use {
    std::{env, fs::read_to_string, time::Duration},
    serde::Deserialize,
    crate::{
        ranking::DEFAULT_TOP_K,
        tagging::{CategorySet, TaggerKind},
    },
};

pub const API_KEY_ENV_VAR: &str = "YOUTUBE_API_KEY";
pub const MAX_PAGE_SIZE: u32 = 100;
pub const DEFAULT_MAX_PAGES: usize = 10_000;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub youtube: YouTubeConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct YouTubeConfig {
    api_key: Option<String>,
    endpoint: Option<String>,
    request_timeout_secs: Option<u64>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub allowed_categories: CategorySet,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
    page_size: Option<u32>,
    pub run_timeout_secs: Option<u64>,
    #[serde(default)]
    pub tagger: TaggerKind,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputConfig {
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    pub csv_path: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub verbose: bool,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

fn default_chart_width() -> usize {
    60
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            request_timeout_secs: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            allowed_categories: CategorySet::default(),
            top_k: DEFAULT_TOP_K,
            max_pages: DEFAULT_MAX_PAGES,
            page_size: None,
            run_timeout_secs: None,
            tagger: TaggerKind::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart_width: default_chart_width(),
            csv_path: None,
        }
    }
}

impl Config {
    /// Reads `./config.toml`, then `/config/config.toml`.
    pub fn load() -> Result<Self, String> {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::parse(&v))
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|err| err.to_string())
    }
}

impl YouTubeConfig {
    pub fn api_key(&self) -> Option<String> {
        self.api_key.as_ref()
            .cloned()
            .or_else(|| env::var(API_KEY_ENV_VAR).ok())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn endpoint(&self) -> String {
        self.endpoint.as_ref()
            .cloned()
            .unwrap_or("https://www.googleapis.com/youtube/v3".to_owned())
            .trim_end_matches('/')
            .to_owned()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(30))
    }
}

impl AnalysisConfig {
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(MAX_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    pub fn run_timeout(&self) -> Option<Duration> {
        self.run_timeout_secs.map(Duration::from_secs)
    }
}
