use {
    std::{fmt, str::FromStr},
    url::Url,
    crate::error::AnalysisError,
};

const URL_VIDEO_ID_LENGTH: usize = 11;
const VIDEO_HOSTS: [&str; 3] = ["youtube.com", "youtube-nocookie.com", "youtu.be"];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn new(id: &str) -> Result<Self, AnalysisError> {
        let id = id.trim();
        if id.is_empty() || !id.chars().all(is_id_char) {
            return Err(AnalysisError::InvalidIdentifier(id.to_owned()));
        }

        Ok(Self(id.to_owned()))
    }

    /// Accepts either a bare id or any of the usual video url shapes.
    pub fn parse(input: &str) -> Result<Self, AnalysisError> {
        let input = input.trim();
        if !input.is_empty() && input.chars().all(is_id_char) {
            return Self::new(input);
        }

        Self::from_url(input)
    }

    pub fn from_url(input: &str) -> Result<Self, AnalysisError> {
        let invalid = || AnalysisError::InvalidIdentifier(input.to_owned());

        let with_scheme = if input.contains("://") {
            input.to_owned()
        } else {
            format!("https://{}", input)
        };
        let url = Url::parse(&with_scheme).map_err(|_| invalid())?;

        let host = url.host_str().ok_or_else(invalid)?;
        let host = host.trim_start_matches("www.").trim_start_matches("m.");
        if !VIDEO_HOSTS.contains(&host) {
            return Err(invalid());
        }

        let candidate = if host == "youtu.be" {
            url.path_segments().and_then(|mut segments| segments.next()).map(|v| v.to_owned())
        } else {
            video_id_from_youtube_url(&url)
        };

        match candidate {
            Some(id) if id.len() == URL_VIDEO_ID_LENGTH && id.chars().all(is_id_char) => Ok(Self(id)),
            _ => Err(invalid()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn video_id_from_youtube_url(url: &Url) -> Option<String> {
    if let Some((_, v)) = url.query_pairs().find(|(key, _)| key == "v") {
        return Some(v.into_owned());
    }

    let mut segments = url.path_segments()?;
    match segments.next()? {
        "embed" | "v" | "shorts" | "live" => segments.next().map(|v| v.to_owned()),
        _ => None,
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for VideoId {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
