pub mod config;
pub mod error;
pub mod paginator;
pub mod pipeline;
pub mod progress;
pub mod ranking;
pub mod tagging;
pub mod video_id;
pub mod youtube;
