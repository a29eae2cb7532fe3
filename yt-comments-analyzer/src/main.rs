mod chart;
mod export;
mod utils;

use {
    std::{path::PathBuf, process},
    clap::Parser,
    tracing::{info, warn, error},
    yt_comments_core::{
        config::Config,
        error::{AnalysisError, FailureKind},
        pipeline::analyze,
        tagging::{GrammaticalCategory, Tagger, TaggerKind},
        video_id::VideoId,
        youtube::YouTube,
    },
    crate::{
        export::{write_csv, DEFAULT_CSV_PATH},
        utils::init_logging,
    },
};

/// Ranks the nouns and adjectives used most often in a YouTube video's comments.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Video url or id
    video: String,

    /// Save the table as csv
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_CSV_PATH)]
    save: Option<PathBuf>,

    /// Print the table as json instead of drawing a chart
    #[arg(long)]
    json: bool,

    /// Count these categories as well, e.g. VERB
    #[arg(long, value_delimiter = ',')]
    include: Vec<GrammaticalCategory>,

    /// How many words to keep
    #[arg(long)]
    top: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    init_logging(&config.logging);
    if let Some(err) = config_error {
        warn!("failed to read config, using defaults: {}", err);
    }

    let mut analysis = config.analysis.clone();
    for category in args.include {
        analysis.allowed_categories = analysis.allowed_categories.with(category);
    }
    if let Some(top) = args.top {
        analysis.top_k = top;
    }

    let video = match VideoId::parse(&args.video) {
        Ok(video) => video,
        Err(err) => fail(err),
    };

    let youtube = match YouTube::new(&config.youtube) {
        Ok(youtube) => youtube,
        Err(err) => fail(err.into()),
    };
    let tagger = match build_tagger(analysis.tagger) {
        Ok(tagger) => tagger,
        Err(err) => fail(err),
    };

    info!("starting analysis of {}, this may take a while for large comment sections", video);
    let table = match analyze(&youtube, &*tagger, video.as_str(), &analysis).await {
        Ok(table) => table,
        Err(err) => fail(err),
    };

    info!("ranked {} words", table.len());
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", chart::render(&table, config.output.chart_width));
    }

    if let Some(path) = args.save.or_else(|| config.output.csv_path.as_ref().map(PathBuf::from)) {
        write_csv(&table, &path)?;
        info!("output was saved to {}", path.display());
    }

    Ok(())
}

fn build_tagger(kind: TaggerKind) -> Result<Box<dyn Tagger>, AnalysisError> {
    Ok(kind.build()?)
}

fn fail(err: AnalysisError) -> ! {
    error!("analysis failed: {}", err);
    eprintln!("{}", user_message(err.kind()));
    process::exit(1);
}

fn user_message(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::InvalidInput => "Please fill in a valid YouTube URL.",
        FailureKind::QuotaOrAuth => "YouTube refused the request. Check the API key and the daily quota.",
        FailureKind::Network => "Could not reach YouTube in time. Check the connection and try again.",
        FailureKind::Remote => "YouTube returned an unexpected response. Please try again later.",
        FailureKind::Internal => "Something went wrong while interpreting the results.",
    }
}
