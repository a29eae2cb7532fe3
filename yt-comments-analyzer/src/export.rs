use {
    std::path::Path,
    anyhow::{Context, Result},
    yt_comments_core::ranking::FrequencyTable,
};

pub const DEFAULT_CSV_PATH: &str = "output comment section.csv";

pub fn write_csv(table: &FrequencyTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    if table.is_empty() {
        writer.write_record(["word", "count"])?;
    }
    for entry in table.entries() {
        writer.serialize(entry)?;
    }

    writer.flush()?;
    Ok(())
}
