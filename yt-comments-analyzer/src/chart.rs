use yt_comments_core::ranking::FrequencyTable;

pub const TITLE: &str = "Frequency of words in comment section";

/// Horizontal bar chart, one row per word in table order.
pub fn render(table: &FrequencyTable, width: usize) -> String {
    let mut out = format!("{}\n\n", TITLE);

    if table.is_empty() {
        out.push_str("no nouns or adjectives found in the comments\n");
        return out;
    }

    let width = width.max(1) as u64;
    let max_count = table.max_count().max(1);
    let label_width = table.entries().iter()
        .map(|entry| entry.word.chars().count())
        .max()
        .unwrap_or(0);

    for entry in table.entries() {
        let bar_length = ((entry.count * width) / max_count).max(1) as usize;
        let padding = label_width - entry.word.chars().count();

        out.push_str(&format!(
            "{}{} | {} {}\n",
            " ".repeat(padding),
            entry.word,
            "█".repeat(bar_length),
            entry.count,
        ));
    }

    out
}
