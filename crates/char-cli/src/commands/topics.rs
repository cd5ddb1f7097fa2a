use char_core::enums::Topic;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::{Table, output_with};

/// A row of the topic table.
#[derive(Debug, Serialize)]
struct TopicRow {
    slug: &'static str,
    title: &'static str,
    summary_label: &'static str,
    subtopic_label: &'static str,
}

/// Handle `charview topics`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = topic_rows();
    output_with(&rows, flags.format, |rows| {
        let mut table = Table::new(["slug", "title", "summary_label", "subtopic_label"]);
        for row in rows {
            table.push_row(vec![
                row.slug.into(),
                row.title.into(),
                row.summary_label.into(),
                row.subtopic_label.into(),
            ]);
        }
        table
    })
}

fn topic_rows() -> Vec<TopicRow> {
    Topic::ALL
        .into_iter()
        .map(|topic| TopicRow {
            slug: topic.slug(),
            title: topic.default_title(),
            summary_label: topic.summary_label(),
            subtopic_label: topic.subtopic_label(),
        })
        .collect()
}
