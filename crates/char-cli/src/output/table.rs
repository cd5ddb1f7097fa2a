//! Aligned plain-text tables for `--format table`.

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Rows of string cells under fixed headers.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing trailing cells render as `-`.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn render(&self, options: TableOptions) -> String {
        let mut widths = self.natural_widths();
        fit_widths(&mut widths, options.max_width);

        let header_line = self
            .headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| pad(&truncate(header, *width), *width, false))
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        let divider = "-".repeat(header_line.chars().count());

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(header_line);
        lines.push(divider);
        for row in &self.rows {
            let cells = widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let text = truncate(row.get(index).map_or("-", String::as_str), *width);
                    let cell = pad(&text, *width, looks_numeric(&text));
                    if options.color {
                        colorize_badge(&cell, text.trim())
                    } else {
                        cell
                    }
                })
                .collect::<Vec<_>>();
            lines.push(cells.join(SEPARATOR).trim_end().to_string());
        }
        lines.join("\n")
    }

    fn natural_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .chain([header.chars().count(), MIN_COLUMN_WIDTH])
                    .max()
                    .unwrap_or(MIN_COLUMN_WIDTH)
            })
            .collect()
    }
}

/// Shrink the widest columns one character at a time until the row fits.
fn fit_widths(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN_WIDTH)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    if right_align {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

fn looks_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|ch| ch.is_ascii_digit())
}

/// Badge colors: strengths green, considerations and mixed yellow, actions
/// cyan, data issues red.
fn colorize_badge(cell: &str, value: &str) -> String {
    let code = match value {
        "strength" => "32",
        "consideration" | "mixed" => "33",
        "recommended_action" => "36",
        "missing_id" | "non_numeric_id" | "unmatched_topic" | "unknown_category"
        | "unknown_insight_type" | "duplicate_topic_summary" | "blank_project_id"
        | "blank_project_name" => "31",
        _ => return cell.to_string(),
    };
    format!("\u{1b}[{code}m{cell}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["id", "type", "name"]);
        table.push_row(vec!["7".into(), "strength".into(), "Permanence".into()]);
        table.push_row(vec![
            "1024".into(),
            "consideration".into(),
            "A much longer risk factor name".into(),
        ]);
        table
    }

    #[test]
    fn aligns_columns_under_headers() {
        let out = sample().render(TableOptions::default());
        let lines = out.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id      type"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].starts_with("     7  strength"));
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let out = sample().render(TableOptions {
            max_width: Some(40),
            color: false,
        });
        for line in out.lines() {
            assert!(line.chars().count() <= 40, "{line:?}");
        }
        assert!(out.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let mut table = Table::new(["a", "b"]);
        table.push_row(vec!["x".into()]);
        assert!(table.render(TableOptions::default()).lines().nth(2).unwrap().contains('-'));
    }

    #[test]
    fn color_wraps_known_badges_only() {
        let out = sample().render(TableOptions {
            max_width: None,
            color: true,
        });
        assert!(out.contains("\u{1b}[32mstrength"));
        assert!(!out.contains("\u{1b}[32mPermanence"));
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("Ñandú", 5), "Ñandú");
        assert_eq!(truncate("Ñandú-char", 5), "Ñand…");
    }
}
