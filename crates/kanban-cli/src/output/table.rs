use kanban_core::TaskType;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// One table cell and the ANSI color code to paint it with.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    /// A board card: the record key, painted after its type.
    pub fn card(key: &str, kind: TaskType) -> Self {
        Self {
            text: key.to_string(),
            color: Some(style_code(kind.style())),
        }
    }
}

/// Render a simple aligned table for string rows. Status values are
/// colored when `options.color` is set.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let cells = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| Cell {
                    text: value.clone(),
                    color: status_code(value),
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    render_cells(headers, &cells, options)
}

/// Render an aligned table of pre-styled cells.
#[must_use]
pub fn render_cells(headers: &[&str], rows: &[Vec<Cell>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.text.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let cell = row.get(index).cloned().unwrap_or_default();
                    let text = truncate_text(&cell.text, *width);
                    let padded = pad(&text, *width);
                    match cell.color {
                        Some(code) if options.color => paint(&padded, code),
                        _ => padded,
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(value.chars().count());
    format!("{value}{}", " ".repeat(fill))
}

fn paint(value: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}

/// Terminal color for a board style name.
fn style_code(style: &str) -> &'static str {
    match style {
        "success" => "32",
        "info" => "36",
        _ => "37",
    }
}

fn status_code(value: &str) -> Option<&'static str> {
    match value {
        "Active" => Some("33"),
        "Complete" => Some("32"),
        "Discarded" => Some("31"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["key", "status", "description"];
        let rows = vec![
            vec!["T1".to_string(), "Open".to_string(), "short".to_string()],
            vec![
                "Marketing Q2".to_string(),
                "Complete".to_string(),
                "a much longer description".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("key"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].find("Open"), lines[3].find("Complete"));
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["key", "description"];
        let rows = vec![vec!["T1".to_string(), "x".repeat(80)]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn cards_are_painted_by_type() {
        let rows = vec![vec![
            Cell::card("E1", TaskType::Epic),
            Cell::card("T1", TaskType::Task),
            Cell::card("S1", TaskType::Subtask),
        ]];
        let table = render_cells(
            &["Draft", "Open", "Active"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[32mE1"));
        assert!(table.contains("\u{1b}[36mT1"));
        assert!(table.contains("\u{1b}[37mS1"));
    }

    #[test]
    fn no_color_leaves_text_plain() {
        let rows = vec![vec![Cell::card("E1", TaskType::Epic)]];
        let table = render_cells(&["Draft"], &rows, PLAIN);
        assert!(!table.contains('\u{1b}'));
    }

    #[test]
    fn status_values_get_colors() {
        assert_eq!(status_code("Complete"), Some("32"));
        assert_eq!(status_code("Draft"), None);
        assert_eq!(Cell::default().color, None);
    }
}
