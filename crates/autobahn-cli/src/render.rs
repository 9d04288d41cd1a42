//! Plain-text rendering of a load report: a paginated table plus expandable
//! detail rows. Pagination state lives here, derived from each fresh report.

use autobahn_api::RoadSummary;

pub const DEFAULT_PAGE_SIZE: usize = 10;

const MAX_CELL_WIDTH: usize = 40;

const HEADERS: [&str; 7] = [
    "Road",
    "Roadworks",
    "Direction",
    "Parking lorry",
    "Warnings",
    "Closure",
    "Charging station",
];

/// One page of summaries.
#[derive(Debug)]
pub struct PageView<'a> {
    pub rows: &'a [RoadSummary],
    /// 1-based, clamped to `1..=page_count`.
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Slices out page `page` (1-based) of `summaries`.
///
/// Out-of-range pages clamp to the last page; an empty report has one empty page.
pub fn paginate(summaries: &[RoadSummary], page: usize, page_size: usize) -> PageView<'_> {
    let page_size = page_size.max(1);
    let total = summaries.len();
    let page_count = total.div_ceil(page_size).max(1);
    let page = page.clamp(1, page_count);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);
    PageView {
        rows: &summaries[start..end],
        page,
        page_count,
        total,
    }
}

pub fn render_table(view: &PageView<'_>) -> String {
    let header = HEADERS.map(str::to_owned);
    let rows: Vec<[String; 7]> = view.rows.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let separator: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&separator.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

pub fn render_footer(view: &PageView<'_>, failed_roads: usize) -> String {
    let mut footer = format!(
        "Page {} of {} ({} roads)",
        view.page, view.page_count, view.total
    );
    if failed_roads > 0 {
        footer.push_str(&format!(", {failed_roads} failed to load"));
    }
    footer
}

/// Full, multi-line view of one road: what the table truncates.
pub fn render_details(summary: &RoadSummary) -> String {
    let mut out = format!("{}\n", summary.name);
    push_detail(&mut out, "Roadworks", summary.roadworks.as_deref());
    push_detail(&mut out, "Direction", summary.direction.as_deref());
    push_detail(&mut out, "Parking lorry", summary.parking_lorry.as_deref());

    out.push_str("  Warnings:\n");
    if summary.warnings.is_empty() {
        out.push_str("    -\n");
    }
    for warning in &summary.warnings {
        out.push_str(&format!("    - {}\n", single_line(warning)));
    }

    push_detail(&mut out, "Closure", summary.closure.as_deref());
    push_detail(&mut out, "Charging station", summary.charging_station.as_deref());
    out
}

fn push_detail(out: &mut String, label: &str, value: Option<&str>) {
    out.push_str(&format!("  {label}:\n"));
    match value {
        Some(text) => {
            for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
                out.push_str(&format!("    {line}\n"));
            }
        }
        None => out.push_str("    -\n"),
    }
}

fn push_line(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

fn row_cells(summary: &RoadSummary) -> [String; 7] {
    [
        summary.name.clone(),
        cell(summary.roadworks.as_deref()),
        cell(summary.direction.as_deref()),
        cell(summary.parking_lorry.as_deref()),
        warnings_cell(&summary.warnings),
        cell(summary.closure.as_deref()),
        cell(summary.charging_station.as_deref()),
    ]
}

fn cell(value: Option<&str>) -> String {
    value
        .map(|v| truncate(&single_line(v), MAX_CELL_WIDTH))
        .unwrap_or_default()
}

fn warnings_cell(warnings: &[String]) -> String {
    match warnings {
        [] => String::new(),
        [only] => truncate(&single_line(only), MAX_CELL_WIDTH),
        [first, rest @ ..] => {
            let suffix = format!(" (+{} more)", rest.len());
            let room = MAX_CELL_WIDTH.saturating_sub(suffix.chars().count());
            format!("{}{suffix}", truncate(&single_line(first), room))
        }
    }
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut short: String = text.chars().take(max.saturating_sub(1)).collect();
    short.push('…');
    short
}
