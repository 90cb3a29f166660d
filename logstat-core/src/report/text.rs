use crate::report::row::ReportRow;
use crate::stats::PipelineTotals;
use owo_colors::OwoColorize;

const URL_WIDTH: usize = 48;

/// Fixed-width table for terminals.
pub fn render_table(rows: &[ReportRow], totals: &PipelineTotals, color: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "lines: {} | well-formed: {} | malformed: {} | unparsed requests: {} | total time: {:.3}s\n\n",
        totals.total_records,
        totals.well_formed(),
        totals.malformed_count,
        totals.unparsed_path_count,
        totals.total_time
    ));

    if rows.is_empty() {
        out.push_str("<no rows>\n");
        return out;
    }

    let header = format!(
        "{:<URL_WIDTH$} {:>8} {:>7} {:>10} {:>9} {:>9} {:>9} {:>7}",
        "url", "count", "count%", "time_sum", "time_max", "time_avg", "time_med", "time%"
    );
    if color {
        out.push_str(&header.bold().to_string());
    } else {
        out.push_str(&header);
    }
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<URL_WIDTH$} {:>8} {:>6.2}% {:>10.3} {:>9.3} {:>9.3} {:>9.3} {:>6.2}%\n",
            truncate_url(&row.url),
            row.count,
            row.count_perc * 100.0,
            row.time_sum,
            row.time_max,
            row.time_avg,
            row.time_med,
            row.time_perc * 100.0
        ));
    }

    out
}

fn truncate_url(url: &str) -> String {
    if url.chars().count() <= URL_WIDTH {
        return url.to_string();
    }

    let mut short: String = url.chars().take(URL_WIDTH - 1).collect();
    short.push('…');
    short
}
