use crate::report::{ReportRow, render_table};
use crate::stats::PipelineTotals;

fn totals() -> PipelineTotals {
    PipelineTotals {
        total_records: 4,
        total_time: 4.0,
        malformed_count: 1,
        unparsed_path_count: 0,
    }
}

#[test]
fn renders_summary_and_rows() {
    let rows = vec![ReportRow {
        url: "/a".to_string(),
        count: 2,
        count_perc: 2.0 / 3.0,
        time_sum: 2.0,
        time_max: 1.5,
        time_avg: 1.0,
        time_med: 1.0,
        time_perc: 0.5,
    }];

    let out = render_table(&rows, &totals(), false);

    assert!(out.starts_with("lines: 4 | well-formed: 3 | malformed: 1"));
    assert!(out.contains("url"));
    assert!(out.contains("time_med"));
    let line = out.lines().last().unwrap();
    assert!(line.starts_with("/a "));
    assert!(line.contains("66.67%"));
    assert!(line.contains("50.00%"));
    assert!(line.contains("2.000"));
}

#[test]
fn renders_placeholder_for_empty_table() {
    let out = render_table(&[], &totals(), false);
    assert!(out.ends_with("<no rows>\n"));
}

#[test]
fn long_urls_are_truncated() {
    let rows = vec![ReportRow {
        url: format!("/{}", "x".repeat(200)),
        count: 1,
        count_perc: 1.0,
        time_sum: 1.0,
        time_max: 1.0,
        time_avg: 1.0,
        time_med: 1.0,
        time_perc: 1.0,
    }];

    let out = render_table(&rows, &totals(), false);

    let line = out.lines().last().unwrap();
    assert!(line.contains('…'));
    assert!(!line.contains(&"x".repeat(100)));
}
