use integration_tests::harness::{LogDir, access_line};
use logstat_core::pipeline::{PipelineSettings, analyze};
use pretty_assertions::assert_eq;

fn body() -> String {
    let mut body = String::new();
    for i in 0..200 {
        body.push_str(&access_line(
            &format!("/api/item/{}", i % 7),
            &format!("0.{:03}", i % 1000),
        ));
    }
    body.push_str("\"broken\n");
    body
}

#[test]
fn plain_gzip_and_brotli_agree() {
    // Arrange
    let dir = LogDir::new();
    let plain = dir.write_plain("access.log", &body());
    let gz = dir.write_gz("access.log.gz", &body());
    let br = dir.write_br("access.log.br", &body());
    let settings = PipelineSettings::default();

    // Act
    let plain = analyze(&plain, &settings).unwrap();
    let gz = analyze(&gz, &settings).unwrap();
    let br = analyze(&br, &settings).unwrap();

    // Assert
    assert_eq!(plain, gz);
    assert_eq!(plain, br);
    assert_eq!(plain.groups, 7);
    assert_eq!(plain.totals.total_records, 201);
    assert_eq!(plain.totals.malformed_count, 1);
}

#[test]
fn windows_line_endings_are_accepted() {
    let dir = LogDir::new();
    let crlf = body().replace('\n', "\r\n");
    let path = dir.write_plain("access.log", &crlf);

    let analysis = analyze(&path, &PipelineSettings::default()).unwrap();

    assert_eq!(analysis.totals.malformed_count, 1);
    assert_eq!(analysis.totals.total_records, 201);
}
