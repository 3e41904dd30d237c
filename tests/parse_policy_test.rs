use course_etl::{
    CliConfig, CourseError, CourseEngine, CourseInput, CoursePipeline, CourseReport, OutputFormat,
    ParsePolicy,
};
use std::io::Write;
use tempfile::NamedTempFile;

async fn run_with_policy(
    lines: &[&str],
    policy: ParsePolicy,
) -> course_etl::Result<CourseReport> {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = CliConfig {
        input: path.clone(),
        format: OutputFormat::Plain,
        on_parse_error: policy,
        verbose: false,
        monitor: false,
    };

    let pipeline = CoursePipeline::new(CourseInput::from_arg(&path), config);
    CourseEngine::new(pipeline).run().await
}

#[tokio::test]
async fn zero_policy_preserves_legacy_fallback() {
    // "forward five" 視為 forward 0
    let report = run_with_policy(&["forward five", "down 5", "forward 8"], ParsePolicy::Zero)
        .await
        .unwrap();
    assert_eq!(report.horizontal, 8);
    assert_eq!(report.depth, 5);
    assert_eq!(report.product, 40);
    assert_eq!(report.commands_applied, 3);
}

#[tokio::test]
async fn skip_policy_drops_malformed_lines() {
    let report = run_with_policy(&["forward five", "down 5", "forward 8"], ParsePolicy::Skip)
        .await
        .unwrap();
    assert_eq!(report.product, 40);
    assert_eq!(report.commands_applied, 2);
    assert_eq!(report.lines_skipped, 1);
}

#[tokio::test]
async fn abort_policy_surfaces_a_parse_error() {
    let result = run_with_policy(&["forward 1", "down five"], ParsePolicy::Abort).await;
    match result {
        Err(CourseError::ParseError {
            line_number, line, ..
        }) => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "down five");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[tokio::test]
async fn missing_magnitude_is_skipped_by_default() {
    let report = run_with_policy(&["forward", "down 5", "forward 8"], ParsePolicy::Zero)
        .await
        .unwrap();
    assert_eq!(report.horizontal, 8);
    assert_eq!(report.depth, 5);
    assert_eq!(report.lines_skipped, 1);
}

#[tokio::test]
async fn json_report_round_trips() -> anyhow::Result<()> {
    let report = run_with_policy(&["forward 5", "down 5", "forward 8"], ParsePolicy::Zero).await?;

    let rendered = serde_json::to_string(&report)?;
    let value: serde_json::Value = serde_json::from_str(&rendered)?;
    assert_eq!(value["horizontal"], 13);
    assert_eq!(value["depth"], 5);
    assert_eq!(value["product"], 65);
    assert_eq!(value["lines_read"], 3);

    let parsed: CourseReport = serde_json::from_str(&rendered)?;
    assert_eq!(parsed.product, report.product);
    Ok(())
}
