use crate::core::{CourseReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct CourseEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> CourseEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<CourseReport> {
        tracing::info!("Reading course input...");
        let lines = self.pipeline.extract().await?;
        tracing::info!("Read {} lines", lines.len());
        self.monitor.log_stats("extract");

        tracing::info!("Parsing commands...");
        let transformed = self.pipeline.transform(lines).await?;
        tracing::info!("Parsed {} commands", transformed.commands.len());
        self.monitor.log_stats("transform");

        tracing::info!("Plotting course...");
        let report = self.pipeline.load(transformed).await?;
        tracing::info!(
            "Course plotted: horizontal={}, depth={}, product={}",
            report.horizontal,
            report.depth,
            report.product
        );
        self.monitor.log_stats("load");
        self.monitor.log_final_stats();

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, TransformResult};
    use crate::domain::ports::Pipeline;
    use crate::utils::error::{CourseError, Result};
    use async_trait::async_trait;

    struct FixedPipeline {
        lines: Vec<String>,
        fail_extract: bool,
    }

    #[async_trait]
    impl Pipeline for FixedPipeline {
        async fn extract(&self) -> Result<Vec<String>> {
            if self.fail_extract {
                return Err(CourseError::IoError(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "stream broke",
                )));
            }
            Ok(self.lines.clone())
        }

        async fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
            let commands = lines
                .iter()
                .map(|line| match line.split_whitespace().next() {
                    Some("forward") => Command::Forward(1),
                    Some("down") => Command::Down(1),
                    Some("up") => Command::Up(1),
                    _ => Command::Unknown,
                })
                .collect::<Vec<_>>();
            let lines_read = lines.len();
            Ok(TransformResult {
                commands,
                lines_read,
            })
        }

        async fn load(&self, result: TransformResult) -> Result<CourseReport> {
            let mut position = crate::domain::model::Position::default();
            for &command in &result.commands {
                position.apply(command);
            }
            Ok(CourseReport {
                horizontal: position.horizontal,
                depth: position.depth,
                product: position.product(),
                lines_read: result.lines_read,
                commands_applied: result.commands.len(),
                lines_skipped: 0,
            })
        }
    }

    #[tokio::test]
    async fn engine_runs_all_three_stages() {
        let pipeline = FixedPipeline {
            lines: vec!["forward 1".into(), "down 1".into(), "forward 1".into()],
            fail_extract: false,
        };
        let engine = CourseEngine::new(pipeline);
        let report = engine.run().await.unwrap();
        assert_eq!(report.horizontal, 2);
        assert_eq!(report.depth, 1);
        assert_eq!(report.product, 2);
    }

    #[tokio::test]
    async fn engine_propagates_extract_failure() {
        let pipeline = FixedPipeline {
            lines: vec![],
            fail_extract: true,
        };
        let engine = CourseEngine::new(pipeline);
        assert!(matches!(
            engine.run().await,
            Err(CourseError::IoError(_))
        ));
    }
}
