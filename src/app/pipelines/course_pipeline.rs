use crate::core::{
    Command, ConfigProvider, CourseReport, Direction, InputSource, Pipeline, TransformResult,
};
use crate::domain::model::{ParsePolicy, Position};
use crate::utils::error::{CourseError, Result};

pub struct CoursePipeline<S: InputSource, C: ConfigProvider> {
    pub(crate) source: S,
    pub(crate) config: C,
}

impl<S: InputSource, C: ConfigProvider> CoursePipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    /// Resolves the magnitude field under the configured parse policy.
    /// `Ok(None)` means the line contributes nothing.
    fn resolve_magnitude(
        &self,
        line_number: usize,
        line: &str,
        raw: Option<&str>,
    ) -> Result<Option<i64>> {
        let policy = self.config.parse_policy();

        let raw = match raw {
            Some(raw) => raw,
            // 缺少數值欄位,視為格式錯誤的行
            None => {
                if policy == ParsePolicy::Abort {
                    return Err(CourseError::ParseError {
                        line_number,
                        line: line.to_string(),
                        reason: "missing magnitude field".to_string(),
                    });
                }
                tracing::warn!("Line {}: missing magnitude field, skipping", line_number);
                return Ok(None);
            }
        };

        match raw.parse::<i64>() {
            Ok(magnitude) => Ok(Some(magnitude)),
            Err(e) => match policy {
                ParsePolicy::Zero => {
                    tracing::warn!(
                        "Line {}: magnitude {:?} is not an integer, counting as 0",
                        line_number,
                        raw
                    );
                    Ok(Some(0))
                }
                ParsePolicy::Skip => {
                    tracing::warn!(
                        "Line {}: magnitude {:?} is not an integer, skipping line",
                        line_number,
                        raw
                    );
                    Ok(None)
                }
                ParsePolicy::Abort => Err(CourseError::ParseError {
                    line_number,
                    line: line.to_string(),
                    reason: format!("invalid magnitude {:?}: {}", raw, e),
                }),
            },
        }
    }
}

#[async_trait::async_trait]
impl<S: InputSource, C: ConfigProvider> Pipeline for CoursePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading course from: {}", self.config.input_path());
        let lines = self.source.read_lines().await?;
        tracing::debug!("Input exhausted after {} lines", lines.len());
        Ok(lines)
    }

    async fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        let lines_read = lines.len();
        let mut commands = Vec::with_capacity(lines_read);

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            let mut fields = line.split_whitespace();

            // 第一個欄位的第一個字元決定方向
            let direction = match fields.next().and_then(Direction::from_token) {
                Some(direction) => direction,
                None => {
                    tracing::debug!("Line {}: unrecognized command {:?}", line_number, line);
                    commands.push(Command::Unknown);
                    continue;
                }
            };

            match self.resolve_magnitude(line_number, line, fields.next())? {
                Some(magnitude) => commands.push(Command::new(direction, magnitude)),
                None => commands.push(Command::Unknown),
            }
        }

        Ok(TransformResult {
            commands,
            lines_read,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<CourseReport> {
        let mut position = Position::default();
        let mut commands_applied = 0;

        for &command in &result.commands {
            if command != Command::Unknown {
                commands_applied += 1;
            }
            position.apply(command);
        }

        Ok(CourseReport {
            horizontal: position.horizontal,
            depth: position.depth,
            product: position.product(),
            lines_read: result.lines_read,
            commands_applied,
            lines_skipped: result.lines_read - commands_applied,
        })
    }
}
