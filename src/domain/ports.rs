use crate::domain::model::{CourseReport, ParsePolicy, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait InputSource: Send + Sync {
    /// Drains the source into memory. The stream is finite and not
    /// restartable; a read failure mid-stream fails the whole call.
    fn read_lines(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn parse_policy(&self) -> ParsePolicy;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, lines: Vec<String>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<CourseReport>;
}
