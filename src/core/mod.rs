pub mod engine;

pub use crate::domain::model::{Command, CourseReport, Direction, TransformResult};
pub use crate::domain::ports::{ConfigProvider, InputSource, Pipeline};
pub use crate::utils::error::Result;
