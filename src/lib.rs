pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::CourseInput;

pub use app::pipelines::course_pipeline::CoursePipeline;
pub use core::engine::CourseEngine;
pub use domain::model::{Command, CourseReport, Direction, OutputFormat, ParsePolicy, Position};
pub use utils::error::{CourseError, Result};
