use clap::Parser;
use course_etl::utils::{logger, validation::Validate};
use course_etl::{CliConfig, CourseEngine, CourseInput, CoursePipeline, OutputFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting course-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let format = config.format;

    // 建立輸入來源與管道
    let source = CourseInput::from_arg(&config.input);
    let pipeline = CoursePipeline::new(source, config);

    let engine = CourseEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Course plotted: horizontal={}, depth={}",
                report.horizontal,
                report.depth
            );
            // stdout 只輸出結果本身
            match format {
                OutputFormat::Plain => println!("{}", report.product),
                OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Course processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                course_etl::utils::error::ErrorSeverity::Low => 0,
                course_etl::utils::error::ErrorSeverity::Medium => 2,
                course_etl::utils::error::ErrorSeverity::High => 1,
                course_etl::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
