use anagram_groups::core::ConfigProvider;
use anagram_groups::utils::{logger, validation::Validate};
use anagram_groups::{AnagramEngine, AnagramPipeline, CliConfig, FileSource};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    // 參數數量不對時只印出用法，不讀取任何檔案
    if let Err(e) = config.validate() {
        if e.is_usage() {
            println!("{}", e);
        } else {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
        }
        std::process::exit(e.exit_code());
    }

    let source = FileSource::new(config.input_path());
    let mut engine = AnagramEngine::new(AnagramPipeline::new(source, config));

    // 先完整讀取與分組，最後一次輸出
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match engine.run(&mut out) {
        Ok(summary) => {
            tracing::info!(
                "✅ Printed {} groups from {} words",
                summary.groups,
                summary.words
            );
        }
        Err(e) => {
            tracing::debug!("Anagram grouping failed: {:?}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
