use clap::{CommandFactory, Parser};
use project_index::utils::{logger, validation::Validate};
use project_index::{CliConfig, IndexEngine, IndexError, LocalStorage};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            // 參數錯誤：usage 寫到 stderr，exit 1
            eprint!("{}", e.render());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let storage = LocalStorage::new(config.output.clone());
    let engine = IndexEngine::new(storage, config);

    match engine.run() {
        Ok(bytes) => tracing::info!("✅ Index written ({} bytes)", bytes),
        Err(e) => fail(&e),
    }
}

fn fail(e: &IndexError) -> ! {
    tracing::debug!(
        "❌ Index build failed (Category: {:?}, Severity: {:?})",
        e.category(),
        e.severity()
    );

    eprintln!("{}", e.user_friendly_message());
    if e.wants_usage() {
        eprintln!("{}", CliConfig::command().render_usage());
    }

    std::process::exit(e.exit_code());
}
