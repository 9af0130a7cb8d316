use clap::Parser;
use cluster_profile::app::{self, RunOutput};
use cluster_profile::utils::logger;
use cluster_profile::CliConfig;

fn main() {
    let mut config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting cluster-profile");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入配置、驗證參數、建置拓撲並輸出
    match app::run(&mut config) {
        Ok(RunOutput::Stdout(rendered)) => println!("{}", rendered),
        Ok(RunOutput::Written(path)) => {
            tracing::info!("✅ Profile generated successfully!");
            println!("📁 Description saved to: {}", path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Profile generation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = e.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
