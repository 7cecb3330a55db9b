use anyhow::Result;
use schedulist::{config::Config, logger::Logger, ui};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Error: invalid configuration: {:#}", e);
            eprintln!("\n💡 Run `schedulist --generate-config` to write a fresh default file.");
            return Ok(());
        }
    };

    let logger = Logger::from_config(&config.logging)?;
    logger.install()?;

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
