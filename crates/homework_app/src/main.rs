mod logging;

use anyhow::Context;
use engine_logging::{engine_critical, engine_info};
use homework_engine::{
    BotConfig, FetchSettings, Poller, ReqwestStatusSource, TelegramNotifier,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::initialize(logging::LogDestination::from_env());

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            engine_critical!("configuration is incomplete: {}", err);
            return Err(err).context("cannot start without complete configuration");
        }
    };

    let source = ReqwestStatusSource::new(FetchSettings::from_config(&config))
        .context("build status client")?;
    let notifier = TelegramNotifier::new(&config);
    let start_cursor = chrono::Utc::now().timestamp();
    let poller = Poller::new(&config, Box::new(source), Box::new(notifier), start_cursor)?;

    engine_info!(
        "polling {} every {}s from {}",
        config.endpoint,
        config.retry_period.as_secs(),
        start_cursor
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("tokio runtime")?;
    runtime.block_on(poller.run());
    Ok(())
}
