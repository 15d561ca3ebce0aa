use anyhow::Error;
use tokio::signal;

use health_checker::{app::SchedulerBuilder, config::get_health_checker_settings};
use telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let subscriber = get_subscriber(String::from("health-checker"), String::from("info"));

    // Initialize tracing subscriber
    init_subscriber(subscriber)?;

    let settings = get_health_checker_settings()?;
    let scheduler = SchedulerBuilder::new(settings.clone()).build()?;

    tracing::info!(
        "Checking {} every {:?}",
        settings.get_api_url(),
        settings.get_interval()
    );

    scheduler.run_until(shutdown_signal()).await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Unable to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Unable to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
