use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use consent_api::config::ApiConfig;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let app = consent_api::app(&config);

    if config.lambda {
        tracing::info!("starting under the Lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, cors_any = config.cors_any, "consent api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
