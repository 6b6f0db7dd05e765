use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        eprintln!("tracing init failed: {e}");
    }

    let port = std::env::var("PORT").unwrap_or_else(|_| "5940".to_string());
    let instance = match std::env::var("INSTANCE_UUID") {
        Ok(raw) => Uuid::parse_str(&raw)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?,
        Err(_) => Uuid::new_v4(),
    };

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, %instance, "listening");
    mock_server::run(listener, instance).await
}
