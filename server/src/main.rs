use crate::error::StackTrace;
use crate::handler::AppModule;
use error_stack::ResultExt;
use kernel::KernelError;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod controller;
mod error;
mod handler;
mod request;
mod response;
mod route;
mod view;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_FILTER: &str =
    "driver=debug,server=debug,bookshelf=debug,tower_http=debug,sqlx=info";

/// `RUST_LOG` from the environment or `.env`.
fn log_filter() -> String {
    dotenvy::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

fn port() -> error_stack::Result<u16, KernelError> {
    match dotenvy::var("SERVER_PORT") {
        Ok(port) => port
            .parse()
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| format!("SERVER_PORT is not a port number: {port}")),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(DEFAULT_PORT),
        Err(e) => Err(e)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to read SERVER_PORT"),
    }
}

#[tokio::main]
async fn main() -> Result<(), StackTrace> {
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_filter(tracing_subscriber::EnvFilter::new(log_filter()))
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG),
        )
        .init();

    let app = AppModule::new().await?;
    let router = route::router(app);

    let bind = SocketAddr::from(([0, 0, 0, 0], port()?));
    let tcp = TcpListener::bind(bind)
        .await
        .change_context_lazy(|| KernelError::Internal)
        .attach_printable_lazy(|| format!("Failed to listen on {bind}"))?;
    tracing::info!(%bind, "bookshelf listening");

    axum::serve(tcp, router.into_make_service())
        .await
        .change_context_lazy(|| KernelError::Internal)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use super::{log_filter, DEFAULT_LOG_FILTER};

    #[test]
    fn log_filter_prefers_rust_log() {
        std::env::set_var("RUST_LOG", "bookshelf=trace");
        assert_eq!(log_filter(), "bookshelf=trace");

        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter(), DEFAULT_LOG_FILTER);
    }
}
