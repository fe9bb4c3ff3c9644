//! Page host for the Demo ATS front-end.
//!
//! Serves the Leptos SSR shell and hydration assets. The professionals REST
//! API lives elsewhere; the browser talks to it directly.

mod routes;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port = parse_port(std::env::var("PORT").ok().as_deref())?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "ats page host listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ServerError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
