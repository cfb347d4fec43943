//! Handmade storefront server.
//!
//! Serves the static FAQ and terms pages, the post-payment order
//! confirmation page, and two proxy routes in front of the Khalti payment
//! gateway:
//!
//! - `POST /api/payments/khalti/initiate` forwards the body untouched
//! - `POST /api/payments/khalti/lookup` forwards only `{ "pidx": ... }`
//!
//! Both relay the gateway's status code and JSON body as-is. The gateway
//! secret is read once at start-up from `KHALTI_SECRET_KEY`.
//!
//! # Running
//!
//! ```sh
//! KHALTI_SECRET_KEY=... RUST_LOG=info cargo run -p storefront_server
//! ```
//!
//! Settings live in the platform config directory (`handmade-storefront`)
//! or in the file named by `STOREFRONT_CONFIG`. The default provider is the
//! in-process mock, so the server runs without Khalti credentials.

use std::{sync::Arc, time::Duration};

use anyhow::{bail, Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use gateway::{
    khalti::{KhaltiClient, SecretKey},
    mock::MockGateway,
    PaymentGateway,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

pub mod audit;
pub mod error;
pub mod routes;
pub mod state;
pub mod templates;

use audit::AuditLog;
use config::{AppConfig, ProviderConfig, KHALTI_SECRET_VAR};
use routes::{pages, payments};
use state::AppState;

/// Picks the payment gateway named in the config.
pub fn create_gateway(provider: &ProviderConfig) -> Result<Arc<dyn PaymentGateway>> {
    match provider.kind.as_str() {
        "khalti" => {
            let secret = config::get_secret(KHALTI_SECRET_VAR)
                .context("Khalti provider selected but no secret key is available")?;

            info!(base_url = %provider.base_url, timeout = ?provider.timeout(), "Using Khalti gateway");
            let client = KhaltiClient::new(
                provider.base_url.clone(),
                SecretKey::new(secret),
                provider.timeout(),
            )?;
            Ok(client)
        }
        "mock" => {
            info!("Using mock payment gateway");
            Ok(MockGateway::new())
        }
        other => bail!("Unknown payment provider: {other}"),
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let api = Router::new()
        .route("/api/payments/khalti/initiate", post(payments::initiate_handler))
        .route("/api/payments/khalti/lookup", post(payments::lookup_handler))
        .layer(cors);

    Router::new()
        .merge(api)
        .route("/faq", get(pages::faq_handler))
        .route("/terms", get(pages::terms_handler))
        .route(
            "/order/confirmation",
            get(pages::confirmation_handler).post(pages::confirmation_handler),
        )
        .route("/health", get(pages::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(cfg: AppConfig) -> Result<()> {
    let gateway = create_gateway(&cfg.provider)?;
    let audit = cfg.audit.path.map(AuditLog::new);
    if let Some(log) = &audit {
        info!(path = %log.path().display(), "Payment audit trail enabled");
    }

    let app = create_router(AppState::new(gateway, audit));

    let address = format!("{}:{}", cfg.server.host, cfg.server.port);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "Failed to install terminate handler");
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
