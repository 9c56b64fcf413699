//! Web server

use crate::cli;

use std::{net::SocketAddr, path::PathBuf, process::exit, str::FromStr, time::Duration};

use axum::ServiceExt;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use expanduser::expanduser;
use tokio::signal;
use tracing::info;

/// Serve the dashboard API.
///
/// Binds to the configured host and port, optionally with TLS, and serves
/// until a shutdown signal arrives.
pub async fn serve(args: &cli::CommandLineArgs, service: crate::app::Service) {
    let addr = SocketAddr::from_str(&format!("{}:{}", args.host, args.port))
        .expect("invalid host name, IP address or port number");

    // Catch ctrl+c and try to shutdown gracefully
    let handle = Handle::new();
    tokio::spawn(shutdown_signal(
        handle.clone(),
        args.graceful_shutdown_timeout,
    ));

    info!(%addr, https = args.https, "starting dashboard server");
    if args.https {
        let tls_config = tls_config(&args.cert_file, &args.key_file).await;
        axum_server::bind_rustls(addr, tls_config)
            .handle(handle)
            .serve(service.into_make_service())
            .await
            .unwrap();
    } else {
        axum_server::bind(addr)
            .handle(handle)
            .serve(service.into_make_service())
            .await
            .unwrap();
    }
}

/// Build the rustls configuration from the certificate and key file paths.
///
/// Exits the process with a diagnostic if either file is missing, since the
/// server cannot meaningfully run without them.
async fn tls_config(cert_file: &str, key_file: &str) -> RustlsConfig {
    let cert_file = resolve_tls_path(cert_file, "TLS certificate");
    let key_file = resolve_tls_path(key_file, "TLS key");
    RustlsConfig::from_pem_file(cert_file, key_file)
        .await
        .expect("failed to load TLS certificate files")
}

/// Expand `~` in a TLS file path and check that the file exists.
fn resolve_tls_path(path: &str, description: &str) -> PathBuf {
    let path = expanduser(path)
        .expect("failed to expand ~ to user name; provide an absolute path instead");
    if !path.exists() {
        eprintln!("{} expected at '{}' but not found.", description, path.display());
        exit(1)
    }
    path.canonicalize()
        .expect("failed to determine absolute TLS file path")
}

/// Graceful shutdown handler
///
/// Installs signal handlers to catch Ctrl-C or SIGTERM and trigger a graceful shutdown.
async fn shutdown_signal(handle: Handle, timeout: u64) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("signal received, starting graceful shutdown");
    handle.graceful_shutdown(Some(Duration::from_secs(timeout)));
}
