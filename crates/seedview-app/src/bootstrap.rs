use std::future::Future;
use std::sync::Arc;

use seedview_api::ApiServer;
use seedview_config::ServiceConfig;
use seedview_snapshot::{FileSnapshotReader, SnapshotSource};
use seedview_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig};
use tracing::{error, info};

use crate::error::{AppError, AppResult};

/// Dependencies required to bootstrap the service.
pub(crate) struct BootstrapDependencies {
    config: ServiceConfig,
    snapshots: Arc<dyn SnapshotSource>,
}

impl BootstrapDependencies {
    /// Construct production dependencies from the environment for the binary entrypoint.
    pub(crate) fn from_env() -> AppResult<Self> {
        let config =
            ServiceConfig::from_env().map_err(|err| AppError::config("config.from_env", err))?;
        Ok(Self::from_config(config))
    }

    pub(crate) fn from_config(config: ServiceConfig) -> Self {
        let snapshots: Arc<dyn SnapshotSource> =
            Arc::new(FileSnapshotReader::new(config.status_file.clone()));
        Self { config, snapshots }
    }
}

/// Entry point for the service boot sequence.
///
/// # Errors
///
/// Returns an error if configuration is invalid, logging cannot be installed,
/// or the listener cannot be bound.
pub async fn run_app() -> AppResult<()> {
    let dependencies = BootstrapDependencies::from_env()?;
    init_telemetry(&dependencies.config)?;
    let _context = GlobalContextGuard::new("bootstrap");
    run_app_with(dependencies, shutdown_signal()).await
}

fn init_telemetry(config: &ServiceConfig) -> AppResult<()> {
    let format = LogFormat::parse(config.log_format.as_deref())
        .map_err(|err| AppError::telemetry("telemetry.format", err))?;
    let logging = LoggingConfig {
        level: &config.log_level,
        format,
        ..LoggingConfig::default()
    };
    seedview_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))
}

/// Serve until `shutdown` resolves, using already-constructed dependencies.
pub(crate) async fn run_app_with<F>(
    dependencies: BootstrapDependencies,
    shutdown: F,
) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let BootstrapDependencies { config, snapshots } = dependencies;
    let addr = config.socket_addr();

    info!(
        addr = %addr,
        status_file = %snapshots.location(),
        "Seedview bootstrap starting"
    );

    ApiServer::new(snapshots)
        .serve_with_shutdown(addr, shutdown)
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))?;

    info!("Seedview stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedview_api::ApiServerError;
    use seedview_test_support::ArtifactDir;
    use std::net::{IpAddr, Ipv4Addr, TcpListener};
    use std::path::PathBuf;

    fn loopback_config(status_file: PathBuf, port: u16) -> ServiceConfig {
        ServiceConfig {
            status_file,
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
            ..ServiceConfig::default()
        }
    }

    #[test]
    fn dependencies_point_the_reader_at_the_configured_file() -> std::io::Result<()> {
        let artifact = ArtifactDir::new()?;
        let config = loopback_config(artifact.path().to_path_buf(), 8080);
        let dependencies = BootstrapDependencies::from_config(config);
        assert_eq!(
            dependencies.snapshots.location(),
            artifact.path().display().to_string()
        );
        Ok(())
    }

    #[tokio::test]
    async fn run_app_with_returns_after_shutdown() -> AppResult<()> {
        let dependencies = BootstrapDependencies::from_config(loopback_config(
            PathBuf::from("absent.json"),
            0,
        ));
        run_app_with(dependencies, async {}).await
    }

    #[tokio::test]
    async fn occupied_port_surfaces_as_api_server_error() -> std::io::Result<()> {
        let occupied = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))?;
        let port = occupied.local_addr()?.port();
        let dependencies =
            BootstrapDependencies::from_config(loopback_config(PathBuf::from("absent.json"), port));

        let result = run_app_with(dependencies, async {}).await;
        assert!(matches!(
            result,
            Err(AppError::ApiServer {
                operation: "api_server.serve",
                source: ApiServerError::Bind { .. },
            })
        ));
        Ok(())
    }

    #[test]
    fn unsupported_log_format_is_a_telemetry_error() {
        let config = ServiceConfig {
            log_format: Some("xml".to_string()),
            ..ServiceConfig::default()
        };
        assert!(matches!(
            init_telemetry(&config),
            Err(AppError::Telemetry {
                operation: "telemetry.format",
                ..
            })
        ));
    }
}
