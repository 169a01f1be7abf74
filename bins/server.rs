use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging() {
    // .env first so RUST_LOG / LOG_FORMAT from it take effect
    dotenv().ok();
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => common::utils::logging::init_logging_json(),
        _ => common::utils::logging::init_logging_default(),
    }
    info!(service = "brewhouse", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    init_logging();

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "brewhouse",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = configs::AppConfig::load_or_env()
        .ok()
        .and_then(|cfg| cfg.server.worker_threads);

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(
                service = "brewhouse",
                event = "runtime_build_failed",
                error = %e,
                "failed to build tokio runtime"
            );
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "brewhouse",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "brewhouse server starting"
    );

    rt.block_on(async move {
        let server_task = tokio::spawn(async move {
            if let Err(e) = server::run().await {
                error!(
                    service = "brewhouse",
                    event = "run_failed",
                    error = %e,
                    "server::run returned error"
                );
                Err(e)
            } else {
                Ok(())
            }
        });

        tokio::select! {
            res = server_task => {
                match res {
                    Ok(Ok(())) => {
                        info!(
                            service = "brewhouse",
                            event = "stop",
                            %service_id,
                            pid,
                            "server stopped normally"
                        );
                        std::process::ExitCode::SUCCESS
                    }
                    // already logged
                    Ok(Err(_)) => std::process::ExitCode::FAILURE,
                    Err(e) => {
                        error!(
                            service = "brewhouse",
                            event = "task_join_error",
                            error = %e,
                            "server task join error"
                        );
                        std::process::ExitCode::FAILURE
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                // recipes live in memory only; nothing to flush
                info!(
                    service = "brewhouse",
                    event = "shutdown_signal",
                    %service_id,
                    pid,
                    "received Ctrl+C, shutting down"
                );
                std::process::ExitCode::SUCCESS
            }
        }
    })
}
