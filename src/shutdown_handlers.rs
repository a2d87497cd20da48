use tracing::warn;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

use crate::error::AppResult;

/// Logs the signal and ends the process. In-flight requests are not drained.
pub fn terminate_process(signal_name: &'static str) {
    warn!(signal = signal_name, "Received signal, exiting");
    std::process::exit(0);
}

/// Registers handlers for interrupt, terminate, quit and abort, then calls
/// `hook` once with the name of the first signal delivered.
///
/// Registration happens before this returns, so signals raised afterwards
/// are never missed. Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns an error when a signal handler cannot be registered.
#[cfg(unix)]
pub fn install_signal_hook<F>(hook: F) -> AppResult<tokio::task::JoinHandle<()>>
where
    F: FnOnce(&'static str) + Send + 'static,
{
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut quit = signal(SignalKind::quit())?;
    let mut abort = signal(SignalKind::from_raw(libc::SIGABRT))?;

    Ok(tokio::spawn(async move {
        let signal_name = tokio::select! {
            _ = interrupt.recv() => "SIGINT",
            _ = terminate.recv() => "SIGTERM",
            _ = quit.recv() => "SIGQUIT",
            _ = abort.recv() => "SIGABRT",
        };
        hook(signal_name);
    }))
}

/// Calls `hook` on Ctrl+C, the only signal available off unix.
///
/// # Errors
///
/// Never fails; the signature matches the unix variant.
#[cfg(not(unix))]
pub fn install_signal_hook<F>(hook: F) -> AppResult<tokio::task::JoinHandle<()>>
where
    F: FnOnce(&'static str) + Send + 'static,
{
    Ok(tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            hook("SIGINT");
        }
    }))
}
