use crate::events::AppEvent;
use async_channel::Sender;
use std::io;
use std::path::PathBuf;
use std::thread;
use tokio::runtime::Runtime;

/// Socket server and config watcher on a Tokio runtime of their own. Both
/// only forward events; the slider itself stays on the caller's thread.
///
/// The thread only finishes if the runtime could not be started, and `tx`
/// is dropped with it, so the receiving side sees the channel close.
pub fn start_background_services(
    tx: Sender<AppEvent>,
    socket_path: PathBuf,
    config_path: PathBuf,
) -> thread::JoinHandle<io::Result<()>> {
    thread::spawn(move || {
        let rt = Runtime::new()?;

        rt.block_on(async {
            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::sys::server::run_server(socket_path, tx).await;
                });
            }

            {
                let tx = tx.clone();
                tokio::spawn(async move {
                    crate::config::run_async_watcher(config_path, tx).await;
                });
            }

            std::future::pending::<()>().await;
        });
        Ok(())
    })
}

/// Turns the end of the background thread into an error; it is never
/// expected to finish on its own.
pub fn join_services(handle: thread::JoinHandle<io::Result<()>>) -> anyhow::Result<()> {
    match handle.join() {
        Ok(Ok(())) => anyhow::bail!("Background services stopped"),
        Ok(Err(e)) => Err(anyhow::Error::new(e).context("Failed to start background services")),
        Err(_) => anyhow::bail!("Background services panicked"),
    }
}
