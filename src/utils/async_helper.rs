use std::future::Future;
use std::pin::Pin;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

/// Type alias for async task results
pub type AsyncTaskResult<T, E> = Result<T, E>;

/// Type alias for boxed async tasks
pub type AsyncTask<T, E> =
    Pin<Box<dyn Future<Output = AsyncTaskResult<T, E>> + Send + 'static>>;

/// Spawns a background thread that runs an async task and sends the tagged result via a channel
///
/// The tag travels with the result so the receiver knows which request finished,
/// even when the runtime itself could not be started.
///
/// # Example
/// ```ignore
/// let (tx, rx) = std::sync::mpsc::channel();
/// spawn_and_send(
///     key,
///     move || Box::pin(async move { api::likes::toggle_like(&settings, &base, &id).await }),
///     tx,
/// );
/// // Later, on the UI thread: if let Ok((key, result)) = rx.try_recv() { ... }
/// ```
pub fn spawn_and_send<K, T, E, F>(
    tag: K,
    task_factory: F,
    tx: Sender<(K, AsyncTaskResult<T, E>)>,
) -> JoinHandle<()>
where
    K: Send + 'static,
    T: Send + 'static,
    E: From<std::io::Error> + Send + 'static,
    F: FnOnce() -> AsyncTask<T, E> + Send + 'static,
{
    std::thread::spawn(move || {
        let rt = match crate::utils::error_handling::create_runtime() {
            Ok(r) => r,
            Err(e) => {
                log::error!("[AsyncHelper] Failed to create runtime: {}", e);
                let _ = tx.send((tag, Err(E::from(e))));
                return;
            }
        };

        let result = rt.block_on(task_factory());
        if tx.send((tag, result)).is_err() {
            log::debug!("[AsyncHelper] Receiver dropped before task finished");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::LikeError;
    use std::sync::mpsc::channel;
    use std::time::Duration;

    #[test]
    fn result_arrives_with_its_tag() {
        let (tx, rx) = channel();
        let handle = spawn_and_send(
            7usize,
            || -> AsyncTask<u32, LikeError> {
                Box::pin(async {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    Ok(42)
                })
            },
            tx,
        );
        handle.join().unwrap();

        let (tag, result) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(tag, 7);
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    fn errors_are_forwarded() {
        let (tx, rx) = channel();
        spawn_and_send(
            "page",
            || -> AsyncTask<(), LikeError> {
                Box::pin(async { Err(LikeError::Rejected(None)) })
            },
            tx,
        );

        let (tag, result) = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(tag, "page");
        assert!(matches!(result, Err(LikeError::Rejected(None))));
    }

    #[test]
    fn dropped_receiver_does_not_panic() {
        let (tx, rx) = channel::<((), AsyncTaskResult<(), LikeError>)>();
        drop(rx);
        let handle = spawn_and_send((), || -> AsyncTask<(), LikeError> { Box::pin(async { Ok(()) }) }, tx);
        assert!(handle.join().is_ok());
    }
}
