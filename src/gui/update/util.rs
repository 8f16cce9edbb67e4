//! gui/update/util.rs
use iced::futures::channel::oneshot;

/// Run a blocking, fallible function on a background thread and await the result.
///
/// Avoids repeating the oneshot + thread boilerplate for every
/// “do work off-thread, then send Message::Finished(Result<...>)” case.
pub(crate) async fn spawn_blocking<T>(
    f: impl FnOnce() -> Result<T, String> + Send + 'static,
) -> Result<T, String>
where
    T: Send + 'static,
{
    let (tx, rx) = oneshot::channel::<Result<T, String>>();

    std::thread::spawn(move || {
        let _ = tx.send(f());
    });

    rx.await
        .unwrap_or_else(|_| Err("background worker dropped without returning".to_string()))
}
