//! One-shot background fetch, polled from the UI thread.

use std::future::Future;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tokio::runtime::Builder;

use crate::api::FetchError;

pub(crate) struct FetchJob<T> {
    receiver: Option<Receiver<Result<T, FetchError>>>,
}

impl<T> FetchJob<T> {
    pub(crate) fn new(receiver: Receiver<Result<T, FetchError>>) -> Self {
        Self {
            receiver: Some(receiver),
        }
    }

    /// Returns `Some(result)` exactly once, when the worker has finished.
    pub(crate) fn poll(&mut self) -> Option<Result<T, FetchError>> {
        let rx = self.receiver.as_ref()?;
        match rx.try_recv() {
            Ok(res) => {
                self.receiver = None;
                Some(res)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                Some(Err(FetchError::WorkerGone))
            }
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.receiver.is_some()
    }
}

/// Run `builder()` on a current-thread tokio runtime in a detached worker.
pub(crate) fn spawn<T, FutBuilder, Fut>(builder: FutBuilder) -> FetchJob<T>
where
    T: Send + 'static,
    FutBuilder: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime.block_on(builder()),
            Err(e) => Err(FetchError::Runtime(e.to_string())),
        };
        let _ = tx.send(result);
    });
    FetchJob::new(rx)
}
