use std::future::Future;

use poll_promise::Promise;

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Result, std::sync::Arc, tokio::runtime::Runtime};

/// `Send + Sync` on native, nothing on the web (where futures are single-threaded).
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync + ?Sized> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T: ?Sized> MaybeSend for T {}

/// Runs network futures off the UI thread.
/// Native: a small shared tokio runtime. Web: the browser's microtask queue.
#[derive(Clone)]
pub struct TaskRunner {
    #[cfg(not(target_arch = "wasm32"))]
    runtime: Arc<Runtime>,
}

#[cfg(not(target_arch = "wasm32"))]
impl TaskRunner {
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("coin-watch-io")
            .enable_all()
            .build()?;
        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.runtime.spawn(task);
    }

    /// Spawn `task` and hand back a promise the UI can poll each frame.
    pub fn spawn_promise<T, F>(&self, task: F) -> Promise<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        let (sender, promise) = Promise::new();
        self.spawn(async move {
            sender.send(task.await);
        });
        promise
    }
}

#[cfg(target_arch = "wasm32")]
impl TaskRunner {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {})
    }

    pub fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(task);
    }

    pub fn spawn_promise<T, F>(&self, task: F) -> Promise<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + 'static,
    {
        let (sender, promise) = Promise::new();
        self.spawn(async move {
            sender.send(task.await);
        });
        promise
    }
}
