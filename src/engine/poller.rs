use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};

use eframe::egui::Context;

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::{
    data::{QuoteService, TaskRunner},
    engine::{PriceRequest, TickOutcome},
    utils::tick_label_now,
};

/// Fetch the prices for one tick and package the result for the controller.
pub async fn fetch_tick(service: &dyn QuoteService, request: PriceRequest) -> TickOutcome {
    let prices = service
        .fetch_prices(&request.symbols)
        .await
        .map(|snapshot| snapshot.prices_for(&request.symbols));
    TickOutcome {
        session: request.session,
        label: tick_label_now(),
        prices,
    }
}

/// Issues tick fetches on the task runner and collects their outcomes for the UI thread.
pub struct PricePoller {
    service: Arc<dyn QuoteService>,
    runner: TaskRunner,
    tx: Sender<TickOutcome>,
    rx: Receiver<TickOutcome>,
    repaint: Option<Context>,
}

impl PricePoller {
    pub fn new(service: Arc<dyn QuoteService>, runner: TaskRunner) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            service,
            runner,
            tx,
            rx,
            repaint: None,
        }
    }

    /// Wake the UI whenever a response lands.
    pub fn with_repaint(mut self, ctx: Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    pub fn dispatch(&self, request: PriceRequest) {
        #[cfg(debug_assertions)]
        if DF.log_price_ticks {
            log::info!("Fetching prices for {:?}", request.symbols);
        }
        let service = self.service.clone();
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        self.runner.spawn(async move {
            let outcome = fetch_tick(service.as_ref(), request).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(outcome);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Every outcome that arrived since the last call.
    pub fn drain(&self) -> Vec<TickOutcome> {
        self.rx.try_iter().collect()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::{
        data::{FetchError, QuoteSnapshot},
        domain::Symbol,
        engine::SessionId,
    };
    use async_trait::async_trait;
    use std::{
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        thread,
        time::{Duration, Instant},
    };

    struct FakeQuotes {
        calls: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl QuoteService for FakeQuotes {
        async fn fetch_prices(&self, symbols: &[Symbol]) -> Result<QuoteSnapshot, FetchError> {
            self.calls
                .lock()
                .unwrap()
                .push(crate::domain::join_symbols(symbols));
            if self.fail {
                return Err(FetchError::Status(500));
            }
            // ETH deliberately missing from the response.
            Ok(QuoteSnapshot::from_prices([(Symbol::new("BTC").unwrap(), 50000.0)]))
        }
    }

    fn request() -> PriceRequest {
        PriceRequest {
            session: SessionId(7),
            symbols: ["BTC", "ETH"].iter().filter_map(|s| Symbol::new(s)).collect(),
        }
    }

    #[tokio::test]
    async fn batches_symbols_and_zero_fills_missing() {
        let svc = FakeQuotes { calls: Mutex::new(Vec::new()), fail: false };
        let outcome = fetch_tick(&svc, request()).await;
        assert_eq!(outcome.session, SessionId(7));
        assert_eq!(outcome.prices.unwrap(), vec![50000.0, 0.0]);
        assert_eq!(*svc.calls.lock().unwrap(), vec!["BTC,ETH".to_string()]);
    }

    #[tokio::test]
    async fn failure_is_reported_not_raised() {
        let svc = FakeQuotes { calls: Mutex::new(Vec::new()), fail: true };
        let outcome = fetch_tick(&svc, request()).await;
        assert!(matches!(outcome.prices, Err(FetchError::Status(500))));
        assert!(!outcome.label.is_empty());
    }

    /// Answers the first call, fails every later one.
    struct FirstCallOnly {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl QuoteService for FirstCallOnly {
        async fn fetch_prices(&self, symbols: &[Symbol]) -> Result<QuoteSnapshot, FetchError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) > 0 {
                return Err(FetchError::Status(503));
            }
            Ok(QuoteSnapshot::from_prices(
                symbols.iter().cloned().map(|s| (s, 100.0)),
            ))
        }
    }

    fn wait_for_one(poller: &PricePoller) -> TickOutcome {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let mut arrived = poller.drain();
            if let Some(outcome) = arrived.pop() {
                assert!(arrived.is_empty(), "expected a single outcome");
                return outcome;
            }
            assert!(Instant::now() < deadline, "no tick outcome arrived");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn dispatched_ticks_come_back_through_drain() {
        use crate::engine::{ApplyOutcome, SessionController};

        let runner = TaskRunner::new().unwrap();
        let poller = PricePoller::new(
            Arc::new(FirstCallOnly { calls: AtomicUsize::new(0) }),
            runner,
        );
        let symbols: Vec<Symbol> = ["BTC", "ETH"].iter().filter_map(|s| Symbol::new(s)).collect();
        let mut controller = SessionController::default();

        let first = controller.enter(&symbols, 0).expect("immediate tick");
        poller.dispatch(first);
        assert_eq!(controller.apply(wait_for_one(&poller)), ApplyOutcome::Appended);
        let buffer = controller.session().unwrap().buffer();
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.latest(1), Some(100.0));

        let second = controller.advance(2_000).expect("second tick");
        poller.dispatch(second);
        assert_eq!(controller.apply(wait_for_one(&poller)), ApplyOutcome::Dropped);
        assert_eq!(controller.session().unwrap().buffer().len(), 1);

        let from_old_session = controller.advance(4_000).expect("third tick");
        controller.leave();
        controller.enter(&symbols, 5_000);
        poller.dispatch(from_old_session);
        assert_eq!(controller.apply(wait_for_one(&poller)), ApplyOutcome::Stale);
        assert!(poller.drain().is_empty());
    }
}
