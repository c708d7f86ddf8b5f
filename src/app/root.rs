use {
    anyhow::Result,
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, Visuals},
    },
    std::{collections::HashMap, sync::Arc, time::Duration},
};

#[cfg(debug_assertions)]
use crate::config::DF;
use crate::{
    Cli,
    app::{CatalogState, DetailPanel, Page, UiMemory, state::MarketsPromise},
    config::{API, Endpoints},
    data::{
        CoinGeckoClient, DetailCache, HttpQuoteService, MarketService, TaskRunner, build_client,
        default_storage,
    },
    domain::Symbol,
    engine::{ApplyOutcome, PricePoller, SessionController},
    models::{SelectionError, SelectionStore},
    ui::{DialogAction, ReplaceDialog, UI_CONFIG, render_nav_bar, render_replace_dialog},
    utils::AppClock,
};

/// How often to poll pending market/detail promises while something is loading.
const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct App {
    pub(crate) memory: UiMemory,
    pub(crate) clock: AppClock,
    pub(crate) runner: TaskRunner,
    pub(crate) markets: Arc<dyn MarketService>,
    pub(crate) selection: SelectionStore,
    pub(crate) controller: SessionController,
    pub(crate) poller: PricePoller,
    pub(crate) catalog: CatalogState,
    pub(crate) detail_panels: HashMap<String, DetailPanel>,
    pub(crate) detail_cache: DetailCache,
    pub(crate) replace_dialog: Option<ReplaceDialog>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        let memory: UiMemory = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        egui_extras::install_image_loaders(&cc.egui_ctx);
        setup_custom_visuals(&cc.egui_ctx);

        let endpoints = Endpoints::with_overrides(args.quote_url.as_deref(), args.market_url.as_deref());
        let client = build_client();
        let runner = TaskRunner::new()?;

        let quotes = Arc::new(HttpQuoteService::new(client.clone(), &endpoints.quote_base_url));
        let markets: Arc<dyn MarketService> =
            Arc::new(CoinGeckoClient::new(client, &endpoints.market_base_url));

        let poller = PricePoller::new(quotes, runner.clone()).with_repaint(cc.egui_ctx.clone());
        let catalog = CatalogState::Loading(Self::spawn_market_fetch(&runner, &markets));

        let start_page = if args.reports { Page::Reports } else { memory.page };

        let mut app = Self {
            memory,
            clock: AppClock::new(),
            runner,
            markets,
            selection: SelectionStore::load(default_storage()),
            controller: SessionController::default(),
            poller,
            catalog,
            detail_panels: HashMap::new(),
            detail_cache: DetailCache::new(API.markets.detail_ttl_ms),
            replace_dialog: None,
        };
        // A reports page restored from last run still starts a brand-new session.
        app.open_page(start_page);
        Ok(app)
    }

    fn spawn_market_fetch(
        runner: &TaskRunner,
        markets: &Arc<dyn MarketService>,
    ) -> MarketsPromise {
        let markets = markets.clone();
        runner.spawn_promise(async move { markets.fetch_markets().await })
    }

    pub(crate) fn retry_market_fetch(&mut self) {
        self.catalog = CatalogState::Loading(Self::spawn_market_fetch(&self.runner, &self.markets));
    }

    /// Switch page. Entering reports starts a session; leaving it tears the session down.
    pub(crate) fn open_page(&mut self, page: Page) {
        self.memory.page = page;
        if page == Page::Reports {
            let now = self.clock.now_ms();
            if let Some(request) = self.controller.enter(self.selection.symbols(), now) {
                self.poller.dispatch(request);
            }
        } else if self.controller.is_active() {
            self.controller.leave();
        }
    }

    /// Selection switch on a coin card.
    pub(crate) fn toggle_coin(&mut self, symbol: Symbol, selected: bool) {
        if !selected {
            self.selection.remove(&symbol);
            return;
        }
        match self.selection.add(symbol.clone()) {
            Ok(()) => {}
            Err(SelectionError::CapacityExceeded { .. }) => {
                #[cfg(debug_assertions)]
                if DF.log_selection {
                    log::info!("Selection full. Asking which coin {} should replace.", symbol);
                }
                self.replace_dialog = Some(ReplaceDialog::new(symbol));
            }
        }
    }

    /// "More info" pressed on a coin card.
    pub(crate) fn toggle_details(&mut self, coin_id: String) {
        match self.detail_panels.get(&coin_id) {
            Some(DetailPanel::Loading(_)) => {}
            Some(_) => {
                self.detail_panels.remove(&coin_id);
            }
            None => {
                let now = self.clock.now_ms();
                let panel = match self.detail_cache.get_fresh(&coin_id, now) {
                    Some(details) => DetailPanel::Open(details),
                    None => {
                        #[cfg(debug_assertions)]
                        if DF.log_markets {
                            log::info!("Fetching details for {}", coin_id);
                        }
                        let markets = self.markets.clone();
                        let id = coin_id.clone();
                        DetailPanel::Loading(
                            self.runner
                                .spawn_promise(async move { markets.fetch_details(&id).await }),
                        )
                    }
                };
                self.detail_panels.insert(coin_id, panel);
            }
        }
    }

    /// Feed finished ticks into the session, fire due timers, and schedule the next frame.
    fn pump_live_session(&mut self, ctx: &Context) {
        for outcome in self.poller.drain() {
            if self.controller.apply(outcome) == ApplyOutcome::Stale {
                #[cfg(debug_assertions)]
                if DF.log_session {
                    log::info!("Ignored a price response from a closed session");
                }
            }
        }

        let now = self.clock.now_ms();
        if let Some(request) = self.controller.advance(now) {
            self.poller.dispatch(request);
        }
        if let Some(deadline) = self.controller.next_deadline_ms() {
            ctx.request_repaint_after(Duration::from_millis(deadline.saturating_sub(now)));
        }
    }

    fn poll_catalog(&mut self, ctx: &Context) {
        let CatalogState::Loading(promise) = &self.catalog else {
            return;
        };
        let next = match promise.ready() {
            None => {
                ctx.request_repaint_after(LOADING_REPAINT);
                return;
            }
            Some(Ok(coins)) => {
                #[cfg(debug_assertions)]
                if DF.log_markets {
                    log::info!("Loaded {} coins", coins.len());
                }
                CatalogState::Ready(coins.clone())
            }
            Some(Err(e)) => {
                log::error!("Error fetching coins: {}", e);
                CatalogState::Failed(e.to_string())
            }
        };
        self.catalog = next;
    }

    fn poll_detail_panels(&mut self, ctx: &Context) {
        let now = self.clock.now_ms();
        let mut pending = false;
        for (coin_id, panel) in self.detail_panels.iter_mut() {
            let DetailPanel::Loading(promise) = panel else {
                continue;
            };
            let next = match promise.ready() {
                None => {
                    pending = true;
                    continue;
                }
                Some(Ok(details)) => {
                    self.detail_cache.insert(coin_id, *details, now);
                    DetailPanel::Open(*details)
                }
                Some(Err(e)) => {
                    log::error!("Error fetching coin details for {}: {}", coin_id, e);
                    DetailPanel::Failed
                }
            };
            *panel = next;
        }
        if pending {
            ctx.request_repaint_after(LOADING_REPAINT);
        }
    }

    fn show_replace_dialog(&mut self, ctx: &Context) {
        let Some(dialog) = &mut self.replace_dialog else {
            return;
        };
        match render_replace_dialog(ctx, dialog, self.selection.symbols()) {
            Some(DialogAction::Confirm { remove, add }) => {
                self.selection.replace(&remove, add);
                self.replace_dialog = None;
            }
            Some(DialogAction::Cancel) => self.replace_dialog = None,
            None => {}
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.pump_live_session(ctx);
        self.poll_catalog(ctx);
        self.poll_detail_panels(ctx);

        if let Some(page) = render_nav_bar(ctx, self.memory.page) {
            self.open_page(page);
        }

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| match self.memory.page {
                Page::Home => self.render_home_page(ui),
                Page::Reports => self.render_reports_page(ui),
                Page::About => self.render_about_page(ui),
            });

        self.show_replace_dialog(ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.memory);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    ctx.set_visuals(visuals);
}
