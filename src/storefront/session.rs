use event_emitter_rs::EventEmitter;

use crate::cart::CartLedger;
use crate::catalog::{FetchTicket, ProductCatalog};
use crate::config::StorefrontConfig;
use crate::gateway::{GatewayError, ProductGateway};
#[cfg(feature = "http")]
use crate::gateway::HttpProductGateway;
use crate::persistence::KeyValueStore;
#[cfg(feature = "http")]
use crate::persistence::SessionStore;
use crate::product::{Product, ProductId};
use crate::theme::{ColorSchemeHost, Theme, ThemePreference};

use super::{Notice, NOTICE_EVENT};

/// What became of one catalog refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    /// The response was loaded into the catalog.
    Applied { count: usize },
    /// A newer refresh was started; the response was discarded.
    Stale,
    /// The fetch failed; the catalog was emptied and an error notice emitted.
    Failed(GatewayError),
}

pub struct Storefront<S, G, H>
where
    S: KeyValueStore + Clone,
    G: ProductGateway,
    H: ColorSchemeHost,
{
    config: StorefrontConfig,
    gateway: G,
    catalog: ProductCatalog,
    cart: CartLedger<S>,
    theme: ThemePreference<S, H>,
    emitter: EventEmitter,
    last_notice: Option<Notice>,
}

impl<S, G, H> Storefront<S, G, H>
where
    S: KeyValueStore + Clone,
    G: ProductGateway,
    H: ColorSchemeHost,
{
    /// Start a session, restoring the cart and theme from `store`.
    pub fn new(config: StorefrontConfig, store: S, gateway: G, host: H) -> Self {
        let cart = CartLedger::restore(store.clone());
        let theme = ThemePreference::load(store, host);
        Storefront {
            config,
            gateway,
            catalog: ProductCatalog::new(),
            cart,
            theme,
            emitter: EventEmitter::new(),
            last_notice: None,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Filter selectors live on the catalog.
    pub fn catalog_mut(&mut self) -> &mut ProductCatalog {
        &mut self.catalog
    }

    pub fn cart(&self) -> &CartLedger<S> {
        &self.cart
    }

    pub fn theme(&self) -> &ThemePreference<S, H> {
        &self.theme
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.last_notice.as_ref()
    }

    /// Register a listener for notices. Listeners run on a background thread.
    pub fn on_notice<F>(&mut self, listener: F)
    where
        F: Fn(Notice) + Send + Sync + 'static,
    {
        self.emitter.on(NOTICE_EVENT, move |data: String| {
            match serde_json::from_str::<Notice>(&data) {
                Ok(notice) => listener(notice),
                Err(e) => tracing::warn!(error = %e, "dropping undecodable notice"),
            }
        });
    }

    /// Fetch the product list and load it into the catalog.
    pub async fn refresh_catalog(&mut self) -> RefreshOutcome {
        let ticket = self.begin_refresh();
        let result = self.gateway.fetch_products().await;
        self.finish_refresh(ticket, result)
    }

    /// Start a refresh whose response will be handed to [`finish_refresh`].
    ///
    /// Starting another refresh makes this one stale.
    ///
    /// [`finish_refresh`]: Storefront::finish_refresh
    pub fn begin_refresh(&mut self) -> FetchTicket {
        self.catalog.begin_fetch()
    }

    pub fn finish_refresh(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Product>, GatewayError>,
    ) -> RefreshOutcome {
        if !self.catalog.is_current(ticket) {
            tracing::debug!(generation = ticket.generation(), "ignoring stale refresh");
            return RefreshOutcome::Stale;
        }
        match result {
            Ok(products) => {
                let count = products.len();
                if self.config.debug {
                    tracing::debug!(?products, "catalog response");
                }
                self.catalog.apply_fetch(ticket, products);
                RefreshOutcome::Applied { count }
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog refresh failed");
                self.catalog.apply_fetch(ticket, Vec::new());
                self.notify(Notice::error(format!("Error loading products: {}", e)));
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Fetch a single product for a detail view.
    ///
    /// Returns None when the product does not exist or the fetch failed; a
    /// failure also emits an error notice.
    pub async fn load_product(&mut self, id: ProductId) -> Option<Product> {
        match self.gateway.fetch_product(id).await {
            Ok(product) => {
                if self.config.debug {
                    tracing::debug!(id, ?product, "product response");
                }
                product
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "product fetch failed");
                self.notify(Notice::error(format!("Error loading product: {}", e)));
                None
            }
        }
    }

    pub fn add_to_cart(&mut self, product: Product) -> usize {
        let count = self.cart.add(product);
        self.notify(Notice::success("Item added to Cart"));
        count
    }

    pub fn remove_from_cart(&mut self, id: ProductId) -> usize {
        let removed = self.cart.remove(id);
        self.notify(Notice::success("Item removed from Cart"));
        removed
    }

    pub fn empty_cart(&mut self) {
        self.cart.clear();
        self.notify(Notice::success("Cart emptied"));
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    pub fn use_system_theme(&mut self) -> bool {
        self.theme.resolve_from_system()
    }

    fn notify(&mut self, notice: Notice) {
        match serde_json::to_string(&notice) {
            Ok(payload) => {
                self.emitter.emit(NOTICE_EVENT, payload);
            }
            Err(e) => tracing::warn!(error = %e, "failed to encode notice"),
        }
        self.last_notice = Some(notice);
    }
}

#[cfg(feature = "http")]
impl<H: ColorSchemeHost> Storefront<SessionStore, HttpProductGateway, H> {
    /// Start a session wired from `config`: the HTTP catalog at
    /// `catalog_base_url`, and durable storage when `storage_dir` is set.
    pub fn open(config: StorefrontConfig, host: H) -> Self {
        let store = SessionStore::open(config.storage_dir.clone());
        let gateway = HttpProductGateway::new(config.catalog_base_url.clone());
        tracing::info!(
            catalog = %config.catalog_base_url,
            durable = store.is_durable(),
            "opening storefront session"
        );
        Storefront::new(config, store, gateway, host)
    }
}
