//! Presentation-facing contract
//!
//! The UI hands over `{url, alias, expiry}` and gets back either a created
//! entry or a validation error. For an incoming path it gets a redirect view,
//! a not-found signal, or the home route.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use super::redirect::{Navigator, RedirectHandle, RedirectSimulator};
use super::resolver::{Route, RoutingTable};
use crate::config::StaticConfig;
use crate::errors::{LinkshelfError, Result};
use crate::storage::{Entry, HistoryStore, StorageFactory};
use crate::utils::url_validator::{DefaultUrlValidator, UrlValidator};
use crate::utils::{ShortCodeGenerator, build_short_url};

#[derive(Debug, Clone, Default)]
pub struct ShortenRequest {
    pub url: String,
    pub alias: Option<String>,
    pub expiry: Option<String>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn expiry(mut self, expiry: impl Into<String>) -> Self {
        self.expiry = Some(expiry.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectView {
    pub entry: Entry,
    pub original_url: String,
    pub countdown: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    Home,
    Redirect(RedirectView),
    NotFound(String),
}

pub struct LinkService {
    store: HistoryStore,
    generator: ShortCodeGenerator,
    validator: Box<dyn UrlValidator>,
    simulator: RedirectSimulator,
    origin: String,
}

impl LinkService {
    pub fn new(store: HistoryStore, origin: impl Into<String>) -> Self {
        Self {
            store,
            generator: ShortCodeGenerator::default(),
            validator: Box::new(DefaultUrlValidator),
            simulator: RedirectSimulator::default(),
            origin: origin.into(),
        }
    }

    pub async fn from_config(config: &StaticConfig) -> Result<Self> {
        // A zero-length code would mint the bare origin, which routes home.
        if config.shortener.random_code_length == 0 {
            return Err(LinkshelfError::config(
                "shortener.random_code_length must be at least 1",
            ));
        }

        let backend = StorageFactory::create(config)?;
        let store = HistoryStore::load(backend).await;

        Ok(Self::new(store, config.shortener.origin.clone())
            .with_generator(ShortCodeGenerator::new(
                config.shortener.random_code_length,
            ))
            .with_simulator(RedirectSimulator::new(Duration::from_millis(
                config.shortener.redirect_delay_ms,
            ))))
    }

    pub fn with_generator(mut self, generator: ShortCodeGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_validator(mut self, validator: impl UrlValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn with_simulator(mut self, simulator: RedirectSimulator) -> Self {
        self.simulator = simulator;
        self
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn history(&self) -> &[Entry] {
        self.store.history()
    }

    /// Validation failures return before the store is touched.
    #[instrument(skip(self, request), fields(url = %request.url))]
    pub async fn shorten(&mut self, request: ShortenRequest) -> Result<Entry> {
        let url = request.url.trim();
        if let Err(e) = self.validator.validate(url) {
            debug!("Rejected submission: {}", e);
            return Err(LinkshelfError::from(e));
        }

        let code = self.generator.generate(request.alias.as_deref());
        let short_url = build_short_url(&self.origin, &code);

        let now = Utc::now();
        let mut id = now.timestamp_millis();
        if let Some(newest) = self.store.newest()
            && newest.id >= id
        {
            id = newest.id + 1;
        }

        let expiry = request.expiry.filter(|e| !e.is_empty());
        let entry = Entry::new(id, url, short_url, now, expiry);

        if self.store.history().iter().any(|e| e.short_code() == code) {
            warn!("Short code '{}' already in history, newest entry takes over", code);
        }

        self.store.append(entry.clone()).await;
        info!("Created {} -> {}", entry.short_url, entry.original_url);
        Ok(entry)
    }

    pub async fn clear_history(&mut self) {
        self.store.clear().await;
    }

    pub fn resolve_path(&self, path: &str) -> PathOutcome {
        let code = match Route::parse(path) {
            Route::Home => return PathOutcome::Home,
            Route::Lookup(code) => code,
        };

        match RoutingTable::from_history(self.store.history()).resolve(&code) {
            Ok(entry) => PathOutcome::Redirect(RedirectView {
                entry: entry.clone(),
                original_url: entry.original_url.clone(),
                countdown: self.simulator.delay(),
            }),
            Err(_) => {
                debug!("Path '{}' matches no history entry", path);
                PathOutcome::NotFound(code)
            }
        }
    }

    pub fn start_redirect(
        &self,
        view: &RedirectView,
        navigator: Arc<dyn Navigator>,
    ) -> RedirectHandle {
        self.simulator.start(view.entry.clone(), navigator)
    }
}
