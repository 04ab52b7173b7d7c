use tracing::{error, info};

use crate::api::FetchError;
use crate::format::CurrencyFormat;
use crate::models::Response;
use crate::ui::job::FetchJob;
use crate::view::{format_response, Dashboard, DisplayTransaction, FormattedBalance};

/// Dashboard view state. Written once, when the single fetch completes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum LoadState {
    Loading,
    Loaded(Dashboard),
    Failed(String),
}

impl std::fmt::Display for LoadState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "LOADING"),
            Self::Loaded(_) => write!(f, "READY"),
            Self::Failed(_) => write!(f, "ERROR"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) show_help: bool,
    pub(crate) status_message: String,
    pub(crate) state: LoadState,
    pub(crate) currency: CurrencyFormat,
    pub(crate) api_url: String,

    // Table cursor
    pub(crate) transaction_index: usize,
    pub(crate) transaction_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,

    fetch: Option<FetchJob<Response>>,
    activated: bool,
}

impl App {
    pub(crate) fn new(currency: CurrencyFormat, api_url: impl Into<String>) -> Self {
        Self {
            running: true,
            show_help: false,
            status_message: String::new(),
            state: LoadState::Loading,
            currency,
            api_url: api_url.into(),

            transaction_index: 0,
            transaction_scroll: 0,

            visible_rows: 20,

            fetch: None,
            activated: false,
        }
    }

    /// Start the view's one fetch. Later calls are no-ops and return `false`.
    pub(crate) fn activate<F>(&mut self, start: F) -> bool
    where
        F: FnOnce() -> FetchJob<Response>,
    {
        if self.activated {
            return false;
        }
        self.activated = true;
        info!(api = %self.api_url, "dashboard activated, fetching transactions");
        self.status_message = format!("Fetching transactions from {}", self.api_url);
        self.fetch = Some(start());
        true
    }

    /// Check the in-flight fetch. Returns `true` if the state changed.
    pub(crate) fn poll_fetch(&mut self) -> bool {
        let Some(job) = self.fetch.as_mut() else {
            return false;
        };
        match job.poll() {
            Some(result) => {
                self.fetch = None;
                self.apply(result);
                true
            }
            None => false,
        }
    }

    pub(crate) fn is_fetching(&self) -> bool {
        self.fetch.as_ref().is_some_and(|job| job.is_running())
    }

    fn apply(&mut self, result: Result<Response, FetchError>) {
        match result {
            Ok(response) => {
                let dashboard = format_response(response, &self.currency);
                info!(rows = dashboard.transactions.len(), "transactions loaded");
                self.status_message = format!("{} transactions loaded", dashboard.transactions.len());
                self.state = LoadState::Loaded(dashboard);
            }
            Err(e) => {
                error!("Failed to load transactions: {e}");
                self.status_message = format!("Error: {e}");
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }

    /// Formatted balance, unset until the fetch succeeds.
    pub(crate) fn balance(&self) -> Option<&FormattedBalance> {
        match &self.state {
            LoadState::Loaded(dash) => Some(&dash.balance),
            _ => None,
        }
    }

    /// Rows to display, empty until the fetch succeeds.
    pub(crate) fn transactions(&self) -> &[DisplayTransaction] {
        match &self.state {
            LoadState::Loaded(dash) => &dash.transactions,
            _ => &[],
        }
    }
}
