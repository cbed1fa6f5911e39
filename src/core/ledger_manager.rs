use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::{base_dir, Config, ConfigManager};
use crate::core::services::{
    ChartPeriod, ChartService, DailySeries, DashboardSummary, FilterService, MonthCursor,
    SummaryService,
};
use crate::core::time::{Clock, SystemClock};
use crate::domain::{FilterSpec, Transaction, TransactionChanges, TransactionDraft, TransactionId};
use crate::errors::Result;
use crate::ledger::{sample_transactions, CategoryRegistry, TransactionStore};
use crate::storage::{JsonFileStore, KeyValueStore, LoadOutcome, PersistenceAdapter};

/// Where the session's transactions came from on start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapSource {
    /// A previously saved list, possibly empty.
    Saved,
    /// Nothing usable was stored; the demo records were seeded and saved.
    Sample,
    /// Nothing usable was stored and seeding is disabled.
    Empty,
}

/// Metadata describing the outcome of [`LedgerManager::bootstrap`].
#[derive(Debug)]
pub struct BootstrapReport {
    pub source: BootstrapSource,
    pub transactions: usize,
    /// Unreadable stored values and repaired records.
    pub warnings: Vec<String>,
}

/// Facade that owns the session state and writes every change through to storage.
pub struct LedgerManager {
    store: TransactionStore,
    registry: CategoryRegistry,
    persistence: PersistenceAdapter,
    clock: Box<dyn Clock>,
    config: Config,
}

impl LedgerManager {
    pub fn new(storage: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Self {
        Self {
            store: TransactionStore::new(),
            registry: CategoryRegistry::new(),
            persistence: PersistenceAdapter::new(storage),
            clock,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// File-backed manager rooted at the configured data directory.
    pub fn open(config: &Config, base: &Path) -> Result<Self> {
        let store = JsonFileStore::new(config.resolve_data_dir(base))?;
        Ok(Self::new(Box::new(store), Box::new(SystemClock)).with_config(config.clone()))
    }

    /// Opens the manager under [`base_dir`] using the config file stored there.
    pub fn open_default() -> Result<Self> {
        let base = base_dir();
        let config = ConfigManager::with_base_dir(base.clone())?.load()?;
        Self::open(&config, &base)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// [`LedgerManager::bootstrap`] with seeding taken from the config.
    pub fn start(&mut self) -> Result<BootstrapReport> {
        self.bootstrap(self.config.seed_sample_data)
    }

    /// Loads persisted state. Seeds and saves the demo records only when nothing was stored.
    pub fn bootstrap(&mut self, seed_sample_data: bool) -> Result<BootstrapReport> {
        self.registry = self.persistence.load_registry()?;
        let outcome = self.persistence.load()?;
        let mut warnings: Vec<String> = outcome
            .corruption()
            .map(|err| err.to_string())
            .into_iter()
            .collect();
        for warning in &warnings {
            warn!(warning = %warning, "recovered from unreadable data");
        }

        let source = match outcome {
            LoadOutcome::Loaded(transactions) => {
                let (store, repairs) = TransactionStore::restore(transactions);
                self.store = store;
                if !repairs.is_empty() {
                    warnings.extend(repairs);
                    self.persist()?;
                }
                BootstrapSource::Saved
            }
            LoadOutcome::NoData { .. } if seed_sample_data => {
                self.store = TransactionStore::from_transactions(sample_transactions());
                self.persist()?;
                BootstrapSource::Sample
            }
            LoadOutcome::NoData { .. } => {
                self.store = TransactionStore::new();
                BootstrapSource::Empty
            }
        };
        info!(?source, count = self.store.len(), "ledger bootstrapped");
        Ok(BootstrapReport {
            source,
            transactions: self.store.len(),
            warnings,
        })
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn persistence(&self) -> &PersistenceAdapter {
        &self.persistence
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn create(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let created = self.store.create(draft)?.clone();
        self.persist()?;
        Ok(created)
    }

    pub fn update(&mut self, id: TransactionId, changes: TransactionChanges) -> Result<Transaction> {
        let updated = self.store.update(id, changes)?.clone();
        self.persist()?;
        Ok(updated)
    }

    pub fn delete(&mut self, id: TransactionId) -> Result<Transaction> {
        let removed = self.store.delete(id)?;
        self.persist()?;
        Ok(removed)
    }

    /// Removes every transaction. Confirmation is the caller's concern.
    pub fn clear(&mut self) -> Result<usize> {
        let removed = self.store.clear()?;
        self.persist()?;
        Ok(removed)
    }

    pub fn add_gig_type(&mut self, label: &str) -> Result<String> {
        let added = self.registry.add_gig_type(label)?.to_string();
        self.persistence.save_registry(&self.registry)?;
        Ok(added)
    }

    pub fn remove_gig_type(&mut self, label: &str) -> Result<String> {
        let removed = self.registry.remove_gig_type(label)?;
        self.persistence.save_registry(&self.registry)?;
        Ok(removed)
    }

    pub fn add_category(&mut self, label: &str) -> Result<String> {
        let added = self.registry.add_category(label)?.to_string();
        self.persistence.save_registry(&self.registry)?;
        Ok(added)
    }

    pub fn remove_category(&mut self, label: &str) -> Result<String> {
        let removed = self.registry.remove_category(label)?;
        self.persistence.save_registry(&self.registry)?;
        Ok(removed)
    }

    /// Display view: filtered, newest first.
    pub fn filtered(&self, spec: &FilterSpec) -> Vec<&Transaction> {
        let mut view = FilterService::apply(self.store.list(), spec);
        view.sort_by(|a, b| b.date.cmp(&a.date));
        view
    }

    pub fn dashboard(&self) -> DashboardSummary {
        SummaryService::dashboard(self.store.list(), self.today())
    }

    pub fn monthly_series(&self, cursor: MonthCursor) -> Result<DailySeries> {
        SummaryService::by_day_of_month(self.store.list(), cursor.month(), cursor.year())
    }

    /// Weekly nets and their labels, oldest first, ending today.
    pub fn weekly_trend(&self, num_weeks: usize) -> Vec<(String, f64)> {
        let today = self.today();
        ChartService::weekly_labels(num_weeks, today)
            .into_iter()
            .zip(SummaryService::weekly_series(self.store.list(), num_weeks, today))
            .collect()
    }

    /// [`LedgerManager::weekly_trend`] over the configured number of weeks.
    pub fn default_weekly_trend(&self) -> Vec<(String, f64)> {
        self.weekly_trend(self.config.trend_weeks)
    }

    pub fn income_by_type(&self, period: ChartPeriod) -> BTreeMap<String, f64> {
        let scoped = ChartService::filter_by_period(self.store.list(), period, self.today());
        ChartService::income_by_type(scoped)
    }

    /// [`LedgerManager::income_by_type`] for the configured chart period.
    pub fn default_income_by_type(&self) -> BTreeMap<String, f64> {
        self.income_by_type(self.config.default_chart_period)
    }

    fn persist(&self) -> Result<()> {
        self.persistence.save(self.store.list())
    }
}
