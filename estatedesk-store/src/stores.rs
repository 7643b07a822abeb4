//! The dashboard's concrete stores, bundled for injection.

use crate::config::StoreConfig;
use crate::fixtures::FixtureData;
use crate::state::StoreSummary;
use crate::store::{RefreshOutcome, Store};
use estatedesk_model::{
    Customer, Document, FinancialTransaction, Lease, MarketingCampaign, Property, RecordKind,
};
use estatedesk_source::{
    DataSource, FixtureSource, HttpSource, SourceConfig, SourceResult, http_client,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub type DocumentStore = Store<Document>;
pub type TransactionStore = Store<FinancialTransaction>;
pub type LeaseStore = Store<Lease>;
pub type PropertyStore = Store<Property>;
pub type CampaignStore = Store<MarketingCampaign>;
pub type CustomerStore = Store<Customer>;

/// One data source per collection.
pub struct StoreSources {
    pub documents: Arc<dyn DataSource<Document>>,
    pub transactions: Arc<dyn DataSource<FinancialTransaction>>,
    pub leases: Arc<dyn DataSource<Lease>>,
    pub properties: Arc<dyn DataSource<Property>>,
    pub campaigns: Arc<dyn DataSource<MarketingCampaign>>,
    pub customers: Arc<dyn DataSource<Customer>>,
}

impl StoreSources {
    /// HTTP sources sharing one client.
    pub fn http(config: &SourceConfig) -> SourceResult<Self> {
        let client = http_client(config)?;
        Ok(Self {
            documents: Arc::new(HttpSource::with_client(client.clone(), config)),
            transactions: Arc::new(HttpSource::with_client(client.clone(), config)),
            leases: Arc::new(HttpSource::with_client(client.clone(), config)),
            properties: Arc::new(HttpSource::with_client(client.clone(), config)),
            campaigns: Arc::new(HttpSource::with_client(client.clone(), config)),
            customers: Arc::new(HttpSource::with_client(client, config)),
        })
    }

    /// In-memory sources serving `data`, each fetch delayed by `latency`.
    pub fn fixtures(data: FixtureData, latency: Option<Duration>) -> Self {
        fn source<T: estatedesk_model::Record>(
            records: Vec<T>,
            latency: Option<Duration>,
        ) -> Arc<dyn DataSource<T>> {
            let fixture = FixtureSource::new(records);
            Arc::new(match latency {
                Some(latency) => fixture.with_latency(latency),
                None => fixture,
            })
        }
        Self {
            documents: source(data.documents, latency),
            transactions: source(data.transactions, latency),
            leases: source(data.leases, latency),
            properties: source(data.properties, latency),
            campaigns: source(data.campaigns, latency),
            customers: source(data.customers, latency),
        }
    }
}

/// Per-collection results of [`Stores::refresh_all`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshReport {
    pub outcomes: Vec<(RecordKind, RefreshOutcome)>,
}

impl RefreshReport {
    /// Kinds whose refresh failed.
    pub fn failed(&self) -> Vec<RecordKind> {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, RefreshOutcome::Failed(_)))
            .map(|(k, _)| *k)
            .collect()
    }

    pub fn all_applied(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| o.is_applied())
    }
}

/// Every store the dashboard uses.
///
/// Stores are independent: no shared lock, no cross-store references.
#[derive(Debug, Clone)]
pub struct Stores {
    pub documents: DocumentStore,
    pub transactions: TransactionStore,
    pub leases: LeaseStore,
    pub properties: PropertyStore,
    pub campaigns: CampaignStore,
    pub customers: CustomerStore,
}

impl Stores {
    /// Builds one empty store per source.
    pub fn new(sources: StoreSources, config: StoreConfig) -> Self {
        Self {
            documents: Store::with_config("documents", sources.documents, config),
            transactions: Store::with_config("transactions", sources.transactions, config),
            leases: Store::with_config("leases", sources.leases, config),
            properties: Store::with_config("properties", sources.properties, config),
            campaigns: Store::with_config("campaigns", sources.campaigns, config),
            customers: Store::with_config("customers", sources.customers, config),
        }
    }

    /// Stores backed by the HTTP API.
    pub fn with_http(source: &SourceConfig, config: StoreConfig) -> SourceResult<Self> {
        Ok(Self::new(StoreSources::http(source)?, config))
    }

    /// Stores backed by in-memory fixtures.
    pub fn with_fixtures(data: FixtureData, config: StoreConfig) -> Self {
        Self::new(StoreSources::fixtures(data, None), config)
    }

    /// Refreshes one collection.
    pub async fn refresh_kind(&self, kind: RecordKind) -> RefreshOutcome {
        match kind {
            RecordKind::Document => self.documents.refresh().await,
            RecordKind::Transaction => self.transactions.refresh().await,
            RecordKind::Lease => self.leases.refresh().await,
            RecordKind::Property => self.properties.refresh().await,
            RecordKind::Campaign => self.campaigns.refresh().await,
            RecordKind::Customer => self.customers.refresh().await,
        }
    }

    /// Refreshes every collection concurrently.
    pub async fn refresh_all(&self) -> RefreshReport {
        let (documents, transactions, leases, properties, campaigns, customers) = tokio::join!(
            self.documents.refresh(),
            self.transactions.refresh(),
            self.leases.refresh(),
            self.properties.refresh(),
            self.campaigns.refresh(),
            self.customers.refresh(),
        );
        let report = RefreshReport {
            outcomes: vec![
                (RecordKind::Property, properties),
                (RecordKind::Lease, leases),
                (RecordKind::Transaction, transactions),
                (RecordKind::Document, documents),
                (RecordKind::Campaign, campaigns),
                (RecordKind::Customer, customers),
            ],
        };
        info!(
            "Refreshed {} stores, {} failed",
            report.outcomes.len(),
            report.failed().len()
        );
        report
    }

    /// Summary of one collection.
    pub fn summary_of(&self, kind: RecordKind) -> StoreSummary {
        match kind {
            RecordKind::Document => self.documents.summary(),
            RecordKind::Transaction => self.transactions.summary(),
            RecordKind::Lease => self.leases.summary(),
            RecordKind::Property => self.properties.summary(),
            RecordKind::Campaign => self.campaigns.summary(),
            RecordKind::Customer => self.customers.summary(),
        }
    }

    /// Summaries of every collection, in [`RecordKind::ALL`] order.
    pub fn summary(&self) -> Vec<StoreSummary> {
        RecordKind::ALL
            .into_iter()
            .map(|kind| self.summary_of(kind))
            .collect()
    }
}
