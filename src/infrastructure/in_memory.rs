use crate::domain::payment_type::PaymentType;
use crate::domain::ports::PaymentCatalog;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Simulated round trip of a catalog fetch.
pub const DEFAULT_LATENCY: Duration = Duration::from_secs(2);

/// An in-memory payment catalog that answers after a fixed latency.
///
/// Stands in for a remote catalog service. The item list is shared behind an `Arc` so
/// the catalog can be cloned cheaply into fetch tasks; each fetch hands out its own copy.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    types: Arc<Vec<PaymentType>>,
    latency: Duration,
}

impl InMemoryCatalog {
    /// Creates a catalog serving `types` in the given order.
    pub fn new(types: Vec<PaymentType>, latency: Duration) -> Self {
        Self {
            types: Arc::new(types),
            latency,
        }
    }

    /// The built-in catalog used when no catalog file is supplied.
    pub fn default_types() -> Vec<PaymentType> {
        vec![
            PaymentType::new(1, "Visa"),
            PaymentType::new(2, "MasterCard"),
            PaymentType::new(3, "PayPal"),
            PaymentType::new(4, "Apple Pay"),
            PaymentType::new(5, "Google Pay"),
        ]
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new(Self::default_types(), DEFAULT_LATENCY)
    }
}

#[async_trait]
impl PaymentCatalog for InMemoryCatalog {
    async fn fetch_types(&self) -> Result<Vec<PaymentType>> {
        tokio::time::sleep(self.latency).await;
        debug!(count = self.types.len(), "catalog snapshot served");
        Ok(self.types.as_ref().clone())
    }
}
