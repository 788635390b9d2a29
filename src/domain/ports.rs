use super::payment_type::PaymentType;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Source of the payment types offered in the selection sheet.
///
/// Every call returns a fresh, ordered snapshot. Filtering happens client-side.
#[async_trait]
pub trait PaymentCatalog: Send + Sync {
    async fn fetch_types(&self) -> Result<Vec<PaymentType>>;
}

pub type PaymentCatalogRef = Arc<dyn PaymentCatalog>;
