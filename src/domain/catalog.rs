use super::payment_type::PaymentType;

/// Returns the items whose name contains `query`, preserving catalog order.
pub fn filter_visible(query: &str, items: &[PaymentType]) -> Vec<PaymentType> {
    items
        .iter()
        .filter(|item| item.matches(query))
        .cloned()
        .collect()
}

/// State behind the payment selection sheet.
///
/// `visible_items` is never written directly: every mutation of the catalog or the
/// query re-derives it from the current pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    is_loading: bool,
    all_items: Vec<PaymentType>,
    query: String,
    visible_items: Vec<PaymentType>,
    selected: Option<PaymentType>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn all_items(&self) -> &[PaymentType] {
        &self.all_items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible_items(&self) -> &[PaymentType] {
        &self.visible_items
    }

    pub fn selected(&self) -> Option<&PaymentType> {
        self.selected.as_ref()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Replaces the whole catalog with a fresh snapshot.
    pub fn replace_items(&mut self, items: Vec<PaymentType>) {
        self.all_items = items;
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    /// Single selection: the new item replaces any previous one.
    pub fn select(&mut self, item: PaymentType) {
        self.selected = Some(item);
    }

    fn recompute(&mut self) {
        self.visible_items = filter_visible(&self.query, &self.all_items);
    }
}
