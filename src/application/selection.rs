use super::events::{Event, EventSender, SheetId};
use crate::domain::catalog::CatalogState;
use crate::domain::payment_type::PaymentType;
use crate::domain::ports::PaymentCatalogRef;
use crate::error::{PaymentSheetError, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Drives the payment selection sheet: loading, search and single selection.
///
/// Fetches run as detached tasks and report back through [`Event::CatalogLoaded`], so a
/// refresh never blocks the loop and several refreshes may overlap. The latest resolution
/// wins; the loading flag stays up until every outstanding fetch has answered.
pub struct PaymentSelectionController {
    sheet: SheetId,
    catalog: PaymentCatalogRef,
    events: EventSender,
    state: CatalogState,
    in_flight: usize,
}

impl PaymentSelectionController {
    /// Creates the controller for sheet `sheet`, optionally pre-selecting `selected`.
    pub fn new(
        sheet: SheetId,
        catalog: PaymentCatalogRef,
        events: EventSender,
        selected: Option<PaymentType>,
    ) -> Self {
        let mut state = CatalogState::new();
        if let Some(item) = selected {
            state.select(item);
        }
        Self {
            sheet,
            catalog,
            events,
            state,
            in_flight: 0,
        }
    }

    pub fn sheet(&self) -> SheetId {
        self.sheet
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Requests a fresh catalog snapshot.
    pub fn refresh(&mut self) {
        self.in_flight += 1;
        self.state.set_loading(true);
        debug!(sheet = self.sheet, in_flight = self.in_flight, "catalog fetch requested");

        let catalog = Arc::clone(&self.catalog);
        let events = self.events.clone();
        let sheet = self.sheet;
        tokio::spawn(async move {
            // A panicking fetch still has to answer, or the sheet would spin forever.
            let result = match tokio::spawn(async move { catalog.fetch_types().await }).await {
                Ok(result) => result,
                Err(e) => Err(PaymentSheetError::CatalogError(e.to_string())),
            };
            let _ = events.send(Event::CatalogLoaded { sheet, result });
        });
    }

    /// Applies the outcome of a fetch issued by [`refresh`](Self::refresh).
    ///
    /// A failed fetch leaves the current catalog untouched.
    pub fn apply_fetch(&mut self, result: Result<Vec<PaymentType>>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(items) => {
                debug!(sheet = self.sheet, count = items.len(), "catalog fetch resolved");
                self.state.replace_items(items);
            }
            Err(e) => {
                warn!(sheet = self.sheet, error = %e, "catalog fetch failed, keeping previous catalog");
            }
        }
        self.state.set_loading(self.in_flight > 0);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    pub fn select(&mut self, item: PaymentType) {
        debug!(sheet = self.sheet, id = item.id, "payment type selected");
        self.state.select(item);
    }

    /// Whether "Done" is available.
    pub fn can_confirm(&self) -> bool {
        self.state.selected().is_some()
    }

    /// The selection to hand back when "Done" is tapped.
    pub fn confirm(&self) -> Result<PaymentType> {
        self.state
            .selected()
            .cloned()
            .ok_or(PaymentSheetError::ActionUnavailable(
                "done requires a selected payment type",
            ))
    }
}
