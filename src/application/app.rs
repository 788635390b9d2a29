use super::events::{Action, Event, EventSender, SheetId};
use super::selection::PaymentSelectionController;
use super::view::{AppView, RowView, SheetView, format_countdown};
use crate::domain::app_state::{AppState, Screen};
use crate::domain::ports::PaymentCatalogRef;
use crate::error::{PaymentSheetError, Result};
use tracing::{debug, info};

/// The top-level state machine: countdown, confirmed payment type and navigation.
///
/// While the sheet is presented the controller owns a [`PaymentSelectionController`];
/// it is created when the sheet opens and dropped when it closes.
pub struct AppController {
    state: AppState,
    catalog: PaymentCatalogRef,
    events: EventSender,
    sheet: Option<PaymentSelectionController>,
    next_sheet: SheetId,
}

impl AppController {
    pub fn new(initial_seconds: u32, catalog: PaymentCatalogRef, events: EventSender) -> Self {
        Self {
            state: AppState::new(initial_seconds),
            catalog,
            events,
            sheet: None,
            next_sheet: 1,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Sender for events that should come back to this controller.
    pub fn event_sender(&self) -> EventSender {
        self.events.clone()
    }

    pub fn sheet(&self) -> Option<&PaymentSelectionController> {
        self.sheet.as_ref()
    }

    /// Applies an asynchronous event: a timer tick or a fetch completion.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::Tick => {
                self.state.tick();
            }
            Event::CatalogLoaded { sheet, result } => match self.sheet.as_mut() {
                Some(controller) if controller.sheet() == sheet => controller.apply_fetch(result),
                _ => debug!(sheet, "dropping catalog result for a dismissed sheet"),
            },
        }
    }

    /// Applies a user action. Actions that are not currently available are rejected
    /// without touching state.
    pub fn perform(&mut self, action: Action) -> Result<()> {
        self.state.ensure_main()?;
        match action {
            Action::OpenSheet => {
                if self.sheet.is_some() {
                    return Ok(());
                }
                let id = self.next_sheet;
                self.next_sheet += 1;
                let mut controller = PaymentSelectionController::new(
                    id,
                    self.catalog.clone(),
                    self.events.clone(),
                    self.state.selected_payment.clone(),
                );
                controller.refresh();
                info!(sheet = id, "payment sheet opened");
                self.sheet = Some(controller);
            }
            Action::DismissSheet => {
                if let Some(controller) = self.sheet.take() {
                    info!(sheet = controller.sheet(), "payment sheet dismissed");
                }
            }
            Action::SetQuery(query) => self.sheet_mut()?.set_query(query),
            Action::Refresh => self.sheet_mut()?.refresh(),
            Action::Select(item) => self.sheet_mut()?.select(item),
            Action::Done => {
                let payment = self.sheet_mut()?.confirm()?;
                info!(id = payment.id, name = %payment.name, "payment type confirmed");
                self.state.confirm_payment(payment)?;
                self.sheet = None;
            }
            Action::Finish => {
                self.state.finish()?;
                info!(seconds_remaining = self.state.seconds_remaining, "session finished");
            }
        }
        Ok(())
    }

    fn sheet_mut(&mut self) -> Result<&mut PaymentSelectionController> {
        self.sheet
            .as_mut()
            .ok_or(PaymentSheetError::ActionUnavailable("payment sheet is not open"))
    }

    /// Builds the snapshot the presentation layer renders.
    pub fn view(&self) -> AppView {
        let sheet = match self.state.screen {
            Screen::Main => self.sheet.as_ref().map(|controller| {
                let catalog = controller.state();
                SheetView {
                    loading: catalog.is_loading(),
                    query: catalog.query().to_string(),
                    rows: catalog
                        .visible_items()
                        .iter()
                        .map(|item| RowView {
                            id: item.id,
                            name: item.name.clone(),
                            checked: catalog.selected() == Some(item),
                        })
                        .collect(),
                    done_enabled: controller.can_confirm(),
                }
            }),
            Screen::Finished => None,
        };

        AppView {
            screen: self.state.screen,
            countdown: format_countdown(self.state.seconds_remaining),
            selected: self.state.selected_payment.as_ref().map(|p| p.name.clone()),
            finish_enabled: self.state.can_finish(),
            sheet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::events::EventReceiver;
    use crate::domain::payment_type::PaymentType;
    use crate::infrastructure::in_memory::InMemoryCatalog;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    fn app(seconds: u32) -> (AppController, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let catalog = InMemoryCatalog::new(
            vec![
                PaymentType::new(1, "Visa"),
                PaymentType::new(2, "MasterCard"),
                PaymentType::new(3, "PayPal"),
            ],
            Duration::from_secs(2),
        );
        (AppController::new(seconds, Arc::new(catalog), tx), rx)
    }

    async fn pump(app: &mut AppController, rx: &mut EventReceiver) {
        let event = rx.recv().await.expect("event channel closed");
        app.handle(event);
    }

    #[tokio::test]
    async fn test_ticks_decrement_and_clamp() {
        let (mut app, _rx) = app(60);
        for _ in 0..60 {
            app.handle(Event::Tick);
        }
        assert_eq!(app.state().seconds_remaining, 0);
        app.handle(Event::Tick);
        assert_eq!(app.state().seconds_remaining, 0);
        assert_eq!(app.view().countdown, "00:00");
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_done_finish_flow() {
        let (mut app, mut rx) = app(60);
        assert!(!app.view().finish_enabled);

        app.perform(Action::OpenSheet).unwrap();
        let view = app.view();
        let sheet = view.sheet.expect("sheet should be presented");
        assert!(sheet.loading);
        assert!(!sheet.done_enabled);

        pump(&mut app, &mut rx).await;
        app.perform(Action::SetQuery("Pal".into())).unwrap();
        let sheet = app.view().sheet.unwrap();
        assert!(!sheet.loading);
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.rows[0].name, "PayPal");
        assert!(!sheet.rows[0].checked);

        app.perform(Action::Select(PaymentType::new(3, "PayPal"))).unwrap();
        let sheet = app.view().sheet.unwrap();
        assert!(sheet.rows[0].checked);
        assert!(sheet.done_enabled);
        assert!(!app.view().finish_enabled);

        app.perform(Action::Done).unwrap();
        let view = app.view();
        assert!(view.sheet.is_none());
        assert!(view.finish_enabled);
        assert_eq!(view.selected.as_deref(), Some("PayPal"));

        app.perform(Action::Finish).unwrap();
        let view = app.view();
        assert_eq!(view.screen, Screen::Finished);
        assert!(!view.finish_enabled);
    }

    #[tokio::test]
    async fn test_done_without_selection_is_rejected() {
        let (mut app, _rx) = app(60);
        app.perform(Action::OpenSheet).unwrap();

        assert!(matches!(
            app.perform(Action::Done),
            Err(PaymentSheetError::ActionUnavailable(_))
        ));
        assert!(app.sheet().is_some());
        assert!(app.state().selected_payment.is_none());
    }

    #[tokio::test]
    async fn test_sheet_actions_need_open_sheet() {
        let (mut app, _rx) = app(60);
        for action in [
            Action::SetQuery("Visa".into()),
            Action::Refresh,
            Action::Select(PaymentType::new(1, "Visa")),
            Action::Done,
        ] {
            assert!(app.perform(action).is_err());
        }
        assert!(app.perform(Action::Finish).is_err());
        assert_eq!(app.state().screen, Screen::Main);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_keeps_confirmed_payment_and_drops_stale_result() {
        let (mut app, mut rx) = app(60);
        app.perform(Action::OpenSheet).unwrap();
        pump(&mut app, &mut rx).await;
        app.perform(Action::Select(PaymentType::new(1, "Visa"))).unwrap();
        app.perform(Action::Done).unwrap();

        // Reopen, pick something else, then walk away.
        app.perform(Action::OpenSheet).unwrap();
        let sheet = app.view().sheet.unwrap();
        assert!(sheet.done_enabled, "current payment is preselected");
        app.perform(Action::Select(PaymentType::new(2, "MasterCard"))).unwrap();
        app.perform(Action::DismissSheet).unwrap();

        // The fetch issued by the dismissed sheet is ignored.
        pump(&mut app, &mut rx).await;
        assert!(app.view().sheet.is_none());
        assert_eq!(app.view().selected.as_deref(), Some("Visa"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_open_twice_keeps_sheet() {
        let (mut app, mut rx) = app(60);
        app.perform(Action::OpenSheet).unwrap();
        pump(&mut app, &mut rx).await;
        app.perform(Action::SetQuery("Visa".into())).unwrap();

        app.perform(Action::OpenSheet).unwrap();
        assert_eq!(app.view().sheet.unwrap().query, "Visa");
    }

    #[tokio::test]
    async fn test_finished_rejects_actions() {
        let (mut app, _rx) = app(60);
        app.perform(Action::OpenSheet).unwrap();
        app.perform(Action::Select(PaymentType::new(2, "MasterCard"))).unwrap();
        app.perform(Action::Done).unwrap();
        app.perform(Action::Finish).unwrap();

        assert!(app.perform(Action::OpenSheet).is_err());
        app.handle(Event::Tick);
        assert_eq!(app.state().seconds_remaining, 60);
        assert_eq!(app.state().screen, Screen::Finished);
    }
}
