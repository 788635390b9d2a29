use crate::domain::payment_type::PaymentType;
use crate::error::Result;
use tokio::sync::mpsc;

/// Identifies one presentation of the selection sheet.
pub type SheetId = u64;

/// Asynchronous inputs delivered onto the session loop.
#[derive(Debug)]
pub enum Event {
    /// One unit of elapsed time.
    Tick,
    /// A catalog fetch issued by sheet `sheet` has resolved.
    CatalogLoaded {
        sheet: SheetId,
        result: Result<Vec<PaymentType>>,
    },
}

pub type EventSender = mpsc::UnboundedSender<Event>;
pub type EventReceiver = mpsc::UnboundedReceiver<Event>;

/// Things the user can do on screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// "Open payment" on the main screen.
    OpenSheet,
    /// Dismisses the sheet without confirming.
    DismissSheet,
    /// Edits the search field.
    SetQuery(String),
    /// Pull-to-refresh.
    Refresh,
    /// Taps a row.
    Select(PaymentType),
    /// "Done" in the sheet.
    Done,
    /// "Finish" on the main screen.
    Finish,
}
