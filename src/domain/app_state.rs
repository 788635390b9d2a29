use super::payment_type::PaymentType;
use crate::error::{PaymentSheetError, Result};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Main,
    Finished,
}

/// Top-level state of a session: the countdown, the confirmed payment type and the
/// screen currently shown.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub seconds_remaining: u32,
    pub selected_payment: Option<PaymentType>,
    pub screen: Screen,
}

impl AppState {
    pub fn new(seconds_remaining: u32) -> Self {
        Self {
            seconds_remaining,
            selected_payment: None,
            screen: Screen::Main,
        }
    }

    /// Applies one timer tick. Returns `false` when the tick was a no-op: the countdown
    /// is already at zero or the session has finished.
    pub fn tick(&mut self) -> bool {
        if self.screen == Screen::Finished || self.seconds_remaining == 0 {
            return false;
        }
        self.seconds_remaining -= 1;
        true
    }

    pub fn can_finish(&self) -> bool {
        self.screen == Screen::Main && self.selected_payment.is_some()
    }

    /// Stores the payment type confirmed in the selection sheet.
    pub fn confirm_payment(&mut self, payment: PaymentType) -> Result<()> {
        self.ensure_main()?;
        self.selected_payment = Some(payment);
        Ok(())
    }

    /// Moves to the confirmation screen. Requires a confirmed payment type.
    pub fn finish(&mut self) -> Result<()> {
        self.ensure_main()?;
        if self.selected_payment.is_none() {
            return Err(PaymentSheetError::ActionUnavailable(
                "finish requires a selected payment type",
            ));
        }
        self.screen = Screen::Finished;
        Ok(())
    }

    pub fn ensure_main(&self) -> Result<()> {
        match self.screen {
            Screen::Main => Ok(()),
            Screen::Finished => Err(PaymentSheetError::ActionUnavailable(
                "session already finished",
            )),
        }
    }
}
