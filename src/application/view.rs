//! Immutable snapshots handed to the presentation layer.

use crate::domain::app_state::Screen;
use crate::domain::payment_type::PaymentTypeId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppView {
    pub screen: Screen,
    /// Countdown rendered as `MM:SS`.
    pub countdown: String,
    pub selected: Option<String>,
    pub finish_enabled: bool,
    pub sheet: Option<SheetView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetView {
    pub loading: bool,
    pub query: String,
    pub rows: Vec<RowView>,
    pub done_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: PaymentTypeId,
    pub name: String,
    pub checked: bool,
}

pub fn format_countdown(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(60), "01:00");
        assert_eq!(format_countdown(59), "00:59");
        assert_eq!(format_countdown(0), "00:00");
        assert_eq!(format_countdown(3725), "62:05");
    }

    #[test]
    fn test_view_serializes_screen_lowercase() {
        let view = AppView {
            screen: Screen::Finished,
            countdown: format_countdown(5),
            selected: Some("PayPal".into()),
            finish_enabled: false,
            sheet: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["screen"], "finished");
        assert_eq!(json["countdown"], "00:05");
        assert!(json["sheet"].is_null());
    }
}
