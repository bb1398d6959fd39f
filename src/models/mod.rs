//! Wire types exchanged with the StockNotify backend.
//!
//! The backend speaks camelCase JSON, so every type here carries a
//! `rename_all` attribute rather than per-field renames.

use serde::{Deserialize, Serialize};

/// A per-stock notification rule as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSetting {
    /// Backend-assigned id; absent until the setting has been saved once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub symbol: String,
    pub target_price: f64,
    /// Notify when the price rises above the target rather than falls below.
    pub notify_on_rise: bool,
    pub enabled: bool,
}

/// Payload for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The one field the client consumes from a successful login.
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_notification_setting() {
        let json = r#"{
            "id": 7,
            "symbol": "ACME",
            "targetPrice": 42.5,
            "notifyOnRise": true,
            "enabled": false
        }"#;

        let setting: NotificationSetting =
            serde_json::from_str(json).expect("Failed to parse notification setting");
        assert_eq!(setting.id, Some(7));
        assert_eq!(setting.symbol, "ACME");
        assert_eq!(setting.target_price, 42.5);
        assert!(setting.notify_on_rise);
        assert!(!setting.enabled);
    }

    #[test]
    fn test_unsaved_setting_serializes_without_id() {
        let setting = NotificationSetting {
            id: None,
            symbol: "ACME".to_string(),
            target_price: 10.0,
            notify_on_rise: false,
            enabled: true,
        };

        let json = serde_json::to_value(&setting).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("targetPrice").is_some());
    }
}
