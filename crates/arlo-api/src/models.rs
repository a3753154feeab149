// Arlo cloud API response and request types
//
// Every response is wrapped in a `{ success, data }` envelope. Fields use
// `#[serde(default)]` and flatten catch-alls liberally because the service
// is inconsistent about field presence across device generations.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── Response envelopes ───────────────────────────────────────────────

/// Envelope for list endpoints:
/// ```json
/// { "success": true, "data": [...] }
/// ```
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<T>,
}

/// Envelope for mutation endpoints (friend PUT, camera notify):
/// ```json
/// { "success": false, "data": { "error": "2059", "message": "..." } }
/// ```
#[derive(Debug, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<ActionData>,
}

/// Failure detail nested inside an [`ActionResponse`].
#[derive(Debug, Deserialize)]
pub struct ActionData {
    #[serde(default)]
    pub error: Option<ErrorCode>,
    #[serde(default)]
    pub message: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Envelope for the login endpoint.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub data: Option<LoginData>,
}

/// Login payload. Only `token` is required downstream; `userId` feeds the
/// notify envelope's `from` field when present.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Service error code. The wire shape varies between a JSON string and a
/// number, so both are accepted and compared in string form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
    Text(String),
    Numeric(i64),
}

impl ErrorCode {
    /// Compare against a canonical string code such as `"2059"`.
    pub fn matches(&self, code: &str) -> bool {
        match self {
            Self::Text(s) => s == code,
            Self::Numeric(n) => n.to_string() == code,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Numeric(n) => write!(f, "{n}"),
        }
    }
}

// ── Device ───────────────────────────────────────────────────────────

/// A paired camera from `users/devices`.
///
/// `device_id` addresses the notify channel, `unique_id` keys friend
/// access grants, and `x_cloud_id` is the per-session routing id sent as
/// a header on notify requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
    pub unique_id: String,
    pub device_name: String,
    pub x_cloud_id: String,
    /// Catch-all for undocumented fields.
    #[serde(flatten, skip_serializing)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Friend ───────────────────────────────────────────────────────────

/// A shared-access grant from `users/friends`.
///
/// Mutated by PUTting the record back with `devices` replaced wholesale:
/// the mapping is always the complete granted set (unique id -> device
/// name), never a partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub admin_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<f64>,
    #[serde(default)]
    pub devices: HashMap<String, String>,
    /// Catch-all for undocumented fields. Not sent back on update -- the
    /// PUT body carries exactly the named fields.
    #[serde(flatten, skip_serializing)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ── Camera notify ────────────────────────────────────────────────────

/// Notify envelope POSTed to `users/devices/notify/{deviceId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyEnvelope {
    pub from: String,
    pub to: String,
    pub action: String,
    pub resource: String,
    pub trans_id: String,
    pub publish_response: bool,
    pub properties: NotifyProperties,
}

/// Camera properties set by the state-change notify.
///
/// `privacy_active` and `idle_led_enable` always move together and in
/// opposition: switching cameras on disarms privacy and lights the LED.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyProperties {
    pub privacy_active: bool,
    pub idle_led_enable: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_matches_both_wire_shapes() {
        let text: ErrorCode = serde_json::from_str(r#""2059""#).expect("text code");
        let numeric: ErrorCode = serde_json::from_str("2059").expect("numeric code");
        assert!(text.matches("2059"));
        assert!(numeric.matches("2059"));
        assert!(!numeric.matches("2058"));
    }

    #[test]
    fn friend_update_body_drops_unknown_fields() {
        let friend: Friend = serde_json::from_value(serde_json::json!({
            "id": "f1",
            "email": "a@x.com",
            "firstName": "Ada",
            "lastName": "L",
            "adminUser": false,
            "lastModified": 1_482_369_272_406_f64,
            "devices": { "d1": "Front" },
            "status": "pending"
        }))
        .expect("friend");

        let body = serde_json::to_value(&friend).expect("serialize");
        assert!(body.get("status").is_none());
        assert_eq!(body["devices"]["d1"], "Front");
        assert_eq!(body["email"], "a@x.com");
    }

    #[test]
    fn notify_envelope_uses_wire_field_names() {
        let envelope = NotifyEnvelope {
            from: "U-1_web".into(),
            to: "CAM1".into(),
            action: "set".into(),
            resource: "cameras/CAM1".into(),
            trans_id: "web!abc!123".into(),
            publish_response: true,
            properties: NotifyProperties {
                privacy_active: true,
                idle_led_enable: false,
            },
        };

        let body = serde_json::to_value(&envelope).expect("serialize");
        assert_eq!(body["transId"], "web!abc!123");
        assert_eq!(body["publishResponse"], true);
        assert_eq!(body["properties"]["privacyActive"], true);
        assert_eq!(body["properties"]["idleLedEnable"], false);
    }
}
