//! Payment session and callback notification models
//!
//! A payment session is created once per checkout attempt, after the frame
//! token has been obtained and before the order goes on hold. It ends when
//! a callback resolves the order, or never, if the processor stays silent.

use serde::{Deserialize, Serialize};

/// Outcome status literal the processor sends for an authorized payment.
/// Anything else is treated as a definitive failure.
pub const ACCEPTED_STATUS: &str = "ACCEPTED";

/// Payment session recorded for a checkout attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSession {
    pub order_id: String,
    /// Chargeable amount in whole currency units
    pub amount: i64,
    /// One-time frame token issued by the processor
    pub token: String,
    /// Customer-facing iframe link
    pub iframe_link: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Asynchronous outcome notification posted by the processor. Transient;
/// validated and discarded per request.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackNotification {
    #[serde(rename = "merchantReferenceNumber")]
    pub merchant_reference_number: String,
    pub status: String,
}

impl CallbackNotification {
    pub fn is_accepted(&self) -> bool {
        self.status == ACCEPTED_STATUS
    }
}

/// Build the customer-facing iframe link for an order.
///
/// Returns `None` when the token is empty; there is nothing to show the
/// customer without a valid token. The base URL's trailing slash is
/// normalized so exactly one `/?` separates the base from the query.
pub fn iframe_link(base_url: &str, order_id: &str, token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }

    Some(format!(
        "{}/?order-nr={}&payment-key={}",
        base_url.trim_end_matches('/'),
        order_id,
        token
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iframe_link_without_trailing_slash() {
        assert_eq!(
            iframe_link("https://pay.example/frame", "42", "abc").as_deref(),
            Some("https://pay.example/frame/?order-nr=42&payment-key=abc")
        );
    }

    #[test]
    fn test_iframe_link_with_trailing_slash_has_no_double_slash() {
        assert_eq!(
            iframe_link("https://pay.example/frame/", "42", "abc").as_deref(),
            Some("https://pay.example/frame/?order-nr=42&payment-key=abc")
        );
    }

    #[test]
    fn test_iframe_link_empty_token_yields_none() {
        assert_eq!(iframe_link("https://pay.example/frame", "42", ""), None);
    }

    #[test]
    fn test_callback_accepts_only_the_accepted_literal() {
        let accepted: CallbackNotification =
            serde_json::from_str(r#"{"merchantReferenceNumber":"7","status":"ACCEPTED"}"#).unwrap();
        assert!(accepted.is_accepted());

        let declined: CallbackNotification =
            serde_json::from_str(r#"{"merchantReferenceNumber":"7","status":"DECLINED"}"#).unwrap();
        assert!(!declined.is_accepted());

        // Case matters; the processor sends the literal in upper case.
        let lowercase: CallbackNotification =
            serde_json::from_str(r#"{"merchantReferenceNumber":"7","status":"accepted"}"#).unwrap();
        assert!(!lowercase.is_accepted());
    }

    #[test]
    fn test_callback_ignores_extra_fields() {
        let parsed: CallbackNotification = serde_json::from_str(
            r#"{"merchantReferenceNumber":"7","status":"ACCEPTED","operation":"PAYMENT","extra":1}"#,
        )
        .unwrap();
        assert_eq!(parsed.merchant_reference_number, "7");
    }
}
