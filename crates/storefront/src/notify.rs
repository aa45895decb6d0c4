//! Notification surface and client events.
//!
//! Responses tell the page what happened through the `HX-Trigger` header:
//! a `showToast` event carries the transient notification, and bare events
//! such as `cart-updated` ask other regions of the page to re-render.

use axum::http::HeaderValue;
use axum::response::{IntoResponseParts, ResponseParts};
use serde_json::{Map, Value};

/// Response header HTMX reads client events from.
pub const HX_TRIGGER: &str = "hx-trigger";

/// Cart contents changed; badge and cart panel re-render.
pub const CART_UPDATED: &str = "cart-updated";
/// Order history changed; history panel re-renders.
pub const ORDERS_UPDATED: &str = "orders-updated";
/// Checkout finished; the checkout view closes and its form resets.
pub const CHECKOUT_COMPLETED: &str = "checkout-completed";
/// Event carrying a notification message.
pub const SHOW_TOAST: &str = "showToast";

/// Builder for the `HX-Trigger` header.
#[derive(Debug, Clone, Default)]
pub struct HxTrigger {
    events: Map<String, Value>,
}

impl HxTrigger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a trigger that only shows a notification.
    #[must_use]
    pub fn toast(message: impl Into<String>) -> Self {
        Self::new().with_toast(message)
    }

    /// Fire a bare client event.
    #[must_use]
    pub fn with_event(mut self, name: &str) -> Self {
        self.events.insert(name.to_string(), Value::Null);
        self
    }

    /// Show `message` on the notification surface.
    #[must_use]
    pub fn with_toast(mut self, message: impl Into<String>) -> Self {
        self.events
            .insert(SHOW_TOAST.to_string(), Value::String(message.into()));
        self
    }

    /// The header value: a JSON object with every non-ASCII character escaped.
    #[must_use]
    pub fn header_value(&self) -> HeaderValue {
        let json = Value::Object(self.events.clone()).to_string();
        let ascii = escape_non_ascii(&json);
        HeaderValue::from_str(&ascii).unwrap_or_else(|_| HeaderValue::from_static("{}"))
    }
}

impl IntoResponseParts for HxTrigger {
    type Error = std::convert::Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if !self.events.is_empty() {
            res.headers_mut().insert(HX_TRIGGER, self.header_value());
        }
        Ok(res)
    }
}

/// Replace every non-ASCII char with JSON `\uXXXX` escapes (UTF-16 units).
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parsed(trigger: &HxTrigger) -> Value {
        serde_json::from_str(trigger.header_value().to_str().unwrap()).unwrap()
    }

    #[test]
    fn test_events_and_toast() {
        let trigger = HxTrigger::new()
            .with_event(CART_UPDATED)
            .with_toast("Added Signature Tee to cart");
        let value = parsed(&trigger);
        assert!(value[CART_UPDATED].is_null());
        assert_eq!(value[SHOW_TOAST], "Added Signature Tee to cart");
    }

    #[test]
    fn test_non_ascii_is_escaped_and_round_trips() {
        let trigger = HxTrigger::toast("Added ₹ Kurta 😀 to cart");
        let header = trigger.header_value();
        assert!(header.to_str().unwrap().is_ascii());
        assert_eq!(parsed(&trigger)[SHOW_TOAST], "Added ₹ Kurta 😀 to cart");
    }

    #[test]
    fn test_control_characters_survive() {
        let trigger = HxTrigger::toast("line\nbreak");
        assert_eq!(parsed(&trigger)[SHOW_TOAST], "line\nbreak");
    }
}
