//! # Domain models mirrored from the canteen backend
//!
//! Every type here is a plain DTO shaped after the JSON the REST backend sends
//! (camelCase field names, Mongo-style `_id` keys). They are
//! `Serialize + Deserialize` so the `api` crate can decode responses directly
//! and the UI can hold them in signals.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`FoodItem`] | One entry of the menu listing. |
//! | [`CartItems`] | `foodId -> quantity`, the wire form of a cart. Cart lines have no identity of their own. |
//! | [`OrderStatus`] | The six order states, with display label, badge colour and tracker progress. |
//! | [`Order`] / [`OrderItem`] | A placed order as returned by `/api/order/*`. |
//! | [`User`] | The signed-in customer profile. |
//! | [`DeliveryAddress`] / [`PaymentMethod`] / [`OrderLineRequest`] | Pieces of the order-creation request. |
//!
//! The backend is not strict about some fields (token numbers arrive as numbers
//! or strings, item references may be populated objects), so a couple of
//! lenient deserializers normalise them to `Option<String>`.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A menu entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

impl FoodItem {
    /// Absolute URL of the item's picture, served by the backend under `/images`.
    pub fn image_url(&self, base_url: &str) -> String {
        format!("{}/images/{}", base_url.trim_end_matches('/'), self.image)
    }
}

/// Cart quantities keyed by food id.
pub type CartItems = BTreeMap<String, u32>;

/// Lifecycle of an order as reported by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Case-insensitive parse of the wire value.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Badge colour used in order lists.
    pub fn color(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "#ffa500",
            OrderStatus::Confirmed => "#007bff",
            OrderStatus::Preparing => "#17a2b8",
            OrderStatus::Ready => "#28a745",
            OrderStatus::Delivered => "#6c757d",
            OrderStatus::Cancelled => "#dc3545",
        }
    }

    /// Tracker progress in percent.
    pub fn progress(&self) -> u8 {
        match self {
            OrderStatus::Pending => 10,
            OrderStatus::Confirmed => 30,
            OrderStatus::Preparing => 60,
            OrderStatus::Ready => 90,
            OrderStatus::Delivered => 100,
            OrderStatus::Cancelled => 0,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown statuses are shown as pending rather than failing the whole order.
impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse).unwrap_or_default())
    }
}

/// A line of a placed order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub food_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: u32,
    #[serde(default)]
    pub image: Option<String>,
}

/// A placed order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub order_number: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, deserialize_with = "lenient_string")]
    pub token_number: Option<String>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_delivery_time: Option<DateTime<Utc>>,
}

/// The signed-in customer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub profile_pic: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// Name, or the email when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Avatar letter.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('U')
    }
}

/// Pickup/delivery contact attached to an order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub first_name: String,
    pub last_name: String,
    pub branch: String,
    pub phone: String,
}

/// How the customer pays at the counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Upi,
    RfCard,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Cash, PaymentMethod::Upi, PaymentMethod::RfCard];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Upi => "upi",
            PaymentMethod::RfCard => "rfcard",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash on Delivery",
            PaymentMethod::Upi => "UPI QR",
            PaymentMethod::RfCard => "RF Card",
        }
    }
}

/// `{ foodId, quantity }` entry of an order-creation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub food_id: String,
    pub quantity: u32,
}

/// Format an amount in rupees, dropping the fraction for whole amounts.
pub fn format_rupees(amount: f64) -> String {
    // Whole-rupee check happens on the paise-rounded value
    let amount = (amount * 100.0).round() / 100.0;
    if amount.fract() == 0.0 {
        format!("₹{}", amount as i64)
    } else {
        format!("₹{amount:.2}")
    }
}

/// `"Oct 19, 2026, 09:05 AM"`
pub fn format_order_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// `"9:05 AM"`
pub fn format_clock<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    at.format("%-I:%M %p").to_string()
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Object(map)) => map
            .get("_id")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn food_item_uses_mongo_id() {
        let item: FoodItem = serde_json::from_value(json!({
            "_id": "f1",
            "name": "Masala Dosa",
            "price": 60,
            "category": "South Indian",
            "image": "dosa.png",
            "description": "Crispy"
        }))
        .unwrap();
        assert_eq!(item.id, "f1");
        assert_eq!(item.price, 60.0);
        assert_eq!(item.image_url("http://localhost:4000/"), "http://localhost:4000/images/dosa.png");
    }

    #[test]
    fn unknown_status_falls_back_to_pending() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "status": "on-the-way"
        }))
        .unwrap();
        assert_eq!(order.status, OrderStatus::Pending);

        let order: Order = serde_json::from_value(json!({ "_id": "o2", "status": "Ready" })).unwrap();
        assert_eq!(order.status, OrderStatus::Ready);
    }

    #[test]
    fn token_number_accepts_numbers_and_strings() {
        let order: Order =
            serde_json::from_value(json!({ "_id": "o1", "tokenNumber": 4821 })).unwrap();
        assert_eq!(order.token_number.as_deref(), Some("4821"));

        let order: Order =
            serde_json::from_value(json!({ "_id": "o1", "tokenNumber": "A-17" })).unwrap();
        assert_eq!(order.token_number.as_deref(), Some("A-17"));

        let order: Order = serde_json::from_value(json!({ "_id": "o1", "tokenNumber": null })).unwrap();
        assert!(order.token_number.is_none());
    }

    #[test]
    fn order_item_reference_may_be_populated() {
        let item: OrderItem = serde_json::from_value(json!({
            "foodId": { "_id": "f9", "name": "Tea" },
            "name": "Tea",
            "price": 10,
            "quantity": 2
        }))
        .unwrap();
        assert_eq!(item.food_id.as_deref(), Some("f9"));
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn full_order_decodes_timestamps() {
        let order: Order = serde_json::from_value(json!({
            "_id": "o1",
            "orderNumber": "ORD-1001",
            "items": [{ "name": "Samosa", "price": 15, "quantity": 3, "image": "samosa.png" }],
            "status": "preparing",
            "totalAmount": 45,
            "createdAt": "2026-10-19T09:05:00.000Z",
            "estimatedDeliveryTime": "2026-10-19T09:25:00Z"
        }))
        .unwrap();
        assert_eq!(order.order_number, "ORD-1001");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.status.progress(), 60);
        let created = order.created_at.unwrap();
        assert_eq!(format_order_date(&created), "Oct 19, 2026, 09:05 AM");
        assert_eq!(format_clock(&order.estimated_delivery_time.unwrap()), "9:25 AM");
    }

    #[test]
    fn payment_method_wire_names() {
        assert_eq!(serde_json::to_value(PaymentMethod::RfCard).unwrap(), json!("rfcard"));
        assert_eq!(PaymentMethod::parse("upi"), Some(PaymentMethod::Upi));
        assert_eq!(PaymentMethod::parse("card"), None);
    }

    #[test]
    fn user_display_helpers() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "name": "riya",
            "email": "riya@college.edu"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "riya");
        assert_eq!(user.initial(), 'R');

        let anonymous = User { name: String::new(), ..user };
        assert_eq!(anonymous.display_name(), "riya@college.edu");
        assert_eq!(anonymous.initial(), 'U');
    }

    #[test]
    fn rupee_formatting() {
        assert_eq!(format_rupees(120.0), "₹120");
        assert_eq!(format_rupees(49.5), "₹49.50");
        assert_eq!(format_rupees(0.0), "₹0");

        // Rounds to paise before deciding whether to show a fraction
        assert_eq!(format_rupees(49.999), "₹50");
        assert_eq!(format_rupees(10.004), "₹10");
        assert_eq!(format_rupees(10.006), "₹10.01");
    }
}
