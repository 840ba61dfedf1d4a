//! Response bodies. Every object-shaped response also carries `success` and
//! an optional `message`, which [`decode_response`](crate::decode_response)
//! checks before these are deserialized, so they only name the payload.

use serde::{Deserialize, Serialize};
use store::{CartItems, FoodItem, Order, User};

#[derive(Debug, Deserialize)]
pub(crate) struct FoodList {
    #[serde(default)]
    pub data: Vec<FoodItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CartData {
    #[serde(rename = "cartData", default)]
    pub cart_data: CartItems,
}

/// Result of a successful login or registration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    /// Some backends only return the token; the profile is then fetched
    /// separately.
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadedImage {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderEnvelope {
    pub order: Order,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderList {
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntent {
    pub client_secret: String,
    pub payment_intent_id: String,
}

/// Plain acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}
