use reqwest::Method;
use serde_json::json;

use crate::responses::{Ack, PaymentIntent};
use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `amount` is in rupees.
    pub async fn create_payment_intent(&self, amount: f64) -> Result<PaymentIntent, ApiError> {
        let request = self
            .authed(Method::POST, "/api/payment/create-intent")?
            .json(&json!({ "amount": amount, "currency": "inr" }));
        self.send(request).await
    }

    pub async fn confirm_payment(&self, payment_intent_id: &str) -> Result<Ack, ApiError> {
        let request = self
            .authed(Method::POST, "/api/payment/confirm")?
            .json(&json!({ "paymentIntentId": payment_intent_id }));
        self.send(request).await
    }
}
