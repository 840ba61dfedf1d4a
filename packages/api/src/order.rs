use reqwest::Method;
use store::{Order, OrderRequest};

use crate::responses::{OrderEnvelope, OrderList};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn create_order(&self, order: &OrderRequest) -> Result<Order, ApiError> {
        let request = self.authed(Method::POST, "/api/order/create")?.json(order);
        let envelope: OrderEnvelope = self.send(request).await?;
        Ok(envelope.order)
    }

    /// Look up one order. Sent with the token when signed in; the backend
    /// decides whether anonymous lookups are allowed.
    pub async fn get_order(&self, order_id: &str) -> Result<Order, ApiError> {
        let path = format!("/api/order/{}", encode_segment(order_id.trim()));
        let envelope: OrderEnvelope = self.send(self.request(Method::GET, &path)).await?;
        Ok(envelope.order)
    }

    pub async fn user_orders(&self) -> Result<Vec<Order>, ApiError> {
        let list: OrderList = self
            .send(self.authed(Method::GET, "/api/order/user-orders")?)
            .await?;
        Ok(list.orders)
    }
}

fn encode_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
