use reqwest::Method;
use serde_json::json;
use store::CartItems;

use crate::responses::{Ack, CartData};
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn get_cart(&self) -> Result<CartItems, ApiError> {
        let request = self.authed(Method::POST, "/api/cart/get")?.json(&json!({}));
        let cart: CartData = self.send(request).await?;
        Ok(cart.cart_data)
    }

    pub async fn add_to_cart(&self, item_id: &str) -> Result<Ack, ApiError> {
        let request = self
            .authed(Method::POST, "/api/cart/add")?
            .json(&json!({ "itemId": item_id }));
        self.send(request).await
    }

    pub async fn remove_from_cart(&self, item_id: &str) -> Result<Ack, ApiError> {
        let request = self
            .authed(Method::POST, "/api/cart/remove")?
            .json(&json!({ "itemId": item_id }));
        self.send(request).await
    }
}
