use reqwest::Method;
use store::FoodItem;

use crate::responses::FoodList;
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn list_foods(&self) -> Result<Vec<FoodItem>, ApiError> {
        let list: FoodList = self.send(self.request(Method::GET, "/api/food/list")).await?;
        Ok(list.data)
    }

    pub async fn search_foods(&self, query: &str) -> Result<Vec<FoodItem>, ApiError> {
        let request = self
            .request(Method::GET, "/api/food/search")
            .query(&[("query", query)]);
        let list: FoodList = self.send(request).await?;
        Ok(list.data)
    }

    /// Today's special menu. This endpoint answers with a bare array.
    pub async fn todays_menu(&self) -> Result<Vec<FoodItem>, ApiError> {
        self.send(self.request(Method::GET, "/api/food/todays-menu"))
            .await
    }
}
