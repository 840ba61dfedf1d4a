use reqwest::Method;
use store::FeedbackRequest;

use crate::responses::Ack;
use crate::{ApiClient, ApiError};

impl ApiClient {
    pub async fn submit_feedback(&self, feedback: &FeedbackRequest) -> Result<Ack, ApiError> {
        let request = self.request(Method::POST, "/api/feedback").json(feedback);
        self.send(request).await
    }
}
