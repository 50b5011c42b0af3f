use crate::models::activity::ActivityCollection;
use crate::models::signup::MutationOutcome;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub mod activities;

/// The three backend calls the client makes.
///
/// `Err` means the request never produced a readable answer (transport or
/// decode failure). A server-side refusal is `Ok(MutationOutcome::Rejected)`.
#[async_trait]
pub trait ActivitiesApi: Send + Sync {
    async fn get_activities(&self) -> Result<ActivityCollection>;
    async fn signup(&self, activity: &str, email: &str) -> Result<MutationOutcome>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationOutcome>;
}

pub struct HttpActivitiesApi {
    client: Client,
    base_url: String,
}

impl HttpActivitiesApi {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim().to_owned(),
        })
    }
}

#[async_trait]
impl ActivitiesApi for HttpActivitiesApi {
    async fn get_activities(&self) -> Result<ActivityCollection> {
        activities::get_activities(&self.client, &self.base_url).await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<MutationOutcome> {
        activities::signup(&self.client, &self.base_url, activity, email).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<MutationOutcome> {
        activities::unregister(&self.client, &self.base_url, activity, email).await
    }
}
