use crate::models::activity::ActivityCollection;
use crate::models::signup::{ErrorResponse, MessageResponse, MutationOutcome};
use anyhow::{anyhow, Result};
use log::{debug, error, info, warn};
use reqwest::{Client, Method, Url};

pub async fn get_activities(
    client: &Client,
    base_url: &str,
) -> Result<ActivityCollection, anyhow::Error> {
    let url = activities_url(base_url)?;
    debug!("Fetching activities: {}", url);
    let resp = client.get(url).send().await?;

    if resp.status().is_success() {
        let activities = resp.json::<ActivityCollection>().await?;
        info!("Received {} activities", activities.len());
        Ok(activities)
    } else {
        error!("Failed to fetch activities: {}", resp.status());
        Err(anyhow!("Failed to fetch activities: {}", resp.status()))
    }
}

pub async fn signup(
    client: &Client,
    base_url: &str,
    activity: &str,
    email: &str,
) -> Result<MutationOutcome, anyhow::Error> {
    send_signup_request(client, Method::POST, base_url, activity, email).await
}

pub async fn unregister(
    client: &Client,
    base_url: &str,
    activity: &str,
    email: &str,
) -> Result<MutationOutcome, anyhow::Error> {
    send_signup_request(client, Method::DELETE, base_url, activity, email).await
}

async fn send_signup_request(
    client: &Client,
    method: Method,
    base_url: &str,
    activity: &str,
    email: &str,
) -> Result<MutationOutcome, anyhow::Error> {
    let url = signup_url(base_url, activity, email)?;
    debug!("{} {}", method, url);
    let resp = client.request(method.clone(), url).send().await?;
    let status = resp.status();

    if status.is_success() {
        let body = resp.json::<MessageResponse>().await?;
        info!("{} signup for {:?} succeeded", method, activity);
        Ok(MutationOutcome::Accepted {
            message: body.message,
        })
    } else {
        let body = resp.json::<ErrorResponse>().await?;
        warn!("{} signup for {:?} rejected with {}: {:?}", method, activity, status, body.detail);
        Ok(MutationOutcome::Rejected {
            status,
            detail: body.detail_text(),
        })
    }
}

fn base(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url.trim())?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("Not a usable server address: {}", base_url));
    }
    Ok(url)
}

pub fn activities_url(base_url: &str) -> Result<Url> {
    let mut url = base(base_url)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("Not a usable server address: {}", base_url))?
        .pop_if_empty()
        .push("activities");
    Ok(url)
}

/// `{base}/activities/{activity}/signup?email={email}`, with both values
/// percent-encoded so names like "Chess Club" or "a+b@x.com" survive intact.
pub fn signup_url(base_url: &str, activity: &str, email: &str) -> Result<Url> {
    let mut url = base(base_url)?;
    url.path_segments_mut()
        .map_err(|_| anyhow!("Not a usable server address: {}", base_url))?
        .pop_if_empty()
        .extend(["activities", activity, "signup"]);
    url.query_pairs_mut().append_pair("email", email);
    Ok(url)
}
