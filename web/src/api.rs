use gloo_net::http::Request;

use crate::config::FrontendConfig;
use crate::types::{Pet, Vendor};

pub async fn fetch_vendors(config: &FrontendConfig) -> Result<Vec<Vendor>, String> {
    Request::get(&config.api_url("/vendors"))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_vendor_pets(
    config: &FrontendConfig,
    vendor_name: &str,
) -> Result<Vec<Pet>, String> {
    Request::get(&config.api_url(&format!("/pets/vendor/{}", vendor_name)))
        .send()
        .await
        .map_err(|e| e.to_string())?
        .json()
        .await
        .map_err(|e| e.to_string())
}
