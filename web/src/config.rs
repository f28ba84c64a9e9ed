/// Base URL of the clinic backend, baked in at compile time:
/// - development: http://localhost:8080 (default)
/// - deployment: via PETCLINIC_SERVER_URL env var
const DEFAULT_SERVER_URL: &str = match option_env!("PETCLINIC_SERVER_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// Process-wide settings, read-only once the app is mounted. Built once in
/// the app shell and handed down to whoever renders URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub server_url: String,
}

impl FrontendConfig {
    pub fn from_env() -> Self {
        FrontendConfig {
            server_url: DEFAULT_SERVER_URL.to_string(),
        }
    }

    /// where the backend serves pet images
    pub fn image_url(&self, filename: &str) -> String {
        format!("{}/images/{}", self.server_url, filename)
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}
