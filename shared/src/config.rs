/// Address of the detection service when no override is compiled in.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080/api";

/// Multipart field carrying the image on `POST /detect`.
pub const DETECT_UPLOAD_FIELD: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uses `MEDSCAN_API_BASE_URL` as seen at compile time; a wasm bundle has
    /// no process environment to read at runtime.
    pub fn from_build_env() -> Self {
        let base_url = option_env!("MEDSCAN_API_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn detect_url(&self) -> String {
        format!("{}/detect", self.base_url)
    }

    pub fn update_name_url(&self) -> String {
        format!("{}/update-medicine-name", self.base_url)
    }

    pub fn medicine_info_url(&self, medicine_name: &str) -> String {
        format!(
            "{}/get-medicine-info?medicine_name={}",
            self.base_url,
            urlencoding::encode(medicine_name)
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hang_off_the_base_url() {
        let config = ApiConfig::new(DEFAULT_API_BASE_URL);
        assert_eq!(config.detect_url(), "http://127.0.0.1:8080/api/detect");
        assert_eq!(
            config.update_name_url(),
            "http://127.0.0.1:8080/api/update-medicine-name"
        );
    }

    #[test]
    fn default_uses_build_env_config() {
        let config = ApiConfig::default();
        assert_eq!(config, ApiConfig::from_build_env());
        assert!(config.detect_url().ends_with("/detect"));
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ApiConfig::new("https://medscan.example/api/");
        assert_eq!(config.base_url(), "https://medscan.example/api");
        assert_eq!(config.detect_url(), "https://medscan.example/api/detect");
    }

    #[test]
    fn medicine_name_is_percent_encoded() {
        let config = ApiConfig::new("/api");
        assert_eq!(
            config.medicine_info_url("Dolo 650 & Co"),
            "/api/get-medicine-info?medicine_name=Dolo%20650%20%26%20Co"
        );
    }
}
