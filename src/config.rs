use log::{info, warn};
use std::{env, path::PathBuf};

pub struct Config {
    pub api_base_url: String,
    pub state_file: PathBuf,
    pub window_title: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            api_base_url: normalize_base_url(&load_or("SOCIETY_API_URL", "http://127.0.0.1:5000")),
            state_file: PathBuf::from(load_or("SOCIETY_STATE_FILE", "societyvoice_state.json")),
            window_title: load_or("SOCIETY_WINDOW_TITLE", "SocietyVoice"),
        }
    }
}

fn load_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        Ok(_) => {
            warn!("{key} is empty, using default: {default}");
            default.to_string()
        }
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

/// Endpoint paths are joined as `{base}/path`, so the base never ends with a slash.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_base_url;

    #[test]
    fn test_trailing_slashes_removed() {
        assert_eq!(normalize_base_url("http://host:5000/"), "http://host:5000");
        assert_eq!(normalize_base_url("http://host:5000//"), "http://host:5000");
    }

    #[test]
    fn test_plain_url_untouched() {
        assert_eq!(normalize_base_url(" http://host "), "http://host");
        assert_eq!(normalize_base_url(""), "");
    }
}
