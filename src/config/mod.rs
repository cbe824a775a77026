use std::env;

/// Destination and link settings for uploads
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// AWS region the bucket lives in (default: "us-east-1")
    pub region: String,

    /// Destination bucket (default: "i.fileit.in")
    pub bucket: String,

    /// Base URL used when printing public object links
    /// (default: "https://s3.amazonaws.com")
    pub public_base_url: String,

    /// Accepted file extensions (without the dot) and the content type sent
    /// for each. Extensions are matched case-sensitively.
    pub content_types: Vec<(String, String)>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            bucket: "i.fileit.in".to_string(),
            public_base_url: "https://s3.amazonaws.com".to_string(),
            content_types: vec![
                ("png".to_string(), mime::IMAGE_PNG.to_string()),
                ("jpg".to_string(), mime::IMAGE_JPEG.to_string()),
            ],
        }
    }
}

impl UploadConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            region: env::var("FILEIT_REGION").unwrap_or(default.region),
            bucket: env::var("FILEIT_BUCKET").unwrap_or(default.bucket),
            public_base_url: env::var("FILEIT_BASE_URL").unwrap_or(default.public_base_url),
            content_types: default.content_types,
        }
    }

    /// Content type for a file extension, or `None` when the extension is not
    /// in the table. Lookup is exact: `PNG` does not match `png`.
    pub fn content_type_for(&self, ext: &str) -> Option<&str> {
        self.content_types
            .iter()
            .find(|(e, _)| e == ext)
            .map(|(_, ct)| ct.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UploadConfig::default();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.bucket, "i.fileit.in");
        assert_eq!(config.public_base_url, "https://s3.amazonaws.com");
        assert_eq!(config.content_types.len(), 2);
    }

    #[test]
    fn test_content_type_lookup() {
        let config = UploadConfig::default();
        assert_eq!(config.content_type_for("png"), Some("image/png"));
        assert_eq!(config.content_type_for("jpg"), Some("image/jpeg"));
        assert_eq!(config.content_type_for("gif"), None);
        assert_eq!(config.content_type_for("jpeg"), None);
        // case-sensitive policy
        assert_eq!(config.content_type_for("PNG"), None);
    }
}
