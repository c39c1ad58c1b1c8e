/// file name of the local report and key of the uploaded one
pub const REPORT_FILE_NAME: &str = "skiers_data.html";

/// how the object store client authenticates
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Credentials {
    /// use the standard `AWS_*` environment variables, profile or instance metadata
    #[default]
    Ambient,
    Static {
        access_key_id: String,
        secret_access_key: String,
        session_token: Option<String>,
    },
}

/// where and how the report is published
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PublishConfig {
    pub bucket: String,
    pub key: String,
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub credentials: Credentials,
}

impl PublishConfig {
    /// upload to `bucket` under the default key with ambient credentials
    pub fn new(bucket: impl Into<String>) -> PublishConfig {
        PublishConfig {
            bucket: bucket.into(),
            key: REPORT_FILE_NAME.to_string(),
            region: None,
            endpoint: None,
            credentials: Credentials::Ambient,
        }
    }
}
