use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::info;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path as ObjectPath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload, PutResult};
use snafu::ResultExt;

use crate::errors::{CustomResult, StoreConfigSnafu, UploadSnafu, WriteReportSnafu};
use crate::modules::config::{Credentials, PublishConfig};

pub const HTML_CONTENT_TYPE: &str = "text/html";

/// writes the report to a file on the local disk
pub struct LocalFilePublisher {
    path: PathBuf,
}

impl LocalFilePublisher {
    pub fn new(path: impl Into<PathBuf>) -> LocalFilePublisher {
        LocalFilePublisher { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// write the document, replacing an existing file
    pub fn publish(&self, document: &str) -> CustomResult<()> {
        std::fs::write(&self.path, document).context(WriteReportSnafu { path: &self.path })?;

        info!(target: "publish", "HTML file generated successfully: {}", self.path.display());
        Ok(())
    }
}

/// uploads the report to an object store bucket
pub struct ObjectStorePublisher {
    store: Arc<dyn ObjectStore>,
    key: ObjectPath,
}

impl ObjectStorePublisher {
    /// # create an s3 publisher
    /// build an s3 client for the configured bucket. nothing is sent until `publish` is called
    ///
    /// ## Arguments
    /// * `config` - bucket, key and credentials to use
    pub fn from_config(config: &PublishConfig) -> CustomResult<ObjectStorePublisher> {
        let mut builder = match &config.credentials {
            Credentials::Ambient => AmazonS3Builder::from_env(),
            Credentials::Static {
                access_key_id,
                secret_access_key,
                session_token,
            } => {
                let builder = AmazonS3Builder::new()
                    .with_access_key_id(access_key_id)
                    .with_secret_access_key(secret_access_key);

                match session_token {
                    Some(token) => builder.with_token(token),
                    None => builder,
                }
            }
        };

        builder = builder.with_bucket_name(&config.bucket);
        if let Some(region) = &config.region {
            builder = builder.with_region(region);
        }
        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint);
        }

        let store = builder
            .build()
            .context(StoreConfigSnafu { bucket: &config.bucket })?;

        Ok(ObjectStorePublisher::with_store(Arc::new(store), &config.key))
    }

    pub fn with_store(store: Arc<dyn ObjectStore>, key: &str) -> ObjectStorePublisher {
        ObjectStorePublisher {
            store,
            key: ObjectPath::from(key),
        }
    }

    pub fn key(&self) -> &ObjectPath {
        &self.key
    }

    /// # upload the report
    /// put the document under the configured key with an html content type
    ///
    /// ## Returns
    /// * `PutResult` - the e-tag and version reported by the store
    pub async fn publish(&self, document: &str) -> CustomResult<PutResult> {
        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, HTML_CONTENT_TYPE.into());

        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let payload = PutPayload::from(document.as_bytes().to_vec());
        let result = self
            .store
            .put_opts(&self.key, payload, options)
            .await
            .context(UploadSnafu { key: self.key.to_string() })?;

        info!(
            target: "publish",
            "uploaded {} (e_tag: {:?}, version: {:?})",
            self.key,
            result.e_tag,
            result.version
        );

        Ok(result)
    }
}
