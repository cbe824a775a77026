use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

/// A single store-object request. Built once per input file and handed to the
/// store whole; nothing is mutated after construction.
#[derive(Debug, Clone)]
pub struct PutRequest {
    /// Object key within the destination bucket
    pub key: String,
    /// Full object content
    pub body: Bytes,
    /// Explicit content length in bytes
    pub content_length: i64,
    /// Content type to store with the object; `None` leaves the backend
    /// default in place
    pub content_type: Option<String>,
    /// Content-Disposition header value stored with the object
    pub content_disposition: String,
}

/// Narrow put-object capability over the backing object store.
///
/// The call is treated as atomic: on error no partial state is assumed to
/// exist and no compensating action is taken.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, request: PutRequest) -> Result<()>;
}

pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(&self, request: PutRequest) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&request.key)
            .body(ByteStream::from(request.body))
            .content_length(request.content_length)
            .content_disposition(&request.content_disposition)
            .set_content_type(request.content_type)
            .send()
            .await?;
        Ok(())
    }
}
