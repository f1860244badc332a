use crate::core::inquiry::MailtoMessage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the breeds and add-ons resources come from.
pub trait CatalogSource: Send + Sync {
    fn fetch(&self, resource: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;

    /// Human readable location, for logs.
    fn describe(&self, resource: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_location(&self) -> &str;
    fn breeds_resource(&self) -> &str;
    fn addons_resource(&self) -> &str;
    fn recipient(&self) -> &str;
    fn subject(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}

/// Messaging collaborator that takes a composed inquiry off our hands.
#[async_trait]
pub trait InquirySink: Send + Sync {
    /// Delivers the message and returns a short description of where it went.
    async fn deliver(&self, message: &MailtoMessage) -> Result<String>;
}
