use crate::config::cli::LocalStorage;
use crate::core::inquiry::MailtoMessage;
use crate::core::InquirySink;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Prints the `mailto:` link for the user to open in a mail client.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

#[async_trait]
impl InquirySink for StdoutSink {
    async fn deliver(&self, message: &MailtoMessage) -> Result<String> {
        let link = message.to_link();
        println!("{}", link);
        Ok(link)
    }
}

/// Saves the drafted message as plain text.
#[derive(Debug, Clone)]
pub struct FileSink {
    storage: LocalStorage,
    filename: String,
}

impl FileSink {
    pub const DEFAULT_FILENAME: &'static str = "inquiry.txt";

    pub fn new(storage: LocalStorage) -> Self {
        Self {
            storage,
            filename: Self::DEFAULT_FILENAME.to_string(),
        }
    }
}

#[async_trait]
impl InquirySink for FileSink {
    async fn deliver(&self, message: &MailtoMessage) -> Result<String> {
        let path = self
            .storage
            .write_file(&self.filename, message.to_text().as_bytes())
            .await?;
        tracing::info!("Inquiry saved to {}", path);
        Ok(path)
    }
}
