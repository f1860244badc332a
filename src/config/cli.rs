use crate::core::CatalogSource;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Directory-backed storage: reads catalog files and writes saved inquiries.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    pub async fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        Ok(full_path.display().to_string())
    }
}

impl CatalogSource for LocalStorage {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>> {
        self.read_file(resource).await
    }

    fn describe(&self, resource: &str) -> String {
        Path::new(&self.base_path).join(resource).display().to_string()
    }
}
