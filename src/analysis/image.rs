use crate::Result;
use base64::{Engine as _, engine::general_purpose};
use std::path::Path;

const JPEG_MIME: &str = "image/jpeg";
const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

/// A single food photograph, held only for the duration of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodImage {
    bytes: Vec<u8>,
}

impl FoodImage {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self { bytes })
    }

    pub fn from_base64(encoded: &str) -> Result<Self> {
        Ok(Self {
            bytes: general_purpose::STANDARD.decode(encoded)?,
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Checks the SOI marker; the file extension is not trusted.
    pub fn is_jpeg(&self) -> bool {
        self.bytes.starts_with(&JPEG_SIGNATURE)
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.bytes)
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", JPEG_MIME, self.to_base64())
    }
}
