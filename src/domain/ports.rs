use super::expense::CandidateExpense;
use crate::error::Result;
use async_trait::async_trait;

/// A receipt photo as handed over by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptImage {
    /// MIME type reported by the uploader, e.g. `image/png`.
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl ReceiptImage {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }
}

/// Raw output of a text recognition pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub text: String,
    /// Engine confidence on a 0-100 scale.
    pub confidence: f32,
}

/// Capability interface of an optical text recognition engine.
///
/// Implementations own whatever worker or handle the engine needs.
/// `initialize` must be called before `recognize`; `dispose` releases the
/// engine and may be followed by another `initialize`.
#[async_trait]
pub trait ReceiptRecognizer: Send + Sync {
    async fn initialize(&mut self) -> Result<()>;
    async fn recognize(&self, image: &ReceiptImage) -> Result<Recognition>;
    async fn dispose(&mut self);
}

/// Turns recognized receipt text into a best-effort candidate expense.
pub trait ReceiptTextParser: Send + Sync {
    fn parse(&self, recognition: &Recognition) -> CandidateExpense;
}

pub type ReceiptRecognizerBox = Box<dyn ReceiptRecognizer>;
pub type ReceiptTextParserBox = Box<dyn ReceiptTextParser>;
