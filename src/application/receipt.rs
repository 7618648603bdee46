use crate::config::ScannerConfig;
use crate::domain::expense::CandidateExpense;
use crate::domain::ports::{ReceiptImage, ReceiptRecognizerBox, ReceiptTextParserBox, Recognition};
use crate::error::{Result, SplitError};
use tracing::{debug, warn};

/// Drives a recognition engine over receipt images and hands the text to a
/// parser.
///
/// The engine is initialized on the first scan. Any failed scan disposes it,
/// so the next scan starts from a fresh engine.
pub struct ReceiptScanner {
    recognizer: ReceiptRecognizerBox,
    parser: ReceiptTextParserBox,
    config: ScannerConfig,
    ready: bool,
}

impl ReceiptScanner {
    pub fn new(
        recognizer: ReceiptRecognizerBox,
        parser: ReceiptTextParserBox,
        config: ScannerConfig,
    ) -> Self {
        Self {
            recognizer,
            parser,
            config,
            ready: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Checks media type and size before any engine work happens.
    pub fn validate(&self, image: &ReceiptImage) -> Result<()> {
        if !image.media_type.starts_with("image/") {
            return Err(SplitError::InvalidReceiptImage(format!(
                "expected an image, got {}",
                image.media_type
            )));
        }
        if image.bytes.is_empty() {
            return Err(SplitError::InvalidReceiptImage("image is empty".to_string()));
        }
        if image.bytes.len() > self.config.max_image_bytes {
            return Err(SplitError::InvalidReceiptImage(format!(
                "image is {} bytes, limit is {}",
                image.bytes.len(),
                self.config.max_image_bytes
            )));
        }
        Ok(())
    }

    /// Scans one receipt into a candidate expense.
    ///
    /// The candidate is untrusted: it still has to go through
    /// `CandidateExpense::into_expense` and `Ledger::add_expense`.
    pub async fn scan(&mut self, image: &ReceiptImage) -> Result<CandidateExpense> {
        self.validate(image)?;

        match self.recognize(image).await {
            Ok(recognition) => {
                let candidate = self.parser.parse(&recognition);
                debug!(?candidate, "receipt parsed");
                Ok(candidate)
            }
            Err(e) => {
                warn!("Error scanning receipt: {e}");
                self.release().await;
                Err(e)
            }
        }
    }

    async fn recognize(&mut self, image: &ReceiptImage) -> Result<Recognition> {
        if !self.ready {
            self.recognizer.initialize().await?;
            self.ready = true;
        }
        let recognition = self.recognizer.recognize(image).await?;
        debug!(confidence = recognition.confidence, "receipt recognized");
        if recognition.confidence < self.config.min_confidence {
            return Err(SplitError::LowConfidence {
                confidence: recognition.confidence,
                minimum: self.config.min_confidence,
            });
        }
        Ok(recognition)
    }

    async fn release(&mut self) {
        if self.ready {
            self.recognizer.dispose().await;
            self.ready = false;
        }
    }

    /// Disposes the engine if it is running.
    pub async fn shutdown(mut self) {
        self.release().await;
    }
}
