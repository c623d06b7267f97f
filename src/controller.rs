use crate::error::AnalyzeError;
use crate::model::{ClassificationResult, ImageFile, PreviewId, PreviewRegistry, SelectedImage};
use bytes::Bytes;

/// Sequence number of one classification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// What the analyzer client needs to send one request.
#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: Ticket,
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending {
        ticket: Ticket,
        image: SelectedImage,
    },
    Resolved {
        image: SelectedImage,
        result: ClassificationResult,
    },
    Failed {
        image: SelectedImage,
        error: AnalyzeError,
    },
}

impl Phase {
    fn image(&self) -> Option<&SelectedImage> {
        match self {
            Phase::Idle => None,
            Phase::Pending { image, .. }
            | Phase::Resolved { image, .. }
            | Phase::Failed { image, .. } => Some(image),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Pending { .. } => "pending",
            Phase::Resolved { .. } => "resolved",
            Phase::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Owns the upload/classify state machine and every preview it hands out.
#[derive(Debug, Default)]
pub struct Controller {
    phase: Phase,
    last_ticket: u64,
    previews: PreviewRegistry,
}

impl Controller {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn previews(&self) -> &PreviewRegistry {
        &self.previews
    }

    pub fn current_preview(&self) -> Option<PreviewId> {
        self.phase.image().map(|image| image.preview)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::Pending { .. })
    }

    /// Starts classifying `file`, replacing whatever was shown before.
    ///
    /// Returns `None` while another request is in flight.
    pub fn select(&mut self, file: ImageFile) -> Option<Submission> {
        if let Phase::Pending { ticket, image } = &self.phase {
            log::warn!(
                "Ignoring {} while {} is still being analyzed ({ticket:?})",
                file.file_name,
                image.file.file_name
            );
            return None;
        }

        self.discard_current();

        let preview = self.previews.acquire(file.bytes.clone());
        log::info!(
            "Selected {} ({} bytes) as preview {preview:?}",
            file.file_name,
            file.size_bytes()
        );
        Some(self.submit(SelectedImage { file, preview }))
    }

    /// Resubmits the image of a failed request.
    pub fn retry(&mut self) -> Option<Submission> {
        match std::mem::take(&mut self.phase) {
            Phase::Failed { image, error } => {
                log::info!(
                    "Retrying {} after {} error",
                    image.file.file_name,
                    error.kind()
                );
                Some(self.submit(image))
            }
            other => {
                log::debug!("Retry ignored in {} phase", other.name());
                self.phase = other;
                None
            }
        }
    }

    /// Applies the outcome of `ticket`, unless a newer selection or a reset superseded it.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<ClassificationResult, AnalyzeError>,
    ) -> Completion {
        let current = match &self.phase {
            Phase::Pending { ticket: current, .. } => Some(*current),
            _ => None,
        };
        if current != Some(ticket) {
            log::debug!(
                "Discarding stale outcome for {ticket:?} in {} phase",
                self.phase.name()
            );
            return Completion::Stale;
        }

        let Phase::Pending { image, .. } = std::mem::take(&mut self.phase) else {
            return Completion::Stale;
        };

        self.phase = match outcome {
            Ok(result) => {
                log::info!(
                    "{} classified as {} ({})",
                    image.file.file_name,
                    result.image_type,
                    result.confidence
                );
                Phase::Resolved { image, result }
            }
            Err(error) => {
                log::warn!("Analysis of {} failed: {error}", image.file.file_name);
                Phase::Failed { image, error }
            }
        };
        Completion::Applied
    }

    /// Returns to `Idle`, releasing the preview and dropping any result or error.
    pub fn reset(&mut self) {
        self.discard_current();
    }

    fn submit(&mut self, image: SelectedImage) -> Submission {
        self.last_ticket += 1;
        let ticket = Ticket(self.last_ticket);
        let submission = Submission {
            ticket,
            file_name: image.file.file_name.clone(),
            bytes: image.file.bytes.clone(),
        };
        log::info!("Submitting {} as {ticket:?}", submission.file_name);
        self.phase = Phase::Pending { ticket, image };
        submission
    }

    fn discard_current(&mut self) {
        let previous = std::mem::take(&mut self.phase);
        if let Some(image) = previous.image() {
            self.previews.release(image.preview);
            log::debug!(
                "Left {} phase for {} ({} previews live)",
                previous.name(),
                image.file.file_name,
                self.previews.live_count()
            );
        }
    }
}
