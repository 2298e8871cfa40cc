use crate::models::{ImageData, VideoClip};
use tracing::debug;

/// Which AI operation produced (or is producing) a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiOperation {
    Edit,
    Video,
}

/// AI output held by a draft. One variant at a time, so a draft can never
/// carry an edited image and a video together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AiResult {
    #[default]
    None,
    Edited(ImageData),
    Generated(VideoClip),
}

impl AiResult {
    pub fn operation(&self) -> Option<AiOperation> {
        match self {
            AiResult::None => None,
            AiResult::Edited(_) => Some(AiOperation::Edit),
            AiResult::Generated(_) => Some(AiOperation::Video),
        }
    }
}

/// Where a draft is in the creation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    Empty,
    Staged,
    Processing(AiOperation),
    Enhanced(AiOperation),
}

/// What the modal preview shows
#[derive(Debug, PartialEq, Eq)]
pub enum Preview<'a> {
    Upload,
    Image(&'a ImageData),
    Video(&'a VideoClip),
}

/// Handed out by [`CreationDraft::begin`] and consumed by
/// [`CreationDraft::complete`]. Carries the image to send.
#[derive(Debug)]
pub struct Ticket {
    operation: AiOperation,
    generation: u64,
    image: ImageData,
}

impl Ticket {
    pub fn image(&self) -> &ImageData {
        &self.image
    }
}

/// Transient state of a listing being created
#[derive(Debug, Default)]
pub struct CreationDraft {
    image: Option<ImageData>,
    result: AiResult,
    processing: Option<AiOperation>,
    // Bumped whenever the staged image changes so late results for an old image are dropped
    generation: u64,
}

impl CreationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DraftPhase {
        if let Some(op) = self.processing {
            return DraftPhase::Processing(op);
        }
        match (&self.image, self.result.operation()) {
            (None, _) => DraftPhase::Empty,
            (Some(_), None) => DraftPhase::Staged,
            (Some(_), Some(op)) => DraftPhase::Enhanced(op),
        }
    }

    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn result(&self) -> &AiResult {
        &self.result
    }

    pub fn is_processing(&self) -> bool {
        self.processing.is_some()
    }

    /// Select a photo. Any AI output for the previous photo is dropped.
    pub fn stage_image(&mut self, image: ImageData) {
        debug!(mime_type = %image.mime_type, bytes = image.bytes.len(), "Staging image");
        self.image = Some(image);
        self.result = AiResult::None;
        self.generation += 1;
    }

    /// Remove the photo and anything generated from it
    pub fn clear_image(&mut self) {
        self.image = None;
        self.result = AiResult::None;
        self.generation += 1;
    }

    /// Whether the AI actions can be offered right now
    pub fn actions_available(&self) -> bool {
        self.image.is_some() && self.processing.is_none()
    }

    /// Start an AI operation. `None` when there is no image or one is already running.
    pub fn begin(&mut self, operation: AiOperation) -> Option<Ticket> {
        if !self.actions_available() {
            debug!(?operation, phase = ?self.phase(), "Ignoring AI request");
            return None;
        }
        let image = self.image.clone()?;

        self.processing = Some(operation);
        Some(Ticket {
            operation,
            generation: self.generation,
            image,
        })
    }

    /// Settle the operation started with `ticket`.
    ///
    /// A result of the ticket's kind replaces the current one. An absent or
    /// mismatched result leaves the draft as it was before `begin`. Results
    /// for an image that has since been cleared or replaced are discarded.
    pub fn complete(&mut self, ticket: Ticket, result: AiResult) -> DraftPhase {
        self.processing = None;

        if ticket.generation != self.generation {
            debug!(operation = ?ticket.operation, "Discarding result for a replaced image");
        } else if result.operation() == Some(ticket.operation) {
            self.result = result;
        }

        self.phase()
    }

    pub fn preview(&self) -> Preview<'_> {
        match (&self.image, &self.result) {
            (None, _) => Preview::Upload,
            (Some(_), AiResult::Generated(clip)) => Preview::Video(clip),
            (Some(_), AiResult::Edited(edited)) => Preview::Image(edited),
            (Some(image), AiResult::None) => Preview::Image(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> ImageData {
        ImageData::new("image/png", vec![1, 2, 3])
    }

    fn edited() -> ImageData {
        ImageData::new("image/png", vec![9, 9, 9])
    }

    fn clip() -> VideoClip {
        VideoClip {
            mime_type: "video/mp4".to_string(),
            bytes: vec![7],
            source_uri: "https://example.org/v".to_string(),
        }
    }

    #[test]
    fn test_new_draft_is_empty() {
        let draft = CreationDraft::new();
        assert_eq!(draft.phase(), DraftPhase::Empty);
        assert_eq!(draft.preview(), Preview::Upload);
        assert!(!draft.actions_available());
    }

    #[test]
    fn test_begin_without_image_is_noop() {
        let mut draft = CreationDraft::new();

        assert!(draft.begin(AiOperation::Edit).is_none());
        assert!(draft.begin(AiOperation::Video).is_none());
        assert_eq!(draft.phase(), DraftPhase::Empty);
    }

    #[test]
    fn test_edit_success_moves_to_enhanced() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());
        assert_eq!(draft.phase(), DraftPhase::Staged);

        let ticket = draft.begin(AiOperation::Edit).unwrap();
        assert_eq!(ticket.image(), &photo());
        assert_eq!(draft.phase(), DraftPhase::Processing(AiOperation::Edit));
        assert!(!draft.actions_available());

        let phase = draft.complete(ticket, AiResult::Edited(edited()));
        assert_eq!(phase, DraftPhase::Enhanced(AiOperation::Edit));
        assert_eq!(draft.preview(), Preview::Image(&edited()));
        assert_eq!(draft.image(), Some(&photo()));
    }

    #[test]
    fn test_video_success_tags_video_and_previews_video() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());

        let ticket = draft.begin(AiOperation::Video).unwrap();
        let phase = draft.complete(ticket, AiResult::Generated(clip()));

        assert_eq!(phase, DraftPhase::Enhanced(AiOperation::Video));
        assert_eq!(draft.preview(), Preview::Video(&clip()));
    }

    #[test]
    fn test_absent_result_returns_to_staged() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());

        let ticket = draft.begin(AiOperation::Edit).unwrap();
        let phase = draft.complete(ticket, AiResult::None);

        assert_eq!(phase, DraftPhase::Staged);
        assert_eq!(draft.image(), Some(&photo()));
        assert_eq!(draft.preview(), Preview::Image(&photo()));
    }

    #[test]
    fn test_second_operation_blocked_while_processing() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());

        let ticket = draft.begin(AiOperation::Edit).unwrap();
        assert!(draft.begin(AiOperation::Video).is_none());
        assert_eq!(draft.phase(), DraftPhase::Processing(AiOperation::Edit));

        draft.complete(ticket, AiResult::None);
        assert!(draft.begin(AiOperation::Video).is_some());
    }

    #[test]
    fn test_video_replaces_edited_image() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());

        let ticket = draft.begin(AiOperation::Edit).unwrap();
        draft.complete(ticket, AiResult::Edited(edited()));

        let ticket = draft.begin(AiOperation::Video).unwrap();
        assert_eq!(ticket.image(), &photo());
        draft.complete(ticket, AiResult::Generated(clip()));

        assert_eq!(draft.result(), &AiResult::Generated(clip()));
        assert_eq!(draft.preview(), Preview::Video(&clip()));
    }

    #[test]
    fn test_failed_retry_keeps_earlier_result() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());

        let ticket = draft.begin(AiOperation::Edit).unwrap();
        draft.complete(ticket, AiResult::Edited(edited()));

        let ticket = draft.begin(AiOperation::Video).unwrap();
        let phase = draft.complete(ticket, AiResult::None);

        assert_eq!(phase, DraftPhase::Enhanced(AiOperation::Edit));
        assert_eq!(draft.result(), &AiResult::Edited(edited()));
    }

    #[test]
    fn test_mismatched_result_is_ignored() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());

        let ticket = draft.begin(AiOperation::Edit).unwrap();
        let phase = draft.complete(ticket, AiResult::Generated(clip()));

        assert_eq!(phase, DraftPhase::Staged);
    }

    #[test]
    fn test_clear_image_drops_result() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());
        let ticket = draft.begin(AiOperation::Edit).unwrap();
        draft.complete(ticket, AiResult::Edited(edited()));

        draft.clear_image();

        assert_eq!(draft.phase(), DraftPhase::Empty);
        assert_eq!(draft.result(), &AiResult::None);
        assert_eq!(draft.preview(), Preview::Upload);
    }

    #[test]
    fn test_result_for_cleared_image_is_discarded() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());
        let ticket = draft.begin(AiOperation::Edit).unwrap();

        draft.clear_image();
        assert_eq!(draft.phase(), DraftPhase::Processing(AiOperation::Edit));

        let phase = draft.complete(ticket, AiResult::Edited(edited()));
        assert_eq!(phase, DraftPhase::Empty);
        assert_eq!(draft.result(), &AiResult::None);
    }

    #[test]
    fn test_restaging_drops_previous_result() {
        let mut draft = CreationDraft::new();
        draft.stage_image(photo());
        let ticket = draft.begin(AiOperation::Video).unwrap();
        draft.complete(ticket, AiResult::Generated(clip()));

        draft.stage_image(edited());

        assert_eq!(draft.phase(), DraftPhase::Staged);
        assert_eq!(draft.preview(), Preview::Image(&edited()));
    }
}
