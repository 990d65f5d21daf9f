use std::sync::Arc;

use tracing::{debug, info, warn};

use study_core::model::{Analysis, DocumentId, ToolPayload};
use study_core::study::{StudyWorkspace, ToolKind, ToolRequest};

use crate::api::StudyApi;
use crate::error::{ApiError, WorkspaceServiceError};

/// Remote steps of a `StudyWorkspace`.
///
/// Each action is split around its single await: `begin_*` claims the
/// workspace, the call runs without holding it, and `finish_*` settles the
/// outcome. Callers that keep the workspace in UI state drive the three steps
/// themselves.
#[derive(Clone)]
pub struct WorkspaceService {
    api: Arc<dyn StudyApi>,
}

impl WorkspaceService {
    #[must_use]
    pub fn new(api: Arc<dyn StudyApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `WorkspaceServiceError::Workspace` if the workspace is busy,
    /// already shows a tool, or has been torn down.
    pub fn begin_tool(
        &self,
        workspace: &mut StudyWorkspace,
        kind: ToolKind,
    ) -> Result<ToolRequest, WorkspaceServiceError> {
        let request = workspace.begin_tool_request(kind)?;
        debug!(document = %request.document_id, tool = %kind, "requesting study tool");
        Ok(request)
    }

    /// Issue the generation call described by `request`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    pub async fn generate(&self, request: ToolRequest) -> Result<ToolPayload, ApiError> {
        let payload = match request.kind {
            ToolKind::Quiz => ToolPayload::Quiz(self.api.generate_quiz(request.document_id).await?),
            ToolKind::Flashcards => ToolPayload::Flashcards(
                self.api.generate_flashcards(request.document_id).await?,
            ),
        };
        info!(
            document = %request.document_id,
            tool = %request.kind,
            title = payload.title(),
            "generated study tool"
        );
        Ok(payload)
    }

    /// Mount the generated tool, or release the workspace on failure so the
    /// action can be retried. The document is never touched.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceServiceError::Api` for a failed call and
    /// `WorkspaceServiceError::Workspace` if the payload cannot be mounted.
    pub fn finish_tool(
        &self,
        workspace: &mut StudyWorkspace,
        request: ToolRequest,
        outcome: Result<ToolPayload, ApiError>,
    ) -> Result<ToolKind, WorkspaceServiceError> {
        match outcome {
            Ok(payload) => workspace.complete_tool_request(payload).map_err(|err| {
                warn!(tool = %request.kind, error = %err, "study tool rejected");
                WorkspaceServiceError::from(err)
            }),
            Err(err) => {
                warn!(tool = %request.kind, error = %err, "study tool generation failed");
                workspace.fail_tool_request();
                Err(err.into())
            }
        }
    }

    /// # Errors
    ///
    /// Returns `WorkspaceServiceError::Workspace` if the workspace is busy or
    /// has been torn down.
    pub fn begin_analysis(
        &self,
        workspace: &mut StudyWorkspace,
    ) -> Result<DocumentId, WorkspaceServiceError> {
        let document_id = workspace.begin_analysis()?;
        debug!(document = %document_id, "requesting analysis");
        Ok(document_id)
    }

    /// # Errors
    ///
    /// Returns `ApiError` if the backend call fails.
    pub async fn fetch_analysis(&self, document_id: DocumentId) -> Result<Analysis, ApiError> {
        self.api.analyze_document(document_id).await
    }

    /// Apply the analysis to the document in place, or release the workspace
    /// on failure.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceServiceError` if the call failed or the workspace no
    /// longer expects a result.
    pub fn finish_analysis(
        &self,
        workspace: &mut StudyWorkspace,
        document_id: DocumentId,
        outcome: Result<Analysis, ApiError>,
    ) -> Result<(), WorkspaceServiceError> {
        match outcome {
            Ok(analysis) => {
                workspace.complete_analysis(analysis)?;
                info!(document = %document_id, "document analysed");
                Ok(())
            }
            Err(err) => {
                warn!(document = %document_id, error = %err, "analysis failed");
                workspace.fail_analysis();
                Err(err.into())
            }
        }
    }
}
