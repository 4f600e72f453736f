use overlay_dom::ElementId;
use thiserror::Error;

/// Why a container could not get an overlay scrollbar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("container {0:?} is not in the document")]
    MissingContainer(ElementId),

    #[error("container {container:?} has no child marked `{attr}`")]
    MissingContent { container: ElementId, attr: String },

    #[error("content {content:?} is not a direct child of container {container:?}")]
    NotAChild {
        container: ElementId,
        content: ElementId,
    },

    #[error("container {0:?} already has an overlay scrollbar")]
    AlreadyBound(ElementId),
}
