use crate::api::ApiError;
use crate::model::{FormKind, ProductField, ProductId, StagedFile};
use crate::validate::ShapeError;

/// Commands understood by the admin screen.
#[derive(Debug)]
pub enum AdminCommand {
    LoadProducts,
    LoadCategories,
    /// Manual retry of the product load.
    Refresh,
    SetFilter(String),
    OpenView(ProductId),
    CloseView,
    OpenCreate,
    OpenEdit(ProductId),
    CloseForm(FormKind),
    SetField {
        form: FormKind,
        field: ProductField,
        value: String,
    },
    StageImage {
        form: FormKind,
        file: StagedFile,
    },
    UploadImage(FormKind),
    RemoveImage {
        form: FormKind,
        index: usize,
    },
    Submit(FormKind),
    RequestDelete(ProductId),
    CancelDelete,
    ConfirmDelete,
    DismissNotices,
}

/// Why a remote operation did not succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingCredential,
    Transport,
    Shape,
}

impl From<&ApiError> for FailureKind {
    fn from(error: &ApiError) -> Self {
        match error {
            ApiError::MissingCredential => FailureKind::MissingCredential,
            ApiError::Request(_) | ApiError::Status { .. } => FailureKind::Transport,
            ApiError::Decode(_) => FailureKind::Shape,
        }
    }
}

impl From<&ShapeError> for FailureKind {
    fn from(_: &ShapeError) -> Self {
        FailureKind::Shape
    }
}

/// Reply to every admin command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Local state changed.
    Applied,
    /// Nothing to do.
    Unchanged,
    /// A remote operation succeeded.
    Succeeded,
    /// A remote operation failed or was not attempted.
    Failed(FailureKind),
}
