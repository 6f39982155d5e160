//! # Admin Client
//!
//! Provides a high‑level API for driving the admin screen.
//! It wraps a `ScreenClient<AdminScreen>` and exposes one method per command.
use crate::admin_screen::{AdminCommand, AdminError, AdminScreen, Outcome};
use crate::model::{FormKind, ProductField, ProductId, StagedFile};
use async_trait::async_trait;
use screen_framework::{FrameworkError, ScreenClient, ScreenHandle};
use tracing::{debug, instrument};

/// Client for interacting with the admin screen.
#[derive(Clone)]
pub struct AdminClient {
    inner: ScreenClient<AdminScreen>,
}

impl AdminClient {
    pub fn new(inner: ScreenClient<AdminScreen>) -> Self {
        Self { inner }
    }

    async fn send(&self, command: AdminCommand) -> Result<Outcome, AdminError> {
        self.inner.send(command).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn load_products(&self) -> Result<Outcome, AdminError> {
        debug!("Sending request");
        self.send(AdminCommand::LoadProducts).await
    }

    #[instrument(skip(self))]
    pub async fn load_categories(&self) -> Result<Outcome, AdminError> {
        debug!("Sending request");
        self.send(AdminCommand::LoadCategories).await
    }

    pub async fn refresh(&self) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::Refresh).await
    }

    pub async fn set_filter(&self, term: impl Into<String>) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::SetFilter(term.into())).await
    }

    pub async fn open_view(&self, id: ProductId) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::OpenView(id)).await
    }

    pub async fn close_view(&self) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::CloseView).await
    }

    pub async fn open_create(&self) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::OpenCreate).await
    }

    pub async fn open_edit(&self, id: ProductId) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::OpenEdit(id)).await
    }

    pub async fn close_form(&self, form: FormKind) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::CloseForm(form)).await
    }

    pub async fn set_field(
        &self,
        form: FormKind,
        field: ProductField,
        value: impl Into<String>,
    ) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::SetField {
            form,
            field,
            value: value.into(),
        })
        .await
    }

    pub async fn stage_image(
        &self,
        form: FormKind,
        file: StagedFile,
    ) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::StageImage { form, file }).await
    }

    #[instrument(skip(self))]
    pub async fn upload_image(&self, form: FormKind) -> Result<Outcome, AdminError> {
        debug!("Sending request");
        self.send(AdminCommand::UploadImage(form)).await
    }

    pub async fn remove_image(&self, form: FormKind, index: usize) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::RemoveImage { form, index }).await
    }

    /// Submits the form: create for `Add`, full replace for `Edit`.
    #[instrument(skip(self))]
    pub async fn submit(&self, form: FormKind) -> Result<Outcome, AdminError> {
        debug!("Sending request");
        self.send(AdminCommand::Submit(form)).await
    }

    pub async fn request_delete(&self, id: ProductId) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::RequestDelete(id)).await
    }

    pub async fn cancel_delete(&self) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::CancelDelete).await
    }

    #[instrument(skip(self))]
    pub async fn confirm_delete(&self) -> Result<Outcome, AdminError> {
        debug!("Sending request");
        self.send(AdminCommand::ConfirmDelete).await
    }

    pub async fn dismiss_notices(&self) -> Result<Outcome, AdminError> {
        self.send(AdminCommand::DismissNotices).await
    }
}

#[async_trait]
impl ScreenHandle<AdminScreen> for AdminClient {
    type Error = AdminError;

    fn inner(&self) -> &ScreenClient<AdminScreen> {
        &self.inner
    }

    /// Rejections raised by the screen come back as themselves.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::ScreenError(inner) => match inner.downcast::<AdminError>() {
                Ok(admin) => *admin,
                Err(other) => AdminError::Communication(other.to_string()),
            },
            other => AdminError::Communication(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin_screen::AdminState;
    use assert_matches::assert_matches;
    use screen_framework::mock::{create_mock_client, expect_command, MockScreenClient};

    #[tokio::test]
    async fn test_set_field_sends_raw_value() {
        let (client, mut receiver, _store) =
            create_mock_client::<AdminScreen>(10, AdminState::default());
        let admin = AdminClient::new(client);

        let task = tokio::spawn(async move {
            admin
                .set_field(FormKind::Edit, ProductField::TaxId, "10")
                .await
        });

        let (command, responder) = expect_command(&mut receiver)
            .await
            .expect("Expected Command request");
        match command {
            AdminCommand::SetField { form, field, value } => {
                assert_eq!(form, FormKind::Edit);
                assert_eq!(field, ProductField::TaxId);
                assert_eq!(value, "10");
            }
            other => panic!("Expected SetField, got {other:?}"),
        }
        responder.send(Ok(Outcome::Applied)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Outcome::Applied);
    }

    #[tokio::test]
    async fn test_screen_rejection_is_downcast() {
        let mut mock = MockScreenClient::<AdminScreen>::new(AdminState::default());
        mock.expect_command()
            .return_err(FrameworkError::ScreenError(Box::new(AdminError::NoDeleteTarget)));
        mock.expect_command().return_err(FrameworkError::ActorClosed);

        let admin = AdminClient::new(mock.client());
        assert_matches!(admin.confirm_delete().await, Err(AdminError::NoDeleteTarget));
        assert_matches!(admin.refresh().await, Err(AdminError::Communication(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_snapshot_reads_published_state() {
        let mut mock = MockScreenClient::<AdminScreen>::new(AdminState::default());
        mock.expect_remount().return_ok();
        let admin = AdminClient::new(mock.client());

        mock.store().update(|s| s.filter_term = "su".into());
        assert_eq!(admin.snapshot().filter_term, "su");
        admin.remount().await.unwrap();
        mock.verify();
    }
}
