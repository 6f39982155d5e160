use super::{
    AdminCommand, AdminError, AdminState, DeleteDialog, DialogPhase, FailureKind, Outcome,
    ProductForm,
};
use crate::context::CatalogContext;
use crate::filter::compute_filtered_list;
use crate::model::{FormKind, FormMode, ProductDraft, ProductId};
use crate::notify::Notice;
use crate::validate;
use async_trait::async_trait;
use screen_framework::{Screen, Store};
use tracing::{debug, info, warn};

/// The catalog admin screen: product table, filter and CRUD dialogs.
pub struct AdminScreen {
    store: Store<AdminState>,
}

impl Default for AdminScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminScreen {
    pub fn new() -> Self {
        Self {
            store: Store::new(AdminState::default()),
        }
    }

    fn notify(&self, notice: Notice) {
        self.store.update(|s| s.notices.push(notice));
    }

    /// Runs `f` on the selected form, or fails when the edit form was never opened.
    fn with_form<R>(
        &self,
        kind: FormKind,
        f: impl FnOnce(&mut ProductForm) -> Result<R, AdminError>,
    ) -> Result<R, AdminError> {
        let mut result = Err(AdminError::NoEditTarget);
        self.store.update(|s| {
            if let Some(form) = s.form_mut(kind) {
                result = f(form);
            }
        });
        result
    }

    // ---- loads ----

    async fn load_products(&self, ctx: &CatalogContext) -> Outcome {
        if ctx.credentials.require().is_err() {
            warn!("Product load skipped: not logged in");
            self.notify(Notice::LoginRequired);
            return Outcome::Failed(FailureKind::MissingCredential);
        }

        self.store.update(|s| s.loading = true);
        let result = ctx
            .api
            .list_products(&ctx.credentials, 1, ctx.page_size)
            .await;

        let (products, failure) = match result {
            Ok(body) => match validate::product_list(&body) {
                Ok(products) => (products, None),
                Err(e) => {
                    warn!(error = %e, "Product list has unexpected shape");
                    (Vec::new(), Some((FailureKind::from(&e), Notice::InvalidDataFormat)))
                }
            },
            Err(e) => {
                warn!(error = %e, "Product load failed");
                (Vec::new(), Some((FailureKind::from(&e), Notice::LoadProductsFailed)))
            }
        };

        info!(count = products.len(), "Products loaded");
        self.store.update(|s| {
            s.filtered = compute_filtered_list(&products, &s.filter_term);
            s.products = products;
            s.loading = false;
            if let Some((_, notice)) = failure {
                s.notices.push(notice);
            }
        });
        match failure {
            Some((kind, _)) => Outcome::Failed(kind),
            None => Outcome::Succeeded,
        }
    }

    /// Failures keep the last-known categories.
    async fn load_categories(&self, ctx: &CatalogContext) -> Outcome {
        if ctx.credentials.require().is_err() {
            debug!("Category load skipped: not logged in");
            return Outcome::Failed(FailureKind::MissingCredential);
        }

        let categories = match ctx.api.list_categories(&ctx.credentials).await {
            Ok(body) => validate::category_list(&body).map_err(|e| {
                warn!(error = %e, "Category list has unexpected shape");
                FailureKind::from(&e)
            }),
            Err(e) => {
                warn!(error = %e, "Category load failed");
                Err(FailureKind::from(&e))
            }
        };

        match categories {
            Ok(categories) => {
                let active: Vec<_> = categories.into_iter().filter(|c| c.is_active).collect();
                info!(count = active.len(), "Categories loaded");
                self.store.update(|s| s.categories = active);
                Outcome::Succeeded
            }
            Err(kind) => {
                self.notify(Notice::LoadCategoriesFailed);
                Outcome::Failed(kind)
            }
        }
    }

    // ---- dialogs ----

    fn open_edit(&self, id: ProductId) -> Result<Outcome, AdminError> {
        let product = self
            .store
            .read(|s| s.product(id).cloned())
            .ok_or(AdminError::UnknownProduct(id))?;
        if self.store.read(|s| s.edit.as_ref().is_some_and(ProductForm::is_submitting)) {
            return Err(AdminError::Busy);
        }
        let mut form = ProductForm::edit(&product);
        form.phase = DialogPhase::Open;
        self.store.update(|s| s.edit = Some(form));
        Ok(Outcome::Applied)
    }

    async fn upload_image(
        &self,
        kind: FormKind,
        ctx: &CatalogContext,
    ) -> Result<Outcome, AdminError> {
        let staged = self.with_form(kind, |form| {
            if form.uploading {
                return Err(AdminError::Busy);
            }
            Ok(form.staged.clone())
        })?;
        let Some(file) = staged else {
            return Ok(Outcome::Unchanged);
        };
        if ctx.credentials.require().is_err() {
            self.notify(Notice::NotLoggedIn);
            return Ok(Outcome::Failed(FailureKind::MissingCredential));
        }

        self.with_form(kind, |form| {
            form.uploading = true;
            Ok(())
        })?;
        let url = match ctx.api.upload_image(&ctx.credentials, &file).await {
            Ok(body) => validate::image_url(&body).map_err(|e| FailureKind::from(&e)),
            Err(e) => Err(FailureKind::from(&e)),
        };

        let outcome = self.with_form(kind, |form| {
            form.uploading = false;
            Ok(match &url {
                Ok(url) => {
                    form.draft.push_image(url.clone());
                    form.staged = None;
                    Outcome::Succeeded
                }
                Err(kind) => Outcome::Failed(*kind),
            })
        })?;
        match &url {
            Ok(url) => {
                info!(%url, "Image uploaded");
                self.notify(Notice::ImageUploaded);
            }
            Err(kind) => {
                warn!(?kind, file = %file.file_name, "Image upload failed");
                self.notify(Notice::UploadFailed);
            }
        }
        Ok(outcome)
    }

    async fn submit(&self, kind: FormKind, ctx: &CatalogContext) -> Result<Outcome, AdminError> {
        let (mode, draft): (FormMode, ProductDraft) = self.with_form(kind, |form| match form.phase {
            DialogPhase::Closed => Err(AdminError::DialogClosed(kind)),
            DialogPhase::Submitting => Err(AdminError::Busy),
            DialogPhase::Open => Ok((form.mode, form.draft.clone())),
        })?;
        if ctx.credentials.require().is_err() {
            self.notify(Notice::NotLoggedIn);
            return Ok(Outcome::Failed(FailureKind::MissingCredential));
        }

        self.with_form(kind, |form| {
            form.phase = DialogPhase::Submitting;
            Ok(())
        })?;
        let (result, success, failure) = match mode {
            FormMode::Create => (
                ctx.api.create_product(&ctx.credentials, &draft).await,
                Notice::ProductCreated,
                Notice::CreateFailed,
            ),
            FormMode::Edit(id) => (
                ctx.api.update_product(&ctx.credentials, id, &draft).await,
                Notice::ProductUpdated,
                Notice::UpdateFailed,
            ),
        };

        match result {
            Ok(_) => {
                info!(?mode, code = %draft.product_code, "Product saved");
                self.with_form(kind, |form| {
                    form.phase = DialogPhase::Closed;
                    form.staged = None;
                    if form.mode == FormMode::Create {
                        form.draft = ProductDraft::default();
                    }
                    Ok(())
                })?;
                self.notify(success);
                self.load_products(ctx).await;
                Ok(Outcome::Succeeded)
            }
            Err(e) => {
                warn!(?mode, error = %e, "Product save failed");
                self.with_form(kind, |form| {
                    form.phase = DialogPhase::Open;
                    Ok(())
                })?;
                self.notify(failure);
                Ok(Outcome::Failed(FailureKind::from(&e)))
            }
        }
    }

    async fn confirm_delete(&self, ctx: &CatalogContext) -> Result<Outcome, AdminError> {
        let target = match self.store.read(|s| s.delete) {
            DeleteDialog::Closed => return Err(AdminError::NoDeleteTarget),
            DeleteDialog::Deleting { .. } => return Err(AdminError::Busy),
            DeleteDialog::Open { target } => target,
        };
        if ctx.credentials.require().is_err() {
            self.notify(Notice::NotLoggedIn);
            return Ok(Outcome::Failed(FailureKind::MissingCredential));
        }

        self.store.update(|s| s.delete = DeleteDialog::Deleting { target });
        match ctx.api.delete_product(&ctx.credentials, target).await {
            Ok(()) => {
                info!(id = %target, "Product deleted");
                self.store.update(|s| {
                    s.delete = DeleteDialog::Closed;
                    s.notices.push(Notice::ProductDeleted);
                });
                self.load_products(ctx).await;
                Ok(Outcome::Succeeded)
            }
            Err(e) => {
                warn!(id = %target, error = %e, "Product delete failed");
                self.store.update(|s| {
                    s.delete = DeleteDialog::Open { target };
                    s.notices.push(Notice::DeleteFailed);
                });
                Ok(Outcome::Failed(FailureKind::from(&e)))
            }
        }
    }
}

#[async_trait]
impl Screen for AdminScreen {
    type Command = AdminCommand;
    type Reply = Outcome;
    type State = AdminState;
    type Context = CatalogContext;
    type Error = AdminError;

    fn store(&self) -> &Store<AdminState> {
        &self.store
    }

    /// Loads products, then categories.
    async fn on_mount(&mut self, ctx: &CatalogContext) -> Result<(), AdminError> {
        self.load_products(ctx).await;
        self.load_categories(ctx).await;
        Ok(())
    }

    async fn handle(
        &mut self,
        command: AdminCommand,
        ctx: &CatalogContext,
    ) -> Result<Outcome, AdminError> {
        match command {
            AdminCommand::LoadProducts | AdminCommand::Refresh => Ok(self.load_products(ctx).await),
            AdminCommand::LoadCategories => Ok(self.load_categories(ctx).await),
            AdminCommand::SetFilter(term) => {
                self.store.update(|s| {
                    s.filtered = compute_filtered_list(&s.products, &term);
                    s.filter_term = term;
                });
                Ok(Outcome::Applied)
            }
            AdminCommand::OpenView(id) => {
                let product = self
                    .store
                    .read(|s| s.product(id).cloned())
                    .ok_or(AdminError::UnknownProduct(id))?;
                self.store.update(|s| s.viewing = Some(product));
                Ok(Outcome::Applied)
            }
            AdminCommand::CloseView => {
                self.store.update(|s| s.viewing = None);
                Ok(Outcome::Applied)
            }
            AdminCommand::OpenCreate => self.with_form(FormKind::Add, |form| {
                if form.is_submitting() {
                    return Err(AdminError::Busy);
                }
                form.phase = DialogPhase::Open;
                Ok(Outcome::Applied)
            }),
            AdminCommand::OpenEdit(id) => self.open_edit(id),
            AdminCommand::CloseForm(kind) => self.with_form(kind, |form| {
                if form.is_submitting() {
                    return Err(AdminError::Busy);
                }
                form.phase = DialogPhase::Closed;
                Ok(Outcome::Applied)
            }),
            AdminCommand::SetField { form, field, value } => self.with_form(form, |f| {
                f.set_field(field, &value)?;
                Ok(Outcome::Applied)
            }),
            AdminCommand::StageImage { form, file } => self.with_form(form, |f| {
                f.staged = Some(file);
                Ok(Outcome::Applied)
            }),
            AdminCommand::UploadImage(kind) => self.upload_image(kind, ctx).await,
            AdminCommand::RemoveImage { form, index } => self.with_form(form, |f| {
                Ok(match f.draft.remove_image(index) {
                    Some(_) => Outcome::Applied,
                    None => Outcome::Unchanged,
                })
            }),
            AdminCommand::Submit(kind) => self.submit(kind, ctx).await,
            AdminCommand::RequestDelete(id) => {
                if self.store.read(|s| s.product(id).is_none()) {
                    return Err(AdminError::UnknownProduct(id));
                }
                if matches!(self.store.read(|s| s.delete), DeleteDialog::Deleting { .. }) {
                    return Err(AdminError::Busy);
                }
                self.store.update(|s| s.delete = DeleteDialog::Open { target: id });
                Ok(Outcome::Applied)
            }
            AdminCommand::CancelDelete => match self.store.read(|s| s.delete) {
                DeleteDialog::Deleting { .. } => Err(AdminError::Busy),
                DeleteDialog::Closed => Ok(Outcome::Unchanged),
                DeleteDialog::Open { .. } => {
                    self.store.update(|s| s.delete = DeleteDialog::Closed);
                    Ok(Outcome::Applied)
                }
            },
            AdminCommand::ConfirmDelete => self.confirm_delete(ctx).await,
            AdminCommand::DismissNotices => {
                self.store.update(|s| s.notices.clear());
                Ok(Outcome::Applied)
            }
        }
    }

    async fn on_unmount(&mut self, _ctx: &CatalogContext) {
        let (products, notices) = self.store.read(|s| (s.products.len(), s.notices.len()));
        info!(products, notices, "Admin screen final state");
    }
}
