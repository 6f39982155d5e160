use super::AdminError;
use crate::model::{
    Category, CategoryId, FormKind, FormMode, Product, ProductDraft, ProductField, ProductId,
    StagedFile,
};
use crate::notify::Notice;

/// Add/edit dialog lifecycle: closed → open → submitting → closed | open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

/// One product form. The add and edit dialogs each own an instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub mode: FormMode,
    pub draft: ProductDraft,
    pub staged: Option<StagedFile>,
    pub uploading: bool,
    pub phase: DialogPhase,
}

impl ProductForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: ProductDraft::default(),
            staged: None,
            uploading: false,
            phase: DialogPhase::Closed,
        }
    }

    /// An edit form pre-filled from `product`.
    pub fn edit(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.product_id),
            draft: ProductDraft::from_product(product),
            staged: None,
            uploading: false,
            phase: DialogPhase::Closed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    /// Writes one field from raw text input.
    ///
    /// `defaultExpiration` falls back to 0 on bad input; the id fields reject
    /// it and keep their previous value.
    pub fn set_field(&mut self, field: ProductField, raw: &str) -> Result<(), AdminError> {
        let draft = &mut self.draft;
        match field {
            ProductField::Code => draft.product_code = raw.to_string(),
            ProductField::Name => draft.product_name = raw.to_string(),
            ProductField::Unit => draft.unit = raw.to_string(),
            ProductField::Description => draft.description = raw.to_string(),
            ProductField::DefaultExpiration => {
                draft.default_expiration = raw.trim().parse().unwrap_or(0)
            }
            ProductField::CategoryId => draft.category_id = CategoryId(parse_int(field, raw)?),
            ProductField::TaxId => draft.tax_id = parse_int(field, raw)?,
        }
        Ok(())
    }
}

fn parse_int(field: ProductField, raw: &str) -> Result<i64, AdminError> {
    raw.trim().parse().map_err(|_| AdminError::InvalidField {
        field,
        value: raw.to_string(),
    })
}

/// Delete confirmation: closed → open(target) → deleting → closed | open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteDialog {
    #[default]
    Closed,
    Open { target: ProductId },
    Deleting { target: ProductId },
}

impl DeleteDialog {
    pub fn target(&self) -> Option<ProductId> {
        match self {
            DeleteDialog::Closed => None,
            DeleteDialog::Open { target } | DeleteDialog::Deleting { target } => Some(*target),
        }
    }
}

/// Everything the admin screen publishes.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminState {
    /// Authoritative list, as last loaded.
    pub products: Vec<Product>,
    /// `products` filtered by `filter_term`.
    pub filtered: Vec<Product>,
    /// Active categories only.
    pub categories: Vec<Category>,
    pub filter_term: String,
    pub loading: bool,
    pub add: ProductForm,
    /// `None` until the first product is opened for editing.
    pub edit: Option<ProductForm>,
    pub delete: DeleteDialog,
    /// Product shown in the read-only view dialog.
    pub viewing: Option<Product>,
    /// Notices not yet dismissed, oldest first.
    pub notices: Vec<Notice>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            filtered: Vec::new(),
            categories: Vec::new(),
            filter_term: String::new(),
            loading: false,
            add: ProductForm::create(),
            edit: None,
            delete: DeleteDialog::Closed,
            viewing: None,
            notices: Vec::new(),
        }
    }
}

impl AdminState {
    pub fn form(&self, kind: FormKind) -> Option<&ProductForm> {
        match kind {
            FormKind::Add => Some(&self.add),
            FormKind::Edit => self.edit.as_ref(),
        }
    }

    pub fn form_mut(&mut self, kind: FormKind) -> Option<&mut ProductForm> {
        match kind {
            FormKind::Add => Some(&mut self.add),
            FormKind::Edit => self.edit.as_mut(),
        }
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == id)
    }

    /// Name of a category by id, for display in the table.
    pub fn category_name(&self, id: CategoryId) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.category_id == id)
            .map(|c| c.category_name.as_str())
    }

    /// Whether any submission, deletion or upload is in flight.
    pub fn is_busy(&self) -> bool {
        self.add.is_submitting()
            || self.add.uploading
            || self.edit.as_ref().is_some_and(|f| f.is_submitting() || f.uploading)
            || matches!(self.delete, DeleteDialog::Deleting { .. })
    }
}
