use crate::model::{navigable, Category, CategoryId, ProductCard};
use crate::notify::Notice;

pub const DEFAULT_TITLE: &str = "Sản phẩm";
pub const DEFAULT_TAGLINE: &str = "Khám phá các sản phẩm chất lượng cao của chúng tôi";
pub const ALL_PRODUCTS_LABEL: &str = "Tất cả sản phẩm";

/// Everything the browse screen publishes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseState {
    /// Navigation parameter of the latest resolution.
    pub category_param: Option<String>,
    /// All categories, as fetched.
    pub categories: Vec<Category>,
    /// The category matching `category_param`, once resolved.
    pub current: Option<Category>,
    pub products: Vec<ProductCard>,
    pub loading: bool,
    pub notice: Option<Notice>,
    /// Generation of the resolution that produced this state.
    pub generation: u64,
}

/// One sidebar entry. `category_id` is `None` for the "all products" link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    pub label: String,
    pub category_id: Option<CategoryId>,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sidebar {
    /// No categories yet; render a skeleton.
    Placeholder,
    Links(Vec<SidebarLink>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub description: String,
}

impl BrowseState {
    /// Whether the resolution for `generation` has finished.
    pub fn is_settled(&self, generation: u64) -> bool {
        self.generation == generation && !self.loading
    }

    /// "All products" followed by the active categories in sort order.
    pub fn sidebar(&self) -> Sidebar {
        if self.categories.is_empty() {
            return Sidebar::Placeholder;
        }
        let param = self.category_param.as_deref();
        let all = SidebarLink {
            label: ALL_PRODUCTS_LABEL.to_string(),
            category_id: None,
            current: param.is_none(),
        };
        let links = navigable(&self.categories).into_iter().map(|c| SidebarLink {
            label: c.category_name.clone(),
            category_id: Some(c.category_id),
            current: param.is_some_and(|p| c.category_id.matches_param(p)),
        });
        Sidebar::Links(std::iter::once(all).chain(links).collect())
    }

    pub fn header(&self) -> Header {
        match &self.current {
            Some(category) => Header {
                title: category.category_name.clone(),
                description: category
                    .notes
                    .clone()
                    .filter(|notes| !notes.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_TAGLINE.to_string()),
            },
            None => Header {
                title: DEFAULT_TITLE.to_string(),
                description: DEFAULT_TAGLINE.to_string(),
            },
        }
    }
}
