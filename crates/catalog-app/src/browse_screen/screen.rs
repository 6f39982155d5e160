use super::{BrowseCommand, BrowseError, BrowseReply, BrowseState, FetchError};
use crate::api::{CatalogApi, Credentials};
use crate::context::CatalogContext;
use crate::model::Category;
use crate::notify::Notice;
use crate::validate;
use async_trait::async_trait;
use screen_framework::{Generation, Screen, Store, Ticket};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// The category browse screen: sidebar of categories and a product grid for
/// the category named by the navigation parameter.
pub struct BrowseScreen {
    store: Store<BrowseState>,
    generation: Generation,
    param: Option<String>,
    in_flight: Vec<JoinHandle<()>>,
}

impl BrowseScreen {
    pub fn new(param: Option<String>) -> Self {
        let param = normalize(param);
        Self {
            store: Store::new(BrowseState {
                category_param: param.clone(),
                ..BrowseState::default()
            }),
            generation: Generation::new(),
            param,
            in_flight: Vec::new(),
        }
    }

    /// Supersedes any running resolution and spawns a new one.
    fn start(&mut self, ctx: &CatalogContext) -> BrowseReply {
        let ticket = self.generation.begin();
        let generation = ticket.id();
        let param = self.param.clone();
        info!(generation, param = ?param, "Resolving category");

        self.store.update(|s| {
            s.category_param = param.clone();
            s.generation = generation;
            s.loading = true;
            s.notice = None;
            s.current = None;
            s.products.clear();
        });

        let resolution = Resolution {
            api: Arc::clone(&ctx.api),
            credentials: ctx.credentials.clone(),
            store: self.store.clone(),
            ticket,
            param,
        };
        self.in_flight.retain(|handle| !handle.is_finished());
        self.in_flight.push(tokio::spawn(resolution.run()));
        BrowseReply::Started { generation }
    }
}

fn normalize(param: Option<String>) -> Option<String> {
    param.filter(|p| !p.is_empty())
}

/// One run of: categories → match parameter → products of that category.
///
/// Every write goes through the ticket; once superseded, the run stops at its
/// next write.
struct Resolution {
    api: Arc<dyn CatalogApi>,
    credentials: Credentials,
    store: Store<BrowseState>,
    ticket: Ticket,
    param: Option<String>,
}

impl Resolution {
    async fn run(self) {
        let generation = self.ticket.id();

        let categories = match self.api.list_categories(&self.credentials).await {
            Ok(body) => validate::category_list(&body).map_err(FetchError::from),
            Err(e) => Err(FetchError::from(e)),
        };
        let categories: Vec<Category> = match categories {
            Ok(categories) => categories,
            Err(error) => {
                warn!(generation, %error, "Category fetch failed");
                self.finish(|s| s.notice = Some(Notice::LoadFailed));
                return;
            }
        };

        let current = self.param.as_deref().and_then(|param| {
            categories
                .iter()
                .find(|c| c.category_id.matches_param(param))
                .cloned()
        });
        let published = self.store.update_if_current(&self.ticket, |s| {
            s.categories = categories;
            s.current = current.clone();
        });
        if !published {
            debug!(generation, "Superseded after category fetch");
            return;
        }

        let Some(param) = self.param.as_deref() else {
            self.finish(|_| {});
            return;
        };
        let Some(category) = current else {
            info!(generation, param, "Category not found");
            self.finish(|s| s.notice = Some(Notice::CategoryNotFound));
            return;
        };

        let cards = match self
            .api
            .products_by_category(&self.credentials, category.category_id)
            .await
        {
            Ok(body) => validate::product_cards(&body).map_err(FetchError::from),
            Err(e) => Err(FetchError::from(e)),
        };
        match cards {
            Ok(cards) if cards.is_empty() => {
                self.finish(|s| s.notice = Some(Notice::EmptyCategory));
            }
            Ok(cards) => {
                info!(generation, count = cards.len(), "Category products loaded");
                self.finish(|s| s.products = cards);
            }
            Err(error) => {
                warn!(generation, %error, "Product fetch failed");
                self.finish(|s| s.notice = Some(Notice::LoadFailed));
            }
        }
    }

    /// Final write of the run; clears `loading`.
    fn finish(&self, f: impl FnOnce(&mut BrowseState)) {
        let applied = self.store.update_if_current(&self.ticket, |s| {
            f(s);
            s.loading = false;
        });
        if !applied {
            debug!(generation = self.ticket.id(), "Superseded, result dropped");
        }
    }
}

#[async_trait]
impl Screen for BrowseScreen {
    type Command = BrowseCommand;
    type Reply = BrowseReply;
    type State = BrowseState;
    type Context = CatalogContext;
    type Error = BrowseError;

    fn store(&self) -> &Store<BrowseState> {
        &self.store
    }

    async fn on_mount(&mut self, ctx: &CatalogContext) -> Result<(), BrowseError> {
        self.start(ctx);
        Ok(())
    }

    async fn handle(
        &mut self,
        command: BrowseCommand,
        ctx: &CatalogContext,
    ) -> Result<BrowseReply, BrowseError> {
        match command {
            BrowseCommand::Navigate(param) => {
                self.param = normalize(param);
                Ok(self.start(ctx))
            }
            BrowseCommand::Reload => Ok(self.start(ctx)),
        }
    }

    async fn on_unmount(&mut self, _ctx: &CatalogContext) {
        for handle in self.in_flight.drain(..) {
            handle.abort();
        }
        info!(generation = self.generation.current(), "Browse screen final state");
    }
}
