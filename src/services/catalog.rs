//! Catalog sync engine.
//!
//! Pulls categories, products, addon groups and addons from the backend and
//! reconciles them into the local cache with wholesale-replace semantics.
//! The four fetches happen before any commit: a failed fetch aborts the sync
//! with every cached table untouched.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::domain::addon::{NewAddon, NewAddonGroup};
use crate::domain::category::NewCategory;
use crate::domain::product::NewProduct;
use crate::remote::CatalogApi;
use crate::remote::dto::CategoryDto;
use crate::repository::CatalogWriter;
use crate::services::{ServiceResult, expect_payload};

/// Row counts committed by a completed catalog sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogSyncSummary {
    pub categories: usize,
    pub products: usize,
    pub addon_groups: usize,
    pub addons: usize,
}

/// Catalog sync engine over a backend client and the local cache.
pub struct CatalogSync<A, R> {
    api: A,
    repo: R,
    // Serializes overlapping sync calls; a second sync's delete racing the
    // first sync's insert would leave the cache transiently empty.
    gate: Mutex<()>,
}

impl<A, R> CatalogSync<A, R>
where
    A: CatalogApi,
    R: CatalogWriter,
{
    pub fn new(api: A, repo: R) -> Self {
        Self {
            api,
            repo,
            gate: Mutex::new(()),
        }
    }

    /// Synchronize the full catalog.
    ///
    /// Table commits run in dependency order: categories, products, addon
    /// groups, addons. Each commit is one transactional delete+insert, so a
    /// failure mid-sequence leaves earlier tables fresh and later tables
    /// stale but never a half-written table.
    pub async fn sync_all(&self) -> ServiceResult<CatalogSyncSummary> {
        let _in_flight = self.gate.lock().await;

        // All-or-nothing fetch stage: nothing is committed from a partially
        // failed fetch set.
        let categories = expect_payload(self.api.get_categories().await?, "categories")?;
        let products = expect_payload(self.api.get_products(None).await?, "products")?;
        let addon_groups = expect_payload(self.api.get_addon_groups().await?, "addon groups")?;
        let standalone_addons = expect_payload(self.api.get_addons().await?, "addons")?;

        let category_rows: Vec<NewCategory> = categories
            .into_iter()
            .map(CategoryDto::into_new_category)
            .collect();

        let product_rows: Vec<NewProduct> = products
            .into_iter()
            .map(|product| product.into_new_product())
            .collect();

        // De-duplicate addons that appear both nested under a group and in
        // the standalone list. First pass: group-nested copies, attributed
        // to their group. Second pass: standalone copies fill in only ids
        // not seen yet, so a group attribution is never overwritten by an
        // ungrouped copy.
        let mut merged: HashMap<String, NewAddon> = HashMap::new();
        let mut group_rows: Vec<NewAddonGroup> = Vec::with_capacity(addon_groups.len());
        for group in addon_groups {
            for addon in group.addons.clone().unwrap_or_default() {
                merged.insert(
                    addon.id.clone(),
                    addon.into_new_addon(Some(group.id.clone())),
                );
            }
            group_rows.push(group.into_new_addon_group());
        }
        for addon in standalone_addons {
            merged
                .entry(addon.id.clone())
                .or_insert_with(|| addon.into_new_addon(None));
        }
        let addon_rows: Vec<NewAddon> = merged.into_values().collect();

        let summary = CatalogSyncSummary {
            categories: self.repo.replace_categories(&category_rows)?,
            products: self.repo.replace_products(&product_rows)?,
            addon_groups: self.repo.replace_addon_groups(&group_rows)?,
            addons: self.repo.replace_addons(&addon_rows)?,
        };

        log::info!(
            "catalog synced: {} categories, {} products, {} addon groups, {} addons",
            summary.categories,
            summary.products,
            summary.addon_groups,
            summary.addons
        );

        Ok(summary)
    }

    /// Refresh products only, harvesting the categories embedded in the
    /// product payloads. Categories are upserted rather than replaced since
    /// this path only sees the categories that currently have products.
    pub async fn refresh_products(&self) -> ServiceResult<usize> {
        let _in_flight = self.gate.lock().await;

        let products = expect_payload(self.api.get_products(None).await?, "products")?;

        let mut embedded: HashMap<String, CategoryDto> = HashMap::new();
        for product in &products {
            if let Some(category) = &product.category {
                embedded.insert(category.id.clone(), category.clone());
            }
        }
        if !embedded.is_empty() {
            let rows: Vec<NewCategory> = embedded
                .into_values()
                .map(CategoryDto::into_new_category)
                .collect();
            self.repo.upsert_categories(&rows)?;
        }

        let rows: Vec<NewProduct> = products
            .into_iter()
            .map(|product| product.into_new_product())
            .collect();
        let count = self.repo.replace_products(&rows)?;

        log::info!("product cache refreshed: {count} products");
        Ok(count)
    }
}
