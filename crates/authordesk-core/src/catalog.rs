//! Book catalog records and the purchase flow.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::links::LinkOpener;
use crate::notice::Notices;
use crate::row::{RowAllocator, RowId};

pub const NO_SELECTION_NOTICE: &str = "Please select a book to buy.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
    /// Vendor name to purchase URI. An empty URI means no link is known.
    #[serde(default)]
    pub purchase_links: IndexMap<String, String>,
}

impl CatalogItem {
    pub fn label(&self) -> String {
        let title = if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        };
        let price = if self.price.is_empty() {
            "N/A"
        } else {
            &self.price
        };
        format!("{title} - ${price}")
    }

    pub fn link_for(&self, vendor: &str) -> Option<&str> {
        self.purchase_links
            .get(vendor)
            .map(|link| link.trim())
            .filter(|link| !link.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purchase {
    Opened,
    NoSelection,
    NoLink,
    OpenFailed,
}

pub struct CatalogPanel {
    items: Vec<CatalogItem>,
    rows: IndexMap<RowId, usize>,
    vendors: Vec<String>,
    selected: Option<RowId>,
}

impl CatalogPanel {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let mut allocator = RowAllocator::default();
        let rows = (0..items.len())
            .map(|index| (allocator.allocate(), index))
            .collect();
        let vendors: IndexSet<String> = items
            .iter()
            .flat_map(|item| item.purchase_links.keys().cloned())
            .collect();
        Self {
            items,
            rows,
            vendors: vendors.into_iter().collect(),
            selected: None,
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = (RowId, &CatalogItem)> + '_ {
        self.rows
            .iter()
            .filter_map(|(row, index)| self.items.get(*index).map(|item| (*row, item)))
    }

    pub fn vendors(&self) -> &[String] {
        &self.vendors
    }

    pub fn item(&self, row: RowId) -> Option<&CatalogItem> {
        self.rows.get(&row).and_then(|index| self.items.get(*index))
    }

    pub fn selected(&self) -> Option<RowId> {
        self.selected
    }

    pub fn select(&mut self, row: RowId) {
        if self.rows.contains_key(&row) {
            self.selected = Some(row);
        }
    }

    pub fn purchase(
        &self,
        vendor: &str,
        opener: &dyn LinkOpener,
        notices: &mut Notices,
    ) -> Purchase {
        let Some(item) = self.selected.and_then(|row| self.item(row)) else {
            notices.warning(NO_SELECTION_NOTICE);
            return Purchase::NoSelection;
        };
        let Some(link) = item.link_for(vendor) else {
            debug!(title = %item.title, vendor, "no purchase link");
            notices.info(format!("No {vendor} link provided for this book."));
            return Purchase::NoLink;
        };
        match opener.open(link) {
            Ok(()) => Purchase::Opened,
            Err(err) => {
                warn!(link, ?err, "failed to open purchase link");
                notices.error(format!("Failed to open {link}"));
                Purchase::OpenFailed
            }
        }
    }
}
