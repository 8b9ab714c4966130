//! Hero and item name tables. Loaded once at startup, then only read.

use std::borrow::Cow;
use std::collections::HashMap;

use opendota_client::{HeroConstant, ItemConstant, OpenDotaClient};
use tracing::{info, warn};

/// Hero id → localized name. Unknown ids render as `"ID <n>"`.
#[derive(Debug, Clone, Default)]
pub struct HeroTable {
    names: HashMap<i64, String>,
}

impl HeroTable {
    pub fn from_constants(heroes: Vec<HeroConstant>) -> Self {
        heroes
            .into_iter()
            .map(|hero| (hero.id, hero.localized_name))
            .collect()
    }

    pub fn name(&self, id: i64) -> Cow<'_, str> {
        match self.names.get(&id) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("ID {}", id)),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(i64, String)> for HeroTable {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Item id → display name. Unknown ids render as `"Предмет <n>"`.
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    names: HashMap<i64, String>,
}

impl ItemTable {
    /// Uses `dname` when present, otherwise the internal item key.
    pub fn from_constants(items: HashMap<String, ItemConstant>) -> Self {
        items
            .into_iter()
            .map(|(key, item)| (item.id, item.dname.unwrap_or(key)))
            .collect()
    }

    pub fn name(&self, id: i64) -> Cow<'_, str> {
        match self.names.get(&id) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(format!("Предмет {}", id)),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(i64, String)> for ItemTable {
    fn from_iter<I: IntoIterator<Item = (i64, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

/// Both lookup tables. Construct once and share behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub heroes: HeroTable,
    pub items: ItemTable,
}

impl ReferenceData {
    pub fn new(heroes: HeroTable, items: ItemTable) -> Self {
        Self { heroes, items }
    }

    /// Fetches both tables. A failed fetch leaves that table empty; lookups then fall back to placeholders.
    pub async fn load(client: &OpenDotaClient) -> Self {
        let (heroes, items) = tokio::join!(client.heroes(), client.items());

        let heroes = match heroes {
            Ok(heroes) => HeroTable::from_constants(heroes),
            Err(e) => {
                warn!(error = %e, "Failed to load hero names, using placeholders");
                HeroTable::default()
            }
        };
        let items = match items {
            Ok(items) => ItemTable::from_constants(items),
            Err(e) => {
                warn!(error = %e, "Failed to load item names, using placeholders");
                ItemTable::default()
            }
        };

        info!(heroes = heroes.len(), items = items.len(), "Reference data loaded");
        Self { heroes, items }
    }
}
