//! Navigation catalog types

use crate::error::CatalogError;
use crate::role::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

/// Identifier of a navigation destination
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(String);

impl TabId {
    /// Create a tab id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Tab id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Static navigation destination descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display name
    pub name: String,

    /// Destination tab
    pub tab: TabId,

    /// Render regardless of session or role state
    #[serde(default)]
    pub always_show: bool,

    /// Roles that may see this item. `None` declares no restriction; an
    /// empty list makes the item visible to nobody.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_roles: Option<Vec<Role>>,
}

impl NavItem {
    /// Create an item with no restriction
    pub fn new(name: impl Into<String>, tab: impl Into<TabId>) -> Self {
        Self {
            name: name.into(),
            tab: tab.into(),
            always_show: false,
            required_roles: None,
        }
    }

    /// Builder: render this item regardless of session or role state
    pub fn with_always_show(mut self) -> Self {
        self.always_show = true;
        self
    }

    /// Builder: restrict this item to the given roles
    pub fn with_required_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.required_roles = Some(roles.into_iter().collect());
        self
    }

    /// Check if any of the given roles satisfies this item's restriction
    ///
    /// An empty restriction list matches nothing.
    pub fn allows_roles(&self, roles: &BTreeSet<Role>) -> bool {
        match &self.required_roles {
            None => true,
            Some(required) => required.iter().any(|r| roles.contains(r)),
        }
    }
}

/// Ordered, tab-unique navigation catalog
///
/// Fixed at construction; this is configuration, not user data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavCatalog {
    items: Vec<NavItem>,
}

impl NavCatalog {
    /// Build a catalog, rejecting duplicate tab ids
    pub fn new(items: Vec<NavItem>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(&item.tab) {
                return Err(CatalogError::DuplicateTab(item.tab.as_str().to_string()));
            }
        }
        Ok(Self { items })
    }

    /// The stock dashboard catalog
    pub fn default_dashboard() -> Self {
        Self {
            items: vec![
                NavItem::new("Overview", "dashboard").with_always_show(),
                NavItem::new("Users", "users")
                    .with_required_roles([Role::admin(), Role::collector()]),
                NavItem::new("Financials", "financials")
                    .with_required_roles([Role::admin(), Role::collector()]),
                NavItem::new("System", "system").with_required_roles([Role::admin()]),
            ],
        }
    }

    /// Load a catalog from a JSON or YAML file, selected by extension
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let items: Vec<NavItem> = match extension {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
        };

        Self::new(items)
    }

    /// Items in catalog order
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Look up an item by tab
    pub fn get(&self, tab: &TabId) -> Option<&NavItem> {
        self.items.iter().find(|i| &i.tab == tab)
    }

    /// Check if a tab is in the catalog
    pub fn contains_tab(&self, tab: &TabId) -> bool {
        self.get(tab).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NavCatalog {
    fn default() -> Self {
        Self::default_dashboard()
    }
}
