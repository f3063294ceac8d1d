//! Navigation item and page types.
//!
//! [`NavItem`] is the flat input descriptor supplied by the content loader.
//! [`DocPost`] is the linear page form produced by pagination, carrying
//! optional [`PageLink`]s to the neighbouring pages.
//!
//! Both use camelCase field names on the wire (`isRootSection`,
//! `rootSectionId`, ...). Fields this crate does not interpret are kept in
//! `extra` and written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// Page or section descriptor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display title, unique within its sibling scope.
    pub title: String,
    /// Sort key, lower sorts first.
    #[serde(default)]
    pub weight: f64,
    /// Marks the single welcome entry of the site.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_root_element: bool,
    /// Top-level navigation grouping.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_root_section: bool,
    /// Grouping node (root sections are sections too).
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_section: bool,
    /// Root section this item belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_section_id: Option<String>,
    /// Intermediate section this item belongs to (or defines, for sections).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    /// Root section a sub-section nests under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Weight of the enclosing section, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_weight: Option<f64>,
    /// Resolvable URL path. Only navigable items have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Explicit link target overriding the slug.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Pre-release flag of a specification version. Absent means canonical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_prerelease: Option<bool>,
    /// Remaining frontmatter fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavItem {
    /// Whether pagination treats this item as a header rather than a page.
    #[must_use]
    pub fn is_boundary(&self) -> bool {
        self.is_root_element || self.is_section
    }
}

/// Link to an adjacent page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Link label.
    pub title: String,
    /// Target URL path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl PageLink {
    /// Link pointing straight at `post`.
    #[must_use]
    pub fn to(post: &DocPost) -> Self {
        Self {
            title: post.item.title.clone(),
            href: post.item.slug.clone(),
        }
    }
}

/// Navigation item projected into page form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocPost {
    /// Item this page was projected from.
    #[serde(flatten)]
    pub item: NavItem,
    /// Following page in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<PageLink>,
    /// Preceding page in reading order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page: Option<PageLink>,
}

impl From<NavItem> for DocPost {
    fn from(item: NavItem) -> Self {
        Self {
            item,
            next_page: None,
            prev_page: None,
        }
    }
}
