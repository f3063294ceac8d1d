//! One-call navigation build for a full item list.

use serde::Serialize;

use crate::error::NavError;
use crate::item::{DocPost, NavItem};
use crate::paginate::add_doc_buttons_with;
use crate::tree::{DocTree, TreeOptions, build_nav_tree_with};

/// Build the navigation tree from the content loader's items.
///
/// The welcome page (slug equal to `options.welcome_slug`) is left out,
/// since the tree seeds its own welcome section.
///
/// # Errors
///
/// Returns [`NavError::Tree`] if an item references a missing section.
pub fn build_site_tree(items: &[NavItem], options: &TreeOptions) -> Result<DocTree, NavError> {
    let tree_items: Vec<NavItem> = items
        .iter()
        .filter(|item| item.slug.as_deref() != Some(options.welcome_slug.as_str()))
        .cloned()
        .collect();
    build_nav_tree_with(&tree_items, options)
}

/// Tree and linked reading order for a site.
#[derive(Clone, Debug, Serialize)]
pub struct SiteNavigation {
    /// Navigation tree.
    pub tree: DocTree,
    /// Pages in reading order with next/previous links.
    pub posts: Vec<DocPost>,
}

/// Build the tree and the linked page sequence from the content loader's items.
///
/// The welcome page is kept out of the tree (see [`build_site_tree`]) and
/// becomes the first page of the sequence instead.
///
/// # Errors
///
/// Returns the first [`NavError`] raised by tree building or pagination.
pub fn build_site_navigation(
    items: &[NavItem],
    options: &TreeOptions,
) -> Result<SiteNavigation, NavError> {
    let tree = build_site_tree(items, options)?;

    let posts: Vec<DocPost> = items.iter().cloned().map(DocPost::from).collect();
    let posts = add_doc_buttons_with(&posts, &tree, options)?;

    Ok(SiteNavigation { tree, posts })
}
