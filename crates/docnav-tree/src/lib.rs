//! Navigation tree building and page linking for documentation sites.
//!
//! This crate provides:
//! - [`build_nav_tree`]: builds a [`DocTree`] from a flat list of [`NavItem`]s
//! - [`convert_doc_posts`]: flattens a subtree into pages
//! - [`add_doc_buttons`]: produces the site's reading order with
//!   next/previous links
//!
//! Everything here is a pure function of its arguments. Loading items and
//! writing the results is left to the caller.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), docnav_tree::NavError> {
//! use docnav_tree::{DocPost, NavItem, add_doc_buttons, build_nav_tree};
//!
//! let items = vec![
//!     NavItem {
//!         title: "Guide".to_owned(),
//!         weight: 1.0,
//!         is_root_section: true,
//!         is_section: true,
//!         root_section_id: Some("guide".to_owned()),
//!         ..NavItem::default()
//!     },
//!     NavItem {
//!         title: "Install".to_owned(),
//!         weight: 1.0,
//!         root_section_id: Some("guide".to_owned()),
//!         slug: Some("/docs/guide/install".to_owned()),
//!         ..NavItem::default()
//!     },
//! ];
//! let tree = build_nav_tree(&items)?;
//!
//! let welcome = DocPost::from(NavItem {
//!     title: "Welcome".to_owned(),
//!     slug: Some("/docs".to_owned()),
//!     ..NavItem::default()
//! });
//! let posts = add_doc_buttons(&[welcome], &tree)?;
//!
//! assert_eq!(posts.len(), 3);
//! assert_eq!(posts[2].item.title, "Install");
//! # Ok(())
//! # }
//! ```

mod error;
mod item;
mod navigation;
mod paginate;
mod tree;

pub use error::{NavError, PaginationError, TraversalError, TreeError};
pub use item::{DocPost, NavItem, PageLink};
pub use navigation::{SiteNavigation, build_site_navigation, build_site_tree};
pub use paginate::{MAX_NESTING_DEPTH, add_doc_buttons, add_doc_buttons_with, convert_doc_posts};
pub use tree::{
    Children, DocTree, TreeNode, TreeOptions, WELCOME_SECTION_ID, build_nav_tree,
    build_nav_tree_with,
};
