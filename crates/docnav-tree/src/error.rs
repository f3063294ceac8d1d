//! Error types for tree building and pagination.

/// Failure while placing items into the navigation tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// A sub-section names a parent section that is not in the tree.
    #[error("Parent section {parent} not found for item {title}")]
    MissingParentSection {
        /// Parent section id the item referenced.
        parent: String,
        /// Title of the offending item.
        title: String,
    },
    /// A page names a root section that is not in the tree.
    #[error("Root section {root} not found for item {title}")]
    MissingRootSection {
        /// Root section id the item referenced.
        root: String,
        /// Title of the offending item.
        title: String,
    },
    /// An item that must be placed under a root section has no root section id.
    #[error("Item {title} has no root section id")]
    MissingRootSectionId {
        /// Title of the offending item.
        title: String,
    },
    /// A sub-section declares a parent but no section id to be keyed by.
    #[error("Section {title} declares a parent but has no section id")]
    MissingSectionId {
        /// Title of the offending item.
        title: String,
    },
}

/// Failure while flattening a tree into pages.
#[derive(Debug, thiserror::Error)]
pub enum TraversalError {
    /// The tree nests deeper than any navigation structure should.
    #[error("Node {title} is nested deeper than {limit} levels")]
    DepthExceeded {
        /// Title of the node at which traversal stopped.
        title: String,
        /// Maximum nesting depth.
        limit: usize,
    },
}

/// Failure while computing next/previous links.
#[derive(Debug, thiserror::Error)]
pub enum PaginationError {
    /// No supplied post carries the welcome page slug.
    #[error("Welcome page with slug {slug} not found among posts")]
    MissingWelcomePage {
        /// Slug that was searched for.
        slug: String,
    },
    /// Flattening the tree failed.
    #[error("{0}")]
    Traversal(#[from] TraversalError),
}

/// Error returned by the public navigation operations.
///
/// Each variant names the operation that failed.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// [`build_nav_tree`](crate::build_nav_tree) failed; no tree is returned.
    #[error("Failed to build navigation tree: {0}")]
    Tree(#[from] TreeError),
    /// [`convert_doc_posts`](crate::convert_doc_posts) failed.
    #[error("Error in convert_doc_posts: {0}")]
    Traversal(#[from] TraversalError),
    /// [`add_doc_buttons`](crate::add_doc_buttons) failed.
    #[error("An error occurred while adding doc buttons: {0}")]
    Pagination(#[from] PaginationError),
}
