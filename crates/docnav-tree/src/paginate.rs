//! Linear reading order and next/previous links.
//!
//! The tree is flattened depth-first: each root section, then its pages and
//! sections in stored order. Sections and root sections stay in the sequence
//! as headers but are never linked from themselves. A link that would land
//! on a header skips past it and names the section being crossed instead.

use crate::error::{NavError, PaginationError, TraversalError};
use crate::item::{DocPost, PageLink};
use crate::tree::{DocTree, TreeNode, TreeOptions};

/// Maximum nesting depth accepted while flattening.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Flatten a node and its descendants in pre-order.
///
/// Only nodes with a slug are emitted. Nodes without one are still descended
/// into so their children keep their place in the order.
///
/// # Errors
///
/// Returns [`NavError::Traversal`] if the subtree nests deeper than
/// [`MAX_NESTING_DEPTH`].
pub fn convert_doc_posts(node: &TreeNode) -> Result<Vec<DocPost>, NavError> {
    let mut posts = Vec::new();
    collect_posts(node, 0, &mut posts)?;
    Ok(posts)
}

fn collect_posts(
    node: &TreeNode,
    depth: usize,
    posts: &mut Vec<DocPost>,
) -> Result<(), TraversalError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(TraversalError::DepthExceeded {
            title: node.item.title.clone(),
            limit: MAX_NESTING_DEPTH,
        });
    }

    if node.item.slug.is_some() {
        posts.push(DocPost::from(node.item.clone()));
    }
    for child in node.children.values() {
        collect_posts(child, depth + 1, posts)?;
    }
    Ok(())
}

/// Add next/previous links using default [`TreeOptions`].
///
/// # Errors
///
/// See [`add_doc_buttons_with`].
pub fn add_doc_buttons(posts: &[DocPost], tree: &DocTree) -> Result<Vec<DocPost>, NavError> {
    add_doc_buttons_with(posts, tree, &TreeOptions::default())
}

/// Produce the full reading order of the site with next/previous links.
///
/// Position 0 is taken by the post in `posts` whose slug equals
/// `options.welcome_slug`; the tree's own welcome node is structural only.
/// The tree is not modified.
///
/// # Errors
///
/// Returns [`NavError::Pagination`] if no welcome post is supplied or the
/// tree cannot be flattened.
pub fn add_doc_buttons_with(
    posts: &[DocPost],
    tree: &DocTree,
    options: &TreeOptions,
) -> Result<Vec<DocPost>, NavError> {
    Ok(link_pages(posts, tree, &options.welcome_slug)?)
}

fn link_pages(
    posts: &[DocPost],
    tree: &DocTree,
    welcome_slug: &str,
) -> Result<Vec<DocPost>, PaginationError> {
    let mut sequence = flatten_tree(tree)?;

    let welcome = posts
        .iter()
        .find(|post| post.item.slug.as_deref() == Some(welcome_slug))
        .ok_or_else(|| PaginationError::MissingWelcomePage {
            slug: welcome_slug.to_owned(),
        })?;
    match sequence.first_mut() {
        Some(first) => *first = welcome.clone(),
        None => sequence.push(welcome.clone()),
    }

    let mut roots = RootTitles::default();
    let links: Vec<Option<(Option<PageLink>, Option<PageLink>)>> = sequence
        .iter()
        .enumerate()
        .map(|(index, post)| {
            if index == 0 || post.item.is_root_section {
                roots.push(&post.item.title);
            }
            if index == 0 || post.item.is_root_section || post.item.is_section {
                return None;
            }
            Some((
                next_link(&sequence, index),
                prev_link(&sequence, index, &roots),
            ))
        })
        .collect();

    for (post, link) in sequence.iter_mut().zip(links) {
        if let Some((next_page, prev_page)) = link {
            post.next_page = next_page;
            post.prev_page = prev_page;
        }
    }

    tracing::debug!(pages = sequence.len(), "Pagination links added");
    Ok(sequence)
}

/// Root section items followed by the flattened pages below them.
fn flatten_tree(tree: &DocTree) -> Result<Vec<DocPost>, TraversalError> {
    let mut sequence = Vec::new();
    for root in tree.values() {
        sequence.push(DocPost::from(root.item.clone()));
        for child in root.children.values() {
            collect_posts(child, 1, &mut sequence)?;
        }
    }
    Ok(sequence)
}

/// Titles of the root sections passed so far, in reading order.
#[derive(Default)]
struct RootTitles<'a>(Vec<&'a str>);

impl<'a> RootTitles<'a> {
    fn push(&mut self, title: &'a str) {
        self.0.push(title);
    }

    fn last(&self) -> Option<&'a str> {
        self.0.last().copied()
    }

    fn before_last(&self) -> Option<&'a str> {
        self.0.len().checked_sub(2).map(|i| self.0[i])
    }
}

fn next_link(sequence: &[DocPost], index: usize) -> Option<PageLink> {
    let next = sequence.get(index + 1)?;
    if !next.item.is_boundary() {
        return Some(PageLink::to(next));
    }

    let after = sequence.get(index + 2)?;
    Some(PageLink {
        title: format!("{} - {}", next.item.title, after.item.title),
        href: after.item.slug.clone(),
    })
}

fn prev_link(sequence: &[DocPost], index: usize, roots: &RootTitles<'_>) -> Option<PageLink> {
    let previous = sequence.get(index.checked_sub(1)?)?;
    if !previous.item.is_boundary() {
        return Some(PageLink::to(previous));
    }

    let before = sequence.get(index.checked_sub(2)?)?;
    // Stepping back over a root section header lands in the root before it.
    let root_title = if previous.item.is_root_section {
        roots.before_last()
    } else {
        roots.last()
    };
    let title = match root_title {
        Some(root) => format!("{root} - {}", before.item.title),
        None => before.item.title.clone(),
    };
    Some(PageLink {
        title,
        href: before.item.slug.clone(),
    })
}
