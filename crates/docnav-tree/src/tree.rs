//! Navigation tree builder.
//!
//! Turns the flat list of [`NavItem`]s into a [`DocTree`]: root sections at
//! the top level, optional sub-sections below them, pages at the leaves.
//!
//! Building happens in two explicit passes. Items are first inserted in
//! processing order (root sections first, then by weight, sections before
//! pages of equal weight), then every level is re-sorted by weight. The
//! second pass is what fixes sibling order; the first only guarantees that
//! parents exist before their children are attached.

use std::cmp::Ordering;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use crate::error::{NavError, TreeError};
use crate::item::NavItem;

/// Key of the synthetic welcome root section.
pub const WELCOME_SECTION_ID: &str = "welcome";

/// Ordered children of a node, keyed by section id or page title.
pub type Children = IndexMap<String, TreeNode>;

/// Root sections keyed by root section id, in display order.
pub type DocTree = IndexMap<String, TreeNode>;

/// Navigation item with its ordered children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Item data.
    pub item: NavItem,
    /// Child nodes in display order.
    #[serde(default)]
    pub children: Children,
}

impl TreeNode {
    /// Create a node without children.
    #[must_use]
    pub fn new(item: NavItem) -> Self {
        Self {
            item,
            children: Children::new(),
        }
    }

    /// Number of nodes in this subtree (inclusive) that carry a slug.
    #[must_use]
    pub fn count_with_slug(&self) -> usize {
        usize::from(self.item.slug.is_some())
            + self
                .children
                .values()
                .map(TreeNode::count_with_slug)
                .sum::<usize>()
    }
}

/// Site-specific names used while building and paginating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeOptions {
    /// Title of the synthetic welcome root section.
    pub welcome_title: String,
    /// Slug of the welcome page.
    pub welcome_slug: String,
    /// Root section holding the specification section.
    pub specification_root: String,
    /// Section whose link points at the current stable version.
    pub specification_section: String,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            welcome_title: "Welcome".to_owned(),
            welcome_slug: "/docs".to_owned(),
            specification_root: "reference".to_owned(),
            specification_section: "specification".to_owned(),
        }
    }
}

impl TreeOptions {
    /// Item of the synthetic welcome root section.
    #[must_use]
    pub fn welcome_item(&self) -> NavItem {
        NavItem {
            title: self.welcome_title.clone(),
            weight: 0.0,
            is_root_section: true,
            is_section: true,
            root_section_id: Some(WELCOME_SECTION_ID.to_owned()),
            section_weight: Some(0.0),
            slug: Some(self.welcome_slug.clone()),
            ..NavItem::default()
        }
    }
}

/// Build the navigation tree with default [`TreeOptions`].
///
/// # Errors
///
/// Returns [`NavError::Tree`] if an item references a section that does not
/// exist. No partial tree is returned.
pub fn build_nav_tree(items: &[NavItem]) -> Result<DocTree, NavError> {
    build_nav_tree_with(items, &TreeOptions::default())
}

/// Build the navigation tree.
///
/// The returned tree always starts with the synthetic `welcome` section.
///
/// # Errors
///
/// Returns [`NavError::Tree`] if an item references a section that does not
/// exist. No partial tree is returned.
pub fn build_nav_tree_with(items: &[NavItem], options: &TreeOptions) -> Result<DocTree, NavError> {
    let mut tree = DocTree::new();
    tree.insert(
        WELCOME_SECTION_ID.to_owned(),
        TreeNode::new(options.welcome_item()),
    );

    insert_items(&mut tree, items)?;
    sort_tree(&mut tree);
    link_specification(&mut tree, options);

    tracing::debug!(
        items = items.len(),
        root_sections = tree.len(),
        "Navigation tree built"
    );
    Ok(tree)
}

/// Processing order: root sections first, then ascending weight, sections
/// before pages at equal weight.
fn processing_order(a: &NavItem, b: &NavItem) -> Ordering {
    b.is_root_section
        .cmp(&a.is_root_section)
        .then_with(|| a.weight.total_cmp(&b.weight))
        .then_with(|| b.is_section.cmp(&a.is_section))
}

fn by_weight(a: &TreeNode, b: &TreeNode) -> Ordering {
    a.item.weight.total_cmp(&b.item.weight)
}

/// First pass: place every item in processing order.
fn insert_items(tree: &mut DocTree, items: &[NavItem]) -> Result<(), TreeError> {
    let mut sorted: Vec<&NavItem> = items.iter().collect();
    sorted.sort_by(|a, b| processing_order(a, b));

    for item in sorted {
        if item.is_root_section {
            let root = root_section_id(item)?;
            place(tree, root.to_owned(), item);
        }

        if let Some(parent) = item.parent.as_deref() {
            let section_id = item
                .section_id
                .as_deref()
                .ok_or_else(|| TreeError::MissingSectionId {
                    title: item.title.clone(),
                })?;
            let parent_node =
                tree.get_mut(parent)
                    .ok_or_else(|| TreeError::MissingParentSection {
                        parent: parent.to_owned(),
                        title: item.title.clone(),
                    })?;
            place(&mut parent_node.children, section_id.to_owned(), item);
        }

        if !item.is_section {
            insert_page(tree, item)?;
        } else if !item.is_root_section && item.parent.is_none() {
            tracing::warn!(title = %item.title, "Section has no parent, not placed in navigation");
        }
    }

    Ok(())
}

fn root_section_id(item: &NavItem) -> Result<&str, TreeError> {
    item.root_section_id
        .as_deref()
        .ok_or_else(|| TreeError::MissingRootSectionId {
            title: item.title.clone(),
        })
}

/// Insert or update the node under `key`.
///
/// An existing node keeps its position and children; only its item is
/// replaced. This lets a section item arrive after a placeholder was
/// created for it without dropping the pages already attached.
fn place(children: &mut Children, key: String, item: &NavItem) {
    match children.entry(key) {
        Entry::Occupied(mut entry) => entry.get_mut().item = item.clone(),
        Entry::Vacant(entry) => {
            entry.insert(TreeNode::new(item.clone()));
        }
    }
}

/// Attach a page under its root section, or under its section if it has one.
fn insert_page(tree: &mut DocTree, item: &NavItem) -> Result<(), TreeError> {
    let root_id = root_section_id(item)?;
    let root = tree
        .get_mut(root_id)
        .ok_or_else(|| TreeError::MissingRootSection {
            root: root_id.to_owned(),
            title: item.title.clone(),
        })?;

    let scope = match item.section_id.as_deref() {
        Some(section_id) => {
            let section = root
                .children
                .entry(section_id.to_owned())
                .or_insert_with(|| {
                    tracing::debug!(section = section_id, title = %item.title, "Creating placeholder section");
                    TreeNode::new(item.clone())
                });
            &mut section.children
        }
        None => &mut root.children,
    };
    place(scope, item.title.clone(), item);

    Ok(())
}

/// Second pass: sort each root's children and, when a root has more than
/// one child, each child's own children.
fn sort_tree(tree: &mut DocTree) {
    for root in tree.values_mut() {
        root.children.sort_by(|_, a, _, b| by_weight(a, b));

        if root.children.len() > 1 {
            for child in root.children.values_mut() {
                let mut grandchildren: Vec<TreeNode> =
                    std::mem::take(&mut child.children).into_values().collect();
                grandchildren.sort_by(by_weight);
                child.children = grandchildren
                    .into_iter()
                    .map(|node| (node.item.title.clone(), node))
                    .collect();
            }
        }
    }
}

/// Point the specification section at its first non-prerelease version.
fn link_specification(tree: &mut DocTree, options: &TreeOptions) {
    let Some(section) = tree
        .get_mut(&options.specification_root)
        .and_then(|root| root.children.get_mut(&options.specification_section))
    else {
        return;
    };

    section.item.href = section
        .children
        .values()
        .find(|version| version.item.is_prerelease.is_none())
        .and_then(|version| version.item.slug.clone());
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) fn root_section(id: &str, title: &str, weight: f64) -> NavItem {
        NavItem {
            title: title.to_owned(),
            weight,
            is_root_section: true,
            is_section: true,
            root_section_id: Some(id.to_owned()),
            ..NavItem::default()
        }
    }

    pub(crate) fn sub_section(
        parent: &str,
        id: &str,
        title: &str,
        weight: f64,
    ) -> NavItem {
        NavItem {
            title: title.to_owned(),
            weight,
            is_section: true,
            root_section_id: Some(parent.to_owned()),
            section_id: Some(id.to_owned()),
            parent: Some(parent.to_owned()),
            ..NavItem::default()
        }
    }

    pub(crate) fn page(root: &str, title: &str, weight: f64) -> NavItem {
        NavItem {
            title: title.to_owned(),
            weight,
            root_section_id: Some(root.to_owned()),
            slug: Some(format!("/docs/{root}/{}", title.to_lowercase())),
            ..NavItem::default()
        }
    }

    pub(crate) fn section_page(root: &str, section: &str, title: &str, weight: f64) -> NavItem {
        NavItem {
            section_id: Some(section.to_owned()),
            slug: Some(format!(
                "/docs/{root}/{section}/{}",
                title.to_lowercase()
            )),
            ..page(root, title, weight)
        }
    }

    fn keys(children: &Children) -> Vec<&str> {
        children.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_empty_input_has_welcome() {
        let tree = build_nav_tree(&[]).unwrap();

        assert_eq!(keys(&tree), vec!["welcome"]);
        let welcome = &tree["welcome"].item;
        assert_eq!(welcome.title, "Welcome");
        assert_eq!(welcome.slug.as_deref(), Some("/docs"));
        assert!(welcome.is_root_section);
        assert!(welcome.is_section);
        assert!(welcome.weight.abs() < f64::EPSILON);
        assert!(tree["welcome"].children.is_empty());
    }

    #[test]
    fn test_welcome_stays_first_regardless_of_weight() {
        let items = vec![root_section("guide", "Guide", -10.0)];

        let tree = build_nav_tree(&items).unwrap();

        assert_eq!(keys(&tree), vec!["welcome", "guide"]);
    }

    #[test]
    fn test_pages_attached_to_root_section() {
        let items = vec![
            page("guide", "C", 3.0),
            page("guide", "A", 1.0),
            root_section("guide", "Guide", 5.0),
            page("guide", "B", 2.0),
        ];

        let tree = build_nav_tree(&items).unwrap();

        assert_eq!(keys(&tree["guide"].children), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_root_sections_ordered_by_weight() {
        let items = vec![
            root_section("tools", "Tools", 20.0),
            root_section("guide", "Guide", 10.0),
        ];

        let tree = build_nav_tree(&items).unwrap();

        assert_eq!(keys(&tree), vec!["welcome", "guide", "tools"]);
    }

    #[test]
    fn test_sub_section_pages_nested_and_sorted() {
        let items = vec![
            root_section("reference", "Reference", 1.0),
            page("reference", "Overview", 0.0),
            sub_section("reference", "bindings", "Bindings", 2.0),
            section_page("reference", "bindings", "Kafka", 2.0),
            section_page("reference", "bindings", "AMQP", 1.0),
        ];

        let tree = build_nav_tree(&items).unwrap();

        let reference = &tree["reference"];
        assert_eq!(keys(&reference.children), vec!["Overview", "bindings"]);
        let bindings = &reference.children["bindings"];
        assert_eq!(bindings.item.title, "Bindings");
        assert!(bindings.item.is_section);
        assert_eq!(keys(&bindings.children), vec!["AMQP", "Kafka"]);
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        let items = vec![
            root_section("guide", "Guide", 1.0),
            page("guide", "Second", 1.0),
            page("guide", "First", 1.0),
            page("guide", "Third", 1.0),
        ];

        let tree = build_nav_tree(&items).unwrap();

        assert_eq!(
            keys(&tree["guide"].children),
            vec!["Second", "First", "Third"]
        );
    }

    #[test]
    fn test_children_weights_non_decreasing() {
        let items = vec![
            root_section("guide", "Guide", 1.0),
            page("guide", "D", 7.5),
            page("guide", "A", -1.0),
            page("guide", "C", 3.0),
            page("guide", "B", 3.0),
            sub_section("guide", "deep", "Deep", 2.0),
            section_page("guide", "deep", "Y", 9.0),
            section_page("guide", "deep", "X", 0.5),
        ];

        let tree = build_nav_tree(&items).unwrap();

        fn assert_sorted(children: &Children) {
            let weights: Vec<f64> = children.values().map(|n| n.item.weight).collect();
            assert!(
                weights.windows(2).all(|w| w[0] <= w[1]),
                "weights not sorted: {weights:?}"
            );
            for child in children.values() {
                assert_sorted(&child.children);
            }
        }
        assert_sorted(&tree["guide"].children);
    }

    #[test]
    fn test_page_before_its_section_item_keeps_pages() {
        // The page sorts ahead of its section item, so a placeholder is
        // created first and must survive the section item's arrival.
        let items = vec![
            root_section("guide", "Guide", 1.0),
            sub_section("guide", "advanced", "Advanced", 5.0),
            section_page("guide", "advanced", "Early", 1.0),
            page("guide", "Intro", 0.0),
        ];

        let tree = build_nav_tree(&items).unwrap();

        let advanced = &tree["guide"].children["advanced"];
        assert_eq!(advanced.item.title, "Advanced");
        assert!(advanced.item.is_section);
        assert_eq!(keys(&advanced.children), vec!["Early"]);
    }

    #[test]
    fn test_placeholder_section_without_section_item() {
        let items = vec![
            root_section("guide", "Guide", 1.0),
            section_page("guide", "loose", "Only", 1.0),
        ];

        let tree = build_nav_tree(&items).unwrap();

        let loose = &tree["guide"].children["loose"];
        assert_eq!(loose.item.title, "Only");
        assert_eq!(keys(&loose.children), vec!["Only"]);
    }

    #[test]
    fn test_missing_parent_fails() {
        let items = vec![sub_section(
            "missing-section",
            "orphans",
            "Orphans",
            1.0,
        )];

        let err = build_nav_tree(&items).unwrap_err();

        assert!(matches!(
            err,
            NavError::Tree(TreeError::MissingParentSection { .. })
        ));
        let message = err.to_string();
        assert!(message.starts_with("Failed to build navigation tree"));
        assert!(message.contains("missing-section"));
        assert!(message.contains("Orphans"));
    }

    #[test]
    fn test_missing_root_section_fails() {
        let items = vec![page("nowhere", "Lost", 1.0)];

        let err = build_nav_tree(&items).unwrap_err();

        assert!(matches!(
            err,
            NavError::Tree(TreeError::MissingRootSection { ref root, .. }) if root == "nowhere"
        ));
    }

    #[test]
    fn test_page_without_root_section_id_fails() {
        let items = vec![NavItem {
            title: "Floating".to_owned(),
            ..NavItem::default()
        }];

        let err = build_nav_tree(&items).unwrap_err();

        assert!(matches!(
            err,
            NavError::Tree(TreeError::MissingRootSectionId { ref title }) if title == "Floating"
        ));
    }

    #[test]
    fn test_sub_section_without_section_id_fails() {
        let mut item = sub_section("guide", "x", "Broken", 1.0);
        item.section_id = None;
        let items = vec![root_section("guide", "Guide", 1.0), item];

        let err = build_nav_tree(&items).unwrap_err();

        assert!(matches!(
            err,
            NavError::Tree(TreeError::MissingSectionId { .. })
        ));
    }

    #[test]
    fn test_section_without_parent_not_placed() {
        let items = vec![
            root_section("guide", "Guide", 1.0),
            NavItem {
                title: "Stray".to_owned(),
                is_section: true,
                root_section_id: Some("guide".to_owned()),
                section_id: Some("stray".to_owned()),
                ..NavItem::default()
            },
        ];

        let tree = build_nav_tree(&items).unwrap();

        assert!(tree["guide"].children.is_empty());
    }

    #[test]
    fn test_build_is_idempotent() {
        let items = vec![
            root_section("reference", "Reference", 2.0),
            root_section("guide", "Guide", 1.0),
            page("guide", "B", 2.0),
            page("guide", "A", 2.0),
            sub_section("reference", "api", "API", 1.0),
            section_page("reference", "api", "Server", 1.0),
        ];

        let first = build_nav_tree(&items).unwrap();
        let second = build_nav_tree(&items).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.keys().collect::<Vec<_>>(),
            second.keys().collect::<Vec<_>>()
        );
    }

    fn specification_items(versions: Vec<NavItem>) -> Vec<NavItem> {
        let mut items = vec![
            root_section("reference", "Reference", 3.0),
            page("reference", "Overview", 0.0),
            sub_section("reference", "specification", "Specification", 1.0),
        ];
        items.extend(versions);
        items
    }

    #[test]
    fn test_specification_links_to_stable_version() {
        let mut rc = section_page("reference", "specification", "v3-rc", 0.0);
        rc.is_prerelease = Some(true);
        let stable = section_page("reference", "specification", "v3", 1.0);
        let items = specification_items(vec![rc, stable]);

        let tree = build_nav_tree(&items).unwrap();

        let specification = &tree["reference"].children["specification"];
        assert_eq!(
            specification.item.href.as_deref(),
            Some("/docs/reference/specification/v3")
        );
    }

    #[test]
    fn test_specification_explicit_false_is_not_canonical() {
        let mut next = section_page("reference", "specification", "v4", 0.0);
        next.is_prerelease = Some(false);
        let stable = section_page("reference", "specification", "v3", 1.0);
        let items = specification_items(vec![next, stable]);

        let tree = build_nav_tree(&items).unwrap();

        let specification = &tree["reference"].children["specification"];
        assert_eq!(
            specification.item.href.as_deref(),
            Some("/docs/reference/specification/v3")
        );
    }

    #[test]
    fn test_specification_without_stable_version_has_no_href() {
        let mut rc = section_page("reference", "specification", "v3-rc", 0.0);
        rc.is_prerelease = Some(true);
        let items = specification_items(vec![rc]);

        let tree = build_nav_tree(&items).unwrap();

        assert!(tree["reference"].children["specification"].item.href.is_none());
    }

    #[test]
    fn test_specification_names_configurable() {
        let options = TreeOptions {
            specification_root: "api".to_owned(),
            specification_section: "versions".to_owned(),
            ..TreeOptions::default()
        };
        let items = vec![
            root_section("api", "API", 1.0),
            sub_section("api", "versions", "Versions", 1.0),
            section_page("api", "versions", "v2", 1.0),
        ];

        let tree = build_nav_tree_with(&items, &options).unwrap();

        assert_eq!(
            tree["api"].children["versions"].item.href.as_deref(),
            Some("/docs/api/versions/v2")
        );
    }

    #[test]
    fn test_welcome_options_applied() {
        let options = TreeOptions {
            welcome_title: "Start here".to_owned(),
            welcome_slug: "/handbook".to_owned(),
            ..TreeOptions::default()
        };

        let tree = build_nav_tree_with(&[], &options).unwrap();

        assert_eq!(tree["welcome"].item.title, "Start here");
        assert_eq!(tree["welcome"].item.slug.as_deref(), Some("/handbook"));
    }

    #[test]
    fn test_count_with_slug() {
        let items = vec![
            root_section("guide", "Guide", 1.0),
            page("guide", "A", 1.0),
            sub_section("guide", "more", "More", 2.0),
            section_page("guide", "more", "B", 1.0),
        ];

        let tree = build_nav_tree(&items).unwrap();

        // Guide and More have no slug; A and B do.
        assert_eq!(tree["guide"].count_with_slug(), 2);
    }
}
