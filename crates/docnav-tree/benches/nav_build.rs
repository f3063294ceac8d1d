//! Benchmarks for navigation tree building and pagination.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docnav_tree::{DocPost, NavItem, add_doc_buttons, build_nav_tree};

/// Generate `roots` root sections, each with `sections` sub-sections of
/// `pages` pages plus `pages` pages directly under the root.
fn create_items(roots: u32, sections: u32, pages: u32) -> Vec<NavItem> {
    let mut items = Vec::new();

    for r in 0..roots {
        let root_id = format!("root-{r}");
        items.push(NavItem {
            title: format!("Root {r}"),
            weight: f64::from(r),
            is_root_section: true,
            is_section: true,
            root_section_id: Some(root_id.clone()),
            ..NavItem::default()
        });

        for p in 0..pages {
            items.push(NavItem {
                title: format!("Page {r}.{p}"),
                weight: f64::from(pages - p),
                root_section_id: Some(root_id.clone()),
                slug: Some(format!("/docs/{root_id}/page-{p}")),
                ..NavItem::default()
            });
        }

        for s in 0..sections {
            let section_id = format!("section-{r}-{s}");
            items.push(NavItem {
                title: format!("Section {r}.{s}"),
                weight: f64::from(pages + s),
                is_section: true,
                root_section_id: Some(root_id.clone()),
                section_id: Some(section_id.clone()),
                parent: Some(root_id.clone()),
                ..NavItem::default()
            });
            for p in 0..pages {
                items.push(NavItem {
                    title: format!("Page {r}.{s}.{p}"),
                    weight: f64::from(p % 3),
                    root_section_id: Some(root_id.clone()),
                    section_id: Some(section_id.clone()),
                    slug: Some(format!("/docs/{root_id}/{section_id}/page-{p}")),
                    ..NavItem::default()
                });
            }
        }
    }

    items
}

fn welcome() -> DocPost {
    DocPost::from(NavItem {
        title: "Welcome".to_owned(),
        slug: Some("/docs".to_owned()),
        ..NavItem::default()
    })
}

fn bench_build_nav_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_nav_tree");

    for (roots, sections, pages) in [(5, 3, 10), (10, 10, 20), (20, 20, 50)] {
        let items = create_items(roots, sections, pages);
        group.bench_with_input(
            BenchmarkId::from_parameter(items.len()),
            &items,
            |b, items| b.iter(|| build_nav_tree(items).unwrap()),
        );
    }

    group.finish();
}

fn bench_add_doc_buttons(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_doc_buttons");
    let posts = [welcome()];

    for (roots, sections, pages) in [(5, 3, 10), (10, 10, 20), (20, 20, 50)] {
        let items = create_items(roots, sections, pages);
        let tree = build_nav_tree(&items).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(items.len()),
            &tree,
            |b, tree| b.iter(|| add_doc_buttons(&posts, tree).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_build_nav_tree, bench_add_doc_buttons);
criterion_main!(benches);
