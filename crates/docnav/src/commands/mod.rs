//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod tree;

pub(crate) use build::BuildArgs;
pub(crate) use tree::TreeArgs;

use docnav_config::Config;
use docnav_tree::TreeOptions;

/// Tree options from the welcome and specification config sections.
fn tree_options(config: &Config) -> TreeOptions {
    TreeOptions {
        welcome_title: config.welcome.title.clone(),
        welcome_slug: config.welcome.slug.clone(),
        specification_root: config.specification.root_section.clone(),
        specification_section: config.specification.section.clone(),
    }
}
