use std::{collections::BTreeMap, fmt::Write};

use super::{registry::Registry, snippet::Snippet};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// One path segment of the listing. Built per render and thrown away.
#[derive(Default)]
struct TreeNode<'a> {
    children: BTreeMap<&'a str, TreeNode<'a>>,
    snippet: Option<&'a dyn Snippet>,
    broken: Option<&'a str>,
    restricted: Option<&'a str>,
}

impl<'a> TreeNode<'a> {
    /// Walk (creating as needed) the node for a `/`-separated key.
    fn insert(&mut self, key: &'a str) -> &mut Self {
        key.split('/')
            .fold(self, |node, segment| node.children.entry(segment).or_default())
    }

    fn annotation(&self) -> String {
        if let Some(reason) = self.broken {
            format!("  [load error: {reason}]")
        } else if let Some(platform) = self.restricted {
            format!("  [unsupported platform: {platform}]")
        } else if let Some(snippet) = self.snippet
            && !snippet.description().trim().is_empty()
        {
            format!("  -  {}", snippet.description().trim())
        } else {
            String::new()
        }
    }
}

/// Render the registry as an indented tree, children sorted by segment.
///
/// Runnable and platform-restricted snippets share the main tree; snippets
/// that failed to load are listed in their own section below it.
#[must_use]
pub fn render_tree(registry: &Registry) -> String {
    let mut out = String::new();
    if registry.is_empty() {
        out.push_str("(no snippets discovered)\n");
        return out;
    }

    let mut main = TreeNode::default();
    for (key, snippet) in registry.runnable() {
        main.insert(key).snippet = Some(snippet);
    }
    for (key, platform) in registry.restricted() {
        main.insert(key).restricted = Some(platform);
    }
    render_children(&main, "", &mut out);

    if !registry.broken().is_empty() {
        let mut failed = TreeNode::default();
        for (key, reason) in registry.broken() {
            failed.insert(key).broken = Some(reason);
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("Failed to load:\n");
        render_children(&failed, "", &mut out);
    }
    out
}

fn render_children(node: &TreeNode<'_>, indent: &str, out: &mut String) {
    let count = node.children.len();
    for (i, (name, child)) in node.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let branch = if is_last { LAST_BRANCH } else { BRANCH };
        let _ = writeln!(out, "{indent}{branch}{name}{}", child.annotation());

        let next = format!("{indent}{}", if is_last { SPACE } else { PIPE });
        render_children(child, &next, out);
    }
}
