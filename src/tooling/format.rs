//! Format resolved views and build summaries as text.

use crate::path::Breadcrumb;
use crate::tree::navigator::ResolvedView;
use crate::tree::TopicTree;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Render a breadcrumb as a trail string, root included.
pub fn format_trail(breadcrumb: &Breadcrumb) -> String {
    let mut parts = vec!["root".to_string()];
    parts.extend(breadcrumb.labels.iter().cloned());
    parts.join(" > ")
}

/// Format a build summary as human-readable text.
pub fn format_build_summary(
    tree: &TopicTree,
    entries: usize,
    dropped: usize,
    include_breakdown: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Topic Tree")));
    out.push_str(&format!("  Feed entries: {}\n", entries));
    out.push_str(&format!("  Dropped entries: {}\n", dropped));
    out.push_str(&format!("  Total nodes: {}\n", tree.total_nodes()));
    out.push_str(&format!("  Max depth: {}\n", tree.max_depth()));
    out.push_str(&format!(
        "  Data present: {}\n\n",
        if tree.is_data_present() { "yes" } else { "no" }
    ));
    if !tree.is_data_present() {
        out.push_str("No grievances matched this filter combination.\n");
        return out;
    }
    if include_breakdown {
        if let Some(root) = tree.root() {
            out.push_str("  Top-level breakdown\n\n");
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec!["Topic", "Count", "Path"]);
            for child in &root.children {
                table.add_row(vec![
                    display_label(&child.label),
                    child.count.to_string(),
                    index_path(&child.breadcrumb.indices),
                ]);
            }
            out.push_str(&format!("{}\n\n", table));
        }
    }
    out
}

/// Format a resolved view as human-readable text.
pub fn format_view(view: &ResolvedView, page_size: usize) -> String {
    let mut out = String::new();
    match view {
        ResolvedView::Branch { breadcrumb, points } => {
            out.push_str(&format!("{}\n\n", format_section_heading("Branch")));
            out.push_str(&format!("  Trail: {}\n\n", format_trail(breadcrumb)));
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            table.set_header(vec!["Topic", "Count", "Path"]);
            for point in points {
                table.add_row(vec![
                    display_label(&point.label),
                    point.count.to_string(),
                    index_path(&point.indices),
                ]);
            }
            out.push_str(&format!("{}\n", table));
        }
        ResolvedView::Leaf {
            breadcrumb,
            record_ids,
        } => {
            out.push_str(&format!("{}\n\n", format_section_heading("Leaf")));
            out.push_str(&format!("  Trail: {}\n", format_trail(breadcrumb)));
            if record_ids.is_empty() {
                out.push_str("  Records: none loaded\n");
            } else {
                out.push_str(&format!("  Records: {}\n", record_ids.len()));
                for id in record_ids.iter().take(page_size) {
                    out.push_str(&format!("    {}\n", id));
                }
                if record_ids.len() > page_size {
                    out.push_str(&format!("    (+{} more)\n", record_ids.len() - page_size));
                }
            }
        }
    }
    out
}

fn display_label(label: &str) -> String {
    if label.is_empty() {
        "(unnamed)".to_string()
    } else {
        label.to_string()
    }
}

fn index_path(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
