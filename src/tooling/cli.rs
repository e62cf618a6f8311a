//! CLI Tooling
//!
//! Command-line interface over the tree engine: build a tree from a topic
//! feed file, resolve single nodes, and replay drill-down click sequences.
//! Intended for inspecting dashboard feeds offline.

use crate::config::{ConfigLoader, RcaConfig};
use crate::error::TreeError;
use crate::feed::{self, TopicFeed};
use crate::path::parse_depth_path;
use crate::tooling::format::{format_build_summary, format_trail, format_view};
use crate::tree::navigator::{self, ResolvedView};
use crate::tree::TopicTree;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::warn;

/// RCA Tree CLI - topic drill-down inspection for grievance feeds
#[derive(Parser)]
#[command(name = "rcatree")]
#[command(about = "Topic drill-down and root-cause-analysis tree engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the topic tree from a feed file and print a summary
    Build {
        /// Topic feed JSON file
        feed: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Include top-level topic breakdown
        #[arg(long)]
        breakdown: bool,
    },
    /// Resolve the node at a depth path and print its view
    Show {
        /// Topic feed JSON file
        feed: PathBuf,
        /// Depth path of the node, e.g. "0.2.1"
        path: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Replay a drill-down click sequence from the root
    Trail {
        /// Topic feed JSON file
        feed: PathBuf,
        /// Child positions to click, level by level
        clicks: Vec<usize>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Execution context holding resolved configuration.
pub struct CliContext {
    config: RcaConfig,
}

impl CliContext {
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, TreeError> {
        let config = ConfigLoader::load(config_path.as_deref())?;
        Ok(CliContext { config })
    }

    pub fn execute(&self, command: &Commands) -> Result<String, TreeError> {
        match command {
            Commands::Build {
                feed,
                format,
                breakdown,
            } => {
                let topic_feed = feed::load_feed(feed)?;
                let entries = topic_feed.topics.len();
                let (tree, dropped) = feed::rebuild(topic_feed);
                self.render_build(&tree, entries, dropped, format, *breakdown)
            }
            Commands::Show { feed, path, format } => {
                let (tree, _) = load_and_build(feed)?;
                let indices = parse_depth_path(path)?;
                let view = match tree.node_at(&indices) {
                    Some(node) => navigator::descend_into(node),
                    None => {
                        warn!(path = %path, "path does not resolve, showing root");
                        navigator::reset_to_root(&tree)
                    }
                };
                self.render_view(&view, format)
            }
            Commands::Trail {
                feed,
                clicks,
                format,
            } => {
                let (tree, _) = load_and_build(feed)?;
                let views = replay_clicks(&tree, clicks);
                self.render_trail(&views, format)
            }
        }
    }

    fn render_build(
        &self,
        tree: &TopicTree,
        entries: usize,
        dropped: usize,
        format: &str,
        breakdown: bool,
    ) -> Result<String, TreeError> {
        match format {
            "json" => {
                let mut value = json!({
                    "entries": entries,
                    "dropped": dropped,
                    "total_nodes": tree.total_nodes(),
                    "max_depth": tree.max_depth(),
                    "data_present": tree.is_data_present(),
                });
                if breakdown {
                    value["tree"] = serde_json::to_value(tree)?;
                }
                Ok(serde_json::to_string_pretty(&value)?)
            }
            "text" => Ok(format_build_summary(tree, entries, dropped, breakdown)),
            other => Err(unknown_format(other)),
        }
    }

    fn render_view(&self, view: &ResolvedView, format: &str) -> Result<String, TreeError> {
        match format {
            "json" => Ok(serde_json::to_string_pretty(view)?),
            "text" => Ok(format_view(view, self.config.view.page_size)),
            other => Err(unknown_format(other)),
        }
    }

    fn render_trail(&self, views: &[ResolvedView], format: &str) -> Result<String, TreeError> {
        match format {
            "json" => Ok(serde_json::to_string_pretty(views)?),
            "text" => {
                let mut out = String::new();
                for view in views {
                    out.push_str(&format!("-- {}\n", format_trail(view.breadcrumb())));
                }
                if let Some(last) = views.last() {
                    out.push('\n');
                    out.push_str(&format_view(last, self.config.view.page_size));
                }
                Ok(out)
            }
            other => Err(unknown_format(other)),
        }
    }
}

fn unknown_format(format: &str) -> TreeError {
    TreeError::ConfigError(format!(
        "Unknown output format '{}', expected 'text' or 'json'",
        format
    ))
}

fn load_and_build(path: &Path) -> Result<(TopicTree, usize), TreeError> {
    let feed: TopicFeed = feed::load_feed(path)?;
    Ok(feed::rebuild(feed))
}

/// Replay a click sequence from the root, collecting each resolved view.
///
/// Stops early when a click lands outside the current branch's points or
/// when a leaf is reached; what was resolved so far is still returned.
pub fn replay_clicks(tree: &TopicTree, clicks: &[usize]) -> Vec<ResolvedView> {
    let mut views = vec![navigator::reset_to_root(tree)];
    for &click in clicks {
        let next = match views.last() {
            Some(ResolvedView::Branch { points, .. }) => points
                .get(click)
                .and_then(|point| tree.node_at(&point.indices)),
            _ => None,
        };
        match next {
            Some(node) => views.push(navigator::descend_into(node)),
            None => {
                warn!(click, "click does not resolve against current view");
                break;
            }
        }
    }
    views
}
