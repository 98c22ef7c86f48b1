use clap::{Parser, Subcommand};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  # select from all pods matching [busybox], then print its logs
  kubectl clogs busybox

  # select from all pods matching [multi_container_pod],
  # then from the containers in that pod matching [container]
  kubectl clogs multi_container_pod -c container";

#[derive(Parser)]
#[command(name = "kubectl-clogs")]
#[command(about = "Interactive pod and container selector for 'kubectl logs'")]
#[command(
    long_about = "Interactive pod and container selector for 'kubectl logs'.\n\n\
    The pod filter selects every pod whose name contains it; when more than one \
    matches, pick one from a list. The same applies to containers with --container."
)]
#[command(after_help = AFTER_HELP)]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Substring of the pod name to search for
    #[arg(required = true)]
    pub pod_filter: Option<String>,

    /// Substring of the container name to search for
    #[arg(short = 'c', long, default_value = "")]
    pub container: String,

    /// Search pods across all namespaces; --namespace is ignored
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Namespace
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Context
    #[arg(long)]
    pub context: Option<String>,

    /// Cluster from the kubeconfig to use
    #[arg(long)]
    pub cluster: Option<String>,

    /// User from the kubeconfig to use
    #[arg(long)]
    pub user: Option<String>,

    /// Path to the kubeconfig file
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the plugin version
    Version,
}
