use crate::cli::Cli;
use crate::error::ClogsError;
use crate::types::FilterCriteria;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::PathBuf;
use tracing::{debug, info};

/// Overrides applied on top of the local kubeconfig.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionOptions {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub cluster: Option<String>,
    pub user: Option<String>,
}

impl ConnectionOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            kubeconfig: cli.kubeconfig.clone(),
            context: cli.context.clone(),
            cluster: cli.cluster.clone(),
            user: cli.user.clone(),
        }
    }

    fn has_overrides(&self) -> bool {
        self.context.is_some() || self.cluster.is_some() || self.user.is_some()
    }

    fn kube_options(&self) -> KubeConfigOptions {
        KubeConfigOptions {
            context: self.context.clone(),
            cluster: self.cluster.clone(),
            user: self.user.clone(),
        }
    }
}

/// Builds a client and returns it with the config's default namespace.
pub async fn connect(opts: &ConnectionOptions) -> Result<(Client, String), ClogsError> {
    let config = if let Some(path) = &opts.kubeconfig {
        let kubeconfig = Kubeconfig::read_from(path).map_err(ClogsError::cluster_access)?;
        Config::from_custom_kubeconfig(kubeconfig, &opts.kube_options())
            .await
            .map_err(ClogsError::cluster_access)?
    } else if opts.has_overrides() {
        Config::from_kubeconfig(&opts.kube_options())
            .await
            .map_err(ClogsError::cluster_access)?
    } else {
        Config::infer()
            .await
            .map_err(ClogsError::cluster_access)?
    };

    let namespace = config.default_namespace.clone();
    info!(
        "Using cluster {} (context: {})",
        config.cluster_url,
        opts.context.as_deref().unwrap_or("current")
    );
    let client = Client::try_from(config).map_err(ClogsError::cluster_access)?;
    Ok((client, namespace))
}

/// Picks the namespace to list pods in; `None` means every namespace.
pub fn namespace_scope(
    all_namespaces: bool,
    namespace_flag: Option<&str>,
    default_namespace: &str,
) -> Option<String> {
    if all_namespaces {
        return None;
    }
    match namespace_flag {
        Some(ns) if !ns.is_empty() => Some(ns.to_string()),
        _ => Some(default_namespace.to_string()),
    }
}

/// Inputs to one resolution run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveSettings {
    pub namespace: Option<String>,
    pub criteria: FilterCriteria,
}

impl ResolveSettings {
    pub fn from_cli(cli: &Cli, default_namespace: &str) -> Self {
        let settings = Self {
            namespace: namespace_scope(
                cli.all_namespaces,
                cli.namespace.as_deref(),
                default_namespace,
            ),
            criteria: FilterCriteria {
                pod: cli.pod_filter.clone().unwrap_or_default(),
                container: cli.container.clone(),
            },
        };
        debug!(
            pod_filter = %settings.criteria.pod,
            container_filter = %settings.criteria.container,
            namespace = settings.namespace.as_deref().unwrap_or("<all>"),
            "Resolution settings"
        );
        settings
    }
}
