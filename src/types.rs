use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;
use std::fmt;

/// Namespace and name of a pod, held by each of its containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PodRef {
    pub namespace: String,
    pub name: String,
}

impl fmt::Display for PodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub name: String,
    pub pod: PodRef,
}

/// Snapshot of a pod taken once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub name: String,
    pub namespace: String,
    pub containers: Vec<Container>,
}

impl Workload {
    pub fn new<I, S>(namespace: &str, name: &str, container_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pod = PodRef {
            namespace: namespace.to_string(),
            name: name.to_string(),
        };
        let containers = container_names
            .into_iter()
            .map(|c| Container {
                name: c.into(),
                pod: pod.clone(),
            })
            .collect();
        Self {
            name: pod.name,
            namespace: pod.namespace,
            containers,
        }
    }

    pub fn from_pod(pod: &Pod) -> Self {
        let namespace = pod.namespace().unwrap_or_default();
        let names = pod
            .spec
            .iter()
            .flat_map(|spec| spec.containers.iter().map(|c| c.name.clone()));
        Self::new(&namespace, &pod.name_any(), names)
    }

    pub fn pod_ref(&self) -> PodRef {
        PodRef {
            namespace: self.namespace.clone(),
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub pod: String,
    pub container: String,
}

/// Exactly one pod and one of its containers.
///
/// Only the resolver builds these, once both candidate sets are down to a
/// single member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    workload: Workload,
    container: Container,
}

impl ResolvedTarget {
    pub(crate) fn new(workload: Workload, container: Container) -> Self {
        debug_assert_eq!(container.pod, workload.pod_ref());
        Self {
            workload,
            container,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.workload.namespace
    }

    pub fn pod_name(&self) -> &str {
        &self.workload.name
    }

    pub fn container_name(&self) -> &str {
        &self.container.name
    }
}

impl fmt::Display for ResolvedTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.workload.namespace, self.workload.name, self.container.name
        )
    }
}
