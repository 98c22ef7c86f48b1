use crate::error::ClogsError;
use crate::types::{ResolvedTarget, Workload};
use futures::io::{AsyncBufRead, AsyncReadExt};
use k8s_openapi::api::core::v1::Pod;
use kube::{
    Api, Client,
    api::{ListParams, LogParams},
};
use std::io::Write;
use std::pin::Pin;
use tracing::debug;

/// Source of candidate pods.
pub trait WorkloadCatalog {
    /// Lists pods in `namespace`, or in every namespace when `None`.
    /// Order is whatever the server returns.
    async fn list_workloads(&self, namespace: Option<&str>) -> Result<Vec<Workload>, ClogsError>;
}

pub struct KubeCatalog {
    client: Client,
}

impl KubeCatalog {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl WorkloadCatalog for KubeCatalog {
    async fn list_workloads(&self, namespace: Option<&str>) -> Result<Vec<Workload>, ClogsError> {
        let api: Api<Pod> = match namespace {
            Some(ns) => Api::namespaced(self.client.clone(), ns),
            None => Api::all(self.client.clone()),
        };
        let pods = api
            .list(&ListParams::default())
            .await
            .map_err(ClogsError::cluster_access)?;
        debug!(
            namespace = namespace.unwrap_or("<all>"),
            count = pods.items.len(),
            "Listed pods"
        );
        Ok(pods.items.iter().map(Workload::from_pod).collect())
    }
}

pub type LogStream = Pin<Box<dyn AsyncBufRead + Send>>;

/// Opens a read of one container's log output.
pub trait LogSource {
    async fn open(&self, target: &ResolvedTarget) -> Result<LogStream, ClogsError>;
}

pub struct KubeLogSource {
    client: Client,
}

impl KubeLogSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl LogSource for KubeLogSource {
    async fn open(&self, target: &ResolvedTarget) -> Result<LogStream, ClogsError> {
        let api: Api<Pod> = Api::namespaced(self.client.clone(), target.namespace());
        let lp = LogParams {
            container: Some(target.container_name().to_string()),
            ..Default::default()
        };
        let stream = api
            .log_stream(target.pod_name(), &lp)
            .await
            .map_err(|e| ClogsError::StreamOpen {
                target: target.to_string(),
                source: e.into(),
            })?;
        Ok(Box::pin(stream))
    }
}

const COPY_BUF_SIZE: usize = 8 * 1024;

/// Copies the target's log bytes verbatim into `sink` and returns the byte count.
///
/// The stream is owned by this call and dropped on every return path. Bytes
/// already written before a failure stay in the sink.
pub async fn stream_logs<S, W>(
    source: &S,
    target: &ResolvedTarget,
    sink: &mut W,
) -> Result<u64, ClogsError>
where
    S: LogSource,
    W: Write,
{
    let mut stream = source.open(target).await?;
    let mut buf = vec![0u8; COPY_BUF_SIZE];
    let mut written: u64 = 0;

    let copy_err = |written: u64, source: std::io::Error| ClogsError::StreamCopy {
        target: target.to_string(),
        written,
        source,
    };

    loop {
        let n = match stream.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(copy_err(written, e)),
        };
        sink.write_all(&buf[..n]).map_err(|e| copy_err(written, e))?;
        written += n as u64;
    }
    sink.flush().map_err(|e| copy_err(written, e))?;

    debug!(resolved = %target, bytes = written, "Log stream finished");
    Ok(written)
}
