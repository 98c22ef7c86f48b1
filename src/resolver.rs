use crate::config::ResolveSettings;
use crate::error::ClogsError;
use crate::filter::{filter_containers, filter_pods};
use crate::kubernetes::WorkloadCatalog;
use crate::types::ResolvedTarget;
use crate::ui::Prompt;
use crate::ui::widgets::{container_label, pod_label};
use ratatui::text::Line;
use tracing::debug;

/// Narrows `candidates` to one.
///
/// A single candidate is returned without prompting. Otherwise the prompt is
/// shown once; an abort, or an index outside the candidate list, yields
/// `SelectionAborted` and no candidate.
pub fn choose<T, P, F>(
    prompt: &mut P,
    title: &str,
    mut candidates: Vec<T>,
    label: F,
) -> Result<T, ClogsError>
where
    P: Prompt,
    F: Fn(&T) -> Line<'static>,
{
    match candidates.len() {
        0 => Err(ClogsError::NoMatch {
            kind: "candidates",
            pattern: String::new(),
        }),
        1 => candidates.pop().ok_or(ClogsError::SelectionAborted),
        _ => {
            let labels = candidates.iter().map(&label).collect();
            match prompt.select(title, labels)? {
                Some(i) if i < candidates.len() => Ok(candidates.swap_remove(i)),
                _ => Err(ClogsError::SelectionAborted),
            }
        }
    }
}

/// Lists, filters and disambiguates down to one (pod, container) pair.
pub async fn resolve<C, P>(
    catalog: &C,
    prompt: &mut P,
    settings: &ResolveSettings,
) -> Result<ResolvedTarget, ClogsError>
where
    C: WorkloadCatalog,
    P: Prompt,
{
    let workloads = catalog
        .list_workloads(settings.namespace.as_deref())
        .await?;

    let pods = filter_pods(workloads, &settings.criteria.pod)?;
    debug!(matched = pods.len(), "Pods matching filter");
    let pod = choose(prompt, "Select Pod", pods, pod_label)?;

    let containers = filter_containers(&pod, &settings.criteria.container)?;
    debug!(pod = %pod.name, matched = containers.len(), "Containers matching filter");
    let container = choose(prompt, "Select Container", containers, container_label)?;

    Ok(ResolvedTarget::new(pod, container))
}
