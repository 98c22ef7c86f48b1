use crate::error::ClogsError;
use crate::types::{Container, Workload};

/// Case-sensitive substring match; the empty pattern matches everything.
pub fn name_matches(name: &str, pattern: &str) -> bool {
    pattern.is_empty() || name.contains(pattern)
}

/// Keep the pods whose name contains `pattern`, in catalog order.
pub fn filter_pods(workloads: Vec<Workload>, pattern: &str) -> Result<Vec<Workload>, ClogsError> {
    let matched: Vec<Workload> = workloads
        .into_iter()
        .filter(|w| name_matches(&w.name, pattern))
        .collect();
    if matched.is_empty() {
        return Err(ClogsError::no_match("pods", pattern));
    }
    Ok(matched)
}

/// Keep the containers of `workload` whose name contains `pattern`.
pub fn filter_containers(workload: &Workload, pattern: &str) -> Result<Vec<Container>, ClogsError> {
    let matched: Vec<Container> = workload
        .containers
        .iter()
        .filter(|c| name_matches(&c.name, pattern))
        .cloned()
        .collect();
    if matched.is_empty() {
        return Err(ClogsError::no_match("containers", pattern));
    }
    Ok(matched)
}
