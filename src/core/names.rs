use crate::domain::model::{HostName, Role};

pub const CONTROL_NODE: &str = "control-node";
pub const FILE_SERVER: &str = "fileserver";
pub const WORKER_PREFIX: &str = "worker";

pub fn worker_name(index: usize) -> String {
    format!("{}{:02}", WORKER_PREFIX, index)
}

/// 兩個固定角色節點，接著 worker01..workerN
pub fn host_names(count: usize) -> Vec<HostName> {
    let mut names = Vec::with_capacity(count.saturating_add(2));
    names.push(HostName {
        name: CONTROL_NODE.to_string(),
        role: Role::Control,
    });
    names.push(HostName {
        name: FILE_SERVER.to_string(),
        role: Role::Support,
    });
    names.extend((1..=count).map(|i| HostName {
        name: worker_name(i),
        role: Role::Worker,
    }));
    names
}
