//! Legal parameter values offered to users of the profile.
//!
//! Every entry is `(id, label)`: the id is what ends up in the topology, the
//! label is what a portal dashboard shows.

use serde::Serialize;

pub const IMAGES: &[(&str, &str)] = &[("UBUNTU16-64-STD", "Ubuntu 16.04")];

pub const HARDWARE_TYPES: &[(&str, &str)] = &[("m510", "m510 (CloudLab Utah, Intel Xeon-D)")];

pub const DEFAULT_IMAGE: &str = IMAGES[0].0;
pub const DEFAULT_HARDWARE_TYPE: &str = HARDWARE_TYPES[0].0;

/// 1 master + 3 backups + 1 coordinator
pub const RECOMMENDED_MIN_NODES: usize = 5;
pub const DEFAULT_NODE_COUNT: usize = RECOMMENDED_MIN_NODES;
pub const MAX_NODE_COUNT: usize = 1000;

pub fn image_ids() -> Vec<&'static str> {
    IMAGES.iter().map(|(id, _)| *id).collect()
}

pub fn hardware_type_ids() -> Vec<&'static str> {
    HARDWARE_TYPES.iter().map(|(id, _)| *id).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    Image,
    NodeType,
    String,
    Integer,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParameterDefinition {
    pub name: &'static str,
    pub prompt: &'static str,
    #[serde(rename = "type")]
    pub kind: ParameterType,
    pub default: String,
    pub legal_values: Vec<(&'static str, &'static str)>,
    pub help: &'static str,
}

/// 使用者可設定的四個參數定義
pub fn parameter_definitions() -> Vec<ParameterDefinition> {
    vec![
        ParameterDefinition {
            name: "image",
            prompt: "Disk Image",
            kind: ParameterType::Image,
            default: DEFAULT_IMAGE.to_string(),
            legal_values: IMAGES.to_vec(),
            help: "Specify the base disk image that all the nodes of the cluster should be booted with.",
        },
        ParameterDefinition {
            name: "hardware_type",
            prompt: "Hardware Type",
            kind: ParameterType::NodeType,
            default: DEFAULT_HARDWARE_TYPE.to_string(),
            legal_values: HARDWARE_TYPES.to_vec(),
            help: "Machine class every node of the cluster is allocated from.",
        },
        ParameterDefinition {
            name: "username",
            prompt: "Username",
            kind: ParameterType::String,
            default: String::new(),
            legal_values: Vec::new(),
            help: "Username for which all user-specific software will be configured.",
        },
        ParameterDefinition {
            name: "num_rcnodes",
            prompt: "RAMCloud Cluster Size",
            kind: ParameterType::Integer,
            default: DEFAULT_NODE_COUNT.to_string(),
            legal_values: Vec::new(),
            help: "Number of RAMCloud servers (workerNN machines). For a replication factor of 3 \
                   the minimum is 5 (1 master + 3 backups + 1 coordinator). The experiment holds \
                   this number + 2 machines (control-node and fileserver).",
        },
    ]
}
