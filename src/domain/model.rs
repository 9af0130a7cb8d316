use serde::{Deserialize, Serialize};

/// 叢集建置參數，由參數層驗證後交給核心使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    pub hardware_type: String,
    pub image: String,
    pub username: String,
    pub num_rcnodes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Coordinating node, no extra storage.
    Control,
    /// Hosts the NFS export shared by every other node.
    Support,
    /// RAMCloud server with local backup storage.
    Worker,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostName {
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteService {
    pub shell: String,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub client_id: String,
    pub node: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockstore {
    pub name: String,
    pub mount_point: String,
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub role: Role,
    pub hardware_type: String,
    pub disk_image: String,
    pub service: ExecuteService,
    pub interface: Interface,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockstore: Option<Blockstore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lan {
    pub name: String,
    pub best_effort: bool,
    pub vlan_tagging: bool,
    pub link_multiplexing: bool,
    pub interfaces: Vec<String>,
}

impl Lan {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            best_effort: true,
            vlan_tagging: false,
            link_multiplexing: false,
            interfaces: Vec::new(),
        }
    }

    pub fn attach(&mut self, interface: &Interface) {
        self.interfaces.push(interface.client_id.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    pub lan: Lan,
    pub nodes: Vec<Node>,
}

impl Topology {
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn node_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name.as_str()).collect()
    }

    pub fn workers(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.role == Role::Worker)
    }

    /// 取得掛載在指定路徑的所有節點
    pub fn volumes_at<'a>(&'a self, mount_point: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| {
            n.blockstore
                .as_ref()
                .is_some_and(|b| b.mount_point == mount_point)
        })
    }
}
