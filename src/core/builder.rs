use crate::core::command::{SetupCommand, NFS_EXPORT_DIR, RC_BACKUP_DIR};
use crate::core::names::host_names;
use crate::domain::model::{Blockstore, HostName, Interface, Lan, Node, Parameters, Role, Topology};

pub const LAN_NAME: &str = "rclan";
pub const INTERFACE_NAME: &str = "rclan_iface";
pub const BLOCKSTORE_SIZE: &str = "200GB";
pub const IMAGE_AUTHORITY: &str = "utah.cloudlab.us";
pub const IMAGE_PROJECT: &str = "emulab-ops";

pub fn image_urn(image: &str) -> String {
    format!(
        "urn:publicid:IDN+{}+image+{}:{}",
        IMAGE_AUTHORITY, IMAGE_PROJECT, image
    )
}

pub struct TopologyBuilder {
    params: Parameters,
}

impl TopologyBuilder {
    pub fn new(params: Parameters) -> Self {
        Self { params }
    }

    pub fn build(&self) -> Topology {
        let mut lan = Lan::new(LAN_NAME);
        let hosts = host_names(self.params.num_rcnodes);
        let mut nodes = Vec::with_capacity(hosts.len());

        for host in hosts {
            let node = self.build_node(host);
            // 所有節點都接到同一個 LAN
            lan.attach(&node.interface);
            tracing::debug!(
                "Node {} ({:?}) volume: {:?}",
                node.name,
                node.role,
                node.blockstore.as_ref().map(|b| b.mount_point.as_str())
            );
            nodes.push(node);
        }

        tracing::info!(
            "Built topology with {} nodes on {} ({} workers)",
            nodes.len(),
            lan.name,
            self.params.num_rcnodes
        );

        Topology { lan, nodes }
    }

    fn build_node(&self, host: HostName) -> Node {
        let service = SetupCommand::new(self.params.username.clone(), self.params.num_rcnodes)
            .into_service();

        let interface = Interface {
            client_id: format!("{}:{}", host.name, INTERFACE_NAME),
            node: host.name.clone(),
        };

        let blockstore = match host.role {
            Role::Support => Some(Blockstore {
                name: format!("{}nfs_bs", host.name),
                mount_point: NFS_EXPORT_DIR.to_string(),
                size: BLOCKSTORE_SIZE.to_string(),
            }),
            Role::Worker => Some(Blockstore {
                name: format!("{}backup_bs", host.name),
                mount_point: RC_BACKUP_DIR.to_string(),
                size: BLOCKSTORE_SIZE.to_string(),
            }),
            Role::Control => None,
        };

        Node {
            name: host.name,
            role: host.role,
            hardware_type: self.params.hardware_type.clone(),
            disk_image: image_urn(&self.params.image),
            service,
            interface,
            blockstore,
        }
    }
}

pub fn build_topology(params: &Parameters) -> Topology {
    TopologyBuilder::new(params.clone()).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(count: usize) -> Parameters {
        Parameters {
            hardware_type: "m510".to_string(),
            image: "UBUNTU16-64-STD".to_string(),
            username: "alice".to_string(),
            num_rcnodes: count,
        }
    }

    #[test]
    fn test_example_cluster() {
        let topology = build_topology(&params(5));

        assert_eq!(
            topology.node_names(),
            vec![
                "control-node",
                "fileserver",
                "worker01",
                "worker02",
                "worker03",
                "worker04",
                "worker05"
            ]
        );

        let fileserver = topology.node("fileserver").unwrap();
        let nfs = fileserver.blockstore.as_ref().unwrap();
        assert_eq!(nfs.name, "fileservernfs_bs");
        assert_eq!(nfs.mount_point, "/local/nfs");
        assert_eq!(nfs.size, "200GB");

        assert!(topology.node("control-node").unwrap().blockstore.is_none());

        for worker in topology.workers() {
            let backup = worker.blockstore.as_ref().unwrap();
            assert_eq!(backup.mount_point, "/local/rcbackup");
            assert_eq!(backup.size, "200GB");
            assert_eq!(backup.name, format!("{}backup_bs", worker.name));
        }

        for node in &topology.nodes {
            assert!(node
                .service
                .command
                .ends_with("/local/nfs /local/rcbackup alice 5"));
            assert_eq!(node.hardware_type, "m510");
            assert_eq!(
                node.disk_image,
                "urn:publicid:IDN+utah.cloudlab.us+image+emulab-ops:UBUNTU16-64-STD"
            );
        }
    }

    #[test]
    fn test_lan_has_one_interface_per_node_in_order() {
        for count in [0, 1, 5, 12] {
            let topology = build_topology(&params(count));
            assert_eq!(topology.lan.interfaces.len(), count + 2);

            let expected: Vec<String> = topology
                .nodes
                .iter()
                .map(|n| n.interface.client_id.clone())
                .collect();
            assert_eq!(topology.lan.interfaces, expected);
        }
    }

    #[test]
    fn test_lan_policy_flags() {
        let lan = build_topology(&params(3)).lan;
        assert_eq!(lan.name, "rclan");
        assert!(lan.best_effort);
        assert!(!lan.vlan_tagging);
        assert!(!lan.link_multiplexing);
    }

    #[test]
    fn test_volume_counts_by_mount_point() {
        let topology = build_topology(&params(7));
        assert_eq!(topology.volumes_at(NFS_EXPORT_DIR).count(), 1);
        assert_eq!(topology.volumes_at(RC_BACKUP_DIR).count(), 7);
        assert!(topology
            .nodes
            .iter()
            .filter_map(|n| n.blockstore.as_ref())
            .all(|b| b.size == BLOCKSTORE_SIZE));
    }

    #[test]
    fn test_zero_workers_degenerates() {
        let topology = build_topology(&params(0));
        assert_eq!(topology.node_names(), vec!["control-node", "fileserver"]);
        assert_eq!(topology.workers().count(), 0);
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = TopologyBuilder::new(params(4));
        assert_eq!(builder.build(), builder.build());
    }
}
