use crate::domain::model::ExecuteService;
use std::fmt;

pub const SETUP_SCRIPT: &str = "/local/repository/system-setup.sh";
pub const NFS_EXPORT_DIR: &str = "/local/nfs";
pub const RC_BACKUP_DIR: &str = "/local/rcbackup";
pub const EXECUTE_SHELL: &str = "sh";

/// Bootstrap command run on every node once it boots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupCommand {
    pub export_dir: String,
    pub backup_dir: String,
    pub username: String,
    pub node_count: usize,
}

impl SetupCommand {
    pub fn new(username: impl Into<String>, node_count: usize) -> Self {
        Self {
            export_dir: NFS_EXPORT_DIR.to_string(),
            backup_dir: RC_BACKUP_DIR.to_string(),
            username: username.into(),
            node_count,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn into_service(self) -> ExecuteService {
        ExecuteService {
            shell: EXECUTE_SHELL.to_string(),
            command: self.render(),
        }
    }
}

impl fmt::Display for SetupCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sudo {} {} {} {} {}",
            SETUP_SCRIPT, self.export_dir, self.backup_dir, self.username, self.node_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches_template() {
        let cmd = SetupCommand::new("alice", 5);
        assert_eq!(
            cmd.render(),
            "sudo /local/repository/system-setup.sh /local/nfs /local/rcbackup alice 5"
        );
    }

    #[test]
    fn test_empty_username_leaves_empty_field() {
        let cmd = SetupCommand::new("", 8);
        assert_eq!(
            cmd.render(),
            "sudo /local/repository/system-setup.sh /local/nfs /local/rcbackup  8"
        );
    }

    #[test]
    fn test_into_service_uses_sh() {
        let service = SetupCommand::new("bob", 3).into_service();
        assert_eq!(service.shell, "sh");
        assert!(service.command.ends_with("bob 3"));
    }
}
