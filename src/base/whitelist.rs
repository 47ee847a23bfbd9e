//! Supported systems, versions, CUDA releases and OpenGL modes

/// Every value `repolab.yaml` may use in its `base` section.
#[derive(Debug, Clone, Copy)]
pub struct WhitelistTable {
    pub systems: &'static [&'static str],
    pub ubuntu: &'static [&'static str],
    pub centos: &'static [&'static str],
    pub cuda: &'static [&'static str],
    pub opengl: &'static [&'static str],
}

/// The table used by the CLI.
pub static SUPPORTED: WhitelistTable = WhitelistTable {
    systems: &["ubuntu", "centos"],
    ubuntu: &["16.04", "18.04"],
    centos: &["7"],
    cuda: &["9.0", "9.1", "9.2", "10.0"],
    opengl: &["runtime", "devel"],
};

impl Default for WhitelistTable {
    fn default() -> Self {
        SUPPORTED
    }
}
