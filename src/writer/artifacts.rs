//! In-memory rendering of the four generated files
//!
//! Nothing here touches the filesystem, so every file can be rendered (and
//! every validation error raised) before the first write.

use crate::base::BaseImage;
use crate::config::{ProjectConfig, PROJECT_FILE};
use crate::fragments::{
    build_step_fragment, copy_repo_fragment, notebook_setup, source_packages_fragment,
    system_packages_fragment,
};

pub const BUILD_SPEC: &str = "repolab.dockerfile";
pub const BUILD_SCRIPT: &str = "repolab_build.sh";
pub const RUN_SCRIPT: &str = "repolab_run.sh";
pub const IGNORE_FILE: &str = ".dockerignore";

/// Rendered contents of every generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub build_spec: String,
    pub build_script: String,
    pub run_script: String,
    pub ignore_file: String,
}

impl Artifacts {
    pub fn render(config: &ProjectConfig, base: &BaseImage) -> Self {
        Self {
            build_spec: render_build_spec(config, base),
            build_script: render_build_script(&config.name),
            run_script: render_run_script(&config.name, base),
            ignore_file: render_ignore_file(),
        }
    }

    /// `(filename, content, executable)` for each file, in write order.
    pub fn files(&self) -> [(&'static str, &str, bool); 4] {
        [
            (BUILD_SPEC, self.build_spec.as_str(), false),
            (BUILD_SCRIPT, self.build_script.as_str(), true),
            (RUN_SCRIPT, self.run_script.as_str(), true),
            (IGNORE_FILE, self.ignore_file.as_str(), false),
        ]
    }
}

pub fn render_build_spec(config: &ProjectConfig, base: &BaseImage) -> String {
    let mut spec = format!("FROM {}\n", base.reference());
    spec.push_str(&notebook_setup(base.system));
    spec.push_str(&system_packages_fragment(config, base.system));
    spec.push_str(&source_packages_fragment(config, base.system));
    spec.push_str(&copy_repo_fragment());
    spec.push_str(&build_step_fragment(config));
    spec
}

pub fn render_build_script(name: &str) -> String {
    format!("#!/bin/sh\ndocker build -f {} -t {} .\n", BUILD_SPEC, name)
}

/// GPU images get X11 forwarding and the nvidia runtime.
pub fn render_run_script(name: &str, base: &BaseImage) -> String {
    if !base.uses_gpu() {
        return format!("#!/bin/sh\ndocker run --rm -p 8888:8888 {}\n", name);
    }

    format!(
        r#"#!/bin/sh
XSOCK=/tmp/.X11-unix
XAUTH=/tmp/.docker.xauth
touch $XAUTH
xauth nlist $DISPLAY | sed -e 's/^..../ffff/' | xauth -f $XAUTH nmerge -
docker run --rm -it \
	--runtime=nvidia \
	-e DISPLAY=$DISPLAY \
	-e XAUTHORITY=$XAUTH \
	-v $XSOCK:$XSOCK:rw \
	-v $XAUTH:$XAUTH:rw \
	-p 8888:8888 \
	{}
"#,
        name
    )
}

pub fn render_ignore_file() -> String {
    [IGNORE_FILE, PROJECT_FILE, BUILD_SPEC, BUILD_SCRIPT, RUN_SCRIPT]
        .iter()
        .map(|f| format!("{}\n", f))
        .collect()
}
