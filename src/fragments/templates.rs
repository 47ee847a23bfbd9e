//! Fixed dockerfile blocks
//!
//! Package management and user creation differ between the Debian-based and
//! RHEL-based systems; everything else is shared.

use crate::base::System;

/// Parallel jobs passed to `make`
pub const BUILD_JOBS: usize = 2;

const UBUNTU_TOOLS: &str = r#"
ENV DEBIAN_FRONTEND=noninteractive \
	LANG=C.UTF-8 \
	LC_ALL=C.UTF-8

RUN apt-get update && apt-get -yq dist-upgrade \
 && apt-get install -yq --no-install-recommends \
	locales \
	python3-pip \
	python3-setuptools \
	git \
	cmake \
	build-essential \
 && apt-get clean \
 && rm -rf /var/lib/apt/lists/*
"#;

const CENTOS_TOOLS: &str = r#"
ENV LANG=en_US.UTF-8 \
	LC_ALL=en_US.UTF-8

RUN yum -y update \
 && yum -y install \
	python3 \
	python3-pip \
	python3-setuptools \
	git \
	cmake \
	make \
	gcc \
	gcc-c++ \
 && yum clean all \
 && rm -rf /var/cache/yum
"#;

const JUPYTER: &str = r#"
RUN pip3 install jupyterlab bash_kernel \
 && python3 -m bash_kernel.install

ENV SHELL=/bin/bash \
	NB_USER=jovyan \
	NB_UID=1000

ENV HOME=/home/${NB_USER}
"#;

const UBUNTU_USER: &str = r#"
RUN adduser --disabled-password \
	--gecos "Default user" \
	--uid ${NB_UID} \
	${NB_USER}
"#;

const CENTOS_USER: &str = r#"
RUN useradd --create-home \
	--comment "Default user" \
	--uid ${NB_UID} \
	${NB_USER}
"#;

const SERVE: &str = r#"
EXPOSE 8888
WORKDIR ${HOME}

CMD ["jupyter", "lab", "--no-browser", "--ip=0.0.0.0", "--NotebookApp.token=''"]
"#;

/// JupyterLab with a bash kernel, running as an unprivileged `jovyan` user.
/// Leaves the image as root so package installation can follow.
pub fn notebook_setup(system: System) -> String {
    let (tools, user) = match system {
        System::Ubuntu => (UBUNTU_TOOLS, UBUNTU_USER),
        System::Centos => (CENTOS_TOOLS, CENTOS_USER),
    };
    [tools, JUPYTER, user, SERVE].concat()
}

/// Install `packages` with the system's package manager, one per
/// continuation line.
pub(crate) fn package_install(system: System, packages: &[String]) -> String {
    let (install, cleanup) = match system {
        System::Ubuntu => (
            "apt-get update && apt-get install -yq --no-install-recommends",
            " && apt-get clean \\\n && rm -rf /var/lib/apt/lists/*\n",
        ),
        System::Centos => (
            "yum -y install",
            " && yum clean all \\\n && rm -rf /var/cache/yum\n",
        ),
    };

    let mut block = format!("\nRUN {} \\\n", install);
    for package in packages {
        block.push_str(&format!("\t{} \\\n", package));
    }
    block.push_str(cleanup);
    block
}
