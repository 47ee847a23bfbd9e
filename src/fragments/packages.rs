//! System and source-built package fragments

use super::templates::{package_install, BUILD_JOBS};
use crate::base::System;
use crate::config::{ProjectConfig, SourcePackage};

/// Installs `apt-packages`, if any.
pub fn system_packages_fragment(config: &ProjectConfig, system: System) -> String {
    config
        .apt_packages
        .as_deref()
        .map(|packages| package_install(system, packages))
        .unwrap_or_default()
}

/// Clones, builds and installs each `source-packages` entry in declared
/// order, preceded by its `depends` when present.
pub fn source_packages_fragment(config: &ProjectConfig, system: System) -> String {
    let Some(packages) = config.source_packages.as_deref() else {
        return String::new();
    };

    let mut fragment = String::new();
    for package in packages {
        if let Some(depends) = package.depends.as_deref().filter(|d| !d.is_empty()) {
            fragment.push_str(&package_install(system, depends));
        }
        fragment.push_str(&source_build(package));
    }
    fragment
}

fn source_build(package: &SourcePackage) -> String {
    let dir = format!("/{}", package.name);
    format!(
        "\nRUN git clone {repo} {dir} \\\n \
         && mkdir -p {dir}/build && cd {dir}/build \\\n \
         && cmake .. \\\n \
         && make -j{jobs} \\\n \
         && make install \\\n \
         && cd / && rm -rf {dir}\n",
        repo = package.repo,
        dir = dir,
        jobs = BUILD_JOBS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseSpec;

    fn config() -> ProjectConfig {
        ProjectConfig::new("demo", BaseSpec::new("ubuntu", "18.04"))
    }

    #[test]
    fn test_system_packages_absent() {
        assert_eq!(system_packages_fragment(&config(), System::Ubuntu), "");
    }

    #[test]
    fn test_system_packages_in_order() {
        let mut config = config();
        config.apt_packages = Some(vec!["vim".to_string(), "git".to_string()]);
        let fragment = system_packages_fragment(&config, System::Ubuntu);

        let lines: Vec<&str> = fragment.lines().collect();
        let vim = lines.iter().position(|l| *l == "\tvim \\").unwrap();
        let git = lines.iter().position(|l| *l == "\tgit \\").unwrap();
        assert!(vim < git);
        assert!(fragment.contains("apt-get install"));
    }

    #[test]
    fn test_system_packages_on_centos() {
        let mut config = config();
        config.apt_packages = Some(vec!["vim".to_string()]);
        let fragment = system_packages_fragment(&config, System::Centos);

        assert!(fragment.contains("yum -y install"));
        assert!(fragment.contains("\tvim \\"));
        assert!(!fragment.contains("apt-get"));
    }

    #[test]
    fn test_source_packages_absent() {
        assert_eq!(source_packages_fragment(&config(), System::Ubuntu), "");
    }

    #[test]
    fn test_source_package_build_block() {
        let mut config = config();
        config.source_packages = Some(vec![SourcePackage {
            repo: "https://github.com/example/lib.git".to_string(),
            name: "lib".to_string(),
            depends: None,
        }]);
        let fragment = source_packages_fragment(&config, System::Ubuntu);

        assert!(fragment.contains("git clone https://github.com/example/lib.git /lib"));
        assert!(fragment.contains("make -j2"));
        assert!(fragment.contains("make install"));
        assert!(fragment.contains("rm -rf /lib"));
        assert!(!fragment.contains("apt-get"));
    }

    #[test]
    fn test_source_package_depends_come_first() {
        let mut config = config();
        config.source_packages = Some(vec![
            SourcePackage {
                repo: "https://example.com/a.git".to_string(),
                name: "a".to_string(),
                depends: Some(vec!["libboost-dev".to_string()]),
            },
            SourcePackage {
                repo: "https://example.com/b.git".to_string(),
                name: "b".to_string(),
                depends: Some(vec![]),
            },
        ]);
        let fragment = source_packages_fragment(&config, System::Ubuntu);

        let depends = fragment.find("\tlibboost-dev \\").unwrap();
        let clone_a = fragment.find("git clone https://example.com/a.git").unwrap();
        let clone_b = fragment.find("git clone https://example.com/b.git").unwrap();
        assert!(depends < clone_a);
        assert!(clone_a < clone_b);
        assert_eq!(fragment.matches("apt-get install").count(), 1);
    }
}
