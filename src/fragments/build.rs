//! Repository copy-in and build step fragments

use super::templates::BUILD_JOBS;
use crate::config::ProjectConfig;

/// Copies the project into the notebook user's home and hands it over.
pub fn copy_repo_fragment() -> String {
    "\nCOPY . ${HOME}\n\
     RUN chown -R ${NB_UID} ${HOME}\n\
     USER ${NB_USER}\n"
        .to_string()
}

/// One `RUN` per `custom` entry, in declared order.
pub fn custom_commands_fragment(config: &ProjectConfig) -> String {
    let Some(commands) = config.custom.as_deref() else {
        return String::new();
    };

    let mut fragment = String::from("\n");
    for command in commands {
        fragment.push_str(&format!("RUN {}\n", command));
    }
    fragment
}

/// CMake out-of-tree build of the project.
pub fn default_build_fragment() -> String {
    format!(
        "\nRUN mkdir -p build \\\n \
         && cd build \\\n \
         && cmake .. \\\n \
         && make -j{}\n",
        BUILD_JOBS
    )
}

/// Whichever of the custom or default build step applies.
pub fn build_step_fragment(config: &ProjectConfig) -> String {
    match config.custom {
        Some(_) => custom_commands_fragment(config),
        None => default_build_fragment(),
    }
}
