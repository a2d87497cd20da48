pub(crate) const DEFAULT_USER_AGENT: &str = concat!("rangebench/", env!("CARGO_PKG_VERSION"));

/// Config location relative to the working directory of a deployed agent.
pub(crate) const DEFAULT_CONFIG_PATH: &str = "../conf/config.json";
pub(crate) const DEFAULT_LOG_PATH: &str = "../logs/rangebench.log";
