pub const UNKNOWN_ADDRESS: &str = "Unknown";

pub const DEFAULT_PROBE_TARGET: &str = "8.8.8.8:80";

pub const CONFIG_FILEPATH: &str = "~/.webipmon/config.toml";

pub const DEFAULT_LOG_DIR: &str = ".";
pub const SITE_LOG_EXT: &str = "log";

pub const DEFAULT_LABEL: &str = "IP:";
pub const DEFAULT_LABEL_TAG: &str = "div";

/// (name, url) of the sites that answer with nothing but the address
pub const DIRECT_TEXT_SITES: [(&str, &str); 2] = [
    ("ipinfoio", "https://ipinfo.io/ip"),
    ("ipxac", "https://ipx.ac/ip"),
];

pub const LABELED_SIBLING_SITE: (&str, &str) = ("iproyalcom", "https://iproyal.com/ip-lookup");

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
