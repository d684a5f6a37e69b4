use anyhow::Context;
use reqwest::Client;

use crate::{
    api::{self, ip_lookup},
    config::Config,
    logging::{AddressLog, SiteLog},
    shared_types::{Comparison, FetchError, Site},
    utils::net::probe_local_address,
};

/// Logs whether the local address matches what `url` reported. Never fails.
pub fn compare_addresses(local: &str, url: &str, remote: &str) {
    let comparison = Comparison::new(local, url, remote);
    tracing::info!("{comparison}");
}

pub struct MonitoredSite {
    pub site: Site,
    pub log: Box<dyn AddressLog>,
}

impl MonitoredSite {
    pub fn new(site: Site, log: impl AddressLog + 'static) -> Self {
        Self {
            site,
            log: Box::new(log),
        }
    }
}

pub struct Monitor {
    client: Client,
    probe_target: String,
    sites: Vec<MonitoredSite>,
}

impl Monitor {
    pub fn new(client: Client, probe_target: &str, sites: Vec<MonitoredSite>) -> Self {
        Self {
            client,
            probe_target: probe_target.to_string(),
            sites,
        }
    }

    /// Opens one log file per configured site under the configured log dir.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = api::get_client(config.get_user_agent())?;
        let log_dir = config.get_log_dir()?;

        let sites = config
            .get_sites()
            .iter()
            .map(|site| {
                let log = SiteLog::open(&log_dir, &site.name).with_context(|| {
                    format!(
                        "error opening log for '{}' in {}",
                        site.name,
                        log_dir.display()
                    )
                })?;
                Ok::<_, anyhow::Error>(MonitoredSite::new(site.clone(), log))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self::new(client, config.get_probe_target(), sites))
    }

    /// Checks every site in order against `local_ip`. The first site that fails stops
    /// the whole run, later sites are never queried.
    pub async fn check_sites(&self, local_ip: &str) -> Result<(), FetchError> {
        for MonitoredSite { site, log } in &self.sites {
            tracing::debug!("checking {} ({})", site.name, site.shape);

            let site_ip = ip_lookup::get_site_ip(&self.client, site, log.as_ref()).await?;
            compare_addresses(local_ip, &site.url, &site_ip);
        }

        Ok(())
    }

    pub async fn run(&self) -> Result<(), FetchError> {
        let local_ip = probe_local_address(&self.probe_target);
        self.check_sites(&local_ip).await
    }
}
