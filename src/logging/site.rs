use std::{
    fs::{self, OpenOptions},
    io,
    path::Path,
    sync::Mutex,
};

use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;

use crate::constants;

/// Where a fetcher reports the address it pulled out of a site.
pub trait AddressLog {
    fn address_found(&self, url: &str, address: &str);
}

/// A log stream that belongs to exactly one site. Events recorded here go to the
/// site's own writer and nowhere else.
pub struct SiteLog {
    name: String,
    dispatch: Dispatch,
}

impl SiteLog {
    /// Appends to `<dir>/<name>.log`, creating both if needed.
    pub fn open(dir: &Path, name: &str) -> io::Result<Self> {
        fs::DirBuilder::new().recursive(true).create(dir)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(format!("{}.{}", name, constants::SITE_LOG_EXT)))?;

        Ok(Self::with_writer(name, Mutex::new(file)))
    }

    pub fn with_writer<W>(name: &str, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false)
            .finish();

        Self {
            name: name.to_string(),
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl AddressLog for SiteLog {
    fn address_found(&self, url: &str, address: &str) {
        tracing::dispatcher::with_default(&self.dispatch, || {
            tracing::info!("IP from {url}: {address}");
        });
    }
}
