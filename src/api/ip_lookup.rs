use reqwest::Client;

use crate::{
    logging::AddressLog,
    shared_types::{FetchError, Site, SiteShape},
    utils::document::{Document, HtmlDocument, LabelMiss},
};

use super::get_page;

pub fn extract_direct_text<D: Document>(body: &str) -> String {
    D::parse(body).text().trim().to_string()
}

pub fn extract_labeled_sibling<D: Document>(
    body: &str,
    url: &str,
    tag: &str,
    label: &str,
) -> Result<String, FetchError> {
    match D::parse(body).sibling_text_after_label(tag, label) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(LabelMiss::Label) => Err(FetchError::Label {
            url: url.to_string(),
            label: label.to_string(),
            tag: tag.to_string(),
        }),
        Err(LabelMiss::Sibling) => Err(FetchError::Sibling {
            url: url.to_string(),
            label: label.to_string(),
            tag: tag.to_string(),
        }),
    }
}

/// For pages that return nothing but the address.
pub async fn get_direct_text_ip<D: Document>(
    client: &Client,
    url: &str,
    log: &dyn AddressLog,
) -> Result<String, FetchError> {
    let body = get_page(client, url).await?;
    let ip = extract_direct_text::<D>(&body);

    tracing::debug!("IP from {url}: {ip}");
    log.address_found(url, &ip);

    Ok(ip)
}

/// For pages that put the address next to a label, e.g. `<div>IP:</div><div>1.2.3.4</div>`.
pub async fn get_labeled_sibling_ip<D: Document>(
    client: &Client,
    url: &str,
    tag: &str,
    label: &str,
    log: &dyn AddressLog,
) -> Result<String, FetchError> {
    let body = get_page(client, url).await?;
    let ip = extract_labeled_sibling::<D>(&body, url, tag, label)?;

    tracing::debug!("IP from {url}: {ip}");
    log.address_found(url, &ip);

    Ok(ip)
}

pub async fn get_site_ip(
    client: &Client,
    site: &Site,
    log: &dyn AddressLog,
) -> Result<String, FetchError> {
    match &site.shape {
        SiteShape::DirectText => get_direct_text_ip::<HtmlDocument>(client, &site.url, log).await,
        SiteShape::LabeledSibling { label, tag } => {
            get_labeled_sibling_ip::<HtmlDocument>(client, &site.url, tag, label, log).await
        }
    }
}
