use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use crate::shared_types::FetchError;

pub mod ip_lookup;

pub fn get_client(user_agent: &str) -> anyhow::Result<Client> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

pub fn get_builder(client: &Client, method: Method, url: Url) -> RequestBuilder {
    client.request(method, url)
}

/// GETs `url` and hands back the body. Anything but a 2xx is an error.
pub async fn get_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let parsed_url = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    let transport_err = |source| FetchError::Transport {
        url: url.to_string(),
        source,
    };

    let res = get_builder(client, Method::GET, parsed_url)
        .send()
        .await
        .map_err(transport_err)?;
    let res_status = res.status();

    if !res_status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: res_status,
        });
    }

    res.text().await.map_err(transport_err)
}
