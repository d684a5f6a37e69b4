use std::fmt::Display;

/// One local-vs-remote check. Built, logged and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<'a> {
    pub local: &'a str,
    pub url: &'a str,
    pub remote: &'a str,
    pub matched: bool,
}

impl<'a> Comparison<'a> {
    pub fn new(local: &'a str, url: &'a str, remote: &'a str) -> Self {
        Self {
            local,
            url,
            remote,
            matched: local == remote,
        }
    }
}

impl Display for Comparison<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.matched {
            "matches"
        } else {
            "does not match"
        };

        write!(
            f,
            "Local IP ({}) {} the IP: {} from: {}",
            self.local, verdict, self.remote, self.url
        )
    }
}
