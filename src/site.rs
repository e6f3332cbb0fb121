/// Site records as seen from the admin page: a root domain and the request
/// that deletes it
use url::form_urlencoded;

/// Root domain of a site, e.g. `example.com` or `bbc.co.uk`
///
/// The value is the server's record key, so it is kept exactly as given:
/// no trimming, no hostname parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDomain(String);

impl RootDomain {
    pub fn new(raw: &str) -> Self {
        RootDomain(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path and query for the delete request: `<endpoint>?rootDomain=<encoded>`
    pub fn delete_url(&self, endpoint: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("rootDomain", &self.0)
            .finish();

        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", endpoint, separator, query)
    }
}

impl std::fmt::Display for RootDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
