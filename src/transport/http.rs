use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use super::Lookup;
use crate::lexicon::{LookupError, QueryParams};

/// Public Datamuse words endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.datamuse.com/words";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking HTTP transport issuing `GET <endpoint>?<params>`.
#[derive(Clone, Debug)]
pub struct HttpLookup {
	client: Client,
	endpoint: Url,
}

impl HttpLookup {
	pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, LookupError> {
		let endpoint = Url::parse(endpoint).map_err(LookupError::transport)?;
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("phoenician/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(LookupError::transport)?;
		Ok(Self { client, endpoint })
	}

	/// Full request URL for `params`, as it would be sent.
	#[must_use]
	pub fn request_url(&self, params: &QueryParams) -> Url {
		let mut url = self.endpoint.clone();
		url.query_pairs_mut().clear().extend_pairs(params.iter());
		url
	}
}

impl Lookup for HttpLookup {
	fn lookup(&self, params: &QueryParams) -> Result<String, LookupError> {
		let url = self.request_url(params);
		log::debug!("GET {url}");
		let response = self
			.client
			.get(url)
			.send()
			.and_then(|response| response.error_for_status())
			.map_err(LookupError::transport)?;
		response.text().map_err(LookupError::transport)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexicon::{ConstraintBuilder, Relation, SearchMode};

	#[test]
	fn request_url_appends_encoded_params() {
		let transport = HttpLookup::new(DEFAULT_ENDPOINT, DEFAULT_TIMEOUT).unwrap();
		let mut builder = ConstraintBuilder::new();
		builder
			.constrain(SearchMode::RelatesLike, Some(Relation::Synonym))
			.unwrap()
			.limit(5)
			.unwrap();

		let url = transport.request_url(&builder.encode("sea"));
		insta::assert_snapshot!(url.as_str(), @"https://api.datamuse.com/words?rel_syn=sea&max=5");
	}

	#[test]
	fn invalid_endpoint_is_a_transport_error() {
		let err = HttpLookup::new("not a url", DEFAULT_TIMEOUT).unwrap_err();
		assert!(matches!(err, LookupError::Transport(_)));
	}
}
