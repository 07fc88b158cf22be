//
//  pagerduty-backend
//  api/testing.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Helpers shared by the endpoint tests.

use mockito::Matcher;
use url::form_urlencoded;

use super::client::{ClientConfig, PagerDutyClient};
use crate::auth::AuthCredential;

pub const TOKEN: &str = "test-token";

/// Client pointed at a mock server with a static API token.
pub fn test_client(base_url: &str) -> PagerDutyClient {
    PagerDutyClient::new(ClientConfig::new(base_url), AuthCredential::api_token(TOKEN))
        .expect("mock server URL is valid")
}

/// Matches a query containing every given pair.
///
/// Each pair is matched against the raw query string, so repeated keys
/// such as `include[]` are checked value by value.
pub fn query(pairs: &[(&str, &str)]) -> Matcher {
    Matcher::AllOf(
        pairs
            .iter()
            .map(|(k, v)| Matcher::Regex(format!("(^|&){}={}(&|$)", encoded(k), encoded(v))))
            .collect(),
    )
}

/// Form-encodes `raw` the way reqwest does and escapes it for a regex.
fn encoded(raw: &str) -> String {
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .chars()
        .flat_map(|c| match c {
            '.' | '*' | '+' => vec!['\\', c],
            _ => vec![c],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_brackets_and_escapes() {
        assert_eq!(encoded("include[]"), "include%5B%5D");
        assert_eq!(encoded("a.b c"), "a\\.b\\+c");
    }
}
