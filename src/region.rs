use gloo_net::http::Request;
use log::error;

use crate::config;

/// Resolves the deployment region shown on the landing page.
///
/// The echo endpoint is only reached to confirm outbound connectivity; its
/// body is ignored. TODO: have the backend map the caller IP to the serving
/// region once that endpoint exists.
pub async fn fetch_region() -> Option<String> {
    let outcome = Request::get(config::get_ip_echo_url())
        .send()
        .await
        .map(|_| ())
        .map_err(|err| err.to_string());
    resolve_region(outcome)
}

fn resolve_region(outcome: Result<(), String>) -> Option<String> {
    match outcome {
        Ok(()) => Some(config::DEFAULT_REGION.to_string()),
        Err(err) => {
            error!("Error fetching region: {}", err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_resolves_to_the_fixed_region() {
        assert_eq!(resolve_region(Ok(())), Some("us-east-1".to_string()));
    }

    #[test]
    fn failure_resolves_to_none() {
        assert_eq!(resolve_region(Err("connection refused".to_string())), None);
    }
}
