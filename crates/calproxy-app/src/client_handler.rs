use std::sync::Arc;

use salvo::async_trait;

use calproxy_core::error::CoreError;
use calproxy_service::upstream::UpstreamClient;

use crate::error::AppResult;

pub struct UpstreamProviderHandler {
    pub client: UpstreamClient,
}

#[async_trait]
impl salvo::Handler for UpstreamProviderHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Insert a reference to the shared client into the depot
        let client: Arc<UpstreamClient> = Arc::new(self.client.clone());
        depot.inject(client);
    }
}

/// ## Summary
/// Retrieves the upstream client from the depot.
///
/// ## Errors
/// Returns an error if the upstream client is not found in the depot.
pub fn get_upstream_from_depot(depot: &salvo::Depot) -> AppResult<Arc<UpstreamClient>> {
    depot
        .obtain::<Arc<UpstreamClient>>()
        .cloned()
        .map_err(|_err| {
            CoreError::InvariantViolation("Upstream client not found in depot").into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_client_is_an_invariant_violation() {
        let depot = salvo::Depot::new();
        assert!(get_upstream_from_depot(&depot).is_err());
    }
}
