use async_trait::async_trait;

use crate::{core::route::RouteInfo, prelude::*};

/// Turns place names into a driving route.
#[async_trait]
pub trait RouteResolver: Sync {
    /// Resolve the one-way route, passing through the intermediate stop if any.
    async fn resolve_route(
        &self,
        origin: &str,
        destination: &str,
        intermediate: Option<&str>,
    ) -> Result<RouteInfo>;
}

/// Missing resolver, for when no credentials are configured: only manual distances work.
#[async_trait]
impl<R: RouteResolver> RouteResolver for Option<R> {
    async fn resolve_route(
        &self,
        origin: &str,
        destination: &str,
        intermediate: Option<&str>,
    ) -> Result<RouteInfo> {
        match self {
            Some(resolver) => resolver.resolve_route(origin, destination, intermediate).await,
            None => bail!("the route resolver is not configured"),
        }
    }
}
