use std::time::Duration;

use tokio::time::timeout;

use crate::{
    api::route_resolver::RouteResolver,
    core::{
        engine::{CalculationResult, compute_quote},
        error::QuoteError,
        route::RouteInfo,
        trip::{Defaults, TripInput, TripRequest},
    },
    prelude::*,
    quantity::Kilometers,
    store::{QuoteStore, SavedCalculation, Storage},
};

/// Computation and save entry points: validates, resolves the route, runs the engine and keeps
/// the store in sync.
pub struct Quoter<R, S> {
    resolver: R,
    store: QuoteStore<S>,
    defaults: Defaults,
    resolver_timeout: Duration,
}

impl<R: RouteResolver, S: Storage> Quoter<R, S> {
    pub const fn new(
        resolver: R,
        store: QuoteStore<S>,
        defaults: Defaults,
        resolver_timeout: Duration,
    ) -> Self {
        Self { resolver, store, defaults, resolver_timeout }
    }

    pub const fn store(&self) -> &QuoteStore<S> {
        &self.store
    }

    /// Quote the trip and make it the current one.
    ///
    /// On any error, the current quote is left untouched.
    #[instrument(skip_all, fields(origin = %request.origin, destination = %request.destination))]
    pub async fn calculate(
        &mut self,
        request: TripRequest,
    ) -> Result<CalculationResult, QuoteError> {
        let input = request.normalize(&self.defaults)?;
        let route = if input.manual_distance > Kilometers::ZERO {
            debug!(distance = %input.manual_distance, "using the manual distance");
            RouteInfo::manual(input.manual_distance)
        } else {
            self.resolve(&input).await?
        };
        let result = compute_quote(&input, route)?;
        self.store.set_current(result.clone())?;
        info!(
            distance = %result.route.distance_km,
            total_expenses = %result.costs.total_expenses,
            profit = %result.costs.profit,
            "calculated",
        );
        Ok(result)
    }

    /// Save the current quote into the history.
    pub fn confirm_save(
        &mut self,
        observations: Option<&str>,
        user: Option<&str>,
    ) -> Result<SavedCalculation, QuoteError> {
        self.store.save_current(observations, user)
    }

    async fn resolve(&self, input: &TripInput) -> Result<RouteInfo, QuoteError> {
        let resolving =
            self.resolver.resolve_route(&input.origin, &input.destination, input.waypoint());
        timeout(self.resolver_timeout, resolving)
            .await
            .with_context(|| format!("timed out after {:?}", self.resolver_timeout))
            .and_then(|result| result)
            .map_err(|error| {
                warn!("failed to resolve the route: {error:#}");
                QuoteError::RouteResolution(error)
            })
    }
}
