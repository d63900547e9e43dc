//! # Dashboard Batch
//!
//! The standard console dashboard: one batch of named sources, one derived
//! stats block. Widgets read fulfilled values; a failed source shows as that
//! widget's "data unavailable" state, never as a full-page error.

use mc_01_source_gateway::MetricSource;
use shared_types::UnixTime;

use crate::domain::{Metric, Snapshot};
use crate::engine::{AggregationEngine, SourceCall};
use crate::error::AggregationError;

/// Derived dashboard statistics, computed from one snapshot.
///
/// Every field is a [`Metric`]: failed or missing inputs surface as
/// `Unavailable`, not as a defaulted zero.
#[derive(Clone, Debug)]
pub struct DashboardStats {
    /// Revenue over the trailing week.
    pub weekly_revenue: Metric,
    /// Revenue over the trailing month.
    pub monthly_revenue: Metric,
    /// Total order count.
    pub total_orders: Metric,
    /// Monthly revenue divided by order count; undefined with zero orders.
    pub average_order_value: Metric,
    /// KYC submissions awaiting review.
    pub pending_kyc: Metric,
    /// Open disputes.
    pub open_disputes: Metric,
    /// New sellers this period.
    pub new_sellers: Metric,
    /// User signups this period.
    pub user_signups: Metric,
    /// Sources that failed in this batch, for per-widget "some data
    /// unavailable" indicators.
    pub unavailable: Vec<MetricSource>,
}

impl DashboardStats {
    /// Compute the stats block from a snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let revenue = snapshot.number(MetricSource::MonthlyRevenue, "total");
        let orders = snapshot.number(MetricSource::OrderCounts, "total");

        Self {
            weekly_revenue: snapshot.number(MetricSource::WeeklyRevenue, "total").into(),
            monthly_revenue: revenue.into(),
            total_orders: orders.into(),
            average_order_value: Metric::ratio(revenue, orders),
            pending_kyc: snapshot
                .number(MetricSource::PendingKycCount, "total")
                .into(),
            open_disputes: snapshot
                .number(MetricSource::OpenDisputeCount, "total")
                .into(),
            new_sellers: snapshot.number(MetricSource::NewSellers, "total").into(),
            user_signups: snapshot.number(MetricSource::UserSignups, "total").into(),
            unavailable: snapshot
                .failed_sources()
                .into_iter()
                .map(|(source, _)| source)
                .collect(),
        }
    }
}

/// Assembles the standard dashboard.
pub struct DashboardService {
    engine: AggregationEngine,
}

impl DashboardService {
    /// Create the service over an engine.
    pub fn new(engine: AggregationEngine) -> Self {
        Self { engine }
    }

    /// The full dashboard batch.
    pub fn standard_batch() -> Vec<SourceCall> {
        [
            MetricSource::WeeklyRevenue,
            MetricSource::MonthlyRevenue,
            MetricSource::OrderCounts,
            MetricSource::OrderStatusBreakdown,
            MetricSource::TopProducts,
            MetricSource::CategoryCounts,
            MetricSource::OutOfStock,
            MetricSource::NewSellers,
            MetricSource::PendingKycCount,
            MetricSource::OpenDisputeCount,
            MetricSource::UserSignups,
        ]
        .into_iter()
        .map(SourceCall::new)
        .collect()
    }

    /// Fan out the standard batch and derive the stats block.
    pub async fn refresh(
        &self,
        now: UnixTime,
    ) -> Result<(Snapshot, DashboardStats), AggregationError> {
        let snapshot = self.engine.snapshot(Self::standard_batch(), now).await?;
        let stats = DashboardStats::from_snapshot(&snapshot);
        Ok((snapshot, stats))
    }
}
