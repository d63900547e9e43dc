//! # Dashboard Integration Flows
//!
//! Runs the full dashboard batch through the gateway against a mock
//! transport: partial failures degrade per-widget, a dead backend raises
//! one aggregate error, and derived ratios never fabricate a zero.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mc_01_source_gateway::{HttpReply, MetricSource, MockTransport, SourceGateway};
    use mc_02_aggregation::{
        AggregationEngine, AggregationError, DashboardService, DashboardStats, Metric, SourceCall,
    };
    use serde_json::json;
    use shared_types::SourceError;

    fn total(value: f64) -> HttpReply {
        HttpReply::json(200, json!({"data": {"total": value}}))
    }

    fn dashboard(mock: Arc<MockTransport>) -> DashboardService {
        let gateway = Arc::new(SourceGateway::new(mock));
        DashboardService::new(AggregationEngine::new(gateway))
    }

    /// Everything except the two metrics left unregistered (they answer 404
    /// and classify as malformed) resolves; the stats block degrades only
    /// where its inputs failed.
    #[tokio::test]
    async fn test_standard_batch_degrades_per_widget() {
        crate::init_test_logging();
        let mock = Arc::new(MockTransport::new());
        mock.reply_with("/admin/stats/weekly-revenue", total(1_200.0));
        mock.reply_with("/admin/stats/monthly-revenue", total(5_000.0));
        mock.reply_with("/admin/stats/order-counts", total(200.0));
        mock.reply_with(
            "/admin/stats/order-status-breakdown",
            HttpReply::json(200, json!({"data": {"paid": 180, "refunded": 20}})),
        );
        mock.reply_with(
            "/admin/stats/top-products",
            HttpReply::json(200, json!({"data": [{"id": "prod-1", "sold": 40}]})),
        );
        mock.reply_with(
            "/admin/stats/category-counts",
            HttpReply::json(200, json!({"data": {"apparel": 12}})),
        );
        mock.reply_with("/admin/stats/out-of-stock", total(3.0));
        mock.reply_with("/admin/stats/new-sellers", total(9.0));
        mock.reply_with("/admin/stats/pending-kyc-count", total(4.0));
        // open-dispute-count and user-signups stay unregistered.

        let (snapshot, stats) = dashboard(mock).refresh(1_700_000_000).await.unwrap();

        assert_eq!(snapshot.fulfilled_count(), 9);
        assert_eq!(snapshot.failed_count(), 2);
        assert_eq!(stats.weekly_revenue, Metric::Available(1_200.0));
        assert_eq!(stats.average_order_value, Metric::Available(25.0));
        assert_eq!(stats.open_disputes, Metric::Unavailable);
        assert_eq!(stats.user_signups, Metric::Unavailable);
        assert!(stats.unavailable.contains(&MetricSource::OpenDisputeCount));
        assert!(stats.unavailable.contains(&MetricSource::UserSignups));
    }

    #[tokio::test]
    async fn test_dead_backend_is_one_aggregate_error() {
        let mock = Arc::new(MockTransport::new());
        for source in [MetricSource::WeeklyRevenue, MetricSource::OrderCounts] {
            mock.fail_with(&source.path(), SourceError::network("connection refused"));
        }
        let engine = AggregationEngine::new(Arc::new(SourceGateway::new(mock)));

        let err = engine
            .snapshot(
                vec![
                    SourceCall::new(MetricSource::WeeklyRevenue),
                    SourceCall::new(MetricSource::OrderCounts),
                ],
                0,
            )
            .await
            .unwrap_err();

        match err {
            AggregationError::AllSourcesFailed { failures } => {
                assert_eq!(failures.len(), 2);
                assert!(failures.iter().all(|(_, msg)| msg == "connection refused"));
            }
            other => panic!("expected AllSourcesFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_zero_orders_never_becomes_zero_aov() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_with("/admin/stats/monthly-revenue", total(0.0));
        mock.reply_with("/admin/stats/order-counts", total(0.0));
        let engine = AggregationEngine::new(Arc::new(SourceGateway::new(mock)));

        let snapshot = engine
            .snapshot(
                vec![
                    SourceCall::new(MetricSource::MonthlyRevenue),
                    SourceCall::new(MetricSource::OrderCounts),
                ],
                0,
            )
            .await
            .unwrap();
        let stats = DashboardStats::from_snapshot(&snapshot);

        assert_eq!(stats.monthly_revenue, Metric::Available(0.0));
        assert_eq!(stats.total_orders, Metric::Available(0.0));
        assert_eq!(stats.average_order_value, Metric::Unavailable);
    }

    /// A 204 from a source is a fulfilled no-content outcome: the source is
    /// not "unavailable", but any stat depending on its body still is.
    #[tokio::test]
    async fn test_no_content_source_is_fulfilled_without_data() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_with("/admin/stats/user-signups", HttpReply::empty(204));
        let engine = AggregationEngine::new(Arc::new(SourceGateway::new(mock)));

        let snapshot = engine
            .snapshot(vec![SourceCall::new(MetricSource::UserSignups)], 0)
            .await
            .unwrap();

        assert_eq!(snapshot.fulfilled_count(), 1);
        assert!(!snapshot.is_unavailable(MetricSource::UserSignups));
        assert_eq!(snapshot.number(MetricSource::UserSignups, "total"), None);

        let stats = DashboardStats::from_snapshot(&snapshot);
        assert_eq!(stats.user_signups, Metric::Unavailable);
        assert!(stats.unavailable.is_empty());
    }
}
