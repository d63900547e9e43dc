//! # Source Catalog
//!
//! Closed enumerations of everything the gateway can be asked for. An
//! unknown source name is impossible by construction; there is no stringly
//! typed lookup to reject at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named dashboard/analytics metric source.
///
/// Each variant is one independent remote query. The aggregation engine
/// fans out over a batch of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricSource {
    /// Revenue summed over the trailing week.
    WeeklyRevenue,
    /// Revenue summed over the trailing month.
    MonthlyRevenue,
    /// Total order count.
    OrderCounts,
    /// Orders broken down by fulfillment status.
    OrderStatusBreakdown,
    /// Best-selling products.
    TopProducts,
    /// Listing counts per category.
    CategoryCounts,
    /// Products currently out of stock.
    OutOfStock,
    /// Sellers registered in the current period.
    NewSellers,
    /// KYC submissions awaiting review.
    PendingKycCount,
    /// Disputes currently open.
    OpenDisputeCount,
    /// User signups in the current period.
    UserSignups,
}

impl MetricSource {
    /// Stable name used as the key in aggregation snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricSource::WeeklyRevenue => "weekly_revenue",
            MetricSource::MonthlyRevenue => "monthly_revenue",
            MetricSource::OrderCounts => "order_counts",
            MetricSource::OrderStatusBreakdown => "order_status_breakdown",
            MetricSource::TopProducts => "top_products",
            MetricSource::CategoryCounts => "category_counts",
            MetricSource::OutOfStock => "out_of_stock",
            MetricSource::NewSellers => "new_sellers",
            MetricSource::PendingKycCount => "pending_kyc_count",
            MetricSource::OpenDisputeCount => "open_dispute_count",
            MetricSource::UserSignups => "user_signups",
        }
    }

    /// Backend path for this metric.
    pub fn path(&self) -> String {
        format!("/admin/stats/{}", self.as_str().replace('_', "-"))
    }
}

impl fmt::Display for MetricSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listable backend collection.
///
/// Covers the moderated entity lists plus the seller/user CRUD lists whose
/// filtering contract the console shares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListResource {
    /// KYC submissions.
    KycSubmissions,
    /// Product listings.
    Products,
    /// Disputes.
    Disputes,
    /// Seller accounts.
    Sellers,
    /// Buyer accounts.
    Users,
}

impl ListResource {
    /// Backend path for this collection.
    pub fn path(&self) -> &'static str {
        match self {
            ListResource::KycSubmissions => "/admin/kyc-submissions",
            ListResource::Products => "/admin/products",
            ListResource::Disputes => "/admin/disputes",
            ListResource::Sellers => "/admin/sellers",
            ListResource::Users => "/admin/users",
        }
    }
}
