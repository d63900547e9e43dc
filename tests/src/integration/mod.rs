//! # Integration Flows

pub mod dashboard_flows;
pub mod listing_flows;
pub mod moderation_flows;
