//! # Listing Integration Flows
//!
//! Drives the list controller through the gateway-backed backend against a
//! mock transport: filter pairs and page numbers on the wire, typed rows on
//! the way back, page reset on filter change, and caller-side clamping.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mc_01_source_gateway::{HttpReply, ListResource, MockTransport, SourceGateway};
    use mc_03_moderation::{ProductListing, ProductStatus};
    use mc_04_listing::adapters::GatewayList;
    use mc_04_listing::{ListController, ProductFilter, QueryFilter};
    use serde_json::json;

    fn product_json(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "status": status,
            "created_at": 1_700_000_000u64,
            "decided_at": null,
            "decision_note": null,
            "subject_ref": "seller-1",
            "price_cents": 2_500u64,
            "stock": 3,
            "media": [],
            "published": false
        })
    }

    fn products_reply(items: Vec<serde_json::Value>, page: u32, pages: u32) -> HttpReply {
        HttpReply::json(
            200,
            json!({
                "data": items,
                "meta": {"current_page": page, "total_pages": pages, "total_count": pages * 2}
            }),
        )
    }

    fn wired(mock: Arc<MockTransport>) -> GatewayList {
        GatewayList::new(
            Arc::new(SourceGateway::new(mock)),
            ListResource::Products,
        )
    }

    #[tokio::test]
    async fn test_product_queue_typed_rows_in_server_order() {
        crate::init_test_logging();
        let mock = Arc::new(MockTransport::new());
        mock.reply_with(
            "/admin/products",
            products_reply(
                vec![
                    product_json("prod-2", "pending"),
                    product_json("prod-1", "under_review"),
                ],
                1,
                1,
            ),
        );
        let backend = wired(mock.clone());
        let controller = ListController::new(ProductFilter {
            status: Some(ProductStatus::Pending),
            ..Default::default()
        });

        let page = controller
            .query::<ProductListing>(&backend)
            .await
            .unwrap()
            .into_page()
            .unwrap();

        let ids: Vec<_> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["prod-2", "prod-1"]);
        assert_eq!(page.items[1].status, ProductStatus::UnderReview);

        let calls = mock.recorded();
        assert!(calls[0]
            .query
            .contains(&("status".to_string(), "pending".to_string())));
        assert!(calls[0]
            .query
            .contains(&("page".to_string(), "1".to_string())));
    }

    #[tokio::test]
    async fn test_filter_change_resets_wire_page_to_one() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_with("/admin/products", products_reply(vec![], 1, 5));
        let backend = wired(mock.clone());
        let controller = ListController::new(ProductFilter::default());

        controller.set_page(3);
        let _ = controller.query::<ProductListing>(&backend).await.unwrap();

        controller.apply_filter(ProductFilter {
            search: Some("socks".to_string()),
            ..Default::default()
        });
        let _ = controller.query::<ProductListing>(&backend).await.unwrap();

        let calls = mock.recorded();
        assert_eq!(calls[0].query.last(), Some(&("page".to_string(), "3".to_string())));
        assert!(calls[1]
            .query
            .contains(&("search".to_string(), "socks".to_string())));
        assert!(calls[1]
            .query
            .contains(&("page".to_string(), "1".to_string())));
    }

    /// An over-shooting page request goes out as asked; the caller clamps
    /// with the metadata the backend answered with and re-queries.
    #[tokio::test]
    async fn test_caller_clamps_with_returned_metadata() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_with("/admin/products", products_reply(vec![], 2, 2));
        let backend = wired(mock.clone());
        let controller = ListController::new(ProductFilter::default());

        controller.set_page(9);
        let page = controller
            .query::<ProductListing>(&backend)
            .await
            .unwrap()
            .into_page()
            .unwrap();
        assert!(mock.recorded()[0]
            .query
            .contains(&("page".to_string(), "9".to_string())));

        controller.set_page(page.meta.clamp(9));
        assert_eq!(controller.page(), 2);
        let _ = controller.query::<ProductListing>(&backend).await.unwrap();
        assert!(mock.recorded()[1]
            .query
            .contains(&("page".to_string(), "2".to_string())));
    }

    #[test]
    fn test_unset_filter_fields_stay_off_the_wire() {
        let filter = ProductFilter {
            search: Some("  ".to_string()),
            status: None,
            category: None,
        };
        assert!(filter.query_pairs().is_empty());
    }
}
