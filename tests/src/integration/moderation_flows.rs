//! # Moderation Integration Flows
//!
//! Drives the moderation state machine through the gateway-backed store
//! against a mock transport, asserting the exact wire traffic, and checks
//! the suspension counter under concurrent suspends against the in-memory
//! reference store.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mc_01_source_gateway::{HttpReply, MockTransport, SourceGateway};
    use mc_03_moderation::adapters::{GatewayStore, MemoryStore};
    use mc_03_moderation::{
        Account, AccountService, AccountStatus, Decision, KycStatus, ModerationError,
        ModerationService,
    };
    use serde_json::json;
    use shared_types::{AccountId, EntityId, SourceErrorKind};

    fn kyc_json(status: &str) -> serde_json::Value {
        json!({
            "id": "kyc-1",
            "status": status,
            "submitted_at": 1_700_000_000u64,
            "decided_at": null,
            "decision_note": null,
            "subject_ref": "seller-1",
            "documents": [{"kind": "id_card", "url": "s3://docs/kyc-1/id.png"}]
        })
    }

    fn wired_service(mock: Arc<MockTransport>) -> ModerationService {
        let gateway = Arc::new(SourceGateway::new(mock));
        ModerationService::new(Arc::new(GatewayStore::new(gateway)))
    }

    #[tokio::test]
    async fn test_kyc_approval_end_to_end_over_the_wire() {
        crate::init_test_logging();
        let mock = Arc::new(MockTransport::new());
        mock.reply_with(
            "/admin/kyc-submissions/kyc-1",
            HttpReply::json(200, json!({"data": kyc_json("pending")})),
        );
        mock.reply_with(
            "/admin/kyc-submissions/kyc-1/decision",
            HttpReply::json(200, json!({"data": kyc_json("approved")})),
        );

        let decided = wired_service(mock.clone())
            .decide_kyc(
                &EntityId::from("kyc-1"),
                Decision::Approve,
                Some("documents verified"),
                1_700_000_500,
            )
            .await
            .unwrap();

        assert_eq!(decided.status, KycStatus::Approved);
        assert_eq!(decided.decided_at, Some(1_700_000_500));

        let calls = mock.recorded();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].path, "/admin/kyc-submissions/kyc-1");
        assert_eq!(calls[1].path, "/admin/kyc-submissions/kyc-1/decision");
        let body = calls[1].body.as_ref().unwrap();
        assert_eq!(body["decision"], "approve");
        assert_eq!(body["note"], "documents verified");
    }

    #[tokio::test]
    async fn test_terminal_entity_never_reaches_the_wire_write() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_with(
            "/admin/kyc-submissions/kyc-1",
            HttpReply::json(200, json!({"data": kyc_json("rejected")})),
        );

        let err = wired_service(mock.clone())
            .decide_kyc(&EntityId::from("kyc-1"), Decision::Approve, None, 5)
            .await
            .unwrap_err();

        assert!(matches!(err, ModerationError::InvalidTransition { .. }));
        // Only the read went out; the decision POST never happened.
        assert_eq!(mock.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_whitespace_note_fails_before_the_wire_write() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_with(
            "/admin/kyc-submissions/kyc-1",
            HttpReply::json(200, json!({"data": kyc_json("pending")})),
        );

        let err = wired_service(mock.clone())
            .decide_kyc(&EntityId::from("kyc-1"), Decision::Reject, Some("  \t"), 5)
            .await
            .unwrap_err();

        assert!(matches!(err, ModerationError::Validation { .. }));
        assert_eq!(mock.recorded().len(), 1);
    }

    #[tokio::test]
    async fn test_expired_session_surfaces_as_unauthorized() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_with(
            "/admin/kyc-submissions/kyc-1",
            HttpReply::json(401, json!({"message": "session expired"})),
        );

        let err = wired_service(mock)
            .decide_kyc(&EntityId::from("kyc-1"), Decision::Approve, None, 5)
            .await
            .unwrap_err();

        match err {
            ModerationError::Source(source) => {
                assert_eq!(source.kind, SourceErrorKind::Unauthorized);
                assert!(!source.is_retryable());
            }
            other => panic!("expected Source error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_suspend_posts_status_and_reason() {
        let mock = Arc::new(MockTransport::new());
        mock.reply_with(
            "/admin/accounts/seller-1",
            HttpReply::json(
                200,
                json!({"data": {
                    "id": "seller-1",
                    "status": "active",
                    "suspension_count": 0,
                    "can_list_products": true
                }}),
            ),
        );
        mock.reply_with(
            "/admin/accounts/seller-1/status",
            HttpReply::json(
                200,
                json!({"data": {
                    "id": "seller-1",
                    "status": "suspended",
                    "suspension_count": 1,
                    "can_list_products": true
                }}),
            ),
        );

        let gateway = Arc::new(SourceGateway::new(mock.clone()));
        let service = AccountService::new(Arc::new(GatewayStore::new(gateway)));

        let suspended = service
            .suspend(&AccountId::from("seller-1"), "counterfeit goods", 9)
            .await
            .unwrap();
        assert_eq!(suspended.status, AccountStatus::Suspended);
        assert_eq!(suspended.suspension_count, 1);

        let calls = mock.recorded();
        let body = calls[1].body.as_ref().unwrap();
        assert_eq!(body["status"], "suspended");
        assert_eq!(body["reason"], "counterfeit goods");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_concurrent_suspends_increment_once() {
        let store = Arc::new(MemoryStore::new());
        store.insert_account(Account::new(AccountId::from("seller-1")));
        let service = Arc::new(AccountService::new(store.clone()));

        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .suspend(&AccountId::from("seller-1"), "double click", i)
                        .await
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let account = service
            .unsuspend(&AccountId::from("seller-1"), 99)
            .await
            .unwrap();
        assert_eq!(account.suspension_count, 1);
    }
}
