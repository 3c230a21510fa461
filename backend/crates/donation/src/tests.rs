//! Unit tests for Donation crate

#[cfg(test)]
mod fakes {
    use crate::domain::entities::{DonorIntent, Payment};
    use crate::domain::processor::{PaymentIntent, PaymentProcessor};
    use crate::domain::repository::{DonorIntentRepository, PaymentRepository};
    use crate::error::{DonationError, DonationResult};
    use std::sync::{Arc, Mutex};

    /// In-memory stand-in for the donation store
    #[derive(Clone, Default)]
    pub struct MemoryDonationStore {
        pub intents: Arc<Mutex<Vec<DonorIntent>>>,
        pub payments: Arc<Mutex<Vec<Payment>>>,
    }

    impl DonorIntentRepository for MemoryDonationStore {
        async fn create(&self, intent: &DonorIntent) -> DonationResult<()> {
            self.intents.lock().unwrap().push(intent.clone());
            Ok(())
        }

        async fn list_by_email(&self, email: &str) -> DonationResult<Vec<DonorIntent>> {
            Ok(self
                .intents
                .lock()
                .unwrap()
                .iter()
                .filter(|i| i.email == email)
                .cloned()
                .collect())
        }

        async fn delete_by_email(&self, email: &str) -> DonationResult<u64> {
            let mut intents = self.intents.lock().unwrap();
            let before = intents.len();
            intents.retain(|i| i.email != email);
            Ok((before - intents.len()) as u64)
        }
    }

    impl PaymentRepository for MemoryDonationStore {
        async fn create(&self, payment: &Payment) -> DonationResult<()> {
            self.payments.lock().unwrap().push(payment.clone());
            Ok(())
        }

        async fn list_by_email(&self, email: &str) -> DonationResult<Vec<Payment>> {
            Ok(self
                .payments
                .lock()
                .unwrap()
                .iter()
                .filter(|p| p.email == email)
                .cloned()
                .collect())
        }
    }

    /// Stub processor that either succeeds or declines every request
    #[derive(Clone)]
    pub struct StubProcessor {
        pub decline: bool,
    }

    impl PaymentProcessor for StubProcessor {
        async fn create_intent(
            &self,
            amount_cents: i64,
            _currency: &str,
        ) -> DonationResult<PaymentIntent> {
            if self.decline {
                return Err(DonationError::Processor("Your card was declined".into()));
            }
            Ok(PaymentIntent {
                id: format!("pi_test_{}", amount_cents),
                client_secret: format!("pi_test_{}_secret", amount_cents),
            })
        }
    }
}

#[cfg(test)]
mod payment_intent_tests {
    use super::fakes::StubProcessor;
    use crate::application::config::DonationConfig;
    use crate::application::create_payment_intent::CreatePaymentIntentUseCase;
    use crate::error::DonationError;
    use std::sync::Arc;

    fn use_case(decline: bool) -> CreatePaymentIntentUseCase<StubProcessor> {
        CreatePaymentIntentUseCase::new(
            Arc::new(StubProcessor { decline }),
            Arc::new(DonationConfig::default()),
        )
    }

    #[tokio::test]
    async fn test_missing_amount_is_rejected() {
        let err = use_case(false).execute(None).await.unwrap_err();
        assert!(matches!(err, DonationError::AmountRequired));
    }

    #[tokio::test]
    async fn test_zero_amount_is_rejected() {
        let err = use_case(false).execute(Some(0)).await.unwrap_err();
        assert!(matches!(err, DonationError::AmountRequired));
    }

    #[tokio::test]
    async fn test_negative_amount_is_rejected() {
        let err = use_case(false).execute(Some(-500)).await.unwrap_err();
        assert!(matches!(err, DonationError::AmountRequired));
    }

    #[tokio::test]
    async fn test_valid_amount_returns_client_secret() {
        let secret = use_case(false).execute(Some(500)).await.unwrap();
        assert!(!secret.is_empty());
        assert_eq!(secret, "pi_test_500_secret");
    }

    #[tokio::test]
    async fn test_declined_request_surfaces_processor_error() {
        let err = use_case(true).execute(Some(500)).await.unwrap_err();
        assert!(matches!(err, DonationError::Processor(_)));
        assert!(err.to_string().contains("declined"));
    }

    #[tokio::test]
    async fn test_decline_happens_after_validation() {
        // A missing amount never reaches the (failing) processor
        let err = use_case(true).execute(None).await.unwrap_err();
        assert!(matches!(err, DonationError::AmountRequired));
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::fakes::MemoryDonationStore;
    use crate::application::finalize_payment::{FinalizePaymentInput, FinalizePaymentUseCase};
    use crate::application::history::DonationHistoryUseCase;
    use crate::application::record_intent::{RecordIntentInput, RecordIntentUseCase};
    use std::sync::Arc;
    use uuid::Uuid;

    fn intent_input(email: &str, amount: i64) -> RecordIntentInput {
        RecordIntentInput {
            email: email.to_string(),
            amount,
            campaign_id: Uuid::new_v4(),
        }
    }

    fn finalize_input(email: &str, amount: i64) -> FinalizePaymentInput {
        FinalizePaymentInput {
            email: email.to_string(),
            amount,
            transaction_id: Some("pi_test_settled".to_string()),
        }
    }

    #[tokio::test]
    async fn test_record_intent_appends_without_dedup() {
        let store = Arc::new(MemoryDonationStore::default());
        let record = RecordIntentUseCase::new(store.clone());
        let history = DonationHistoryUseCase::new(store.clone(), store.clone());

        record.execute(intent_input("b@x.com", 20)).await.unwrap();
        record.execute(intent_input("b@x.com", 5)).await.unwrap();

        let pending = history.pending_for("b@x.com").await.unwrap();
        assert_eq!(pending.len(), 2);

        // Other emails are untouched
        assert!(history.pending_for("a@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_finalize_settles_and_clears_pending() {
        let store = Arc::new(MemoryDonationStore::default());
        let record = RecordIntentUseCase::new(store.clone());
        let finalize = FinalizePaymentUseCase::new(store.clone(), store.clone());
        let history = DonationHistoryUseCase::new(store.clone(), store.clone());

        record.execute(intent_input("b@x.com", 20)).await.unwrap();
        record.execute(intent_input("b@x.com", 5)).await.unwrap();

        let output = finalize.execute(finalize_input("b@x.com", 25)).await.unwrap();

        assert_eq!(output.cleared_intents, 2);
        assert!(history.pending_for("b@x.com").await.unwrap().is_empty());

        let settled = history.settled_for("b@x.com").await.unwrap();
        assert_eq!(settled.len(), 1);
        assert_eq!(settled[0].amount, 25);
        assert_eq!(settled[0].id.into_uuid(), output.payment_id);
    }

    #[tokio::test]
    async fn test_finalize_without_pending_intents() {
        let store = Arc::new(MemoryDonationStore::default());
        let finalize = FinalizePaymentUseCase::new(store.clone(), store.clone());
        let history = DonationHistoryUseCase::new(store.clone(), store.clone());

        let output = finalize.execute(finalize_input("a@x.com", 10)).await.unwrap();

        assert_eq!(output.cleared_intents, 0);
        assert_eq!(history.settled_for("a@x.com").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_finalize_only_clears_matching_email() {
        let store = Arc::new(MemoryDonationStore::default());
        let record = RecordIntentUseCase::new(store.clone());
        let finalize = FinalizePaymentUseCase::new(store.clone(), store.clone());
        let history = DonationHistoryUseCase::new(store.clone(), store.clone());

        record.execute(intent_input("b@x.com", 20)).await.unwrap();
        record.execute(intent_input("c@x.com", 30)).await.unwrap();

        finalize.execute(finalize_input("b@x.com", 20)).await.unwrap();

        assert!(history.pending_for("b@x.com").await.unwrap().is_empty());
        assert_eq!(history.pending_for("c@x.com").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_finalize_twice_creates_two_settlements() {
        let store = Arc::new(MemoryDonationStore::default());
        let finalize = FinalizePaymentUseCase::new(store.clone(), store.clone());
        let history = DonationHistoryUseCase::new(store.clone(), store.clone());

        let first = finalize.execute(finalize_input("a@x.com", 10)).await.unwrap();
        let second = finalize.execute(finalize_input("a@x.com", 10)).await.unwrap();

        // Repeated settlement is appended, not deduplicated
        assert_ne!(first.payment_id, second.payment_id);
        assert_eq!(history.settled_for("a@x.com").await.unwrap().len(), 2);
    }
}

#[cfg(test)]
mod dto_tests {
    use crate::presentation::dto::*;
    use kernel::receipt::{DeleteReceipt, InsertReceipt};
    use uuid::Uuid;

    #[test]
    fn test_create_payment_intent_request_deserialization() {
        let request: CreatePaymentIntentRequest =
            serde_json::from_str(r#"{"amountInCents":500}"#).unwrap();
        assert_eq!(request.amount_in_cents, Some(500));

        let request: CreatePaymentIntentRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(request.amount_in_cents, None);
    }

    #[test]
    fn test_create_payment_intent_response_serialization() {
        let response = CreatePaymentIntentResponse {
            client_secret: "pi_test_secret".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains(r#""clientSecret":"pi_test_secret""#));
    }

    #[test]
    fn test_finalize_request_ignores_unknown_fields() {
        let json = r#"{"email":"a@x.com","amount":10,"status":"succeeded","cardBrand":"visa"}"#;
        let request: FinalizePaymentRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "a@x.com");
        assert_eq!(request.amount, 10);
        assert_eq!(request.transaction_id, None);
    }

    #[test]
    fn test_finalize_response_serialization() {
        let response = FinalizePaymentResponse {
            insert_result: InsertReceipt::new(Uuid::nil()),
            delete_result: DeleteReceipt::new(2),
        };
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains(r#""insertResult""#));
        assert!(json.contains(r#""deleteResult""#));
        assert!(json.contains(r#""deletedCount":2"#));
        assert!(json.contains(r#""acknowledged":true"#));
    }

    #[test]
    fn test_record_intent_request_deserialization() {
        let json = format!(
            r#"{{"email":"b@x.com","amount":20,"campaignId":"{}"}}"#,
            Uuid::nil()
        );
        let request: RecordIntentRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(request.email, "b@x.com");
        assert_eq!(request.amount, 20);
        assert_eq!(request.campaign_id, Uuid::nil());
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::DonationError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_status_codes() {
        let response = DonationError::AmountRequired.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = DonationError::Processor("declined".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = DonationError::Internal("test".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DonationError::AmountRequired.to_string(),
            "Amount is required"
        );
        assert!(
            DonationError::Processor("declined".into())
                .to_string()
                .contains("declined")
        );
    }
}
