//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use kernel::receipt::{DeleteReceipt, InsertReceipt};
use std::sync::Arc;

use crate::application::config::DonationConfig;
use crate::application::create_payment_intent::CreatePaymentIntentUseCase;
use crate::application::finalize_payment::{FinalizePaymentInput, FinalizePaymentUseCase};
use crate::application::history::DonationHistoryUseCase;
use crate::application::record_intent::{RecordIntentInput, RecordIntentUseCase};
use crate::domain::processor::PaymentProcessor;
use crate::domain::repository::{DonorIntentRepository, PaymentRepository};
use crate::error::DonationResult;
use crate::presentation::dto::{
    CreatePaymentIntentRequest, CreatePaymentIntentResponse, DonorIntentResponse,
    FinalizePaymentRequest, FinalizePaymentResponse, PaymentResponse, RecordIntentRequest,
};

/// Shared state for donation handlers
#[derive(Clone)]
pub struct DonationAppState<R, P>
where
    R: DonorIntentRepository + PaymentRepository + Clone + Send + Sync + 'static,
    P: PaymentProcessor + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub processor: Arc<P>,
    pub config: Arc<DonationConfig>,
}

/// POST /donar-info (token gated at the router)
pub async fn record_intent<R, P>(
    State(state): State<DonationAppState<R, P>>,
    Json(req): Json<RecordIntentRequest>,
) -> DonationResult<Json<InsertReceipt>>
where
    R: DonorIntentRepository + PaymentRepository + Clone + Send + Sync + 'static,
    P: PaymentProcessor + Clone + Send + Sync + 'static,
{
    let use_case = RecordIntentUseCase::new(state.repo.clone());

    let input = RecordIntentInput {
        email: req.email,
        amount: req.amount,
        campaign_id: req.campaign_id,
    };

    let intent = use_case.execute(input).await?;

    Ok(Json(InsertReceipt::new(intent.id.into_uuid())))
}

/// GET /donar-info/{email}
pub async fn list_pending<R, P>(
    State(state): State<DonationAppState<R, P>>,
    Path(email): Path<String>,
) -> DonationResult<Json<Vec<DonorIntentResponse>>>
where
    R: DonorIntentRepository + PaymentRepository + Clone + Send + Sync + 'static,
    P: PaymentProcessor + Clone + Send + Sync + 'static,
{
    let use_case = DonationHistoryUseCase::new(state.repo.clone(), state.repo.clone());

    let intents = use_case.pending_for(&email).await?;

    Ok(Json(
        intents.into_iter().map(DonorIntentResponse::from).collect(),
    ))
}

/// POST /create-payment-intent
pub async fn create_payment_intent<R, P>(
    State(state): State<DonationAppState<R, P>>,
    Json(req): Json<CreatePaymentIntentRequest>,
) -> DonationResult<Json<CreatePaymentIntentResponse>>
where
    R: DonorIntentRepository + PaymentRepository + Clone + Send + Sync + 'static,
    P: PaymentProcessor + Clone + Send + Sync + 'static,
{
    let use_case = CreatePaymentIntentUseCase::new(state.processor.clone(), state.config.clone());

    let client_secret = use_case.execute(req.amount_in_cents).await?;

    Ok(Json(CreatePaymentIntentResponse { client_secret }))
}

/// POST /payment
pub async fn finalize_payment<R, P>(
    State(state): State<DonationAppState<R, P>>,
    Json(req): Json<FinalizePaymentRequest>,
) -> DonationResult<Json<FinalizePaymentResponse>>
where
    R: DonorIntentRepository + PaymentRepository + Clone + Send + Sync + 'static,
    P: PaymentProcessor + Clone + Send + Sync + 'static,
{
    let use_case = FinalizePaymentUseCase::new(state.repo.clone(), state.repo.clone());

    let input = FinalizePaymentInput {
        email: req.email,
        amount: req.amount,
        transaction_id: req.transaction_id,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(FinalizePaymentResponse {
        insert_result: InsertReceipt::new(output.payment_id),
        delete_result: DeleteReceipt::new(output.cleared_intents),
    }))
}

/// GET /payment/{email}
pub async fn list_payments<R, P>(
    State(state): State<DonationAppState<R, P>>,
    Path(email): Path<String>,
) -> DonationResult<Json<Vec<PaymentResponse>>>
where
    R: DonorIntentRepository + PaymentRepository + Clone + Send + Sync + 'static,
    P: PaymentProcessor + Clone + Send + Sync + 'static,
{
    let use_case = DonationHistoryUseCase::new(state.repo.clone(), state.repo.clone());

    let payments = use_case.settled_for(&email).await?;

    Ok(Json(
        payments.into_iter().map(PaymentResponse::from).collect(),
    ))
}
