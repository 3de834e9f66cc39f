//! Customer handlers

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use chrono::Utc;
use uuid::Uuid;

use core_kernel::{CustomerId, Money};
use domain_ledger::{
    build_statement, classify, messaging, summarize_accounts, Customer, LedgerError,
    OutstandingBook, StatementPeriod,
};
use infra_db::{CustomerRepository, PaymentRepository, TransactionRepository};

use crate::auth::Claims;
use crate::dto::customers::*;
use crate::dto::statements::{StatementQuery, StatementResponse};
use crate::error::ApiError;
use crate::AppState;

/// Creates a new customer account
pub async fn create_customer(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let mut customer = Customer::new(
        CustomerId::new_v7(),
        request.name,
        Money::new(request.credit_limit),
    )?
    .created_by(claims.sub);

    if let Some(phone) = request.phone {
        customer = customer.with_phone(phone);
    }
    if let Some(address) = request.address {
        customer = customer.with_address(address);
    }

    CustomerRepository::new(state.pool.clone())
        .create(&customer)
        .await?;

    Ok(Json(customer.into()))
}

/// Lists all customers with their derived balances and standing
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let customers = CustomerRepository::new(state.pool.clone()).list_all().await?;
    let transactions = TransactionRepository::new(state.pool.clone()).list_all().await?;
    let payments = PaymentRepository::new(state.pool.clone()).list_all().await?;

    let book = OutstandingBook::tally(&transactions, &payments);
    let summaries = summarize_accounts(customers, &book);

    Ok(Json(summaries.into_iter().map(Into::into).collect()))
}

/// One customer with their full ledger and derived balance
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerDetailResponse>, ApiError> {
    let id = CustomerId::from_uuid(id);
    let customer = CustomerRepository::new(state.pool.clone()).find_by_id(id).await?;
    let transactions = TransactionRepository::new(state.pool.clone())
        .list_for_customer(id)
        .await?;
    let payments = PaymentRepository::new(state.pool.clone())
        .list_for_customer(id)
        .await?;

    let book = OutstandingBook::tally(&transactions, &payments);
    let outstanding = book.outstanding_for(id);
    let standing = classify(outstanding, customer.credit_limit);

    Ok(Json(CustomerDetailResponse {
        customer: customer.into(),
        transactions: transactions.into_iter().map(Into::into).collect(),
        payments: payments.into_iter().map(Into::into).collect(),
        outstanding,
        standing,
    }))
}

/// Updates a customer's details and credit limit
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let repo = CustomerRepository::new(state.pool.clone());
    let mut customer = repo.find_by_id(CustomerId::from_uuid(id)).await?;

    if let Some(name) = request.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(LedgerError::validation("name", "customer name required").into());
        }
        customer.name = name;
    }
    if let Some(limit) = request.credit_limit {
        customer.update_credit_limit(Money::new(limit))?;
    }
    customer.update_contact(request.phone, request.address);

    repo.update(&customer).await?;
    Ok(Json(customer.into()))
}

/// Builds a statement for the customer over the requested date range
pub async fn get_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<StatementQuery>,
) -> Result<Json<StatementResponse>, ApiError> {
    let id = CustomerId::from_uuid(id);
    let customer = CustomerRepository::new(state.pool.clone()).find_by_id(id).await?;
    let transactions = TransactionRepository::new(state.pool.clone())
        .list_for_customer(id)
        .await?;
    let payments = PaymentRepository::new(state.pool.clone())
        .list_for_customer(id)
        .await?;

    let period = StatementPeriod::new(query.start, query.end);
    let statement = build_statement(customer, &transactions, &payments, period, Utc::now())?;

    Ok(Json(statement.into()))
}

/// Builds a WhatsApp reminder link for the customer's outstanding balance
pub async fn get_reminder_link(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReminderLinkResponse>, ApiError> {
    let id = CustomerId::from_uuid(id);
    let customer = CustomerRepository::new(state.pool.clone()).find_by_id(id).await?;
    let transactions = TransactionRepository::new(state.pool.clone())
        .list_for_customer(id)
        .await?;
    let payments = PaymentRepository::new(state.pool.clone())
        .list_for_customer(id)
        .await?;

    let outstanding = OutstandingBook::tally(&transactions, &payments).outstanding_for(id);
    let whatsapp_url = messaging::whatsapp_link(&customer, outstanding)?;

    Ok(Json(ReminderLinkResponse {
        outstanding,
        message: messaging::reminder_text(outstanding),
        whatsapp_url,
    }))
}
