use actix_web::{delete, get, post, web, HttpResponse};
use serde_json::json;
use tokio::sync::RwLock;

use crate::error::SplitError;
use crate::ledger::Ledger;
use crate::schemas::{NewExpenseJson, ParticipantNameJson};
use crate::summary::summarize;

pub type SharedLedger = web::Data<RwLock<Ledger>>;

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/participants")]
async fn list_participants(ledger: SharedLedger) -> HttpResponse {
    let ledger = ledger.read().await;
    HttpResponse::Ok().json(ledger.participants())
}

#[post("/participants")]
async fn add_participant(
    ledger: SharedLedger,
    json: web::Json<ParticipantNameJson>,
) -> Result<HttpResponse, SplitError> {
    let participant = ledger.write().await.add_participant(&json.name)?;
    Ok(HttpResponse::Ok().json(participant))
}

#[delete("/participants/{id}")]
async fn remove_participant(
    ledger: SharedLedger,
    id: web::Path<String>,
) -> Result<HttpResponse, SplitError> {
    let participant = ledger.write().await.remove_participant(&id)?;
    Ok(HttpResponse::Ok().json(participant))
}

#[get("/expenses")]
async fn list_expenses(ledger: SharedLedger) -> HttpResponse {
    let ledger = ledger.read().await;
    HttpResponse::Ok().json(ledger.expenses())
}

#[post("/expenses")]
async fn add_expense(
    ledger: SharedLedger,
    expense: web::Json<NewExpenseJson>,
) -> Result<HttpResponse, SplitError> {
    let expense = ledger.write().await.add_expense(&expense)?;
    Ok(HttpResponse::Ok().json(expense))
}

#[get("/balances")]
async fn get_balances(ledger: SharedLedger) -> Result<HttpResponse, SplitError> {
    let balances = ledger.read().await.balances()?;
    Ok(HttpResponse::Ok().json(balances))
}

#[get("/settlement")]
async fn get_settlement(ledger: SharedLedger) -> Result<HttpResponse, SplitError> {
    let transfers = ledger.read().await.transfers()?;
    Ok(HttpResponse::Ok().json(transfers))
}

#[get("/summary")]
async fn get_summary(ledger: SharedLedger) -> Result<HttpResponse, SplitError> {
    let summary = summarize(&*ledger.read().await)?;
    Ok(HttpResponse::Ok().json(summary))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(list_participants)
        .service(add_participant)
        .service(remove_participant)
        .service(list_expenses)
        .service(add_expense)
        .service(get_balances)
        .service(get_settlement)
        .service(get_summary);
}
