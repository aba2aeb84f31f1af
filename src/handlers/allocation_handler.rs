use actix_web::{web, HttpResponse, Result};

use crate::allocation::{parse_payload, Roster, TeamAllocator};
use crate::models::common::{ApiResponse, ErrorResponse};
use crate::models::report::{AllocationOutcome, PlayerAllocation};

/// Allocate a roster snapshot to teams
#[tracing::instrument(
    name = "Allocate teams",
    skip(body, allocator),
    fields(payload_bytes = body.len())
)]
pub async fn allocate_roster(
    body: web::Bytes,
    allocator: web::Data<TeamAllocator>,
) -> Result<HttpResponse> {
    let records = match parse_payload(&body) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!("Rejected allocation request: {}", e);
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())));
        }
    };

    tracing::info!("Processing {} players", records.len());
    let roster = Roster::from_records(&records);

    match allocator.allocate(&roster) {
        AllocationOutcome::NothingToAllocate { total_players } => {
            tracing::info!("Nothing to allocate among {} players", total_players);
            Ok(HttpResponse::Ok().json(ApiResponse::failure(
                "No available players to sort",
                Vec::<PlayerAllocation>::new(),
            )))
        }
        AllocationOutcome::Allocated(report) => {
            tracing::info!(
                "Assigned {} of {} available players",
                report.assigned_players,
                report.available_players
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(report)))
        }
    }
}

pub async fn reject_method() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ErrorResponse::new("Method not allowed. Use POST."))
}
