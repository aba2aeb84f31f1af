// src/routes/allocation.rs
use actix_web::{web, HttpResponse, Result};

use crate::allocation::TeamAllocator;
use crate::handlers::allocation_handler;

/// Allocate the posted roster to teams
pub async fn allocate_teams(
    body: web::Bytes,
    allocator: web::Data<TeamAllocator>,
) -> Result<HttpResponse> {
    allocation_handler::allocate_roster(body, allocator).await
}

/// Any method other than POST on the allocation resource
pub async fn method_not_allowed() -> HttpResponse {
    allocation_handler::reject_method().await
}
