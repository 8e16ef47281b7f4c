use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::auth::OptionalUser;
use crate::db;
use crate::state::AppState;
use crate::tickets::{
    rank_by_availability, sold_out_by_ticket, split_listing, PurchaseAction, TicketListing,
};
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketListingPayload {
    #[serde(flatten)]
    listing: TicketListing,
    purchase_action: PurchaseAction,
}

/// GET /tickets
///
/// The listing page data: tickets ranked available-first over a single
/// read snapshot, split into hero row and grid, plus the purchase call to
/// action for the current visitor. Session resolution is independent of
/// the ranking; a failed lookup only changes the call to action.
pub async fn list_tickets(
    State(state): State<AppState>,
    OptionalUser(user): OptionalUser,
) -> Result<Response, AppError> {
    let (tickets, usage) = db::tickets::listing_snapshot(&state.pool).await?;

    let sold_out = sold_out_by_ticket(&usage);
    let ranked = rank_by_availability(tickets, &sold_out);
    let listing = split_listing(ranked);

    let user_id = user.map(|u| u.id.to_string());
    let purchase_action = state.purchase.resolve(user_id.as_deref());

    Ok(success(
        TicketListingPayload {
            listing,
            purchase_action,
        },
        "Tickets retrieved",
    )
    .into_response())
}
