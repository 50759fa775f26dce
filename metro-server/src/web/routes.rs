//! HTTP route handlers.

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tracing::warn;

use crate::domain::StationId;
use crate::metro::PurchaseError;
use crate::network::NetworkMap;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/purchase", post(purchase_form))
        .route("/api/stations", get(list_stations))
        .route("/api/tickets", get(list_tickets).post(purchase_ticket))
        .route("/api/quote", get(quote_trip))
        .route("/api/network", get(network_map))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with stations, purchase form and ticket history.
async fn index_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let network = state.metro.network();
    let template = IndexTemplate {
        stations: StationView::all(network),
        tickets: state
            .metro
            .list_tickets()
            .iter()
            .map(|t| TicketView::from_ticket(t, network))
            .collect(),
        currency: state.currency.to_string(),
    };
    render(&template)
}

/// Purchase from the HTML form; answers with a receipt or error page.
async fn purchase_form(
    State(state): State<AppState>,
    Form(req): Form<TripRequest>,
) -> Response {
    let result = parse_trip(&req).and_then(|(source, destination)| {
        state
            .metro
            .purchase(&source, &destination)
            .map_err(AppError::from)
    });

    match result {
        Ok(receipt) => {
            let template =
                ReceiptTemplate::from_receipt(&receipt, state.metro.network(), &state.currency);
            match render(&template) {
                Ok(html) => html.into_response(),
                Err(err) => err.into_response(),
            }
        }
        Err(err) => {
            let (status, message) = err.status_and_message();
            warn!(%status, %message, "Purchase rejected");
            let title = match &err {
                AppError::BadRequest { .. } => "Invalid station ID",
                AppError::NotFound { .. } => "Unknown station",
                AppError::NoRoute { .. } => "No route found",
                AppError::Internal { .. } => "Something went wrong",
            };
            match render(&ErrorTemplate {
                title: title.to_string(),
                message,
            }) {
                Ok(html) => (status, html).into_response(),
                Err(err) => err.into_response(),
            }
        }
    }
}

/// List all stations.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let network = state.metro.network();
    let stations = state
        .metro
        .list_stations()
        .iter()
        .map(|s| StationResult::from_station(s, network))
        .collect();
    Json(StationListResponse { stations })
}

/// List issued tickets in issuance order.
async fn list_tickets(State(state): State<AppState>) -> Json<TicketListResponse> {
    let network = state.metro.network();
    let tickets = state
        .metro
        .list_tickets()
        .iter()
        .map(|t| TicketResult::from_ticket(t, network))
        .collect();
    Json(TicketListResponse { tickets })
}

/// Buy a ticket.
async fn purchase_ticket(
    State(state): State<AppState>,
    Json(req): Json<TripRequest>,
) -> Result<Json<PurchaseResponse>, AppError> {
    let (source, destination) = parse_trip(&req)?;

    match state.metro.purchase(&source, &destination) {
        Ok(receipt) => Ok(Json(PurchaseResponse::Issued {
            ticket: TicketResult::from_ticket(&receipt.ticket, state.metro.network()),
            route: route_result(&receipt.itinerary),
            transfers: receipt.itinerary.transfers(),
        })),
        Err(PurchaseError::NoPath { from, to }) => Ok(Json(PurchaseResponse::NoPath {
            source: from.to_string(),
            destination: to.to_string(),
        })),
        Err(e) => Err(e.into()),
    }
}

/// Price and route a trip without buying.
async fn quote_trip(
    State(state): State<AppState>,
    Query(req): Query<TripRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let (source, destination) = parse_trip(&req)?;

    match state.metro.quote(&source, &destination) {
        Ok(quote) => Ok(Json(QuoteResponse::Quoted {
            fare: quote.fare.units(),
            hops: quote.path.hops(),
            path: quote.path.stations().iter().map(|s| s.to_string()).collect(),
            transfers: quote.itinerary.transfers(),
            route: route_result(&quote.itinerary),
        })),
        Err(PurchaseError::NoPath { from, to }) => Ok(Json(QuoteResponse::NoPath {
            source: from.to_string(),
            destination: to.to_string(),
        })),
        Err(e) => Err(e.into()),
    }
}

/// Network description for map renderers.
async fn network_map(State(state): State<AppState>) -> Json<NetworkMap> {
    Json(state.metro.map())
}

/// Parse both station ids of a trip request.
fn parse_trip(req: &TripRequest) -> Result<(StationId, StationId), AppError> {
    let source = StationId::parse_normalized(&req.source).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;
    let destination =
        StationId::parse_normalized(&req.destination).map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;
    Ok((source, destination))
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    NoRoute { message: String },
    Internal { message: String },
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::NoRoute { message } => (StatusCode::OK, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        }
    }
}

impl From<PurchaseError> for AppError {
    fn from(e: PurchaseError) -> Self {
        match e {
            PurchaseError::UnknownStation(_) => AppError::NotFound {
                message: e.to_string(),
            },
            PurchaseError::NoPath { .. } => AppError::NoRoute {
                message: e.to_string(),
            },
            PurchaseError::InconsistentPath { .. }
            | PurchaseError::FareOverflow { .. }
            | PurchaseError::Network(_) => {
                AppError::Internal {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        warn!(%status, %message, "Request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
