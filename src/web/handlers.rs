use actix_web::{http::header, http::StatusCode, web, HttpResponse};
use serde::Deserialize;

use super::view::render_order_page;
use super::AppState;
use crate::domain::order::{Order, OrderCommand};
use crate::error::AppError;
use crate::metrics::UpdateOutcome;

#[derive(Debug, Deserialize)]
pub struct NameForm {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CakeTypeForm {
    #[serde(default, rename = "cakeType")]
    pub cake_type: Option<String>,
}

/// `GET /`
pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let order = state.orders.current_order().await?;
    Ok(order_page(&state, StatusCode::OK, &order, None))
}

/// `POST /name`: renders the updated order inline.
pub async fn submit_name(
    state: web::Data<AppState>,
    form: web::Form<NameForm>,
) -> Result<HttpResponse, AppError> {
    let command = OrderCommand::SetName {
        name: form.into_inner().name.unwrap_or_default(),
    };

    match update(&state, command).await {
        Ok(order) => Ok(order_page(&state, StatusCode::OK, &order, None)),
        Err(AppError::Order(e)) => {
            let order = state.orders.current_order().await?;
            Ok(order_page(&state, StatusCode::BAD_REQUEST, &order, Some(&e.to_string())))
        }
        Err(e) => Err(e),
    }
}

/// `POST /cake-type`: redirects back to the index.
///
/// A body that is not form-encoded counts as an empty form.
pub async fn submit_cake_type(
    state: web::Data<AppState>,
    form: Option<web::Form<CakeTypeForm>>,
) -> Result<HttpResponse, AppError> {
    let cake_type = form.and_then(|form| form.into_inner().cake_type);
    let command = OrderCommand::SetCakeType {
        cake_type: cake_type.unwrap_or_default(),
    };

    redirect_after(update(&state, command).await)
}

/// `POST /fillings`: accepts repeated `fillings` keys, redirects back to the index.
///
/// A body that is not form-encoded counts as an empty selection.
pub async fn submit_fillings(
    state: web::Data<AppState>,
    form: Option<web::Form<Vec<(String, String)>>>,
) -> Result<HttpResponse, AppError> {
    let fillings = form
        .map(web::Form::into_inner)
        .unwrap_or_default()
        .into_iter()
        .filter(|(key, _)| key == "fillings" || key == "fillings[]")
        .map(|(_, value)| value)
        .collect();

    redirect_after(update(&state, OrderCommand::SetFillings { fillings }).await)
}

async fn update(state: &AppState, command: OrderCommand) -> Result<Order, AppError> {
    let field = command.field();
    let result = state.orders.handle(command).await;

    let outcome = match &result {
        Ok(_) => UpdateOutcome::Accepted,
        Err(AppError::Order(_)) => UpdateOutcome::Rejected,
        Err(AppError::Storage(_)) => UpdateOutcome::Failed,
    };
    state.metrics.record_order_update(field, outcome);

    result
}

/// A rejected redirecting update leaves the order as is and still redirects;
/// storage failures surface as 500.
fn redirect_after(result: Result<Order, AppError>) -> Result<HttpResponse, AppError> {
    match result {
        Ok(_) | Err(AppError::Order(_)) => Ok(HttpResponse::Found()
            .insert_header((header::LOCATION, "/"))
            .finish()),
        Err(e) => Err(e),
    }
}

fn order_page(state: &AppState, status: StatusCode, order: &Order, error: Option<&str>) -> HttpResponse {
    state.metrics.record_page_render(status.as_u16());

    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(render_order_page(order, error))
}
