use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use minijinja::context;
use std::sync::Arc;

use crate::api::common::CategoryParams;
use crate::error::{AppError, QuoteError};
use crate::seed;
use crate::AppState;

/// Full page shell. No quote and no category are selected yet.
pub async fn home_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let page = state.views.render(
        "quote.html",
        context! {
            category => "",
            categories => seed::categories(),
        },
    )?;
    Ok(page)
}

/// htmx request for a fresh quote, category taken from the query string.
pub async fn new_quote(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryParams>,
) -> Result<Html<String>, AppError> {
    render_random_quote(&state, &params).await
}

/// Form submission from the quote page. The hidden category input may be
/// empty, in which case any quote will do.
pub async fn generate_quote(
    State(state): State<Arc<AppState>>,
    Form(params): Form<CategoryParams>,
) -> Result<Html<String>, AppError> {
    render_random_quote(&state, &params).await
}

/// Echo the chosen category back as the hidden input the quote form submits.
pub async fn set_category(
    State(state): State<Arc<AppState>>,
    Form(params): Form<CategoryParams>,
) -> Result<Html<String>, AppError> {
    if params.category.is_empty() {
        return Err(AppError::BadRequest("Invalid category"));
    }

    let fragment = state.views.render(
        "fragments/category_input.html",
        context! { category => params.category },
    )?;
    Ok(fragment)
}

async fn render_random_quote(
    state: &AppState,
    params: &CategoryParams,
) -> Result<Html<String>, AppError> {
    match state.db.random_quote(params.filter()).await {
        Ok(quote) => {
            let fragment = state.views.render(
                "fragments/quote.html",
                context! { quote => quote, category => &params.category },
            )?;
            Ok(fragment)
        }
        Err(QuoteError::NotFound { category }) => {
            tracing::info!("No quotes found for category '{}'", params.category);
            let fragment = state.views.render(
                "fragments/empty_state.html",
                context! { category => category },
            )?;
            Ok(fragment)
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!(
                "Error fetching quote for category '{}'",
                params.category
            ))
            .into()),
    }
}
