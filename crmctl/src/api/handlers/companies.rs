//! HTML handlers for companies, the parents of customers.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::{Form, FormRejection};
use minijinja::context;
use tracing::{info, instrument};

use crate::{
    AppState,
    api::models::named::NameForm,
    db::{handlers::Companies, models::companies::CompanyCreateDBRequest},
    errors::{Error, PageError, ResultExt},
    types::CompanyId,
    views,
};

#[instrument(skip_all)]
pub async fn list_companies(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to retrieve companies";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let companies = Companies::new(&mut conn).list().await.or_page(MESSAGE)?;

    let html = views::render("companies/index.html", context! { companies }).or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip_all)]
pub async fn create_company_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to load company creation form";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let companies = Companies::new(&mut conn).list().await.or_page(MESSAGE)?;

    let html = views::render("companies/add.html", context! { companies }).or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip_all)]
pub async fn create_company(
    State(state): State<AppState>,
    form: Result<Form<NameForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to create company";

    let Form(form) = form.or_page(MESSAGE)?;
    let form = form.validate().or_page(MESSAGE)?;

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let company = Companies::new(&mut conn)
        .create(&CompanyCreateDBRequest { name: form.name })
        .await
        .or_page(MESSAGE)?;

    info!(company_id = company.company_id, "Created company");
    Ok(Redirect::to("/companies"))
}

#[instrument(skip(state))]
pub async fn delete_company_form(
    State(state): State<AppState>,
    Path(id): Path<CompanyId>,
) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to process delete. Contact admin or try again";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let company = Companies::new(&mut conn)
        .get_by_id(id)
        .await
        .or_page(MESSAGE)?
        .ok_or_else(|| Error::not_found("Company", id))
        .or_page(MESSAGE)?;

    let html = views::render("companies/delete.html", context! { company }).or_page(MESSAGE)?;
    Ok(Html(html))
}

/// Delete a company. Refused with a conflict while customers still belong to it.
#[instrument(skip(state))]
pub async fn delete_company(State(state): State<AppState>, Path(id): Path<CompanyId>) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to process delete. Contact admin or try again";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    if !Companies::new(&mut conn).delete(id).await.or_page(MESSAGE)? {
        return Err(PageError {
            message: MESSAGE,
            source: Error::not_found("Company", id),
        });
    }

    info!(company_id = id, "Deleted company");
    Ok(Redirect::to("/companies"))
}
