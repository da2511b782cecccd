//! HTML handlers for departments. Departments cannot be renamed.

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
    db::{handlers::Departments, models::departments::DepartmentCreateDBRequest},
    errors::{Error, PageError, ResultExt},
    types::DepartmentId,
    views,
};

#[instrument(skip_all)]
pub async fn list_departments(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to retrieve departments";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let departments = Departments::new(&mut conn).list().await.or_page(MESSAGE)?;

    let html = views::render("departments/index.html", context! { departments }).or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip_all)]
pub async fn create_department_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to load department creation form";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let departments = Departments::new(&mut conn).list().await.or_page(MESSAGE)?;

    let html = views::render("departments/add.html", context! { departments }).or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip_all)]
pub async fn create_department(
    State(state): State<AppState>,
    form: Result<Form<NameForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to create department";

    let Form(form) = form.or_page(MESSAGE)?;
    let form = form.validate().or_page(MESSAGE)?;

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let department = Departments::new(&mut conn)
        .create(&DepartmentCreateDBRequest { name: form.name })
        .await
        .or_page(MESSAGE)?;

    info!(department_id = department.department_id, "Created department");
    Ok(Redirect::to("/departments"))
}

#[instrument(skip(state))]
pub async fn delete_department_form(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to process delete. Contact admin or try again";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let department = Departments::new(&mut conn)
        .get_by_id(id)
        .await
        .or_page(MESSAGE)?
        .ok_or_else(|| Error::not_found("Department", id))
        .or_page(MESSAGE)?;

    let html = views::render("departments/delete.html", context! { department }).or_page(MESSAGE)?;
    Ok(Html(html))
}

/// Delete a department. Refused with a conflict while employees still belong to it.
#[instrument(skip(state))]
pub async fn delete_department(State(state): State<AppState>, Path(id): Path<DepartmentId>) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to process delete. Contact admin or try again";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    if !Departments::new(&mut conn).delete(id).await.or_page(MESSAGE)? {
        return Err(PageError {
            message: MESSAGE,
            source: Error::not_found("Department", id),
        });
    }

    info!(department_id = id, "Deleted department");
    Ok(Redirect::to("/departments"))
}
