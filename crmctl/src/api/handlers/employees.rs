//! HTML handlers for employees.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::{Form, FormRejection};
use minijinja::context;
use tracing::{info, instrument};

use crate::{
    AppState,
    api::models::employees::EmployeeForm,
    db::handlers::{Departments, EmployeeCustomers, Employees, Repository},
    errors::{Error, PageError, ResultExt},
    types::EmployeeId,
    views,
};

#[instrument(skip_all)]
pub async fn list_employees(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to retrieve employees";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let employees = Employees::new(&mut conn).list().await.or_page(MESSAGE)?;

    let html = views::render("employees/index.html", context! { employees }).or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip_all)]
pub async fn create_employee_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to load employee creation form";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let departments = Departments::new(&mut conn).list().await.or_page(MESSAGE)?;

    let html = views::render("employees/add.html", context! { departments }).or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip_all)]
pub async fn create_employee(
    State(state): State<AppState>,
    form: Result<Form<EmployeeForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to create employee";

    let Form(form) = form.or_page(MESSAGE)?;
    let form = form.validate().or_page(MESSAGE)?;

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let employee = Employees::new(&mut conn).create(&form.db_request()).await.or_page(MESSAGE)?;

    info!(employee_id = employee.employee_id, "Created employee");
    Ok(Redirect::to("/employees"))
}

/// Edit page. The employee's customers are listed read-only; links are managed from the
/// customer side.
#[instrument(skip(state))]
pub async fn edit_employee_form(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to load employee edit form";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let employee = Employees::new(&mut conn)
        .get_by_id(id)
        .await
        .or_page(MESSAGE)?
        .ok_or_else(|| Error::not_found("Employee", id))
        .or_page(MESSAGE)?;
    let departments = Departments::new(&mut conn).list().await.or_page(MESSAGE)?;
    let customers = EmployeeCustomers::new(&mut conn)
        .customers_for_employee(id)
        .await
        .or_page(MESSAGE)?;

    let html = views::render(
        "employees/edit.html",
        context! {
            employee,
            departments,
            customers,
        },
    )
    .or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip(state, form))]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    form: Result<Form<EmployeeForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to update employee";

    let Form(form) = form.or_page(MESSAGE)?;
    let form = form.validate().or_page(MESSAGE)?;

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    Employees::new(&mut conn).update(id, &form.db_request()).await.or_page(MESSAGE)?;

    info!(employee_id = id, "Updated employee");
    Ok(Redirect::to("/employees"))
}

#[instrument(skip(state))]
pub async fn delete_employee_form(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to process delete. Contact admin or try again";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let employee = Employees::new(&mut conn)
        .get_by_id(id)
        .await
        .or_page(MESSAGE)?
        .ok_or_else(|| Error::not_found("Employee", id))
        .or_page(MESSAGE)?;

    let html = views::render("employees/delete.html", context! { employee }).or_page(MESSAGE)?;
    Ok(Html(html))
}

/// Delete an employee. Its customer links are removed with it.
#[instrument(skip(state))]
pub async fn delete_employee(State(state): State<AppState>, Path(id): Path<EmployeeId>) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to process delete. Contact admin or try again";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    if !Employees::new(&mut conn).delete(id).await.or_page(MESSAGE)? {
        return Err(PageError {
            message: MESSAGE,
            source: Error::not_found("Employee", id),
        });
    }

    info!(employee_id = id, "Deleted employee");
    Ok(Redirect::to("/employees"))
}
