//! HTML handlers for customers.
//!
//! A customer's employee links are written in the same transaction as the customer row, so a
//! failed link insert leaves neither change behind.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::{Form, FormRejection};
use minijinja::context;
use tracing::{info, instrument};

use crate::{
    AppState,
    api::models::customers::CustomerForm,
    db::handlers::{Companies, Customers, EmployeeCustomers, Employees, Repository},
    errors::{Error, PageError, ResultExt},
    types::CustomerId,
    views,
};

#[instrument(skip_all)]
pub async fn list_customers(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to retrieve customers";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let customers = Customers::new(&mut conn).list().await.or_page(MESSAGE)?;

    let html = views::render("customers/index.html", context! { customers }).or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip_all)]
pub async fn create_customer_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to load customer creation form";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let companies = Companies::new(&mut conn).list().await.or_page(MESSAGE)?;
    let employees = Employees::new(&mut conn).list_all().await.or_page(MESSAGE)?;

    let html = views::render(
        "customers/add.html",
        context! {
            companies,
            employees,
            linked_employee_ids => Vec::<u32>::new(),
        },
    )
    .or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip_all)]
pub async fn create_customer(
    State(state): State<AppState>,
    form: Result<Form<CustomerForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to create customer";

    let Form(form) = form.or_page(MESSAGE)?;
    let form = form.validate().or_page(MESSAGE)?;

    let mut tx = state.db.begin().await.or_page(MESSAGE)?;
    let customer = Customers::new(&mut tx).create(&form.db_request()).await.or_page(MESSAGE)?;
    EmployeeCustomers::new(&mut tx)
        .link_all(customer.customer_id, &form.employee_ids)
        .await
        .or_page(MESSAGE)?;
    tx.commit().await.or_page(MESSAGE)?;

    info!(customer_id = customer.customer_id, "Created customer");
    Ok(Redirect::to("/customers"))
}

#[instrument(skip(state))]
pub async fn edit_customer_form(State(state): State<AppState>, Path(id): Path<CustomerId>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to load edit form";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let customer = Customers::new(&mut conn)
        .get_by_id(id)
        .await
        .or_page(MESSAGE)?
        .ok_or_else(|| Error::not_found("Customer", id))
        .or_page(MESSAGE)?;
    let companies = Companies::new(&mut conn).list().await.or_page(MESSAGE)?;
    let employees = Employees::new(&mut conn).list_all().await.or_page(MESSAGE)?;
    let linked_employee_ids = EmployeeCustomers::new(&mut conn)
        .employees_for_customer(id)
        .await
        .or_page(MESSAGE)?;

    let html = views::render(
        "customers/edit.html",
        context! {
            customer,
            companies,
            employees,
            linked_employee_ids,
        },
    )
    .or_page(MESSAGE)?;
    Ok(Html(html))
}

/// Overwrite the customer's fields and replace its employee links with the submitted set.
#[instrument(skip(state, form))]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
    form: Result<Form<CustomerForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to process update. Contact admin or try again";

    let Form(form) = form.or_page(MESSAGE)?;
    let form = form.validate().or_page(MESSAGE)?;

    let mut tx = state.db.begin().await.or_page(MESSAGE)?;
    Customers::new(&mut tx).update(id, &form.db_request()).await.or_page(MESSAGE)?;
    EmployeeCustomers::new(&mut tx)
        .replace_for_customer(id, &form.employee_ids)
        .await
        .or_page(MESSAGE)?;
    tx.commit().await.or_page(MESSAGE)?;

    info!(customer_id = id, employees = form.employee_ids.len(), "Updated customer");
    Ok(Redirect::to("/customers"))
}

#[instrument(skip(state))]
pub async fn delete_customer_form(State(state): State<AppState>, Path(id): Path<CustomerId>) -> Result<Html<String>, PageError> {
    const MESSAGE: &str = "Unable to process delete. Contact admin or try again";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    let customer = Customers::new(&mut conn)
        .get_by_id(id)
        .await
        .or_page(MESSAGE)?
        .ok_or_else(|| Error::not_found("Customer", id))
        .or_page(MESSAGE)?;

    let html = views::render("customers/delete.html", context! { customer }).or_page(MESSAGE)?;
    Ok(Html(html))
}

#[instrument(skip(state))]
pub async fn delete_customer(State(state): State<AppState>, Path(id): Path<CustomerId>) -> Result<Redirect, PageError> {
    const MESSAGE: &str = "Unable to process delete. Contact admin or try again";

    let mut conn = state.db.acquire().await.or_page(MESSAGE)?;
    if !Customers::new(&mut conn).delete(id).await.or_page(MESSAGE)? {
        return Err(PageError {
            message: MESSAGE,
            source: Error::not_found("Customer", id),
        });
    }

    info!(customer_id = id, "Deleted customer");
    Ok(Redirect::to("/customers"))
}
