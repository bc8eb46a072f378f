//! Request handlers.
//!
//! Each handler parses its input, makes at most a couple of store calls on the
//! blocking pool and picks a page. Store and render failures propagate as
//! [`AppError`].

use crate::{AppState, error::AppError};
use axum::{
    Form,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use minijinja::context;
use petstore_model::{AdoptOutcome, PetForm, PetId, PetListing, messages};
use tracing::{debug, info};

type PageResult = Result<Html<String>, AppError>;

/// A 302 redirect, which is what browsers expect after a form post here.
fn found(location: String) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}

/// Path segments that are not a valid id name no pet.
fn parse_id(raw: &str) -> Option<PetId> {
    let id = PetId::parse(raw).ok();
    if id.is_none() {
        debug!("Ignoring malformed pet id {:?}", raw);
    }
    id
}

pub async fn home(State(state): State<AppState>) -> PageResult {
    Ok(state.views.render("index.html", context! {})?)
}

pub async fn show_pets(State(state): State<AppState>) -> PageResult {
    let page = match state.with_store(|store| store.listing()).await? {
        PetListing::Available(pets) => state.views.render("pets.html", context! { pets => pets })?,
        PetListing::NoneAvailable => state
            .views
            .render("pets.html", context! { message => messages::NO_PETS_AVAILABLE })?,
    };
    Ok(page)
}

pub async fn add_pet_form(State(state): State<AppState>) -> PageResult {
    Ok(state.views.render("add_pets.html", context! {})?)
}

pub async fn add_pet(State(state): State<AppState>, Form(form): Form<PetForm>) -> Result<Response, AppError> {
    let new_pet = match form.validate() {
        Ok(new_pet) => new_pet,
        Err(e) => {
            info!("Rejected pet with age {:?}", e.input);
            let page = state.views.render("add_pets.html", context! { error => e.to_string() })?;
            return Ok(page.into_response());
        }
    };
    let pet = state.with_store(move |store| store.save(&new_pet)).await?;
    info!("Added pet {} ({})", pet.id, pet.name);
    Ok(found("/pets".to_string()))
}

pub async fn view_pet(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let pet = match parse_id(&id) {
        Some(id) => state.with_store(move |store| store.get_by_id(&id)).await?,
        None => None,
    };
    Ok(state.views.render("adopt.html", context! { pet => pet })?)
}

pub async fn adopt_pet(State(state): State<AppState>, Path(id): Path<String>) -> PageResult {
    let outcome = match parse_id(&id) {
        Some(id) => state.with_store(move |store| store.adopt(&id)).await?,
        None => AdoptOutcome::NotFound,
    };
    match &outcome {
        AdoptOutcome::Adopted(pet) => info!("Pet {} adopted", pet.id),
        AdoptOutcome::AlreadyAdopted(pet) => info!("Pet {} was already adopted", pet.id),
        AdoptOutcome::NotFound => info!("Adoption requested for unknown pet {}", id),
    }
    let message = outcome.message();
    let pet = outcome.pet();
    Ok(state.views.render("adopt.html", context! { message => message, pet => pet })?)
}

pub async fn delete_pet(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, AppError> {
    let pet_id = parse_id(&id);
    let (removed, remaining) = state
        .with_store(move |store| {
            let removed = match pet_id {
                Some(pet_id) => store.delete(&pet_id)?,
                None => 0,
            };
            Ok((removed, store.count()?))
        })
        .await?;
    if removed > 0 {
        info!("Pet {} deleted, {} remaining", id, remaining);
    } else {
        debug!("No pet {} to delete, {} remaining", id, remaining);
    }
    if remaining == 0 {
        return Ok(found(format!(
            "/pets?message={}",
            urlencoding::encode(messages::NO_PETS_AVAILABLE)
        )));
    }
    Ok(found("/pets".to_string()))
}
