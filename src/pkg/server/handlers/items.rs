use askama::Template;
use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::{
    pkg::{
        internal::{
            adaptors::items::spec::NewItem,
            forms::{ItemForm, UploadedFile},
        },
        server::{state::AppState, uispec::TestPage},
    },
    prelude::{AppError, Result},
};

pub const LISTING_PATH: &str = "/test/";

fn back_to_listing() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, LISTING_PATH)]).into_response()
}

pub async fn page(State(state): State<AppState>) -> Result<Html<String>> {
    let items = state.items.list().await?;
    tracing::debug!("rendering {} items", items.len());
    Ok(Html(TestPage::blank(items).render()?))
}

pub async fn create(State(state): State<AppState>, mut multipart: Multipart) -> Result<Response> {
    let mut description = String::new();
    let mut image = None;
    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "description" => {
                description = field.text().await?;
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field.bytes().await?;
                image = Some(UploadedFile { file_name, data });
            }
            _ => {
                let _ = field.bytes().await?;
            }
        }
    }

    match ItemForm::new(&description, image).clean().await? {
        Ok(valid) => {
            let reference = state
                .media
                .save(&valid.image.file_name, &valid.image.data)
                .await?;
            let item = state
                .items
                .insert(NewItem {
                    description: valid.description,
                    image: reference,
                })
                .await?;
            tracing::info!("created item {} with image {}", item.id, &item.image);
            Ok(back_to_listing())
        }
        Err(errors) => {
            tracing::debug!("item form rejected: {:?}", &errors);
            let page = TestPage {
                items: state.items.list().await?,
                description,
                errors,
            };
            Ok(Html(page.render()?).into_response())
        }
    }
}

/// Ids are plain decimal digits; anything else cannot name an item.
fn parse_id(raw: &str) -> Option<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Result<Response> {
    let not_found = || AppError::NotFound(format!("No item matches id {}.", raw_id));
    let id = parse_id(&raw_id).ok_or_else(not_found)?;
    let item = state.items.get_by_id(id).await?.ok_or_else(not_found)?;

    state.items.delete(item.id).await?;
    tracing::info!("deleted item {}, kept file {}", item.id, &item.image);
    Ok(back_to_listing())
}
