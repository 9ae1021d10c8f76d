use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::pagination::{PageOptions, SortDirection, SortField, DEFAULT_PAGE_SIZE};
use crate::modules::chefs::models::ChefRequest;
use crate::modules::chefs::services::chef_service::ChefService;

/// Paging parameters shared by the list and search endpoints
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
    pub sort_by: Option<String>,
    pub direction: Option<String>,
}

/// Query parameters for the username search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub term: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
    pub sort_by: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn page_options(
    page: u32,
    size: u32,
    sort_by: Option<&str>,
    direction: Option<&str>,
) -> Result<PageOptions, AppError> {
    let sort_by = match sort_by {
        Some(field) => field.parse::<SortField>()?,
        None => SortField::default(),
    };
    let direction = match direction {
        Some(dir) => dir.parse::<SortDirection>()?,
        None => SortDirection::default(),
    };

    PageOptions::new(page, size, sort_by, direction)
}

impl PageQuery {
    pub fn to_options(&self) -> Result<PageOptions, AppError> {
        page_options(
            self.page,
            self.size,
            self.sort_by.as_deref(),
            self.direction.as_deref(),
        )
    }
}

impl SearchQuery {
    pub fn to_options(&self) -> Result<PageOptions, AppError> {
        page_options(
            self.page,
            self.size,
            self.sort_by.as_deref(),
            self.direction.as_deref(),
        )
    }
}

/// List chefs
/// GET /chefs
pub async fn list_chefs(
    service: web::Data<Arc<ChefService>>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let options = query.to_options()?;
    let page = service.list_chefs(&options).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Search chefs by username
/// GET /chefs/search?term=
pub async fn search_chefs(
    service: web::Data<Arc<ChefService>>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let options = query.to_options()?;
    let page = service.search_chefs(&query.term, &options).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Get chef by ID
/// GET /chefs/{id}
pub async fn get_chef(
    service: web::Data<Arc<ChefService>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let chef = service.get_chef(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(chef))
}

/// Create a new chef
/// POST /chefs
pub async fn create_chef(
    service: web::Data<Arc<ChefService>>,
    request: web::Json<ChefRequest>,
) -> Result<HttpResponse, AppError> {
    let chef = service.create_chef(request.into_inner()).await?;

    Ok(HttpResponse::Created().json(chef))
}

/// Replace a chef
/// PUT /chefs/{id}
pub async fn update_chef(
    service: web::Data<Arc<ChefService>>,
    path: web::Path<i32>,
    request: web::Json<ChefRequest>,
) -> Result<HttpResponse, AppError> {
    let chef = service
        .update_chef(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(chef))
}

/// Delete a chef
/// DELETE /chefs/{id}
pub async fn delete_chef(
    service: web::Data<Arc<ChefService>>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service.delete_chef(path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Check chef credentials
/// POST /chefs/login
pub async fn login(
    service: web::Data<Arc<ChefService>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { username, password } = request.into_inner();

    match service.authenticate(&username, &password).await? {
        Some(chef) => Ok(HttpResponse::Ok().json(chef)),
        None => Err(AppError::unauthorized("Invalid username or password")),
    }
}

/// Configure chef routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/chefs")
            .route("", web::get().to(list_chefs))
            .route("", web::post().to(create_chef))
            .route("/search", web::get().to(search_chefs))
            .route("/login", web::post().to(login))
            .route("/{id}", web::get().to(get_chef))
            .route("/{id}", web::put().to(update_chef))
            .route("/{id}", web::delete().to(delete_chef)),
    );
}
