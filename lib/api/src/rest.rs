use actix_web::{web, App, HttpServer, HttpResponse, Result as ActixResult};
use actix_cors::Cors;
use cinematch_core::{BrowseQuery, CatalogHandle, ItemId, ItemRecord, SortKey};
use cinematch_similarity::{RecommendResponse, Recommender};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// State shared by every worker
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogHandle,
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(catalog: CatalogHandle, recommender: Recommender) -> Self {
        Self { catalog, recommender }
    }
}

#[derive(Deserialize)]
struct ItemsQuery {
    genre: Option<String>,
    language: Option<String>,
    q: Option<String>,
    sort: Option<String>,
}

#[derive(Deserialize)]
struct RecommendQuery {
    limit: Option<usize>,
}

#[derive(Serialize)]
struct ItemsResponse<'a> {
    count: usize,
    result: Vec<&'a ItemRecord>,
}

#[derive(Serialize)]
struct FacetsResponse {
    genres: Vec<String>,
    languages: Vec<String>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: AppState, port: u16) -> std::io::Result<()> {
        info!("Serving {} catalog items", state.catalog.snapshot().len());
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .configure(RestApi::configure)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register all routes; expects `web::Data<AppState>` in app data
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .route("/facets", web::get().to(facets))
            .route("/items", web::get().to(list_items))
            .route("/items/{id}", web::get().to(get_item))
            .route("/items/{id}/recommendations", web::get().to(recommend_items));
    }
}

fn not_found(id: ItemId) -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": format!("Item not found: {}", id)
    }))
}

async fn health(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "items": state.catalog.snapshot().len()
    })))
}

async fn facets(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let catalog = state.catalog.snapshot();
    Ok(HttpResponse::Ok().json(FacetsResponse {
        genres: catalog.genres(),
        languages: catalog.languages(),
    }))
}

async fn list_items(
    state: web::Data<AppState>,
    query: web::Query<ItemsQuery>,
) -> ActixResult<HttpResponse> {
    let query = query.into_inner();
    let sort = match query.sort.as_deref().map(str::parse::<SortKey>).transpose() {
        Ok(sort) => sort.unwrap_or_default(),
        Err(e) => {
            return Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            })));
        }
    };

    let browse = BrowseQuery {
        genre: query.genre,
        language: query.language,
        search: query.q,
        sort,
    };

    let catalog = state.catalog.snapshot();
    let items = browse.apply(&catalog);
    debug!("Browse {:?} matched {} items", browse, items.len());

    Ok(HttpResponse::Ok().json(ItemsResponse {
        count: items.len(),
        result: items,
    }))
}

async fn get_item(
    state: web::Data<AppState>,
    path: web::Path<ItemId>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let catalog = state.catalog.snapshot();

    match catalog.get(id) {
        Some(item) => Ok(HttpResponse::Ok().json(item)),
        None => Ok(not_found(id)),
    }
}

async fn recommend_items(
    state: web::Data<AppState>,
    path: web::Path<ItemId>,
    query: web::Query<RecommendQuery>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let catalog = state.catalog.snapshot();

    let source = match catalog.resolve(id) {
        Ok(source) => source,
        Err(e) => {
            debug!("Recommendation source lookup failed: {}", e);
            return Ok(not_found(id));
        }
    };

    let limit = query.limit.unwrap_or_else(|| state.recommender.limit());
    let recs = state.recommender.recommend_with_limit(source, &*catalog, limit);
    debug!("Item {} produced {} recommendations", id, recs.len());

    Ok(HttpResponse::Ok().json(RecommendResponse::new(source, &recs, catalog.len())))
}
