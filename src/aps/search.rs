use std::collections::HashMap;

use actix_web::{get, http::header::ContentType, web, HttpResponse};
use log::{error, info};
use minijinja::{context, Environment, Value};
use serde_derive::Serialize;

use crate::apis::newsapi::{News, NewsClient};
use crate::helpers::templates::INDEX_TEMPLATE;

// Per request view model consumed by the index template
#[derive(Debug, Serialize)]
pub struct SearchView {
    pub query: String,
    pub next_page: u32,
    pub total_pages: u32,
    pub results: News,
}

pub fn total_pages(total_results: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }

    total_results.div_ceil(page_size)
}

#[get("/")]
pub async fn index(tpl: web::Data<Environment<'static>>) -> HttpResponse {
    render_page(&tpl, context! {})
}

#[get("/search")]
pub async fn search(
    newsapi: web::Data<NewsClient>,
    tpl: web::Data<Environment<'static>>,
    info: web::Query<HashMap<String, String>>,
) -> HttpResponse {
    let params = info.into_inner();
    let query = params.get("q").map_or("", String::as_str);
    let page = params.get("page").map_or("1", String::as_str);
    let page = if page.is_empty() { "1" } else { page };

    let page: u32 = match page.parse() {
        Ok(page) => page,
        Err(e) => return HttpResponse::InternalServerError().body(e.to_string()),
    };

    let results = match newsapi.fetch_everything(query, page).await {
        Ok(results) => results,
        Err(e) => {
            error!("news api call failed: {e}");
            return HttpResponse::InternalServerError().body(e.to_string());
        }
    };

    info!("query: {query}, page: {page}, results: {}", results.total_results);

    let search = SearchView {
        query: query.into(),
        next_page: page,
        total_pages: total_pages(results.total_results, newsapi.page_size()),
        results,
    };

    render_page(&tpl, context! { search })
}

// Render into a scratch string first; the response body is only
// written once the whole template evaluated cleanly
fn render_page(env: &Environment<'static>, ctx: Value) -> HttpResponse {
    let page = env.get_template(INDEX_TEMPLATE).and_then(|tpl| tpl.render(&ctx));

    match page {
        Ok(body) => HttpResponse::Ok().content_type(ContentType::html()).body(body),
        Err(e) => {
            error!("template render failed: {e}");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}
