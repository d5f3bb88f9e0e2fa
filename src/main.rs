use std::env;
use std::time::Duration;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use env_logger::Env;
use log::info;

use newsweb::apis::newsapi::NewsClient;
use newsweb::aps::search::{index, search};
use newsweb::helpers::templates::load_templates;

const PAGE_SIZE: u32 = 20;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Read variables from environment
    let port = env::var("PORT").unwrap_or_else(|_| "3000".into());
    let api_key = env::var("NEWS_API_KEY").context("Env: NEWS_API_KEY must be set")?;

    let http = reqwest::Client::builder()
        .user_agent("newsweb")
        .timeout(Duration::new(10, 0))
        .build()?;
    let newsapi = web::Data::new(NewsClient::new(http, &api_key, PAGE_SIZE));

    let templates = web::Data::new(load_templates()?);

    let addr = format!("0.0.0.0:{port}");
    info!("listening on {addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(newsapi.clone())
            .app_data(templates.clone())
            .service(Files::new("/assets", "assets"))
            .service(search)
            .service(index)
    })
    .bind(&addr)?
    .run()
    .await
    .map_err(Into::into)
}
