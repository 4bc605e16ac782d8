mod handlers;
mod models;
mod routes;
mod upstream;

use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use upstream::UpstreamConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    HttpServer::new(|| {
        App::new()
            .app_data(web::Data::new(UpstreamConfig::from_env()))
            .configure(routes::init)
    })
    .bind(("0.0.0.0", 80))?
    .run()
    .await
}
