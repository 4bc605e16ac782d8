pub mod capacity;
pub mod centers;
pub mod health;

use actix_web::web;

// the health scope is registered first so /{num}/{plz} cannot swallow it
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").configure(health::init))
        .configure(centers::init)
        .configure(capacity::init);
}
