use crate::handlers::capacity::check_capacity;
use crate::models::centers::VaccinationCenter;
use actix_web::{HttpResponse, Responder, get, web};

#[get("/{num}/{plz}")]
async fn capacity(path: web::Path<(u16, String)>) -> impl Responder {
    let (num, plz) = path.into_inner();

    let center = VaccinationCenter::ad_hoc(num, plz);
    HttpResponse::Ok().json(check_capacity(&center).await)
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(capacity);
}
