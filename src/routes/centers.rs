use crate::handlers::centers::centers_with_capacity;
use crate::models::region::Region;
use crate::upstream::UpstreamConfig;
use actix_web::{HttpResponse, Responder, get, web};

#[get("/")]
async fn centers(config: web::Data<UpstreamConfig>) -> impl Responder {
    match centers_with_capacity(Region::BadenWuerttemberg, config.endpoint.as_deref()).await {
        Ok(Some(centers)) => HttpResponse::Ok().json(centers),
        Ok(None) => HttpResponse::Ok().json(serde_json::json!({})),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(centers);
}

#[cfg(test)]
mod tests {
    use super::init;
    use crate::upstream::UpstreamConfig;
    use actix_web::{App, test, web};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> web::Data<UpstreamConfig> {
        web::Data::new(UpstreamConfig {
            endpoint: Some(format!("{}/", server.uri())),
        })
    }

    #[actix_web::test]
    async fn unknown_region_answers_an_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/assets/static/impfzentren.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "Bayern": [] })))
            .mount(&server)
            .await;

        let app =
            test::init_service(App::new().app_data(config_for(&server)).configure(init)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, serde_json::json!({}));
    }

    #[actix_web::test]
    async fn serves_the_aggregated_region() {
        let server = MockServer::start().await;
        let shard = format!("{}/", server.uri());
        Mock::given(method("GET"))
            .and(path("/assets/static/impfzentren.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Baden-Württemberg": [
                    { "Zentrumsname": "Testzentrum", "PLZ": "70174", "URL": shard }
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rest/suche/termincheck"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "termineVorhanden": true,
                "vorhandeneLeistungsmerkmale": { "L921": true }
            })))
            .mount(&server)
            .await;

        let app =
            test::init_service(App::new().app_data(config_for(&server)).configure(init)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            serde_json::json!([{
                "name": "Testzentrum",
                "postalCode": "70174",
                "city": "",
                "state": "",
                "url": shard,
                "address": "",
                "capacity": { "capacityFree": true, "metrics": { "L921": true } }
            }])
        );
    }

    #[actix_web::test]
    async fn listing_failure_surfaces_as_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/assets/static/impfzentren.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let app =
            test::init_service(App::new().app_data(config_for(&server)).configure(init)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_server_error());
    }
}
