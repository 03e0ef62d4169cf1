use actix_web::{get, post, web, HttpResponse};
use filetree_api_schema::jquery_file_tree::JqueryFileTreeRequest;

use crate::state::ApiState;

#[get("/jqueryFileTree")]
pub async fn jquery_file_tree_get(
    state: web::Data<ApiState>,
    req: web::Query<JqueryFileTreeRequest>,
) -> HttpResponse {
    list_dir(&state, &req)
}

#[post("/jqueryFileTree")]
pub async fn jquery_file_tree_post(
    state: web::Data<ApiState>,
    req: web::Form<JqueryFileTreeRequest>,
) -> HttpResponse {
    list_dir(&state, &req)
}

fn list_dir(state: &ApiState, req: &JqueryFileTreeRequest) -> HttpResponse {
    let Some(dir) = req.dir() else {
        log::warn!("rejecting request without dir");
        return HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body("missing required parameter: dir");
    };

    let html = state
        .renderer
        .render_with_options(dir, &req.listing_options());

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use tempfile::tempdir;

    use super::*;
    use crate::api::{configure, ServerConfig};

    const EMPTY: &str = r#"<ul class="jqueryFileTree" style="display: none;"></ul>"#;

    fn fixture() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        std::fs::write(dir.path().join(".env"), "SECRET=1").unwrap();
        dir
    }

    fn state(config: ServerConfig) -> web::Data<ApiState> {
        web::Data::new(ApiState::new(&config))
    }

    #[actix_web::test]
    async fn test_post_lists_directory() {
        let dir = fixture();
        let path = dir.path().to_str().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state(ServerConfig::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/jqueryFileTree")
            .set_form(JqueryFileTreeRequest::new(path))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );

        let body = test::read_body(resp).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert_eq!(
            body,
            format!(
                r#"<ul class="jqueryFileTree" style="display: none;"><li class="file ext_txt"><a rel="{path}/notes.txt">notes.txt</a></li><li class="directory collapsed"><a rel="{path}/sub/">sub</a></li></ul>"#
            )
        );
    }

    #[actix_web::test]
    async fn test_get_lists_directory() {
        let dir = fixture();
        let path = dir.path().to_str().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state(ServerConfig::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/jqueryFileTree?dir={}/&onlyFolders=true", path))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert_eq!(
            body,
            format!(
                r#"<ul class="jqueryFileTree" style="display: none;"><li class="directory collapsed"><a rel="{path}/sub/">sub</a></li></ul>"#
            )
        );
    }

    #[actix_web::test]
    async fn test_hidden_entries_follow_config() {
        let dir = fixture();
        let path = dir.path().to_str().unwrap();
        let config = ServerConfig {
            exclude_hidden: false,
            ..Default::default()
        };
        let app = test::init_service(App::new().app_data(state(config)).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/jqueryFileTree")
            .set_form(JqueryFileTreeRequest::new(path))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let body = std::str::from_utf8(&body).unwrap();
        assert!(body.contains(&format!(
            r#"<li class="file ext_env"><a rel="{path}/.env">.env</a></li>"#
        )));
    }

    #[actix_web::test]
    async fn test_missing_dir_is_bad_request() {
        let app = test::init_service(
            App::new()
                .app_data(state(ServerConfig::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/jqueryFileTree")
            .set_form(JqueryFileTreeRequest {
                only_files: Some("true".to_string()),
                ..Default::default()
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/jqueryFileTree").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/jqueryFileTree?dir=")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_unreadable_dir_is_empty_listing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let app = test::init_service(
            App::new()
                .app_data(state(ServerConfig::default()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/jqueryFileTree")
            .set_form(JqueryFileTreeRequest::new(missing.to_str().unwrap()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(body, EMPTY.as_bytes());
    }
}
