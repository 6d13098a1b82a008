//! Integration tests for the HTTP user repository against a local directory

use std::time::Duration;

use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::json;
use tk_core::repositories::UserRepository;
use tk_infra::repositories::HttpUserRepository;

async fn lookup(path: web::Path<String>) -> HttpResponse {
    match path.into_inner().as_str() {
        "username" => HttpResponse::Ok().json(json!({
            "id": "1",
            "username": "username",
            "password": "password"
        })),
        "broken" => HttpResponse::InternalServerError().finish(),
        "garbled" => HttpResponse::Ok().body("not json"),
        _ => HttpResponse::NotFound().finish(),
    }
}

/// Start a directory on an ephemeral port and return its base URL
fn start_directory() -> String {
    let server = HttpServer::new(|| App::new().route("/users/{username}", web::get().to(lookup)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{}", addr)
}

#[actix_web::test]
async fn test_known_user_is_found() {
    let repo = HttpUserRepository::new(&start_directory(), Duration::from_secs(5)).unwrap();

    let user = repo.find_by_username("username").await.unwrap().unwrap();

    assert_eq!(user.id, "1");
    assert!(user.password_matches("password"));
}

#[actix_web::test]
async fn test_unknown_user_is_none() {
    let repo = HttpUserRepository::new(&start_directory(), Duration::from_secs(5)).unwrap();

    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
}

#[actix_web::test]
async fn test_directory_failures_are_store_unavailable() {
    let repo = HttpUserRepository::new(&start_directory(), Duration::from_secs(5)).unwrap();

    assert!(repo.find_by_username("broken").await.unwrap_err().is_store_unavailable());
    assert!(repo.find_by_username("garbled").await.unwrap_err().is_store_unavailable());
}

#[actix_web::test]
async fn test_unreachable_directory_is_store_unavailable() {
    let repo = HttpUserRepository::new("http://127.0.0.1:1", Duration::from_secs(1)).unwrap();

    assert!(repo.find_by_username("username").await.unwrap_err().is_store_unavailable());
}
