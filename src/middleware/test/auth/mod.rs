use axum::http::{header, HeaderMap};

use crate::service::token::TokenService;

mod require;

fn test_tokens() -> TokenService {
    TokenService::new("test-signing-key", 3600)
}

fn headers_for(tokens: &TokenService, user: &entity::user::Model) -> HeaderMap {
    let token = tokens.issue(user).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        format!("Bearer {}", token).parse().unwrap(),
    );
    headers
}
