//! Shared helpers for router tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use drinks_server::auth::{KeySource, StaticKeySource};
use drinks_server::db::{DrinkStore, MemoryDrinkStore};
use drinks_server::{AppState, TokenVerifier, router};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode, get_current_timestamp};
use serde_json::{Value, json};
use shared::models::{Ingredient, NewDrink, Recipe};
use tower::ServiceExt;

pub const JWKS: &str = include_str!("../fixtures/jwks.json");
pub const SIGNING_KEY: &[u8] = include_bytes!("../fixtures/signing_key.pem");
pub const KID: &str = "drinks-test-key";
pub const AUDIENCE: &str = "coffeeshop";
pub const ISSUER: &str = "https://drinks.test.auth0.com/";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryDrinkStore>,
}

impl TestApp {
    pub fn new(drinks: Vec<NewDrink>) -> Self {
        let keys = StaticKeySource::from_json(JWKS).expect("fixture JWKS parses");
        Self::with_keys(drinks, Arc::new(keys))
    }

    pub fn with_keys(drinks: Vec<NewDrink>, keys: Arc<dyn KeySource>) -> Self {
        let store = Arc::new(MemoryDrinkStore::with_drinks(drinks).expect("unique titles"));
        let verifier = TokenVerifier::new(keys, AUDIENCE, ISSUER);
        let state = AppState::with_parts(store.clone() as Arc<dyn DrinkStore>, verifier);
        Self {
            router: router(state),
            store,
        }
    }

    /// Send a request, returning status and JSON body (`Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send_request(request).await
    }

    pub async fn send_request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }
}

/// Token signed by the trusted test key with the given claim overrides
pub fn token_with(overrides: Value) -> String {
    let now = get_current_timestamp();
    let mut claims = json!({
        "iss": ISSUER,
        "sub": "auth0|test-user",
        "aud": AUDIENCE,
        "iat": now,
        "exp": now + 3600,
    });
    if let (Some(base), Value::Object(extra)) = (claims.as_object_mut(), overrides) {
        base.extend(extra);
    }

    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(KID.to_string());
    let key = EncodingKey::from_rsa_pem(SIGNING_KEY).expect("fixture key parses");
    encode(&header, &claims, &key).expect("token encodes")
}

pub fn token(permissions: &[&str]) -> String {
    token_with(json!({ "permissions": permissions }))
}

/// Barista: may read details
pub fn barista() -> String {
    token(&["get:drinks-detail"])
}

/// Manager: every permission
pub fn manager() -> String {
    token(&[
        "get:drinks-detail",
        "post:drinks",
        "patch:drinks",
        "delete:drinks",
    ])
}

pub fn ingredient(name: &str, color: &str, parts: u32) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        color: color.to_string(),
        parts,
    }
}

pub fn latte() -> NewDrink {
    NewDrink {
        title: "Latte".to_string(),
        recipe: Recipe::Many(vec![
            ingredient("espresso", "brown", 1),
            ingredient("milk", "white", 3),
        ]),
    }
}

pub fn water() -> NewDrink {
    NewDrink {
        title: "Water".to_string(),
        recipe: Recipe::Single(ingredient("water", "blue", 1)),
    }
}
