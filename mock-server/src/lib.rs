//! In-memory stand-in for the public seed API (jsonplaceholder-shaped).
//!
//! Serves a fixed todo seed read-only and a mutable user collection:
//! `GET /todos`, `GET/POST /users`, `PUT/DELETE /users/{id}`. Users live in
//! a `HashMap` behind an `RwLock`; ids are assigned sequentially on create.
//! Used by core's integration tests and runnable as a binary for manual
//! poking.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Create/update payload: a user record without the server-owned `id`.
#[derive(Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug)]
pub struct UserStore {
    users: HashMap<i64, User>,
    next_id: i64,
}

pub type Db = Arc<RwLock<UserStore>>;

/// First few records of the public seed data, verbatim.
fn seed_todos() -> Vec<Todo> {
    let titles = [
        "delectus aut autem",
        "quis ut nam facilis et officia qui",
        "fugiat veniam minus",
        "et porro tempora",
    ];
    titles
        .iter()
        .enumerate()
        .map(|(i, title)| Todo {
            user_id: 1,
            id: i as i64 + 1,
            title: (*title).to_string(),
            completed: i == 3,
        })
        .collect()
}

fn seed_users() -> Vec<User> {
    [
        (1, "Leanne Graham", "Bret", "Sincere@april.biz"),
        (2, "Ervin Howell", "Antonette", "Shanna@melissa.tv"),
        (3, "Clementine Bauch", "Samantha", "Nathan@yesenia.net"),
    ]
    .into_iter()
    .map(|(id, name, username, email)| User {
        id,
        name: name.to_string(),
        username: username.to_string(),
        email: email.to_string(),
    })
    .collect()
}

impl UserStore {
    fn seeded() -> Self {
        let users: HashMap<i64, User> = seed_users().into_iter().map(|u| (u.id, u)).collect();
        let next_id = users.keys().max().copied().unwrap_or(0) + 1;
        Self { users, next_id }
    }
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(UserStore::seeded()));
    Router::new()
        .route("/todos", get(list_todos))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", put(update_user).delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos() -> Json<Vec<Todo>> {
    Json(seed_todos())
}

async fn list_users(State(db): State<Db>) -> Json<Vec<User>> {
    let store = db.read().await;
    let mut users: Vec<User> = store.users.values().cloned().collect();
    users.sort_by_key(|u| u.id);
    Json(users)
}

async fn create_user(
    State(db): State<Db>,
    Json(input): Json<UserPayload>,
) -> (StatusCode, Json<User>) {
    let mut store = db.write().await;
    let user = User {
        id: store.next_id,
        name: input.name,
        username: input.username,
        email: input.email,
    };
    store.next_id += 1;
    store.users.insert(user.id, user.clone());
    (StatusCode::CREATED, Json(user))
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<UserPayload>,
) -> Result<Json<User>, StatusCode> {
    let mut store = db.write().await;
    let user = store.users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    user.name = input.name;
    user.username = input.username;
    user.email = input.email;
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .users
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}
