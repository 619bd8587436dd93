use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hero {
    pub id: u32,
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewHero {
    pub name: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub name: Option<String>,
}

// BTreeMap keeps list responses ordered by id.
pub type Db = Arc<RwLock<BTreeMap<u32, Hero>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/heroes", get(list_heroes).post(create_hero).put(update_hero))
        // the client addresses name searches as "/heroes/?name=<term>"
        .route("/heroes/", get(list_heroes))
        .route("/heroes/{id}", get(get_hero).delete(delete_hero))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_heroes(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    let matching = match params.name {
        Some(term) => {
            let term = term.to_lowercase();
            heroes
                .values()
                .filter(|hero| hero.name.to_lowercase().contains(&term))
                .cloned()
                .collect()
        }
        None => heroes.values().cloned().collect(),
    };
    Json(matching)
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<NewHero>,
) -> (StatusCode, Json<Hero>) {
    let mut heroes = db.write().await;
    let id = heroes.keys().next_back().map_or(1, |max| max + 1);
    let hero = Hero {
        id,
        name: input.name,
    };
    heroes.insert(id, hero.clone());
    (StatusCode::CREATED, Json(hero))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Hero>, StatusCode> {
    let heroes = db.read().await;
    heroes.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

// PUT is addressed to the collection; the id travels in the body.
async fn update_hero(
    State(db): State<Db>,
    Json(input): Json<Hero>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.write().await;
    let hero = heroes.get_mut(&input.id).ok_or(StatusCode::NOT_FOUND)?;
    *hero = input;
    Ok(Json(hero.clone()))
}

async fn delete_hero(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<Json<Hero>, StatusCode> {
    let mut heroes = db.write().await;
    heroes.remove(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}
