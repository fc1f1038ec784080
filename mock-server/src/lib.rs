use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Row {
    #[serde(rename = "mId")]
    pub id: i32,
    #[serde(rename = "mTitle")]
    pub title: String,
    #[serde(rename = "mMessage")]
    pub message: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct NewRow {
    #[serde(rename = "mTitle")]
    pub title: String,
    #[serde(rename = "mMessage")]
    pub message: String,
}

/// Response envelope shared by every route.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(rename = "mStatus")]
    pub status: String,
    #[serde(rename = "mMessage", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "mData", default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    fn ok(data: Option<Value>) -> Self {
        Self {
            status: "ok".to_string(),
            message: None,
            data,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
            data: None,
        }
    }
}

#[derive(Default)]
pub struct Store {
    next_id: i32,
    rows: BTreeMap<i32, Row>,
}

pub type Db = Arc<RwLock<Store>>;

type Reply = (StatusCode, Json<Envelope>);

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/messages", get(list_rows).post(create_row))
        .route("/messages/{id}", get(get_row).delete(delete_row))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Accept strict JSON or the single-quoted `{'mTitle':'..', 'mMessage':'..'}`
/// form, whose fields are taken verbatim up to the closing quote.
pub fn parse_new_row(body: &str) -> Option<NewRow> {
    if let Ok(row) = serde_json::from_str::<NewRow>(body) {
        return Some(row);
    }
    let inner = body.trim().strip_prefix("{'mTitle':'")?.strip_suffix("'}")?;
    let (title, message) = inner.split_once("', 'mMessage':'")?;
    Some(NewRow {
        title: title.to_string(),
        message: message.to_string(),
    })
}

fn to_value<T: Serialize>(value: &T) -> Option<Value> {
    serde_json::to_value(value).ok()
}

async fn list_rows(State(db): State<Db>) -> Reply {
    let store = db.read().await;
    let rows: Vec<&Row> = store.rows.values().collect();
    (StatusCode::OK, Json(Envelope::ok(to_value(&rows))))
}

async fn create_row(State(db): State<Db>, body: String) -> Reply {
    let Some(input) = parse_new_row(&body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(Envelope::error("malformed message body")),
        );
    };
    let mut store = db.write().await;
    store.next_id += 1;
    let row = Row {
        id: store.next_id,
        title: input.title,
        message: input.message,
    };
    let reply = Envelope::ok(to_value(&row));
    store.rows.insert(row.id, row);
    (StatusCode::CREATED, Json(reply))
}

async fn get_row(State(db): State<Db>, Path(id): Path<i32>) -> Reply {
    let store = db.read().await;
    match store.rows.get(&id) {
        Some(row) => (StatusCode::OK, Json(Envelope::ok(to_value(row)))),
        None => not_found(id),
    }
}

async fn delete_row(State(db): State<Db>, Path(id): Path<i32>) -> Reply {
    let mut store = db.write().await;
    match store.rows.remove(&id) {
        Some(_) => (StatusCode::OK, Json(Envelope::ok(None))),
        None => not_found(id),
    }
}

fn not_found(id: i32) -> Reply {
    (
        StatusCode::NOT_FOUND,
        Json(Envelope::error(format!("row {id} not found"))),
    )
}
