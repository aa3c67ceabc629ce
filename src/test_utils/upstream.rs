//! A local stand-in for the upstream dataset server.

use std::{
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_test::TestServer;
use tokio::{net::TcpListener, task::JoinHandle};

use crate::{AppState, build_router, transaction::Transaction};

const DATASET_PATH: &str = "/product_transaction.json";

/// Six records: four sold in March (across two years), one in April and one
/// in July.
pub(crate) fn sample_dataset() -> Vec<Transaction> {
    let record = |id, title: &str, price, sold, category: &str, date_of_sale: &str| Transaction {
        id,
        title: title.to_owned(),
        description: format!("{title} description"),
        price,
        category: category.to_owned(),
        image: format!("https://example.com/img/{id}.jpg"),
        sold,
        date_of_sale: date_of_sale.to_owned(),
    };

    vec![
        record(
            1,
            "Mens Casual Slim Fit",
            15.99,
            true,
            "men's clothing",
            "2022-03-27T20:29:54+05:30",
        ),
        record(
            2,
            "Samsung 49-Inch Curved Gaming Monitor",
            999.99,
            false,
            "electronics",
            "2022-03-10T20:29:54+05:30",
        ),
        record(
            3,
            "John Hardy Chain Bracelet",
            695.0,
            true,
            "jewelery",
            "2022-03-15T20:29:54+05:30",
        ),
        record(
            4,
            "Rain Jacket Women Windbreaker",
            39.99,
            false,
            "women's clothing",
            "2022-04-05T20:29:54+05:30",
        ),
        record(
            5,
            "SanDisk SSD PLUS 1TB",
            109.0,
            true,
            "electronics",
            "2021-03-20T20:29:54+05:30",
        ),
        record(
            6,
            "White Gold Plated Princess",
            9.99,
            true,
            "jewelery",
            "2022-07-01T20:29:54+05:30",
        ),
    ]
}

#[derive(Clone)]
struct FixtureState {
    status: StatusCode,
    body: String,
    request_count: Arc<AtomicUsize>,
}

/// An HTTP server on a random local port that serves a fixed response at
/// the dataset path.
///
/// The server is stopped when the fixture is dropped.
pub(crate) struct FixtureUpstream {
    addr: SocketAddr,
    request_count: Arc<AtomicUsize>,
    task: JoinHandle<()>,
}

impl FixtureUpstream {
    /// Serve [sample_dataset] as JSON.
    pub(crate) async fn serving_dataset() -> Self {
        let body = serde_json::to_string(&sample_dataset()).expect("could not serialize dataset");

        Self::start(StatusCode::OK, body).await
    }

    /// Respond with `status` and an empty JSON list.
    pub(crate) async fn serving_status(status: u16) -> Self {
        let status = StatusCode::from_u16(status).expect("invalid status code");

        Self::start(status, "[]".to_owned()).await
    }

    /// Respond with 200 OK and `body`.
    pub(crate) async fn serving_body(body: &str) -> Self {
        Self::start(StatusCode::OK, body.to_owned()).await
    }

    /// A dataset URL on a local port that nothing is listening on.
    pub(crate) async fn unused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("could not bind fixture listener");
        let addr = listener.local_addr().expect("could not get fixture address");
        drop(listener);

        format!("http://{addr}{DATASET_PATH}")
    }

    async fn start(status: StatusCode, body: String) -> Self {
        let request_count = Arc::new(AtomicUsize::new(0));
        let state = FixtureState {
            status,
            body,
            request_count: request_count.clone(),
        };

        let router = Router::new()
            .route(DATASET_PATH, get(serve_fixture))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("could not bind fixture listener");
        let addr = listener.local_addr().expect("could not get fixture address");

        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("fixture upstream stopped unexpectedly");
        });

        Self {
            addr,
            request_count,
            task,
        }
    }

    /// The URL of the fixture dataset.
    pub(crate) fn url(&self) -> String {
        format!("http://{}{DATASET_PATH}", self.addr)
    }

    /// The number of requests the fixture has answered.
    pub(crate) fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }
}

impl Drop for FixtureUpstream {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve_fixture(State(state): State<FixtureState>) -> impl IntoResponse {
    state.request_count.fetch_add(1, Ordering::SeqCst);

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Get a test server for the app router backed by `fixture`.
pub(crate) fn test_server(fixture: &FixtureUpstream) -> TestServer {
    let state = AppState::new(fixture.url(), 3);

    TestServer::try_new(build_router(state)).expect("Could not create test server.")
}
