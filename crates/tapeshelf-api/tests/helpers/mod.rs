//! Test helpers: build the router around a temporary upload directory and a
//! stub database.
//!
//! Run from workspace root: `cargo test -p tapeshelf-api`.

#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use std::path::PathBuf;
use std::sync::Arc;
use tapeshelf_api::setup::routes;
use tapeshelf_api::state::AppState;
use tapeshelf_api::CollaboratorRoutes;
use tapeshelf_core::Config;
use tapeshelf_db::{Database, DbError, DbResult};
use tapeshelf_storage::UploadStore;
use tempfile::TempDir;

/// Database double answering the connectivity check with a fixed outcome.
pub struct StubDatabase {
    outcome: Result<i64, String>,
}

impl StubDatabase {
    pub fn reachable() -> Self {
        Self { outcome: Ok(2) }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl Database for StubDatabase {
    async fn connectivity_check(&self) -> DbResult<i64> {
        match &self.outcome {
            Ok(result) => Ok(*result),
            Err(message) => Err(DbError::Sqlx(sqlx::Error::Protocol(message.clone()))),
        }
    }
}

/// Test application: server plus the temp directory it writes into.
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Names of the files currently in the upload directory.
    pub fn stored_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.upload_dir)
            .expect("Failed to read upload directory")
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}

/// Setup test app with a reachable stub database and no collaborator routes.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(
        Arc::new(StubDatabase::reachable()),
        CollaboratorRoutes::default(),
    )
    .await
}

pub async fn setup_test_app_with(
    database: Arc<dyn Database>,
    collaborators: CollaboratorRoutes,
) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let upload_dir = temp_dir.path().join("assets").join("images");

    let config = Config {
        upload_dir: upload_dir.clone(),
        ..Config::default()
    };

    let store = UploadStore::init(&config.upload_dir)
        .await
        .expect("Failed to create upload directory");

    let state = Arc::new(AppState::new(config.clone(), store, database));

    let app: Router = routes::setup_routes(&config, state, collaborators)
        .expect("Failed to setup routes");
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        upload_dir,
        _temp_dir: temp_dir,
    }
}
