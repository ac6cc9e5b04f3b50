// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides test logging, recipe fixtures, mock-backed clients, and recording seams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `recipe_kitchen`

use recipe_kitchen::api::{HttpRecipeApi, RecipeApi};
use recipe_kitchen::config::ClientConfig;
use recipe_kitchen::models::Recipe;
use recipe_kitchen::services::{Confirm, Notifier};
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use tracing::Level;
use wiremock::MockServer;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG raises the level when debugging a failing test
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Tomato, cheese, and dough
pub fn pizza() -> Recipe {
    Recipe::new("pizza", "pizza")
        .with_ingredient("tomato", "2", "")
        .with_ingredient("cheese", "200", "g")
        .with_ingredient("dough", "1", "ball")
        .with_step("1. Stretch the dough")
        .with_step("2. Add toppings")
        .with_step("3. Bake")
        .with_time("15 min", "30 min")
        .with_servings(4)
        .with_material("oven")
}

/// Lettuce and tomato
pub fn salad() -> Recipe {
    Recipe::new("salad", "salad")
        .with_type("side")
        .with_ingredient("lettuce", "1", "head")
        .with_ingredient("tomato", "1", "")
        .with_step("1. Chop and toss")
        .with_time("10 min", "10 min")
        .with_servings(2)
}

/// The backend's full list in these tests
pub fn recipe_list() -> Vec<Recipe> {
    vec![pizza(), salad()]
}

/// Owned ingredient ids
pub fn selection(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_owned()).collect()
}

/// Client configuration pointing at a mock backend under `/api`
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..ClientConfig::default()
    }
    .with_api_base(&format!("{}/api", server.uri()))
    .unwrap()
}

/// HTTP client pointing at a mock backend
pub fn api_for(server: &MockServer) -> Arc<dyn RecipeApi> {
    init_test_logging();
    Arc::new(HttpRecipeApi::new(&config_for(server)).unwrap())
}

/// Collects alerts instead of showing them
#[derive(Default)]
pub struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_owned());
    }
}

/// Fixed answer to every confirmation, counting the questions asked
pub struct FixedAnswer {
    accept: bool,
    asked: AtomicUsize,
}

impl FixedAnswer {
    pub const fn new(accept: bool) -> Self {
        Self {
            accept,
            asked: AtomicUsize::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.load(Ordering::SeqCst)
    }
}

impl Confirm for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.asked.fetch_add(1, Ordering::SeqCst);
        self.accept
    }
}
