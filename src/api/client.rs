// ABOUTME: Recipe REST client trait and its reqwest implementation
// ABOUTME: CRUD, search, and health calls against a configurable base URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use super::errors::ApiError;
use super::http_client::build_client;
use super::types::{HealthStatus, SearchRequest, SearchResponse};
use crate::config::ClientConfig;
use async_trait::async_trait;
use kitchen_core::models::Recipe;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Operations the front ends need from the recipe backend
///
/// Any non-2xx answer is an [`ApiError::Status`].
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `GET /recipes`
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError>;

    /// `GET /recipes/{id}`
    async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError>;

    /// `POST /recipes/search`; callers never send an empty selection
    async fn search_recipes(&self, items: &[String]) -> Result<Vec<Recipe>, ApiError>;

    /// `POST /recipes`
    async fn create_recipe(&self, recipe: &Recipe) -> Result<(), ApiError>;

    /// `PUT /recipes/{id}`
    async fn update_recipe(&self, id: &str, recipe: &Recipe) -> Result<(), ApiError>;

    /// `DELETE /recipes/{id}`
    async fn delete_recipe(&self, id: &str) -> Result<(), ApiError>;

    /// `GET /health`
    async fn health(&self) -> Result<HealthStatus, ApiError>;
}

/// [`RecipeApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
}

impl HttpRecipeApi {
    /// Create a client for the configured base URL
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.api_base.trim_end_matches('/').to_owned(),
        })
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/recipes", self.base_url)
    }

    fn recipe_url(&self, id: &str) -> String {
        format!("{}/recipes/{}", self.base_url, urlencoding::encode(id))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!(%method, url, "Sending recipe API request");
        self.client.request(method, url)
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "Recipe API responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let url = self.collection_url();
        let response = Self::send(self.request(Method::GET, &url)).await?;
        Self::decode(response).await
    }

    async fn get_recipe(&self, id: &str) -> Result<Recipe, ApiError> {
        let url = self.recipe_url(id);
        let response = Self::send(self.request(Method::GET, &url)).await?;
        Self::decode(response).await
    }

    async fn search_recipes(&self, items: &[String]) -> Result<Vec<Recipe>, ApiError> {
        let url = format!("{}/search", self.collection_url());
        let builder = self
            .request(Method::POST, &url)
            .json(&SearchRequest { items });
        let response = Self::send(builder).await?;
        let body: SearchResponse = Self::decode(response).await?;
        Ok(body.recipes)
    }

    async fn create_recipe(&self, recipe: &Recipe) -> Result<(), ApiError> {
        let url = self.collection_url();
        Self::send(self.request(Method::POST, &url).json(recipe)).await?;
        Ok(())
    }

    async fn update_recipe(&self, id: &str, recipe: &Recipe) -> Result<(), ApiError> {
        let url = self.recipe_url(id);
        Self::send(self.request(Method::PUT, &url).json(recipe)).await?;
        Ok(())
    }

    async fn delete_recipe(&self, id: &str) -> Result<(), ApiError> {
        let url = self.recipe_url(id);
        Self::send(self.request(Method::DELETE, &url)).await?;
        Ok(())
    }

    async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = format!("{}/health", self.base_url);
        let response = Self::send(self.request(Method::GET, &url)).await?;
        Self::decode(response).await
    }
}
