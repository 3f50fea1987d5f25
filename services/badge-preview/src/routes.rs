//! HTTP routes serving rendered badges, badge JSON, and a preview page

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use maud::{html, DOCTYPE};
use serde::Deserialize;
use status_badge::{Badge, Tone};

use crate::config::Config;

/// Shared router state
#[derive(Clone)]
pub struct PreviewState {
    pub config: Arc<Config>,
}

/// Query string of the badge endpoints; `status` is required
#[derive(Debug, Deserialize)]
pub struct BadgeQuery {
    pub status: String,
}

/// Build the preview axum router
pub fn build_router(config: Arc<Config>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/badge", get(badge_handler))
        .route("/api/badge", get(badge_json_handler))
        .route("/api/tones", get(tones_handler))
        .route("/health", get(health_handler))
        .with_state(PreviewState { config })
}

async fn index_handler(State(preview): State<PreviewState>) -> impl IntoResponse {
    let config = &preview.config;
    tracing::debug!(
        "Rendering preview page with {} samples",
        config.preview.samples.len()
    );

    let page = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (config.preview.title) }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="font-sans max-w-3xl mx-auto p-4 dark:bg-gray-900 dark:text-white" {
                h1 class="text-xl font-bold mb-4" { (config.preview.title) }
                table class="w-full text-left" {
                    thead {
                        tr {
                            th class="p-2" { "Status" }
                            th class="p-2" { "Tone" }
                            th class="p-2" { "Badge" }
                        }
                    }
                    tbody id="badge-body" {
                        @for status in &config.preview.samples {
                            @let badge = Badge::new(status.as_str());
                            tr {
                                td class="p-2" { code { (status) } }
                                td class="p-2" { (badge.tone().to_string()) }
                                td class="p-2" { (badge) }
                            }
                        }
                    }
                }
            }
        }
    };

    Html(page.into_string())
}

async fn badge_handler(Query(query): Query<BadgeQuery>) -> impl IntoResponse {
    tracing::debug!("Rendering badge for status {:?}", query.status);
    Html(status_badge::render(&query.status))
}

async fn badge_json_handler(Query(query): Query<BadgeQuery>) -> impl IntoResponse {
    tracing::debug!("Describing badge for status {:?}", query.status);
    axum::Json(Badge::new(query.status))
}

async fn tones_handler() -> impl IntoResponse {
    let tones: Vec<serde_json::Value> = Tone::ALL
        .iter()
        .map(|tone| {
            serde_json::json!({
                "tone": tone,
                "status": tone.status(),
                "light_classes": tone.light_classes(),
                "dark_classes": tone.dark_classes(),
                "classes": tone.classes(),
            })
        })
        .collect();

    axum::Json(tones)
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
