//! [Gemini](https://ai.google.dev/gemini-api/docs/maps-grounding) route resolver, grounded
//! in Google Maps.
//!
//! The model answers in free text, so the distance is asked for in a fixed tag and parsed out,
//! with a best-effort fallback on any «N km» figure.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::{
    api::{client, route_resolver::RouteResolver},
    core::route::RouteInfo,
    prelude::*,
    quantity::Kilometers,
};

const DURATION_UNAVAILABLE: &str = "Tiempo no disponible";

/// Fallback figures above this are assumed to be something else than the route length.
const MAX_FALLBACK_DISTANCE: f64 = 10_000.0;

static DISTANCE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[\[DISTANCIA_KM:([\d.]+)\]\]").unwrap());

static DISTANCE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([\d,.]+)\s*(?:km|kilómetros|kilometros)").unwrap());

static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+\s*(?:horas?|h)\s*(?:\d+\s*(?:minutos?|min))?)|(\d+\s*(?:minutos?|min))")
        .unwrap()
});

pub struct Api {
    client: Client,
    base_url: Url,
    api_key: String,
    model: String,
}

impl Api {
    pub fn try_new(api_key: String, model: String) -> Result<Self> {
        Ok(Self {
            client: client::try_new()?,
            base_url: Url::parse("https://generativelanguage.googleapis.com/v1beta/")?,
            api_key,
            model,
        })
    }

    fn prompt(origin: &str, destination: &str, intermediate: Option<&str>) -> String {
        let route = match intermediate {
            Some(intermediate) => {
                format!(r#"desde "{origin}" pasando por "{intermediate}" hasta "{destination}""#)
            }
            None => format!(r#"desde "{origin}" hasta "{destination}""#),
        };
        format!(
            "Calcula la ruta de conducción completa {route}.\n\
             \n\
             IMPORTANTE: Tu respuesta debe incluir el siguiente bloque exacto al final, donde X es \
             el número total de kilómetros de todo el recorrido:\n\
             \n\
             [[DISTANCIA_KM:X]]\n\
             \n\
             Reglas para X:\n\
             - Solo números y punto decimal.\n\
             - NO uses comas para miles (ejemplo incorrecto: 1,200).\n\
             - Ejemplo correcto: 1250.5\n\
             \n\
             Además, proporciona antes un breve resumen de la ruta mencionando los puntos clave."
        )
    }
}

#[async_trait]
impl RouteResolver for Api {
    #[instrument(skip_all, fields(origin = origin, destination = destination, intermediate = intermediate))]
    async fn resolve_route(
        &self,
        origin: &str,
        destination: &str,
        intermediate: Option<&str>,
    ) -> Result<RouteInfo> {
        info!("resolving…");
        let url = self.base_url.join(&format!("models/{}:generateContent", self.model))?;
        let prompt = Self::prompt(origin, destination, intermediate);
        let request = GenerateContentRequest {
            contents: [Content { parts: vec![Part { text: Some(prompt) }] }],
            tools: [Tool { google_maps: GoogleMaps {} }],
        };
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("failed to call")?
            .error_for_status()
            .context("request failed")?
            .json::<GenerateContentResponse>()
            .await
            .context("failed to deserialize the response")?;
        let route = response.into_route_info().context("the response has no candidates")?;
        info!(distance = %route.distance_km, duration = %route.duration, "resolved");
        Ok(route)
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: [Content; 1],
    tools: [Tool; 1],
}

#[derive(Serialize)]
struct Tool {
    #[serde(rename = "googleMaps")]
    google_maps: GoogleMaps,
}

#[derive(Serialize)]
struct GoogleMaps {}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn into_route_info(self) -> Option<RouteInfo> {
        let candidate = self.candidates.into_iter().next()?;
        let text = candidate
            .content
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect::<String>())
            .unwrap_or_default();
        let map = candidate
            .grounding_metadata
            .into_iter()
            .flat_map(|metadata| metadata.grounding_chunks)
            .filter_map(|chunk| chunk.maps)
            .find(|maps| maps.uri.is_some());
        let (map_url, source_title) = map.map(|maps| (maps.uri, maps.title)).unwrap_or_default();
        Some(RouteInfo {
            distance_km: parse_distance(&text),
            duration: parse_duration(&text),
            summary: text,
            map_url,
            source_title,
        })
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    maps: Option<MapsChunk>,
}

#[derive(Deserialize)]
struct MapsChunk {
    uri: Option<String>,
    title: Option<String>,
}

/// Total route length from the tag, or else the longest plausible «N km» mention, or zero.
fn parse_distance(text: &str) -> Kilometers {
    if let Some(captures) = DISTANCE_TAG.captures(text) {
        return captures[1].parse().map_or(Kilometers::ZERO, Kilometers);
    }
    warn!("no distance tag, falling back to the longest mention");
    DISTANCE_MENTION
        .captures_iter(text)
        .filter_map(|captures| captures[1].replace(',', "").parse::<f64>().ok())
        .filter(|distance| *distance < MAX_FALLBACK_DISTANCE)
        .map(Kilometers)
        .fold(Kilometers::ZERO, Ord::max)
}

fn parse_duration(text: &str) -> String {
    DURATION
        .find(text)
        .map_or_else(|| DURATION_UNAVAILABLE.to_owned(), |found| found.as_str().to_owned())
}
