use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{MovieCandidate, MovieDetails},
};

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
    image_base_url: String,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        access_token: String,
        base_url: String,
        image_base_url: String,
    ) -> Self {
        // Warn once on app load; requests will fail authentication upstream
        if access_token.trim().is_empty() {
            tracing::warn!("no TMDB_ACCESS_TOKEN provided, catalog requests will be rejected");
        }
        Self { client, access_token, base_url, image_base_url }
    }

    pub async fn search_movies(&self, title: &str) -> AppResult<Vec<MovieCandidate>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("query", title),
                ("include_adult", "false"),
                ("language", "en-US"),
                ("page", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp.results)
    }

    pub async fn movie_details(&self, tmdb_id: i32) -> AppResult<MovieDetails> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), tmdb_id);
        let resp: DetailsResponse = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&[("language", "en-US")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let img_url = format!(
            "{}{}",
            self.image_base_url.trim_end_matches('/'),
            resp.poster_path.unwrap_or_default()
        );

        Ok(MovieDetails {
            title: resp.title,
            year: parse_year(&resp.release_date)?,
            description: resp.overview,
            img_url,
        })
    }
}

fn parse_year(release_date: &str) -> AppResult<i32> {
    let segment = release_date.split('-').next().unwrap_or_default();
    segment.parse().map_err(|_| {
        AppError::Conversion(format!("release date {release_date:?} has no numeric year"))
    })
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<MovieCandidate>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    title: String,
    #[serde(default)]
    release_date: String,
    #[serde(default)]
    overview: String,
    poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_year_from_release_date() {
        assert_eq!(parse_year("2010-07-16").unwrap(), 2010);
    }

    #[test]
    fn empty_release_date_is_a_conversion_error() {
        assert!(matches!(parse_year(""), Err(AppError::Conversion(_))));
        assert!(matches!(parse_year("unknown"), Err(AppError::Conversion(_))));
    }

    #[test]
    fn deserializes_search_results() {
        let json = r#"{
            "page": 1,
            "results": [
                {"id": 27205, "title": "Inception", "release_date": "2010-07-16",
                 "poster_path": "/inception.jpg", "vote_average": 8.4},
                {"id": 64956, "title": "Inception: The Cobol Job", "poster_path": null}
            ],
            "total_pages": 1
        }"#;

        let resp: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.results.len(), 2);
        assert_eq!(resp.results[0].id, 27205);
        assert_eq!(resp.results[0].title, "Inception");
        assert_eq!(resp.results[0].release_date, "2010-07-16");
        assert_eq!(resp.results[1].release_date, "");
        assert!(resp.results[1].poster_path.is_none());
    }

    #[test]
    fn deserializes_movie_details() {
        let json = r#"{
            "id": 27205, "title": "Inception", "release_date": "2010-07-16",
            "overview": "A thief who steals corporate secrets.",
            "poster_path": "/inception.jpg"
        }"#;

        let resp: DetailsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.title, "Inception");
        assert_eq!(parse_year(&resp.release_date).unwrap(), 2010);
        assert_eq!(resp.overview, "A thief who steals corporate secrets.");
    }
}
