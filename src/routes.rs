use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{AddForm, EditForm, EditFormErrors},
    templates,
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/add", get(add_form).post(add_submit))
        .route("/find", get(find))
        .route("/edit", get(edit_form).post(edit_submit))
        .route("/delete", get(delete))
        .with_state(state)
}

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_ranked().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(None))
}

pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Html<String>> {
    let title = form.title.trim();
    if title.is_empty() {
        return Ok(Html(templates::add_page(Some("Movie title is required."))));
    }

    let candidates = state.tmdb.search_movies(title).await?;
    Ok(Html(templates::select_page(title, &candidates)))
}

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    id: Option<i32>,
}

pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(q): Query<FindQuery>,
) -> AppResult<Response> {
    // No candidate picked: send the user back to the add form.
    let Some(catalog_id) = q.id else {
        return Ok(Redirect::to("/add").into_response());
    };

    let details = state.tmdb.movie_details(catalog_id).await?;
    let movie = state.store.insert(&details).await?;
    tracing::info!(id = movie.id, title = %movie.title, "added movie");

    Ok(Redirect::to(&format!("/edit?id={}", movie.id)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    id: i32,
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(q.id).await?.ok_or(AppError::NotFound)?;
    Ok(Html(templates::edit_page(&movie, EditFormErrors::default())))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let movie = state.store.get(q.id).await?.ok_or(AppError::NotFound)?;

    let rating = form.rating.trim();
    let review = form.review.trim();

    let errors = EditFormErrors {
        rating: rating.is_empty().then_some("This field is required."),
        review: review.is_empty().then_some("This field is required."),
    };
    if errors.any() {
        return Ok(Html(templates::edit_page(&movie, errors)).into_response());
    }

    let rating: f64 = rating
        .parse()
        .map_err(|_| AppError::Conversion(format!("rating {rating:?} is not a number")))?;

    state.store.set_rating_review(movie.id, rating, review).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<IdQuery>,
) -> AppResult<Redirect> {
    if !state.store.delete(q.id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use migration::{Migrator, MigratorTrait};
    use sea_orm::Database;
    use tower::ServiceExt;

    use super::*;
    use crate::{models::MovieDetails, store::MovieStore, tmdb::TmdbClient};

    async fn test_state() -> Arc<AppState> {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let tmdb = TmdbClient::new(
            reqwest::Client::new(),
            "test-token".to_string(),
            "http://127.0.0.1:9".to_string(),
            "http://127.0.0.1:9/img".to_string(),
        );
        Arc::new(AppState { store: MovieStore::new(db), tmdb: Arc::new(tmdb) })
    }

    async fn seed(state: &AppState, title: &str) -> i32 {
        let details = MovieDetails {
            title: title.to_string(),
            year: 2010,
            description: "A movie.".to_string(),
            img_url: "/poster.jpg".to_string(),
        };
        state.store.insert(&details).await.unwrap().id
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn form_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn index_renders_empty_list() {
        let state = test_state().await;
        let response = router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("My Top Movies"));
    }

    #[tokio::test]
    async fn index_shows_seeded_movie_with_ranking() {
        let state = test_state().await;
        let id = seed(&state, "Inception").await;
        state.store.set_rating_review(id, 9.5, "Great").await.unwrap();

        let response = router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Inception"));
        assert!(body.contains("9.5"));
        assert!(body.contains("#1"));
    }

    #[tokio::test]
    async fn add_get_renders_the_form() {
        let state = test_state().await;
        let response = router(state)
            .oneshot(Request::builder().uri("/add").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Movie Title"));
    }

    #[tokio::test]
    async fn add_post_with_blank_title_rerenders_with_error() {
        let state = test_state().await;
        let response = router(state)
            .oneshot(form_post("/add", "title=+"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Movie title is required."));
    }

    #[tokio::test]
    async fn find_without_id_redirects_to_add() {
        let state = test_state().await;
        let response = router(state)
            .oneshot(Request::builder().uri("/find").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/add");
    }

    #[tokio::test]
    async fn edit_get_unknown_id_is_not_found() {
        let state = test_state().await;
        let response = router(state)
            .oneshot(Request::builder().uri("/edit?id=999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn edit_post_persists_and_redirects_home() {
        let state = test_state().await;
        let id = seed(&state, "Inception").await;

        let response = router(state.clone())
            .oneshot(form_post(&format!("/edit?id={id}"), "rating=9.5&review=Great"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let movie = state.store.get(id).await.unwrap().unwrap();
        assert_eq!(movie.rating, Some(9.5));
        assert_eq!(movie.review.as_deref(), Some("Great"));
    }

    #[tokio::test]
    async fn edit_post_with_blank_fields_rerenders_with_errors() {
        let state = test_state().await;
        let id = seed(&state, "Inception").await;

        let response = router(state.clone())
            .oneshot(form_post(&format!("/edit?id={id}"), "rating=&review="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("This field is required."));

        let movie = state.store.get(id).await.unwrap().unwrap();
        assert!(movie.rating.is_none());
    }

    #[tokio::test]
    async fn edit_post_with_non_numeric_rating_fails() {
        let state = test_state().await;
        let id = seed(&state, "Inception").await;

        let response = router(state)
            .oneshot(form_post(&format!("/edit?id={id}"), "rating=great&review=Great"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn delete_then_edit_is_not_found() {
        let state = test_state().await;
        let id = seed(&state, "Inception").await;

        let response = router(state.clone())
            .oneshot(
                Request::builder().uri(format!("/delete?id={id}")).body(Body::empty()).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let response = router(state.clone())
            .oneshot(Request::builder().uri(format!("/edit?id={id}")).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = router(state)
            .oneshot(
                Request::builder().uri(format!("/delete?id={id}")).body(Body::empty()).unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
