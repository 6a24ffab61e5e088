use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryOrder, Set,
};

use crate::{entities::movie, error::AppResult, models::MovieDetails};

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches all movies ordered ascending by rating (unrated first) and
    /// reassigns dense rankings: lowest rated gets 1, highest gets the count.
    /// Rankings are written back only when they changed, so viewing the list
    /// twice with no intervening edit is idempotent.
    pub async fn list_ranked(&self) -> AppResult<Vec<movie::Model>> {
        let mut movies = movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;

        for (i, m) in movies.iter_mut().enumerate() {
            let rank = i as i32 + 1;
            if m.ranking != Some(rank) {
                let mut active = m.clone().into_active_model();
                active.ranking = Set(Some(rank));
                *m = active.update(&self.db).await?;
            }
        }

        Ok(movies)
    }

    /// Inserts a freshly fetched catalog record. Ranking, rating and review
    /// all start unset; a duplicate title fails on the unique index.
    pub async fn insert(&self, details: &MovieDetails) -> AppResult<movie::Model> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(details.title.clone()),
            year: Set(details.year),
            description: Set(details.description.clone()),
            ranking: Set(None),
            rating: Set(None),
            review: Set(None),
            img_url: Set(details.img_url.clone()),
        };

        Ok(model.insert(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn set_rating_review(&self, id: i32, rating: f64, review: &str) -> AppResult<()> {
        let active = movie::ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(id),
            rating: Set(Some(rating)),
            review: Set(Some(review.to_string())),
            ..Default::default()
        };
        active.update(&self.db).await?;
        Ok(())
    }

    /// Returns false when no row matched the id.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
