use serde::Deserialize;

/// One entry from the catalog's search results, shown on the select page.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieCandidate {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    pub poster_path: Option<String>,
}

/// Fields pulled from the catalog's detail endpoint when a candidate is picked.
#[derive(Clone, Debug)]
pub struct MovieDetails {
    pub title: String,
    pub year: i32,
    pub description: String,
    pub img_url: String,
}

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub rating: String,
    pub review: String,
}

/// Field-level messages rendered back into the edit form.
#[derive(Clone, Copy, Debug, Default)]
pub struct EditFormErrors {
    pub rating: Option<&'static str>,
    pub review: Option<&'static str>,
}

impl EditFormErrors {
    pub fn any(&self) -> bool {
        self.rating.is_some() || self.review.is_some()
    }
}
