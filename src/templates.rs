use maud::{DOCTYPE, Markup, html};

use crate::{
    entities::movie,
    models::{EditFormErrors, MovieCandidate},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const POSTER_THUMB_CDN: &str = "https://image.tmdb.org/t/p/w92";

pub fn index_page(movies: &[movie::Model]) -> String {
    page(
        "My Top Movies",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-12" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "My Top Movies" }
                            p class="mt-2 text-gray-600" { "Rated and ranked, worst to best." }
                        }
                        a class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" href="/add" { "Add Movie" }
                    }

                    @if movies.is_empty() {
                        div class="mt-10 bg-white shadow rounded-lg p-8" {
                            p class="text-gray-600" { "Nothing here yet. Add a movie to get started." }
                        }
                    } @else {
                        div class="mt-10 space-y-4" {
                            @for movie in movies {
                                (movie_card(movie))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn add_page(error: Option<&str>) -> String {
    page(
        "Add Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Add Movie" }
                        p class="mt-2 text-gray-600" { "Search the catalog by title." }

                        form class="mt-8 space-y-6" method="post" action="/add" {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="title" { "Movie Title" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="title" id="title";
                                @if let Some(error) = error {
                                    p class="mt-2 text-sm text-red-600" { (error) }
                                }
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Add Movie" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn select_page(query: &str, candidates: &[MovieCandidate]) -> String {
    page(
        "Select Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { "Select Movie" }
                        p class="mt-2 text-gray-600" { "Results for \"" (query) "\"." }

                        @if candidates.is_empty() {
                            p class="mt-8 text-gray-600" { "No matches found." }
                        } @else {
                            ul class="mt-8 divide-y divide-gray-200" {
                                @for candidate in candidates {
                                    li {
                                        a class="flex items-center gap-3 py-3 text-blue-600 hover:text-blue-800" href=(format!("/find?id={}", candidate.id)) {
                                            @if let Some(path) = &candidate.poster_path {
                                                img class="h-14 w-10 flex-none rounded object-cover bg-gray-200" src=(format!("{POSTER_THUMB_CDN}{path}")) alt=(candidate.title);
                                            }
                                            span {
                                                (candidate.title)
                                                @if !candidate.release_date.is_empty() {
                                                    span class="ml-2 text-sm text-gray-500" { (candidate.release_date) }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/add" { "Search again" }
                    }
                }
            }
        },
    )
}

pub fn edit_page(movie: &movie::Model, errors: EditFormErrors) -> String {
    page(
        "Rate Movie",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-12" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-3xl font-bold text-gray-900" { (movie.title) }
                        p class="mt-2 text-gray-600" { "(" (movie.year) ")" }

                        form class="mt-8 space-y-6" method="post" action=(format!("/edit?id={}", movie.id)) {
                            div {
                                label class="block text-sm font-medium text-gray-700" for="rating" { "Your Rating Out of 10 e.g. 7.5" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="rating" id="rating" value=[movie.rating];
                                @if let Some(error) = errors.rating {
                                    p class="mt-2 text-sm text-red-600" { (error) }
                                }
                            }

                            div {
                                label class="block text-sm font-medium text-gray-700" for="review" { "Your Review" }
                                input class="mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" name="review" id="review" value=[movie.review.as_deref()];
                                @if let Some(error) = errors.review {
                                    p class="mt-2 text-sm text-red-600" { (error) }
                                }
                            }

                            button class="w-full rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Done" }
                        }

                        a class="mt-6 inline-block text-sm text-blue-600 hover:text-blue-800" href="/" { "Back to list" }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &movie::Model) -> Markup {
    html! {
        div class="bg-white shadow rounded-lg p-6" {
            div class="flex items-start gap-6" {
                img class="h-36 w-24 flex-none rounded object-cover bg-gray-200" src=(movie.img_url) alt=(movie.title);

                div class="min-w-0 flex-1" {
                    div class="flex items-start justify-between gap-4" {
                        h2 class="text-xl font-semibold text-gray-900" {
                            @if let Some(ranking) = movie.ranking {
                                span class="mr-2 text-gray-400" { "#" (ranking) }
                            }
                            (movie.title)
                            span class="ml-2 font-normal text-gray-500" { "(" (movie.year) ")" }
                        }
                        @if let Some(rating) = movie.rating {
                            span class="flex-none rounded-full bg-blue-100 px-3 py-1 text-sm font-semibold text-blue-800" { (rating) " / 10" }
                        } @else {
                            span class="flex-none rounded-full bg-gray-100 px-3 py-1 text-sm text-gray-500" { "Unrated" }
                        }
                    }

                    p class="mt-2 text-sm text-gray-600" { (movie.description) }

                    @if let Some(review) = &movie.review {
                        p class="mt-2 text-sm italic text-gray-700" { "\u{201c}" (review) "\u{201d}" }
                    }

                    div class="mt-4 flex gap-4 text-sm" {
                        a class="text-blue-600 hover:text-blue-800" href=(format!("/edit?id={}", movie.id)) { "Edit" }
                        a class="text-red-600 hover:text-red-800" href=(format!("/delete?id={}", movie.id)) { "Delete" }
                    }
                }
            }
        }
    }
}
