//! Page handlers for serving HTML templates

use axum::response::Html;

/// Dashboard overview page
pub async fn dashboard() -> Html<&'static str> {
    Html(include_str!("../../templates/dashboard.html"))
}

/// Course list page
pub async fn courses_page() -> Html<&'static str> {
    Html(include_str!("../../templates/courses.html"))
}

/// Course detail page with its content list
pub async fn course_page() -> Html<&'static str> {
    Html(include_str!("../../templates/course.html"))
}

/// Content authoring form, used for both create and edit
pub async fn content_form_page() -> Html<&'static str> {
    Html(include_str!("../../templates/content_form.html"))
}
