use serde::Deserialize;

const SAD_CAT_POSTER: &str = "https://img.freepik.com/vector-premium/lindo-gato-triste-sentado-lluvia-nube-dibujos-animados-vector-icono-ilustracion-animal-naturaleza-icono-aislado_138676-5215.jpg?w=826";

/// Movie fields as returned by the upstream API. Absent fields render empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub rated: String,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub director: String,
    pub plot: String,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    pub poster: String,
    /// `"False"` when the upstream found nothing.
    pub response: Option<String>,
    pub error: Option<String>,
}

impl MovieDetails {
    fn placeholder(title: &str) -> Self {
        Self {
            title: title.to_string(),
            year: "Sorry".to_string(),
            poster: SAD_CAT_POSTER.to_string(),
            ..Self::default()
        }
    }

    pub fn not_found() -> Self {
        Self::placeholder("Resource not found")
    }

    pub fn not_implemented() -> Self {
        Self::placeholder("Not implemented yet")
    }

    pub fn method_not_allowed() -> Self {
        Self {
            title: "HTTP/1.1 405 Method Not Allowed".to_string(),
            ..Self::default()
        }
    }

    pub fn is_found(&self) -> bool {
        !self
            .response
            .as_deref()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("false"))
    }
}

/// Full HTML document describing one movie.
pub fn render_movie_page(movie: &MovieDetails) -> String {
    let title = escape_html(&movie.title);
    [
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        "<title>Movies</title>".to_string(),
        "</head>".to_string(),
        "<body>".to_string(),
        format!("<h1>{} ({})</h1>", title, escape_html(&movie.year)),
        "<div class=\"movie-details\">".to_string(),
        format!(
            "<img src=\"{}\" alt=\"{}\"> <br>",
            escape_html(&movie.poster),
            title
        ),
        detail_line("Rated", &movie.rated),
        detail_line("Released", &movie.released),
        detail_line("Runtime", &movie.runtime),
        detail_line("Genre", &movie.genre),
        detail_line("Director", &movie.director),
        detail_line("IMDb Rating", &movie.imdb_rating),
        "<strong>Plot:</strong><br>".to_string(),
        format!("<p>{}</p>", escape_html(&movie.plot)),
        "</div>".to_string(),
        "</body>".to_string(),
        "</html>".to_string(),
    ]
    .join("\r\n")
}

fn detail_line(label: &str, value: &str) -> String {
    format!("<strong>{label}:</strong> {}<br>", escape_html(value))
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
