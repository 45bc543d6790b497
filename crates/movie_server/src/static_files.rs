use std::path::{Component, Path, PathBuf};

/// MIME type from the file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Maps a request path onto the public directory. Returns `None` for paths
/// that would leave it.
pub fn resolve_public_path(public_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = public_dir.to_path_buf();
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

pub fn error_page() -> &'static str {
    concat!(
        "<!DOCTYPE html>\n",
        "<html>\n",
        "    <head>\n",
        "        <title>Error Not found</title>\n",
        "        <meta charset=\"UTF-8\">\n",
        "        <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        "    </head>\n",
        "    <body>\n",
        "        <h1>Error</h1>\n",
        "    </body>\n",
        "</html>",
    )
}
