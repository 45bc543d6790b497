use page_core::{PageViewModel, RESPONSE_OUTPUT};

/// Console lines describing the visible page.
pub fn render(view: &PageViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    match &view.response_html {
        Some(html) => lines.push(format!("[{RESPONSE_OUTPUT}] {html}")),
        None => lines.push(format!("[{RESPONSE_OUTPUT}] <missing>")),
    }
    if view.in_flight > 0 {
        lines.push(format!("[pending] {} lookup(s) in flight", view.in_flight));
    }
    lines
}
