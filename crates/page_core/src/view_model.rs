#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    /// Current title input, `None` when the page has no such input.
    pub movie_input: Option<String>,
    /// Current response markup, `None` when the page has no output element.
    pub response_html: Option<String>,
    pub in_flight: usize,
    pub dirty: bool,
}
