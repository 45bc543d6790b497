use std::time::Duration;

use page_app::{render, Dialog, PageApp};
use page_core::{AppState, Msg, ALERT_BUTTON, MOVIE_INPUT};
use page_engine::{EngineHandle, RequestSettings};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct RecordingDialog {
    shown: Vec<String>,
}

impl Dialog for RecordingDialog {
    fn alert(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }
}

fn page_for(origin: String) -> PageApp<RecordingDialog> {
    page_logging::initialize_for_tests();
    let engine = EngineHandle::new(RequestSettings {
        origin,
        ..RequestSettings::default()
    })
    .expect("engine");
    PageApp::new(AppState::new(), engine, RecordingDialog::default())
}

fn type_title(app: &mut PageApp<RecordingDialog>, title: &str) {
    app.dispatch(Msg::InputChanged {
        element: MOVIE_INPUT.into(),
        value: title.to_string(),
    });
}

fn response_html(app: &PageApp<RecordingDialog>) -> Option<String> {
    app.state().view().response_html
}

#[test]
fn bound_button_shows_one_dialog_per_click() {
    let mut app = page_for(RequestSettings::default().origin);
    app.dispatch(Msg::BindClickAlert {
        element: ALERT_BUTTON.into(),
    });

    app.dispatch(Msg::Clicked {
        element: ALERT_BUTTON.into(),
    });
    assert_eq!(app.dialog().shown, vec!["Helloooo".to_string()]);

    app.dispatch(Msg::Clicked {
        element: ALERT_BUTTON.into(),
    });
    assert_eq!(app.dialog().shown.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn lookup_renders_the_server_markup() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie"))
        .and(query_param("t", "The Matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<b>Found</b>"))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = page_for(server.uri());
    type_title(&mut app, "The Matrix");
    let view = app.dispatch(Msg::LookupRequested).expect("pending lookup is visible");
    assert_eq!(view.in_flight, 1);
    assert_eq!(
        render(&view),
        vec![
            "[getrespmsg] ".to_string(),
            "[pending] 1 lookup(s) in flight".to_string()
        ]
    );

    assert!(tokio::task::block_in_place(|| app.settle(WAIT)));
    assert_eq!(response_html(&app).as_deref(), Some("<b>Found</b>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn not_found_page_is_rendered_like_a_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Error</h1>"))
        .mount(&server)
        .await;

    let mut app = page_for(server.uri());
    type_title(&mut app, "Nothing");
    app.dispatch(Msg::LookupRequested);

    assert!(tokio::task::block_in_place(|| app.settle(WAIT)));
    assert_eq!(response_html(&app).as_deref(), Some("<h1>Error</h1>"));
}

#[tokio::test(flavor = "multi_thread")]
async fn slower_first_lookup_overwrites_the_faster_second() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie"))
        .and(query_param("t", "Slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(400))
                .set_body_string("slow body"),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie"))
        .and(query_param("t", "Fast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fast body"))
        .mount(&server)
        .await;

    let mut app = page_for(server.uri());
    type_title(&mut app, "Slow");
    app.dispatch(Msg::LookupRequested);
    type_title(&mut app, "Fast");
    app.dispatch(Msg::LookupRequested);

    assert!(tokio::task::block_in_place(|| app.settle(WAIT)));
    assert_eq!(response_html(&app).as_deref(), Some("slow body"));
}

#[test]
fn unreachable_server_leaves_the_output_alone() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mut app = page_for(origin);
    type_title(&mut app, "Inception");
    app.dispatch(Msg::LookupRequested);

    assert!(app.settle(WAIT));
    assert_eq!(response_html(&app).as_deref(), Some(""));
    assert!(app.pump().is_empty());
}
