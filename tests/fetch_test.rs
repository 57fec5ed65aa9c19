use std::net::TcpListener;

use reqwest::blocking::Client;
use wikipage_md::fetch::fetch_page;
use wikipage_md::{Error, EXIT_CONNECT, EXIT_STATUS};

/// An address nothing listens on.
fn refused_url() -> String {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    format!("http://127.0.0.1:{port}/News")
}

#[test]
fn fetch_returns_exact_body() {
    let body = "<html><body><h1>Hello, world!</h1></body></html>";
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/News")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
        .create();

    let result = fetch_page(&Client::new(), &format!("{}/News", server.url())).expect("fetch");

    mock.assert();
    assert_eq!(result, body);
}

#[test]
fn fetch_decodes_declared_charset() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/News")
        .with_status(200)
        .with_header("content-type", "text/html; charset=ISO-8859-1")
        .with_body(b"<p>Caf\xE9</p>".as_slice())
        .create();

    let result = fetch_page(&Client::new(), &format!("{}/News", server.url())).expect("fetch");

    assert_eq!(result, "<p>Café</p>");
}

#[test]
fn fetch_non_200_is_status_error() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/News/404").with_status(404).create();

    let result = fetch_page(&Client::new(), &format!("{}/News/404", server.url()));

    match result {
        Err(err @ Error::Status { status: 404, .. }) => assert_eq!(err.exit_code(), EXIT_STATUS),
        other => panic!("expected Status(404), got {other:?}"),
    }
}

#[test]
fn fetch_treats_other_success_codes_as_failure() {
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/News").with_status(204).create();

    let result = fetch_page(&Client::new(), &format!("{}/News", server.url()));

    assert!(matches!(result, Err(Error::Status { status: 204, .. })));
}

#[test]
fn fetch_connection_refused_is_connect_error() {
    let result = fetch_page(&Client::new(), &refused_url());

    match result {
        Err(err @ Error::Connect { .. }) => assert_eq!(err.exit_code(), EXIT_CONNECT),
        other => panic!("expected Connect, got {other:?}"),
    }
}
