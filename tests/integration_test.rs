//! Integration tests for subnet-query
//!
//! These tests start the real HTTP server on an ephemeral port and query it.

use std::net::{IpAddr, Ipv4Addr};
use subnet_query::{run, Config, ServerHandle};

async fn start() -> ServerHandle {
    let config = Config {
        bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        ..Config::default()
    };
    run(&config).await.expect("Failed to start server")
}

async fn get(server: &ServerHandle, path: &str) -> reqwest::Response {
    reqwest::get(format!("http://{}{path}", server.addr()))
        .await
        .expect("Request failed")
}

async fn get_text(server: &ServerHandle, path: &str) -> String {
    get(server, path).await.text().await.expect("No body")
}

#[tokio::test]
async fn test_subnet_v4() {
    let server = start().await;

    let response = get(&server, "/subnet/v4/192.168.0.1/24").await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"],
        "text/plain;charset=UTF-8"
    );
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    let body = response.text().await.unwrap();
    assert_eq!(
        body,
        "Address: 11000000 10101000 00000000 00000001 | 192.168.0.1\n\
         Mask:    11111111 11111111 11111111 00000000 | 255.255.255.0\n\
         First:   11000000 10101000 00000000 00000000 | 192.168.0.0\n\
         Last:    11000000 10101000 00000000 11111111 | 192.168.0.255\n\
         Total:   256\n\n"
    );

    let body = get_text(&server, "/subnet/v4/10.10.100.0/22").await;
    assert!(body.contains("| 10.10.100.0\n"), "{body}");
    assert!(body.contains("| 10.10.103.255\n"), "{body}");
    assert!(body.contains("Total:   1024\n"), "{body}");

    server.shutdown();
    server.wait().await.expect("Server failed");
}

#[tokio::test]
async fn test_subnet_v6() {
    let server = start().await;

    let body = get_text(&server, "/subnet/v6/fdd8:0c61:bf60:590f::/64").await;
    assert!(body.contains("| fdd8:c61:bf60:590f::\n"), "{body}");
    assert!(
        body.contains("| fdd8:c61:bf60:590f:ffff:ffff:ffff:ffff\n"),
        "{body}"
    );
    assert!(body.contains("Total:   18446744073709551616\n"), "{body}");

    let body = get_text(&server, "/subnet/v6/2606:4700:a560::/48").await;
    assert!(body.contains("Total:   1208925819614629174706176\n"), "{body}");

    let body = get_text(&server, "/subnet/v6/::/0").await;
    assert!(
        body.contains("Total:   340282366920938463463374607431768211456\n"),
        "{body}"
    );

    server.shutdown();
    server.wait().await.expect("Server failed");
}

#[tokio::test]
async fn test_subnet_input_errors() {
    let server = start().await;

    for path in [
        "/subnet/v4/not-a-cidr",
        "/subnet/v6/not-a-cidr",
        "/subnet/v4/",
        "/subnet/v6/",
    ] {
        let response = get(&server, path).await;
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.text().await.unwrap(),
            "Not valid CIDR notation.\n\n"
        );
    }

    assert_eq!(
        get_text(&server, "/subnet/v4/fdd8:0c61:bf60:590f::/64").await,
        "Not a valid IPv4 address.\n\n"
    );
    assert_eq!(
        get_text(&server, "/subnet/v6/192.168.0.1/24").await,
        "Not a valid IPv6 address.\n\n"
    );

    server.shutdown();
    server.wait().await.expect("Server failed");
}

#[tokio::test]
async fn test_help_pages() {
    let server = start().await;
    let version = format!("subnet-query v{}\n", env!("CARGO_PKG_VERSION"));

    assert_eq!(get_text(&server, "/version/").await, version);

    let usage = get_text(&server, "/subnet/").await;
    assert_eq!(
        usage,
        "Examples:\n\
         - /subnet/v4/10.10.100.0/22\n\
         - /subnet/v4/192.168.0.1/24\n\
         - /subnet/v6/2606:4700:a560::/48\n\
         - /subnet/v6/fdd8:0c61:bf60:590f::/64\n"
    );

    let help = get_text(&server, "/").await;
    assert!(help.starts_with(&format!("{version}\nExamples:\n")), "{help}");
    assert!(help.contains("- /version/\n"), "{help}");
    assert!(help.contains("- /subnet/v4/192.168.0.1/24\n"), "{help}");

    server.shutdown();
    server.wait().await.expect("Server failed");
}

#[tokio::test]
async fn test_unknown_route() {
    let server = start().await;

    let response = get(&server, "/dns/a/example.com").await;
    assert_eq!(response.status(), 404);

    server.shutdown();
    server.wait().await.expect("Server failed");
}
