//! End-to-end tests for the chat WebSocket relay.

mod helpers;

use std::net::SocketAddr;
use std::time::Duration;

use futures::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

type Client = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn serve(app: &helpers::TestApp) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app.router.clone();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn connect(addr: SocketAddr) -> Client {
    let (client, _) = connect_async(format!("ws://{addr}/ws/chat"))
        .await
        .expect("WebSocket handshake failed");
    client
}

async fn next_text(client: &mut Client) -> String {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for frame")
            .expect("stream ended")
            .expect("WebSocket error");
        if let Message::Text(text) = msg {
            return text.as_str().to_string();
        }
    }
}

async fn wait_for_connections(app: &helpers::TestApp, expected: usize) {
    for _ in 0..100 {
        if app.state.relay.registry().len() == expected {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("expected {expected} chat connections");
}

#[tokio::test]
async fn test_broadcast_is_byte_identical() {
    let app = helpers::TestApp::new().await;
    let addr = serve(&app).await;

    let mut alice = connect(addr).await;
    let mut bob = connect(addr).await;
    wait_for_connections(&app, 2).await;

    let raw = r#"{"user_name":"alice","message":"hi  there","message_type":"user"}"#;
    alice.send(Message::text(raw)).await.unwrap();

    assert_eq!(next_text(&mut alice).await, raw);
    assert_eq!(next_text(&mut bob).await, raw);

    let history = app.request("GET", "/api/chat/messages", None).await;
    let messages = history.body.as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["message"], "hi  there");
}

#[tokio::test]
async fn test_history_keeps_submission_order() {
    let app = helpers::TestApp::new().await;
    let addr = serve(&app).await;

    let mut client = connect(addr).await;
    wait_for_connections(&app, 1).await;

    for i in 0..3 {
        let raw = format!(r#"{{"user_name":"u","message":"m{i}","message_type":"user"}}"#);
        client.send(Message::text(raw.clone())).await.unwrap();
        assert_eq!(next_text(&mut client).await, raw);
    }

    let history = app.request("GET", "/api/chat/messages", None).await;
    let texts: Vec<&str> = history
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["message"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["m0", "m1", "m2"]);
}

#[tokio::test]
async fn test_malformed_payload_gets_error_frame() {
    let app = helpers::TestApp::new().await;
    let addr = serve(&app).await;

    let mut sender = connect(addr).await;
    let mut other = connect(addr).await;
    wait_for_connections(&app, 2).await;

    sender.send(Message::text("not json")).await.unwrap();

    let reply: Value = serde_json::from_str(&next_text(&mut sender).await).unwrap();
    assert_eq!(reply["type"], "error");
    assert_eq!(reply["code"], "INVALID_MESSAGE");

    // The connection stays usable after a rejected frame.
    let raw = r#"{"user_name":"a","message":"ok","message_type":"user"}"#;
    sender.send(Message::text(raw)).await.unwrap();
    assert_eq!(next_text(&mut sender).await, raw);
    assert_eq!(next_text(&mut other).await, raw);

    let snapshot = app.state.relay.metrics().snapshot();
    assert_eq!(snapshot.messages_rejected, 1);
    assert_eq!(snapshot.messages_relayed, 1);
}

#[tokio::test]
async fn test_disconnect_unregisters_client() {
    let app = helpers::TestApp::new().await;
    let addr = serve(&app).await;

    let mut client = connect(addr).await;
    wait_for_connections(&app, 1).await;

    client.close(None).await.unwrap();
    wait_for_connections(&app, 0).await;
}

#[tokio::test]
async fn test_store_failure_closes_socket() {
    let app = helpers::TestApp::new().await;
    let addr = serve(&app).await;

    let mut client = connect(addr).await;
    wait_for_connections(&app, 1).await;

    app.store.set_available(false);
    let raw = r#"{"user_name":"a","message":"lost","message_type":"user"}"#;
    client.send(Message::text(raw)).await.unwrap();

    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
            .await
            .expect("timed out waiting for close");
        match frame {
            Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
            Some(Ok(Message::Text(text))) => panic!("unexpected frame: {}", text.as_str()),
            Some(Ok(_)) => {}
        }
    }
    wait_for_connections(&app, 0).await;
}

#[tokio::test]
async fn test_shutdown_closes_clients() {
    let app = helpers::TestApp::new().await;
    let addr = serve(&app).await;

    let mut client = connect(addr).await;
    wait_for_connections(&app, 1).await;

    assert_eq!(app.state.relay.shutdown(), 1);

    let frame = tokio::time::timeout(Duration::from_secs(5), client.next())
        .await
        .expect("timed out waiting for close");
    assert!(matches!(frame, Some(Ok(Message::Close(_))) | None | Some(Err(_))));
}
