use std::cell::Cell;
use std::time::{Duration, Instant};

use futures_util::{SinkExt, StreamExt};
use socialdash_client::ws::{run_connection_loop, ConnectionState, ReconnectPolicy};
use tokio::net::TcpListener;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message;

const FAST: Duration = Duration::from_millis(50);

/// Accept one connection per entry in `script`: send that many text frames,
/// then close with the given code. Returns how many connections were served.
async fn serve(listener: TcpListener, script: Vec<(usize, u16)>) -> usize {
    let mut served = 0;
    for (frames, code) in script {
        let (tcp, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(tcp).await.unwrap();
        served += 1;
        for i in 0..frames {
            ws.send(Message::Text(format!("update {i}").into()))
                .await
                .unwrap();
        }
        ws.close(Some(CloseFrame {
            code: CloseCode::from(code),
            reason: "bye".into(),
        }))
        .await
        .unwrap();
        while let Some(Ok(_)) = ws.next().await {}
    }
    served
}

async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("ws://{}/ws/posts/?token=tok", listener.local_addr().unwrap());
    (listener, url)
}

#[tokio::test]
async fn every_message_triggers_a_refresh_and_4000_stops() {
    let (listener, url) = bind().await;
    let server = tokio::spawn(serve(listener, vec![(3, 4000)]));

    let mut messages = Vec::new();
    let mut states = Vec::new();
    tokio::time::timeout(
        Duration::from_secs(5),
        run_connection_loop(
            || Some(url.clone()),
            ReconnectPolicy::with_delay(FAST),
            |m| messages.push(m),
            |s| states.push(s),
        ),
    )
    .await
    .expect("loop should stop on close code 4000");

    assert_eq!(messages, vec!["update 0", "update 1", "update 2"]);
    assert_eq!(
        states,
        vec![
            ConnectionState::Connecting,
            ConnectionState::Connected,
            ConnectionState::Terminated,
        ]
    );
    assert_eq!(server.await.unwrap(), 1);
}

#[tokio::test]
async fn binary_frames_also_trigger_a_refresh() {
    let (listener, url) = bind().await;
    let server = tokio::spawn(async move {
        let (tcp, _) = listener.accept().await.unwrap();
        let mut ws = tokio_tungstenite::accept_async(tcp).await.unwrap();
        ws.send(Message::Binary(vec![0xde, 0xad, 0xbe, 0xef].into()))
            .await
            .unwrap();
        ws.send(Message::Binary(b"posts changed".to_vec().into()))
            .await
            .unwrap();
        ws.send(Message::Ping(Vec::new().into())).await.unwrap();
        ws.close(Some(CloseFrame {
            code: CloseCode::from(4000),
            reason: "bye".into(),
        }))
        .await
        .unwrap();
        while let Some(Ok(_)) = ws.next().await {}
    });

    let mut messages = Vec::new();
    tokio::time::timeout(
        Duration::from_secs(5),
        run_connection_loop(
            || Some(url.clone()),
            ReconnectPolicy::with_delay(FAST),
            |m| messages.push(m),
            |_| {},
        ),
    )
    .await
    .expect("loop should stop on close code 4000");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1], "posts changed");
    server.await.unwrap();
}

#[tokio::test]
async fn other_close_codes_reconnect_once_after_the_delay() {
    let (listener, url) = bind().await;
    let server = tokio::spawn(serve(listener, vec![(1, 1000), (1, 4000)]));

    let mut refreshes = 0;
    let mut states = Vec::new();
    let started = Instant::now();
    tokio::time::timeout(
        Duration::from_secs(5),
        run_connection_loop(
            || Some(url.clone()),
            ReconnectPolicy::with_delay(FAST),
            |_| refreshes += 1,
            |s| states.push(s),
        ),
    )
    .await
    .expect("loop should stop on the second connection");

    assert!(started.elapsed() >= FAST);
    assert_eq!(refreshes, 2);
    let pending: Vec<_> = states
        .iter()
        .filter(|s| matches!(s, ConnectionState::ClosedPendingReconnect { .. }))
        .collect();
    assert_eq!(
        pending,
        vec![&ConnectionState::ClosedPendingReconnect { code: 1000 }]
    );
    assert_eq!(states.last(), Some(&ConnectionState::Terminated));
    assert_eq!(server.await.unwrap(), 2);
}

#[tokio::test]
async fn no_token_means_no_socket() {
    let mut states = Vec::new();
    run_connection_loop(
        || None,
        ReconnectPolicy::with_delay(FAST),
        |_| panic!("no messages without a socket"),
        |s| states.push(s),
    )
    .await;

    assert_eq!(states, vec![ConnectionState::Disconnected]);
}

#[tokio::test]
async fn refused_connection_counts_as_abnormal_close() {
    let (listener, url) = bind().await;
    drop(listener);

    // Hand out the URL twice, then pretend the token was removed.
    let attempts = Cell::new(0);
    let mut states = Vec::new();
    tokio::time::timeout(
        Duration::from_secs(5),
        run_connection_loop(
            || {
                attempts.set(attempts.get() + 1);
                (attempts.get() <= 2).then(|| url.clone())
            },
            ReconnectPolicy::with_delay(FAST),
            |_| {},
            |s| states.push(s),
        ),
    )
    .await
    .expect("loop should stop once the token is gone");

    assert_eq!(attempts.get(), 3);
    assert_eq!(
        states,
        vec![
            ConnectionState::Connecting,
            ConnectionState::ClosedPendingReconnect { code: 1006 },
            ConnectionState::Connecting,
            ConnectionState::ClosedPendingReconnect { code: 1006 },
            ConnectionState::Disconnected,
        ]
    );
}
