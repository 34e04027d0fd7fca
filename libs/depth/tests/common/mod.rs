//! Common test utilities for depth ladder integration tests

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use market_depth::{FeedConnection, RowCollection, TableSchema};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tokio_tungstenite::tungstenite::Message;

/// Macro for verbose test output (controlled by TEST_VERBOSE env var)
#[macro_export]
macro_rules! verbose_println {
    ($($arg:tt)*) => {
        if std::env::var("TEST_VERBOSE").is_ok() {
            println!($($arg)*);
        }
    };
}

pub const WAIT_TIMEOUT: Duration = Duration::from_secs(5);

/// A quote feed that plays a fixed list of JSON frames to each client, then
/// either holds the socket open or closes it
pub struct MockFeedServer {
    pub addr: SocketAddr,
    shutdown: Arc<Notify>,
}

impl MockFeedServer {
    pub async fn start(frames: Vec<String>, close_after: bool) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    result = listener.accept() => {
                        let Ok((stream, _)) = result else { break };
                        let frames = frames.clone();
                        let shutdown = shutdown_clone.clone();
                        tokio::spawn(async move {
                            Self::serve(stream, frames, close_after, shutdown).await;
                        });
                    }
                    _ = shutdown_clone.notified() => break,
                }
            }
        });

        Self { addr, shutdown }
    }

    async fn serve(
        stream: tokio::net::TcpStream,
        frames: Vec<String>,
        close_after: bool,
        shutdown: Arc<Notify>,
    ) {
        use futures_util::{SinkExt, StreamExt};

        let Ok(mut ws_stream) = tokio_tungstenite::accept_async(stream).await else {
            return;
        };

        for frame in frames {
            if ws_stream.send(Message::Text(frame)).await.is_err() {
                return;
            }
        }

        if close_after {
            let _ = ws_stream.close(None).await;
            return;
        }

        loop {
            tokio::select! {
                msg = ws_stream.next() => match msg {
                    Some(Ok(msg)) if msg.is_close() => break,
                    Some(Ok(_)) => {}
                    _ => break,
                },
                _ = shutdown.notified() => break,
            }
        }
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/websocket", self.addr)
    }
}

impl Drop for MockFeedServer {
    fn drop(&mut self) {
        self.shutdown.notify_waiters();
    }
}

/// A `marketData` frame for `key`
pub fn quote_frame(key: &str, bid: f64, offer: f64) -> String {
    serde_json::json!({
        "type": "marketData",
        "symbolLevel": key,
        "level": 1,
        "bid": bid,
        "bidQuantity": 500,
        "offer": offer,
        "offerQuantity": 400,
    })
    .to_string()
}

pub async fn open(url: &str) -> FeedConnection {
    FeedConnection::open(url, TableSchema::market_depth(), Duration::from_secs(2))
        .await
        .unwrap()
}

/// Poll the connection until `done` holds or the timeout passes
pub async fn poll_until<F>(conn: &mut FeedConnection, rows: &mut RowCollection, mut done: F) -> bool
where
    F: FnMut(&FeedConnection, &RowCollection) -> bool,
{
    let deadline = tokio::time::Instant::now() + WAIT_TIMEOUT;
    loop {
        let summary = conn.poll(rows);
        if summary != Default::default() {
            verbose_println!("  poll: {:?} status={}", summary, conn.status());
        }
        if done(conn, rows) {
            return true;
        }
        if tokio::time::Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}
