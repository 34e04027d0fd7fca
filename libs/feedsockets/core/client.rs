use crate::config::ClientConfig;
use crate::connection_state::{AtomicConnectionState, AtomicMetrics, ConnectionState};
use crate::traits::*;
use crossbeam_channel::{unbounded, Receiver, Sender};
use futures::StreamExt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::sync::Notify;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};

type FeedStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// How often [`WebSocketClient::wait_event`] re-checks the channel
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(5);

/// Events emitted by the client, in the order they happened
#[derive(Debug, Clone)]
pub enum ClientEvent<M> {
    /// Handshake completed, frames will follow
    Connected,
    /// A frame parsed successfully
    Message(M),
    /// A frame failed to parse and was dropped; the connection stays open
    ParseError(String),
    /// Transport failure; the client is finished
    Error(String),
    /// The client was shut down
    Disconnected,
}

/// Client metrics snapshot
#[derive(Debug, Clone)]
pub struct Metrics {
    pub frames_received: u64,
    pub messages_parsed: u64,
    pub parse_errors: u64,
    pub connection_state: ConnectionState,
}

/// Single-connection WebSocket client
///
/// - One tokio task owns the socket and parses frames in arrival order
/// - Parsed messages and lifecycle changes are forwarded over an unbounded
///   crossbeam channel, drained by the owner at its own pace
/// - No reconnection: once in `Error` or `Closed` the client is done
///
/// Dropping the client requests shutdown; frames not yet delivered are
/// discarded together with the channel.
pub struct WebSocketClient<P>
where
    P: MessageParser,
{
    config: Arc<ClientConfig<P>>,
    state: Arc<AtomicConnectionState>,
    metrics: Arc<AtomicMetrics>,
    event_rx: Receiver<ClientEvent<P::Message>>,
    shutdown_signal: Arc<Notify>,
    task_handle: Option<tokio::task::JoinHandle<()>>,
}

impl<P> WebSocketClient<P>
where
    P: MessageParser,
{
    /// Called by the builder's `build()` method
    pub(crate) async fn new(config: ClientConfig<P>) -> Result<Self> {
        let config = Arc::new(config);
        let state = Arc::new(AtomicConnectionState::new(ConnectionState::Connecting));
        let metrics = Arc::new(AtomicMetrics::new());
        let shutdown_signal = Arc::new(Notify::new());

        let (event_tx, event_rx) = unbounded();

        let task_handle = {
            let config = Arc::clone(&config);
            let state = Arc::clone(&state);
            let metrics = Arc::clone(&metrics);
            let shutdown_signal = Arc::clone(&shutdown_signal);

            tokio::spawn(async move {
                run_client(config, state, metrics, shutdown_signal, event_tx).await;
            })
        };

        Ok(Self {
            config,
            state,
            metrics,
            event_rx,
            shutdown_signal,
            task_handle: Some(task_handle),
        })
    }

    /// URL this client connects to
    pub fn url(&self) -> &str {
        self.config.url()
    }

    /// Get current connection state
    #[inline]
    pub fn connection_state(&self) -> ConnectionState {
        self.state.get()
    }

    /// Check if the handshake completed and the client is still live
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Get current metrics
    pub fn metrics(&self) -> Metrics {
        Metrics {
            frames_received: self.metrics.frames_received(),
            messages_parsed: self.metrics.messages_parsed(),
            parse_errors: self.metrics.parse_errors(),
            connection_state: self.state.get(),
        }
    }

    /// Try to receive an event (non-blocking)
    pub fn try_recv_event(&self) -> Option<ClientEvent<P::Message>> {
        self.event_rx.try_recv().ok()
    }

    /// Take every event that is currently queued, oldest first (non-blocking)
    pub fn drain_events(&self) -> Vec<ClientEvent<P::Message>> {
        self.event_rx.try_iter().collect()
    }

    /// Wait for the next event without blocking the runtime thread
    pub async fn wait_event(&self, timeout: Duration) -> Option<ClientEvent<P::Message>> {
        let deadline = tokio::time::Instant::now() + timeout;
        loop {
            if let Some(event) = self.try_recv_event() {
                return Some(event);
            }
            if tokio::time::Instant::now() >= deadline {
                return None;
            }
            tokio::time::sleep(EVENT_POLL_INTERVAL).await;
        }
    }

    /// Get a reference to the shutdown flag (true = running)
    pub fn shutdown_flag(&self) -> &Arc<AtomicBool> {
        &self.config.shutdown_flag
    }

    /// Ask the I/O task to close the socket without waiting for it
    pub fn request_shutdown(&self) {
        self.config.shutdown_flag.store(false, Ordering::Release);
        self.shutdown_signal.notify_one();
    }

    /// Close the socket and wait for the I/O task to finish
    pub async fn shutdown(mut self) -> Result<()> {
        info!("Shutting down WebSocket client for {}", self.config.url());

        self.request_shutdown();

        if let Some(handle) = self.task_handle.take() {
            handle
                .await
                .map_err(|e| FeedSocketError::WebSocket(format!("I/O task failed: {}", e)))?;
        }

        self.state.set(ConnectionState::Closed);
        debug!("WebSocket client shut down");
        Ok(())
    }
}

impl<P> Drop for WebSocketClient<P>
where
    P: MessageParser,
{
    fn drop(&mut self) {
        if self.task_handle.is_some() {
            self.request_shutdown();
        }
    }
}

/// Main client task: connect once, then read until shutdown or failure
async fn run_client<P>(
    config: Arc<ClientConfig<P>>,
    state: Arc<AtomicConnectionState>,
    metrics: Arc<AtomicMetrics>,
    shutdown_signal: Arc<Notify>,
    event_tx: Sender<ClientEvent<P::Message>>,
) where
    P: MessageParser,
{
    if !config.shutdown_flag.load(Ordering::Acquire) {
        debug!("Shutdown flag already cleared, not connecting");
        close(&state, &event_tx);
        return;
    }

    debug!("Connecting to {}", config.url);
    let connect = tokio::time::timeout(config.connect_timeout, connect_async(config.url.as_str()));

    let mut ws_stream = tokio::select! {
        biased;

        _ = shutdown_signal.notified() => {
            debug!("Shutdown requested while connecting");
            close(&state, &event_tx);
            return;
        }

        result = connect => match result {
            Ok(Ok((ws_stream, _response))) => ws_stream,
            Ok(Err(e)) => {
                fail(&state, &event_tx, FeedSocketError::WebSocket(e.to_string()));
                return;
            }
            Err(_) => {
                fail(
                    &state,
                    &event_tx,
                    FeedSocketError::Timeout(format!(
                        "connecting to {} took longer than {:?}",
                        config.url, config.connect_timeout
                    )),
                );
                return;
            }
        }
    };

    if !state.advance(ConnectionState::Ready) {
        let _ = ws_stream.close(None).await;
        return;
    }
    info!("Connected to {}", config.url);
    let _ = event_tx.send(ClientEvent::Connected);

    match message_loop(&mut ws_stream, &config, &metrics, &shutdown_signal, &event_tx).await {
        Ok(()) => {
            let _ = ws_stream.close(None).await;
            close(&state, &event_tx);
        }
        Err(e) => fail(&state, &event_tx, e),
    }

    debug!("Client task exiting");
}

/// Read frames until shutdown (Ok) or a transport failure (Err)
async fn message_loop<P>(
    ws_stream: &mut FeedStream,
    config: &ClientConfig<P>,
    metrics: &AtomicMetrics,
    shutdown_signal: &Notify,
    event_tx: &Sender<ClientEvent<P::Message>>,
) -> Result<()>
where
    P: MessageParser,
{
    loop {
        if !config.shutdown_flag.load(Ordering::Acquire) {
            debug!("Shutdown flag detected in message loop");
            return Ok(());
        }

        tokio::select! {
            biased;

            _ = shutdown_signal.notified() => {
                debug!("Shutdown signal received in message loop");
                return Ok(());
            }

            msg = ws_stream.next() => {
                match msg {
                    Some(Ok(msg)) => {
                        let Some(ws_msg) = tungstenite_to_ws_message(msg) else {
                            continue;
                        };
                        metrics.increment_received();

                        match config.parser.parse(ws_msg).await {
                            Ok(message) => {
                                metrics.increment_parsed();
                                if event_tx.send(ClientEvent::Message(message)).is_err() {
                                    debug!("Event receiver dropped, closing connection");
                                    return Ok(());
                                }
                            }
                            Err(e) => {
                                metrics.increment_parse_errors();
                                warn!("Dropping frame: {}", e);
                                let reason = match e {
                                    FeedSocketError::ParseError(reason) => reason,
                                    other => other.to_string(),
                                };
                                let _ = event_tx.send(ClientEvent::ParseError(reason));
                            }
                        }
                    }
                    Some(Err(e)) => {
                        return Err(FeedSocketError::WebSocket(e.to_string()));
                    }
                    None => {
                        return Err(FeedSocketError::ConnectionClosed("stream ended".into()));
                    }
                }
            }
        }
    }
}

fn fail<M>(state: &AtomicConnectionState, event_tx: &Sender<ClientEvent<M>>, err: FeedSocketError) {
    if state.advance(ConnectionState::Error) {
        error!("{}", err);
        let _ = event_tx.send(ClientEvent::Error(err.to_string()));
    }
}

fn close<M>(state: &AtomicConnectionState, event_tx: &Sender<ClientEvent<M>>) {
    if state.advance(ConnectionState::Closed) {
        let _ = event_tx.send(ClientEvent::Disconnected);
    }
}

/// Convert tungstenite Message to WsMessage, skipping control frames
fn tungstenite_to_ws_message(msg: Message) -> Option<WsMessage> {
    match msg {
        Message::Text(text) => Some(WsMessage::Text(text)),
        Message::Binary(data) => Some(WsMessage::Binary(data)),
        Message::Ping(_) | Message::Pong(_) | Message::Close(_) | Message::Frame(_) => None,
    }
}
