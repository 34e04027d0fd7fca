//! Feed connection lifecycle
//!
//! Owns one live socket per subscription. Decoded quotes are applied to the
//! caller's [`RowCollection`] when the owner polls, so every row mutation
//! happens on the owner's thread, one message at a time, in arrival order.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use feedsockets::{ClientEvent, Metrics, WebSocketClient, WebSocketClientBuilder};
use tracing::{debug, error, info, warn};

use super::parser::FeedParser;
use super::types::FeedMessage;
use crate::application::ladder::RowCollection;
use crate::domain::TableSchema;

/// Observable connection status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedStatus {
    Connecting,
    Ready,
    /// Transport failure, with a human-readable message. Rows stay visible.
    Error(String),
    Closed,
}

impl FeedStatus {
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedStatus::Connecting)
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, FeedStatus::Ready)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FeedStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for FeedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedStatus::Connecting => f.write_str("Connecting..."),
            FeedStatus::Ready => f.write_str("Ready"),
            FeedStatus::Error(_) => f.write_str("Error"),
            FeedStatus::Closed => f.write_str("Closed"),
        }
    }
}

/// What a single [`FeedConnection::poll`] did
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PollSummary {
    /// Quote updates upserted into the rows
    pub applied: usize,
    /// Well-formed messages with other tags
    pub ignored: usize,
    /// Frames rejected by the decoder
    pub decode_errors: usize,
}

/// Live subscription to the quote feed
pub struct FeedConnection {
    url: String,
    schema: TableSchema,
    connect_timeout: Duration,
    client: Option<WebSocketClient<FeedParser>>,
    status: FeedStatus,
    decode_errors: u64,
    last_decode_error: Option<String>,
    last_message_at: Option<DateTime<Utc>>,
}

impl FeedConnection {
    /// Open the socket. Starts in `Connecting`; `poll` moves it to `Ready`.
    pub async fn open(
        url: impl Into<String>,
        schema: TableSchema,
        connect_timeout: Duration,
    ) -> feedsockets::Result<Self> {
        let url = url.into();
        let client = Self::connect(&url, connect_timeout).await?;
        Ok(Self::from_parts(url, schema, connect_timeout, Some(client)))
    }

    fn from_parts(
        url: String,
        schema: TableSchema,
        connect_timeout: Duration,
        client: Option<WebSocketClient<FeedParser>>,
    ) -> Self {
        let status = if client.is_some() {
            FeedStatus::Connecting
        } else {
            FeedStatus::Closed
        };

        Self {
            url,
            schema,
            connect_timeout,
            client,
            status,
            decode_errors: 0,
            last_decode_error: None,
            last_message_at: None,
        }
    }

    async fn connect(
        url: &str,
        connect_timeout: Duration,
    ) -> feedsockets::Result<WebSocketClient<FeedParser>> {
        info!("[Feed] Opening {}", url);
        WebSocketClientBuilder::new()
            .url(url)
            .parser(FeedParser::new())
            .connect_timeout(connect_timeout)
            .build()
            .await
    }

    /// Apply every event that has arrived since the last poll, in order
    pub fn poll(&mut self, rows: &mut RowCollection) -> PollSummary {
        let mut summary = PollSummary::default();

        let events = match &self.client {
            Some(client) => client.drain_events(),
            None => return summary,
        };

        for event in events {
            self.apply_event(event, rows, &mut summary);
        }

        summary
    }

    fn apply_event(
        &mut self,
        event: ClientEvent<FeedMessage>,
        rows: &mut RowCollection,
        summary: &mut PollSummary,
    ) {
        match event {
            ClientEvent::Connected => {
                info!("[Feed] Connected to {}", self.url);
                self.status = FeedStatus::Ready;
            }
            ClientEvent::Message(FeedMessage::MarketData(record)) => {
                rows.upsert(record);
                summary.applied += 1;
                self.last_message_at = Some(Utc::now());
            }
            ClientEvent::Message(FeedMessage::Other(tag)) => {
                debug!("[Feed] Ignoring '{}' message", tag);
                summary.ignored += 1;
            }
            ClientEvent::ParseError(reason) => {
                warn!("[Feed] Error parsing incoming data: {}", reason);
                self.decode_errors += 1;
                summary.decode_errors += 1;
                self.last_decode_error = Some(format!("Error parsing incoming data: {}", reason));
            }
            ClientEvent::Error(reason) => {
                error!("[Feed] WebSocket error observed: {}", reason);
                self.status = FeedStatus::Error(format!("WebSocket error occurred: {}", reason));
            }
            ClientEvent::Disconnected => {
                info!("[Feed] WebSocket closed");
                self.status = FeedStatus::Closed;
            }
        }
    }

    /// Release the socket. Frames not yet polled are discarded.
    pub async fn close(&mut self) {
        if let Some(client) = self.client.take() {
            info!("[Feed] Closing {}", self.url);
            if let Err(e) = client.shutdown().await {
                warn!("[Feed] Error during shutdown: {}", e);
            }
        }
        self.status = FeedStatus::Closed;
    }

    /// Close and open a fresh socket to the same URL
    pub async fn reconnect(&mut self) -> feedsockets::Result<()> {
        self.close().await;
        let client = Self::connect(&self.url, self.connect_timeout).await?;
        self.client = Some(client);
        self.status = FeedStatus::Connecting;
        Ok(())
    }

    /// Switch to a different schema, re-opening the socket only if it changed
    pub async fn resubscribe(&mut self, schema: TableSchema) -> feedsockets::Result<bool> {
        if schema == self.schema {
            return Ok(false);
        }

        info!("[Feed] Schema changed, re-subscribing");
        self.schema = schema;
        self.reconnect().await?;
        Ok(true)
    }

    pub fn status(&self) -> &FeedStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn schema(&self) -> &TableSchema {
        &self.schema
    }

    /// Total frames rejected since the connection was created
    pub fn decode_errors(&self) -> u64 {
        self.decode_errors
    }

    pub fn last_decode_error(&self) -> Option<&str> {
        self.last_decode_error.as_deref()
    }

    /// When the last quote update was applied
    pub fn last_message_at(&self) -> Option<DateTime<Utc>> {
        self.last_message_at
    }

    pub fn metrics(&self) -> Option<Metrics> {
        self.client.as_ref().map(|c| c.metrics())
    }
}
