//! End-to-end feed scenarios against a mock quote server

mod common;

use common::{open, poll_until, quote_frame, MockFeedServer};
use market_depth::{Direction, FeedStatus, LadderView, RowCollection};

#[tokio::test]
async fn test_update_for_same_key_moves_up() {
    let server = MockFeedServer::start(vec![quote_frame("AAPL-1", 100.0, 101.0)], false).await;
    let mut conn = open(&server.ws_url()).await;
    let mut view = LadderView::default();

    assert!(poll_until(&mut conn, view.rows_mut(), |c, rows| {
        c.status().is_ready() && rows.len() == 1
    })
    .await);
    assert!(view.render_pass(|frame| {
        assert_eq!(frame.rows[0].bid.attributes.direction, Direction::Flat);
    }));

    // A later quote for the same key
    view.rows_mut().upsert(market_depth::QuoteRecord {
        symbol_level: "AAPL-1".to_string(),
        level: 1,
        bid: 105.0,
        bid_quantity: 500.0,
        offer: 101.0,
        offer_quantity: 400.0,
    });

    let change = view.tracker().diff("AAPL-1", 105.0, 101.0);
    assert_eq!(change.bid.direction, Direction::Up);
    assert!((change.bid.percent_change - 5.0).abs() < 1e-9);

    view.render_pass(|frame| {
        assert_eq!(frame.rows.len(), 1);
        assert_eq!(frame.rows[0].bid.price_text, "105");
        assert_eq!(frame.rows[0].bid.attributes.direction, Direction::Up);
    });

    conn.close().await;
}

#[tokio::test]
async fn test_two_frames_same_key_keep_one_row() {
    let server = MockFeedServer::start(
        vec![
            quote_frame("AAPL-1", 100.0, 101.0),
            quote_frame("AAPL-1", 105.0, 101.0),
        ],
        false,
    )
    .await;
    let mut conn = open(&server.ws_url()).await;
    let mut rows = RowCollection::new();

    assert!(poll_until(&mut conn, &mut rows, |_, rows| rows.revision() == 2).await);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows.get("AAPL-1").unwrap().bid, 105.0);
    assert!(conn.last_message_at().is_some());
}

#[tokio::test]
async fn test_malformed_frame_between_valid_frames() {
    let malformed = serde_json::json!({
        "type": "marketData",
        "symbolLevel": "AAPL-9",
        "level": 1,
        "bidQuantity": 500,
        "offer": 101,
        "offerQuantity": 400,
    })
    .to_string();

    let server = MockFeedServer::start(
        vec![
            quote_frame("AAPL-1", 100.0, 101.0),
            malformed,
            "not json".to_string(),
            r#"{"type":"heartbeat"}"#.to_string(),
            quote_frame("AAPL-2", 99.0, 102.0),
        ],
        false,
    )
    .await;
    let mut conn = open(&server.ws_url()).await;
    let mut rows = RowCollection::new();

    assert!(poll_until(&mut conn, &mut rows, |c, rows| {
        rows.len() == 2 && c.decode_errors() == 2
    })
    .await);

    assert!(rows.get("AAPL-1").is_some());
    assert!(rows.get("AAPL-2").is_some());
    assert!(rows.get("AAPL-9").is_none());
    assert_eq!(conn.status(), &FeedStatus::Ready);
    assert!(conn
        .last_decode_error()
        .unwrap()
        .starts_with("Error parsing incoming data"));

    conn.close().await;
}

#[tokio::test]
async fn test_transport_error_keeps_rows_visible() {
    let server = MockFeedServer::start(vec![quote_frame("AAPL-1", 100.0, 101.0)], true).await;
    let mut conn = open(&server.ws_url()).await;
    let mut rows = RowCollection::new();

    assert!(poll_until(&mut conn, &mut rows, |c, _| {
        matches!(c.status(), FeedStatus::Error(_))
    })
    .await);

    assert_eq!(rows.len(), 1);
    assert!(conn
        .status()
        .error_message()
        .unwrap()
        .starts_with("WebSocket error occurred"));
}

#[tokio::test]
async fn test_no_delivery_after_close() {
    let server = MockFeedServer::start(vec![quote_frame("AAPL-1", 100.0, 101.0)], false).await;
    let mut conn = open(&server.ws_url()).await;
    let mut rows = RowCollection::new();

    conn.close().await;

    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let summary = conn.poll(&mut rows);

    assert_eq!(summary.applied, 0);
    assert!(rows.is_empty());
    assert_eq!(conn.status(), &FeedStatus::Closed);
}

#[tokio::test]
async fn test_reconnect_resumes_delivery() {
    let server = MockFeedServer::start(vec![quote_frame("AAPL-1", 100.0, 101.0)], false).await;
    let mut conn = open(&server.ws_url()).await;
    let mut rows = RowCollection::new();

    assert!(poll_until(&mut conn, &mut rows, |_, rows| rows.revision() == 1).await);

    conn.reconnect().await.unwrap();
    assert!(conn.is_loading());

    assert!(poll_until(&mut conn, &mut rows, |c, rows| {
        c.status().is_ready() && rows.revision() == 2
    })
    .await);
    assert_eq!(rows.len(), 1);

    conn.close().await;
}

#[tokio::test]
async fn test_resubscribe_same_schema_is_noop() {
    let server = MockFeedServer::start(Vec::new(), false).await;
    let mut conn = open(&server.ws_url()).await;

    let reopened = conn
        .resubscribe(market_depth::TableSchema::market_depth())
        .await
        .unwrap();
    assert!(!reopened);

    let mut other = market_depth::TableSchema::market_depth();
    other.columns.truncate(3);
    assert!(conn.resubscribe(other.clone()).await.unwrap());
    assert_eq!(conn.schema(), &other);

    conn.close().await;
}
