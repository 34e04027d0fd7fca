//! Two-phase render pass
//!
//! Phase one reads every diff with a shared borrow of the tracker and yields
//! a [`LadderFrame`] plus a [`PendingCommit`]. Phase two consumes the
//! commit token after the frame has been drawn, writing every baseline.

use tracing::debug;

use super::presenter::{RowDisplay, RowPresenter};
use super::rows::RowCollection;
use super::tracker::ChangeTracker;

/// Everything needed to draw the ladder once
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LadderFrame {
    pub rows: Vec<RowDisplay>,
    /// Row revision the frame was computed from
    pub revision: u64,
}

impl LadderFrame {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Baselines to write once the frame has been drawn
#[derive(Debug)]
#[must_use = "baselines are only advanced when the commit is applied"]
pub struct PendingCommit {
    entries: Vec<(String, f64, f64)>,
}

impl PendingCommit {
    /// Write every baseline of the pass
    pub fn commit(self, tracker: &mut ChangeTracker) {
        for (symbol_level, bid, offer) in &self.entries {
            tracker.commit(symbol_level, *bid, *offer);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read phase: diff every row against the tracker without touching it
pub fn prepare_pass(
    rows: &RowCollection,
    tracker: &ChangeTracker,
    presenter: &RowPresenter,
) -> (LadderFrame, PendingCommit) {
    let snapshot = rows.snapshot();
    let mut displays = Vec::with_capacity(snapshot.len());
    let mut entries = Vec::with_capacity(snapshot.len());

    for (index, row) in snapshot.iter().enumerate() {
        let change = tracker.diff(&row.symbol_level, row.bid, row.offer);
        displays.push(presenter.present(row, index, &change));
        entries.push((row.symbol_level.clone(), row.bid, row.offer));
    }

    let frame = LadderFrame {
        rows: displays,
        revision: rows.revision(),
    };
    (frame, PendingCommit { entries })
}

/// Rows, baselines and the last computed frame, created with the view
#[derive(Debug, Default)]
pub struct LadderView {
    rows: RowCollection,
    tracker: ChangeTracker,
    presenter: RowPresenter,
    frame: LadderFrame,
    rendered_revision: Option<u64>,
}

impl LadderView {
    pub fn new(presenter: RowPresenter) -> Self {
        Self {
            presenter,
            ..Self::default()
        }
    }

    /// Mutable rows for the feed to upsert into
    pub fn rows_mut(&mut self) -> &mut RowCollection {
        &mut self.rows
    }

    pub fn rows(&self) -> &RowCollection {
        &self.rows
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    /// Last computed frame. Stays valid (arrows included) until the next pass.
    pub fn frame(&self) -> &LadderFrame {
        &self.frame
    }

    /// True when rows changed since the last pass
    pub fn needs_render(&self) -> bool {
        self.rendered_revision != Some(self.rows.revision())
    }

    /// Compute a new frame if rows changed. The returned commit must be
    /// applied with [`LadderView::commit`] after the frame is drawn.
    pub fn refresh(&mut self) -> Option<PendingCommit> {
        if !self.needs_render() {
            return None;
        }

        let (frame, pending) = prepare_pass(&self.rows, &self.tracker, &self.presenter);
        debug!(
            "[Ladder] Pass at revision {} with {} rows",
            frame.revision,
            frame.len()
        );
        self.rendered_revision = Some(frame.revision);
        self.frame = frame;
        Some(pending)
    }

    pub fn commit(&mut self, pending: PendingCommit) {
        pending.commit(&mut self.tracker);
    }

    /// Diff, draw, then commit. Returns false when nothing changed.
    pub fn render_pass<F>(&mut self, draw: F) -> bool
    where
        F: FnOnce(&LadderFrame),
    {
        match self.refresh() {
            Some(pending) => {
                draw(&self.frame);
                self.commit(pending);
                true
            }
            None => false,
        }
    }
}
