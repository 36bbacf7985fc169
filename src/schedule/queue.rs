use std::collections::VecDeque;

use super::class::ClassRecord;

/// Classes still waiting for a slot, consumed from the front in input order.
///
/// The cursor counts classes consumed so far (placed or skipped). Deferred
/// classes are held aside and do not advance the cursor until they are
/// placed or skipped after being restored.
#[derive(Debug, Clone)]
pub struct PendingQueue<'a> {
    pending: VecDeque<&'a ClassRecord>,
    deferred: Vec<&'a ClassRecord>,
    skipped: Vec<&'a ClassRecord>,
    cursor: usize,
}

impl<'a> PendingQueue<'a> {
    pub fn new(classes: &'a [ClassRecord]) -> Self {
        Self {
            pending: classes.iter().collect(),
            deferred: Vec::new(),
            skipped: Vec::new(),
            cursor: 0,
        }
    }

    pub fn front(&self) -> Option<&'a ClassRecord> {
        self.pending.front().copied()
    }

    /// Consumes the front class after it was placed.
    pub fn advance(&mut self) {
        if self.pending.pop_front().is_some() {
            self.cursor += 1;
        }
    }

    /// Consumes the front class without placing it. It is never retried.
    pub fn skip(&mut self) {
        if let Some(class) = self.pending.pop_front() {
            self.skipped.push(class);
            self.cursor += 1;
        }
    }

    /// Moves the front class aside until [`restore_deferred`](Self::restore_deferred).
    pub fn defer(&mut self) {
        if let Some(class) = self.pending.pop_front() {
            self.deferred.push(class);
        }
    }

    /// Puts deferred classes back at the front, keeping their relative order.
    pub fn restore_deferred(&mut self) {
        for class in self.deferred.drain(..).rev() {
            self.pending.push_front(class);
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once every class was either placed or skipped.
    pub fn is_exhausted(&self) -> bool {
        self.pending.is_empty() && self.deferred.is_empty()
    }

    pub fn skipped(&self) -> &[&'a ClassRecord] {
        &self.skipped
    }

    /// Classes never consumed: still pending or held back.
    pub fn remaining(&self) -> impl Iterator<Item = &'a ClassRecord> + '_ {
        self.pending
            .iter()
            .chain(self.deferred.iter())
            .copied()
    }
}
