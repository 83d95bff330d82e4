//! Line oriented batch slug generation
//!
//! The engine consumes any line source (anything iterable over
//! `io::Result<String>`, e.g. `BufRead::lines()`) and slugifies every
//! non-blank line. A failing line is recorded and processing moves on; only
//! a failure of the line source itself stops the batch.
//!
//! Line numbers are 1-based and count every line read, including blank lines
//! that produce no item.

use std::io;
use std::ops::ControlFlow;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::{Error, SlugError};
use crate::slug::{slugify_with_options, SlugOptions};

/// Outcome of slugifying a single value
pub type SlugResult = Result<String, SlugError>;

/// One processed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    pub line_number: usize,
    /// The raw line as read from the source
    pub original: String,
    pub result: SlugResult,
}

impl BatchItem {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    pub fn slug(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    pub fn failure(&self) -> Option<&SlugError> {
        self.result.as_ref().err()
    }
}

impl Serialize for BatchItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BatchItem", 4)?;
        state.serialize_field("line_number", &self.line_number)?;
        state.serialize_field("original", &self.original)?;
        state.serialize_field("slug", &self.slug())?;
        state.serialize_field("error", &self.failure())?;
        state.end()
    }
}

/// Counts derived from a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Ordered outcome of one pass over a line source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    items: Vec<BatchItem>,
}

impl BatchReport {
    pub fn items(&self) -> &[BatchItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<BatchItem> {
        self.items
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    pub fn summary(&self) -> BatchSummary {
        let succeeded = self.succeeded();
        BatchSummary {
            total: self.total(),
            succeeded,
            failed: self.total() - succeeded,
        }
    }

    /// Successful slugs, in input order
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(BatchItem::slug)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<BatchItem> for BatchReport {
    fn from_iter<T: IntoIterator<Item = BatchItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Serialize for BatchReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BatchReport", 2)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("summary", &self.summary())?;
        state.end()
    }
}

/// A batch cut short by a failing line source
///
/// Items produced before the fault are kept in `report`.
#[derive(thiserror::Error, Debug)]
#[error("batch interrupted after {} item(s): {source}", .report.total())]
pub struct PartialBatch {
    pub report: BatchReport,
    #[source]
    pub source: Error,
}

/// Applies the slugifier, with optional decoration, across a line source
#[derive(Debug, Clone, Default)]
pub struct BatchEngine {
    options: SlugOptions,
}

impl BatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SlugOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SlugOptions {
        &self.options
    }

    /// Process every line and collect the results
    pub fn process<I>(&self, lines: I) -> Result<BatchReport, PartialBatch>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut items = Vec::new();

        let outcome = self.process_with_callback(lines, |item| {
            items.push(item);
            ControlFlow::Continue(())
        });

        let report = BatchReport::from_iter(items);

        match outcome {
            Ok(_) => Ok(report),
            Err(source) => Err(PartialBatch { report, source }),
        }
    }

    /// Process every line, handing each item to `on_item` as soon as it exists
    ///
    /// Returning `ControlFlow::Break` from `on_item` stops reading; the return
    /// value then is `Ok(ControlFlow::Break(()))`. A line source error is
    /// returned as `Error::LineSourceFault`.
    pub fn process_with_callback<I, F>(
        &self,
        lines: I,
        mut on_item: F,
    ) -> Result<ControlFlow<()>, Error>
    where
        I: IntoIterator<Item = io::Result<String>>,
        F: FnMut(BatchItem) -> ControlFlow<()>,
    {
        let mut line_number = 0;

        for line in lines {
            let text = line.map_err(|source| Error::LineSourceFault {
                line: line_number,
                source,
            })?;
            line_number += 1;

            if text.is_empty() {
                continue;
            }

            let item = self.slugify_line(line_number, text);

            if on_item(item).is_break() {
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    fn slugify_line(&self, line_number: usize, text: String) -> BatchItem {
        let result = slugify_with_options(&text, &self.options);

        BatchItem {
            line_number,
            original: text,
            result,
        }
    }
}

/// Process `lines` with plain slugs and collect the results
pub fn process<I>(lines: I) -> Result<BatchReport, PartialBatch>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    BatchEngine::new().process(lines)
}

/// Process `lines` with plain slugs, streaming each item to `on_item`
pub fn process_with_callback<I, F>(lines: I, on_item: F) -> Result<ControlFlow<()>, Error>
where
    I: IntoIterator<Item = io::Result<String>>,
    F: FnMut(BatchItem) -> ControlFlow<()>,
{
    BatchEngine::new().process_with_callback(lines, on_item)
}
