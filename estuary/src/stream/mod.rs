//! Streaming search: pages flattened into one lazy sequence of items
//!
//! Two mutually exclusive pagination protocols behind the same external
//! shape. Both are strictly sequential (the next page is only fetched
//! after the previous page's items have been yielded), consume their
//! cursor state privately, and treat an empty page as the one and only
//! exhaustion signal. They differ deliberately in strictness: scroll
//! tolerates a missing scroll id by reusing the previous one, while
//! point-in-time pagination fails on a missing renewed pit id or sort
//! marker, because its correctness depends on a fresh id every page.

mod scroll;
mod search_after;

pub(crate) use scroll::scroll_stream;
pub(crate) use search_after::search_after_stream;

use std::pin::Pin;

use futures::Stream;

use crate::error::Result;
use crate::response::Item;

/// Lazy, single-consumption sequence of search results.
pub type ItemStream = Pin<Box<dyn Stream<Item = Result<Item>> + Send>>;
