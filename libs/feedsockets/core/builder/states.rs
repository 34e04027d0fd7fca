//! Type-state markers for the builder pattern
//!
//! These types track which required fields have been set on the builder at
//! compile time, so `build()` only exists once URL and parser are present.

use std::marker::PhantomData;

/// Marker trait for URL state
pub trait UrlState {}

/// URL has not been set
pub struct NoUrl;
impl UrlState for NoUrl {}

/// URL has been set
pub struct HasUrl;
impl UrlState for HasUrl {}

/// Marker trait for parser state
pub trait ParserState {}

/// Parser has not been set
pub struct NoParser;
impl ParserState for NoParser {}

/// Parser has been set
pub struct HasParser;
impl ParserState for HasParser {}

/// Phantom marker to prevent direct construction
#[derive(Debug, Clone, Copy)]
pub struct TypeState<U, P> {
    _url: PhantomData<U>,
    _parser: PhantomData<P>,
}

impl<U, P> TypeState<U, P> {
    pub(crate) fn new() -> Self {
        Self {
            _url: PhantomData,
            _parser: PhantomData,
        }
    }
}
