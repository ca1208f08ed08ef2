//! Registry for managing multiple carousels keyed by CarouselKey

use std::collections::HashMap;
use std::fmt::{self, Display};

use slidekit_model::CarouselOptions;

use crate::carousel::{
    Carousel, CarouselEvent, CarouselHost, CarouselMarkup, PageContext,
};
use crate::error::CarouselError;

/// Unique key identifying a carousel on a page (usually its element id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarouselKey(String);

impl CarouselKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CarouselKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One carousel waiting to be constructed.
#[derive(Debug)]
pub struct CarouselEntry<'h, H> {
    pub key: CarouselKey,
    pub options: CarouselOptions,
    pub markup: CarouselMarkup,
    pub host: &'h mut H,
}

/// A carousel that could not be constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationFailure {
    pub key: CarouselKey,
    pub error: CarouselError,
}

#[derive(Debug, Default)]
pub struct CarouselRegistry {
    carousels: HashMap<CarouselKey, Carousel>,
}

impl CarouselRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct every entry independently. A failing carousel is logged
    /// and reported but never prevents the others from initializing.
    /// Keys already registered are skipped.
    pub fn register_all<'h, H, I>(
        &mut self,
        page: &PageContext,
        entries: I,
    ) -> Vec<RegistrationFailure>
    where
        H: CarouselHost + 'h,
        I: IntoIterator<Item = CarouselEntry<'h, H>>,
    {
        let mut failures = Vec::new();
        for entry in entries {
            if self.carousels.contains_key(&entry.key) {
                tracing::debug!(
                    key = %entry.key,
                    "carousel already initialized"
                );
                continue;
            }
            match Carousel::new(entry.options, page, &entry.markup, entry.host)
            {
                Ok(carousel) => {
                    self.carousels.insert(entry.key, carousel);
                }
                Err(error) => {
                    tracing::error!(
                        key = %entry.key,
                        error = %error,
                        "unexpected error when creating carousel"
                    );
                    failures.push(RegistrationFailure {
                        key: entry.key,
                        error,
                    });
                }
            }
        }
        failures
    }

    pub fn get(&self, key: &CarouselKey) -> Option<&Carousel> {
        self.carousels.get(key)
    }

    pub fn get_mut(&mut self, key: &CarouselKey) -> Option<&mut Carousel> {
        self.carousels.get_mut(key)
    }

    pub fn remove(&mut self, key: &CarouselKey) -> Option<Carousel> {
        self.carousels.remove(key)
    }

    /// Route an event to one carousel. Returns `false` for unknown keys.
    pub fn dispatch<H: CarouselHost>(
        &mut self,
        key: &CarouselKey,
        event: CarouselEvent,
        host: &mut H,
    ) -> bool {
        match self.carousels.get_mut(key) {
            Some(carousel) => {
                carousel.handle(event, host);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.carousels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.carousels.is_empty()
    }

    /// Return a snapshot of all keys currently in the registry.
    pub fn keys(&self) -> Vec<CarouselKey> {
        self.carousels.keys().cloned().collect()
    }
}
