//! `data-cmp-*` attribute parsing
//!
//! Attribute values are applied leniently: flags are set by presence alone,
//! unparsable values fall back to their defaults and unknown keys are
//! skipped.

use slidekit_model::{
    CarouselKind, CarouselOptions, DEFAULT_AUTOPLAY_DELAY_MS,
    InitialSlidePolicy, LayoutMode,
};

/// Prefix shared by every carousel option attribute.
pub const ATTRIBUTE_PREFIX: &str = "data-cmp-";

/// Keys that identify the component rather than configure it.
const RESERVED: &[&str] = &["is", "hook-carousel"];

/// Build options from raw element attributes, e.g.
/// `("data-cmp-layout", "auto")`. Attributes without the `data-cmp-`
/// prefix are ignored.
pub fn options_from_data_attributes<'a, I>(attributes: I) -> CarouselOptions
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut options = CarouselOptions::default();

    for (name, value) in attributes {
        let Some(key) = name.strip_prefix(ATTRIBUTE_PREFIX) else {
            continue;
        };
        if RESERVED.contains(&key) {
            continue;
        }

        match key {
            "autoplay" => options.autoplay = true,
            "autopause-disabled" => options.autopause_disabled = true,
            "delay" => options.delay_ms = parse_delay(value),
            "layout" => {
                options.layout = parse_or_default::<LayoutMode>(key, value);
            }
            "initial" => {
                options.initial =
                    parse_or_default::<InitialSlidePolicy>(key, value);
            }
            "type" => {
                options.kind = parse_or_default::<CarouselKind>(key, value);
            }
            other => {
                tracing::trace!(
                    attribute = other,
                    "ignoring carousel attribute"
                );
            }
        }
    }

    options
}

fn parse_or_default<T>(key: &str, value: &str) -> T
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    if value.trim().is_empty() {
        return T::default();
    }
    value.parse().unwrap_or_else(|err: T::Err| {
        tracing::warn!(
            attribute = key,
            value,
            error = %err,
            "unrecognised carousel attribute value; using default"
        );
        T::default()
    })
}

/// Milliseconds from a delay attribute. The leading numeric part is used
/// (`"3000ms"` reads as 3000); values without one use the default delay and
/// negative values clamp to zero.
fn parse_delay(value: &str) -> u64 {
    match leading_number(value) {
        Some(ms) if ms.is_finite() => ms.max(0.0).round() as u64,
        _ => DEFAULT_AUTOPLAY_DELAY_MS,
    }
}

fn leading_number(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in value.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    value[..end].parse().ok()
}
