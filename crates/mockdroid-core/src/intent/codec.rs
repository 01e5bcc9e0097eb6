//! Intent <-> URI string codec (`data#Intent;key=value;...;end` form).
//!
//! Decoding walks the fragment one `key=value;` segment at a time with
//! bounds-checked slicing; truncated or unrecognized input surfaces as
//! `MalformedUri` with the original string and the failing offset, never as a
//! panic. Encoding is total.

use crate::component::ComponentName;
use crate::error::{MockDroidError, Result};
use crate::uri::{percent, Locator};

use super::{Extra, Intent};

/// Flag bit requesting strict `intent:` scheme handling on both encode and
/// decode. All other bits are ignored.
pub const URI_INTENT_SCHEME: u32 = 0x0000_0001;

/// Default action assigned when a URI carries no explicit `action=` field.
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";

const FRAGMENT_MARKER: &str = "#Intent;";

impl Intent {
    /// Decode an intent from its URI form.
    ///
    /// A string without an `#Intent;` fragment (or, under
    /// [`URI_INTENT_SCHEME`], without the `intent:` prefix) decodes to a
    /// viewer intent whose data locator is the whole string. Selector
    /// segments and the pre-fragment legacy format are rejected as
    /// [`MockDroidError::Unsupported`].
    pub fn parse_uri(uri: &str, flags: u32) -> Result<Intent> {
        tracing::trace!(uri, flags, "parsing intent uri");

        if flags & URI_INTENT_SCHEME != 0 && !uri.starts_with("intent:") {
            // Strict scheme requested but absent: the whole string is data.
            let mut intent = Intent::new();
            intent.set_action(ACTION_VIEW);
            intent.set_data(Locator::parse(uri)?);
            return Ok(intent);
        }

        let Some(frag) = uri.rfind('#') else {
            let mut intent = Intent::new();
            intent.set_action(ACTION_VIEW);
            intent.set_data(Locator::parse(uri)?);
            return Ok(intent);
        };

        if !uri[frag..].starts_with(FRAGMENT_MARKER) {
            return Err(MockDroidError::Unsupported(
                "legacy intent URI format (fragment is not #Intent;)",
            ));
        }

        let data_part = &uri[..frag];
        let mut intent = Intent::new();
        intent.set_action(ACTION_VIEW);
        let mut scheme: Option<String> = None;
        let mut selector_seen = false;
        let mut i = frag + FRAGMENT_MARKER.len();

        loop {
            let rest = uri
                .get(i..)
                .ok_or_else(|| MockDroidError::malformed(uri, i, "truncated intent fragment"))?;
            if rest.starts_with("end") {
                break;
            }
            if rest.is_empty() {
                return Err(MockDroidError::malformed(
                    uri,
                    i,
                    "intent fragment missing end token",
                ));
            }

            let semi = rest.find(';').map(|p| i + p).ok_or_else(|| {
                MockDroidError::malformed(uri, i, "unterminated field in intent fragment")
            })?;
            let eq = rest.find('=').map(|p| i + p).filter(|&e| e < semi);
            let value = match eq {
                Some(eq) => percent::decode(&uri[eq + 1..semi]),
                None => String::new(),
            };
            let segment = &uri[i..semi];

            if segment.starts_with("action=") {
                intent.set_action(value);
            } else if segment.starts_with("category=") {
                intent.add_category(value);
            } else if segment.starts_with("type=") {
                intent.mime_type = Some(value);
            } else if segment.starts_with("launchFlags=") {
                let parsed = decode_launch_flags(&value).ok_or_else(|| {
                    MockDroidError::malformed(uri, i, format!("invalid launchFlags: {value}"))
                })?;
                intent.set_flags(parsed);
            } else if segment.starts_with("package=") {
                intent.set_package(value);
            } else if segment.starts_with("component=") {
                // An unparsable component clears the field rather than erroring.
                intent.component = ComponentName::unflatten_from_string(&value);
            } else if segment.starts_with("scheme=") {
                scheme = Some(value);
            } else if segment.starts_with("sourceBounds=") {
                intent.source_bounds = Some(value);
            } else if segment == "SEL" {
                // Reported after the scan so a malformed later field wins.
                selector_seen = true;
            } else {
                decode_extra(&mut intent, uri, i, segment, eq, value)?;
            }

            i = semi + 1;
        }

        if selector_seen {
            return Err(MockDroidError::Unsupported(
                "selector segments are not supported",
            ));
        }

        if !data_part.is_empty() {
            let data = match data_part.strip_prefix("intent:") {
                Some(stripped) => match &scheme {
                    Some(s) => format!("{s}:{stripped}"),
                    None => stripped.to_string(),
                },
                None => data_part.to_string(),
            };
            if !data.is_empty() {
                let locator = Locator::parse(&data).map_err(|e| match e {
                    MockDroidError::MalformedUri { offset, reason, .. } => {
                        // Re-report against the full input, not the rebuilt locator.
                        MockDroidError::malformed(uri, offset, reason)
                    }
                    other => other,
                })?;
                intent.set_data(locator);
            }
        }

        Ok(intent)
    }

    /// Encode this intent into its URI form. Total: extras whose kind has no
    /// URI type tag (blobs, structured payloads) are skipped, everything else
    /// is representable.
    pub fn to_uri(&self, flags: u32) -> String {
        let mut uri = String::with_capacity(128);
        let mut scheme: Option<&str> = None;

        if let Some(data) = &self.data {
            let mut sdata = data.as_str();
            if flags & URI_INTENT_SCHEME != 0 {
                for (idx, c) in sdata.char_indices() {
                    if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                        continue;
                    }
                    if c == ':' && idx > 0 {
                        scheme = Some(&sdata[..idx]);
                        uri.push_str("intent:");
                        sdata = &sdata[idx + 1..];
                    }
                    break;
                }
            }
            uri.push_str(sdata);
        } else if flags & URI_INTENT_SCHEME != 0 {
            uri.push_str("intent:");
        }

        uri.push_str(FRAGMENT_MARKER);

        if let Some(s) = scheme {
            uri.push_str("scheme=");
            uri.push_str(s);
            uri.push(';');
        }
        if let Some(action) = &self.action {
            uri.push_str("action=");
            uri.push_str(&percent::encode(action));
            uri.push(';');
        }
        if let Some(mime_type) = &self.mime_type {
            uri.push_str("type=");
            uri.push_str(&percent::encode_allowing(mime_type, "/"));
            uri.push(';');
        }
        if self.flags != 0 {
            uri.push_str("launchFlags=0x");
            push_lower_hex(&mut uri, self.flags);
            uri.push(';');
        }
        if let Some(component) = &self.component {
            uri.push_str("component=");
            uri.push_str(&percent::encode_allowing(
                &component.flatten_to_short_string(),
                "/",
            ));
            uri.push(';');
        }
        for (key, value) in &self.extras {
            let Some(tag) = value.uri_tag() else {
                continue;
            };
            uri.push(tag);
            uri.push('.');
            uri.push_str(&percent::encode(key));
            uri.push('=');
            uri.push_str(&percent::encode(&value.encode_value()));
            uri.push(';');
        }

        uri.push_str("end");
        uri
    }
}

/// Parse a typed extra segment (`<tag>.<key>=<value>`) into the map.
fn decode_extra(
    intent: &mut Intent,
    uri: &str,
    offset: usize,
    segment: &str,
    eq: Option<usize>,
    value: String,
) -> Result<()> {
    let tag = segment
        .get(..2)
        .ok_or_else(|| MockDroidError::malformed(uri, offset, "truncated extra field"))?;
    let eq =
        eq.ok_or_else(|| MockDroidError::malformed(uri, offset, "extra field missing '='"))?;
    if eq < offset + 2 {
        return Err(MockDroidError::malformed(
            uri,
            offset,
            "extra field missing key",
        ));
    }
    let key = percent::decode(&uri[offset + 2..eq]);

    let extra = match tag {
        "S." => Extra::Str(value),
        // Platform boolean parsing: "true" case-insensitively, else false.
        "B." => Extra::Bool(value.eq_ignore_ascii_case("true")),
        "b." => Extra::Byte(value.parse().map_err(|_| {
            MockDroidError::malformed(uri, offset, format!("invalid byte extra: {value}"))
        })?),
        "c." => Extra::Char(value.chars().next().ok_or_else(|| {
            MockDroidError::malformed(uri, offset, "empty character extra")
        })?),
        "d." => Extra::Double(value.parse().map_err(|_| {
            MockDroidError::malformed(uri, offset, format!("invalid double extra: {value}"))
        })?),
        "f." => Extra::Float(value.parse().map_err(|_| {
            MockDroidError::malformed(uri, offset, format!("invalid float extra: {value}"))
        })?),
        "i." => Extra::Int(value.parse().map_err(|_| {
            MockDroidError::malformed(uri, offset, format!("invalid int extra: {value}"))
        })?),
        "l." => Extra::Long(value.parse().map_err(|_| {
            MockDroidError::malformed(uri, offset, format!("invalid long extra: {value}"))
        })?),
        "s." => Extra::Short(value.parse().map_err(|_| {
            MockDroidError::malformed(uri, offset, format!("invalid short extra: {value}"))
        })?),
        _ => {
            return Err(MockDroidError::malformed(
                uri,
                offset,
                format!("unknown extra type: {tag}"),
            ))
        }
    };
    intent.put_extra(key, extra);
    Ok(())
}

/// `Integer.decode`-style parse: `0x`/`0X`/`#` hex, otherwise decimal.
/// Negative and overflowing literals are rejected (`None`).
fn decode_launch_flags(value: &str) -> Option<u32> {
    if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .or_else(|| value.strip_prefix('#'))
    {
        u32::from_str_radix(hex, 16).ok()
    } else {
        value.parse::<u32>().ok()
    }
}

fn push_lower_hex(out: &mut String, value: u32) {
    use std::fmt::Write;
    // Infallible for String.
    let _ = write!(out, "{value:x}");
}
