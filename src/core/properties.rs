//! Signing properties file handling.
//!
//! Reads and writes the line-oriented `key=value` file (`key.properties`)
//! that holds keystore location and credentials. A missing file is a normal
//! state and loads as an empty [`RawConfig`].

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::Chars;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::core::types::{PropertyKey, PropertyValue};
use crate::error::{PropertiesError, Result};

/// Parsed `key=value` pairs with escapes decoded.
///
/// Values are wiped from memory when the config is dropped.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    entries: BTreeMap<PropertyKey, PropertyValue>,
}

impl RawConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties text.
    ///
    /// Whitespace around keys and values is trimmed, blank lines and lines
    /// starting with `#` are skipped, and the first unescaped `=` splits key
    /// from value. Backslash escapes are decoded the way Java properties
    /// loading decodes them: `\\`, `\t`, `\n`, `\r`, `\f` and `\uXXXX` map to
    /// their characters and a backslash before any other character is
    /// dropped. A repeated key keeps its last value.
    ///
    /// # Arguments
    ///
    /// * `contents` - Properties text
    /// * `origin` - Path reported in parse errors
    ///
    /// # Errors
    ///
    /// Returns `PropertiesError::Parse` for a line without `=`, with an
    /// empty key, or with a malformed `\uXXXX` escape.
    pub fn parse(contents: &str, origin: &Path) -> Result<Self> {
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
        let mut entries = BTreeMap::new();

        for (idx, raw) in contents.lines().enumerate() {
            let line = trim_unescaped(raw);
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let malformed = |reason| PropertiesError::Parse {
                path: origin.to_path_buf(),
                line: idx + 1,
                content: line.to_string(),
                reason,
            };

            let Some(split) = separator_index(line) else {
                return Err(malformed("expected key=value").into());
            };
            let key = unescape(trim_unescaped(&line[..split])).map_err(malformed)?;
            if key.is_empty() {
                return Err(malformed("empty key").into());
            }
            let value = unescape(trim_unescaped(&line[split + 1..])).map_err(malformed)?;

            if let Some(mut previous) = entries.insert(key, value) {
                previous.zeroize();
            }
        }

        Ok(Self { entries })
    }

    /// Value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<PropertyKey>, value: impl Into<PropertyValue>) {
        if let Some(mut previous) = self.entries.insert(key.into(), value.into()) {
            previous.zeroize();
        }
    }

    /// Whether the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as properties text, one `key=value` line per entry.
    ///
    /// Backslashes, control characters and non-ASCII characters are escaped,
    /// as are spaces at either end of a value, so the text loads back to the
    /// same entries here and in the build.
    pub fn to_properties_string(&self) -> String {
        let mut output = String::new();
        for (key, value) in &self.entries {
            escape_into(&mut output, key, true);
            output.push('=');
            escape_into(&mut output, value, false);
            output.push('\n');
        }
        output
    }
}

const MALFORMED_UNICODE: &str = "malformed \\uXXXX escape";

/// Trim whitespace, keeping a trailing whitespace character that is escaped.
fn trim_unescaped(text: &str) -> &str {
    let text = text.trim_start();
    let trimmed = text.trim_end();
    let backslashes = trimmed.chars().rev().take_while(|c| *c == '\\').count();
    if backslashes % 2 == 1 {
        if let Some(escaped) = text[trimmed.len()..].chars().next() {
            return &text[..trimmed.len() + escaped.len_utf8()];
        }
    }
    trimmed
}

/// Byte index of the first `=` not preceded by an escaping backslash.
fn separator_index(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '=' => return Some(idx),
            _ => {}
        }
    }
    None
}

fn unescape(raw: &str) -> std::result::Result<String, &'static str> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => out.push(unicode_escape(&mut chars)?),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Decode the digits of a `\uXXXX` escape, joining a UTF-16 surrogate pair.
fn unicode_escape(chars: &mut Chars<'_>) -> std::result::Result<char, &'static str> {
    let unit = code_unit(chars)?;
    let code = if (0xD800..=0xDBFF).contains(&unit) {
        if chars.next() != Some('\\') || chars.next() != Some('u') {
            return Err(MALFORMED_UNICODE);
        }
        let low = code_unit(chars)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(MALFORMED_UNICODE);
        }
        0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
    } else {
        unit
    };
    char::from_u32(code).ok_or(MALFORMED_UNICODE)
}

fn code_unit(chars: &mut Chars<'_>) -> std::result::Result<u32, &'static str> {
    let mut unit = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(MALFORMED_UNICODE)?;
        unit = unit * 16 + digit;
    }
    Ok(unit)
}

fn escape_into(out: &mut String, text: &str, is_key: bool) {
    let content_end = text.trim_end_matches(' ').len();
    let mut leading = true;

    for (idx, ch) in text.char_indices() {
        let edge_space = ch == ' ' && (leading || idx >= content_end);
        leading = leading && ch == ' ';

        match ch {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            ' ' if edge_space || is_key => out.push_str("\\ "),
            '=' | ':' if is_key => {
                out.push('\\');
                out.push(ch);
            }
            '#' | '!' if is_key && idx == 0 => {
                out.push('\\');
                out.push(ch);
            }
            c if c.is_ascii_control() || !c.is_ascii() => {
                for unit in c.encode_utf16(&mut [0; 2]) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
            c => out.push(c),
        }
    }
}

impl Drop for RawConfig {
    fn drop(&mut self) {
        for value in self.entries.values_mut() {
            value.zeroize();
        }
    }
}

impl fmt::Debug for RawConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawConfig")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Load a properties file.
///
/// A path that is not an existing regular file yields an empty config.
///
/// # Errors
///
/// Returns `PropertiesError::Read` if the file exists but cannot be read,
/// or `PropertiesError::Parse` if a line is malformed.
pub fn load(path: &Path) -> Result<RawConfig> {
    debug!(path = %path.display(), "loading signing properties");

    if !path.is_file() {
        debug!(path = %path.display(), "properties file absent, using empty config");
        return Ok(RawConfig::new());
    }

    let contents = fs::read_to_string(path)
        .map(Zeroizing::new)
        .map_err(|source| PropertiesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let config = RawConfig::parse(&contents, path)?;

    debug!(keys = config.len(), "signing properties loaded");
    Ok(config)
}

/// Write properties text to a file readable only by its owner.
///
/// Creates missing parent directories.
///
/// # Errors
///
/// Returns `PropertiesError::AlreadyExists` if the file exists and `force`
/// is false, or `PropertiesError::Write` if writing fails.
pub fn write(path: &Path, contents: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PropertiesError::AlreadyExists(path.to_path_buf()).into());
    }

    let write_err = |source| PropertiesError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)?;

    // Restrict permissions on the properties file (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_err)?;
    }

    debug!(path = %path.display(), "signing properties written");
    Ok(())
}
