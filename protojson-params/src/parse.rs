use protojson_ir::GenerationOptions;

use crate::{ParamSource, Result};

/// Unmarshal function used when nothing else is requested.
pub const DEFAULT_UNMARSHALER: &str = "jsonpb.Unmarshal";

/// Unmarshal expression that tolerates fields unknown to the message.
pub const ALLOW_UNKNOWN_UNMARSHALER: &str =
    "(&jsonpb.Unmarshaler{AllowUnknownFields: true}).Unmarshal";

/// One `key[=value]` entry with byte offsets into the parameter string.
#[derive(Debug)]
struct Entry<'a> {
    key: &'a str,
    key_offset: usize,
    value: Option<(&'a str, usize)>,
}

impl<'a> Entry<'a> {
    fn new(text: &'a str, offset: usize) -> Self {
        match text.split_once('=') {
            Some((key, value)) => {
                let trimmed = value.trim();
                let lead = value.len() - value.trim_start().len();
                Entry {
                    key: key.trim_end(),
                    key_offset: offset,
                    value: Some((trimmed, offset + key.len() + 1 + lead)),
                }
            }
            None => Entry {
                key: text,
                key_offset: offset,
                value: None,
            },
        }
    }

    fn key_span(&self) -> (usize, usize) {
        (self.key_offset, self.key.len())
    }

    /// A bare key reads as `true`.
    fn bool(&self, ctx: &ParamSource) -> Result<bool> {
        match self.value {
            None => Ok(true),
            Some(("true", _)) => Ok(true),
            Some(("false", _)) => Ok(false),
            Some(("", _)) => Err(ctx.missing_value(self.key, self.key_span())),
            Some((other, offset)) => {
                Err(ctx.invalid_bool(self.key, other, (offset, other.len())))
            }
        }
    }

    fn text(&self, ctx: &ParamSource) -> Result<&'a str> {
        match self.value {
            Some((value, _)) if !value.is_empty() => Ok(value),
            _ => Err(ctx.missing_value(self.key, self.key_span())),
        }
    }
}

fn entries(src: &str) -> Vec<Entry<'_>> {
    let mut offset = 0;
    let mut out = Vec::new();

    for raw in src.split(',') {
        let start = offset;
        offset += raw.len() + 1;

        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        let lead = raw.len() - raw.trim_start().len();
        out.push(Entry::new(text, start + lead));
    }

    out
}

/// Parse the plugin parameter string.
///
/// An explicit `unmarshaler` wins over `allow_unknown`. Empty entries are
/// skipped, so an empty string yields the defaults.
pub fn parse(param: &str) -> Result<GenerationOptions> {
    let ctx = ParamSource::new(param);
    let mut options = GenerationOptions::new(DEFAULT_UNMARSHALER);
    let mut allow_unknown = false;
    let mut unmarshaler = None;

    for entry in entries(param) {
        match entry.key {
            "enums_as_ints" => options.enums_as_ints = entry.bool(&ctx)?,
            "emit_defaults" => options.emit_defaults = entry.bool(&ctx)?,
            "orig_name" => options.orig_name = entry.bool(&ctx)?,
            "allow_unknown" => allow_unknown = entry.bool(&ctx)?,
            "unmarshaler" => unmarshaler = Some(entry.text(&ctx)?.to_string()),
            "additional_imports" => {
                let path = entry.text(&ctx)?;
                options.additional_imports.push(path.to_string());
            }
            other => return Err(ctx.unknown_key(other, entry.key_span())),
        }
    }

    options.unmarshaler = match (unmarshaler, allow_unknown) {
        (Some(explicit), _) => explicit,
        (None, true) => ALLOW_UNKNOWN_UNMARSHALER.to_string(),
        (None, false) => DEFAULT_UNMARSHALER.to_string(),
    };

    Ok(options)
}
