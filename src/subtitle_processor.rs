use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::SubtitleError;

// @module: ASS dialogue parsing and reassembly

/// Section marker that introduces the dialogue block of an ASS file
pub const EVENTS_MARKER: &str = "[Events]";

/// Real-world ASS files carry one more dialogue column than the Format line
/// declares, so the column count is derived as `format fields + 1` and the
/// text column starts two positions before that.
/// TODO: check against libass whether the span should equal the declared
/// field count exactly; files in the wild depend on the current arithmetic.
pub const FORMAT_FIELD_OVERHANG: usize = 1;

// @const: Override tag span regex ({\i1}, {\pos(4,6)}, ...)
static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{[^{}]*\}").unwrap()
});

// @struct: Single dialogue cue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueEntry {
    // @field: Fixed leading fields (layer, times, style, actor, margins,
    // effect), joined by commas and never re-split after parsing
    pub attributes: String,

    // @field: Free-form dialogue text, possibly containing override tags
    pub text: String,
}

impl DialogueEntry {
    /// Creates a new dialogue entry
    pub fn new(attributes: impl Into<String>, text: impl Into<String>) -> Self {
        DialogueEntry {
            attributes: attributes.into(),
            text: text.into(),
        }
    }

    /// Pair these attributes with a freshly translated text
    pub fn with_translated_text(&self, text: impl Into<String>) -> Self {
        DialogueEntry {
            attributes: self.attributes.clone(),
            text: text.into(),
        }
    }

    /// Number of `{...}` override tag spans embedded in the text
    pub fn override_tag_count(&self) -> usize {
        OVERRIDE_TAG_REGEX.find_iter(&self.text).count()
    }

    /// Render the entry back into an `attributes,text` data line
    pub fn to_line(&self) -> String {
        format!("{},{}", self.attributes, self.text)
    }
}

impl fmt::Display for DialogueEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_line())
    }
}

/// A parsed ASS script: opaque header plus the ordered dialogue entries
#[derive(Debug)]
pub struct AssScript {
    /// Everything before the [Events] marker, passed through untouched
    pub header: String,

    /// Dialogue entries in file order
    pub entries: Vec<DialogueEntry>,

    /// Number of comma tokens that form the attribute span of each entry
    pub attribute_span: usize,
}

impl AssScript {
    /// Parse raw file content into a header and ordered dialogue entries.
    ///
    /// The first non-blank line after the [Events] marker is the Format
    /// definition; every later non-blank line is split into the attribute
    /// span and the text remainder. Blank lines are discarded. Pure function,
    /// no I/O.
    pub fn parse(content: &str) -> Result<Self, SubtitleError> {
        let marker_pos = content
            .find(EVENTS_MARKER)
            .ok_or(SubtitleError::MissingEventsSection)?;

        let header = content[..marker_pos].to_string();
        let body = &content[marker_pos + EVENTS_MARKER.len()..];

        let mut lines = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty());

        let format_line = lines.next().ok_or(SubtitleError::MissingFormatLine)?;
        let field_count = format_line.split(',').count();
        let attribute_span = (field_count + FORMAT_FIELD_OVERHANG).saturating_sub(2);

        let entries = lines
            .map(|line| Self::split_data_line(line, attribute_span))
            .collect();

        Ok(AssScript {
            header,
            entries,
            attribute_span,
        })
    }

    /// Split one data line into its attribute span and text remainder.
    ///
    /// The text column is everything after the attribute span, so commas
    /// inside the dialogue survive. A line with too few columns keeps all of
    /// its content in `attributes` and gets an empty text.
    fn split_data_line(line: &str, attribute_span: usize) -> DialogueEntry {
        let mut pieces: Vec<&str> = line.splitn(attribute_span + 1, ',').collect();
        let text = if pieces.len() > attribute_span {
            pieces.split_off(attribute_span).join(",")
        } else {
            String::new()
        };
        DialogueEntry::new(pieces.join(","), text)
    }

    /// Reassemble an output document from the preserved header and the
    /// surviving entries: header, regenerated [Events] line, then one
    /// `attributes,text` line per entry in order. No sorting, no dedup.
    pub fn assemble(header: &str, entries: &[DialogueEntry]) -> String {
        let body_len: usize = entries
            .iter()
            .map(|e| e.attributes.len() + e.text.len() + 2)
            .sum();
        let mut output = String::with_capacity(header.len() + EVENTS_MARKER.len() + 1 + body_len);

        output.push_str(header);
        output.push_str(EVENTS_MARKER);
        output.push('\n');
        for entry in entries {
            output.push_str(&entry.to_line());
            output.push('\n');
        }

        output
    }
}

impl fmt::Display for AssScript {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "ASS Script")?;
        writeln!(f, "Header bytes: {}", self.header.len())?;
        writeln!(f, "Attribute span: {}", self.attribute_span)?;
        writeln!(f, "Entries: {}", self.entries.len())?;
        Ok(())
    }
}
