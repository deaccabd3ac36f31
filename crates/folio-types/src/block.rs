//! Content blocks: the structural units an article body is made of.
//!
//! A [`ContentBlock`] is a sum type with one variant per block kind. Each
//! variant carries only the payload relevant to it. On the wire the block is
//! an object tagged by a `"type"` field using the CMS vocabulary
//! (`heading_1`, `bulleted_list`, `column_list`, ...). Missing payload fields
//! deserialize to their empty default rather than failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// One checkbox entry of a [`ContentBlock::TodoList`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub checked: bool,
}

impl TodoItem {
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Self {
            text: text.into(),
            checked,
        }
    }
}

/// One unit of document structure.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    #[serde(rename = "heading_1")]
    Heading1 {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        #[serde(default)]
        text: String,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        #[serde(default)]
        text: String,
    },
    Paragraph {
        #[serde(default)]
        text: String,
    },
    BulletedList {
        #[serde(default)]
        items: Vec<String>,
    },
    NumberedList {
        #[serde(default)]
        items: Vec<String>,
    },
    TodoList {
        #[serde(default)]
        items: Vec<TodoItem>,
    },
    Quote {
        #[serde(default)]
        text: String,
    },
    Callout {
        #[serde(default)]
        text: String,
        #[serde(default)]
        icon: String,
    },
    Code {
        #[serde(default)]
        text: String,
        #[serde(default)]
        language: String,
    },
    Divider,
    Image {
        #[serde(default)]
        url: String,
        #[serde(default)]
        caption: String,
    },
    Video {
        #[serde(default)]
        url: String,
        #[serde(default)]
        caption: String,
    },
    Embed {
        #[serde(default)]
        url: String,
        #[serde(default)]
        caption: String,
    },
    /// A collapsible block. Its children are opaque payload for diffing.
    Toggle {
        #[serde(default)]
        text: String,
        #[serde(default)]
        children: Vec<ContentBlock>,
    },
    Table {
        #[serde(default)]
        has_column_header: bool,
        #[serde(default)]
        has_row_header: bool,
        #[serde(default)]
        rows: Vec<Vec<String>>,
    },
    /// Side-by-side columns, each an ordered sequence of child blocks.
    ColumnList {
        #[serde(default)]
        columns: Vec<Vec<ContentBlock>>,
    },
}

impl ContentBlock {
    /// Build a heading of the given level (1 to 3).
    pub fn heading(level: u8, text: impl Into<String>) -> Result<Self, TypeError> {
        let text = text.into();
        match level {
            1 => Ok(Self::Heading1 { text }),
            2 => Ok(Self::Heading2 { text }),
            3 => Ok(Self::Heading3 { text }),
            other => Err(TypeError::InvalidHeadingLevel(other)),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    pub fn quote(text: impl Into<String>) -> Self {
        Self::Quote { text: text.into() }
    }

    pub fn code(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self::Code {
            text: text.into(),
            language: language.into(),
        }
    }

    pub fn bulleted_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::BulletedList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn numbered_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NumberedList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// The tag of this block.
    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Heading1 { .. } => BlockKind::Heading1,
            Self::Heading2 { .. } => BlockKind::Heading2,
            Self::Heading3 { .. } => BlockKind::Heading3,
            Self::Paragraph { .. } => BlockKind::Paragraph,
            Self::BulletedList { .. } => BlockKind::BulletedList,
            Self::NumberedList { .. } => BlockKind::NumberedList,
            Self::TodoList { .. } => BlockKind::TodoList,
            Self::Quote { .. } => BlockKind::Quote,
            Self::Callout { .. } => BlockKind::Callout,
            Self::Code { .. } => BlockKind::Code,
            Self::Divider => BlockKind::Divider,
            Self::Image { .. } => BlockKind::Image,
            Self::Video { .. } => BlockKind::Video,
            Self::Embed { .. } => BlockKind::Embed,
            Self::Toggle { .. } => BlockKind::Toggle,
            Self::Table { .. } => BlockKind::Table,
            Self::ColumnList { .. } => BlockKind::ColumnList,
        }
    }

    /// The block's text field, for the variants that carry one.
    ///
    /// Captions of media blocks are not considered text.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Heading1 { text }
            | Self::Heading2 { text }
            | Self::Heading3 { text }
            | Self::Paragraph { text }
            | Self::Quote { text }
            | Self::Callout { text, .. }
            | Self::Code { text, .. }
            | Self::Toggle { text, .. } => Some(text),
            Self::BulletedList { .. }
            | Self::NumberedList { .. }
            | Self::TodoList { .. }
            | Self::Divider
            | Self::Image { .. }
            | Self::Video { .. }
            | Self::Embed { .. }
            | Self::Table { .. }
            | Self::ColumnList { .. } => None,
        }
    }

    /// The block's text if it is present and non-empty.
    pub fn non_empty_text(&self) -> Option<&str> {
        self.text().filter(|t| !t.is_empty())
    }

    /// Heading level (1 to 3), or `None` for non-heading blocks.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading1 { .. } => Some(1),
            Self::Heading2 { .. } => Some(2),
            Self::Heading3 { .. } => Some(3),
            _ => None,
        }
    }

    /// Whether a modification of this block is reported word by word.
    pub fn is_word_diffable(&self) -> bool {
        self.kind().is_word_diffable()
    }

    /// Number of whitespace-separated words in the block's own text.
    pub fn word_count(&self) -> usize {
        self.text().map_or(0, |t| t.split_whitespace().count())
    }
}

/// Fieldless tag of a [`ContentBlock`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    #[serde(rename = "heading_1")]
    Heading1,
    #[serde(rename = "heading_2")]
    Heading2,
    #[serde(rename = "heading_3")]
    Heading3,
    Paragraph,
    BulletedList,
    NumberedList,
    TodoList,
    Quote,
    Callout,
    Code,
    Divider,
    Image,
    Video,
    Embed,
    Toggle,
    Table,
    ColumnList,
}

impl BlockKind {
    /// Every kind, in declaration order.
    pub const ALL: [BlockKind; 17] = [
        Self::Heading1,
        Self::Heading2,
        Self::Heading3,
        Self::Paragraph,
        Self::BulletedList,
        Self::NumberedList,
        Self::TodoList,
        Self::Quote,
        Self::Callout,
        Self::Code,
        Self::Divider,
        Self::Image,
        Self::Video,
        Self::Embed,
        Self::Toggle,
        Self::Table,
        Self::ColumnList,
    ];

    /// The wire tag of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading1 => "heading_1",
            Self::Heading2 => "heading_2",
            Self::Heading3 => "heading_3",
            Self::Paragraph => "paragraph",
            Self::BulletedList => "bulleted_list",
            Self::NumberedList => "numbered_list",
            Self::TodoList => "todo_list",
            Self::Quote => "quote",
            Self::Callout => "callout",
            Self::Code => "code",
            Self::Divider => "divider",
            Self::Image => "image",
            Self::Video => "video",
            Self::Embed => "embed",
            Self::Toggle => "toggle",
            Self::Table => "table",
            Self::ColumnList => "column_list",
        }
    }

    /// Headings and paragraphs get word-level detail when modified.
    pub fn is_word_diffable(&self) -> bool {
        matches!(
            self,
            Self::Heading1 | Self::Heading2 | Self::Heading3 | Self::Paragraph
        )
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TypeError::UnknownBlockKind(s.to_string()))
    }
}
