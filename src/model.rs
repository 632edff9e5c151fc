//! Core value types: [`Title`], [`Tag`], [`Content`] and the immutable
//! [`Cheatsheet`] entity they compose.
//!
//! A cheatsheet's *identity* is its title alone; two cheatsheets with equal
//! titles are the same logical entity even when their tags or contents
//! differ. Full value equality compares all three fields. The collection
//! layer ([`crate::list`]) keeps both notions distinct.

use crate::error::CheatbankError;
use crate::list::Identity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const TITLE_CONSTRAINTS: &str = "Titles should not be blank";
pub const TAG_CONSTRAINTS: &str = "Tag names should be alphanumeric";
pub const CONTENT_CONSTRAINTS: &str = "Contents should not be blank";

/// A validated, non-blank title. Raw string equality, no normalization:
/// "Quiz" and "quiz" are different titles.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    pub fn new(value: impl Into<String>) -> Result<Self, CheatbankError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CheatbankError::Parse(TITLE_CONSTRAINTS.to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Title {
    type Error = CheatbankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Title> for String {
    fn from(title: Title) -> String {
        title.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single alphanumeric label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Result<Self, CheatbankError> {
        let value = value.into();
        if value.is_empty() || !value.chars().all(char::is_alphanumeric) {
            return Err(CheatbankError::Parse(TAG_CONSTRAINTS.to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = CheatbankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> String {
        tag.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// An opaque, non-blank text fragment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Content(String);

impl Content {
    pub fn new(value: impl Into<String>) -> Result<Self, CheatbankError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CheatbankError::Parse(CONTENT_CONSTRAINTS.to_string()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Content {
    type Error = CheatbankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Content> for String {
    fn from(content: Content) -> String {
        content.0
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable cheatsheet: a title plus owned sets of tags and contents.
///
/// Edits are modeled as remove-old/insert-new at the collection layer; an
/// instance is never mutated after construction. The sets use `BTreeSet` so
/// rendering and serialization are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cheatsheet {
    title: Title,
    contents: BTreeSet<Content>,
    tags: BTreeSet<Tag>,
}

impl Cheatsheet {
    pub fn new(title: Title, contents: BTreeSet<Content>, tags: BTreeSet<Tag>) -> Self {
        Self {
            title,
            contents,
            tags,
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    pub fn contents(&self) -> &BTreeSet<Content> {
        &self.contents
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl Identity for Cheatsheet {
    /// The weaker equality notion: same title, regardless of data fields.
    fn same_identity(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

impl fmt::Display for Cheatsheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        write!(f, " Tags: ")?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        write!(f, " Contents: ")?;
        let mut first = true;
        for content in &self.contents {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", content)?;
            first = false;
        }
        Ok(())
    }
}
