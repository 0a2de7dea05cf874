//! In-memory representation of the CLI configuration file.
//!
//! The on-disk format is INI-style text: one `[section]` header per section
//! followed by `key = value` lines. Values are plain strings; nesting and
//! typed values are not supported.

use crate::error::{ConfigError, ConfigResult};

/// A named section holding key/value entries in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    /// Name of the section.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Key/value entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

/// Ordered mapping of section name to key/value entries.
///
/// Keys are unique within a section; assigning an existing key replaces its
/// value. The document is always read and written wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
}

impl ConfigDocument {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Value at `[section] key`, if present.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|candidate| candidate.name == section)?
            .entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value.as_str())
    }

    /// Assign `key = value` under `[section]`, creating the section if
    /// needed and replacing any existing value for the key.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        let section = self.section_mut(section);
        if let Some(entry) = section
            .entries
            .iter_mut()
            .find(|(candidate, _)| candidate == key)
        {
            entry.1 = value.to_string();
        } else {
            section.entries.push((key.to_string(), value.to_string()));
        }
    }

    /// Sections in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Whether the document holds no sections at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Parse INI-style text into a document.
    ///
    /// Blank lines and `#`/`;` comment lines are ignored. Entries must live
    /// under a `[section]` header; anything else is malformed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseFailed`] with the offending line number
    /// when the text does not follow the format.
    pub fn parse(text: &str) -> ConfigResult<Self> {
        let mut document = Self::new();
        let mut current: Option<String> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            let number = index + 1;

            if let Some(rest) = line.strip_prefix('[') {
                let Some(name) = rest.strip_suffix(']') else {
                    return Err(ConfigError::ParseFailed {
                        line: number,
                        reason: "unterminated section header",
                    });
                };
                let name = name.trim();
                if name.is_empty() {
                    return Err(ConfigError::ParseFailed {
                        line: number,
                        reason: "empty section name",
                    });
                }
                document.section_mut(name);
                current = Some(name.to_string());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::ParseFailed {
                    line: number,
                    reason: "expected a 'key = value' entry",
                });
            };
            let Some(section) = current.as_deref() else {
                return Err(ConfigError::ParseFailed {
                    line: number,
                    reason: "entry appears before any [section] header",
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::ParseFailed {
                    line: number,
                    reason: "entry has an empty key",
                });
            }
            document.set(section, key, value.trim());
        }

        Ok(document)
    }

    /// Serialize the document back to INI-style text.
    #[must_use]
    pub fn to_ini_string(&self) -> String {
        let mut output = String::new();
        for section in &self.sections {
            output.push('[');
            output.push_str(&section.name);
            output.push_str("]\n");
            for (key, value) in &section.entries {
                output.push_str(key);
                output.push_str(" = ");
                output.push_str(value);
                output.push('\n');
            }
            output.push('\n');
        }
        output
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        let index = self.section_index(name);
        &mut self.sections[index]
    }

    fn section_index(&mut self, name: &str) -> usize {
        if let Some(position) = self
            .sections
            .iter()
            .position(|candidate| candidate.name == name)
        {
            return position;
        }
        self.sections.push(Section {
            name: name.to_string(),
            entries: Vec::new(),
        });
        self.sections.len() - 1
    }
}
