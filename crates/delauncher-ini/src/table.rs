//! Section/property table types.

/// Index of the reserved global section.
///
/// Always present, named `""`, holds properties written before the first header.
pub const GLOBAL_SECTION: usize = 0;

/// A single `key = value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    key: String,
    value: String,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A named, insertion-ordered group of properties. Keys may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    properties: Vec<Property>,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Find the `occurrence`-th value stored under `key`.
    ///
    /// Keys compare ASCII case-insensitively.
    pub fn find(&self, key: &str, occurrence: usize) -> Option<&str> {
        self.properties
            .iter()
            .filter(|p| p.key.eq_ignore_ascii_case(key))
            .nth(occurrence)
            .map(Property::value)
    }
}

/// Ordered table of sections produced by [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniTable {
    sections: Vec<Section>,
}

impl Default for IniTable {
    fn default() -> Self {
        Self::new()
    }
}

impl IniTable {
    /// Create a table holding only the empty global section.
    pub fn new() -> Self {
        Self {
            sections: vec![Section::new("")],
        }
    }

    /// Number of sections, the global section included.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn global(&self) -> &Section {
        &self.sections[GLOBAL_SECTION]
    }

    /// All sections in insertion order, the global section first.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// All sections except the global one, in insertion order.
    pub fn named_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().skip(GLOBAL_SECTION + 1)
    }

    /// Index of the named section. Names compare exactly.
    pub fn find_section(&self, name: &str) -> Option<usize> {
        self.sections
            .iter()
            .skip(GLOBAL_SECTION + 1)
            .position(|s| s.name == name)
            .map(|i| i + GLOBAL_SECTION + 1)
    }

    /// Look up the `occurrence`-th value of `key` inside section `index`.
    pub fn find_property(&self, index: usize, key: &str, occurrence: usize) -> Option<&str> {
        self.section(index)?.find(key, occurrence)
    }

    /// Return the index of section `name`, creating it at the end if missing.
    ///
    /// Re-opening an existing name keeps section names unique.
    pub fn push_section(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(index) = self.find_section(&name) {
            return index;
        }
        self.sections.push(Section::new(name));
        self.sections.len() - 1
    }

    /// Append a property to section `index`. Out-of-range indices are ignored.
    pub fn push_property(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        if let Some(section) = self.sections.get_mut(index) {
            section.properties.push(Property::new(key, value));
        }
    }
}
