use std::fmt;

/// HTML that is safe to insert into the page as-is.
///
/// Only produced by the renderers in this crate; server text enters through
/// [`escape`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub(crate) fn trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Escapes arbitrary text so it renders literally inside an element or a
/// quoted attribute.
pub fn escape(text: &str) -> Markup {
    Markup(ammonia::clean_text(text))
}
