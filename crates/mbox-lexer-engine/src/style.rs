use serde::{Deserialize, Serialize};

/// Semantic category of a whole line, as produced by the classifier and
/// corrected by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCategory {
    /// Anything that is not a recognised header line.
    Default,
    /// `From <source> <date>` envelope line.
    From,
    /// `Date: MM/DD/YY HH:MM am|pm` line.
    Date,
    /// `Subject: ...` line.
    Subject,
}

impl LineCategory {
    /// The style a line of this category starts with.
    pub fn style(self) -> Style {
        match self {
            LineCategory::Default => Style::Default,
            LineCategory::From => Style::From,
            LineCategory::Date => Style::Date,
            LineCategory::Subject => Style::Subject,
        }
    }

    pub fn name(self) -> &'static str {
        self.style().name()
    }

    pub fn is_default(self) -> bool {
        matches!(self, LineCategory::Default)
    }
}

/// Per-position style tag handed to the renderer.
///
/// The numeric ids are stable; consumers may store them directly.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Default = 0,
    /// Keyword part of a `From` line.
    From = 1,
    /// Everything after `From `.
    FromValue = 2,
    /// Keyword part of a `Date:` line.
    Date = 3,
    /// Everything after `Date: `.
    DateValue = 4,
    /// Keyword part of a `Subject:` line.
    Subject = 5,
    /// Everything after `Subject: `.
    SubjectValue = 6,
}

impl Style {
    /// All styles in id order.
    pub const ALL: [Style; 7] = [
        Style::Default,
        Style::From,
        Style::FromValue,
        Style::Date,
        Style::DateValue,
        Style::Subject,
        Style::SubjectValue,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Style> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Style::Default => "default",
            Style::From => "from",
            Style::FromValue => "from_value",
            Style::Date => "date",
            Style::DateValue => "date_value",
            Style::Subject => "subject",
            Style::SubjectValue => "subject_value",
        }
    }

    /// The payload style that follows a header keyword. Identity for
    /// styles that have no value part.
    pub fn value_style(self) -> Style {
        match self {
            Style::From => Style::FromValue,
            Style::Date => Style::DateValue,
            Style::Subject => Style::SubjectValue,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_all() {
        for style in Style::ALL {
            assert_eq!(Style::from_id(style.id()), Some(style));
        }
        assert_eq!(Style::from_id(7), None);
    }

    #[test]
    fn keyword_styles_have_value_styles() {
        assert_eq!(Style::From.value_style(), Style::FromValue);
        assert_eq!(Style::Date.value_style(), Style::DateValue);
        assert_eq!(Style::Subject.value_style(), Style::SubjectValue);
    }

    #[test]
    fn value_style_is_identity_elsewhere() {
        assert_eq!(Style::Default.value_style(), Style::Default);
        assert_eq!(Style::DateValue.value_style(), Style::DateValue);
    }

    #[test]
    fn category_start_styles() {
        assert_eq!(LineCategory::Default.style(), Style::Default);
        assert_eq!(LineCategory::From.style(), Style::From);
        assert_eq!(LineCategory::Date.style(), Style::Date);
        assert_eq!(LineCategory::Subject.style(), Style::Subject);
    }

    #[test]
    fn names_match_serde_names() {
        use serde::de::{IntoDeserializer, value::StrDeserializer};

        for style in Style::ALL {
            let de: StrDeserializer<'_, serde::de::value::Error> = style.name().into_deserializer();
            assert_eq!(Style::deserialize(de).unwrap(), style);
        }
    }
}
