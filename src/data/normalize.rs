use crate::data::record::{RawRow, RawValue, Record};

/// Priority-ordered column aliases per canonical field.
///
/// Resolution is case-sensitive and first-match-wins: once an alias is
/// present with a non-blank value, later aliases are never consulted.
pub const TITLE_ALIASES: &[&str] = &["title", "Title", "name", "Name", "film", "Film"];
pub const YEAR_ALIASES: &[&str] = &["year", "Year", "release_year", "ReleaseYear"];
pub const DIRECTOR_ALIASES: &[&str] = &["director", "Director", "dir", "Dir"];
pub const RATING_ALIASES: &[&str] = &[
    "imdb_rating",
    "IMDb",
    "imdb",
    "rating",
    "Rating",
    "score",
    "Score",
];
pub const RUNTIME_ALIASES: &[&str] = &[
    "runtime",
    "Runtime",
    "running_time",
    "RunningTime",
    "minutes",
    "Minutes",
    "duration",
    "Duration",
];
pub const GROSS_ALIASES: &[&str] = &[
    "gross",
    "Gross",
    "box_office",
    "BoxOffice",
    "revenue",
    "Revenue",
];

/// Returns the first alias value present with a non-blank trimmed text form.
#[must_use]
pub fn pick(row: &RawRow, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|alias| row.get(*alias).and_then(RawValue::non_blank_text))
}

/// Coerces a picked cell to a number.
///
/// Currency and thousands-separator characters (`,`, `￥`, `$`) are stripped
/// before parsing; anything that fails to parse to a finite value degrades
/// to `NaN`. Textual infinities count as unusable, not as numbers.
#[must_use]
pub fn coerce_number(text: Option<&str>) -> f64 {
    let Some(text) = text else {
        return f64::NAN;
    };

    let cleaned: String = text
        .chars()
        .filter(|ch| !matches!(ch, ',' | '￥' | '$'))
        .collect();

    match cleaned.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

/// Maps an arbitrary input row to a canonical [`Record`].
///
/// Total and pure: malformed input degrades to `NaN`/absent fields, never an
/// error. The untouched row is retained for diagnostics.
#[must_use]
pub fn normalize(row: &RawRow) -> Record {
    Record {
        title: pick(row, TITLE_ALIASES),
        year: coerce_number(pick(row, YEAR_ALIASES).as_deref()),
        director: pick(row, DIRECTOR_ALIASES),
        rating: coerce_number(pick(row, RATING_ALIASES).as_deref()),
        runtime: coerce_number(pick(row, RUNTIME_ALIASES).as_deref()),
        gross: coerce_number(pick(row, GROSS_ALIASES).as_deref()),
        raw: row.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{coerce_number, normalize};
    use crate::data::record::{RawRow, RawValue};

    fn row(cells: &[(&str, &str)]) -> RawRow {
        cells
            .iter()
            .map(|(key, value)| ((*key).to_owned(), RawValue::Str((*value).to_owned())))
            .collect()
    }

    #[test]
    fn coercion_strips_currency_and_separator_characters() {
        assert_eq!(coerce_number(Some("$1,234")), 1234.0);
        assert_eq!(coerce_number(Some("￥500")), 500.0);
        assert!(coerce_number(Some("abc")).is_nan());
        assert!(coerce_number(None).is_nan());
    }

    #[test]
    fn textual_infinities_coerce_to_nan() {
        assert!(coerce_number(Some("inf")).is_nan());
        assert!(coerce_number(Some("Infinity")).is_nan());
        assert!(coerce_number(Some("-inf")).is_nan());
        assert!(coerce_number(Some("NaN")).is_nan());
    }

    #[test]
    fn blank_alias_values_fall_through_to_later_aliases() {
        let record = normalize(&row(&[("title", "   "), ("name", "Totoro")]));
        assert_eq!(record.title.as_deref(), Some("Totoro"));
    }
}
