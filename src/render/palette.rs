use indexmap::IndexMap;

use crate::render::Color;

/// Categorical scheme used to color points by director: the ten Tableau
/// colors followed by the twelve Set3 pastels, recycled only past 22
/// distinct directors.
const CATEGORICAL: [Color; 22] = [
    Color::from_rgb8(0x4e, 0x79, 0xa7),
    Color::from_rgb8(0xf2, 0x8e, 0x2c),
    Color::from_rgb8(0xe1, 0x57, 0x59),
    Color::from_rgb8(0x76, 0xb7, 0xb2),
    Color::from_rgb8(0x59, 0xa1, 0x4f),
    Color::from_rgb8(0xed, 0xc9, 0x49),
    Color::from_rgb8(0xaf, 0x7a, 0xa1),
    Color::from_rgb8(0xff, 0x9d, 0xa7),
    Color::from_rgb8(0x9c, 0x75, 0x5f),
    Color::from_rgb8(0xba, 0xb0, 0xab),
    Color::from_rgb8(0x8d, 0xd3, 0xc7),
    Color::from_rgb8(0xff, 0xff, 0xb3),
    Color::from_rgb8(0xbe, 0xba, 0xda),
    Color::from_rgb8(0xfb, 0x80, 0x72),
    Color::from_rgb8(0x80, 0xb1, 0xd3),
    Color::from_rgb8(0xfd, 0xb4, 0x62),
    Color::from_rgb8(0xb3, 0xde, 0x69),
    Color::from_rgb8(0xfc, 0xcd, 0xe5),
    Color::from_rgb8(0xd9, 0xd9, 0xd9),
    Color::from_rgb8(0xbc, 0x80, 0xbd),
    Color::from_rgb8(0xcc, 0xeb, 0xc5),
    Color::from_rgb8(0xff, 0xed, 0x6f),
];

const FALLBACK: Color = Color::rgb(0.6, 0.6, 0.6);

/// Ordinal director-to-color assignment.
///
/// Directors are assigned scheme colors in ascending name order so the same
/// dataset always yields the same coloring, independent of row order.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectorPalette {
    assignments: IndexMap<String, Color>,
}

impl DirectorPalette {
    #[must_use]
    pub fn from_directors<'a>(directors: impl Iterator<Item = &'a str>) -> Self {
        let mut names: Vec<&str> = directors.collect();
        names.sort_unstable();
        names.dedup();

        let assignments = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| (name.to_owned(), CATEGORICAL[index % CATEGORICAL.len()]))
            .collect();
        Self { assignments }
    }

    /// Color for a director; unknown or absent directors get a neutral gray.
    #[must_use]
    pub fn color_for(&self, director: Option<&str>) -> Color {
        director
            .and_then(|name| self.assignments.get(name).copied())
            .unwrap_or(FALLBACK)
    }

    #[must_use]
    pub fn directors(&self) -> impl Iterator<Item = &str> {
        self.assignments.keys().map(String::as_str)
    }
}
