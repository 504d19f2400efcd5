use filmscope_rs::api::{
    Controls, DirectorFilter, Metric, YearRange, distinct_directors, visible_records,
};
use filmscope_rs::data::{RawRow, RawValue, normalize, Record};

fn film(title: &str, year: &str, director: &str, rating: &str, runtime: &str) -> Record {
    let row: RawRow = [
        ("title", title),
        ("year", year),
        ("director", director),
        ("rating", rating),
        ("runtime", runtime),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_owned(), RawValue::Str(value.to_owned())))
    .collect();
    normalize(&row)
}

fn sample() -> Vec<Record> {
    vec![
        film("Nausicaä", "1984", "Hayao Miyazaki", "8.0", "117"),
        film("Grave of the Fireflies", "1988", "Isao Takahata", "8.5", "89"),
        film("Kiki's Delivery Service", "1989", "Hayao Miyazaki", "7.8", "103"),
        film("Only Yesterday", "1991", "Isao Takahata", "7.6", "118"),
        film("Broken", "1993", "Hayao Miyazaki", "", "100"),
    ]
}

fn controls(years: (f64, f64), director: DirectorFilter) -> Controls {
    Controls {
        metric: Metric::Runtime,
        director,
        years: YearRange::new(years.0, years.1),
    }
}

#[test]
fn non_finite_required_fields_are_dropped_never_defaulted() {
    let visible = visible_records(&sample(), &controls((1980.0, 2000.0), DirectorFilter::All));
    // The blank-rating row is excluded outright.
    assert_eq!(visible.len(), 4);
    assert!(visible.iter().all(|record| record.rating.is_finite()));
}

#[test]
fn year_bounds_are_inclusive_and_order_tolerant() {
    let all = sample();

    let visible = visible_records(&all, &controls((1988.0, 1989.0), DirectorFilter::All));
    let titles: Vec<_> = visible.iter().map(|r| r.title.as_deref().unwrap()).collect();
    assert_eq!(titles, vec!["Grave of the Fireflies", "Kiki's Delivery Service"]);

    // Crossed bounds behave the same as ordered ones. Compared by key:
    // these rows carry no gross column, so record equality is NaN-poisoned.
    let crossed = visible_records(&all, &controls((1989.0, 1988.0), DirectorFilter::All));
    let crossed_keys: Vec<_> = crossed.iter().map(Record::selection_key).collect();
    let visible_keys: Vec<_> = visible.iter().map(Record::selection_key).collect();
    assert_eq!(crossed_keys, visible_keys);
}

#[test]
fn director_filter_matches_exactly_unless_all() {
    let all = sample();
    let named = visible_records(
        &all,
        &controls(
            (1980.0, 2000.0),
            DirectorFilter::Named("Isao Takahata".to_owned()),
        ),
    );
    assert_eq!(named.len(), 2);
    assert!(named
        .iter()
        .all(|record| record.director.as_deref() == Some("Isao Takahata")));
}

#[test]
fn all_director_output_is_a_superset_of_any_named_director() {
    let all = sample();
    let everyone = visible_records(&all, &controls((1980.0, 2000.0), DirectorFilter::All));
    for name in ["Hayao Miyazaki", "Isao Takahata"] {
        let named = visible_records(
            &all,
            &controls((1980.0, 2000.0), DirectorFilter::Named(name.to_owned())),
        );
        for record in &named {
            assert!(
                everyone
                    .iter()
                    .any(|candidate| candidate.selection_key() == record.selection_key()),
                "record filtered under ALL but present under a named director"
            );
        }
    }
}

#[test]
fn configured_metric_field_must_be_finite() {
    let mut all = sample();
    // No gross column at all, so every row lacks a finite gross.
    let mut gross_controls = controls((1980.0, 2000.0), DirectorFilter::All);
    gross_controls.metric = Metric::Gross;
    assert!(visible_records(&all, &gross_controls).is_empty());

    all.push({
        let row: RawRow = [
            ("title", "Princess Mononoke"),
            ("year", "1997"),
            ("rating", "8.3"),
            ("gross", "$169,785,629"),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_owned(), RawValue::Str(value.to_owned())))
        .collect();
        normalize(&row)
    });
    let visible = visible_records(&all, &gross_controls);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title.as_deref(), Some("Princess Mononoke"));
}

#[test]
fn output_order_is_input_order() {
    let all = sample();
    let visible = visible_records(&all, &controls((1980.0, 2000.0), DirectorFilter::All));
    let positions: Vec<usize> = visible
        .iter()
        .map(|record| {
            all.iter()
                .position(|candidate| candidate.selection_key() == record.selection_key())
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn director_selector_options_are_distinct_and_sorted() {
    assert_eq!(
        distinct_directors(&sample()),
        vec!["Hayao Miyazaki".to_owned(), "Isao Takahata".to_owned()]
    );
}

#[test]
fn zero_results_is_a_valid_state_not_an_error() {
    let visible = visible_records(&sample(), &controls((1900.0, 1910.0), DirectorFilter::All));
    assert!(visible.is_empty());
}
