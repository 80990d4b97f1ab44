//! Tests for the FilterObject derive

use filterkit::{Collection, FilterArg, FilterObject, Range, Scalar};

#[derive(FilterObject)]
struct PersonFilter {
    first_name: Option<Vec<String>>,
    #[property_name = "Rating"]
    rating_between: Option<Range<i32>>,
    #[filter_ignore]
    #[allow(dead_code)]
    page: u32,
}

#[derive(FilterObject)]
struct Borrowed<'a> {
    tags: &'a [&'a str],
}

#[test]
fn test_properties_in_declaration_order() {
    let filter = PersonFilter {
        first_name: Some(vec!["John".to_string(), "Tim".to_string()]),
        rating_between: None,
        page: 2,
    };
    let properties = filter.filter_properties();

    assert_eq!(properties.len(), 2);
    assert_eq!(properties[0].name, "FirstName");
    assert_eq!(
        properties[0].arg,
        FilterArg::Collection(Collection {
            items: vec![
                Some(Scalar::String("John".to_string())),
                Some(Scalar::String("Tim".to_string())),
            ],
            nullable_items: false,
        })
    );
    assert_eq!(properties[1].name, "Rating");
    assert_eq!(properties[1].arg, FilterArg::Null);
}

#[test]
fn test_range_field() {
    let filter = PersonFilter {
        first_name: None,
        rating_between: Some(Range::half_open(4, 5)),
        page: 0,
    };
    let properties = filter.filter_properties();
    assert!(matches!(properties[1].arg, FilterArg::Range(_)));
}

#[test]
fn test_lifetime_generic_struct() {
    let tags = ["a", "b"];
    let filter = Borrowed { tags: &tags };
    let properties = filter.filter_properties();
    assert_eq!(properties[0].name, "Tags");
    assert!(matches!(&properties[0].arg, FilterArg::Collection(c) if c.len() == 2));
}
