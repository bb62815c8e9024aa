use celplate::source::{Errors, Location, SourceError};
use pretty_assertions::assert_eq;

#[test]
fn source_error_renders_location_and_message() {
    let err = SourceError::new(Location::new(5, 2, 3), "boom");
    assert_eq!(err.to_string(), "line 2, column 3: boom");
}

#[test]
fn rebased_error_moves_into_document_coordinates() {
    let err = SourceError::new(Location::new(1, 1, 2), "boom").rebased(Location::new(10, 3, 4));
    assert_eq!(err.location, Location::new(11, 3, 5));
    assert_eq!(err.message, "boom");
}

#[test]
fn empty_collection_is_ok() {
    let errors = Errors::new();
    assert!(errors.is_empty());
    assert_eq!(errors.len(), 0);
    assert!(errors.into_result().is_ok());
}

#[test]
fn none_is_ignored_when_extending() {
    let mut errors = Errors::new();
    errors.extend(None::<SourceError>);
    errors.extend([None, Some(SourceError::new(Location::start(), "kept")), None].into_iter().flatten());
    assert_eq!(errors.len(), 1);
}

#[test]
fn errors_are_joined_in_order_and_located_subset_is_extracted() {
    let first = SourceError::new(Location::new(1, 1, 2), "foo");
    let second = SourceError::new(Location::new(9, 3, 4), "bar");

    let mut errors = Errors::new();
    errors.push(first.clone());
    errors.push(second.clone());
    errors.push("internal error");

    assert_eq!(
        errors.to_string(),
        "line 1, column 2: foo; line 3, column 4: bar; internal error"
    );

    let located: Vec<_> = errors.located().cloned().collect();
    assert_eq!(located, [first.clone(), second.clone()]);

    let err = errors.into_result().unwrap_err();
    assert_eq!(err.into_located(), [first, second]);
}

#[test]
fn append_keeps_order() {
    let mut errors = Errors::from(SourceError::new(Location::start(), "a"));
    let mut more = Errors::new();
    more.push(SourceError::new(Location::new(1, 1, 2), "b"));
    errors.append(more);

    assert_eq!(errors.to_string(), "line 1, column 1: a; line 1, column 2: b");
    assert_eq!(errors.iter().count(), 2);
}
