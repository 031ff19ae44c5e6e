use pdfobj::{pdf, Array, Dict, IndirectRef, Object};

#[test]
fn test_pdf_macro_null() {
    let value = pdf!(null);
    assert_eq!(value, Object::Null);
}

#[test]
fn test_pdf_macro_booleans() {
    assert_eq!(pdf!(true), Object::Boolean(true));
    assert_eq!(pdf!(false), Object::Boolean(false));
}

#[test]
fn test_pdf_macro_numbers() {
    assert_eq!(pdf!(42), Object::Integer(42));
    assert_eq!(pdf!(3.5), Object::Real(3.5));
    assert_eq!(pdf!(-123), Object::Integer(-123));
    assert_eq!(pdf!(-0.5), Object::Real(-0.5));
}

#[test]
fn test_pdf_macro_strings_and_names() {
    assert_eq!(pdf!("hello world"), Object::literal("hello world"));
    assert_eq!(pdf!(""), Object::literal(""));
    assert_eq!(pdf!(/XObject), Object::name("XObject"));
}

#[test]
fn test_pdf_macro_arrays() {
    assert_eq!(pdf!([]), Object::Array(Array::new()));

    let mixed = pdf!([1, "hello", true, null, /Name, -2]);
    assert_eq!(
        mixed,
        Object::Array(Array::from(vec![
            Object::Integer(1),
            Object::literal("hello"),
            Object::Boolean(true),
            Object::Null,
            Object::name("Name"),
            Object::Integer(-2),
        ]))
    );
    assert_eq!(mixed.canonical_string(), "[1 (hello) true null /Name -2]");
}

#[test]
fn test_pdf_macro_nested() {
    let value = pdf!({
        "Type": /Annot,
        "Rect": [0, 0, 100.5, 20],
        "Border": [0, 0, [3, 2]],
        "P": (Object::reference(4, 0)),
        "MK": { "BG": [1, 1, 0], "CA": "x" }
    });

    let mut mk = Dict::new();
    mk.insert("BG", Object::Array(Array::from_integers([1, 1, 0])));
    mk.insert("CA", Object::literal("x"));

    let mut rect = Array::from_integers([0, 0]);
    rect.push(Object::Real(100.5));
    rect.push(Object::Integer(20));

    let mut border = Array::from_integers([0, 0]);
    border.push(Object::Array(Array::from_integers([3, 2])));

    let mut expected = Dict::new();
    expected.insert("Type", Object::name("Annot"));
    expected.insert("Rect", Object::Array(rect));
    expected.insert("Border", Object::Array(border));
    expected.insert("P", Object::IndirectRef(IndirectRef::new(4, 0)));
    expected.insert("MK", Object::Dict(mk));

    assert_eq!(value, Object::Dict(expected));
    assert_eq!(
        value.canonical_string(),
        "<</Type/Annot/Rect[0 0 100.5 20]/Border[0 0[3 2]]/P 4 0 R/MK<</BG[1 1 0]/CA(x)>>>>"
    );
}

#[test]
fn test_pdf_macro_expressions() {
    let count = 7;
    let array = Array::from_names(["A"]);
    assert_eq!(pdf!(count), Object::Integer(7));
    assert_eq!(pdf!((array.clone())), Object::Array(array));
}
