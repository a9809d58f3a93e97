use super::*;

use crate::primitive::ToSymbol;
use crate::sexp::ConsList;


#[test]
fn list_macro_builds_proper_list() {
    let expected = Sexp::Cons(Cons::new(
        HeapSexp::new(1i64.into()),
        HeapSexp::new(Sexp::Cons(Cons::new(
            HeapSexp::new(2i64.into()),
            HeapSexp::new(Sexp::Nil),
        ))),
    ));
    assert_eq!(list!(1i64, 2i64), expected);
    assert_eq!(list!(), Sexp::Nil);
}

#[test]
fn cons_list_matches_list_macro() {
    let mut builder = ConsList::new();
    builder.append("a".to_symbol_or_panic());
    builder.append(2i64);
    builder.append('c');
    assert_eq!(builder.len(), 3);
    assert_eq!(
        builder.release(),
        list!("a".to_symbol_or_panic(), 2i64, 'c')
    );
}

#[test]
fn cons_list_with_tail() {
    let mut builder = ConsList::new();
    builder.append(1i64);
    builder.append(2i64);
    let sexp = builder.release_with_tail(3i64.into());
    assert_eq!(sexp.to_string(), "(1 2 . 3)");

    assert_eq!(ConsList::new().release(), Sexp::Nil);
}

#[test]
fn iter_marks_improper_tail() {
    let sexp: Sexp = Cons::new(HeapSexp::new(1i64.into()), HeapSexp::new(2i64.into())).into();
    let items = sexp.iter().collect::<Vec<_>>();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], (&Sexp::from(1i64), true));
    assert_eq!(items[1], (&Sexp::from(2i64), false));

    assert_eq!(Sexp::Nil.iter().count(), 0);
}

#[test]
fn external_form() {
    let sexp = list!(
        "quote".to_symbol_or_panic(),
        list!(1i64, -2i64),
        true,
        false,
        ' ',
        'x',
        SfsString::new("a\"b").unwrap(),
        Sexp::Nil,
    );
    assert_eq!(
        sexp.to_string(),
        "(quote (1 -2) #t #f #\\space #\\x \"a\\\"b\" ())"
    );
}

#[test]
fn display_form() {
    let sexp = list!(SfsString::new("hi there").unwrap(), 'x', 7i64);
    assert_eq!(format!("{:#}", sexp), "(hi there x 7)");
    assert_eq!(format!("{:#}", Sexp::from('q')), "q");
}

#[test]
fn booleans_are_canonical() {
    let a = Sexp::from(true);
    let b: Sexp = "#t".parse().unwrap();
    match (a, b) {
        (Sexp::Boolean(x), Sexp::Boolean(y)) => {
            assert!(std::ptr::eq(x, y));
            assert!(x.is_true());
            assert!(!y.is_false());
        }
        _ => panic!("expected booleans"),
    }
}

#[test]
fn printed_atoms_read_back() {
    let atoms: Vec<Sexp> = vec![
        Sexp::Nil,
        true.into(),
        false.into(),
        42i64.into(),
        (-7i64).into(),
        'a'.into(),
        ' '.into(),
        '('.into(),
        SfsString::new("with \"quotes\" and \\").unwrap().into(),
        "sym".to_symbol_or_panic().into(),
    ];
    for atom in atoms {
        let reread: Sexp = atom.to_string().parse().unwrap();
        assert_eq!(reread, atom);
    }
}

#[test]
fn real_numbers_print() {
    assert_eq!(Sexp::from(Number::Real(1.5)).to_string(), "1.5");
    assert_eq!(Sexp::from(Number::Real(-2.0)).to_string(), "-2.0");
    assert_ne!(
        Sexp::from(Number::Real(1.0)),
        Sexp::from(Number::Integer(1))
    );
    assert_eq!(
        list!(Number::Real(0.25), Number::Integer(3)).to_string(),
        "(0.25 3)"
    );
}

#[test]
fn long_lists_clone_compare_and_debug_iteratively() {
    let mut builder = ConsList::new();
    for i in 0..100_000i64 {
        builder.append(i);
    }
    let long = builder.release_with_tail('z'.into());

    let copy = long.clone();
    assert_eq!(copy, long);
    assert_eq!(copy.iter().count(), 100_001);

    let mut builder = ConsList::new();
    for i in 0..100_000i64 {
        builder.append(if i == 99_999 { -1 } else { i });
    }
    assert_ne!(builder.release_with_tail('z'.into()), long);

    let debug = format!("{:?}", long);
    assert!(debug.contains(" . Character('z')"));
}
