use arch::arg::{Arg, ArgKind};
use ipp_parse::{
    escape::escape,
    operand::{classify, is_label, is_var},
    Classified, Error, Operand,
};

fn symbol(token: &str) -> (ArgKind, String) {
    match classify(token, Arg::Symb) {
        Ok(Classified::Symbol { kind, content }) => (kind, content),
        other => panic!("{token}: {other:?}"),
    }
}

macro_rules! symb {
    ($name:ident, $token:expr, $kind:expr, $content:expr) => {
        #[test]
        fn $name() {
            assert_eq!(symbol($token), ($kind, $content.to_string()));
        }
    };
}

macro_rules! symb_err {
    ($name:ident, $token:expr) => {
        #[test]
        fn $name() {
            let res = classify($token, Arg::Symb);
            assert!(
                matches!(&res, Err(err) if err.is_syntax()),
                "{}: {:?}",
                $token,
                res
            );
        }
    };
}

// ---- Variables ----
symb!(var_global, "GF@x", ArgKind::Var, "GF@x");
symb!(var_local, "LF@_tmp1", ArgKind::Var, "LF@_tmp1");
symb!(var_temp_specials, "TF@$%!?*", ArgKind::Var, "TF@$%!?*");
symb!(var_amp_escaped, "GF@a&b", ArgKind::Var, "GF@a&amp;b");

// ---- Literals ----
symb!(int_literal, "int@42", ArgKind::Int, "42");
symb!(int_negative, "int@-7", ArgKind::Int, "-7");
symb!(bool_true, "bool@true", ArgKind::Bool, "true");
symb!(bool_false, "bool@false", ArgKind::Bool, "false");
symb!(nil_literal, "nil@nil", ArgKind::Nil, "nil");
symb!(string_plain, "string@abc", ArgKind::String, "abc");
symb!(string_with_at, "string@a@b", ArgKind::String, "a@b");
symb!(string_escape, "string@a\\065b", ArgKind::String, "a\\065b");
symb!(string_markup, "string@<&>", ArgKind::String, "&lt;&amp;&gt;");

// ---- Malformed ----
symb_err!(bool_maybe, "bool@maybe");
symb_err!(nil_notnil, "nil@notnil");
symb_err!(string_empty, "string@");
symb_err!(int_empty, "int@");
symb_err!(string_short_escape, "string@a\\65b");
symb_err!(unknown_type, "float@1.0");
symb_err!(upper_type, "INT@1");
symb_err!(lower_frame, "gf@x");
symb_err!(no_separator, "42");
symb_err!(var_digit_head, "GF@1x");

#[test]
fn simple_classes() {
    assert_eq!(classify("GF@x", Arg::Var), Ok(Classified::Match));
    assert_eq!(classify("int@1", Arg::Var), Ok(Classified::NoMatch));
    assert_eq!(classify("loop", Arg::Label), Ok(Classified::Match));
    assert_eq!(classify("GF@x", Arg::Label), Ok(Classified::NoMatch));
    assert_eq!(classify("string", Arg::Type), Ok(Classified::Match));
    assert_eq!(classify("string@", Arg::Type), Ok(Classified::NoMatch));
}

#[test]
fn var_grammar() {
    assert!(is_var("GF@counter"));
    assert!(is_var("LF@&x"));
    assert!(is_var("TF@a1b2"));
    assert!(!is_var("GF@"));
    assert!(!is_var("GF@-x"));
    assert!(!is_var("XF@x"));
    assert!(!is_var("GF@x y"));
    assert!(!is_var("GF@x@y"));
    assert!(!is_var("GFx"));
}

#[test]
fn label_grammar() {
    assert!(is_label("main"));
    assert!(is_label("--end"));
    assert!(is_label("$ret_2"));
    assert!(is_label("*?!%"));
    assert!(!is_label("-"));
    assert!(!is_label("2nd"));
    assert!(!is_label("a&b"));
    assert!(!is_label("a-b"));
    assert!(!is_label("GF@x"));
    assert!(!is_label(""));
}

#[test]
fn operand_parse() {
    let op = Operand::parse(2, "int@5", Arg::Symb).unwrap();
    assert_eq!((op.pos(), op.kind(), op.content()), (2, ArgKind::Int, "5"));

    let op = Operand::parse(1, "GF@x", Arg::Var).unwrap();
    assert_eq!((op.kind(), op.content()), (ArgKind::Var, "GF@x"));

    let op = Operand::parse(1, "--loop", Arg::Label).unwrap();
    assert_eq!((op.kind(), op.content()), (ArgKind::Label, "--loop"));

    let op = Operand::parse(2, "bool", Arg::Type).unwrap();
    assert_eq!((op.kind(), op.content()), (ArgKind::Type, "bool"));

    assert_eq!(
        Operand::parse(1, "int@5", Arg::Var),
        Err(Error::Operand {
            token: "int@5".to_string(),
            expected: Arg::Var
        })
    );
}

#[test]
fn escape_passthrough() {
    for value in ["", "abc", "a b", "ěšč", "x@y#z"] {
        assert_eq!(escape(value), Ok(value.to_string()));
    }
}

#[test]
fn escape_markup() {
    assert_eq!(escape("a&b"), Ok("a&amp;b".to_string()));
    assert_eq!(escape("<tag>"), Ok("&lt;tag&gt;".to_string()));
    assert_eq!(escape("&lt;"), Ok("&amp;lt;".to_string()));
    assert_eq!(escape("a&<b"), Ok("a&amp;&lt;b".to_string()));
}

#[test]
fn escape_sequences() {
    assert!(escape("a\\065b").is_ok());
    assert!(escape("\\032\\010").is_ok());
    assert!(escape("x\\0920").is_ok());
    assert!(escape("a\\65b").is_err());
    assert!(escape("a\\").is_err());
    assert!(escape("a\\x41").is_err());
    assert_eq!(escape("a\\65b"), Err(Error::Escape("a\\65b".to_string())));
}
