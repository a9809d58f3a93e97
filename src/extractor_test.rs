use super::*;

use crate::stream::StringStream;


fn extract_all<S: AsRef<str>>(input: S) -> Vec<Result<String, String>> {
    let mut extractor = Extractor::default();
    let mut stream = StringStream::new(input);
    let mut results = vec![];
    loop {
        match extractor.extract(&mut stream) {
            Ok(Some(text)) => results.push(Ok(text)),
            Ok(None) => return results,
            Err(err) => results.push(Err(err.to_string())),
        }
    }
}

fn extract_one<S: AsRef<str>>(input: S) -> Result<Option<String>, ExtractError> {
    Extractor::default().extract(&mut StringStream::new(input))
}

/// Serves fixed lines while recording the depth each was requested at.
struct RecordingStream {
    lines: Vec<&'static str>,
    depths: Vec<usize>,
    finished: Vec<String>,
}

impl LineStream for RecordingStream {
    fn next_line(&mut self, depth: usize) -> Option<io::Result<String>> {
        self.depths.push(depth);
        if self.lines.is_empty() {
            return None;
        }
        Some(Ok(self.lines.remove(0).to_string()))
    }

    fn finish_expr(&mut self, text: &str) {
        self.finished.push(text.to_string());
    }
}


#[test]
fn single_line() {
    assert_eq!(extract_one("(a b)").unwrap(), Some("(a b)".to_string()));
}

#[test]
fn newline_collapses_to_space() {
    assert_eq!(extract_one("(a\n b)").unwrap(), Some("(a  b)".to_string()));
}

#[test]
fn comments_and_blank_lines() {
    let input = "; only a comment\n\n   \n(a ; note\n b) ; done";
    assert_eq!(extract_one(input).unwrap(), Some("(a  b)".to_string()));
}

#[test]
fn comment_does_not_merge_into_token() {
    assert_eq!(extract_one("(ab;c\nd)").unwrap(), Some("(ab d)".to_string()));
}

#[test]
fn end_of_input() {
    assert!(matches!(extract_one(""), Ok(None)));
    assert!(matches!(extract_one("  ; nothing here\n"), Ok(None)));
}

#[test]
fn successive_expressions() {
    let results = extract_all("(a)\n  42  \n\"str\"\nsym ; trailing\n#\\x");
    assert_eq!(
        results,
        vec![
            Ok("(a)".to_string()),
            Ok("42".to_string()),
            Ok("\"str\"".to_string()),
            Ok("sym".to_string()),
            Ok("#\\x".to_string()),
        ]
    );
}

#[test]
fn one_expression_per_line() {
    assert!(matches!(
        extract_one("(a) (b)"),
        Err(TrailingContent(rest)) if rest == " (b)"
    ));
    assert!(matches!(
        extract_one("a b"),
        Err(TrailingContent(rest)) if rest == "b"
    ));
    assert!(matches!(extract_one("(a) 78"), Err(TrailingContent(_))));
}

#[test]
fn stray_close_paren() {
    assert!(matches!(extract_one("(a))"), Err(TooManyClose(rest)) if rest == ")"));
    assert!(matches!(extract_one(")"), Err(LeadingClose(_))));
    assert!(matches!(extract_one("  )(a)"), Err(LeadingClose(_))));
}

#[test]
fn missing_close_paren() {
    assert!(matches!(extract_one("(a\n(b c)"), Err(MissingClose)));
}

#[test]
fn unterminated_string() {
    assert!(matches!(
        extract_one("\"abc\ndef\""),
        Err(UnterminatedString(line)) if line == "\"abc"
    ));
    assert!(matches!(
        extract_one("(a \"b\n c\")"),
        Err(UnterminatedString(_))
    ));
}

#[test]
fn parens_in_strings_are_ignored() {
    assert_eq!(
        extract_one("(display \"a (b ; c\")").unwrap(),
        Some("(display \"a (b ; c\")".to_string())
    );
}

#[test]
fn escaped_quotes() {
    assert_eq!(
        extract_one(r#""a\"b""#).unwrap(),
        Some(r#""a\"b""#.to_string())
    );
    assert_eq!(
        extract_one(r#"("a\\" b)"#).unwrap(),
        Some(r#"("a\\" b)"#.to_string())
    );
}

#[test]
fn character_literal_parens() {
    assert_eq!(
        extract_one(r#"(#\( #\) #\" #\;)"#).unwrap(),
        Some(r#"(#\( #\) #\" #\;)"#.to_string())
    );
    assert_eq!(extract_one("#\\(").unwrap(), Some("#\\(".to_string()));
}

#[test]
fn space_character_literal_at_end_of_line() {
    assert_eq!(extract_one("#\\ ").unwrap(), Some("#\\ ".to_string()));
    assert_eq!(
        extract_one("  #\\   ; comment").unwrap(),
        Some("#\\ ".to_string())
    );
    assert_eq!(
        extract_all("#\\ \n#\\\t"),
        vec![Ok("#\\ ".to_string()), Ok("#\\\t".to_string())]
    );
}

#[test]
fn long_whitespace_runs() {
    let gap = " ".repeat(30_000);
    let line = format!("(a{}b){}; done", gap, gap);
    assert_eq!(extract_one(&line).unwrap(), Some(format!("(a{}b)", gap)));
}

#[test]
fn content_abutting_atom() {
    assert!(matches!(extract_one("abc\"x\""), Err(InvalidAfterAtom(_))));
    assert!(matches!(extract_one("'(a b)"), Err(InvalidAfterAtom(_))));
}

#[test]
fn errors_do_not_poison_later_expressions() {
    let results = extract_all("(a))\n(b)");
    assert_eq!(results.len(), 2);
    assert!(results[0].is_err());
    assert_eq!(results[1], Ok("(b)".to_string()));
}

#[test]
fn line_length_limit() {
    let limits = Limits {
        max_len: 10,
        ..Limits::default()
    };
    let mut extractor = Extractor::new(&limits);
    let mut stream = StringStream::new("(aaaaaaaaaaaa)");
    assert!(matches!(
        extractor.extract(&mut stream),
        Err(LineTooLong { len: 14, max: 10 })
    ));
}

#[test]
fn expression_length_limit() {
    let limits = Limits {
        max_len: 10,
        ..Limits::default()
    };
    let mut extractor = Extractor::new(&limits);
    let mut stream = StringStream::new("(aaaa\nbbbb\ncc)");
    assert!(matches!(
        extractor.extract(&mut stream),
        Err(ExpressionTooLong { max: 10, .. })
    ));
}

#[test]
fn depth_is_reported_to_stream() {
    let mut stream = RecordingStream {
        lines: vec!["(a", "; comment", "(b", "))"],
        depths: vec![],
        finished: vec![],
    };
    let text = Extractor::default().extract(&mut stream).unwrap();
    assert_eq!(text, Some("(a (b ))".to_string()));
    assert_eq!(stream.depths, vec![0, 1, 1, 2]);
    assert_eq!(stream.finished, vec!["(a (b ))".to_string()]);
}

#[test]
fn errors_reify_with_reason() {
    let err = extract_one("(a").unwrap_err();
    assert_eq!(
        err.reify(),
        list!(
            SfsString::unbounded("ExtractError"),
            SfsString::unbounded("MissingClose"),
            SfsString::unbounded("[Parse Error] missing closing parenthesis"),
        )
    );
}
