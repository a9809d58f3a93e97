use sfs::config::Limits;
use sfs::error::Error;
use sfs::session::Session;
use sfs::sexp::Sexp;
use sfs::stream::StringStream;


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

pub fn results<S: AsRef<str>>(s: S) -> Vec<Sexp> {
    results_with_errors(s)
        .into_iter()
        .map(|e| e.unwrap())
        .collect::<Vec<_>>()
}

pub fn results_with_errors<S: AsRef<str>>(s: S) -> Vec<Result<Sexp, Error>> {
    setup();
    Session::new(StringStream::new(s), Limits::default()).collect::<Vec<_>>()
}

/// The "<Reason>" component of a reified error.
pub fn reason(err: &Error) -> String {
    let reified = err.kind().reify();
    match reified.iter().nth(1) {
        Some((Sexp::String(s), _)) => s.as_str().to_string(),
        _ => panic!("malformed reified error: {}", reified),
    }
}
