use minischeme::error::{Error, ErrorCategory};
use minischeme::Interpreter;


pub fn setup() -> Interpreter {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}

    Interpreter::default()
}

pub fn result<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> String {
    match interpreter.run(s.as_ref()) {
        Ok(text) => text,
        Err(err) => panic!("{:?} failed: {}", s.as_ref(), err),
    }
}

pub fn results<S: AsRef<str>>(interpreter: &Interpreter, inputs: &[S]) -> Vec<String> {
    inputs.iter().map(|s| result(interpreter, s)).collect()
}

pub fn error_category<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> ErrorCategory {
    match interpreter.run(s.as_ref()) {
        Ok(text) => panic!("{:?} unexpectedly produced {}", s.as_ref(), text),
        Err(err) => err.category(),
    }
}

#[allow(dead_code)]
pub fn error<S: AsRef<str>>(interpreter: &Interpreter, s: S) -> Error {
    match interpreter.run(s.as_ref()) {
        Ok(text) => panic!("{:?} unexpectedly produced {}", s.as_ref(), text),
        Err(err) => err,
    }
}
