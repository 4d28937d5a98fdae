use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Deliberately generic: the same rejection for an unknown email and a
    /// wrong password.
    #[error("email ou senha incorretos")]
    InvalidCredentials,
}
