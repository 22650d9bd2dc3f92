// Authentication: password hashing, signed bearer tokens, the request guard
// middleware and the /auth handlers.

pub mod handlers;
pub mod middleware;
pub mod password;
pub mod token;

/// Identity of the caller, inserted into request extensions by `require_auth`.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}
