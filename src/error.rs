use thiserror::Error;

use crate::primitives::{Token, TokenId};

pub type Result<T, E = crate::Error> = std::result::Result<T, E>;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("Token {token:?} is already interned with id {existing}")]
    TokenAlreadyInterned { token: Token, existing: TokenId },
    #[error("Token id {id} is already assigned to {token:?}")]
    TokenIdAlreadyAssigned { id: TokenId, token: Token },
    #[error("Token id {id} is outside the assignable range")]
    TokenIdOutOfRange { id: TokenId },
}
