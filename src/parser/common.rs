//! Common tokens shared by the pieces of the version grammar
use nom::{
    bytes::complete::take_while1,
    character::complete,
    error::VerboseError,
    IResult,
};

pub type VResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// A decimal version component.  A value too large for u32 fails the
/// parse rather than wrapping.
pub fn decimal(input: &str) -> VResult<u32> {
    complete::u32(input)
}

/// An abbreviated commit id, as git describe prints one
pub fn commit_hash(input: &str) -> VResult<&str> {
    take_while1(|c: char| c.is_ascii_alphanumeric())(input)
}
