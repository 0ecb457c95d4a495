//! Parses release version tags, for example 0.3.2-5-gabc123
use super::common::{commit_hash, decimal, VResult};
use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::{map, opt},
    sequence::{preceded, tuple},
};

use crate::models::version::Version;

pub fn version(input: &str) -> VResult<Version> {
    let (rest, _) = opt(tag("v"))(input)?;
    let (rest, (major, _, minor, _, patch)) =
        tuple((decimal, tag("."), decimal, tag("."), decimal))(rest)?;
    let (rest, (num_commits, hash)) = suffix(rest)?;

    let version = Version {
        major,
        minor,
        patch,
        num_commits,
        hash: hash.map(str::to_string),
    };

    Ok((rest, version))
}

/// The optional tail after X.Y.Z.  Alternatives are ordered most
/// specific first so a hash-bearing suffix always wins over a bare
/// trailing number.
fn suffix(input: &str) -> VResult<(Option<u32>, Option<&str>)> {
    map(
        opt(alt((patched_describe, describe, patch_number))),
        |tail| tail.unwrap_or((None, None)),
    )(input)
}

/// -P-N-gHASH, git describe over a patch-release tag.  The tag's build
/// number is matched and dropped; only the commit count orders builds.
fn patched_describe(input: &str) -> VResult<(Option<u32>, Option<&str>)> {
    map(
        tuple((
            dashed_number,
            dashed_number,
            preceded(tag("-g"), commit_hash),
        )),
        |(_, num_commits, hash)| (Some(num_commits), Some(hash)),
    )(input)
}

/// -N-gHASH, git describe over a plain tag
fn describe(input: &str) -> VResult<(Option<u32>, Option<&str>)> {
    map(
        tuple((dashed_number, preceded(tag("-g"), commit_hash))),
        |(num_commits, hash)| (Some(num_commits), Some(hash)),
    )(input)
}

/// -P, the build number of a patch release
fn patch_number(input: &str) -> VResult<(Option<u32>, Option<&str>)> {
    map(dashed_number, |num_commits| (Some(num_commits), None))(input)
}

fn dashed_number(input: &str) -> VResult<u32> {
    preceded(tag("-"), decimal)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple() {
        let input = "1.2.3";
        let (rest, result) = version(input).unwrap();

        assert_eq!(rest, "");
        assert_eq!(result, Version::new(1, 2, 3));
    }

    #[test]
    fn test_leading_v() {
        let input = "v1.2.3";
        let (rest, result) = version(input).unwrap();

        assert_eq!(rest, "");
        assert_eq!(result, Version::new(1, 2, 3));
    }

    #[test]
    fn test_patch_suffix() {
        let input = "0.3.2-1";
        let (rest, result) = version(input).unwrap();

        assert_eq!(rest, "");
        assert_eq!(result.num_commits, Some(1));
        assert_eq!(result.hash, None);
    }

    #[test]
    fn test_describe_suffix() {
        let input = "0.3.2-5-gabc123";
        let (rest, result) = version(input).unwrap();

        assert_eq!(rest, "");
        assert_eq!(result.num_commits, Some(5));
        assert_eq!(result.hash.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_patched_describe_suffix() {
        // The patch tag's own build number does not survive parsing
        let input = "0.3.2-1-5-ga7a46bc";
        let (rest, result) = version(input).unwrap();

        assert_eq!(rest, "");
        assert_eq!(result.num_commits, Some(5));
        assert_eq!(result.hash.as_deref(), Some("a7a46bc"));
    }

    #[test]
    fn test_unmatched_tail_is_left_over() {
        let input = "1.2.3-x";
        let (rest, result) = version(input).unwrap();

        assert_eq!(rest, "-x");
        assert_eq!(result, Version::new(1, 2, 3));
    }
}
