use nom::error::{ErrorKind, ParseError};
use nom::{Err, IResult, InputLength, Parser};
use tinyvec::{Array, TinyVec};

use crate::Error;

/// Repeats `f` until it fails with `Err::Error`, collecting into a `TinyVec`.
///
/// `Err::Failure` is passed through untouched.
pub fn many0<I, O, E, F, A>(mut f: F) -> impl FnMut(I) -> IResult<I, TinyVec<A>, E>
where
    I: Clone + InputLength,
    F: Parser<I, O, E>,
    E: ParseError<I>,
    A: Array<Item = O>,
{
    move |mut i: I| {
        let mut acc = TinyVec::default();
        loop {
            let len = i.input_len();
            match f.parse(i.clone()) {
                Err(Err::Error(_)) => return Ok((i, acc)),
                Err(e) => return Err(e),
                Ok((i1, o)) => {
                    // infinite loop check: the parser must always consume
                    if i1.input_len() == len {
                        return Err(Err::Error(E::from_error_kind(i, ErrorKind::Many0)));
                    }

                    i = i1;
                    acc.push(o);
                }
            }
        }
    }
}

/// Parse `input` as a sequence of elements with nothing left over.
///
/// A nom `Failure` (unknown code) becomes [`Error::MalformedMessage`] with
/// `what` as detail. Trailing bytes that do not form a whole element are
/// [`Error::TruncatedInput`].
pub fn parse_all<'a, A, F>(
    input: &'a [u8],
    parser: F,
    what: &'static str,
) -> Result<TinyVec<A>, Error>
where
    A: Array,
    F: Parser<&'a [u8], A::Item, nom::error::Error<&'a [u8]>>,
{
    match many0(parser)(input) {
        Ok((rest, out)) if rest.is_empty() => Ok(out),
        Ok(_) => Err(Error::TruncatedInput),
        Err(Err::Failure(_)) => Err(Error::MalformedMessage(what)),
        Err(_) => Err(Error::TruncatedInput),
    }
}
