use chumsky::prelude::{Parser as ChumskyParser, *};

pub(super) trait Parser<'src, Output>:
    ChumskyParser<'src, &'src str, Output, extra::Err<Rich<'src, char>>> + Clone
{
}
impl<
        'src,
        Output,
        T: ChumskyParser<'src, &'src str, Output, extra::Err<Rich<'src, char>>> + Clone,
    > Parser<'src, Output> for T
{
}

fn sign_lexer<'src>() -> impl Parser<'src, char> {
    one_of("+-")
}

/// Matches an optionally signed run of decimal digits at the start of a token
/// and yields it as a slice. Anything after the digits is accepted and dropped.
pub(super) fn int_prefix_lexer<'src>() -> impl Parser<'src, &'src str> {
    sign_lexer()
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .then_ignore(any().repeated())
}
