use std::borrow::Cow;

use nom::{
    branch::alt,
    bytes::complete::{is_not, tag, take_till},
    character::complete::{char, line_ending},
    combinator::{cut, eof, map, value},
    error::ParseError,
    multi::{fold_many0, separated_list1},
    sequence::{preceded, terminated},
    IResult, Parser,
};

/// Tokenizer failures, positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CsvError {
    #[error("parse error on line {line}, column {column}: bare \" in non-quoted field")]
    BareQuote { line: usize, column: usize },

    #[error("parse error on line {line}, column {column}: extraneous or missing \" in quoted field")]
    ExtraneousQuote { line: usize, column: usize },

    #[error("parse error on line {line}: quoted field is not terminated")]
    UnterminatedQuote { line: usize },
}

fn quoted_field<'a, E: ParseError<&'a str>>(s: &'a str) -> IResult<&'a str, Cow<'a, str>, E> {
    let chunk = alt((
        value(Cow::Borrowed("\""), tag("\"\"")),
        map(is_not("\""), Cow::Borrowed),
    ));

    let body = fold_many0(chunk, String::default, |mut s, parsed: Cow<'a, str>| {
        s.push_str(&parsed);
        s
    });

    // 開きクォートの後は他の解釈に戻さない
    let (remaining, value) = preceded(char('"'), cut(terminated(body, char('"')))).parse(s)?;

    Ok((remaining, Cow::Owned(value)))
}

fn unquoted_field<'a, E: ParseError<&'a str>>(s: &'a str) -> IResult<&'a str, Cow<'a, str>, E> {
    map(
        take_till(|c: char| matches!(c, ',' | '\n' | '"')),
        |field: &'a str| Cow::Borrowed(field.strip_suffix('\r').unwrap_or(field)),
    )
    .parse(s)
}

fn field<'a, E: ParseError<&'a str>>(s: &'a str) -> IResult<&'a str, Cow<'a, str>, E> {
    alt((quoted_field, unquoted_field)).parse(s)
}

fn record<'a, E: ParseError<&'a str>>(s: &'a str) -> IResult<&'a str, Vec<Cow<'a, str>>, E> {
    terminated(separated_list1(char(','), field), alt((line_ending, eof))).parse(s)
}

/// Iterates over the records of a comma-separated document.
///
/// Blank lines are skipped and records may have any number of fields.
pub struct Records<'a> {
    input: &'a str,
    remaining: &'a str,
    failed: bool,
}

impl<'a> Records<'a> {
    pub fn new(input: &'a str) -> Self {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);

        Self {
            input,
            remaining: input,
            failed: false,
        }
    }

    fn location(&self, remaining: &str) -> (usize, usize) {
        let consumed = &self.input[..self.input.len() - remaining.len()];

        let line = consumed.matches('\n').count() + 1;
        let column = match consumed.rfind('\n') {
            Some(index) => consumed[index + 1..].chars().count() + 1,
            None => consumed.chars().count() + 1,
        };

        (line, column)
    }

    fn error(&self, at: &str) -> CsvError {
        let (line, column) = self.location(at);

        if at.is_empty() {
            let (line, _) = self.location(self.remaining);
            CsvError::UnterminatedQuote { line }
        } else if at.starts_with('"') {
            CsvError::BareQuote { line, column }
        } else {
            CsvError::ExtraneousQuote { line, column }
        }
    }
}

impl Iterator for Records<'_> {
    type Item = Result<Vec<String>, CsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while let Ok((remaining, _)) = line_ending::<_, nom::error::Error<&str>>(self.remaining) {
            self.remaining = remaining;
        }

        if self.remaining.is_empty() {
            return None;
        }

        match record::<nom::error::Error<&str>>(self.remaining) {
            Ok((remaining, fields)) => {
                self.remaining = remaining;
                Some(Ok(fields.into_iter().map(Cow::into_owned).collect()))
            }
            Err(nom::Err::Error(err) | nom::Err::Failure(err)) => {
                self.failed = true;
                Some(Err(self.error(err.input)))
            }
            Err(nom::Err::Incomplete(_)) => {
                self.failed = true;
                let (line, _) = self.location(self.remaining);
                Some(Err(CsvError::UnterminatedQuote { line }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use nom::error::Error;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn parse_records(input: &str) -> Result<Vec<Vec<String>>, CsvError> {
        Records::new(input).collect()
    }

    #[rstest]
    #[case("GET", "GET")]
    #[case("", "")]
    #[case("/api/v1/users\r", "/api/v1/users")]
    #[case("a b", "a b")]
    fn unquoted_field(#[case] query: &str, #[case] expected: &str) {
        let (remaining, actual) = super::unquoted_field::<Error<_>>(query).unwrap();

        assert_eq!(actual, expected);
        assert_eq!(remaining, "");
    }

    #[rstest]
    #[case(r#""GET""#, "GET")]
    #[case(r#""""#, "")]
    #[case(r#""a,b""#, "a,b")]
    #[case(r#""say ""hi""""#, r#"say "hi""#)]
    #[case("\"line1\nline2\"", "line1\nline2")]
    fn quoted_field(#[case] query: &str, #[case] expected: &str) {
        let (remaining, actual) = super::quoted_field::<Error<_>>(query).unwrap();

        assert_eq!(actual, expected);
        assert_eq!(remaining, "");
    }

    #[test]
    fn 閉じクォートがないときfailureを返す() {
        let actual = super::quoted_field::<Error<_>>("\"abc");

        assert!(matches!(actual, Err(nom::Err::Failure(_))));
    }

    #[test]
    fn レコードを順に返す() {
        let input = indoc! {r#"
            Method,URL,Prefix
            GET,/api/v1/users,/user
            POST,"/api/v1/login",/user
        "#};

        let actual = parse_records(input).unwrap();

        assert_eq!(
            actual,
            vec![
                vec!["Method", "URL", "Prefix"],
                vec!["GET", "/api/v1/users", "/user"],
                vec!["POST", "/api/v1/login", "/user"],
            ]
        );
    }

    #[test]
    fn フィールド数が異なるレコードを許容する() {
        let input = "Method,URL,Prefix\nGET,/health,,\nGET\n";

        let actual = parse_records(input).unwrap();

        assert_eq!(
            actual,
            vec![
                vec!["Method", "URL", "Prefix"],
                vec!["GET", "/health", "", ""],
                vec!["GET"],
            ]
        );
    }

    #[test]
    fn crlfと空行を扱う() {
        let input = "Method,URL\r\n\r\nGET,/a\r\n\nPOST,/b";

        let actual = parse_records(input).unwrap();

        assert_eq!(
            actual,
            vec![
                vec!["Method", "URL"],
                vec!["GET", "/a"],
                vec!["POST", "/b"]
            ]
        );
    }

    #[test]
    fn 先頭のbomを無視する() {
        let input = "\u{feff}Method,URL\nGET,/a\n";

        let actual = parse_records(input).unwrap();

        assert_eq!(actual[0], vec!["Method", "URL"]);
    }

    #[test]
    fn クォート内の改行を保持する() {
        let input = "Method,URL,Comment\nGET,/a,\"first\nsecond\"\nPOST,/b,\n";

        let actual = parse_records(input).unwrap();

        assert_eq!(actual.len(), 3);
        assert_eq!(actual[1], vec!["GET", "/a", "first\nsecond"]);
        assert_eq!(actual[2], vec!["POST", "/b", ""]);
    }

    #[rstest]
    #[case::bare_quote(
        "Method,URL\nGET,/a\"b\n",
        CsvError::BareQuote { line: 2, column: 7 }
    )]
    #[case::extraneous_quote(
        "Method,URL\nGET,\"/a\"b\n",
        CsvError::ExtraneousQuote { line: 2, column: 9 }
    )]
    #[case::unterminated_quote(
        "Method,URL\nGET,/a\nPOST,\"/b\n",
        CsvError::UnterminatedQuote { line: 3 }
    )]
    fn 不正なレコードでエラーを返す(#[case] input: &str, #[case] expected: CsvError) {
        let actual = parse_records(input);

        assert_eq!(actual, Err(expected));
    }

    #[test]
    fn エラーの後はレコードを返さない() {
        let mut records = Records::new("a\"b\nc,d\n");

        assert!(matches!(records.next(), Some(Err(_))));
        assert!(records.next().is_none());
    }
}
