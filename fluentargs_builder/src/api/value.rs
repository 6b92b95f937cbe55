use std::any::type_name;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use url::Url;

use crate::matcher::ParsedOption;
use crate::model::CaseType;
use crate::prelude::{Choices, InvalidValue, OptionValue};

/// Convert the value of the option via [`FromStr`].
///
/// The option must carry a value.
/// Useful for implementing [`OptionValue`] on your own types.
pub fn parse_from_str<T: FromStr>(option: &ParsedOption) -> Result<T, InvalidValue> {
    let token = option.value.as_deref().ok_or(InvalidValue::Missing {
        type_name: type_name::<T>(),
    })?;

    T::from_str(token).map_err(|_| InvalidValue::Conversion {
        token: token.to_string(),
        type_name: type_name::<T>(),
    })
}

macro_rules! option_value_from_str {
    ($($t:ty),* $(,)?) => {
        $(
            impl OptionValue for $t {
                fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue> {
                    parse_from_str(option)
                }
            }
        )*
    };
}

option_value_from_str!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, char, PathBuf,
    NaiveDate, DateTime<FixedOffset>, Url,
);

/// Convert the value of the option to one of the variants of `T`.
///
/// The value is either the name of a variant, ignoring case, or its number.
/// Useful for implementing [`OptionValue`] on your own enumerations; see [`Choices`].
pub fn parse_choice<T: Choices>(option: &ParsedOption) -> Result<T, InvalidValue> {
    let token = option.value.as_deref().ok_or(InvalidValue::Missing {
        type_name: type_name::<T>(),
    })?;
    let number = i64::from_str(token).ok();

    T::CHOICES
        .iter()
        .find(|(name, value, _)| {
            number == Some(*value) || CaseType::CaseInsensitive.matches(token, name)
        })
        .map(|(_, _, variant)| variant.clone())
        .ok_or_else(|| InvalidValue::Conversion {
            token: token.to_string(),
            type_name: type_name::<T>(),
        })
}

fn unquote(token: &str) -> &str {
    token
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(token)
}

/// Surrounding double quotes are removed (ex: `"Mr. Smith"` becomes `Mr. Smith`).
impl OptionValue for String {
    fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue> {
        let token = option.value.as_deref().ok_or(InvalidValue::Missing {
            type_name: type_name::<String>(),
        })?;
        Ok(unquote(token).to_string())
    }
}

/// Accepts `2012-02-29T01:01:01` (optionally with fractional seconds), `2012-02-29 01:01:01` and `2012-02-29`.
/// A date alone is midnight of that day.
/// Surrounding double quotes are removed.
impl OptionValue for NaiveDateTime {
    fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue> {
        let token = option.value.as_deref().ok_or(InvalidValue::Missing {
            type_name: type_name::<NaiveDateTime>(),
        })?;
        let unquoted = unquote(token);

        NaiveDateTime::from_str(unquoted)
            .or_else(|_| NaiveDateTime::parse_from_str(unquoted, "%Y-%m-%d %H:%M:%S%.f"))
            .ok()
            .or_else(|| {
                NaiveDate::from_str(unquoted)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .ok_or_else(|| InvalidValue::Conversion {
                token: token.to_string(),
                type_name: type_name::<NaiveDateTime>(),
            })
    }
}

/// An option without a value is `true`.
/// Otherwise accepts `true/false`, `on/off` and `1/0`, ignoring case.
impl OptionValue for bool {
    fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue> {
        match option.value.as_deref() {
            None => Ok(true),
            Some(token) => match token.to_ascii_lowercase().as_str() {
                "true" | "on" | "1" => Ok(true),
                "false" | "off" | "0" => Ok(false),
                _ => Err(InvalidValue::Conversion {
                    token: token.to_string(),
                    type_name: type_name::<bool>(),
                }),
            },
        }
    }
}

/// A missing or unconvertible value is `None`; never an error.
impl<T: OptionValue> OptionValue for Option<T> {
    fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue> {
        Ok(T::from_parsed(option).ok())
    }
}

/// The value followed by the additional values, each converted in turn.
impl<T: OptionValue> OptionValue for Vec<T> {
    fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue> {
        if option.values().next().is_none() {
            return Err(InvalidValue::Missing {
                type_name: type_name::<Vec<T>>(),
            });
        }

        option
            .values()
            .map(|value| T::from_parsed(&ParsedOption::new(option.key.clone(), Some(value.to_string()))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn option(value: Option<&str>) -> ParsedOption {
        ParsedOption::new("key", value.map(str::to_string))
    }

    #[derive(Debug, Clone, PartialEq)]
    enum Direction {
        North,
        East,
        South,
        West,
    }

    impl Choices for Direction {
        const CHOICES: &'static [(&'static str, i64, Self)] = &[
            ("North", 0, Direction::North),
            ("East", 1, Direction::East),
            ("South", 2, Direction::South),
            ("West", 3, Direction::West),
        ];
    }

    impl OptionValue for Direction {
        fn from_parsed(option: &ParsedOption) -> Result<Self, InvalidValue> {
            parse_choice(option)
        }
    }

    #[rstest]
    #[case(Some("value"), "value")]
    #[case(Some("\"Mr. Smith\""), "Mr. Smith")]
    #[case(Some("\"quoted"), "\"quoted")]
    #[case(Some("\""), "\"")]
    #[case(Some("\"\""), "")]
    #[case(Some(""), "")]
    #[case(Some("a \"b\" c"), "a \"b\" c")]
    fn string(#[case] value: Option<&str>, #[case] expected: &str) {
        assert_eq!(String::from_parsed(&option(value)), Ok(expected.to_string()));
    }

    #[test]
    fn string_missing() {
        assert_matches!(String::from_parsed(&option(None)), Err(InvalidValue::Missing { .. }));
    }

    #[rstest]
    #[case(None, true)]
    #[case(Some("true"), true)]
    #[case(Some("TRUE"), true)]
    #[case(Some("on"), true)]
    #[case(Some("On"), true)]
    #[case(Some("1"), true)]
    #[case(Some("false"), false)]
    #[case(Some("False"), false)]
    #[case(Some("off"), false)]
    #[case(Some("OFF"), false)]
    #[case(Some("0"), false)]
    fn boolean(#[case] value: Option<&str>, #[case] expected: bool) {
        assert_eq!(bool::from_parsed(&option(value)), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("yes")]
    #[case("2")]
    #[case("salmon")]
    fn boolean_invalid(#[case] value: &str) {
        assert_eq!(
            bool::from_parsed(&option(Some(value))),
            Err(InvalidValue::Conversion {
                token: value.to_string(),
                type_name: "bool",
            })
        );
    }

    #[rstest]
    #[case("10", 10)]
    #[case("-123", -123)]
    #[case("+7", 7)]
    fn integer(#[case] value: &str, #[case] expected: i32) {
        assert_eq!(i32::from_parsed(&option(Some(value))), Ok(expected));
    }

    #[rstest]
    #[case(Some("abc"))]
    #[case(Some("1.5"))]
    #[case(Some(""))]
    #[case(None)]
    fn integer_invalid(#[case] value: Option<&str>) {
        assert!(i32::from_parsed(&option(value)).is_err());
    }

    #[test]
    fn unsigned_negative() {
        assert_eq!(
            u32::from_parsed(&option(Some("-1"))),
            Err(InvalidValue::Conversion {
                token: "-1".to_string(),
                type_name: "u32",
            })
        );
    }

    #[test]
    fn float() {
        assert_eq!(f64::from_parsed(&option(Some("-1.5"))), Ok(-1.5));
        assert_eq!(f32::from_parsed(&option(Some("2"))), Ok(2.0));
    }

    #[test]
    fn character() {
        assert_eq!(char::from_parsed(&option(Some("x"))), Ok('x'));
        assert!(char::from_parsed(&option(Some("xy"))).is_err());
    }

    #[test]
    fn path() {
        assert_eq!(
            PathBuf::from_parsed(&option(Some("dir/file.txt"))),
            Ok(PathBuf::from("dir/file.txt"))
        );
    }

    #[rstest]
    #[case(Some("7"), Some(7))]
    #[case(Some("abc"), None)]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn optional(#[case] value: Option<&str>, #[case] expected: Option<u32>) {
        assert_eq!(Option::<u32>::from_parsed(&option(value)), Ok(expected));
    }

    #[test]
    fn list() {
        // Setup
        let mut parsed_option = option(Some("123"));
        parsed_option.additional_values = vec!["-123".to_string(), "-321".to_string(), "321".to_string()];

        // Execute
        let values = Vec::<i32>::from_parsed(&parsed_option);

        // Verify
        assert_eq!(values, Ok(vec![123, -123, -321, 321]));
    }

    #[test]
    fn list_invalid_item() {
        let mut parsed_option = option(Some("1"));
        parsed_option.additional_values = vec!["two".to_string()];

        assert_eq!(
            Vec::<i32>::from_parsed(&parsed_option),
            Err(InvalidValue::Conversion {
                token: "two".to_string(),
                type_name: "i32",
            })
        );
    }

    #[test]
    fn list_empty() {
        assert_matches!(Vec::<String>::from_parsed(&option(None)), Err(InvalidValue::Missing { .. }));
    }

    #[test]
    fn list_additional_only() {
        let mut parsed_option = option(None);
        parsed_option.additional_values = vec!["a".to_string()];

        assert_eq!(Vec::<String>::from_parsed(&parsed_option), Ok(vec!["a".to_string()]));
    }

    #[rstest]
    #[case("2012-02-29T01:01:01", 2012, 2, 29, 1, 1, 1)]
    #[case("2012-02-29T01:01:01.5", 2012, 2, 29, 1, 1, 1)]
    #[case("2012-02-29 01:01:01", 2012, 2, 29, 1, 1, 1)]
    #[case("\"2012-02-29 01:01:01\"", 2012, 2, 29, 1, 1, 1)]
    #[case("2012-02-29", 2012, 2, 29, 0, 0, 0)]
    fn date_time(
        #[case] value: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] hour: u32,
        #[case] minute: u32,
        #[case] second: u32,
    ) {
        // Execute
        let date_time = NaiveDateTime::from_parsed(&option(Some(value))).unwrap();

        // Verify
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        assert_eq!(date_time.date(), date);
        assert_eq!(
            date_time.time().format("%H:%M:%S").to_string(),
            format!("{hour:02}:{minute:02}:{second:02}")
        );
    }

    #[rstest]
    #[case("2013-02-29T01:01:01")]
    #[case("2012-02-29T25:01:01")]
    #[case("29/02/2012")]
    #[case("")]
    fn date_time_invalid(#[case] value: &str) {
        assert_eq!(
            NaiveDateTime::from_parsed(&option(Some(value))),
            Err(InvalidValue::Conversion {
                token: value.to_string(),
                type_name: type_name::<NaiveDateTime>(),
            })
        );
    }

    #[test]
    fn date_time_missing() {
        assert_matches!(NaiveDateTime::from_parsed(&option(None)), Err(InvalidValue::Missing { .. }));
    }

    #[test]
    fn date() {
        assert_eq!(
            NaiveDate::from_parsed(&option(Some("2012-02-29"))),
            Ok(NaiveDate::from_ymd_opt(2012, 2, 29).unwrap())
        );
        assert_matches!(
            NaiveDate::from_parsed(&option(Some("2013-02-29"))),
            Err(InvalidValue::Conversion { .. })
        );
    }

    #[test]
    fn date_time_offset() {
        // Execute
        let date_time = DateTime::<FixedOffset>::from_parsed(&option(Some("2012-02-29T01:01:01+02:00"))).unwrap();

        // Verify
        assert_eq!(date_time.offset().local_minus_utc(), 2 * 60 * 60);
        assert_eq!(date_time.naive_utc().to_string(), "2012-02-28 23:01:01");
    }

    #[test]
    fn url() {
        // Execute
        let url = Url::from_parsed(&option(Some("http://services.internal/backoffce/service/svc"))).unwrap();

        // Verify
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("services.internal"));
        assert_eq!(url.path(), "/backoffce/service/svc");
    }

    #[rstest]
    #[case("not a uri")]
    #[case("services.internal/svc")]
    fn url_invalid(#[case] value: &str) {
        assert_eq!(
            Url::from_parsed(&option(Some(value))),
            Err(InvalidValue::Conversion {
                token: value.to_string(),
                type_name: type_name::<Url>(),
            })
        );
    }

    #[rstest]
    #[case("South", Direction::South)]
    #[case("south", Direction::South)]
    #[case("SOUTH", Direction::South)]
    #[case("2", Direction::South)]
    #[case("0", Direction::North)]
    #[case("wEST", Direction::West)]
    fn choice(#[case] value: &str, #[case] expected: Direction) {
        assert_eq!(Direction::from_parsed(&option(Some(value))), Ok(expected));
    }

    #[rstest]
    #[case("Up")]
    #[case("4")]
    #[case("-1")]
    #[case("")]
    fn choice_invalid(#[case] value: &str) {
        assert_eq!(
            Direction::from_parsed(&option(Some(value))),
            Err(InvalidValue::Conversion {
                token: value.to_string(),
                type_name: type_name::<Direction>(),
            })
        );
    }

    #[test]
    fn choice_missing() {
        assert_matches!(Direction::from_parsed(&option(None)), Err(InvalidValue::Missing { .. }));
    }

    #[test]
    fn choice_flags() {
        // Setup
        let mut parsed_option = option(Some("South"));
        parsed_option.additional_values = vec!["east".to_string()];

        // Execute
        let directions = Vec::<Direction>::from_parsed(&parsed_option);

        // Verify
        assert_eq!(directions, Ok(vec![Direction::South, Direction::East]));
    }
}
