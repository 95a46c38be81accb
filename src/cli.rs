use std::path::PathBuf;

use crate::errs::Error;

/// Arguments of the `lexiskip` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    pub dictionary: PathBuf,
    pub text: PathBuf,
    pub max_height: usize,
}

impl CheckArgs {
    /// Parse `<dictionary> <text> <max_height>`, program name excluded.
    pub fn parse<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let dictionary = args.next().ok_or(Error::MissingArgument("dictionary"))?;
        let text = args.next().ok_or(Error::MissingArgument("text"))?;
        let max_height = args.next().ok_or(Error::MissingArgument("max_height"))?;

        Ok(CheckArgs {
            dictionary: dictionary.into(),
            text: text.into(),
            max_height: parse_max_height(&max_height)?,
        })
    }
}

/// Arguments of the `profiler` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileArgs {
    pub dictionary: PathBuf,
    pub text: PathBuf,
    pub max_heights: Vec<usize>,
}

impl ProfileArgs {
    /// Parse `<dictionary> <text> <max_height>...`, program name excluded.
    pub fn parse<I>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let dictionary = args.next().ok_or(Error::MissingArgument("dictionary"))?;
        let text = args.next().ok_or(Error::MissingArgument("text"))?;
        let max_heights = args
            .map(|arg| parse_max_height(&arg))
            .collect::<Result<Vec<_>, _>>()?;
        if max_heights.is_empty() {
            return Err(Error::MissingArgument("max_height"));
        }

        Ok(ProfileArgs {
            dictionary: dictionary.into(),
            text: text.into(),
            max_heights,
        })
    }
}

/// A max height is a positive integer.
pub fn parse_max_height(value: &str) -> Result<usize, Error> {
    match value.trim().parse::<usize>() {
        | Ok(0) => Err(Error::InvalidMaxHeight(0)),
        | Ok(height) => Ok(height),
        | Err(_) => Err(Error::InvalidArgument {
            name: "max_height",
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_check_args() {
        let parsed = CheckArgs::parse(args(&["dict.txt", "text.txt", "12"])).unwrap();
        assert_eq!(parsed.dictionary, PathBuf::from("dict.txt"));
        assert_eq!(parsed.text, PathBuf::from("text.txt"));
        assert_eq!(parsed.max_height, 12);
    }

    #[test]
    fn test_check_args_missing() {
        assert!(matches!(
            CheckArgs::parse(args(&[])),
            Err(Error::MissingArgument("dictionary"))
        ));
        assert!(matches!(
            CheckArgs::parse(args(&["dict.txt"])),
            Err(Error::MissingArgument("text"))
        ));
        assert!(matches!(
            CheckArgs::parse(args(&["dict.txt", "text.txt"])),
            Err(Error::MissingArgument("max_height"))
        ));
    }

    #[test]
    fn test_max_height_validation() {
        assert_eq!(parse_max_height("1").unwrap(), 1);
        assert!(matches!(parse_max_height("0"), Err(Error::InvalidMaxHeight(0))));
        assert!(matches!(
            parse_max_height("-3"),
            Err(Error::InvalidArgument { name: "max_height", .. })
        ));
        assert!(matches!(
            parse_max_height("tall"),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_profile_args() {
        let parsed = ProfileArgs::parse(args(&["d", "t", "1", "8", "16"])).unwrap();
        assert_eq!(parsed.max_heights, vec![1, 8, 16]);

        assert!(matches!(
            ProfileArgs::parse(args(&["d", "t"])),
            Err(Error::MissingArgument("max_height"))
        ));
        assert!(ProfileArgs::parse(args(&["d", "t", "4", "x"])).is_err());
    }
}
