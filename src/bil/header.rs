use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use nom::{
    bytes::complete::take_till,
    character::complete::char,
    combinator::{opt, rest},
    sequence::{pair, preceded},
    IResult,
};
use serde::Serialize;

use super::{BilError, PixelType};

pub const NROWS: &str = "NROWS";
pub const NCOLS: &str = "NCOLS";
pub const PIXELTYPE: &str = "PIXELTYPE";

/// Contents of a `.hdr` sidecar file.
///
/// The keys needed for decoding are kept as named fields, every other key
/// (BYTEORDER, LAYOUT, NBANDS, ...) lands in `other` untouched.
/// Values are stored as written; `rows()`/`cols()` do the validation.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct BilHeader {
    #[serde(rename = "NROWS", skip_serializing_if = "Option::is_none")]
    nrows: Option<String>,
    #[serde(rename = "NCOLS", skip_serializing_if = "Option::is_none")]
    ncols: Option<String>,
    #[serde(rename = "PIXELTYPE", skip_serializing_if = "Option::is_none")]
    pixel_type: Option<String>,
    #[serde(flatten)]
    other: BTreeMap<String, String>,
}

/// `KEY value`, split on the first space only
fn header_line(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    pair(take_till(|c| c == ' '), opt(preceded(char(' '), rest)))(input)
}

impl BilHeader {
    /// Never fails: a line without a space is a key with an empty value.
    pub fn parse(input: &str) -> BilHeader {
        let mut header = BilHeader::default();

        for line in input.lines().filter(|l| !l.trim().is_empty()) {
            let (key, value) = header_line(line).map(|(_, kv)| kv).unwrap_or((line, None));
            header.insert(key, value.unwrap_or("").trim());
        }

        header
    }

    /// Last occurrence of a key wins.
    pub fn insert(&mut self, key: &str, value: &str) {
        let value = value.to_string();
        match key {
            NROWS => self.nrows = Some(value),
            NCOLS => self.ncols = Some(value),
            PIXELTYPE => self.pixel_type = Some(value),
            _ => {
                self.other.insert(key.to_string(), value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            NROWS => self.nrows.as_deref(),
            NCOLS => self.ncols.as_deref(),
            PIXELTYPE => self.pixel_type.as_deref(),
            _ => self.other.get(key).map(String::as_str),
        }
    }

    pub fn len(&self) -> usize {
        [&self.nrows, &self.ncols, &self.pixel_type]
            .iter()
            .filter(|v| v.is_some())
            .count()
            + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn rows(&self) -> Result<usize, BilError> {
        dimension(self.nrows.as_deref(), NROWS)
    }

    pub fn cols(&self) -> Result<usize, BilError> {
        dimension(self.ncols.as_deref(), NCOLS)
    }

    /// Absent or unrecognized PIXELTYPE falls back to unsigned integers.
    pub fn pixel_type(&self) -> PixelType {
        PixelType::from(self.pixel_type.as_deref().unwrap_or(""))
    }
}

fn dimension(value: Option<&str>, key: &'static str) -> Result<usize, BilError> {
    match value.and_then(|v| v.parse::<usize>().ok()) {
        Some(n) if n > 0 => Ok(n),
        _ => Err(BilError::MissingKey(key)),
    }
}

pub fn read_header(path: &Path) -> Result<BilHeader, BilError> {
    let contents = fs::read_to_string(path).map_err(|e| BilError::file_access(path, e))?;

    let header = BilHeader::parse(&contents);
    log::debug!("Parsed {} header keys from {}", header.len(), path.display());

    Ok(header)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::utils::with_temp_dir;

    #[test]
    fn parses_required_keys() {
        let header = BilHeader::parse("NROWS 1201\nNCOLS 1201\nPIXELTYPE FLOAT");

        assert_eq!(Some("1201"), header.get("NROWS"));
        assert_eq!(Some("1201"), header.get("NCOLS"));
        assert_eq!(Some("FLOAT"), header.get("PIXELTYPE"));
        assert_eq!(3, header.len());
        assert_eq!(PixelType::Float, header.pixel_type());
    }

    #[test]
    fn keeps_unknown_keys_verbatim() {
        let header = BilHeader::parse("BYTEORDER I\nLAYOUT BIL\nNODATA -9999\n");

        assert_eq!(Some("I"), header.get("BYTEORDER"));
        assert_eq!(Some("BIL"), header.get("LAYOUT"));
        assert_eq!(Some("-9999"), header.get("NODATA"));
        assert_eq!(None, header.get("NROWS"));
        assert!(!header.is_empty());
    }

    #[test]
    fn splits_on_first_space_only() {
        let header = BilHeader::parse("DESCRIPTION  some  text here  \nULXMAP -122.5");

        assert_eq!(Some("some  text here"), header.get("DESCRIPTION"));
        assert_eq!(Some("-122.5"), header.get("ULXMAP"));
    }

    #[test]
    fn line_without_space_maps_to_empty_value() {
        let header = BilHeader::parse("NROWS 2\nFLAG\n");

        assert_eq!(Some(""), header.get("FLAG"));
        assert_eq!(2, header.len());
    }

    #[test]
    fn skips_blank_lines_and_handles_crlf() {
        let header = BilHeader::parse("NROWS 4\r\n\r\n   \r\nNCOLS 5\r\n");

        assert_eq!(4, header.rows().unwrap());
        assert_eq!(5, header.cols().unwrap());
        assert_eq!(2, header.len());
    }

    #[rstest]
    #[case("")]
    #[case("\n\n")]
    #[case(" ")]
    #[case("KEY")]
    #[case(" leading space")]
    #[case("\u{feff}NROWS 3\tx")]
    fn parse_accepts_any_text(#[case] input: &str) {
        let header = BilHeader::parse(input);

        assert_eq!(input.trim().is_empty(), header.is_empty());
    }

    #[test]
    fn leading_space_gives_empty_key() {
        let header = BilHeader::parse(" NROWS 3");

        assert_eq!(Some("NROWS 3"), header.get(""));
        assert!(header.rows().is_err());
    }

    #[test]
    fn last_duplicate_wins() {
        let header = BilHeader::parse("NROWS 1\nLAYOUT BIP\nNROWS 7\nLAYOUT BIL");

        assert_eq!(7, header.rows().unwrap());
        assert_eq!(Some("BIL"), header.get("LAYOUT"));
    }

    #[rstest]
    #[case("NCOLS 3")]
    #[case("NROWS\nNCOLS 3")]
    #[case("NROWS abc\nNCOLS 3")]
    #[case("NROWS 0\nNCOLS 3")]
    #[case("NROWS -2\nNCOLS 3")]
    fn rows_fail_with_missing_key(#[case] input: &str) {
        let header = BilHeader::parse(input);

        assert!(matches!(header.rows(), Err(BilError::MissingKey("NROWS"))));
        assert_eq!(3, header.cols().unwrap());
    }

    #[rstest]
    #[case("", PixelType::UnsignedInt)]
    #[case("PIXELTYPE SIGNEDINT", PixelType::UnsignedInt)]
    #[case("PIXELTYPE float", PixelType::UnsignedInt)]
    #[case("PIXELTYPE FLOAT", PixelType::Float)]
    fn pixel_type_defaults_to_unsigned(#[case] input: &str, #[case] expected: PixelType) {
        assert_eq!(expected, BilHeader::parse(input).pixel_type());
    }

    #[test]
    fn serializes_as_flat_map() {
        let header = BilHeader::parse("NROWS 2\nBYTEORDER I\nNCOLS 3");
        let json = serde_json::to_value(&header).unwrap();

        assert_eq!(
            serde_json::json!({"NROWS": "2", "NCOLS": "3", "BYTEORDER": "I"}),
            json
        );
    }

    #[test]
    fn read_header_from_file() {
        with_temp_dir(|dir| {
            let path = dir.join("dem.hdr");
            fs::write(&path, "NROWS 1201\nNCOLS 1201\nPIXELTYPE FLOAT\n").unwrap();

            let header = read_header(&path).unwrap();
            assert_eq!(1201, header.rows().unwrap());
            assert_eq!(PixelType::Float, header.pixel_type());
        })
        .unwrap();
    }

    #[test]
    fn read_header_fails_with_file_access_on_missing_file() {
        with_temp_dir(|dir| {
            let res = read_header(&dir.join("nope.hdr"));
            assert!(matches!(res, Err(BilError::FileAccess { .. })));
        })
        .unwrap();
    }
}
