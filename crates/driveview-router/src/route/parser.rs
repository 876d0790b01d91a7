//! Pattern compilation and matching
//!
//! Declared pattern strings are compiled once, when the table is built,
//! into a sequence of typed segments. Matching walks pattern and path
//! segments in lockstep; there is no backtracking.

use std::collections::HashSet;

use crate::error::RouteError;
use crate::params::{ParamValue, Params};
use crate::path::{decode_segment, encode_segment, normalize_path};

use super::pattern::{classify_segment, is_valid_param_name, PatternSegmentType};

/// A compiled route pattern such as `/list/:p*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<PatternSegmentType>,
}

/// Accumulator for the fold over declared segments
#[derive(Default)]
struct ParseState {
    segments: Vec<PatternSegmentType>,
    seen: HashSet<String>,
    closed: bool,
}

impl ParseState {
    fn push(mut self, raw: &str, segment: &str) -> Result<Self, RouteError> {
        if self.closed {
            return Err(RouteError::invalid(
                raw,
                "a catch-all capture must be the final segment",
            ));
        }

        let typed = classify_segment(segment);
        if let Some(name) = typed.param_name() {
            if !is_valid_param_name(name) {
                return Err(RouteError::invalid(
                    raw,
                    format!("invalid parameter name in segment `{}`", segment),
                ));
            }
            if !self.seen.insert(name.to_string()) {
                return Err(RouteError::DuplicateParam {
                    pattern: raw.to_string(),
                    param: name.to_string(),
                });
            }
        }

        // literals are compared against decoded path segments
        let typed = match typed {
            PatternSegmentType::Static(literal) => {
                PatternSegmentType::Static(decode_segment(&literal).into_owned())
            }
            other => other,
        };

        self.closed = matches!(typed, PatternSegmentType::CatchAll(_));
        self.segments.push(typed);
        Ok(self)
    }
}

impl Pattern {
    /// Compiles a pattern string
    ///
    /// # Examples
    ///
    /// ```
    /// use driveview_router::route::Pattern;
    ///
    /// let pattern = Pattern::parse("/list/:p*").unwrap();
    /// assert_eq!(pattern.as_str(), "/list/:p*");
    /// assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["p"]);
    ///
    /// assert!(Pattern::parse("list").is_err());
    /// assert!(Pattern::parse("/:rest*/tail").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        if !raw.starts_with('/') {
            return Err(RouteError::invalid(raw, "pattern must start with `/`"));
        }

        let normalized = normalize_path(raw);
        let state = crate::path::segments(&normalized)
            .try_fold(ParseState::default(), |state, segment| state.push(raw, segment))?;

        Ok(Self {
            raw: normalized.into_owned(),
            segments: state.segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[PatternSegmentType] {
        &self.segments
    }

    /// Capture names in declaration order
    pub fn param_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(PatternSegmentType::param_name)
    }

    /// True when the pattern is nothing but a trailing capture (`/*rest`),
    /// i.e. it matches every path
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [PatternSegmentType::CatchAll(_)])
    }

    /// True when the pattern has no captures
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, PatternSegmentType::Static(_)))
    }

    /// Matches already-split path segments against this pattern
    ///
    /// Captured values are percent-decoded. A trailing capture claims the
    /// whole remaining suffix.
    pub fn matches(&self, path_segments: &[&str], case_insensitive: bool) -> Option<Params> {
        fn match_segments(
            pattern: &[PatternSegmentType],
            path: &[&str],
            mut params: Params,
            case_insensitive: bool,
        ) -> Option<Params> {
            let Some((head, rest)) = pattern.split_first() else {
                return path.is_empty().then_some(params);
            };

            match head {
                PatternSegmentType::CatchAll(name) => {
                    let captured = path
                        .iter()
                        .map(|s| decode_segment(s).into_owned())
                        .collect();
                    params.insert(name.clone(), ParamValue::Multi(captured));
                    Some(params)
                }
                PatternSegmentType::Param(name) => {
                    let (first, tail) = path.split_first()?;
                    params.insert(
                        name.clone(),
                        ParamValue::Single(decode_segment(first).into_owned()),
                    );
                    match_segments(rest, tail, params, case_insensitive)
                }
                PatternSegmentType::Static(literal) => {
                    let (first, tail) = path.split_first()?;
                    let segment = decode_segment(first);
                    let equal = if case_insensitive {
                        literal.eq_ignore_ascii_case(&segment)
                    } else {
                        *literal == segment
                    };
                    if !equal {
                        return None;
                    }
                    match_segments(rest, tail, params, case_insensitive)
                }
            }
        }

        match_segments(&self.segments, path_segments, Params::new(), case_insensitive)
    }

    /// Builds a path from parameters
    ///
    /// Returns the name of the first single-segment capture that is missing,
    /// empty or not a single segment. A missing trailing capture is empty; a
    /// `Single` value given to a trailing capture is split on `/`.
    pub fn generate(&self, params: &Params) -> Result<String, String> {
        let mut out: Vec<String> = Vec::with_capacity(self.segments.len());

        for segment in &self.segments {
            match segment {
                PatternSegmentType::Static(literal) => {
                    out.push(encode_segment(literal).into_owned())
                }
                PatternSegmentType::Param(name) => {
                    let value = params
                        .get(name)
                        .and_then(ParamValue::as_single)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| name.clone())?;
                    out.push(encode_segment(value).into_owned());
                }
                PatternSegmentType::CatchAll(name) => match params.get(name) {
                    Some(ParamValue::Single(value)) => out.extend(
                        crate::path::segments(value).map(|s| encode_segment(s).into_owned()),
                    ),
                    Some(ParamValue::Multi(values)) => out.extend(
                        values
                            .iter()
                            .filter(|s| !s.is_empty())
                            .map(|s| encode_segment(s).into_owned()),
                    ),
                    None => {}
                },
            }
        }

        Ok(format!("/{}", out.join("/")))
    }
}
