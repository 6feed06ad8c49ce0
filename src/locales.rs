// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale tags and `.lproj` path construction.
//!
//! The default set mirrors the app's shipping languages: English,
//! Simplified Chinese, and Arabic. Tags are validated against the
//! BCP 47 shape (`language` plus optional subtags, e.g. `zh-Hans`)
//! before any project mutation happens, so a typo in `--locales` fails
//! the run instead of wiring a junk region into the descriptor.

use regex::Regex;

/// Locales wired when none are given on the command line.
pub const DEFAULT_LOCALES: [&str; 3] = ["en", "zh-Hans", "ar"];

pub fn default_locales() -> Vec<String> {
    DEFAULT_LOCALES.iter().map(|tag| tag.to_string()).collect()
}

/// Checks that a tag looks like a BCP 47 language tag: a 2-3 letter
/// primary subtag followed by optional 2-8 character subtags.
///
/// # Examples
/// ```
/// assert!(lproj_wire::locales::is_valid_locale_tag("en"));
/// assert!(lproj_wire::locales::is_valid_locale_tag("zh-Hans"));
/// assert!(!lproj_wire::locales::is_valid_locale_tag("english"));
/// ```
pub fn is_valid_locale_tag(tag: &str) -> bool {
    let shape = Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap();
    shape.is_match(tag)
}

/// Relative path of one locale variant inside its `.lproj` folder, e.g.
/// `zh-Hans.lproj/InfoPlist.strings`.
pub fn lproj_path(tag: &str, file_name: &str) -> String {
    format!("{}.lproj/{}", tag, file_name)
}
